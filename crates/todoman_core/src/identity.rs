//! Identity assignment for aggregates.
//!
//! # Responsibility
//! - Generate a process-unique id and a creation timestamp for new aggregates.
//! - Provide the `Identified` seam used by collections to key their members.
//!
//! # Invariants
//! - An `Identity` is assigned once at construction and never reassigned.
//! - `EntityId` equality is the sole membership key in every collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier shared by every aggregate.
pub type EntityId = Uuid;

/// Identity block embedded in every aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique id, never reused for another aggregate.
    pub id: EntityId,
    /// Wall-clock instant the aggregate was created.
    pub creation_date: DateTime<Utc>,
}

impl Identity {
    /// Builds an identity from externally known parts (import/sync paths).
    pub fn new(id: EntityId, creation_date: DateTime<Utc>) -> Self {
        Self { id, creation_date }
    }

    /// Generates a fresh identity from the system clock.
    pub fn generate() -> Self {
        SystemClock.next_identity()
    }
}

/// Source of identities for newly constructed aggregates.
pub trait IdentityClock {
    fn next_identity(&self) -> Identity;
}

/// Default clock: random v4 ids stamped with the current UTC time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl IdentityClock for SystemClock {
    fn next_identity(&self) -> Identity {
        Identity::new(Uuid::new_v4(), Utc::now())
    }
}

/// Clock with a frozen timestamp. Ids are still unique per call.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self { at }
    }
}

impl IdentityClock for FixedClock {
    fn next_identity(&self) -> Identity {
        Identity::new(Uuid::new_v4(), self.at)
    }
}

/// Anything that exposes a stable identity.
pub trait Identified {
    fn id(&self) -> EntityId;
}

#[cfg(test)]
mod tests {
    use super::{FixedClock, Identity, IdentityClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn system_clock_never_repeats_ids() {
        let first = SystemClock.next_identity();
        let second = SystemClock.next_identity();
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }

    #[test]
    fn fixed_clock_freezes_timestamp_only() {
        let at = Utc.with_ymd_and_hms(2022, 1, 1, 8, 30, 0).unwrap();
        let clock = FixedClock::new(at);
        let first = clock.next_identity();
        let second = clock.next_identity();
        assert_eq!(first.creation_date, at);
        assert_eq!(second.creation_date, at);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn generate_uses_current_time() {
        let before = Utc::now();
        let identity = Identity::generate();
        assert!(identity.creation_date >= before);
    }
}
