//! Core domain model for todoman.
//! This crate is the single source of truth for business invariants:
//! collection uniqueness, the daily effort cap, and accumulated validation.

pub mod collection;
pub mod duration;
pub mod identity;
pub mod message;
pub mod model;
pub mod validation;

pub use collection::OrderedUniqueCollection;
pub use duration::{format_duration, parse_duration};
pub use identity::{EntityId, FixedClock, Identified, Identity, IdentityClock, SystemClock};
pub use message::{MessageLevel, Messenger};
pub use model::agile_todo::{daily_effort_cap, AgileTodo, EffortRejection, DAILY_EFFORT_CAP_HOURS};
pub use model::board::Board;
pub use model::colour::{Colour, ColourParseError};
pub use model::effort::Effort;
pub use model::index::{Index, Item};
pub use model::note::Note;
pub use model::todo::{Todo, TodoPriority, TodoStatus, UnknownCode};
pub use model::Model;
pub use validation::{ValidationError, Validator};

/// Minimal health-check API for linkage probes.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
