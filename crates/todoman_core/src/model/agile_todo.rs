//! Agile todo and its daily effort ledger.
//!
//! # Responsibility
//! - Extend a `Todo` (by composition) with estimation fields and logged effort.
//! - Gate every effort insert on the daily effort cap.
//!
//! # Invariants
//! - For every UTC calendar day, the durations of attached efforts dated that
//!   day sum to at most `DAILY_EFFORT_CAP_HOURS` hours.
//! - A rejected insert leaves the ledger untouched.
//! - Efforts are only reachable mutably through `add_effort`/`remove_effort`,
//!   so the cap cannot be bypassed.

use crate::collection::OrderedUniqueCollection;
use crate::duration::format_duration;
use crate::identity::{EntityId, Identified, Identity, IdentityClock, SystemClock};
use crate::model::effort::Effort;
use crate::model::note::Note;
use crate::model::todo::Todo;
use crate::model::Model;
use crate::validation::{ValidationError, Validator};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound of logged effort per calendar day.
pub const DAILY_EFFORT_CAP_HOURS: i64 = 24;

pub fn daily_effort_cap() -> Duration {
    Duration::hours(DAILY_EFFORT_CAP_HOURS)
}

/// Why an effort was not attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffortRejection {
    /// An effort with this id is already attached.
    DuplicateId(EntityId),
    /// Zero or negative durations cannot be logged.
    NonPositiveDuration(Duration),
    /// Attaching would push the day's total past the cap.
    DailyCapExceeded {
        day: NaiveDate,
        logged: Duration,
        requested: Duration,
    },
}

impl Display for EffortRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "effort already logged: {id}"),
            Self::NonPositiveDuration(duration) => write!(
                f,
                "effort duration must be positive, got {}",
                format_duration(*duration)
            ),
            Self::DailyCapExceeded {
                day,
                logged,
                requested,
            } => write!(
                f,
                "effort of {} on {day} exceeds the daily cap ({} already logged, cap {}h)",
                format_duration(*requested),
                format_duration(*logged),
                DAILY_EFFORT_CAP_HOURS
            ),
        }
    }
}

impl Error for EffortRejection {}

/// A todo with estimation points, an estimated duration and logged effort.
///
/// Deserialization replays every effort through the ledger, so persisted
/// data that breaks the daily cap is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AgileTodoSnapshot")]
pub struct AgileTodo {
    #[serde(flatten)]
    pub todo: Todo,
    pub points: u8,
    #[serde(with = "crate::duration::nanos")]
    pub estimated_duration: Duration,
    efforts: OrderedUniqueCollection<Effort>,
}

#[derive(Deserialize)]
struct AgileTodoSnapshot {
    #[serde(flatten)]
    todo: Todo,
    points: u8,
    #[serde(with = "crate::duration::nanos")]
    estimated_duration: Duration,
    efforts: Vec<Effort>,
}

impl TryFrom<AgileTodoSnapshot> for AgileTodo {
    type Error = EffortRejection;

    fn try_from(snapshot: AgileTodoSnapshot) -> Result<Self, Self::Error> {
        let mut agile = Self::from_todo(snapshot.todo);
        agile.points = snapshot.points;
        agile.estimated_duration = snapshot.estimated_duration;
        for effort in snapshot.efforts {
            agile.try_add_effort(effort)?;
        }
        Ok(agile)
    }
}

impl AgileTodo {
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_with_clock(&SystemClock, name)
    }

    pub fn new_with_clock(clock: &impl IdentityClock, name: impl Into<String>) -> Self {
        Self::with_identity(clock.next_identity(), name)
    }

    pub fn with_identity(identity: Identity, name: impl Into<String>) -> Self {
        Self::from_todo(Todo::with_identity(identity, name))
    }

    /// Promotes a plain todo, keeping its identity and notes.
    pub fn from_todo(todo: Todo) -> Self {
        Self {
            todo,
            points: 0,
            estimated_duration: Duration::zero(),
            efforts: OrderedUniqueCollection::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.todo.id()
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.todo.creation_date()
    }

    pub fn add_note(&mut self, note: Note) -> bool {
        self.todo.add_note(note)
    }

    pub fn remove_note(&mut self, id: EntityId) -> Option<Note> {
        self.todo.remove_note(id)
    }

    pub fn has_note(&self, id: EntityId) -> bool {
        self.todo.has_note(id)
    }

    /// Attaches `effort` when the daily cap allows it.
    ///
    /// Returns `false` (and changes nothing) for a duplicate id, a
    /// non-positive duration, or a day that would exceed the cap.
    pub fn add_effort(&mut self, effort: Effort) -> bool {
        self.try_add_effort(effort).is_ok()
    }

    /// Same as [`AgileTodo::add_effort`], reporting the rejection reason.
    pub fn try_add_effort(&mut self, effort: Effort) -> Result<(), EffortRejection> {
        if self.efforts.has(&effort.id()) {
            return Err(EffortRejection::DuplicateId(effort.id()));
        }
        if effort.duration <= Duration::zero() {
            return Err(EffortRejection::NonPositiveDuration(effort.duration));
        }

        let day = effort.day();
        let logged = self.logged_on(day);
        // `logged` never exceeds the cap, so the remainder cannot overflow.
        if effort.duration > daily_effort_cap() - logged {
            return Err(EffortRejection::DailyCapExceeded {
                day,
                logged,
                requested: effort.duration,
            });
        }

        self.efforts.add(effort);
        Ok(())
    }

    pub fn remove_effort(&mut self, id: EntityId) -> Option<Effort> {
        self.efforts.remove(&id)
    }

    pub fn has_effort(&self, id: EntityId) -> bool {
        self.efforts.has(&id)
    }

    pub fn efforts(&self) -> &OrderedUniqueCollection<Effort> {
        &self.efforts
    }

    /// Efforts logged on `day`, in insertion order.
    pub fn get_efforts_for(&self, day: NaiveDate) -> Vec<&Effort> {
        self.efforts.filter(move |effort| effort.falls_on(day)).collect()
    }

    /// Total duration logged on `day`.
    pub fn logged_on(&self, day: NaiveDate) -> Duration {
        self.efforts
            .filter(move |effort| effort.falls_on(day))
            .fold(Duration::zero(), |total, effort| total + effort.duration)
    }

    /// Capacity still available on `day` before hitting the cap.
    pub fn remaining_on(&self, day: NaiveDate) -> Duration {
        daily_effort_cap() - self.logged_on(day)
    }

    /// Total duration logged across all days.
    pub fn total_effort(&self) -> Duration {
        self.efforts
            .iter()
            .fold(Duration::zero(), |total, effort| total + effort.duration)
    }
}

impl Identified for AgileTodo {
    fn id(&self) -> EntityId {
        self.todo.id()
    }
}

impl Model for AgileTodo {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        self.todo.validate_into(&mut validator);
        validator.all_valid()
    }
}

impl Display for AgileTodo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        self.todo.fmt_fields(f)?;
        writeln!(f, "  points: {},", self.points)?;
        writeln!(
            f,
            "  estimated_duration: {},",
            format_duration(self.estimated_duration)
        )?;
        writeln!(f, "  efforts: {}", self.efforts.len())?;
        write!(f, "}}")
    }
}
