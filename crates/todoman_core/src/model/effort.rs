//! Effort records logged against agile todos.

use crate::duration::format_duration;
use crate::identity::{EntityId, Identified, IdentityClock, SystemClock};
use crate::model::{render_timestamp, Model};
use crate::validation::{ValidationError, Validator};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Work logged on one calendar day.
///
/// Only the UTC calendar day of `date` matters to the daily ledger; the
/// time-of-day component is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Effort {
    id: EntityId,
    pub date: DateTime<Utc>,
    #[serde(with = "crate::duration::nanos")]
    pub duration: Duration,
    pub description: String,
}

impl Effort {
    pub fn new(date: DateTime<Utc>, duration: Duration) -> Self {
        Self::new_with_clock(&SystemClock, date, duration)
    }

    pub fn new_with_clock(clock: &impl IdentityClock, date: DateTime<Utc>, duration: Duration) -> Self {
        Self::with_id(clock.next_identity().id, date, duration)
    }

    pub fn with_id(id: EntityId, date: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            id,
            date,
            duration,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Calendar day (UTC) this effort counts towards.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }

    pub fn falls_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}

impl Identified for Effort {
    fn id(&self) -> EntityId {
        self.id
    }
}

impl Model for Effort {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .is_date_defined(&self.date, "The effort date is not defined")
            .check(
                self.duration > Duration::zero(),
                "The duration must not be zero",
            );
        validator.all_valid()
    }
}

impl Display for Effort {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{\n  id: {},\n  date: \"{}\",\n  duration: {},\n  description: \"{}\"\n}}",
            self.id,
            render_timestamp(&self.date),
            format_duration(self.duration),
            self.description
        )
    }
}
