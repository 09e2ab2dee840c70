//! Note aggregate attached to todos.

use crate::identity::{EntityId, Identified, Identity, IdentityClock, SystemClock};
use crate::model::{render_timestamp, Model};
use crate::validation::{ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Free-text remark written by an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(flatten)]
    identity: Identity,
    pub name: String,
    pub description: String,
    pub author: String,
}

impl Note {
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self::new_with_clock(&SystemClock, name, author)
    }

    pub fn new_with_clock(
        clock: &impl IdentityClock,
        name: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::with_identity(clock.next_identity(), name, author)
    }

    pub fn with_identity(
        identity: Identity,
        name: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            name: name.into(),
            description: String::new(),
            author: author.into(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.identity.id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.identity.creation_date
    }
}

impl Identified for Note {
    fn id(&self) -> EntityId {
        self.identity.id
    }
}

impl Model for Note {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator
            .is_not_empty(&self.author, "The author must not be empty")
            .is_not_empty(&self.name, "The name must not be empty");
        validator.all_valid()
    }
}

impl Display for Note {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{\n  id: {},\n  creation_date: \"{}\",\n  name: \"{}\",\n  description: \"{}\",\n  author: \"{}\"\n}}",
            self.identity.id,
            render_timestamp(&self.identity.creation_date),
            self.name,
            self.description,
            self.author
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Note;
    use crate::model::Model;

    #[test]
    fn validate_reports_author_then_name() {
        let err = Note::new("", "").validate().unwrap_err();
        assert_eq!(
            err.messages(),
            ["The author must not be empty", "The name must not be empty"]
        );
    }

    #[test]
    fn validate_accepts_complete_note() {
        assert!(Note::new("context", "jane").validate().is_ok());
    }

    #[test]
    fn missing_author_alone_is_reported() {
        let err = Note::new("context", "").validate().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.contains("author"));
    }
}
