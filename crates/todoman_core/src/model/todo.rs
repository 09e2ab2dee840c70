//! Todo aggregate and its status/priority enumerations.

use crate::collection::OrderedUniqueCollection;
use crate::identity::{EntityId, Identified, Identity, IdentityClock, SystemClock};
use crate::model::note::Note;
use crate::model::{render_optional_timestamp, render_timestamp, Model};
use crate::validation::{ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lifecycle state of a todo. Persisted as its numeric code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TodoStatus {
    #[default]
    New,
    Started,
    Paused,
    Finished,
    Done,
}

impl TodoStatus {
    pub fn code(self) -> u8 {
        match self {
            Self::New => 0,
            Self::Started => 1,
            Self::Paused => 2,
            Self::Finished => 3,
            Self::Done => 4,
        }
    }
}

impl From<TodoStatus> for u8 {
    fn from(value: TodoStatus) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for TodoStatus {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::New),
            1 => Ok(Self::Started),
            2 => Ok(Self::Paused),
            3 => Ok(Self::Finished),
            4 => Ok(Self::Done),
            _ => Err(UnknownCode {
                kind: "todo status",
                code,
            }),
        }
    }
}

/// Ordered urgency of a todo, `Lowest` < ... < `Highest`.
///
/// Codes start at 1 so that 0 never decodes to a valid priority.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum TodoPriority {
    Lowest,
    Lower,
    Low,
    #[default]
    Normal,
    High,
    Higher,
    Highest,
}

impl TodoPriority {
    pub fn code(self) -> u8 {
        match self {
            Self::Lowest => 1,
            Self::Lower => 2,
            Self::Low => 3,
            Self::Normal => 4,
            Self::High => 5,
            Self::Higher => 6,
            Self::Highest => 7,
        }
    }
}

impl From<TodoPriority> for u8 {
    fn from(value: TodoPriority) -> Self {
        value.code()
    }
}

impl TryFrom<u8> for TodoPriority {
    type Error = UnknownCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Lowest),
            2 => Ok(Self::Lower),
            3 => Ok(Self::Low),
            4 => Ok(Self::Normal),
            5 => Ok(Self::High),
            6 => Ok(Self::Higher),
            7 => Ok(Self::Highest),
            _ => Err(UnknownCode {
                kind: "todo priority",
                code,
            }),
        }
    }
}

/// Numeric code that maps to no enumeration variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u8,
}

impl Display for UnknownCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} code: {}", self.kind, self.code)
    }
}

impl Error for UnknownCode {}

/// A unit of work with optional schedule dates and attached notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(flatten)]
    identity: Identity,
    /// Required; validation rejects an empty name.
    pub name: String,
    pub description: String,
    pub status: TodoStatus,
    pub priority: TodoPriority,
    pub complete_date: Option<DateTime<Utc>>,
    pub start_date: Option<DateTime<Utc>>,
    pub notes: OrderedUniqueCollection<Note>,
}

impl Todo {
    /// Creates a `New`, `Normal`-priority todo with a fresh identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self::new_with_clock(&SystemClock, name)
    }

    pub fn new_with_clock(clock: &impl IdentityClock, name: impl Into<String>) -> Self {
        Self::with_identity(clock.next_identity(), name)
    }

    /// Creates a todo around an identity that already exists elsewhere.
    pub fn with_identity(identity: Identity, name: impl Into<String>) -> Self {
        Self {
            identity,
            name: name.into(),
            description: String::new(),
            status: TodoStatus::default(),
            priority: TodoPriority::default(),
            complete_date: None,
            start_date: None,
            notes: OrderedUniqueCollection::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.identity.id
    }

    pub fn identity(&self) -> Identity {
        self.identity
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.identity.creation_date
    }

    /// Attaches `note` unless a note with the same id is already attached.
    pub fn add_note(&mut self, note: Note) -> bool {
        self.notes.add(note)
    }

    /// Detaches the note with `id`, handing it back when present.
    pub fn remove_note(&mut self, id: EntityId) -> Option<Note> {
        self.notes.remove(&id)
    }

    pub fn has_note(&self, id: EntityId) -> bool {
        self.notes.has(&id)
    }

    pub fn note(&self, id: EntityId) -> Option<&Note> {
        self.notes.find(&id)
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        validator.is_not_empty(&self.name, "The name must not be empty");
    }

    pub(crate) fn fmt_fields(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  id: {},", self.identity.id)?;
        writeln!(
            f,
            "  creation_date: \"{}\",",
            render_timestamp(&self.identity.creation_date)
        )?;
        writeln!(f, "  name: \"{}\",", self.name)?;
        writeln!(f, "  description: \"{}\",", self.description)?;
        writeln!(f, "  status: {},", self.status.code())?;
        writeln!(
            f,
            "  complete_date: \"{}\",",
            render_optional_timestamp(self.complete_date.as_ref())
        )?;
        writeln!(
            f,
            "  start_date: \"{}\",",
            render_optional_timestamp(self.start_date.as_ref())
        )?;
        writeln!(f, "  priority: {},", self.priority.code())?;
        writeln!(f, "  notes: {}", self.notes.len())
    }
}

impl Identified for Todo {
    fn id(&self) -> EntityId {
        self.identity.id
    }
}

impl Model for Todo {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        self.validate_into(&mut validator);
        validator.all_valid()
    }
}

impl Display for Todo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{{")?;
        self.fmt_fields(f)?;
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Todo, TodoPriority, TodoStatus, UnknownCode};
    use crate::model::note::Note;
    use crate::model::Model;

    #[test]
    fn new_todo_has_defaults() {
        let todo = Todo::new("Write report");
        assert_eq!(todo.status, TodoStatus::New);
        assert_eq!(todo.priority, TodoPriority::Normal);
        assert!(todo.description.is_empty());
        assert!(todo.complete_date.is_none());
        assert!(todo.start_date.is_none());
        assert!(todo.notes.is_empty());
    }

    #[test]
    fn priority_is_ordered_from_lowest_to_highest() {
        assert!(TodoPriority::Lowest < TodoPriority::Normal);
        assert!(TodoPriority::Normal < TodoPriority::Highest);
        assert_eq!(TodoPriority::Lowest.code(), 1);
        assert_eq!(TodoPriority::Highest.code(), 7);
    }

    #[test]
    fn codes_round_trip_and_reject_unknown_values() {
        for code in 0..=4_u8 {
            let status = TodoStatus::try_from(code).unwrap();
            assert_eq!(u8::from(status), code);
        }
        assert_eq!(
            TodoPriority::try_from(0),
            Err(UnknownCode {
                kind: "todo priority",
                code: 0
            })
        );
        assert!(TodoStatus::try_from(5).is_err());
    }

    #[test]
    fn notes_are_unique_by_id() {
        let mut todo = Todo::new("with notes");
        let note = Note::new("context", "jane");
        let id = note.id();

        assert!(todo.add_note(note.clone()));
        assert!(!todo.add_note(note));
        assert!(todo.has_note(id));
        assert_eq!(todo.note(id).map(|n| n.name.as_str()), Some("context"));

        assert!(todo.remove_note(id).is_some());
        assert!(!todo.has_note(id));
        assert!(todo.remove_note(id).is_none());
    }

    #[test]
    fn validate_requires_name() {
        assert!(Todo::new("ok").validate().is_ok());
        let err = Todo::new("").validate().unwrap_err();
        assert_eq!(err.messages(), ["The name must not be empty"]);
    }

    #[test]
    fn display_lists_fields() {
        let rendered = Todo::new("render me").to_string();
        assert!(rendered.contains("name: \"render me\""));
        assert!(rendered.contains("priority: 4"));
    }
}
