//! Board aggregate: a named, coloured container of todos.

use crate::collection::OrderedUniqueCollection;
use crate::identity::{EntityId, Identified, Identity, IdentityClock, SystemClock};
use crate::model::colour::Colour;
use crate::model::todo::Todo;
use crate::model::{render_timestamp, Model};
use crate::validation::{ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(flatten)]
    identity: Identity,
    pub name: String,
    pub description: String,
    pub colour: Colour,
    /// Display order is insertion order.
    pub todos: OrderedUniqueCollection<Todo>,
}

impl Board {
    pub fn new(name: impl Into<String>, colour: Colour) -> Self {
        Self::new_with_clock(&SystemClock, name, colour)
    }

    pub fn new_with_clock(
        clock: &impl IdentityClock,
        name: impl Into<String>,
        colour: Colour,
    ) -> Self {
        Self::with_identity(clock.next_identity(), name, colour)
    }

    pub fn with_identity(identity: Identity, name: impl Into<String>, colour: Colour) -> Self {
        Self {
            identity,
            name: name.into(),
            description: String::new(),
            colour,
            todos: OrderedUniqueCollection::new(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.identity.id
    }

    pub fn creation_date(&self) -> DateTime<Utc> {
        self.identity.creation_date
    }

    /// Adds `todo` at the end unless a todo with the same id is on the board.
    pub fn add_todo(&mut self, todo: Todo) -> bool {
        self.todos.add(todo)
    }

    /// Takes the todo off the board. The todo itself survives and is returned.
    pub fn remove_todo(&mut self, id: EntityId) -> Option<Todo> {
        self.todos.remove(&id)
    }

    pub fn has_todo(&self, id: EntityId) -> bool {
        self.todos.has(&id)
    }

    pub fn todo(&self, id: EntityId) -> Option<&Todo> {
        self.todos.find(&id)
    }

    pub fn todo_mut(&mut self, id: EntityId) -> Option<&mut Todo> {
        self.todos.find_mut(&id)
    }
}

impl Identified for Board {
    fn id(&self) -> EntityId {
        self.identity.id
    }
}

impl Model for Board {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut validator = Validator::new();
        validator.is_not_empty(&self.name, "The board name must not be empty");
        validator.all_valid()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{\n  id: {},\n  creation_date: \"{}\",\n  name: \"{}\",\n  description: \"{}\",\n  colour: {},\n  todos: {}\n}}",
            self.identity.id,
            render_timestamp(&self.identity.creation_date),
            self.name,
            self.description,
            self.colour,
            self.todos.len()
        )
    }
}
