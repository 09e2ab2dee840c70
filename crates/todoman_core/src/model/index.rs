//! Standalone registry of named items, independent of boards and todos.

use crate::collection::OrderedUniqueCollection;
use crate::identity::{EntityId, Identified};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named entry keyed by an id chosen by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: EntityId,
    pub name: String,
}

impl Item {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Item with a freshly generated id.
    pub fn generate(name: impl Into<String>) -> Self {
        Self::new(Uuid::new_v4(), name)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl Identified for Item {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub items: OrderedUniqueCollection<Item>,
}

impl Index {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) -> bool {
        self.items.add(item)
    }

    pub fn remove_item(&mut self, id: EntityId) -> Option<Item> {
        self.items.remove(&id)
    }

    pub fn has_item(&self, id: EntityId) -> bool {
        self.items.has(&id)
    }

    pub fn item(&self, id: EntityId) -> Option<&Item> {
        self.items.find(&id)
    }

    /// First item, in insertion order, whose name equals `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&Item> {
        self.items.find_by(|item| item.name == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
