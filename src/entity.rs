//! Entity identifiers

use std::fmt;

/// Entity ID type - simple numeric GUID
pub type EntityId = u64;

/// A lightweight handle encapsulating a GUID for use as a database key.
///
/// Entities carry no state beyond their identifier. Equality and hashing are
/// defined purely on the id, and an `Entity` compares equal to a raw
/// [`EntityId`] with the same value, so either form can key the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entity {
    id: EntityId,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }
}

impl From<Entity> for EntityId {
    fn from(entity: Entity) -> Self {
        entity.id
    }
}

impl PartialEq<EntityId> for Entity {
    fn eq(&self, other: &EntityId) -> bool {
        self.id == *other
    }
}

impl PartialEq<Entity> for EntityId {
    fn eq(&self, other: &Entity) -> bool {
        *self == other.id
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}
