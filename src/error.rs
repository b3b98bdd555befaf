//! Library error types

use thiserror::Error;

use crate::entity::EntityId;

/// Errors surfaced by the entity and system managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EcsError {
    /// An entity was asked for a component type it does not have.
    #[error("nonexistent component type `{component_type}` for entity `{entity}`")]
    NonexistentComponentType {
        entity: EntityId,
        component_type: &'static str,
    },

    /// A second system of an already-registered concrete type was added.
    #[error("duplicate system type `{system_type}`")]
    DuplicateSystemType { system_type: &'static str },
}
