//! A minimal entity-component-system library.
//!
//! Entities are opaque integer GUIDs handed out by an [`EntityManager`],
//! which also stores components keyed by (component type, entity). Systems
//! implement [`System`] and are run in ascending priority order, once per
//! tick, by a [`SystemManager`].

pub mod component;
pub mod entity;
pub mod error;
pub mod manager;
pub mod system;

pub use component::Component;
pub use entity::{Entity, EntityId};
pub use error::EcsError;
pub use manager::EntityManager;
pub use system::{System, SystemManager};
