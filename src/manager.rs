//! EntityManager - database-like access to components keyed by entity

use std::any::{self, TypeId};
use std::collections::HashMap;

use crate::component::{AnyStorage, Component, TypedStorage};
use crate::entity::{Entity, EntityId};
use crate::error::EcsError;

/// The component database.
///
/// Maps component type -> (entity id -> component instance). A component type
/// is present in the database iff at least one entity holds an instance of
/// it; tables emptied by a removal are pruned immediately.
///
/// Every operation taking an entity key accepts either an [`Entity`] or a raw
/// [`EntityId`] via `impl Into<EntityId>`.
pub struct EntityManager {
    database: HashMap<TypeId, Box<dyn AnyStorage>>,
    next_guid: EntityId,
}

impl EntityManager {
    pub fn new() -> Self {
        Self {
            database: HashMap::new(),
            next_guid: 0,
        }
    }

    /// Return a new entity with the current lowest unused GUID value.
    ///
    /// Does not store a reference to it and makes no database entries for it.
    /// Identifiers are strictly increasing and never reused for the lifetime
    /// of this manager, even after `remove_entity`.
    pub fn create_entity(&mut self) -> Entity {
        let entity = Entity::new(self.next_guid);
        self.next_guid += 1;
        entity
    }

    /// Add a component to the database, associated with the given entity.
    ///
    /// An entity holds at most one component per concrete type; adding a
    /// second instance of the same type overwrites the first.
    pub fn add_component<T: Component>(&mut self, entity_id: impl Into<EntityId>, component: T) {
        let id = entity_id.into();
        let storage = self
            .database
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(TypedStorage::<T>::new()));

        if let Some(storage) = storage.as_any_mut().downcast_mut::<TypedStorage<T>>() {
            storage.insert(id, component);
        }
    }

    /// Remove the component of type `T` associated with the entity.
    ///
    /// Doesn't do any kind of data teardown; that is up to the caller.
    /// A silent no-op if the entity has no such component or the type is
    /// unknown to the database.
    pub fn remove_component<T: Component>(&mut self, entity_id: impl Into<EntityId>) {
        let id = entity_id.into();
        let type_id = TypeId::of::<T>();
        if let Some(storage) = self.database.get_mut(&type_id) {
            storage.remove(id);
            if storage.is_empty() {
                self.database.remove(&type_id);
            }
        }
    }

    /// Return the instance of `T` stored for the entity.
    ///
    /// Fails with [`EcsError::NonexistentComponentType`] naming the entity
    /// and the component type if the entity has no such component.
    pub fn component_for_entity<T: Component>(
        &self,
        entity_id: impl Into<EntityId>,
    ) -> Result<&T, EcsError> {
        let id = entity_id.into();
        self.storage::<T>()
            .and_then(|storage| storage.get(id))
            .ok_or(EcsError::NonexistentComponentType {
                entity: id,
                component_type: any::type_name::<T>(),
            })
    }

    /// Mutable variant of [`component_for_entity`](Self::component_for_entity).
    pub fn component_for_entity_mut<T: Component>(
        &mut self,
        entity_id: impl Into<EntityId>,
    ) -> Result<&mut T, EcsError> {
        let id = entity_id.into();
        self.storage_mut::<T>()
            .and_then(|storage| storage.get_mut(id))
            .ok_or(EcsError::NonexistentComponentType {
                entity: id,
                component_type: any::type_name::<T>(),
            })
    }

    /// Check whether the entity holds a component of type `T`.
    pub fn has_component<T: Component>(&self, entity_id: impl Into<EntityId>) -> bool {
        let id = entity_id.into();
        self.storage::<T>()
            .map(|storage| storage.contains(id))
            .unwrap_or(false)
    }

    /// Iterate over all `(entity_id, component)` pairs for component type `T`.
    ///
    /// Empty if no entity holds a component of this type. Order is stable for
    /// a given sequence of additions but otherwise unspecified. Typical use:
    ///
    /// ```
    /// # use tinyecs::{Component, EntityManager};
    /// # struct Renderable;
    /// # impl Component for Renderable {}
    /// # let manager = EntityManager::new();
    /// for (entity_id, renderable) in manager.pairs_for_type::<Renderable>() {
    ///     // do something
    /// }
    /// ```
    pub fn pairs_for_type<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.storage::<T>().into_iter().flat_map(|s| s.iter())
    }

    /// Mutable variant of [`pairs_for_type`](Self::pairs_for_type).
    pub fn pairs_for_type_mut<T: Component>(
        &mut self,
    ) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.storage_mut::<T>()
            .into_iter()
            .flat_map(|s| s.iter_mut())
    }

    /// Remove all components associated with the entity, with the side effect
    /// that the entity is no longer present in the database.
    ///
    /// Types whose tables become empty are pruned. A silent no-op for
    /// entities with no components.
    pub fn remove_entity(&mut self, entity_id: impl Into<EntityId>) {
        let id = entity_id.into();
        // retain keeps traversal safe while tables are pruned mid-walk
        self.database.retain(|_, storage| {
            storage.remove(id);
            !storage.is_empty()
        });
    }

    /// Number of component types currently holding at least one instance.
    pub fn component_type_count(&self) -> usize {
        self.database.len()
    }

    fn storage<T: Component>(&self) -> Option<&TypedStorage<T>> {
        self.database
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any().downcast_ref::<TypedStorage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut TypedStorage<T>> {
        self.database
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<TypedStorage<T>>())
    }
}

impl Default for EntityManager {
    fn default() -> Self {
        Self::new()
    }
}
