//! Component storage keyed by entity id

use std::any::Any;
use std::collections::HashMap;

use crate::entity::EntityId;

/// Trait for components
pub trait Component: Send + Sync + 'static {}

/// Type-erased view of a single component type's table, letting the manager
/// cascade-delete and prune without knowing the concrete type.
pub(crate) trait AnyStorage: Send + Sync {
    fn remove(&mut self, entity_id: EntityId) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Concrete storage for a specific component type
pub(crate) struct TypedStorage<T: Component> {
    data: HashMap<EntityId, T>,
}

impl<T: Component> TypedStorage<T> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    pub fn insert(&mut self, entity_id: EntityId, component: T) {
        self.data.insert(entity_id, component);
    }

    pub fn get(&self, entity_id: EntityId) -> Option<&T> {
        self.data.get(&entity_id)
    }

    pub fn get_mut(&mut self, entity_id: EntityId) -> Option<&mut T> {
        self.data.get_mut(&entity_id)
    }

    pub fn contains(&self, entity_id: EntityId) -> bool {
        self.data.contains_key(&entity_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &T)> {
        self.data.iter().map(|(id, comp)| (*id, comp))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (EntityId, &mut T)> {
        self.data.iter_mut().map(|(id, comp)| (*id, comp))
    }
}

impl<T: Component> Default for TypedStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> AnyStorage for TypedStorage<T> {
    fn remove(&mut self, entity_id: EntityId) -> bool {
        self.data.remove(&entity_id).is_some()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Position {
        x: f32,
        y: f32,
    }
    impl Component for Position {}

    #[test]
    fn test_typed_storage() {
        let mut storage = TypedStorage::<Position>::new();

        storage.insert(1, Position { x: 1.0, y: 2.0 });
        storage.insert(2, Position { x: 3.0, y: 4.0 });

        assert_eq!(storage.len(), 2);
        assert!(storage.contains(1));
        assert!(!storage.contains(3));

        let pos = storage.get(1).unwrap();
        assert_eq!(pos.x, 1.0);

        assert!(storage.remove(1));
        assert!(!storage.contains(1));
        assert!(!storage.remove(1));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_insert_overwrites() {
        let mut storage = TypedStorage::<Position>::new();

        storage.insert(1, Position { x: 1.0, y: 2.0 });
        storage.insert(1, Position { x: 9.0, y: 9.0 });

        assert_eq!(storage.len(), 1);
        assert_eq!(storage.get(1), Some(&Position { x: 9.0, y: 9.0 }));
    }

    #[test]
    fn test_iteration() {
        let mut storage = TypedStorage::<Position>::new();

        storage.insert(1, Position { x: 1.0, y: 2.0 });
        storage.insert(2, Position { x: 3.0, y: 4.0 });

        assert_eq!(storage.iter().count(), 2);

        for (_id, pos) in storage.iter_mut() {
            pos.x += 1.0;
        }

        assert_eq!(storage.get(1).unwrap().x, 2.0);
    }

    #[test]
    fn test_erased_view_reports_type_name() {
        let storage = TypedStorage::<Position>::new();
        let erased: &dyn AnyStorage = &storage;
        assert!(erased.type_name().ends_with("Position"));
        assert!(erased.is_empty());
    }
}
