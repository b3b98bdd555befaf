//! System trait and the priority-ordered system manager

use std::any::{self, TypeId};
use std::collections::HashSet;

use anyhow::Result;

use crate::error::EcsError;
use crate::manager::EntityManager;

/// A unit of per-tick behavior operating on the entity database.
///
/// The system manager calls [`update`](System::update) once per tick, passing
/// the elapsed time and the shared entity manager. An update may fail with
/// any error; the manager propagates it to the caller unchanged.
pub trait System: Send + Sync {
    /// Diagnostic name, defaulting to the concrete type name.
    fn name(&self) -> &'static str {
        any::type_name::<Self>()
    }

    fn update(&mut self, dt: f64, entities: &mut EntityManager) -> Result<()>;
}

struct SystemSlot {
    type_id: TypeId,
    priority: i32,
    system: Box<dyn System>,
}

/// A container and scheduler for [`System`] instances.
///
/// Holds at most one system per concrete type, ordered by ascending priority
/// with insertion order breaking ties, and runs them all once per
/// [`update`](SystemManager::update) call.
pub struct SystemManager {
    systems: Vec<SystemSlot>,
    system_types: HashSet<TypeId>,
}

impl SystemManager {
    pub fn new() -> Self {
        Self {
            systems: Vec::new(),
            system_types: HashSet::new(),
        }
    }

    /// Add a system with the default priority of 0.
    pub fn add_system<S: System + 'static>(&mut self, system: S) -> Result<(), EcsError> {
        self.add_system_with_priority(system, 0)
    }

    /// Add a system to be updated according to the given priority, lower
    /// numbers first. Systems sharing a priority run in registration order.
    ///
    /// Fails with [`EcsError::DuplicateSystemType`] if a system of the same
    /// concrete type is already registered; the manager is left unchanged.
    pub fn add_system_with_priority<S: System + 'static>(
        &mut self,
        system: S,
        priority: i32,
    ) -> Result<(), EcsError> {
        let type_id = TypeId::of::<S>();
        if !self.system_types.insert(type_id) {
            return Err(EcsError::DuplicateSystemType {
                system_type: any::type_name::<S>(),
            });
        }

        self.systems.push(SystemSlot {
            type_id,
            priority,
            system: Box::new(system),
        });
        // sort_by_key is stable, preserving insertion order among ties
        self.systems.sort_by_key(|slot| slot.priority);
        Ok(())
    }

    /// Stop running the system of type `S` and hand its instance back.
    ///
    /// Returns `None` if no system of that type is registered.
    pub fn remove_system<S: System + 'static>(&mut self) -> Option<Box<dyn System>> {
        let type_id = TypeId::of::<S>();
        if !self.system_types.remove(&type_id) {
            return None;
        }
        let index = self.systems.iter().position(|slot| slot.type_id == type_id)?;
        Some(self.systems.remove(index).system)
    }

    /// Run each registered system once, in priority order, for this tick.
    ///
    /// The first failing system aborts the tick: systems ordered after it are
    /// not run, and its error propagates to the caller. There is no rollback
    /// of component mutations already applied this tick.
    pub fn update(&mut self, dt: f64, entities: &mut EntityManager) -> Result<()> {
        for slot in &mut self.systems {
            slot.system.update(dt, entities)?;
        }
        Ok(())
    }

    /// Check whether a system of type `S` is registered.
    pub fn contains<S: System + 'static>(&self) -> bool {
        self.system_types.contains(&TypeId::of::<S>())
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.systems.is_empty()
    }
}

impl Default for SystemManager {
    fn default() -> Self {
        Self::new()
    }
}
