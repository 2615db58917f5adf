//! Entity/component store.
//!
//! [`World`] allocates [`Entity`] handles and stores typed component columns.
//! Each component type gets its own `SecondaryMap` column, created on first
//! insert and looked up by `TypeId`.

use std::any::{Any, TypeId};

use rustc_hash::FxHashMap;
use slotmap::{Key, KeyData, SecondaryMap, SlotMap, new_key_type};

use crate::ecs::components::Object3D;
use crate::scene::NodeHandle;

new_key_type! {
    /// Opaque entity handle.
    pub struct Entity;
}

impl Entity {
    /// Returns the opaque integer form of this handle.
    #[inline]
    #[must_use]
    pub fn to_bits(self) -> u64 {
        self.data().as_ffi()
    }

    /// Rebuilds a handle from [`to_bits`](Self::to_bits).
    #[inline]
    #[must_use]
    pub fn from_bits(bits: u64) -> Self {
        KeyData::from_ffi(bits).into()
    }
}

/// Type-erased component column.
trait ErasedColumn: Any {
    fn remove_entity(&mut self, entity: Entity);
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> ErasedColumn for SecondaryMap<Entity, T> {
    fn remove_entity(&mut self, entity: Entity) {
        self.remove(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The entity/component store.
#[derive(Default)]
pub struct World {
    entities: SlotMap<Entity, ()>,
    columns: FxHashMap<TypeId, Box<dyn ErasedColumn>>,
}

impl World {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Entities
    // ========================================================================

    /// Allocates a new entity with no components.
    pub fn spawn(&mut self) -> Entity {
        self.entities.insert(())
    }

    /// Destroys an entity and drops all of its components.
    pub fn despawn(&mut self, entity: Entity) {
        if self.entities.remove(entity).is_some() {
            for column in self.columns.values_mut() {
                column.remove_entity(entity);
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.contains_key(entity)
    }

    /// Number of live entities.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all live entities.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.keys()
    }

    // ========================================================================
    // Components
    // ========================================================================

    fn column<T: 'static>(&self) -> Option<&SecondaryMap<Entity, T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref())
    }

    fn column_mut<T: 'static>(&mut self) -> Option<&mut SecondaryMap<Entity, T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut())
    }

    /// Attaches a component, replacing any previous value of the same type.
    ///
    /// Returns the previous value. Inserting onto a dead entity is ignored.
    pub fn insert<T: 'static>(&mut self, entity: Entity, component: T) -> Option<T> {
        if !self.is_alive(entity) {
            log::warn!("Ignoring component insert on dead entity {entity:?}");
            return None;
        }

        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(SecondaryMap::<Entity, T>::new()));

        column
            .as_any_mut()
            .downcast_mut::<SecondaryMap<Entity, T>>()
            .and_then(|c| c.insert(entity, component))
    }

    /// Whether `entity` has a component of type `T`.
    #[must_use]
    pub fn has<T: 'static>(&self, entity: Entity) -> bool {
        self.column::<T>().is_some_and(|c| c.contains_key(entity))
    }

    #[must_use]
    pub fn get<T: 'static>(&self, entity: Entity) -> Option<&T> {
        self.column::<T>()?.get(entity)
    }

    pub fn get_mut<T: 'static>(&mut self, entity: Entity) -> Option<&mut T> {
        self.column_mut::<T>()?.get_mut(entity)
    }

    pub fn remove<T: 'static>(&mut self, entity: Entity) -> Option<T> {
        self.column_mut::<T>()?.remove(entity)
    }

    /// Iterates over every entity that has a `T`.
    pub fn query<T: 'static>(&self) -> impl Iterator<Item = (Entity, &T)> + '_ {
        self.column::<T>().into_iter().flat_map(|c| c.iter())
    }

    /// Number of entities that have a `T`.
    #[must_use]
    pub fn count<T: 'static>(&self) -> usize {
        self.column::<T>().map_or(0, SecondaryMap::len)
    }

    // ========================================================================
    // Live objects
    // ========================================================================

    /// Returns the live scene object bound to `entity`, if any.
    #[inline]
    #[must_use]
    pub fn object(&self, entity: Entity) -> Option<NodeHandle> {
        self.get::<Object3D>(entity).map(|o| o.0)
    }

    /// Finds the entity bound to a live scene object.
    #[must_use]
    pub fn entity_of(&self, handle: NodeHandle) -> Option<Entity> {
        self.query::<Object3D>()
            .find_map(|(e, o)| (o.0 == handle).then_some(e))
    }
}
