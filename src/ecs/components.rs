//! Component kinds attached directly by the inflation pipeline.

use crate::ecs::world::{Entity, World};
use crate::scene::{MaterialKey, NodeHandle};

/// Binds an entity to its live scene object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Object3D(pub NodeHandle);

/// Marks an entity as a material.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialTag;

/// The material resource a material entity was inflated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialRef(pub MaterialKey);

/// Marks a model root whose behavior graph links have been resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct BehaviorGraph;

/// Marks the root entity of an inflated glTF model.
#[derive(Debug, Clone, Copy, Default)]
pub struct GltfModel;

/// Marks an entity whose object hierarchy can be driven by an animation mixer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixerAnimatable;

/// Binds `entity` to the scene object `handle`.
///
/// This is how both the generic placeholder and specialized objects created
/// by inflators are registered.
pub fn add_object3d_component(world: &mut World, entity: Entity, handle: NodeHandle) {
    world.insert(entity, Object3D(handle));
}

/// Tags `entity` as the material `key`.
pub fn add_material_component(world: &mut World, entity: Entity, key: MaterialKey) {
    world.insert(entity, MaterialTag);
    world.insert(entity, MaterialRef(key));
}
