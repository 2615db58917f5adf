//! Entity Component Store
//!
//! - [`World`]: entity allocation and typed component columns
//! - [`components`]: the component kinds the inflation pipeline attaches
//!   itself (live object binding, material tag, model markers)

pub mod components;
pub mod world;

pub use components::{
    BehaviorGraph, GltfModel, MaterialRef, MaterialTag, MixerAnimatable, Object3D,
    add_material_component, add_object3d_component,
};
pub use world::{Entity, World};
