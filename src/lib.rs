//! # Myth Inflate
//!
//! Compiles loaded glTF scene graphs (nodes, materials, per-node and
//! per-material component declarations and an optional behavior graph) into
//! an entity-component [`World`].
//!
//! ```rust,ignore
//! use myth_inflate::prelude::*;
//!
//! let registry = InflatorRegistry::with_defaults();
//! let mut ctx = InflateContext::new(&mut world, &mut scene, &mut interner);
//! let root = ctx.world.spawn();
//! let index = inflate_model(&mut ctx, &registry, root, ModelParams { model })?;
//! ```
//!
//! See [`inflate`] for the pipeline.

pub mod decl;
pub mod ecs;
pub mod errors;
pub mod inflate;
pub mod inflators;
pub mod media;
pub mod scene;
pub mod utils;

pub use decl::{ComponentMap, GraphJson, LinkMarker, PropValue, PropertyBag};
pub use ecs::{Entity, World};
pub use errors::{InflateError, Result};
pub use inflate::{
    IndexRegistry, InflateContext, InflatorFn, InflatorRegistry, ModelParams, inflate_model,
};
pub use scene::{Material, Node, ObjectKind, Scene, Transform};
pub use utils::Interner;

pub mod prelude {
    pub use crate::decl::{
        ComponentMap, GraphJson, GraphNodeJson, LinkMarker, ParameterJson, PropValue, PropertyBag,
    };
    pub use crate::ecs::{Entity, World, add_object3d_component};
    pub use crate::errors::{InflateError, Result};
    pub use crate::inflate::{
        IndexRegistry, InflateContext, InflatorFn, InflatorRegistry, ModelParams, inflate_model,
    };
    pub use crate::scene::{Material, Node, NodeHandle, ObjectKind, Scene, Transform};
    pub use crate::utils::Interner;
}
