//! Model Inflation
//!
//! Compiles a loaded glTF scene graph into entities and components.
//!
//! # Pipeline
//!
//! [`inflate_model`] runs four phases, each to completion before the next:
//!
//! 1. **Walk** ([`walker`]): every node of the model, depth-first pre-order.
//!    Nodes get entities (the root gets the caller's), component
//!    declarations go through the [`InflatorRegistry`], materials are
//!    inflated once each, and placeholders claimed by a specialized object
//!    are recorded as swaps.
//! 2. **Swap** ([`swap`]): specialized objects take their placeholder's place,
//!    children and transform.
//! 3. **Post-pass** ([`post_pass`]): visibility, shadow and culling
//!    declarations applied to the live hierarchy.
//! 4. **Behavior graph** ([`behavior`]): link markers in the root's behavior
//!    graph are rewritten to entities.
//!
//! Any error aborts the call with no cleanup; the caller must discard
//! everything the call allocated.
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = InflatorRegistry::with_defaults();
//! let mut ctx = InflateContext::new(&mut world, &mut scene, &mut interner);
//! let root = ctx.world.spawn();
//! inflate_model(&mut ctx, &registry, root, ModelParams { model })?;
//! ```

pub mod behavior;
pub mod components;
pub mod index;
pub mod link;
pub mod post_pass;
pub mod registry;
pub mod swap;
pub mod walker;

pub use index::IndexRegistry;
pub use registry::{InflatorFn, InflatorRegistry, InflatorRegistryBuilder};
pub use swap::{SwapRecord, apply_swaps};

use crate::ecs::{BehaviorGraph, Entity, GltfModel, MixerAnimatable, World};
use crate::errors::{InflateError, Result};
use crate::scene::{NodeHandle, Scene};
use crate::utils::Interner;

/// Component names handled outside the inflator registry. They are skipped
/// during the walk regardless of what the registry contains.
pub const RESERVED_COMPONENTS: &[&str] = &["visible", "frustum", "frustrum", "shadow", "networked"];

/// Everything an inflation call and its inflators may touch.
pub struct InflateContext<'a> {
    pub world: &'a mut World,
    pub scene: &'a mut Scene,
    pub interner: &'a mut Interner,
}

impl<'a> InflateContext<'a> {
    pub fn new(world: &'a mut World, scene: &'a mut Scene, interner: &'a mut Interner) -> Self {
        Self {
            world,
            scene,
            interner,
        }
    }
}

/// Parameters of [`inflate_model`].
#[derive(Debug, Clone, Copy)]
pub struct ModelParams {
    /// Root node of the loaded model.
    pub model: NodeHandle,
}

/// Inflates the model rooted at `params.model` onto `root_entity`.
///
/// Returns the index registry of the call, mapping glTF node and material
/// indices to the entities they were inflated to.
pub fn inflate_model(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    root_entity: Entity,
    params: ModelParams,
) -> Result<IndexRegistry> {
    let model = params.model;

    let walk = walker::walk(ctx, registry, root_entity, model)?;
    let walker::WalkOutput {
        mut index,
        swaps,
        visited,
    } = walk;

    apply_swaps(ctx.scene, model, &swaps)?;
    post_pass::apply_special_components(ctx.scene, &visited, &swaps);

    // Not restored on error: a failed call leaves the model to be discarded.
    let graph = ctx
        .scene
        .get_node_mut(model)
        .ok_or(InflateError::NodeNotFound(model))?
        .user_data
        .behavior_graph
        .take();

    if let Some(mut graph) = graph {
        behavior::rewrite_behavior_graph(ctx, registry, &mut index, &mut graph)?;
        if let Some(root) = ctx.scene.get_node_mut(model) {
            root.user_data.behavior_graph = Some(graph);
        }
        ctx.world.insert(root_entity, BehaviorGraph);
    }

    ctx.world.insert(root_entity, GltfModel);
    ctx.world.insert(root_entity, MixerAnimatable);

    for swap in &swaps {
        ctx.scene.remove_node(swap.placeholder);
    }

    log::debug!(
        "Inflated model {model:?} onto {root_entity:?}: {} nodes indexed, {} materials",
        index.node_count(),
        index.material_count()
    );

    Ok(index)
}
