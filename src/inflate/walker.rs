//! Node Walker.
//!
//! Visits every node of a model once in depth-first pre-order, decides the
//! entity of each node, inflates its components and materials, and records
//! which placeholders must be swapped for a specialized object.

use smallvec::SmallVec;

use crate::ecs::{Entity, add_object3d_component};
use crate::errors::{InflateError, Result};
use crate::inflate::components::{inflate_components, inflate_material};
use crate::inflate::index::IndexRegistry;
use crate::inflate::registry::InflatorRegistry;
use crate::inflate::swap::SwapRecord;
use crate::inflate::InflateContext;
use crate::scene::{MaterialKey, NodeHandle};

/// Result of a walk.
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub index: IndexRegistry,
    /// Pending swaps in document order.
    pub swaps: Vec<SwapRecord>,
    /// Every visited node, in visit order.
    pub visited: Vec<NodeHandle>,
}

/// Walks the model rooted at `model`, binding it to `root_entity`.
pub fn walk(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    root_entity: Entity,
    model: NodeHandle,
) -> Result<WalkOutput> {
    if ctx.scene.get_node(model).is_none() {
        return Err(InflateError::NodeNotFound(model));
    }

    let mut out = WalkOutput {
        visited: ctx.scene.descendants(model),
        ..Default::default()
    };

    for &handle in &out.visited {
        let node = ctx.scene.get_node(handle).ok_or(InflateError::NodeNotFound(handle))?;
        let kind = node.kind;
        let gltf_index = node.user_data.gltf_index;
        let components = node.user_data.components.clone();
        let materials: SmallVec<[MaterialKey; 1]> = node.materials.clone();

        let entity = if handle == model {
            root_entity
        } else if let Some(entity) = gltf_index.and_then(|i| out.index.node_entity(i)) {
            entity
        } else {
            ctx.world.spawn()
        };

        if let Some(i) = gltf_index {
            out.index.claim_node(i, handle)?;
            out.index.register_node(i, entity);
        }
        log::trace!("Node {handle:?} (index {gltf_index:?}) -> {entity:?}");

        if let Some(components) = &components {
            inflate_components(ctx, registry, &mut out.index, entity, components)?;
        }

        for key in materials {
            inflate_material(ctx, registry, &mut out.index, key)?;
        }

        match ctx.world.object(entity) {
            Some(replacement) => {
                if !kind.is_placeholder() {
                    log::error!("Node {handle:?} of kind {kind:?} was replaced by {replacement:?}");
                    return Err(InflateError::UnexpectedObjectKind { node: handle, kind });
                }
                if handle == model {
                    log::error!("Root node {handle:?} was replaced by {replacement:?}");
                    return Err(InflateError::RootReplaced);
                }
                out.swaps.push(SwapRecord {
                    placeholder: handle,
                    replacement,
                    entity,
                });
            }
            None => add_object3d_component(ctx.world, entity, handle),
        }
    }

    log::debug!(
        "Walked {} nodes: {} indexed, {} materials, {} swaps",
        out.visited.len(),
        out.index.node_count(),
        out.index.material_count(),
        out.swaps.len()
    );

    Ok(out)
}
