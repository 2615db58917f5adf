//! Structural Swap Applier.
//!
//! A swap replaces a placeholder node with the specialized object an inflator
//! produced for it. Swaps are collected during the walk and applied here,
//! after the walk, as a pure hierarchy mutation.

use crate::ecs::Entity;
use crate::errors::{InflateError, Result};
use crate::scene::{NodeHandle, Scene};

/// A pending placeholder → replacement swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRecord {
    pub placeholder: NodeHandle,
    pub replacement: NodeHandle,
    /// The entity both objects belong to.
    pub entity: Entity,
}

/// Applies `swaps` in order.
///
/// For each record the placeholder's children move onto the replacement in
/// their original order, the local transform and uuid are copied over, and
/// the replacement takes the placeholder's slot under its parent. The
/// placeholder is left detached in the arena.
pub fn apply_swaps(scene: &mut Scene, root: NodeHandle, swaps: &[SwapRecord]) -> Result<()> {
    for record in swaps {
        apply_swap(scene, root, record)?;
    }

    if !swaps.is_empty() {
        log::debug!("Applied {} swaps", swaps.len());
    }
    Ok(())
}

fn apply_swap(scene: &mut Scene, root: NodeHandle, record: &SwapRecord) -> Result<()> {
    let SwapRecord {
        placeholder,
        replacement,
        ..
    } = *record;

    if placeholder == root {
        return Err(InflateError::RootSwap(placeholder));
    }

    let old = scene
        .get_node(placeholder)
        .ok_or(InflateError::NodeNotFound(placeholder))?;
    if !old.kind.is_placeholder() {
        return Err(InflateError::UnexpectedObjectKind {
            node: placeholder,
            kind: old.kind,
        });
    }
    if old.parent().is_none() {
        return Err(InflateError::DetachedPlaceholder(placeholder));
    }
    if scene.get_node(replacement).is_none() {
        return Err(InflateError::NodeNotFound(replacement));
    }

    let children = old.children().to_vec();
    let transform = old.transform.clone();
    let uuid = old.uuid;

    for child in children {
        scene.attach(child, replacement);
    }

    if let Some(new) = scene.get_node_mut(replacement) {
        new.transform.copy_trs_from(&transform);
        // Animation tracks target nodes by uuid.
        new.uuid = uuid;
    }

    let (parent, slot) = scene
        .detach(placeholder)
        .ok_or(InflateError::DetachedPlaceholder(placeholder))?;
    scene.insert_child_at(replacement, parent, slot);

    Ok(())
}
