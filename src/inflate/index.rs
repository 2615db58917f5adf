//! Index Registry.
//!
//! Maps the externally-defined glTF node and material indices onto entities
//! for the duration of one inflation call. It also owns the material side
//! table (material resource → entity) so that a material is never written to
//! while it is being inflated.

use rustc_hash::FxHashMap;

use crate::ecs::Entity;
use crate::errors::{InflateError, Result};
use crate::scene::{MaterialKey, NodeHandle};

#[derive(Debug, Default)]
pub struct IndexRegistry {
    nodes: FxHashMap<usize, Entity>,
    node_claims: FxHashMap<usize, NodeHandle>,
    materials: FxHashMap<usize, Entity>,
    material_cache: FxHashMap<MaterialKey, Entity>,
}

impl IndexRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Nodes ===

    #[inline]
    #[must_use]
    pub fn node_entity(&self, index: usize) -> Option<Entity> {
        self.nodes.get(&index).copied()
    }

    /// Records `index → entity`. The last registration wins.
    pub fn register_node(&mut self, index: usize, entity: Entity) {
        self.nodes.insert(index, entity);
    }

    /// Records that the graph node `handle` owns `index`.
    ///
    /// Claiming an index twice with the same node is a no-op; claiming it
    /// with a different node is an error.
    pub fn claim_node(&mut self, index: usize, handle: NodeHandle) -> Result<()> {
        match self.node_claims.get(&index) {
            Some(&first) if first != handle => Err(InflateError::DuplicateNodeIndex {
                index,
                first,
                second: handle,
            }),
            Some(_) => Ok(()),
            None => {
                self.node_claims.insert(index, handle);
                Ok(())
            }
        }
    }

    /// Whether some graph node has claimed `index`, as opposed to it only
    /// being allocated by a forward link.
    #[must_use]
    pub fn is_claimed(&self, index: usize) -> bool {
        self.node_claims.contains_key(&index)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.nodes.iter().map(|(&i, &e)| (i, e))
    }

    // === Materials ===

    #[inline]
    #[must_use]
    pub fn material_entity(&self, index: usize) -> Option<Entity> {
        self.materials.get(&index).copied()
    }

    pub fn register_material(&mut self, index: usize, entity: Entity) {
        self.materials.insert(index, entity);
    }

    /// The entity a material resource was inflated to, if any.
    #[inline]
    #[must_use]
    pub fn cached_material(&self, key: MaterialKey) -> Option<Entity> {
        self.material_cache.get(&key).copied()
    }

    pub fn cache_material(&mut self, key: MaterialKey, entity: Entity) {
        self.material_cache.insert(key, entity);
    }

    #[must_use]
    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    pub fn materials(&self) -> impl Iterator<Item = (usize, Entity)> + '_ {
        self.materials.iter().map(|(&i, &e)| (i, e))
    }
}
