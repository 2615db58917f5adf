use glam::Affine3A;
use slotmap::SlotMap;
use uuid::Uuid;

use crate::scene::material::Material;
use crate::scene::node::Node;
use crate::scene::{MaterialKey, NodeHandle};

/// Scene graph container.
///
/// Owns every node and material. Nodes without a parent are tracked in
/// `root_nodes`; a node removed from its parent with [`Scene::detach`] stays in
/// the arena as a free-standing node until it is attached elsewhere or removed.
pub struct Scene {
    pub nodes: SlotMap<NodeHandle, Node>,
    pub materials: SlotMap<MaterialKey, Material>,
    pub root_nodes: Vec<NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            materials: SlotMap::with_key(),
            root_nodes: Vec::new(),
        }
    }

    // ========================================================================
    // Node creation & removal
    // ========================================================================

    /// Adds a node to the scene as a root node.
    pub fn add_node(&mut self, node: Node) -> NodeHandle {
        let handle = self.nodes.insert(node);
        self.root_nodes.push(handle);
        handle
    }

    /// Adds a node to the arena without placing it in the hierarchy.
    ///
    /// Used by inflators that build a specialized object which will later be
    /// swapped into the hierarchy.
    pub fn add_detached(&mut self, node: Node) -> NodeHandle {
        self.nodes.insert(node)
    }

    /// Adds a node as the last child of `parent`.
    pub fn add_to_parent(&mut self, child: Node, parent: NodeHandle) -> NodeHandle {
        let handle = self.nodes.insert(child);
        self.attach(handle, parent);
        handle
    }

    /// Removes a node and its whole subtree.
    pub fn remove_node(&mut self, handle: NodeHandle) {
        let Some(children) = self.nodes.get(handle).map(|n| n.children.clone()) else {
            return;
        };

        for child in children {
            self.remove_node(child);
        }

        self.unlink(handle);
        self.nodes.remove(handle);
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Appends `child` to `parent`'s children, detaching it from its old
    /// parent first.
    pub fn attach(&mut self, child: NodeHandle, parent: NodeHandle) {
        let slot = self.nodes.get(parent).map_or(0, |p| p.children.len());
        self.insert_child_at(child, parent, slot);
    }

    /// Inserts `child` into `parent`'s children at `slot`, detaching it from
    /// its old parent first. `slot` is clamped to the children count.
    pub fn insert_child_at(&mut self, child: NodeHandle, parent: NodeHandle, slot: usize) {
        if child == parent {
            log::warn!("Cannot attach node to itself!");
            return;
        }
        if !self.nodes.contains_key(child) {
            log::error!("Child node not found during attach!");
            return;
        }
        if !self.nodes.contains_key(parent) {
            log::error!("Parent node not found during attach!");
            return;
        }

        self.unlink(child);

        if let Some(p) = self.nodes.get_mut(parent) {
            let slot = slot.min(p.children.len());
            p.children.insert(slot, child);
        }

        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = Some(parent);
            c.transform.mark_dirty();
        }
    }

    /// Removes `child` from its parent, leaving it free-standing in the arena.
    ///
    /// Returns the former parent and the slot the child occupied, or `None`
    /// if the node had no parent.
    pub fn detach(&mut self, child: NodeHandle) -> Option<(NodeHandle, usize)> {
        let parent = self.nodes.get(child)?.parent?;
        let slot = self
            .nodes
            .get(parent)?
            .children
            .iter()
            .position(|&c| c == child)?;

        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.remove(slot);
        }
        if let Some(c) = self.nodes.get_mut(child) {
            c.parent = None;
        }

        Some((parent, slot))
    }

    /// Drops every hierarchy link of `handle` to its parent or the root list.
    fn unlink(&mut self, handle: NodeHandle) {
        if self.detach(handle).is_none()
            && let Some(i) = self.root_nodes.iter().position(|&x| x == handle)
        {
            self.root_nodes.remove(i);
        }
    }

    // ========================================================================
    // Lookup & traversal
    // ========================================================================

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Returns `root` and all of its descendants in depth-first pre-order
    /// (parent before children, sibling order preserved).
    #[must_use]
    pub fn descendants(&self, root: NodeHandle) -> Vec<NodeHandle> {
        let mut out = Vec::new();
        let mut stack = vec![root];

        while let Some(handle) = stack.pop() {
            let Some(node) = self.nodes.get(handle) else {
                continue;
            };
            out.push(handle);
            stack.extend(node.children.iter().rev().copied());
        }

        out
    }

    /// Finds a node by its stable uuid.
    #[must_use]
    pub fn find_by_uuid(&self, uuid: Uuid) -> Option<NodeHandle> {
        self.nodes
            .iter()
            .find_map(|(handle, node)| (node.uuid == uuid).then_some(handle))
    }

    /// Finds the first node with the given name under `root`.
    #[must_use]
    pub fn find_by_name(&self, root: NodeHandle, name: &str) -> Option<NodeHandle> {
        self.descendants(root)
            .into_iter()
            .find(|&h| self.nodes.get(h).is_some_and(|n| n.name == name))
    }

    // ========================================================================
    // Materials
    // ========================================================================

    pub fn add_material(&mut self, material: Material) -> MaterialKey {
        self.materials.insert(material)
    }

    #[must_use]
    pub fn get_material(&self, key: MaterialKey) -> Option<&Material> {
        self.materials.get(key)
    }

    // ========================================================================
    // Matrix update
    // ========================================================================

    /// Updates local and world matrices of every node reachable from the
    /// root nodes.
    pub fn update_matrix_world(&mut self) {
        let mut stack: Vec<(NodeHandle, Affine3A, bool)> = self
            .root_nodes
            .iter()
            .rev()
            .map(|&h| (h, Affine3A::IDENTITY, false))
            .collect();

        while let Some((handle, parent_world, parent_changed)) = stack.pop() {
            let Some(node) = self.nodes.get_mut(handle) else {
                continue;
            };

            let local_changed = node.transform.update_local_matrix();
            let changed = local_changed || parent_changed;
            if changed {
                let world = parent_world * node.transform.local_matrix;
                node.transform.set_world_matrix(world);
            }

            let world = node.transform.world_matrix;
            stack.extend(node.children.iter().rev().map(|&c| (c, world, changed)));
        }
    }
}
