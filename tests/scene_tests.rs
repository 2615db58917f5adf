//! Scene Integration Tests
//!
//! Tests for:
//! - Scene: add/remove nodes, attach/detach hierarchy
//! - Slot-preserving insertion and detached nodes
//! - Node query: pre-order traversal, uuid and name lookup
//! - Materials

use myth_inflate::scene::{Material, Node, ObjectKind, Scene};

// ============================================================================
// Node Creation & Removal
// ============================================================================

#[test]
fn scene_add_node_to_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("root"));
    assert!(scene.root_nodes.contains(&handle));
    assert_eq!(scene.get_node(handle).unwrap().name, "root");
}

#[test]
fn scene_add_detached_is_not_a_root() {
    let mut scene = Scene::new();
    let handle = scene.add_detached(Node::with_kind("mesh", ObjectKind::Mesh));
    assert!(scene.get_node(handle).is_some());
    assert!(!scene.root_nodes.contains(&handle));
    assert_eq!(scene.get_node(handle).unwrap().parent(), None);
}

#[test]
fn scene_remove_node_removes_from_root() {
    let mut scene = Scene::new();
    let handle = scene.add_node(Node::new("root"));

    scene.remove_node(handle);
    assert!(!scene.root_nodes.contains(&handle));
    assert!(scene.get_node(handle).is_none());
}

#[test]
fn scene_remove_node_removes_subtree() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.add_to_parent(Node::new("child"), parent);
    let grandchild = scene.add_to_parent(Node::new("grandchild"), child);

    scene.remove_node(child);

    assert!(scene.get_node(child).is_none());
    assert!(scene.get_node(grandchild).is_none());
    assert!(scene.get_node(parent).unwrap().children().is_empty());
}

// ============================================================================
// Hierarchy
// ============================================================================

#[test]
fn scene_attach_sets_parent_child() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.add_node(Node::new("child"));

    scene.attach(child, parent);

    assert_eq!(scene.get_node(child).unwrap().parent(), Some(parent));
    assert_eq!(scene.get_node(parent).unwrap().children(), &[child]);
    assert!(!scene.root_nodes.contains(&child));
}

#[test]
fn scene_attach_removes_from_old_parent() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));
    let child = scene.add_to_parent(Node::new("child"), a);

    scene.attach(child, b);

    assert!(scene.get_node(a).unwrap().children().is_empty());
    assert_eq!(scene.get_node(b).unwrap().children(), &[child]);
    assert_eq!(scene.get_node(child).unwrap().parent(), Some(b));
}

#[test]
fn scene_attach_to_self_is_noop() {
    let mut scene = Scene::new();
    let node = scene.add_node(Node::new("node"));

    scene.attach(node, node);

    assert_eq!(scene.get_node(node).unwrap().parent(), None);
    assert!(scene.get_node(node).unwrap().children().is_empty());
}

#[test]
fn scene_attach_marks_child_dirty() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let child = scene.add_node(Node::new("child"));
    scene.update_matrix_world();
    assert!(!scene.get_node(child).unwrap().transform.is_dirty());

    scene.attach(child, parent);
    assert!(scene.get_node(child).unwrap().transform.is_dirty());
}

#[test]
fn scene_insert_child_at_keeps_slot() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let a = scene.add_to_parent(Node::new("a"), parent);
    let c = scene.add_to_parent(Node::new("c"), parent);
    let b = scene.add_detached(Node::new("b"));

    scene.insert_child_at(b, parent, 1);
    assert_eq!(scene.get_node(parent).unwrap().children(), &[a, b, c]);

    // Out of range slots append.
    let d = scene.add_detached(Node::new("d"));
    scene.insert_child_at(d, parent, 99);
    assert_eq!(scene.get_node(parent).unwrap().children(), &[a, b, c, d]);
}

#[test]
fn scene_detach_returns_parent_and_slot() {
    let mut scene = Scene::new();
    let parent = scene.add_node(Node::new("parent"));
    let _a = scene.add_to_parent(Node::new("a"), parent);
    let b = scene.add_to_parent(Node::new("b"), parent);

    assert_eq!(scene.detach(b), Some((parent, 1)));
    assert_eq!(scene.get_node(b).unwrap().parent(), None);
    assert!(scene.get_node(b).is_some());
    assert_eq!(scene.detach(b), None);
}

// ============================================================================
// Query
// ============================================================================

#[test]
fn scene_descendants_are_pre_order() {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("root"));
    let a = scene.add_to_parent(Node::new("a"), root);
    let a1 = scene.add_to_parent(Node::new("a1"), a);
    let a2 = scene.add_to_parent(Node::new("a2"), a);
    let b = scene.add_to_parent(Node::new("b"), root);
    let b1 = scene.add_to_parent(Node::new("b1"), b);

    assert_eq!(scene.descendants(root), vec![root, a, a1, a2, b, b1]);
    assert_eq!(scene.descendants(b), vec![b, b1]);
}

#[test]
fn scene_find_by_uuid_and_name() {
    let mut scene = Scene::new();
    let root = scene.add_node(Node::new("root"));
    let door = scene.add_to_parent(Node::new("door"), root);
    let uuid = scene.get_node(door).unwrap().uuid;

    assert_eq!(scene.find_by_uuid(uuid), Some(door));
    assert_eq!(scene.find_by_name(root, "door"), Some(door));
    assert_eq!(scene.find_by_name(root, "window"), None);
}

#[test]
fn scene_unique_uuids() {
    let mut scene = Scene::new();
    let a = scene.add_node(Node::new("a"));
    let b = scene.add_node(Node::new("b"));
    assert_ne!(scene.get_node(a).unwrap().uuid, scene.get_node(b).unwrap().uuid);
}

// ============================================================================
// Materials
// ============================================================================

#[test]
fn scene_add_material() {
    let mut scene = Scene::new();
    let key = scene.add_material(Material::new(3).with_name("Wood"));

    let material = scene.get_material(key).unwrap();
    assert_eq!(material.gltf_index, 3);
    assert_eq!(material.name.as_deref(), Some("Wood"));
    assert!(material.components.is_none());
}
