use smallvec::SmallVec;
use uuid::Uuid;

use crate::decl::{ComponentMap, GraphJson};
use crate::scene::transform::Transform;
use crate::scene::{MaterialKey, NodeHandle};

/// Object type tag of a scene node.
///
/// [`ObjectKind::Object3D`] is the generic placeholder every glTF node starts
/// as. All other kinds are specialized objects, usually created by an
/// inflator that claims the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObjectKind {
    #[default]
    Object3D,
    Group,
    Mesh,
    SkinnedMesh,
    Bone,
    Light,
    Camera,
    Audio,
}

impl ObjectKind {
    /// Whether this is the generic placeholder kind.
    #[inline]
    #[must_use]
    pub fn is_placeholder(self) -> bool {
        self == ObjectKind::Object3D
    }
}

/// Declarative data carried over from the asset file.
#[derive(Debug, Clone, Default)]
pub struct UserData {
    /// Index of the node in the source glTF, if it had one.
    pub gltf_index: Option<usize>,
    /// Component declarations (`MOZ_hubs_components` extension).
    pub components: Option<ComponentMap>,
    /// Embedded behavior graph; only meaningful on the model root.
    pub behavior_graph: Option<GraphJson>,
}

/// A scene node.
///
/// # Hierarchy
///
/// - `parent`: Optional handle to parent node (None for root nodes)
/// - `children`: Ordered list of child node handles
///
/// Use [`Scene::attach`](crate::scene::Scene::attach) and friends to change
/// the hierarchy so both sides stay in sync.
#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    /// Stable identifier used by animation tracks to find their target.
    pub uuid: Uuid,
    pub kind: ObjectKind,

    pub(crate) parent: Option<NodeHandle>,
    pub(crate) children: Vec<NodeHandle>,

    pub transform: Transform,

    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub frustum_culled: bool,

    /// Materials of the renderable payload, in primitive order.
    pub materials: SmallVec<[MaterialKey; 1]>,

    pub user_data: UserData,
}

impl Node {
    /// Creates a generic placeholder node.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self::with_kind(name, ObjectKind::Object3D)
    }

    #[must_use]
    pub fn with_kind(name: &str, kind: ObjectKind) -> Self {
        Self {
            name: name.to_string(),
            uuid: Uuid::new_v4(),
            kind,
            parent: None,
            children: Vec::new(),
            transform: Transform::new(),
            visible: true,
            cast_shadow: false,
            receive_shadow: false,
            frustum_culled: true,
            materials: SmallVec::new(),
            user_data: UserData::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    // === Builder helpers ===

    #[must_use]
    pub fn with_gltf_index(mut self, index: usize) -> Self {
        self.user_data.gltf_index = Some(index);
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.user_data.components = Some(components);
        self
    }

    #[must_use]
    pub fn with_material(mut self, material: MaterialKey) -> Self {
        self.materials.push(material);
        self
    }

    #[must_use]
    pub fn with_behavior_graph(mut self, graph: GraphJson) -> Self {
        self.user_data.behavior_graph = Some(graph);
        self
    }

    #[must_use]
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Default for Node {
    fn default() -> Self {
        Self::new("")
    }
}
