//! Scene Graph
//!
//! The hierarchy the inflation pipeline reads from and mutates:
//! - [`Node`]: scene node with hierarchy, transform, render flags and the
//!   declarative user data loaded from the asset
//! - [`Transform`]: local TRS with cached matrices and dirty tracking
//! - [`Material`]: shared material resource
//! - [`Scene`]: arena owning nodes and materials

pub mod material;
pub mod node;
pub mod scene;
pub mod transform;

pub use material::Material;
pub use node::{Node, ObjectKind, UserData};
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
    pub struct MaterialKey;
}
