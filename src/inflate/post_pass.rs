//! Post-pass special handlers.
//!
//! A few declarations act on the live object hierarchy instead of on
//! component data, so they run after every swap has been applied:
//!
//! - `visible { visible }` sets the live object's visibility
//! - `shadow { cast, receive }` sets shadow flags on the live subtree
//! - `frustum { culled }` sets frustum culling on the live subtree
//!   (`frustrum` is accepted as a legacy spelling and overrides `frustum`)

use rustc_hash::FxHashMap;

use crate::decl::{ComponentMap, PropertyBag};
use crate::inflate::swap::SwapRecord;
use crate::scene::{NodeHandle, Scene};

/// Applies the special declarations of every node in `visited`.
///
/// `visited` is the original input graph; each node acts on its live object,
/// which is the swap replacement if it was swapped and the node itself
/// otherwise.
pub fn apply_special_components(scene: &mut Scene, visited: &[NodeHandle], swaps: &[SwapRecord]) {
    let live: FxHashMap<NodeHandle, NodeHandle> = swaps
        .iter()
        .map(|s| (s.placeholder, s.replacement))
        .collect();

    for &handle in visited {
        let Some(components) = scene
            .get_node(handle)
            .and_then(|n| n.user_data.components.as_ref())
            .map(SpecialComponents::from_map)
        else {
            continue;
        };
        let target = live.get(&handle).copied().unwrap_or(handle);
        components.apply(scene, target);
    }
}

/// The special declarations of one node, extracted so the scene can be
/// mutated while applying them.
#[derive(Debug, Default)]
struct SpecialComponents {
    visible: Option<bool>,
    shadow: Option<(bool, bool)>,
    frustum_culled: Option<bool>,
}

impl SpecialComponents {
    fn from_map(components: &ComponentMap) -> Self {
        let flag = |bag: &PropertyBag, key: &str, default: bool| {
            bag.get(key).and_then(|v| v.as_bool()).unwrap_or(default)
        };

        Self {
            visible: components.get("visible").map(|b| flag(b, "visible", true)),
            shadow: components
                .get("shadow")
                .map(|b| (flag(b, "cast", false), flag(b, "receive", false))),
            frustum_culled: components
                .get("frustrum")
                .or_else(|| components.get("frustum"))
                .map(|b| flag(b, "culled", false)),
        }
    }

    fn apply(&self, scene: &mut Scene, target: NodeHandle) {
        if let Some(visible) = self.visible
            && let Some(node) = scene.get_node_mut(target)
        {
            node.visible = visible;
        }

        if self.shadow.is_none() && self.frustum_culled.is_none() {
            return;
        }

        for handle in scene.descendants(target) {
            let Some(node) = scene.get_node_mut(handle) else {
                continue;
            };
            if let Some((cast, receive)) = self.shadow {
                node.cast_shadow = cast;
                node.receive_shadow = receive;
            }
            if let Some(culled) = self.frustum_culled {
                node.frustum_culled = culled;
            }
        }
    }
}
