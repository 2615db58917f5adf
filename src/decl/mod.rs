//! Declarative Input
//!
//! The shapes the inflation pipeline consumes from an asset file:
//! - [`PropertyBag`] / [`ComponentMap`]: component declarations on nodes and
//!   materials, with embedded [`LinkMarker`]s
//! - [`GraphJson`]: the optional behavior graph attached to a model root
//!
//! Both parse from `serde_json::Value` and serialize back to JSON.

pub mod behavior;
pub mod props;

pub use behavior::{GraphJson, GraphNodeJson, ParameterJson};
pub use props::{
    ComponentMap, LINK_TYPE_KEY, LinkKind, LinkMarker, PropValue, PropertyBag, parse_component_map,
    parse_property_bag,
};
