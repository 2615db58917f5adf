//! Property bags and link markers.
//!
//! A component declaration is a string-keyed [`PropertyBag`]. Its values are
//! primitives, nested bags, arrays, or [`LinkMarker`]s: typed forward
//! references to another node or material that become [`Entity`] values
//! once resolved.
//!
//! In asset JSON a link marker is an object tagged with
//! [`LINK_TYPE_KEY`]:
//!
//! ```json
//! { "__mhc_link_type": "node", "index": 7 }
//! ```

use indexmap::IndexMap;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::ecs::Entity;
use crate::errors::{InflateError, Result};
use crate::scene::MaterialKey;

/// JSON key that tags an object as a link marker.
pub const LINK_TYPE_KEY: &str = "__mhc_link_type";

/// Ordered property bag of one component declaration.
pub type PropertyBag = IndexMap<String, PropValue>;

/// Ordered map of component name to property bag.
pub type ComponentMap = IndexMap<String, PropertyBag>;

/// What a link marker points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    Node,
    Material,
    /// Any kind this pipeline does not understand; rejected at resolve time.
    Other(String),
}

impl LinkKind {
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "node" => LinkKind::Node,
            "material" => LinkKind::Material,
            other => LinkKind::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            LinkKind::Node => "node",
            LinkKind::Material => "material",
            LinkKind::Other(kind) => kind,
        }
    }
}

/// A typed forward reference embedded in declarative data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMarker {
    pub kind: LinkKind,
    pub index: usize,
    /// The material object itself, for material links. Needed because the
    /// material may not be registered by index yet when the link resolves.
    pub dependency: Option<MaterialKey>,
}

impl LinkMarker {
    #[must_use]
    pub fn node(index: usize) -> Self {
        Self {
            kind: LinkKind::Node,
            index,
            dependency: None,
        }
    }

    #[must_use]
    pub fn material(index: usize, dependency: MaterialKey) -> Self {
        Self {
            kind: LinkKind::Material,
            index,
            dependency: Some(dependency),
        }
    }

    #[must_use]
    pub fn other(kind: &str, index: usize) -> Self {
        Self {
            kind: LinkKind::Other(kind.to_string()),
            index,
            dependency: None,
        }
    }
}

/// A declarative property value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<PropValue>),
    Map(PropertyBag),
    /// Unresolved reference.
    Link(LinkMarker),
    /// Resolved reference.
    Entity(Entity),
}

impl PropValue {
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_entity(&self) -> Option<Entity> {
        match self {
            PropValue::Entity(e) => Some(*e),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_link(&self) -> Option<&LinkMarker> {
        match self {
            PropValue::Link(link) => Some(link),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&PropertyBag> {
        match self {
            PropValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Parses a JSON value, turning tagged objects into link markers.
    ///
    /// `materials` maps glTF material indices to the scene's material keys;
    /// it binds each material link to its dependency.
    pub fn from_json(value: &Value, materials: &[MaterialKey]) -> Result<Self> {
        Ok(match value {
            Value::Null => PropValue::Null,
            Value::Bool(b) => PropValue::Bool(*b),
            Value::Number(n) => PropValue::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => PropValue::String(s.clone()),
            Value::Array(items) => PropValue::Array(
                items
                    .iter()
                    .map(|v| PropValue::from_json(v, materials))
                    .collect::<Result<_>>()?,
            ),
            Value::Object(obj) => {
                if let Some(kind) = obj.get(LINK_TYPE_KEY) {
                    PropValue::Link(parse_link(kind, obj.get("index"), materials)?)
                } else {
                    PropValue::Map(
                        obj.iter()
                            .map(|(k, v)| Ok((k.clone(), PropValue::from_json(v, materials)?)))
                            .collect::<Result<_>>()?,
                    )
                }
            }
        })
    }

    /// Converts back to JSON. Resolved entities become their opaque integer.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            PropValue::Null => Value::Null,
            PropValue::Bool(b) => Value::Bool(*b),
            PropValue::Number(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            PropValue::String(s) => Value::String(s.clone()),
            PropValue::Array(items) => Value::Array(items.iter().map(PropValue::to_json).collect()),
            PropValue::Map(map) => Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
            PropValue::Link(link) => serde_json::json!({
                LINK_TYPE_KEY: link.kind.as_str(),
                "index": link.index,
            }),
            PropValue::Entity(e) => Value::from(e.to_bits()),
        }
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::String(s.to_string())
    }
}

impl From<LinkMarker> for PropValue {
    fn from(link: LinkMarker) -> Self {
        PropValue::Link(link)
    }
}

impl From<Entity> for PropValue {
    fn from(e: Entity) -> Self {
        PropValue::Entity(e)
    }
}

impl Serialize for PropValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PropValue::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, v)?;
                }
                m.end()
            }
            PropValue::Array(items) => items.serialize(serializer),
            other => other.to_json().serialize(serializer),
        }
    }
}

fn parse_link(
    kind: &Value,
    index: Option<&Value>,
    materials: &[MaterialKey],
) -> Result<LinkMarker> {
    let kind = kind
        .as_str()
        .ok_or_else(|| InflateError::InvalidLinkMarker(format!("link type must be a string, got {kind}")))?;
    let index = index
        .and_then(Value::as_u64)
        .ok_or_else(|| InflateError::InvalidLinkMarker(format!("`{kind}` link is missing its index")))?
        as usize;

    Ok(match LinkKind::parse(kind) {
        LinkKind::Material => {
            let dependency = materials.get(index).copied().ok_or_else(|| {
                InflateError::InvalidLinkMarker(format!("material link to unknown material {index}"))
            })?;
            LinkMarker::material(index, dependency)
        }
        kind => LinkMarker {
            kind,
            index,
            dependency: None,
        },
    })
}

/// Parses a property bag from a JSON object.
pub fn parse_property_bag(value: &Value, materials: &[MaterialKey]) -> Result<PropertyBag> {
    let obj = value
        .as_object()
        .ok_or_else(|| InflateError::InvalidDeclaration(format!("property bag must be an object, got {value}")))?;

    obj.iter()
        .map(|(k, v)| Ok((k.clone(), PropValue::from_json(v, materials)?)))
        .collect()
}

/// Parses a component map (`{ name: { prop: value } }`) from a JSON object.
///
/// Declaration order is preserved.
pub fn parse_component_map(value: &Value, materials: &[MaterialKey]) -> Result<ComponentMap> {
    let obj = value
        .as_object()
        .ok_or_else(|| InflateError::InvalidDeclaration(format!("component map must be an object, got {value}")))?;

    obj.iter()
        .map(|(name, props)| Ok((name.clone(), parse_property_bag(props, materials)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use slotmap::SlotMap;

    #[test]
    fn parses_node_link() {
        let value = PropValue::from_json(&json!({ LINK_TYPE_KEY: "node", "index": 3 }), &[]).unwrap();
        assert_eq!(value, PropValue::Link(LinkMarker::node(3)));
    }

    #[test]
    fn parses_material_link_with_dependency() {
        let mut keys: SlotMap<MaterialKey, ()> = SlotMap::with_key();
        let materials = vec![keys.insert(()), keys.insert(())];

        let value = PropValue::from_json(&json!({ LINK_TYPE_KEY: "material", "index": 1 }), &materials).unwrap();
        assert_eq!(value, PropValue::Link(LinkMarker::material(1, materials[1])));
    }

    #[test]
    fn material_link_to_unknown_material_fails() {
        let result = PropValue::from_json(&json!({ LINK_TYPE_KEY: "material", "index": 4 }), &[]);
        assert!(matches!(result, Err(InflateError::InvalidLinkMarker(_))));
    }

    #[test]
    fn unknown_link_kind_is_kept_for_later_rejection() {
        let value = PropValue::from_json(&json!({ LINK_TYPE_KEY: "texture", "index": 0 }), &[]).unwrap();
        assert_eq!(value, PropValue::Link(LinkMarker::other("texture", 0)));
    }

    #[test]
    fn link_without_index_fails() {
        let result = PropValue::from_json(&json!({ LINK_TYPE_KEY: "node" }), &[]);
        assert!(matches!(result, Err(InflateError::InvalidLinkMarker(_))));
    }

    #[test]
    fn component_map_keeps_declaration_order() {
        let map = parse_component_map(
            &json!({ "zeta": {}, "alpha": { "x": 1 }, "media-image": { "src": "a.png" } }),
            &[],
        )
        .unwrap();
        let names: Vec<_> = map.keys().map(String::as_str).collect();
        assert_eq!(names, ["zeta", "alpha", "media-image"]);
    }
}
