//! Behavior graph documents.
//!
//! The embedded visual-scripting graph is only consumed declaratively here: a
//! list of nodes, each with a configuration map and a parameter map whose
//! entries may hold link markers under `value`. Everything else in the
//! document (flows, labels, variables, custom events) is carried through
//! untouched.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::decl::props::PropValue;
use crate::errors::{InflateError, Result};
use crate::scene::MaterialKey;

/// One parameter of a behavior graph node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterJson {
    /// Literal value, if the parameter has one (as opposed to a socket link).
    pub value: Option<PropValue>,
    /// Remaining keys, e.g. `link: { nodeId, socket }`.
    pub extra: Map<String, Value>,
}

impl ParameterJson {
    #[must_use]
    pub fn value(value: impl Into<PropValue>) -> Self {
        Self {
            value: Some(value.into()),
            extra: Map::new(),
        }
    }
}

/// One node of a behavior graph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphNodeJson {
    pub id: String,
    pub node_type: String,
    pub configuration: Option<IndexMap<String, PropValue>>,
    pub parameters: Option<IndexMap<String, ParameterJson>>,
    pub extra: Map<String, Value>,
}

impl GraphNodeJson {
    #[must_use]
    pub fn new(id: &str, node_type: &str) -> Self {
        Self {
            id: id.to_string(),
            node_type: node_type.to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_configuration(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.configuration
            .get_or_insert_with(IndexMap::new)
            .insert(key.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_parameter(mut self, key: &str, param: ParameterJson) -> Self {
        self.parameters
            .get_or_insert_with(IndexMap::new)
            .insert(key.to_string(), param);
        self
    }
}

/// A behavior graph document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphJson {
    pub nodes: Vec<GraphNodeJson>,
    /// Top-level keys other than `nodes` (variables, custom events).
    pub extra: Map<String, Value>,
}

impl GraphJson {
    /// Parses a graph document. Link markers are bound the same way as in
    /// component declarations.
    pub fn from_json(value: &Value, materials: &[MaterialKey]) -> Result<Self> {
        let obj = value
            .as_object()
            .ok_or_else(|| InflateError::InvalidDeclaration("behavior graph must be an object".into()))?;

        let mut extra = obj.clone();
        let nodes = match extra.remove("nodes") {
            Some(Value::Array(nodes)) => nodes
                .iter()
                .map(|n| parse_node(n, materials))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => {
                return Err(InflateError::InvalidDeclaration(format!(
                    "behavior graph `nodes` must be an array, got {other}"
                )));
            }
            None => Vec::new(),
        };

        Ok(Self { nodes, extra })
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut obj = self.extra.clone();
        obj.insert(
            "nodes".into(),
            Value::Array(self.nodes.iter().map(node_to_json).collect()),
        );
        Value::Object(obj)
    }
}

impl Serialize for GraphJson {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

fn parse_node(value: &Value, materials: &[MaterialKey]) -> Result<GraphNodeJson> {
    let obj = value
        .as_object()
        .ok_or_else(|| InflateError::InvalidDeclaration(format!("behavior graph node must be an object, got {value}")))?;

    let mut extra = obj.clone();
    let id = take_string(&mut extra, "id");
    let node_type = take_string(&mut extra, "type");

    let configuration = match extra.remove("configuration") {
        Some(Value::Object(config)) => Some(
            config
                .iter()
                .map(|(k, v)| Ok((k.clone(), PropValue::from_json(v, materials)?)))
                .collect::<Result<IndexMap<_, _>>>()?,
        ),
        Some(Value::Null) | None => None,
        Some(other) => {
            return Err(InflateError::InvalidDeclaration(format!(
                "configuration of node `{id}` must be an object, got {other}"
            )));
        }
    };

    let parameters = match extra.remove("parameters") {
        Some(Value::Object(params)) => Some(
            params
                .iter()
                .map(|(k, v)| Ok((k.clone(), parse_parameter(v, materials)?)))
                .collect::<Result<IndexMap<_, _>>>()?,
        ),
        Some(Value::Null) | None => None,
        Some(other) => {
            return Err(InflateError::InvalidDeclaration(format!(
                "parameters of node `{id}` must be an object, got {other}"
            )));
        }
    };

    Ok(GraphNodeJson {
        id,
        node_type,
        configuration,
        parameters,
        extra,
    })
}

fn parse_parameter(value: &Value, materials: &[MaterialKey]) -> Result<ParameterJson> {
    let obj = value
        .as_object()
        .ok_or_else(|| InflateError::InvalidDeclaration(format!("parameter must be an object, got {value}")))?;

    let mut extra = obj.clone();
    let value = extra
        .remove("value")
        .map(|v| PropValue::from_json(&v, materials))
        .transpose()?;

    Ok(ParameterJson { value, extra })
}

fn take_string(obj: &mut Map<String, Value>, key: &str) -> String {
    match obj.remove(key) {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

fn node_to_json(node: &GraphNodeJson) -> Value {
    let mut obj = node.extra.clone();
    obj.insert("id".into(), Value::String(node.id.clone()));
    obj.insert("type".into(), Value::String(node.node_type.clone()));

    if let Some(config) = &node.configuration {
        obj.insert(
            "configuration".into(),
            Value::Object(config.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()),
        );
    }

    if let Some(params) = &node.parameters {
        let params = params
            .iter()
            .map(|(k, p)| {
                let mut param = p.extra.clone();
                if let Some(value) = &p.value {
                    param.insert("value".into(), value.to_json());
                }
                (k.clone(), Value::Object(param))
            })
            .collect();
        obj.insert("parameters".into(), Value::Object(params));
    }

    Value::Object(obj)
}
