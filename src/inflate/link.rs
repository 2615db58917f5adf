//! Link Resolver.
//!
//! Resolves [`LinkMarker`]s into entities in two phases:
//!
//! - **Property-bag phase** ([`resolve_component_props`]): runs while nodes are
//!   walked. Node links to indices not seen yet allocate their entity on the
//!   spot and register it, so the node claiming the index later reuses it.
//!   Material links are illegal here.
//! - **Behavior-graph phase** ([`resolve_graph_value`]): runs after the walk.
//!   Node links must already be registered; material links inflate their
//!   material on demand.

use crate::decl::{LinkKind, LinkMarker, PropValue, PropertyBag};
use crate::ecs::{Entity, World};
use crate::errors::{InflateError, Result};
use crate::inflate::components::inflate_material;
use crate::inflate::index::IndexRegistry;
use crate::inflate::registry::InflatorRegistry;
use crate::inflate::InflateContext;

/// Returns a copy of `props` with every node link replaced by its entity.
///
/// Nested maps and arrays are resolved too.
pub fn resolve_component_props(
    world: &mut World,
    index: &mut IndexRegistry,
    component: &str,
    props: &PropertyBag,
) -> Result<PropertyBag> {
    props
        .iter()
        .map(|(name, value)| Ok((name.clone(), resolve_prop(world, index, component, value)?)))
        .collect()
}

fn resolve_prop(
    world: &mut World,
    index: &mut IndexRegistry,
    component: &str,
    value: &PropValue,
) -> Result<PropValue> {
    Ok(match value {
        PropValue::Link(link) => PropValue::Entity(resolve_component_link(world, index, component, link)?),
        PropValue::Map(map) => PropValue::Map(resolve_component_props(world, index, component, map)?),
        PropValue::Array(items) => PropValue::Array(
            items
                .iter()
                .map(|v| resolve_prop(world, index, component, v))
                .collect::<Result<_>>()?,
        ),
        other => other.clone(),
    })
}

fn resolve_component_link(
    world: &mut World,
    index: &mut IndexRegistry,
    component: &str,
    link: &LinkMarker,
) -> Result<Entity> {
    match &link.kind {
        LinkKind::Node => {
            if let Some(entity) = index.node_entity(link.index) {
                return Ok(entity);
            }
            let entity = world.spawn();
            index.register_node(link.index, entity);
            log::trace!("Forward link to node {} allocated {entity:?}", link.index);
            Ok(entity)
        }
        LinkKind::Material => {
            log::error!("Material link in component `{component}`");
            Err(InflateError::MaterialLinkInComponent {
                component: component.to_string(),
            })
        }
        LinkKind::Other(kind) => Err(InflateError::UnsupportedLinkKind(kind.clone())),
    }
}

/// Resolves one behavior graph value.
///
/// Non-marker values pass through unchanged.
pub fn resolve_graph_value(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    index: &mut IndexRegistry,
    value: &PropValue,
) -> Result<PropValue> {
    let PropValue::Link(link) = value else {
        return Ok(value.clone());
    };

    match &link.kind {
        LinkKind::Node => index
            .node_entity(link.index)
            .map(PropValue::Entity)
            .ok_or(InflateError::UnresolvedNodeLink(link.index)),
        LinkKind::Material => {
            if index.material_entity(link.index).is_none() {
                let key = link.dependency.ok_or_else(|| {
                    InflateError::InvalidLinkMarker(format!(
                        "material link {} has no material dependency",
                        link.index
                    ))
                })?;
                inflate_material(ctx, registry, index, key)?;
            }
            index
                .material_entity(link.index)
                .map(PropValue::Entity)
                .ok_or(InflateError::UnresolvedMaterialLink(link.index))
        }
        LinkKind::Other(kind) => Err(InflateError::UnsupportedLinkKind(kind.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_node_link_is_registered_once() {
        let mut world = World::new();
        let mut index = IndexRegistry::new();
        let mut props = PropertyBag::new();
        props.insert("a".into(), PropValue::Link(LinkMarker::node(7)));
        props.insert(
            "b".into(),
            PropValue::Array(vec![PropValue::Link(LinkMarker::node(7)), PropValue::Number(1.0)]),
        );

        let resolved = resolve_component_props(&mut world, &mut index, "test", &props).unwrap();

        let entity = index.node_entity(7).unwrap();
        assert_eq!(resolved["a"], PropValue::Entity(entity));
        assert_eq!(
            resolved["b"],
            PropValue::Array(vec![PropValue::Entity(entity), PropValue::Number(1.0)])
        );
        assert_eq!(world.len(), 1);
        // Forward allocation does not claim the index.
        assert!(!index.is_claimed(7));
    }

    #[test]
    fn unknown_link_kind_is_rejected() {
        let mut world = World::new();
        let mut index = IndexRegistry::new();
        let mut props = PropertyBag::new();
        props.insert("a".into(), PropValue::Link(LinkMarker::other("animation", 0)));

        let err = resolve_component_props(&mut world, &mut index, "test", &props).unwrap_err();
        assert!(matches!(err, InflateError::UnsupportedLinkKind(ref k) if k == "animation"));
        assert!(world.is_empty());
    }
}
