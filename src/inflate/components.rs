//! Component and material inflation.

use crate::decl::ComponentMap;
use crate::ecs::{Entity, add_material_component};
use crate::errors::{InflateError, Result};
use crate::inflate::index::IndexRegistry;
use crate::inflate::link::resolve_component_props;
use crate::inflate::registry::InflatorRegistry;
use crate::inflate::{InflateContext, RESERVED_COMPONENTS};
use crate::scene::MaterialKey;
use crate::utils::camel_case;

/// Runs every declaration in `components` through its inflator, in
/// declaration order.
///
/// Reserved names are skipped silently. Names without an inflator are logged
/// and skipped; the remaining components still inflate.
pub fn inflate_components(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    index: &mut IndexRegistry,
    entity: Entity,
    components: &ComponentMap,
) -> Result<()> {
    for (name, props) in components {
        let inflator_name = camel_case(name);
        if RESERVED_COMPONENTS.contains(&inflator_name.as_str()) {
            continue;
        }

        let Some(inflator) = registry.get(&inflator_name) else {
            log::warn!("Failed to inflate unknown component called {inflator_name}: {props:?}");
            continue;
        };

        let resolved = resolve_component_props(ctx.world, index, &inflator_name, props)?;
        inflator(ctx, entity, &resolved)?;
    }

    Ok(())
}

/// Returns the entity of material `key`, inflating it on first encounter.
///
/// Materials are de-duplicated by glTF index: a material object whose index
/// is already registered shares that entity and is not inflated again.
///
/// First encounter allocates the entity, caches it against the material,
/// attaches the material component and runs the material's own component
/// declarations. Every encounter makes sure the material's glTF index is
/// registered.
pub fn inflate_material(
    ctx: &mut InflateContext<'_>,
    registry: &InflatorRegistry,
    index: &mut IndexRegistry,
    key: MaterialKey,
) -> Result<Entity> {
    let material = ctx
        .scene
        .get_material(key)
        .ok_or(InflateError::MaterialNotFound(key))?;
    let gltf_index = material.gltf_index;

    if let Some(entity) = index.cached_material(key) {
        if index.material_entity(gltf_index).is_none() {
            index.register_material(gltf_index, entity);
        }
        return Ok(entity);
    }

    // Another material object already inflated under the same glTF index.
    if let Some(entity) = index.material_entity(gltf_index) {
        index.cache_material(key, entity);
        return Ok(entity);
    }

    let components = material.components.clone();

    let entity = ctx.world.spawn();
    index.cache_material(key, entity);
    index.register_material(gltf_index, entity);
    add_material_component(ctx.world, entity, key);
    log::trace!("Material {gltf_index} inflated as {entity:?}");

    if let Some(components) = components {
        inflate_components(ctx, registry, index, entity, &components)?;
    }

    Ok(entity)
}
