use crate::decl::ComponentMap;

/// A shared material resource.
///
/// Materials are referenced by key from any number of nodes. The inflation
/// pipeline never writes back into a material: the entity a material was
/// inflated to lives in the [`IndexRegistry`](crate::inflate::IndexRegistry).
#[derive(Debug, Clone, Default)]
pub struct Material {
    pub name: Option<String>,
    /// Index of the material in the source glTF.
    pub gltf_index: usize,
    /// Component declarations (`MOZ_hubs_components` extension).
    pub components: Option<ComponentMap>,
}

impl Material {
    #[must_use]
    pub fn new(gltf_index: usize) -> Self {
        Self {
            name: None,
            gltf_index,
            components: None,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: ComponentMap) -> Self {
        self.components = Some(components);
        self
    }
}
