//! Component Inflator Registry.
//!
//! A name-keyed table of inflator functions, built once with
//! [`InflatorRegistryBuilder`] and immutable afterwards. Keys are camelCase
//! component names.

use rustc_hash::FxHashMap;

use crate::decl::PropertyBag;
use crate::ecs::Entity;
use crate::errors::Result;
use crate::inflate::InflateContext;

/// Attaches one component's data to an entity.
///
/// An inflator may also build a specialized scene object and bind it with
/// [`add_object3d_component`](crate::ecs::add_object3d_component); the node
/// being inflated is then swapped for that object.
pub type InflatorFn = fn(&mut InflateContext<'_>, Entity, &PropertyBag) -> Result<()>;

#[derive(Debug, Clone, Default)]
pub struct InflatorRegistry {
    inflators: FxHashMap<String, InflatorFn>,
}

impl InflatorRegistry {
    #[must_use]
    pub fn builder() -> InflatorRegistryBuilder {
        InflatorRegistryBuilder::default()
    }

    /// A registry holding the built-in inflators.
    #[must_use]
    pub fn with_defaults() -> Self {
        crate::inflators::register_defaults(Self::builder()).build()
    }

    #[inline]
    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.inflators.contains_key(name)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<InflatorFn> {
        self.inflators.get(name).copied()
    }

    /// Runs the inflator registered under `name`.
    ///
    /// Returns `Ok(false)` without doing anything if there is none.
    pub fn invoke(
        &self,
        name: &str,
        ctx: &mut InflateContext<'_>,
        entity: Entity,
        props: &PropertyBag,
    ) -> Result<bool> {
        match self.get(name) {
            Some(inflator) => inflator(ctx, entity, props).map(|()| true),
            None => Ok(false),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inflators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inflators.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inflators.keys().map(String::as_str)
    }
}

#[derive(Debug, Default)]
pub struct InflatorRegistryBuilder {
    inflators: FxHashMap<String, InflatorFn>,
}

impl InflatorRegistryBuilder {
    /// Registers `inflator` under `name`, replacing any earlier registration.
    #[must_use]
    pub fn register(mut self, name: &str, inflator: InflatorFn) -> Self {
        if self.inflators.insert(name.to_string(), inflator).is_some() {
            log::warn!("Inflator `{name}` registered twice; keeping the last one");
        }
        self
    }

    #[must_use]
    pub fn build(self) -> InflatorRegistry {
        InflatorRegistry {
            inflators: self.inflators,
        }
    }
}
