//! `link` component: a clickable link to a url, avatar, scene, room or
//! waypoint.

use crate::decl::PropertyBag;
use crate::ecs::Entity;
use crate::errors::{InflateError, Result};
use crate::inflate::InflateContext;
use crate::utils::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LinkType {
    #[default]
    Link = 0,
    Avatar = 1,
    Scene = 2,
    LocalRoom = 3,
    ExternalRoom = 4,
    Waypoint = 5,
}

impl LinkType {
    /// Maps the numeric wire value; unknown values fall back to `Link`.
    #[must_use]
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LinkType::Avatar,
            2 => LinkType::Scene,
            3 => LinkType::LocalRoom,
            4 => LinkType::ExternalRoom,
            5 => LinkType::Waypoint,
            _ => LinkType::Link,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub url: Symbol,
    pub link_type: LinkType,
}

/// Inflates `{ href: string, type?: number }`. A missing `type` is a plain
/// `Link`; a type outside the known range is rejected.
pub fn inflate_link(ctx: &mut InflateContext<'_>, entity: Entity, props: &PropertyBag) -> Result<()> {
    let href = props
        .get("href")
        .and_then(|v| v.as_str())
        .ok_or(InflateError::InvalidProperty {
            component: "link",
            property: "href",
            expected: "a string",
        })?;

    let link_type = match props.get("type").and_then(|v| v.as_f64()) {
        None => LinkType::Link,
        Some(t) if t.fract() == 0.0 && (0.0..=5.0).contains(&t) => LinkType::from_u8(t as u8),
        Some(_) => {
            return Err(InflateError::InvalidProperty {
                component: "link",
                property: "type",
                expected: "an integer link type between 0 and 5",
            });
        }
    };

    let url = ctx.interner.intern(href);
    ctx.world.insert(entity, Link { url, link_type });
    Ok(())
}
