//! Media components: images, videos and pdfs.
//!
//! Each media inflator claims its node with a specialized `Mesh` object that
//! displays the media, so the placeholder node is swapped for it.

use crate::decl::PropertyBag;
use crate::ecs::{Entity, add_object3d_component};
use crate::errors::{InflateError, Result};
use crate::inflate::InflateContext;
use crate::scene::{Node, ObjectKind};
use crate::utils::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaImage {
    pub src: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaVideo {
    pub src: Symbol,
    pub content_type: Symbol,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaPdf {
    pub src: Symbol,
}

fn src<'a>(component: &'static str, props: &'a PropertyBag) -> Result<&'a str> {
    props
        .get("src")
        .and_then(|v| v.as_str())
        .ok_or(InflateError::InvalidProperty {
            component,
            property: "src",
            expected: "a string",
        })
}

fn claim_with_mesh(ctx: &mut InflateContext<'_>, entity: Entity, name: &str) {
    let handle = ctx.scene.add_detached(Node::with_kind(name, ObjectKind::Mesh));
    add_object3d_component(ctx.world, entity, handle);
}

/// Inflates `{ src: string }`.
pub fn inflate_image(ctx: &mut InflateContext<'_>, entity: Entity, props: &PropertyBag) -> Result<()> {
    let src = ctx.interner.intern(src("image", props)?);
    ctx.world.insert(entity, MediaImage { src });
    claim_with_mesh(ctx, entity, "Image");
    Ok(())
}

/// Inflates `{ src: string, contentType?: string }`.
pub fn inflate_video(ctx: &mut InflateContext<'_>, entity: Entity, props: &PropertyBag) -> Result<()> {
    let src = ctx.interner.intern(src("video", props)?);
    let content_type = props
        .get("contentType")
        .and_then(|v| v.as_str())
        .unwrap_or("video/mp4");
    let content_type = ctx.interner.intern(content_type);

    ctx.world.insert(entity, MediaVideo { src, content_type });
    claim_with_mesh(ctx, entity, "Video");
    Ok(())
}

/// Inflates `{ src: string }`.
pub fn inflate_pdf(ctx: &mut InflateContext<'_>, entity: Entity, props: &PropertyBag) -> Result<()> {
    let src = ctx.interner.intern(src("pdf", props)?);
    ctx.world.insert(entity, MediaPdf { src });
    claim_with_mesh(ctx, entity, "Pdf");
    Ok(())
}
