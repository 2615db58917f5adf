//! Built-in component inflators.
//!
//! | Component | Inflator | Attaches |
//! |-----------|----------|----------|
//! | `link`  | [`inflate_link`]  | [`Link`] |
//! | `image` | [`inflate_image`] | [`MediaImage`] + specialized mesh |
//! | `video` | [`inflate_video`] | [`MediaVideo`] + specialized mesh |
//! | `pdf`   | [`inflate_pdf`]   | [`MediaPdf`] + specialized mesh |

pub mod link;
pub mod media;

pub use link::{Link, LinkType, inflate_link};
pub use media::{MediaImage, MediaPdf, MediaVideo, inflate_image, inflate_pdf, inflate_video};

use crate::inflate::InflatorRegistryBuilder;

/// Registers the built-in inflators on `builder`.
#[must_use]
pub fn register_defaults(builder: InflatorRegistryBuilder) -> InflatorRegistryBuilder {
    builder
        .register("link", inflate_link)
        .register("image", inflate_image)
        .register("video", inflate_video)
        .register("pdf", inflate_pdf)
}
