//! Media sort order.
//!
//! Orders inflated entities by the kind of media they carry, for listing
//! media in a room: video, audio, image, pdf, model, then anything else.

use std::cmp::Ordering;

use crate::ecs::{Entity, GltfModel, World};
use crate::inflators::{MediaImage, MediaPdf, MediaVideo};
use crate::utils::Interner;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaSortOrder {
    Video = 0,
    Audio = 1,
    Image = 2,
    Pdf = 3,
    Model = 4,
    Unidentified = 5,
}

impl MediaSortOrder {
    /// Short media type name, `None` for unidentified entities.
    #[must_use]
    pub fn media_type(self) -> Option<&'static str> {
        match self {
            MediaSortOrder::Video => Some("video"),
            MediaSortOrder::Audio => Some("audio"),
            MediaSortOrder::Image => Some("image"),
            MediaSortOrder::Pdf => Some("pdf"),
            MediaSortOrder::Model => Some("model"),
            MediaSortOrder::Unidentified => None,
        }
    }
}

/// Classifies `entity`. Videos whose content type is `audio/*` sort as audio.
#[must_use]
pub fn media_sort_order(world: &World, interner: &Interner, entity: Entity) -> MediaSortOrder {
    if let Some(video) = world.get::<MediaVideo>(entity) {
        let is_audio = interner
            .resolve(video.content_type)
            .is_some_and(|t| t.starts_with("audio/"));
        return if is_audio {
            MediaSortOrder::Audio
        } else {
            MediaSortOrder::Video
        };
    }
    if world.has::<MediaImage>(entity) {
        return MediaSortOrder::Image;
    }
    if world.has::<MediaPdf>(entity) {
        return MediaSortOrder::Pdf;
    }
    if world.has::<GltfModel>(entity) {
        return MediaSortOrder::Model;
    }
    MediaSortOrder::Unidentified
}

/// Comparator for sorting entities by [`media_sort_order`].
#[must_use]
pub fn media_sort(world: &World, interner: &Interner, a: Entity, b: Entity) -> Ordering {
    media_sort_order(world, interner, a).cmp(&media_sort_order(world, interner, b))
}

/// Media type name of `entity`, if it carries media.
#[must_use]
pub fn media_type(world: &World, interner: &Interner, entity: Entity) -> Option<&'static str> {
    media_sort_order(world, interner, entity).media_type()
}
