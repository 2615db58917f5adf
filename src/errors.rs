//! Error Types
//!
//! This module defines the error types used throughout the inflation pipeline.
//!
//! # Overview
//!
//! The main error type [`InflateError`] covers every fatal condition of a
//! model inflation:
//! - Structural violations found while walking or swapping nodes
//! - Link markers that cannot be resolved in the phase they appear in
//! - Malformed declarative input (component maps, behavior graphs)
//! - Failures reported by individual component inflators
//!
//! Unknown component kinds are *not* errors: they are logged and skipped.
//!
//! # Usage
//!
//! All public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, InflateError>`. A fatal error leaves the world and
//! scene partially populated; callers must discard the in-progress model.
//!
//! ```rust,ignore
//! use myth_inflate::errors::{InflateError, Result};
//!
//! fn load() -> Result<()> {
//!     // Operations that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

use crate::scene::{MaterialKey, NodeHandle, ObjectKind};

/// The main error type for model inflation.
///
/// Each variant carries the node handle, index, component name or link kind
/// that caused the failure.
#[derive(Error, Debug)]
pub enum InflateError {
    // ========================================================================
    // Structural Violations
    // ========================================================================
    /// A specialized object was produced for a node that is not a generic
    /// placeholder.
    #[error("Failed to inflate model. Unexpected object type found before swap: {kind:?} (node {node:?})")]
    UnexpectedObjectKind {
        /// The node that was about to be swapped
        node: NodeHandle,
        /// Its object kind
        kind: ObjectKind,
    },

    /// The root node produced a specialized object.
    #[error("Failed to inflate model. Can't inflate alternative object type on root scene.")]
    RootReplaced,

    /// A swap record names the root node as its placeholder.
    #[error("Failed to apply swap. The root node {0:?} can't be a swap source.")]
    RootSwap(NodeHandle),

    /// A placeholder scheduled for a swap has no parent to swap into.
    #[error("Failed to apply swap. Placeholder {0:?} is not attached to a parent.")]
    DetachedPlaceholder(NodeHandle),

    /// Two different graph nodes claim the same externally-defined index.
    #[error("Node index {index} is claimed by both {first:?} and {second:?}")]
    DuplicateNodeIndex {
        /// The contested index
        index: usize,
        /// The node that claimed it first
        first: NodeHandle,
        /// The node that claimed it second
        second: NodeHandle,
    },

    // ========================================================================
    // Link Resolution Errors
    // ========================================================================
    /// A material link appeared inside a node component declaration.
    #[error("Material link in component `{component}`; non node link types must be resolved before inflation")]
    MaterialLinkInComponent {
        /// The camel-cased component name
        component: String,
    },

    /// A link marker of an unknown kind.
    #[error("`{0}` links are not supported")]
    UnsupportedLinkKind(String),

    /// A behavior graph references a node index that no node ever claimed.
    #[error("Behavior graph references node index {0}, which was never inflated")]
    UnresolvedNodeLink(usize),

    /// A behavior graph material link that did not resolve to its index.
    #[error("Behavior graph references material index {0}, which could not be resolved")]
    UnresolvedMaterialLink(usize),

    /// A link marker that is missing required fields.
    #[error("Invalid link marker: {0}")]
    InvalidLinkMarker(String),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// The node handle is not present in the scene.
    #[error("Node not found in scene: {0:?}")]
    NodeNotFound(NodeHandle),

    /// The material key is not present in the scene.
    #[error("Material not found in scene: {0:?}")]
    MaterialNotFound(MaterialKey),

    // ========================================================================
    // Declaration Errors
    // ========================================================================
    /// The declarative input does not have the expected shape.
    #[error("Invalid declaration: {0}")]
    InvalidDeclaration(String),

    /// An inflator was given a property it can't use.
    #[error("Invalid property `{property}` for component `{component}`: expected {expected}")]
    InvalidProperty {
        /// The component being inflated
        component: &'static str,
        /// The offending property name
        property: &'static str,
        /// A description of the expected value
        expected: &'static str,
    },

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Alias for `Result<T, InflateError>`.
pub type Result<T> = std::result::Result<T, InflateError>;
