//! Utility Module
//!
//! - [`interner`]: String interning for compact component data
//! - [`case`]: Component name normalisation
//!
//! # String Interning
//!
//! ```rust,ignore
//! use myth_inflate::utils::Interner;
//!
//! let mut interner = Interner::new();
//! let sym1 = interner.intern("https://example.com");
//! let sym2 = interner.intern("https://example.com");
//! assert_eq!(sym1, sym2); // O(1) comparison
//! ```

pub mod case;
pub mod interner;

pub use case::camel_case;
pub use interner::{Interner, Symbol};
