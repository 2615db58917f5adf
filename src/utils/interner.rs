//! String Interner
//!
//! Compacts repeated string values (urls, content types, asset sources) into
//! integer [`Symbol`]s so components stay small and comparisons are O(1).
//!
//! Unlike a process-wide interner, an [`Interner`] is an explicit value that is
//! handed to the inflation pipeline through
//! [`InflateContext`](crate::inflate::InflateContext). Independent inflation
//! calls can use independent interners.

use lasso::{Rodeo, Spur};

/// Symbol type alias.
///
/// A compact integer identifier that can be compared and hashed cheaply.
pub type Symbol = Spur;

/// An owned string interner.
#[derive(Debug, Default)]
pub struct Interner {
    rodeo: Rodeo,
}

impl Interner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rodeo: Rodeo::default(),
        }
    }

    /// Interns a string, returning its Symbol.
    ///
    /// Returns the existing Symbol if the string is already interned.
    #[inline]
    pub fn intern(&mut self, s: &str) -> Symbol {
        self.rodeo.get_or_intern(s)
    }

    /// Looks up the Symbol of an already interned string without allocating.
    #[inline]
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.rodeo.get(s)
    }

    /// Resolves a Symbol back to its string.
    ///
    /// Returns `None` for a Symbol issued by a different interner.
    #[inline]
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.rodeo.try_resolve(&sym)
    }

    /// Number of distinct strings interned.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rodeo.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rodeo.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let mut interner = Interner::new();
        let s1 = interner.intern("hello");
        let s2 = interner.intern("hello");
        let s3 = interner.intern("world");

        assert_eq!(s1, s2);
        assert_ne!(s1, s3);

        assert_eq!(interner.resolve(s1), Some("hello"));
        assert_eq!(interner.resolve(s3), Some("world"));
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_get() {
        let mut interner = Interner::new();
        let _ = interner.intern("existing");

        assert!(interner.get("existing").is_some());
        assert!(interner.get("non_existing").is_none());
    }
}
