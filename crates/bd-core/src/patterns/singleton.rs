//! Singleton pattern.
//!
//! The idiomatic Rust process-wide singleton is `std::sync::LazyLock<T>`:
//! built on first access, exactly once, then shared read-only.  This module
//! re-exports `LazyLock` and provides [`define_singleton!`] for declaring
//! such statics.

/// Re-export `LazyLock` as the canonical singleton container.
pub use std::sync::LazyLock;

/// Define a lazily-initialised static named `$name` of type `$ty`.
///
/// The visibility is taken from the invocation, so tables private to a module
/// stay private.
///
/// # Example
/// ```
/// use bd_core::define_singleton;
///
/// struct Registry { data: Vec<String> }
/// define_singleton!(pub REGISTRY, Registry, Registry { data: Vec::new() });
///
/// assert!(REGISTRY.data.is_empty());
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($vis:vis $name:ident, $ty:ty, $init:expr) => {
        $vis static $name: $crate::patterns::singleton::LazyLock<$ty> =
            $crate::patterns::singleton::LazyLock::new(|| $init);
    };
}
