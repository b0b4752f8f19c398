//! Common bound aliases used across topology code.
//!
//! These traits have blanket impls, so any type satisfying the underlying
//! bounds will automatically implement them. They only reduce duplication
//! in `where` clauses.

/// Canonical bound set for sortable elements.
///
/// - `Clone` so element content can be copied into output levels
/// - `Eq + Hash` for the `HashMap` keyed node lookup
/// - `Debug` for diagnostics and error reporting
pub trait ElementLike: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
impl<T> ElementLike for T where T: Clone + Eq + std::hash::Hash + std::fmt::Debug {}
