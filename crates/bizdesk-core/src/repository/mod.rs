//! Repository Layer
//!
//! Data access abstraction and its in-memory implementation.

mod traits;
mod collection;

#[cfg(test)]
mod tests;

pub use traits::Repository;
pub use collection::Collection;
