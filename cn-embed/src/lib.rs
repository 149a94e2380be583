//! cn-embed: Word embedding spaces, ordered-fallback lookup, and cosine
//! distance.
//!
//! Loading and parsing of on-disk vector formats stays outside this crate; a
//! space is built from in-memory entries and is immutable afterwards.

pub mod distance;
pub mod provider;
pub mod store;

pub use distance::cosine_distance;
pub use provider::SpaceProvider;
pub use store::{EmbeddingSpace, EmbeddingStore, SpaceError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");


#[cfg(test)]
mod store_tests;
