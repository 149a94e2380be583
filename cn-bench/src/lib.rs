//! cn-bench: criterion benches for clue scoring and selection.

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
