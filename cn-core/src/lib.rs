//! cn-core: Board/word types, roles, actions, and configuration.

pub mod action;
pub mod board;
pub mod config;

pub use action::{Action, Role, ALL_ROLES};
pub use board::{Board, BoardWord, KeyColor, Partition, Team, Word};
pub use config::{Config, ConfigError};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
