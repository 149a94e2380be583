//! cn-replay: Append-only session logs + deterministic playback.
//!
//! One JSON document per recorded game: the seed plus four role-partitioned
//! action sequences. A finalized log can later be opened as a
//! `ReplaySession` and served back, role by role, in original order.

pub mod log;
pub mod schema;
pub mod session;

pub use log::{cleanup_tmp_files, ActionLog, ReplayStore};
pub use schema::{ActionRecord, ReplayDoc, RoleActions, Seed};
pub use session::{ReplayError, ReplaySession};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
