//! Deterministic playback of a finalized session log.

use cn_core::{Action, Role};
use thiserror::Error;

use crate::schema::{ReplayDoc, RoleActions, Seed};

#[derive(Debug, Error)]
pub enum ReplayError {
    /// No persisted log exists for the requested session id.
    #[error("no replay found for session '{id}'")]
    NotFound { id: String },
    /// The stored document cannot be parsed into the expected shape. Never
    /// auto-repaired.
    #[error("replay for session '{id}' is corrupt: {reason}")]
    Corrupt { id: String, reason: String },
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// The role's recorded sequence is fully consumed. A normal
    /// end-of-sequence signal, not a fatal condition.
    #[error("no recorded actions left for role {role}")]
    Exhausted { role: Role },
}

/// Serves a recorded session back, role by role, in original order, standing
/// in for either role. Owns no durable state.
#[derive(Debug, Clone)]
pub struct ReplaySession {
    id: String,
    seed: Seed,
    actions: RoleActions,
    // Next-index per role; advances monotonically, never skips.
    cursors: [usize; 4],
}

impl ReplaySession {
    pub fn from_doc(id: impl Into<String>, doc: ReplayDoc) -> Self {
        ReplaySession {
            id: id.into(),
            seed: doc.seed,
            actions: doc.actions,
            cursors: [0; 4],
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Records left for `role` without consuming any.
    pub fn remaining(&self, role: Role) -> usize {
        self.actions.get(role).len() - self.cursors[role.index()]
    }

    /// Return the action at the role's cursor and advance it. Cursors for
    /// distinct roles are independent.
    pub fn next_action(&mut self, role: Role) -> Result<Action, ReplayError> {
        let seq = self.actions.get(role);
        let i = self.cursors[role.index()];
        let Some(rec) = seq.get(i) else {
            return Err(ReplayError::Exhausted { role });
        };
        let action = rec
            .clone()
            .into_action(role)
            .ok_or_else(|| ReplayError::Corrupt {
                id: self.id.clone(),
                reason: format!("record {i} under '{role}' does not match the role kind"),
            })?;
        self.cursors[role.index()] += 1;
        Ok(action)
    }
}
