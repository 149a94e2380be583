//! Append-only action log + durable store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use cn_core::{Action, Role};

use crate::schema::{ReplayDoc, RoleActions, Seed};
use crate::session::{ReplayError, ReplaySession};

/// In-memory, role-partitioned action log for one recorded session.
///
/// Single-writer by caller protocol: exactly one game session appends to one
/// log, so there is no internal locking. Entries are never reordered or
/// mutated after append; finalization consumes the log.
#[derive(Debug, Clone)]
pub struct ActionLog {
    doc: ReplayDoc,
}

impl ActionLog {
    pub fn new(seed: impl Into<Seed>) -> Self {
        ActionLog {
            doc: ReplayDoc {
                seed: seed.into(),
                actions: RoleActions::default(),
            },
        }
    }

    /// Append one action to its role's sequence. O(1) amortized.
    pub fn append(&mut self, action: &Action) {
        let (role, rec) = crate::schema::ActionRecord::from_action(action);
        self.doc.actions.get_mut(role).push(rec);
    }

    pub fn seed(&self) -> &Seed {
        &self.doc.seed
    }

    pub fn actions(&self) -> &RoleActions {
        &self.doc.actions
    }

    pub fn len(&self, role: Role) -> usize {
        self.doc.actions.get(role).len()
    }

    pub fn is_empty(&self) -> bool {
        self.doc.actions.total() == 0
    }

    pub(crate) fn into_doc(self) -> ReplayDoc {
        self.doc
    }
}

/// Maps session ids to `<dir>/<id>.json` and owns durability.
#[derive(Debug, Clone)]
pub struct ReplayStore {
    dir: PathBuf,
}

impl ReplayStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        ReplayStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Serialize and persist a finished log, atomically via tmp + rename so
    /// a crash never leaves a partial document behind. Consumes the log: a
    /// finalized session is immutable.
    pub fn finalize(&self, log: ActionLog, id: &str) -> Result<PathBuf, ReplayError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(id);
        let tmp = path.with_extension("json.tmp");

        let bytes = serde_json::to_vec_pretty(&log.into_doc())?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }

    /// Open a previously finalized log for playback.
    pub fn open(&self, id: &str) -> Result<ReplaySession, ReplayError> {
        let path = self.path_for(id);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReplayError::NotFound { id: id.to_string() })
            }
            Err(e) => return Err(ReplayError::Io(e)),
        };
        let doc: ReplayDoc =
            serde_json::from_slice(&bytes).map_err(|e| ReplayError::Corrupt {
                id: id.to_string(),
                reason: e.to_string(),
            })?;
        Ok(ReplaySession::from_doc(id, doc))
    }
}

/// Remove stale `.json.tmp` files left behind by a crash mid-finalize.
pub fn cleanup_tmp_files(dir: &Path) -> Result<(), ReplayError> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in fs::read_dir(dir)? {
        let e = entry?;
        let p = e.path();
        if let Some(name) = p.file_name().and_then(|s| s.to_str()) {
            if name.ends_with(".json.tmp") {
                let _ = fs::remove_file(&p);
            }
        }
    }
    Ok(())
}
