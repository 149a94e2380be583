//! cn-logging: NDJSON session events + manifest helpers.
//!
//! Append-only NDJSON logs for session post-mortems: one JSON object per
//! line, tolerant of a truncated trailing line after a crash.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use cn_core::{KeyColor, Team};
use serde::{Deserialize, Serialize};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Session manifest schema version.
pub const SESSION_MANIFEST_VERSION: u32 = 1;

/// One manifest per session, written atomically and updated as the session
/// progresses. Everything needed to find and reproduce a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionManifestV1 {
    pub session_manifest_version: u32,

    pub session_id: String,
    pub created_ts_ms: u64,

    /// Seed as recorded in the replay document, stringified.
    pub seed: String,

    // Registry names of the four players.
    pub red_codemaster: String,
    pub red_guesser: String,
    pub blue_codemaster: String,
    pub blue_guesser: String,

    // Hashes for reproducibility.
    pub config_hash: Option<String>,
    pub git_hash: Option<String>,

    // Layout.
    pub replay_path: Option<String>,
    pub logs_dir: String,

    // Counters / outcome.
    pub recorded_actions: u64,
    pub winner: Option<Team>,
}

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

pub fn try_git_hash() -> Option<String> {
    use std::process::Command;

    let out = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !out.status.success() {
        return None;
    }
    let s = String::from_utf8(out.stdout).ok()?;
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}

/// Conventional NDJSON event log location for one session.
pub fn session_events_path(logs_dir: impl AsRef<Path>, session_id: &str) -> std::path::PathBuf {
    logs_dir.as_ref().join(format!("{session_id}.ndjson"))
}

pub fn read_manifest(path: impl AsRef<Path>) -> Result<SessionManifestV1, NdjsonError> {
    let bytes = std::fs::read(path)?;
    Ok(serde_json::from_slice::<SessionManifestV1>(&bytes)?)
}

pub fn write_manifest_atomic(
    path: impl AsRef<Path>,
    m: &SessionManifestV1,
) -> Result<(), NdjsonError> {
    let path = path.as_ref();
    let tmp = path.with_extension("json.tmp");
    let bytes = serde_json::to_vec_pretty(m)?;
    std::fs::write(&tmp, bytes)?;
    std::fs::rename(&tmp, path)?;
    Ok(())
}

/// Emitted once per codemaster turn, after selection.
#[derive(Debug, Clone, Serialize)]
pub struct ClueEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub session_id: String,
    pub turn: u32,
    pub team: Team,

    pub clue: String,
    pub num: u32,
    pub score: f32,

    pub candidates_ranked: u64,
    pub patience_skips: u32,
}

/// Emitted once per resolved guess.
#[derive(Debug, Clone, Serialize)]
pub struct GuessEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub session_id: String,
    pub turn: u32,
    pub team: Team,

    pub word: String,
    pub color: KeyColor,
}

/// Emitted once when a session ends.
#[derive(Debug, Clone, Serialize)]
pub struct SessionEndEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,

    pub session_id: String,
    pub turns: u32,
    pub winner: Option<Team>,
    pub reason: String,
}

#[derive(Debug)]
pub enum NdjsonError {
    Io(io::Error),
    Json(serde_json::Error),
}

impl From<io::Error> for NdjsonError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for NdjsonError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    out: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            out: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.out.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.out.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
