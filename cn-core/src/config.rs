//! Unified configuration schema.
//!
//! One YAML file configures clue selection, player choice, and the replay and
//! logging directories. The surrounding engine owns CLI flags and passes the
//! loaded `Config` down.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Clue selection settings.
    #[serde(default)]
    pub clue: ClueConfig,
    /// Player registry names per role kind.
    #[serde(default)]
    pub players: PlayersConfig,
    /// Replay persistence settings.
    #[serde(default)]
    pub replay: ReplayConfig,
    /// Session event logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Clue selection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClueConfig {
    /// Upper bound on the team-word bundle one clue may target.
    #[serde(default = "default_max_words_per_clue")]
    pub max_words_per_clue: u32,
    /// How many repeats of the same clue word are tolerated before it is
    /// skipped. 0 means a word may be chosen at most once.
    #[serde(default = "default_same_clue_patience")]
    pub same_clue_patience: u32,
    /// Per-word weight for closeness to targeted team words.
    #[serde(default = "default_team_weight")]
    pub team_weight: f32,
    /// Per-word penalty for closeness to enemy words. If unset, defaults to
    /// `-max_words_per_clue` so a large bundle cannot offset an enemy leak.
    #[serde(default)]
    pub enemy_weight: Option<f32>,
    /// Per-word penalty for closeness to civilian words.
    #[serde(default = "default_civilian_weight")]
    pub civilian_weight: f32,
    /// Per-word penalty for closeness to the assassin word. Large enough that
    /// any non-trivial closeness vetoes the candidate.
    #[serde(default = "default_assassin_weight")]
    pub assassin_weight: f32,
}

fn default_max_words_per_clue() -> u32 {
    3
}

fn default_same_clue_patience() -> u32 {
    1
}

fn default_team_weight() -> f32 {
    1.0
}

fn default_civilian_weight() -> f32 {
    -2.0
}

fn default_assassin_weight() -> f32 {
    -100.0
}

impl Default for ClueConfig {
    fn default() -> Self {
        Self {
            max_words_per_clue: default_max_words_per_clue(),
            same_clue_patience: default_same_clue_patience(),
            team_weight: default_team_weight(),
            enemy_weight: None,
            civilian_weight: default_civilian_weight(),
            assassin_weight: default_assassin_weight(),
        }
    }
}

/// Player selection configuration (registry names).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayersConfig {
    #[serde(default = "default_player_name")]
    pub codemaster: String,
    #[serde(default = "default_player_name")]
    pub guesser: String,
}

fn default_player_name() -> String {
    "vector".to_string()
}

impl Default for PlayersConfig {
    fn default() -> Self {
        Self {
            codemaster: default_player_name(),
            guesser: default_player_name(),
        }
    }
}

/// Replay persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReplayConfig {
    /// Directory holding one `<session_id>.json` per recorded game.
    #[serde(default = "default_replay_dir")]
    pub dir: String,
}

fn default_replay_dir() -> String {
    "replays".to_string()
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            dir: default_replay_dir(),
        }
    }
}

/// Session event logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Directory for NDJSON event logs and session manifests.
    #[serde(default = "default_logging_dir")]
    pub dir: String,
    /// Flush the event writer every N lines. 0 disables periodic flushing.
    #[serde(default)]
    pub flush_every_lines: u64,
}

fn default_logging_dir() -> String {
    "logs".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            flush_every_lines: 0,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
