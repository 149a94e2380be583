//! Hint/guess actions and the four role-scoped session streams.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Team, Word};

/// The four fixed roles of a session. Wire names are snake_case
/// ("red_codemaster", ...) and double as the keys of the persisted log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    RedCodemaster,
    RedGuesser,
    BlueCodemaster,
    BlueGuesser,
}

pub const ALL_ROLES: [Role; 4] = [
    Role::RedCodemaster,
    Role::RedGuesser,
    Role::BlueCodemaster,
    Role::BlueGuesser,
];

impl Role {
    pub fn codemaster(team: Team) -> Role {
        match team {
            Team::Red => Role::RedCodemaster,
            Team::Blue => Role::BlueCodemaster,
        }
    }

    pub fn guesser(team: Team) -> Role {
        match team {
            Team::Red => Role::RedGuesser,
            Team::Blue => Role::BlueGuesser,
        }
    }

    pub fn team(self) -> Team {
        match self {
            Role::RedCodemaster | Role::RedGuesser => Team::Red,
            Role::BlueCodemaster | Role::BlueGuesser => Team::Blue,
        }
    }

    pub fn is_codemaster(self) -> bool {
        matches!(self, Role::RedCodemaster | Role::BlueCodemaster)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::RedCodemaster => "red_codemaster",
            Role::RedGuesser => "red_guesser",
            Role::BlueCodemaster => "blue_codemaster",
            Role::BlueGuesser => "blue_guesser",
        }
    }

    /// Stable 0..=3 index, used for per-role replay cursors.
    pub fn index(self) -> usize {
        match self {
            Role::RedCodemaster => 0,
            Role::RedGuesser => 1,
            Role::BlueCodemaster => 2,
            Role::BlueGuesser => 3,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded game event. The role is derived from variant + team so that
/// serialization and replay dispatch can match exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A codemaster's one-word hint plus target count.
    Hint { hint: Word, num: u32, team: Team },
    /// A guesser's board-word pick.
    Guess { word: Word, team: Team },
}

impl Action {
    pub fn role(&self) -> Role {
        match self {
            Action::Hint { team, .. } => Role::codemaster(*team),
            Action::Guess { team, .. } => Role::guesser(*team),
        }
    }

    pub fn team(&self) -> Team {
        match self {
            Action::Hint { team, .. } | Action::Guess { team, .. } => *team,
        }
    }
}
