//! Persisted session document shape.
//!
//! The document has exactly two top-level fields: `seed` and `actions`, the
//! latter keyed by the four fixed roles. Hint records are `{hint, num}`,
//! guess records `{word}`; the role is the key of the sequence a record sits
//! in, not a field of the record.

use cn_core::{Action, Role, Word};
use serde::{Deserialize, Serialize};

/// Game seed as recorded; the surrounding engine seeds with either a number
/// or an opaque string (e.g. "time").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl From<u64> for Seed {
    fn from(n: u64) -> Self {
        Seed::Number(n)
    }
}

impl From<&str> for Seed {
    fn from(s: &str) -> Self {
        Seed::Text(s.to_string())
    }
}

/// One action record on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum ActionRecord {
    Hint { hint: String, num: u32 },
    Guess { word: String },
}

impl ActionRecord {
    /// Strip an action down to its wire record plus the role key it belongs
    /// under.
    pub fn from_action(action: &Action) -> (Role, ActionRecord) {
        let role = action.role();
        let rec = match action {
            Action::Hint { hint, num, .. } => ActionRecord::Hint {
                hint: hint.as_str().to_string(),
                num: *num,
            },
            Action::Guess { word, .. } => ActionRecord::Guess {
                word: word.as_str().to_string(),
            },
        };
        (role, rec)
    }

    /// Reattach a role to a wire record. `None` if the record kind does not
    /// match the role (a guess under a codemaster key, or vice versa).
    pub fn into_action(self, role: Role) -> Option<Action> {
        match (self, role.is_codemaster()) {
            (ActionRecord::Hint { hint, num }, true) => Some(Action::Hint {
                hint: Word::new(&hint),
                num,
                team: role.team(),
            }),
            (ActionRecord::Guess { word }, false) => Some(Action::Guess {
                word: Word::new(&word),
                team: role.team(),
            }),
            _ => None,
        }
    }
}

/// The four fixed role keys of the persisted document. All four are always
/// present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoleActions {
    pub red_codemaster: Vec<ActionRecord>,
    pub red_guesser: Vec<ActionRecord>,
    pub blue_codemaster: Vec<ActionRecord>,
    pub blue_guesser: Vec<ActionRecord>,
}

impl RoleActions {
    pub fn get(&self, role: Role) -> &Vec<ActionRecord> {
        match role {
            Role::RedCodemaster => &self.red_codemaster,
            Role::RedGuesser => &self.red_guesser,
            Role::BlueCodemaster => &self.blue_codemaster,
            Role::BlueGuesser => &self.blue_guesser,
        }
    }

    pub fn get_mut(&mut self, role: Role) -> &mut Vec<ActionRecord> {
        match role {
            Role::RedCodemaster => &mut self.red_codemaster,
            Role::RedGuesser => &mut self.red_guesser,
            Role::BlueCodemaster => &mut self.blue_codemaster,
            Role::BlueGuesser => &mut self.blue_guesser,
        }
    }

    /// Total records across all four roles.
    pub fn total(&self) -> usize {
        self.red_codemaster.len()
            + self.red_guesser.len()
            + self.blue_codemaster.len()
            + self.blue_guesser.len()
    }
}

/// The full persisted document. Unknown fields are rejected so shape drift
/// is caught at open time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplayDoc {
    pub seed: Seed,
    pub actions: RoleActions,
}
