//! Board words, key colors, and team-relative partitions.
//!
//! The board is created once per game by the surrounding engine and is
//! read-only to the clue/replay core; the engine flips `revealed` as guesses
//! resolve.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized (lowercase) word token. Identity is the normalized string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalize on construction: trim whitespace, lowercase.
    pub fn new(s: &str) -> Self {
        Word(s.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Word {
    fn from(s: &str) -> Self {
        Word::new(s)
    }
}

/// Hidden classification of one board word (the key grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyColor {
    Red,
    Blue,
    Civilian,
    Assassin,
}

/// A playing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn opponent(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    pub fn key_color(self) -> KeyColor {
        match self {
            Team::Red => KeyColor::Red,
            Team::Blue => KeyColor::Blue,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Team::Red => "red",
            Team::Blue => "blue",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One board word plus its key color and revealed flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardWord {
    pub word: Word,
    pub color: KeyColor,
    pub revealed: bool,
}

impl BoardWord {
    pub fn hidden(word: impl Into<Word>, color: KeyColor) -> Self {
        BoardWord {
            word: word.into(),
            color,
            revealed: false,
        }
    }
}

/// Team-relative view of the unrevealed board.
#[derive(Debug, Clone, Default)]
pub struct Partition<'a> {
    pub team: Vec<&'a Word>,
    pub enemy: Vec<&'a Word>,
    pub civilian: Vec<&'a Word>,
    pub assassin: Vec<&'a Word>,
}

/// The per-game word set.
#[derive(Debug, Clone, Default)]
pub struct Board {
    words: Vec<BoardWord>,
}

impl Board {
    pub fn new(words: Vec<BoardWord>) -> Self {
        Board { words }
    }

    pub fn words(&self) -> &[BoardWord] {
        &self.words
    }

    pub fn unrevealed(&self) -> impl Iterator<Item = &BoardWord> {
        self.words.iter().filter(|bw| !bw.revealed)
    }

    /// Engine-side mutation: mark a word revealed. Returns false if the word
    /// is not on the board or already revealed.
    pub fn reveal(&mut self, word: &Word) -> bool {
        match self.words.iter_mut().find(|bw| &bw.word == word) {
            Some(bw) if !bw.revealed => {
                bw.revealed = true;
                true
            }
            _ => false,
        }
    }

    /// Split the unrevealed words into the four scoring categories as seen by
    /// `team`. The four sets are disjoint; revealed words appear in none.
    pub fn partition(&self, team: Team) -> Partition<'_> {
        let mut p = Partition::default();
        for bw in self.unrevealed() {
            match bw.color {
                c if c == team.key_color() => p.team.push(&bw.word),
                c if c == team.opponent().key_color() => p.enemy.push(&bw.word),
                KeyColor::Civilian => p.civilian.push(&bw.word),
                KeyColor::Assassin => p.assassin.push(&bw.word),
                _ => unreachable!("key color already matched above"),
            }
        }
        p
    }

    /// True if `w` may be given as a clue: it must not equal any board word
    /// (revealed or not), nor contain or be contained by any unrevealed board
    /// word. Prevents literal giveaways.
    pub fn is_legal_clue_word(&self, w: &Word) -> bool {
        for bw in &self.words {
            if bw.word == *w {
                return false;
            }
            if !bw.revealed {
                let a = w.as_str();
                let b = bw.word.as_str();
                if a.contains(b) || b.contains(a) {
                    return false;
                }
            }
        }
        true
    }
}
