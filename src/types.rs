//! Type aliases and common types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a single simulated coin toss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Toss {
    /// The coin landed heads (counts toward `k`).
    Heads,
    /// The coin landed tails.
    Tails,
}

impl Toss {
    /// Single-letter symbol appended to the outcome log ("H" or "T").
    pub fn symbol(self) -> char {
        match self {
            Toss::Heads => 'H',
            Toss::Tails => 'T',
        }
    }

    /// Whether this outcome is heads.
    pub fn is_heads(self) -> bool {
        matches!(self, Toss::Heads)
    }
}

impl fmt::Display for Toss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
