//! Recorded choices
//!
//! Only three recorded stances take part in aggregation. Everything else a
//! source may report (obstruction, "Artigo 17", absence) is excluded before
//! grouping and never touches participation or agreement.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A stance counted for agreement and participation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Choice {
    Yes,
    No,
    Abstain,
}

impl Choice {
    /// Map a value as recorded by a source into a counted choice.
    ///
    /// Accepts the Portuguese labels used by the Câmara open data
    /// (`Sim`, `Não`, `Abstenção`) and the English names, ignoring case and
    /// surrounding whitespace. Returns `None` for any excluded value.
    pub fn from_recorded(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "sim" | "yes" => Some(Choice::Yes),
            "não" | "nao" | "no" => Some(Choice::No),
            "abstenção" | "abstencao" | "abstain" | "abstention" => Some(Choice::Abstain),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Yes => "yes",
            Choice::No => "no",
            Choice::Abstain => "abstain",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Choice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_recorded(s).ok_or_else(|| DomainError::ExcludedChoice(s.trim().to_string()))
    }
}
