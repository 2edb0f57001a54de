//! Graph orientation value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether agreement is stored once per unordered pair or twice, mirrored.
///
/// Both orientations hold the same weights; directed output lists every
/// agreeing pair in both directions and therefore reports twice the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Directed,
    #[default]
    Undirected,
}

impl Orientation {
    /// Tag used to tell output artifacts of the two orientations apart.
    pub fn tag(&self) -> &'static str {
        match self {
            Orientation::Directed => "directed",
            Orientation::Undirected => "undirected",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Orientation {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "directed" | "d" => Ok(Orientation::Directed),
            "undirected" | "u" => Ok(Orientation::Undirected),
            other => Err(DomainError::InvalidOrientation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undirected() {
        assert_eq!(Orientation::default(), Orientation::Undirected);
    }

    #[test]
    fn test_tags_differ() {
        assert_ne!(Orientation::Directed.tag(), Orientation::Undirected.tag());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Directed".parse::<Orientation>().unwrap(), Orientation::Directed);
        assert_eq!("u".parse::<Orientation>().unwrap(), Orientation::Undirected);
        assert!("sideways".parse::<Orientation>().is_err());
    }

    #[test]
    fn test_deserialize_lowercase() {
        let o: Orientation = serde_json::from_str("\"directed\"").unwrap();
        assert_eq!(o, Orientation::Directed);
    }
}
