//! Voter identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator that replaces whitespace runs inside a display name.
pub const KEY_SEPARATOR: char = '_';

/// Normalized legislator identity.
///
/// Built from a display name by trimming it and collapsing every run of
/// whitespace into a single [`KEY_SEPARATOR`]. Both ingestion paths go through
/// [`VoterKey::from_display_name`], so the same legislator is keyed
/// identically no matter where the vote came from.
///
/// Two distinct legislators whose names normalize to the same key are not
/// told apart.
///
/// # Example
///
/// ```
/// use votegraph_domain::VoterKey;
///
/// let key = VoterKey::from_display_name("  Maria   da Silva ");
/// assert_eq!(key.as_str(), "Maria_da_Silva");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterKey(String);

impl VoterKey {
    pub fn from_display_name(name: &str) -> Self {
        let mut key = String::with_capacity(name.len());
        for word in name.split_whitespace() {
            if !key.is_empty() {
                key.push(KEY_SEPARATOR);
            }
            key.push_str(word);
        }
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// A blank display name produces an empty key, which sources reject.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for VoterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VoterKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
