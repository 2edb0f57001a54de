//! Remote source parameters: request fan-out control.

use serde::{Deserialize, Serialize};

/// Controls how the remote source fetches per-roll-call votes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteSourceParams {
    /// Number of roll-call vote requests allowed in flight at once.
    /// `1` fetches strictly sequentially.
    pub max_concurrent_requests: usize,
}

impl Default for RemoteSourceParams {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 1,
        }
    }
}

impl RemoteSourceParams {
    pub fn with_max_concurrent_requests(mut self, max: usize) -> Self {
        self.max_concurrent_requests = max.max(1);
        self
    }
}
