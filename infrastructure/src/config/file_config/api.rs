//! Remote API configuration from TOML (`[api]` section)

use super::{ConfigIssue, ConfigValidationError, Severity};
use crate::camara::{CamaraClientConfig, DEFAULT_BASE_URL, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use votegraph_application::RemoteSourceParams;

/// Raw `[api]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileApiConfig {
    /// Root of the open-data API, without a trailing `/votacoes`
    pub base_url: String,
    /// Roll-calls per listing page (`itens`)
    pub page_size: u32,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Roll-call vote fetches in flight at once (1 = sequential)
    pub max_concurrent_requests: usize,
    /// Overrides the default `votegraph/<version>` user agent
    pub user_agent: Option<String>,
}

impl Default for FileApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: MAX_PAGE_SIZE,
            timeout_secs: 30,
            max_concurrent_requests: 1,
            user_agent: None,
        }
    }
}

impl FileApiConfig {
    pub fn to_client_config(&self) -> CamaraClientConfig {
        let mut config = CamaraClientConfig {
            base_url: self.base_url.clone(),
            page_size: self.page_size.clamp(1, MAX_PAGE_SIZE),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
            ..Default::default()
        };
        if let Some(agent) = self.user_agent.as_ref().filter(|a| !a.trim().is_empty()) {
            config.user_agent = agent.clone();
        }
        config
    }

    pub fn to_source_params(&self) -> RemoteSourceParams {
        RemoteSourceParams::default().with_max_concurrent_requests(self.max_concurrent_requests)
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigIssue::error(ConfigValidationError::InvalidBaseUrl(
                self.base_url.clone(),
            )));
        }
        if self.page_size == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::Zero {
                field: "api.page_size",
            }));
        } else if self.page_size > MAX_PAGE_SIZE {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                error: ConfigValidationError::TooLarge {
                    field: "api.page_size",
                    max: MAX_PAGE_SIZE as u64,
                    value: self.page_size as u64,
                },
            });
        }
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::Zero {
                field: "api.timeout_secs",
            }));
        }
        if self.max_concurrent_requests == 0 {
            issues.push(ConfigIssue::error(ConfigValidationError::Zero {
                field: "api.max_concurrent_requests",
            }));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_target_public_api() {
        let config = FileApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.page_size, 200);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_client_config_clamps_page_size() {
        let config = FileApiConfig {
            page_size: 500,
            ..Default::default()
        };
        assert_eq!(config.to_client_config().page_size, MAX_PAGE_SIZE);
        assert_eq!(config.validate()[0].severity, Severity::Warning);
    }

    #[test]
    fn test_custom_user_agent() {
        let config = FileApiConfig {
            user_agent: Some("research-bot/1.0".to_string()),
            ..Default::default()
        };
        assert_eq!(config.to_client_config().user_agent, "research-bot/1.0");
    }

    #[test]
    fn test_zero_values_are_errors() {
        let config = FileApiConfig {
            page_size: 0,
            timeout_secs: 0,
            max_concurrent_requests: 0,
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_source_params() {
        let config = FileApiConfig {
            max_concurrent_requests: 8,
            ..Default::default()
        };
        assert_eq!(config.to_source_params().max_concurrent_requests, 8);
    }
}
