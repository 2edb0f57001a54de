//! Tabular export configuration from TOML (`[tabular]` section)

use super::{ConfigIssue, ConfigValidationError};
use crate::tabular::CsvLayout;
use serde::{Deserialize, Serialize};

/// Raw `[tabular]` configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTabularConfig {
    /// Field separator; a single ASCII character (`";"`, `","`, `"\t"`)
    pub delimiter: String,
    pub roll_call_column: String,
    pub voter_id_column: String,
    pub voter_name_column: String,
    pub choice_column: String,
}

impl Default for FileTabularConfig {
    fn default() -> Self {
        let layout = CsvLayout::default();
        Self {
            delimiter: (layout.delimiter as char).to_string(),
            roll_call_column: layout.roll_call_column,
            voter_id_column: layout.voter_id_column,
            voter_name_column: layout.voter_name_column,
            choice_column: layout.choice_column,
        }
    }
}

impl FileTabularConfig {
    pub fn parse_delimiter(&self) -> Result<u8, ConfigValidationError> {
        parse_delimiter(&self.delimiter)
    }

    pub fn to_layout(&self) -> Result<CsvLayout, ConfigValidationError> {
        Ok(CsvLayout {
            delimiter: self.parse_delimiter()?,
            roll_call_column: self.roll_call_column.clone(),
            voter_id_column: self.voter_id_column.clone(),
            voter_name_column: self.voter_name_column.clone(),
            choice_column: self.choice_column.clone(),
        })
    }

    pub(super) fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if let Err(e) = self.parse_delimiter() {
            issues.push(ConfigIssue::error(e));
        }

        let columns = [
            ("tabular.roll_call_column", &self.roll_call_column),
            ("tabular.voter_name_column", &self.voter_name_column),
            ("tabular.choice_column", &self.choice_column),
        ];
        for (field, value) in columns {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(ConfigValidationError::EmptyValue { field }));
            }
        }

        issues
    }
}

/// A delimiter must be exactly one ASCII character.
pub fn parse_delimiter(raw: &str) -> Result<u8, ConfigValidationError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(ConfigValidationError::InvalidDelimiter(raw.to_string())),
    }
}
