//! Delimited-text reader for vote exports
//!
//! The Câmara publishes yearly exports (`votacoesVotos-<year>.csv`) with one
//! row per cast vote, `;`-separated and quoted:
//!
//! ```text
//! "idVotacao";"uriVotacao";"dataHoraVoto";"voto";"deputado_id";"deputado_nome";...
//! "2265603-43";"https://...";"2023-12-21T19:34:15";"Sim";"204554";"Abilio Brunini";...
//! ```
//!
//! Columns are located by header name, so extra or reordered columns are fine.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::path::Path;
use tracing::debug;
use votegraph_application::{SourceError, TabularRow, TabularRowReader};

/// Delimiter and column names of a vote export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLayout {
    pub delimiter: u8,
    pub roll_call_column: String,
    /// Optional in the file; used only to detect name collisions.
    pub voter_id_column: String,
    pub voter_name_column: String,
    pub choice_column: String,
}

impl Default for CsvLayout {
    fn default() -> Self {
        Self {
            delimiter: b';',
            roll_call_column: "idVotacao".to_string(),
            voter_id_column: "deputado_id".to_string(),
            voter_name_column: "deputado_nome".to_string(),
            choice_column: "voto".to_string(),
        }
    }
}

struct ColumnIndex {
    roll_call: usize,
    voter_id: Option<usize>,
    voter_name: usize,
    choice: usize,
}

/// [`TabularRowReader`] backed by the `csv` crate
#[derive(Debug, Clone, Default)]
pub struct CsvTabularReader {
    layout: CsvLayout,
}

impl CsvTabularReader {
    pub fn new(layout: CsvLayout) -> Self {
        Self { layout }
    }

    fn locate(&self, headers: &StringRecord, what: &str) -> Result<ColumnIndex, SourceError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                SourceError::parse(what, format!("missing column '{}'", name))
            })
        };

        Ok(ColumnIndex {
            roll_call: require(&self.layout.roll_call_column)?,
            voter_id: find(&self.layout.voter_id_column),
            voter_name: require(&self.layout.voter_name_column)?,
            choice: require(&self.layout.choice_column)?,
        })
    }
}

impl TabularRowReader for CsvTabularReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<TabularRow>, SourceError> {
        let what = path.display().to_string();

        let mut reader = ReaderBuilder::new()
            .delimiter(self.layout.delimiter)
            .trim(Trim::All)
            .flexible(true)
            .from_path(path)
            .map_err(|e| SourceError::parse(&what, e))?;

        let headers = reader
            .headers()
            .map_err(|e| SourceError::parse(&what, e))?
            .clone();
        let columns = self.locate(&headers, &what)?;
        debug!("Reading {} with columns {:?}", what, headers);

        let field =
            |record: &StringRecord, index: usize| record.get(index).unwrap_or("").to_string();

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                SourceError::parse(&what, format!("row {}: {}", line + 2, e))
            })?;
            rows.push(TabularRow::new(
                field(&record, columns.roll_call),
                columns
                    .voter_id
                    .map(|i| field(&record, i))
                    .unwrap_or_default(),
                field(&record, columns.voter_name),
                field(&record, columns.choice),
            ));
        }

        Ok(rows)
    }
}
