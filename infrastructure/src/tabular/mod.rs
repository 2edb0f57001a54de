//! Tabular vote export readers

mod csv_reader;

pub use csv_reader::{CsvLayout, CsvTabularReader};
