// Dweve Bonchart - Bonnie++ benchmark charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read Bonnie++ CSV output into a [`ColumnTable`].

use crate::error::{CsvError, Result};
use crate::normalize::normalize_cell;
use crate::schema::SCHEMA;
use crate::table::ColumnTable;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Default maximum number of accepted rows.
///
/// A Bonnie++ result file holds one row per run, so real inputs stay far
/// below this. The limit bounds memory for arbitrary input.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ```
/// # use bonchart_csv::ParseConfig;
/// let config = ParseConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(!config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: u8,

    /// Whether to trim leading/trailing whitespace from fields (default: `false`).
    ///
    /// Bonnie++ never pads its fields, so values are kept exactly as written.
    pub trim: bool,

    /// Maximum number of accepted rows (default: 1,000,000).
    ///
    /// Parsing stops with [`CsvError::SecurityLimit`] once exceeded. Dropped
    /// rows do not count.
    pub max_rows: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse Bonnie++ CSV text with default configuration.
///
/// Every record whose field count equals [`SCHEMA`]`.len()` is a run. There is
/// no header handling, so a header line with the right width is read as data.
/// Records of any other width are dropped without error.
///
/// # Examples
///
/// ```
/// use bonchart_csv::{from_csv, SCHEMA};
///
/// let mut fields = vec![""; SCHEMA.len()];
/// fields[2] = "ssd";
/// fields[9] = "81234";
/// let csv = format!("{}\nnot,a,run\n", fields.join(","));
///
/// let table = from_csv(&csv).unwrap();
/// assert_eq!(table.row_count(), 1);
/// assert_eq!(table.column("name").unwrap(), ["ssd 1"]);
/// assert_eq!(table.column("outblk").unwrap(), ["81234"]);
/// assert_eq!(table.column("outch").unwrap(), ["null"]);
/// ```
pub fn from_csv(csv: &str) -> Result<ColumnTable> {
    from_csv_reader_with_config(csv.as_bytes(), ParseConfig::default())
}

/// Parse Bonnie++ CSV text with custom configuration.
pub fn from_csv_with_config(csv: &str, config: ParseConfig) -> Result<ColumnTable> {
    from_csv_reader_with_config(csv.as_bytes(), config)
}

/// Parse Bonnie++ CSV from a reader with default configuration.
///
/// # Examples
///
/// ```no_run
/// use bonchart_csv::from_csv_reader;
/// use std::fs::File;
///
/// let file = File::open("bonnie.csv").unwrap();
/// let table = from_csv_reader(file).unwrap();
/// ```
pub fn from_csv_reader<R: Read>(reader: R) -> Result<ColumnTable> {
    from_csv_reader_with_config(reader, ParseConfig::default())
}

/// Open `path` and parse it with default configuration.
///
/// # Errors
///
/// Returns [`CsvError::Io`] when the file cannot be opened or read.
pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<ColumnTable> {
    from_csv_path_with_config(path, ParseConfig::default())
}

/// Open `path` and parse it with custom configuration.
pub fn from_csv_path_with_config<P: AsRef<Path>>(
    path: P,
    config: ParseConfig,
) -> Result<ColumnTable> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading Bonnie++ results");
    let file = File::open(path)?;
    from_csv_reader_with_config(file, config)
}

/// Parse Bonnie++ CSV from a reader with custom configuration.
///
/// # Errors
///
/// - [`CsvError::Io`] if reading fails
/// - [`CsvError::ParseError`] if a record cannot be decoded (e.g. invalid UTF-8)
/// - [`CsvError::SecurityLimit`] if more than `config.max_rows` rows are accepted
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    config: ParseConfig,
) -> Result<ColumnTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let mut table = ColumnTable::new(SCHEMA);
    let mut run_index = 0;
    let mut dropped = 0usize;

    for result in csv_reader.records() {
        let record = result?;

        if record.len() != SCHEMA.len() {
            dropped += 1;
            debug!(
                line = record.position().map(|pos| pos.line()),
                fields = record.len(),
                expected = SCHEMA.len(),
                "skipping row with unexpected field count"
            );
            continue;
        }

        run_index += 1;
        if run_index > config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: run_index,
            });
        }

        let row = SCHEMA
            .iter()
            .zip(record.iter())
            .map(|(column, raw)| normalize_cell(column, raw, run_index))
            .collect();
        table.push_row(row);
    }

    debug!(runs = table.row_count(), dropped, "parsed Bonnie++ results");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::MISSING;

    fn row(overrides: &[(&str, &str)]) -> String {
        let fields: Vec<&str> = SCHEMA
            .iter()
            .map(|column| {
                overrides
                    .iter()
                    .find(|(c, _)| c == column)
                    .map(|(_, v)| *v)
                    .unwrap_or("1")
            })
            .collect();
        fields.join(",")
    }

    #[test]
    fn test_empty_input() {
        let table = from_csv("").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), SCHEMA.len());
        assert!(table.iter().all(|(_, values)| values.is_empty()));
    }

    #[test]
    fn test_wrong_width_rows_are_dropped() {
        let short = vec!["x"; SCHEMA.len() - 1].join(",");
        let long = vec!["x"; SCHEMA.len() + 1].join(",");
        let csv = format!("{}\n{}\n{}\n", short, row(&[("name", "a")]), long);

        let table = from_csv(&csv).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column("name").unwrap(), ["a 1"]);
    }

    #[test]
    fn test_run_index_counts_valid_rows_only() {
        let csv = format!(
            "junk\n{}\nmore,junk\n{}\n",
            row(&[("name", "run")]),
            row(&[("name", "run")])
        );
        let table = from_csv(&csv).unwrap();
        assert_eq!(table.column("name").unwrap(), ["run 1", "run 2"]);
    }

    #[test]
    fn test_header_row_is_data() {
        let header = SCHEMA.join(",");
        let table = from_csv(&header).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.column("name").unwrap(), ["name 1"]);
        assert_eq!(table.column("outblk").unwrap(), ["outblk"]);
    }

    #[test]
    fn test_cells_are_normalized() {
        let csv = row(&[
            ("outch", "+++++"),
            ("seek", ""),
            ("latoutblk", "5ms"),
            ("latinblk", "10us"),
            ("latrd", "7ns"),
            ("outblk", "12"),
        ]);
        let table = from_csv(&csv).unwrap();
        assert_eq!(table.column("outch").unwrap(), [MISSING]);
        assert_eq!(table.column("seek").unwrap(), [MISSING]);
        assert_eq!(table.column("latoutblk").unwrap(), ["5000000"]);
        assert_eq!(table.column("latinblk").unwrap(), ["10000"]);
        assert_eq!(table.column("latrd").unwrap(), ["7"]);
        assert_eq!(table.column("outblk").unwrap(), ["12"]);
    }

    #[test]
    fn test_quoted_fields() {
        let mut fields = vec!["1".to_string(); SCHEMA.len()];
        fields[2] = "\"disk, fast\"".to_string();
        let table = from_csv(&fields.join(",")).unwrap();
        assert_eq!(table.column("name").unwrap(), ["disk, fast 1"]);
    }

    #[test]
    fn test_custom_delimiter() {
        let csv = row(&[("name", "tab")]).replace(',', "\t");
        let config = ParseConfig {
            delimiter: b'\t',
            ..Default::default()
        };
        let table = from_csv_with_config(&csv, config).unwrap();
        assert_eq!(table.column("name").unwrap(), ["tab 1"]);
    }

    #[test]
    fn test_trim_option() {
        let csv = row(&[("outblk", " 42 ")]);

        let table = from_csv(&csv).unwrap();
        assert_eq!(table.column("outblk").unwrap(), [" 42 "]);

        let config = ParseConfig {
            trim: true,
            ..Default::default()
        };
        let table = from_csv_with_config(&csv, config).unwrap();
        assert_eq!(table.column("outblk").unwrap(), ["42"]);
    }

    #[test]
    fn test_max_rows_limit() {
        let csv = format!("{}\n{}\n{}\n", row(&[]), row(&[]), row(&[]));
        let config = ParseConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = from_csv_with_config(&csv, config).unwrap_err();
        assert!(matches!(err, CsvError::SecurityLimit { limit: 2, actual: 3 }));
    }

    #[test]
    fn test_max_rows_ignores_dropped_rows() {
        let csv = format!("a,b\nc,d\n{}\n", row(&[]));
        let config = ParseConfig {
            max_rows: 1,
            ..Default::default()
        };
        let table = from_csv_with_config(&csv, config).unwrap();
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let mut bytes = row(&[]).into_bytes();
        bytes[0] = 0xff;
        let err = from_csv_reader(&bytes[..]).unwrap_err();
        assert!(matches!(err, CsvError::ParseError { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = from_csv_path("/nonexistent/bonnie.csv").unwrap_err();
        assert!(matches!(err, CsvError::Io(_)));
    }
}
