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

//! Structured error types for the Bonchart CLI.

use bonchart_csv::CsvError;
use bonchart_report::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Bonchart CLI operations.
///
/// Every variant is fatal: the command stops before anything is written to
/// stdout.
///
/// # Examples
///
/// ```rust,no_run
/// use bonchart_cli::error::CliError;
///
/// fn open(path: &str) -> Result<std::fs::File, CliError> {
///     std::fs::File::open(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug)]
pub enum CliError {
    /// The input file could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The input file could not be decoded as CSV.
    #[error("Parse error in '{path}': {source}")]
    Parse {
        /// The file being parsed
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: CsvError,
    },

    /// The report could not be rendered.
    #[error("Render error: {0}")]
    Render(#[from] ReportError),

    /// Writing the document to stdout failed.
    #[error("Failed to write to stdout: {0}")]
    Output(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Attach the input path to a parser error.
    ///
    /// I/O failures become [`CliError::Io`]; everything else is
    /// [`CliError::Parse`].
    pub fn from_csv(path: impl Into<PathBuf>, source: CsvError) -> Self {
        match source {
            CsvError::Io(err) => Self::io_error(path, err),
            source => Self::Parse {
                path: path.into(),
                source,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "bonnie.csv",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("bonnie.csv"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_csv_io_error_becomes_io() {
        let source = CsvError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        let err = CliError::from_csv("runs.csv", source);
        assert!(matches!(err, CliError::Io { .. }));
        assert!(err.to_string().contains("runs.csv"));
    }

    #[test]
    fn test_csv_parse_error_keeps_source() {
        let source = CsvError::ParseError {
            line: 4,
            message: "invalid UTF-8".to_string(),
        };
        let err = CliError::from_csv("runs.csv", source);
        assert_eq!(
            err.to_string(),
            "Parse error in 'runs.csv': CSV parse error at line 4: invalid UTF-8"
        );
    }

    #[test]
    fn test_render_error_conversion() {
        let err: CliError = ReportError::MissingColumn("name".to_string()).into();
        assert_eq!(err.to_string(), "Render error: Missing column in results: name");
    }
}
