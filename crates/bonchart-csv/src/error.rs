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

//! Error types for Bonnie++ CSV parsing.

use thiserror::Error;

/// CSV parsing error types.
///
/// Malformed rows are not errors: a row with the wrong field count is dropped
/// by the parser. These variants cover the failures that abort a parse.
///
/// # Examples
///
/// ```
/// use bonchart_csv::CsvError;
///
/// let err = CsvError::ParseError {
///     line: 3,
///     message: "invalid UTF-8".to_string(),
/// };
///
/// assert_eq!(err.to_string(), "CSV parse error at line 3: invalid UTF-8");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// CSV decoding error at a specific line.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// I/O error while opening or reading the input.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonchart_csv::CsvError;
    /// use std::io;
    ///
    /// let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    /// let csv_err = CsvError::from(io_err);
    /// assert!(csv_err.to_string().starts_with("I/O error"));
    /// ```
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Valid row count exceeded the configured limit.
    ///
    /// # Examples
    ///
    /// ```
    /// use bonchart_csv::CsvError;
    ///
    /// let err = CsvError::SecurityLimit {
    ///     limit: 10,
    ///     actual: 11,
    /// };
    /// assert!(err.to_string().contains("Security limit"));
    /// ```
    #[error("Security limit exceeded: row count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed rows.
        limit: usize,
        /// Row count at which parsing stopped.
        actual: usize,
    },
}

/// Convenience type alias for `Result` with `CsvError`.
pub type Result<T> = std::result::Result<T, CsvError>;

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|pos| pos.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => CsvError::Io(io_err),
            _ => CsvError::ParseError { line, message },
        }
    }
}
