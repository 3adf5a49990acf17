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

//! Error types for report rendering.

use thiserror::Error;

/// Report rendering error types.
///
/// # Examples
///
/// ```
/// use bonchart_report::ReportError;
///
/// let err = ReportError::MissingColumn("latsr".to_string());
/// assert_eq!(err.to_string(), "Missing column in results: latsr");
/// ```
#[derive(Debug, Error)]
pub enum ReportError {
    /// A column used by a chart category is not in the table.
    #[error("Missing column in results: {0}")]
    MissingColumn(String),

    /// A string could not be encoded as a JavaScript literal.
    #[error("Encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing into the output buffer failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience type alias for `Result` with `ReportError`.
pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_display() {
        let err = ReportError::MissingColumn("name".to_string());
        assert_eq!(err.to_string(), "Missing column in results: name");
    }

    #[test]
    fn test_format_error_conversion() {
        let err = ReportError::from(std::fmt::Error);
        assert!(matches!(err, ReportError::Format(_)));
    }
}
