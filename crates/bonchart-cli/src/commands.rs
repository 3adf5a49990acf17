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

//! Chart generation command.

use crate::error::CliError;
use bonchart_csv::from_csv_path;
use bonchart_report::render;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Parse `file` and render the full HTML report.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or decoded, or if rendering fails.
/// Rows with the wrong field count are not errors; they are skipped.
///
/// # Examples
///
/// ```no_run
/// use bonchart_cli::commands::generate;
/// use std::path::Path;
///
/// # fn main() -> Result<(), bonchart_cli::error::CliError> {
/// let html = generate(Path::new("bonnie.csv"))?;
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// # Ok(())
/// # }
/// ```
pub fn generate(file: &Path) -> Result<String, CliError> {
    let table = from_csv_path(file).map_err(|e| CliError::from_csv(file, e))?;
    info!(
        path = %file.display(),
        runs = table.row_count(),
        "loaded benchmark runs"
    );
    Ok(render(&table)?)
}

/// Write the finished document to stdout.
pub fn write_output(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| CliError::Output(e.to_string()))
}

/// Generate the report for `file` and print it.
pub fn run(file: &Path) -> Result<(), CliError> {
    let html = generate(file)?;
    write_output(&html)
}
