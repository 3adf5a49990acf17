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

//! Command-line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Input file used when none is given.
pub const DEFAULT_INPUT: &str = "bonnie.csv";

/// Bonchart - Bonnie++ results as HTML bar charts
///
/// Reads a Bonnie++ CSV result file and writes an HTML page with one bar
/// chart per metric category to stdout.
///
/// # Examples
///
/// ```bash
/// # Chart bonnie.csv in the current directory
/// bonchart > report.html
///
/// # Chart a specific result file
/// bonchart results/nightly.csv > nightly.html
/// ```
#[derive(Parser, Debug)]
#[command(name = "bonchart")]
#[command(author, version, about = "Bonchart - Bonnie++ results as HTML bar charts", long_about = None)]
pub struct Cli {
    /// Bonnie++ CSV result file
    #[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub file: PathBuf,
}
