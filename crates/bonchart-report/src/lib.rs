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

//! HTML bar chart reports for Bonnie++ results.
//!
//! Takes the [`ColumnTable`](bonchart_csv::ColumnTable) produced by
//! `bonchart-csv` and renders a self-contained HTML page with one Google
//! Charts bar chart per metric category. Every run is a series, every metric
//! of the category is a row.
//!
//! # Categories
//!
//! | Key | Chart | Unit |
//! |-----|-------|------|
//! | `blockio` | Block IO | kB/sec, higher is better |
//! | `metadata` | File metadata | files/sec, higher is better |
//! | `blockio-cpu` | Block IO CPU | CPU %, lower is better |
//! | `metadata-cpu` | Seq and Random CPU | CPU %, lower is better |
//! | `blockio-latency` | Block IO Latency | ns, lower is better |
//! | `metadata-latency` | File metadata Latency | ns, lower is better |
//! | `metadata-read-latency` | File metadata (read) Latency | ns, lower is better |
//!
//! # Examples
//!
//! ```
//! use bonchart_csv::{from_csv, SCHEMA};
//! use bonchart_report::{render_with_config, ReportConfig};
//!
//! let mut run = vec!["+++++"; SCHEMA.len()];
//! run[2] = "raid10";
//! let table = from_csv(&run.join(",")).unwrap();
//!
//! let config = ReportConfig {
//!     title: "Storage comparison".to_string(),
//!     ..Default::default()
//! };
//! let html = render_with_config(&table, &config).unwrap();
//! assert!(html.contains("<title>Storage comparison</title>"));
//! assert!(html.contains("chart_div_blockio-latency"));
//! ```

mod categories;
mod chart;
mod error;
mod html;

// Re-export public API
pub use categories::{category, label_for, ChartCategory, CATEGORIES, LABELS};
pub use chart::{build_charts, ChartData, ChartRow};
pub use error::{ReportError, Result};
pub use html::{render, render_with_config, ReportConfig, DEFAULT_LOADER_URL, DEFAULT_TITLE};
