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

//! Bonnie++ CSV result parsing.
//!
//! This crate reads the CSV lines written by `bonnie++` into a
//! [`ColumnTable`]: one column per field of the fixed Bonnie++ 1.9x layout,
//! one value per run.
//!
//! # Normalization
//!
//! Raw cells are rewritten while parsing:
//!
//! - Empty cells and cells made only of `+` → `null`
//! - `<digits>ms`, `<digits>us`, `<digits>ns` → integer nanoseconds
//! - `name` → `"<name> <run>"`, where `<run>` is the 1-based index of the row
//!   among accepted rows
//! - Otherwise → unchanged
//!
//! Rows whose field count differs from [`SCHEMA`] are skipped silently.
//!
//! # Examples
//!
//! ```
//! use bonchart_csv::{from_csv, SCHEMA};
//!
//! let mut run = vec!["+++++"; SCHEMA.len()];
//! run[2] = "ext4";
//! run[37] = "1250us";
//! let csv = format!("{0}\n{0}\n", run.join(","));
//!
//! let table = from_csv(&csv).unwrap();
//! assert_eq!(table.column("name").unwrap(), ["ext4 1", "ext4 2"]);
//! assert_eq!(table.column("latoutblk").unwrap(), ["1250000", "1250000"]);
//! assert_eq!(table.column("outblk").unwrap(), ["null", "null"]);
//! ```

mod error;
mod from_csv;
mod normalize;
mod schema;
mod table;

// Re-export public API
pub use error::{CsvError, Result};
pub use from_csv::{
    from_csv, from_csv_path, from_csv_path_with_config, from_csv_reader,
    from_csv_reader_with_config, from_csv_with_config, ParseConfig, DEFAULT_MAX_ROWS,
};
pub use normalize::{is_missing, normalize_cell, parse_duration_ns, MISSING};
pub use schema::{column_index, NAME_COLUMN, SCHEMA};
pub use table::ColumnTable;
