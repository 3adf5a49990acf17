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

//! Per-cell normalization of raw Bonnie++ fields.
//!
//! Bonnie++ mixes several encodings in one file: empty fields and runs of `+`
//! for tests that were skipped or too fast to measure, latencies with a unit
//! suffix, and test names that repeat across runs. Every cell is rewritten into
//! one of:
//!
//! - [`MISSING`] for "no data",
//! - an integer nanosecond count for `<digits>ms`, `<digits>us`, `<digits>ns`,
//! - `"<name> <run>"` for the `name` column,
//! - the original text otherwise.

use crate::schema::NAME_COLUMN;
use once_cell::sync::Lazy;
use regex::Regex;

/// Marker emitted for cells without data.
pub const MISSING: &str = "null";

static MISSING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\++\z").expect("valid missing-value pattern"));

static DURATION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A(\d+)(ms|us|ns)\z").expect("valid duration pattern"));

/// Returns `true` for an empty cell or a cell made only of `+` characters.
///
/// # Examples
///
/// ```
/// use bonchart_csv::is_missing;
///
/// assert!(is_missing(""));
/// assert!(is_missing("+++"));
/// assert!(!is_missing("+abc"));
/// ```
pub fn is_missing(value: &str) -> bool {
    value.is_empty() || MISSING_PATTERN.is_match(value)
}

/// Parse a duration such as `5ms` into nanoseconds.
///
/// The whole value must be digits followed by exactly `ms`, `us` or `ns`.
/// Returns `None` for anything else, including values that overflow `u64`.
///
/// # Examples
///
/// ```
/// use bonchart_csv::parse_duration_ns;
///
/// assert_eq!(parse_duration_ns("5ms"), Some(5_000_000));
/// assert_eq!(parse_duration_ns("10us"), Some(10_000));
/// assert_eq!(parse_duration_ns("7ns"), Some(7));
/// assert_eq!(parse_duration_ns("12"), None);
/// ```
pub fn parse_duration_ns(value: &str) -> Option<u64> {
    let captures = DURATION_PATTERN.captures(value)?;
    let amount: u64 = captures[1].parse().ok()?;
    let scale = match &captures[2] {
        "ms" => 1_000_000,
        "us" => 1_000,
        _ => 1,
    };
    amount.checked_mul(scale)
}

/// Normalize one raw cell of `column` for the `run_index`-th valid row (1-based).
///
/// Rules apply in order: missing marker, duration conversion, name
/// disambiguation, pass-through.
///
/// # Examples
///
/// ```
/// use bonchart_csv::{normalize_cell, MISSING};
///
/// assert_eq!(normalize_cell("seek", "+++++", 1), MISSING);
/// assert_eq!(normalize_cell("latoutblk", "250us", 1), "250000");
/// assert_eq!(normalize_cell("name", "ssd", 3), "ssd 3");
/// assert_eq!(normalize_cell("outblk", "81234", 1), "81234");
/// ```
pub fn normalize_cell(column: &str, raw: &str, run_index: usize) -> String {
    if is_missing(raw) {
        MISSING.to_string()
    } else if let Some(nanos) = parse_duration_ns(raw) {
        nanos.to_string()
    } else if column == NAME_COLUMN {
        format!("{} {}", raw, run_index)
    } else {
        raw.to_string()
    }
}
