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

//! Column-oriented storage for parsed runs.

use std::collections::HashMap;

/// Normalized run data keyed by column name.
///
/// Every column is created up front and holds exactly one value per accepted
/// row, so all columns always have the same length. Only the parser appends
/// rows; the public API is read-only.
///
/// # Examples
///
/// ```
/// use bonchart_csv::{from_csv, SCHEMA};
///
/// let table = from_csv("").unwrap();
/// assert_eq!(table.column_count(), SCHEMA.len());
/// assert_eq!(table.row_count(), 0);
/// assert_eq!(table.column("outblk"), Some(&[][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTable {
    names: Vec<String>,
    index: HashMap<String, usize>,
    columns: Vec<Vec<String>>,
    rows: usize,
}

impl ColumnTable {
    /// Create a table with an empty column for each of `names`, in order.
    ///
    /// Duplicate names keep their first position.
    pub fn new(names: &[&str]) -> Self {
        let mut table = Self {
            names: Vec::with_capacity(names.len()),
            index: HashMap::with_capacity(names.len()),
            columns: Vec::with_capacity(names.len()),
            rows: 0,
        };
        for name in names {
            if table.index.contains_key(*name) {
                continue;
            }
            table.index.insert(name.to_string(), table.names.len());
            table.names.push(name.to_string());
            table.columns.push(Vec::new());
        }
        table
    }

    /// Values of `name` in row order, or `None` if the table has no such column.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.index.get(name).map(|&i| self.columns[i].as_slice())
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// `(name, values)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Number of accepted rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.names.len()
    }

    /// `true` when no rows have been accepted, regardless of column count.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Append one normalized row, positionally matching the column order.
    pub(crate) fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.push(value);
        }
        self.rows += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_table_is_empty() {
        let table = ColumnTable::new(&["a", "b"]);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
        assert!(table.is_empty());
        assert_eq!(table.column("a"), Some(&[][..]));
        assert_eq!(table.column("c"), None);
    }

    #[test]
    fn test_push_row_keeps_lengths_equal() {
        let mut table = ColumnTable::new(&["a", "b"]);
        table.push_row(vec!["1".to_string(), "2".to_string()]);
        table.push_row(vec!["3".to_string(), "4".to_string()]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("a").unwrap(), ["1", "3"]);
        assert_eq!(table.column("b").unwrap(), ["2", "4"]);
    }

    #[test]
    fn test_names_preserve_order() {
        let table = ColumnTable::new(&["z", "a", "m", "a"]);
        let names: Vec<_> = table.names().collect();
        assert_eq!(names, ["z", "a", "m"]);
    }

    #[test]
    fn test_iter_pairs_names_with_values() {
        let mut table = ColumnTable::new(&["x", "y"]);
        table.push_row(vec!["1".to_string(), "2".to_string()]);
        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(pairs[0].0, "x");
        assert_eq!(pairs[1].1, ["2"]);
    }
}
