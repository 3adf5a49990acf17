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

//! Chart data: the column table transposed per category.
//!
//! A [`ColumnTable`] holds one column per metric and one value per run. Each
//! chart flips that around: every run becomes a series and every member metric
//! of the category becomes a row.

use crate::categories::{label_for, ChartCategory, CATEGORIES};
use crate::error::{ReportError, Result};
use bonchart_csv::{ColumnTable, NAME_COLUMN};

/// One metric row of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRow<'a> {
    /// Source column name.
    pub column: &'static str,
    /// Legend label for the row.
    pub label: &'static str,
    /// One value per run, in run order.
    pub values: &'a [String],
}

/// Data for one chart category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartData<'a> {
    /// The category being drawn.
    pub category: &'static ChartCategory,
    /// Series headers, taken from the `name` column.
    pub series: &'a [String],
    /// Rows in configured member order.
    pub rows: Vec<ChartRow<'a>>,
}

/// Build chart data for every category in [`CATEGORIES`] order.
///
/// # Errors
///
/// Returns [`ReportError::MissingColumn`] if the table lacks the `name` column
/// or any column a category refers to.
///
/// # Examples
///
/// ```
/// use bonchart_csv::from_csv;
/// use bonchart_report::build_charts;
///
/// let table = from_csv("").unwrap();
/// let charts = build_charts(&table).unwrap();
/// assert_eq!(charts.len(), 7);
/// assert!(charts[0].series.is_empty());
/// ```
pub fn build_charts(table: &ColumnTable) -> Result<Vec<ChartData<'_>>> {
    let series = column(table, NAME_COLUMN)?;
    CATEGORIES
        .iter()
        .map(|category| build_chart(table, category, series))
        .collect()
}

fn build_chart<'a>(
    table: &'a ColumnTable,
    category: &'static ChartCategory,
    series: &'a [String],
) -> Result<ChartData<'a>> {
    let rows = category
        .columns
        .iter()
        .map(|&name| {
            Ok(ChartRow {
                column: name,
                label: label_for(name).unwrap_or(name),
                values: column(table, name)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ChartData {
        category,
        series,
        rows,
    })
}

fn column<'a>(table: &'a ColumnTable, name: &str) -> Result<&'a [String]> {
    table
        .column(name)
        .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
}
