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

//! End-to-end tests: CSV text to rendered HTML.

use bonchart_csv::{column_index, from_csv, ColumnTable, SCHEMA};
use bonchart_report::{build_charts, render, ReportError, CATEGORIES};

/// Build a full-width row with `fill` everywhere except the given columns.
fn run_row(fill: &str, overrides: &[(&str, &str)]) -> String {
    let mut fields = vec![fill.to_string(); SCHEMA.len()];
    for (column, value) in overrides {
        let index = column_index(column).expect("known column");
        fields[index] = value.to_string();
    }
    fields.join(",")
}

#[test]
fn test_two_runs_end_to_end() {
    let csv = format!(
        "{}\n{}\n",
        run_row("0", &[("name", "A"), ("outblk", "100")]),
        run_row("0", &[("name", "B"), ("outblk", "200")]),
    );
    let table = from_csv(&csv).unwrap();
    let html = render(&table).unwrap();

    assert!(html.contains("data.addColumn('number', \"A 1\");"));
    assert!(html.contains("data.addColumn('number', \"B 2\");"));
    assert!(html.contains("data.addRows([[\"Seq Block Output\", 100, 200]]);"));

    let a = html.find("\"A 1\"").unwrap();
    let b = html.find("\"B 2\"").unwrap();
    assert!(a < b, "series must follow row order");
}

#[test]
fn test_one_draw_per_category_in_order() {
    let table = from_csv(&run_row("1", &[("name", "x")])).unwrap();
    let html = render(&table).unwrap();

    let init_start = html.find("function drawChart()").unwrap();
    let init = &html[init_start..];
    let mut last = 0;
    for category in CATEGORIES {
        let call = format!("draw_{}();", category.key.replace('-', "_"));
        let pos = init.find(&call).unwrap_or_else(|| panic!("missing {}", call));
        assert!(pos > last, "{} out of order", call);
        last = pos;

        let heading = html.find(&format!("<h2>{}</h2>", category.name)).unwrap();
        let container = html
            .find(&format!("<div id=\"chart_div_{}\"", category.key))
            .unwrap();
        assert!(heading < container);
    }
    assert_eq!(html.matches("chart.draw(data, options);").count(), CATEGORIES.len());
}

#[test]
fn test_series_count_matches_runs() {
    let rows: Vec<String> = (0..5).map(|_| run_row("3", &[("name", "ssd")])).collect();
    let table = from_csv(&rows.join("\n")).unwrap();
    let html = render(&table).unwrap();

    assert_eq!(
        html.matches("data.addColumn('number'").count(),
        5 * CATEGORIES.len()
    );
    assert!(html.contains("\"ssd 5\""));
}

#[test]
fn test_latency_units_are_nanoseconds() {
    let csv = run_row(
        "1",
        &[("name", "lat"), ("latoutblk", "5ms"), ("latoutrw", "10us"), ("latinblk", "7ns")],
    );
    let table = from_csv(&csv).unwrap();
    let charts = build_charts(&table).unwrap();

    let latency = charts
        .iter()
        .find(|c| c.category.key == "blockio-latency")
        .unwrap();
    let values: Vec<&str> = latency
        .rows
        .iter()
        .map(|row| row.values[0].as_str())
        .collect();
    assert_eq!(values, ["5000000", "10000", "7"]);

    let html = render(&table).unwrap();
    assert!(html.contains("data.addRows([[\"Latency Block Output\", 5000000]]);"));
}

#[test]
fn test_dropped_rows_do_not_add_series() {
    let csv = format!(
        "{}\nbroken,row\n{},extra\n",
        run_row("1", &[("name", "only")]),
        run_row("1", &[("name", "long")]),
    );
    let table = from_csv(&csv).unwrap();
    let html = render(&table).unwrap();

    assert!(html.contains("\"only 1\""));
    assert!(!html.contains("long"));
}

#[test]
fn test_table_without_category_columns_fails() {
    let table = ColumnTable::new(&["name"]);
    let err = render(&table).unwrap_err();
    assert!(matches!(err, ReportError::MissingColumn(ref c) if c == "outblk"));
}
