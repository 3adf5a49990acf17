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

//! Render chart data into a single HTML page.
//!
//! The page loads Google Charts, declares one `draw_<key>()` function per
//! category and a `drawChart()` initializer that the library calls once it is
//! ready. Each category gets an `<h2>` heading and a `chart_div_<key>`
//! container in the body.

use crate::chart::{build_charts, ChartData};
use crate::error::Result;
use bonchart_csv::ColumnTable;
use std::borrow::Cow;
use std::fmt::Write;
use tracing::debug;

/// Default page title.
pub const DEFAULT_TITLE: &str = "bonnie2gchart";

/// Default Google Charts loader script.
pub const DEFAULT_LOADER_URL: &str = "https://www.gstatic.com/charts/loader.js";

/// Configuration for HTML rendering.
///
/// # Examples
///
/// ```
/// use bonchart_report::ReportConfig;
///
/// let config = ReportConfig {
///     title: "nightly disks".to_string(),
///     chart_height: 700,
///     ..Default::default()
/// };
/// assert_eq!(config.chart_width, 900);
/// ```
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Contents of the `<title>` element (default: `bonnie2gchart`).
    pub title: String,
    /// URL of the charting library loader script.
    pub loader_url: String,
    /// Chart container width in pixels (default: 900).
    pub chart_width: u32,
    /// Chart container height in pixels (default: 500).
    pub chart_height: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            loader_url: DEFAULT_LOADER_URL.to_string(),
            chart_width: 900,
            chart_height: 500,
        }
    }
}

/// Render `table` into an HTML document with default configuration.
///
/// # Examples
///
/// ```
/// use bonchart_csv::{from_csv, SCHEMA};
/// use bonchart_report::render;
///
/// let mut run = vec!["1"; SCHEMA.len()];
/// run[2] = "A";
/// run[9] = "100";
/// let table = from_csv(&run.join(",")).unwrap();
///
/// let html = render(&table).unwrap();
/// assert!(html.contains(r#"data.addColumn('number', "A 1");"#));
/// assert!(html.contains(r#"data.addRows([["Seq Block Output", 100]]);"#));
/// ```
pub fn render(table: &ColumnTable) -> Result<String> {
    render_with_config(table, &ReportConfig::default())
}

/// Render `table` into an HTML document with custom configuration.
///
/// # Errors
///
/// Returns [`ReportError::MissingColumn`](crate::ReportError::MissingColumn)
/// when the table lacks a column a chart needs.
pub fn render_with_config(table: &ColumnTable, config: &ReportConfig) -> Result<String> {
    let charts = build_charts(table)?;
    let mut out = String::new();

    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>")?;
    writeln!(out, "  <head>")?;
    writeln!(out, "    <title>{}</title>", escape_html(&config.title))?;
    writeln!(
        out,
        "    <meta http-equiv=\"Content-Type\" content=\"text/html; charset=utf-8\">"
    )?;
    writeln!(
        out,
        "    <script type=\"text/javascript\" src=\"{}\"></script>",
        escape_html(&config.loader_url)
    )?;
    writeln!(out, "    <script type=\"text/javascript\">")?;
    writeln!(
        out,
        "      google.charts.load('current', {{packages: ['corechart']}});"
    )?;
    writeln!(out, "      google.charts.setOnLoadCallback(drawChart);")?;

    for chart in &charts {
        write_draw_function(&mut out, chart)?;
    }

    writeln!(out)?;
    writeln!(out, "      function drawChart() {{")?;
    for chart in &charts {
        writeln!(out, "        {}();", draw_function_name(chart.category.key))?;
    }
    writeln!(out, "      }}")?;
    writeln!(out, "    </script>")?;
    writeln!(out, "  </head>")?;
    writeln!(out)?;
    writeln!(out, "  <body>")?;

    for chart in &charts {
        writeln!(out, "    <h2>{}</h2>", escape_html(chart.category.name))?;
        writeln!(
            out,
            "    <div id=\"chart_div_{}\" style=\"width: {}px; height: {}px;\"></div>",
            chart.category.key, config.chart_width, config.chart_height
        )?;
    }

    writeln!(out, "  </body>")?;
    writeln!(out, "</html>")?;

    debug!(
        charts = charts.len(),
        runs = table.row_count(),
        bytes = out.len(),
        "rendered report"
    );
    Ok(out)
}

fn write_draw_function(out: &mut String, chart: &ChartData<'_>) -> Result<()> {
    let category = chart.category;

    writeln!(out)?;
    writeln!(out, "      function {}() {{", draw_function_name(category.key))?;
    writeln!(out, "        var data = new google.visualization.DataTable();")?;
    writeln!(out, "        data.addColumn('string', 'Tests');")?;
    for name in chart.series {
        writeln!(out, "        data.addColumn('number', {});", js_string(name)?)?;
    }
    for row in &chart.rows {
        write!(out, "        data.addRows([[{}", js_string(row.label)?)?;
        for value in row.values {
            write!(out, ", {}", js_number(value))?;
        }
        writeln!(out, "]]);")?;
    }
    writeln!(out)?;
    writeln!(out, "        var options = {{")?;
    writeln!(out, "          title: {},", js_string(category.title)?)?;
    writeln!(
        out,
        "          vAxis: {{title: {}, titleTextStyle: {{color: 'red'}}}}",
        js_string(category.name)?
    )?;
    writeln!(out, "        }};")?;
    writeln!(out)?;
    writeln!(
        out,
        "        var chart = new google.visualization.BarChart(document.getElementById('chart_div_{}'));",
        category.key
    )?;
    writeln!(out, "        chart.draw(data, options);")?;
    writeln!(out, "      }}")?;
    Ok(())
}

/// `blockio-cpu` → `draw_blockio_cpu`
fn draw_function_name(key: &str) -> String {
    format!("draw_{}", key.replace('-', "_"))
}

/// Quote `value` as a JavaScript string literal safe inside `<script>`.
fn js_string(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Finite numbers are emitted as written; everything else is `null`.
fn js_number(value: &str) -> Cow<'_, str> {
    match value.parse::<f64>() {
        Ok(number) if number.is_finite() => Cow::Borrowed(value),
        _ => Cow::Borrowed("null"),
    }
}

fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(|c: char| matches!(c, '&' | '<' | '>' | '"' | '\'')) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
