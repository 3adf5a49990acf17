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

//! Static chart categories and column labels.

/// A group of related metrics drawn as one bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartCategory {
    /// Identifier used in element ids and draw function names.
    pub key: &'static str,
    /// Heading shown above the chart.
    pub name: &'static str,
    /// Chart title, including the unit and which direction is better.
    pub title: &'static str,
    /// Member columns, one chart row each, in display order.
    pub columns: &'static [&'static str],
}

/// Chart categories, in page order.
pub const CATEGORIES: &[ChartCategory] = &[
    ChartCategory {
        key: "blockio",
        name: "Block IO",
        title: "kB/sec (higher is better)",
        columns: &["outblk", "outrw", "inblk"],
    },
    ChartCategory {
        key: "metadata",
        name: "File metadata",
        title: "files/sec (higher is better)",
        columns: &["sc", "sd", "rc", "rd"],
    },
    ChartCategory {
        key: "blockio-cpu",
        name: "Block IO CPU",
        title: "CPU usage in % (lower is better)",
        columns: &["outblkcpu", "outrwcpu", "inblkcpu", "seekcpu"],
    },
    ChartCategory {
        key: "metadata-cpu",
        name: "Seq and Random CPU",
        title: "CPU usage in % (lower is better)",
        columns: &["sccpu", "srcpu", "sdcpu", "rccpu", "rrcpu", "rdcpu"],
    },
    ChartCategory {
        key: "blockio-latency",
        name: "Block IO Latency",
        title: "nanoseconds (lower is better)",
        columns: &["latoutblk", "latoutrw", "latinblk"],
    },
    ChartCategory {
        key: "metadata-latency",
        name: "File metadata Latency",
        title: "nanoseconds (lower is better)",
        columns: &["latsc", "latsd", "latrc", "latrd"],
    },
    ChartCategory {
        key: "metadata-read-latency",
        name: "File metadata (read) Latency",
        title: "nanoseconds (lower is better)",
        columns: &["latsr", "latrr"],
    },
];

/// Human-readable label for every schema column, in schema order.
pub const LABELS: &[(&str, &str)] = &[
    ("vera", "Version"),
    ("verb", "Version"),
    ("name", "Name"),
    ("conc", "Concurrency"),
    ("stz", "Unknown stz"),
    ("sz", "Size"),
    ("tta", "Empty tta"),
    ("outch", "Seq Char Output"),
    ("outchcpu", "Seq Char Output CPU"),
    ("outblk", "Seq Block Output"),
    ("outblkcpu", "Seq Block Output CPU"),
    ("outrw", "Block Rewrite"),
    ("outrwcpu", "Block Rewrite CPU"),
    ("inch", "Char Input"),
    ("inchcpu", "Char Input CPU"),
    ("inblk", "Block Input"),
    ("inblkcpu", "Block Input CPU"),
    ("seek", "Random Seek"),
    ("seekcpu", "Random Seek CPU"),
    ("ttb", "Empty ttb"),
    ("ttc", "Empty ttc"),
    ("ttd", "Empty ttd"),
    ("tte", "Empty tte"),
    ("ttf", "Empty ttf"),
    ("sc", "Seq Create"),
    ("sccpu", "Seq Create CPU"),
    ("sr", "Seq Read"),
    ("srcpu", "Seq Read CPU"),
    ("sd", "Seq Delete"),
    ("sdcpu", "Seq Delete CPU"),
    ("rc", "Random Create"),
    ("rccpu", "Random Create CPU"),
    ("rr", "Random Read"),
    ("rrcpu", "Random Read CPU"),
    ("rd", "Random Delete"),
    ("rdcpu", "Random Delete CPU"),
    ("latoutch", "Latency Char Output"),
    ("latoutblk", "Latency Block Output"),
    ("latoutrw", "Latency Rewrite"),
    ("latinch", "Latency Input Char"),
    ("latinblk", "Latency Input Block"),
    ("latrand", "Latency Random seek"),
    ("latsc", "Latency Seq Create"),
    ("latsr", "Latency Seq Read"),
    ("latsd", "Latency Seq Delete"),
    ("latrc", "Latency Random Create"),
    ("latrr", "Latency Random Read"),
    ("latrd", "Latency Random Delete"),
];

/// Label for `column`, if it is a known column.
///
/// # Examples
///
/// ```
/// use bonchart_report::label_for;
///
/// assert_eq!(label_for("outblk"), Some("Seq Block Output"));
/// assert_eq!(label_for("unknown"), None);
/// ```
pub fn label_for(column: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(name, _)| *name == column)
        .map(|(_, label)| *label)
}

/// Category registered under `key`.
pub fn category(key: &str) -> Option<&'static ChartCategory> {
    CATEGORIES.iter().find(|c| c.key == key)
}
