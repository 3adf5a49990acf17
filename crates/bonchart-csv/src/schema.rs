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

//! The fixed Bonnie++ 1.9x CSV column layout.

/// Column names of a Bonnie++ 1.9x result row, in file order.
///
/// The short names map onto the fields bonnie++ writes as follows:
///
/// ```text
/// format_version,bonnie_version,name,concurrency,seed,file_size,io_chunk_size,
/// putc,putc_cpu,put_block,put_block_cpu,rewrite,rewrite_cpu,getc,getc_cpu,
/// get_block,get_block_cpu,seeks,seeks_cpu,num_files,max_size,min_size,num_dirs,
/// file_chunk_size,seq_create,seq_create_cpu,seq_stat,seq_stat_cpu,seq_del,
/// seq_del_cpu,ran_create,ran_create_cpu,ran_stat,ran_stat_cpu,ran_del,
/// ran_del_cpu,putc_latency,put_block_latency,rewrite_latency,getc_latency,
/// get_block_latency,seeks_latency,seq_create_latency,seq_stat_latency,
/// seq_del_latency,ran_create_latency,ran_stat_latency,ran_del_latency
/// ```
///
/// A row is accepted only when its field count equals `SCHEMA.len()`.
pub const SCHEMA: &[&str] = &[
    "vera", "verb", "name", "conc", "stz", "sz", "tta",
    // Sequential output and input
    "outch", "outchcpu", "outblk", "outblkcpu", "outrw", "outrwcpu",
    "inch", "inchcpu", "inblk", "inblkcpu", "seek", "seekcpu",
    // File creation parameters
    "ttb", "ttc", "ttd", "tte", "ttf",
    // Sequential and random metadata operations
    "sc", "sccpu", "sr", "srcpu", "sd", "sdcpu",
    "rc", "rccpu", "rr", "rrcpu", "rd", "rdcpu",
    // Latencies
    "latoutch", "latoutblk", "latoutrw", "latinch", "latinblk", "latrand",
    "latsc", "latsr", "latsd", "latrc", "latrr", "latrd",
];

/// Column holding the test name, disambiguated per run.
pub const NAME_COLUMN: &str = "name";

/// Position of `column` within [`SCHEMA`].
pub fn column_index(column: &str) -> Option<usize> {
    SCHEMA.iter().position(|c| *c == column)
}
