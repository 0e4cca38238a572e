// benchtab - Benchmark report tables
//
// Copyright (c) 2025 benchtab contributors.
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

//! CSV tables for benchmark reports.
//!
//! Two tables are produced from the loaded variants:
//!
//! - **Summary**: one row per variant with configuration, IR call counts and
//!   every relayed statistic ([`SUMMARY_HEADER`](benchtab_core::SUMMARY_HEADER))
//! - **Runs**: one row per measured run
//!   ([`RUNS_HEADER`](benchtab_core::RUNS_HEADER))
//!
//! Absent values become empty cells. Numbers keep the text form they had in
//! the payload, so `1000000.0` stays `1000000.0`.
//!
//! # Examples
//!
//! ```
//! use benchtab_core::{expand_runs, summarize, Dataset};
//! use benchtab_csv::{runs_to_csv, summary_to_csv};
//! use serde_json::json;
//!
//! let dataset = Dataset::new(json!({
//!     "config": {"iters": 1000, "runs": 1},
//!     "baseline": {"times_ns": [2000000], "ns_per_iter": [2000.0]},
//!     "optimized": {"times_ns": [1000000], "ns_per_iter": [1000.0]},
//!     "speedup": {"values": [2.0]}
//! }));
//!
//! let summary = summary_to_csv(&[summarize("base", &dataset)]).unwrap();
//! assert_eq!(summary.lines().count(), 2);
//!
//! let runs = runs_to_csv(&expand_runs("base", &dataset)).unwrap();
//! assert!(runs.ends_with("base,1,,1000,2000000,2000.0,1000000,1000.0,2.0\r\n"));
//! ```

mod error;
mod to_csv;

pub use error::{CsvError, Result};
pub use to_csv::{
    runs_to_csv, runs_to_csv_with_config, summary_to_csv, summary_to_csv_with_config,
    table_to_csv, table_to_writer, value_to_csv_string, write_csv_file, write_runs, write_summary,
    CsvTable, ToCsvConfig,
};
