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

//! Core data model for benchmark reports.
//!
//! This crate loads the measurement payloads written by the benchmark harness
//! and flattens them into report rows. It does no statistics of its own: every
//! mean, median and deviation is relayed from the payload as found.
//!
//! # Pipeline
//!
//! ```text
//! text ──decode_wrapper──▶ JSON ──▶ Dataset ──summarize───▶ SummaryRow
//!                                          └──expand_runs─▶ Vec<RunRow>
//! ```
//!
//! # Missing data
//!
//! Lookups are tolerant by default. [`Field`] chains keys through
//! `Option<&Value>` so a dataset missing a whole statistics object still
//! produces a complete [`SummaryRow`] with those slots absent. Consumers that
//! cannot tolerate gaps use the strict [`Dataset::require`] family instead,
//! which reports the dotted path of the first missing field.
//!
//! # Examples
//!
//! ```
//! use benchtab_core::{expand_runs, parse_dataset, summarize};
//!
//! let text = r#"window.BENCH_DATA = {
//!     "timestamp": "t1",
//!     "config": {"iters": 1000, "runs": 5, "warmup": 1},
//!     "baseline": {"stats_time_ns": {"mean": 1000000.0}}
//! };"#;
//!
//! let dataset = parse_dataset(text).unwrap();
//! let row = summarize("base", &dataset);
//! assert_eq!(row.iters, Some(serde_json::json!(1000)));
//! assert_eq!(row.base_time.mean, Some(serde_json::json!(1000000.0)));
//! assert!(expand_runs("base", &dataset).is_empty());
//! ```

mod dataset;
mod error;
mod loader;
mod lookup;
mod runs;
mod summary;
mod wrapper;

pub use dataset::{Dataset, Domain, Side, Statistic, Variant};
pub use error::{BenchError, Result};
pub use loader::{
    load_available, load_dataset_file, load_required, parse_dataset, LoadOptions, VariantSource,
    DEFAULT_MAX_FILE_SIZE,
};
pub use lookup::{path_string, scalar_text, Cell, Field};
pub use runs::{expand_runs, RunArrays, RunRow, RUNS_HEADER};
pub use summary::{summarize, StatCells, SummaryRow, SUMMARY_HEADER};
pub use wrapper::{decode as decode_wrapper, Payload};
