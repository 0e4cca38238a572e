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

//! Per-run rows built from the raw measurement arrays.

use crate::dataset::{Dataset, Domain, Side};
use crate::lookup::{Cell, Field};
use serde_json::Value;

/// Column names of the runs table, in output order.
pub const RUNS_HEADER: [&str; 9] = [
    "variant",
    "run_index",
    "timestamp",
    "iters",
    "baseline_time_ns",
    "baseline_ns_per_iter",
    "optimized_time_ns",
    "optimized_ns_per_iter",
    "speedup",
];

/// The five raw arrays a run row draws from.
///
/// Missing arrays are empty slices.
#[derive(Debug, Clone, Copy)]
pub struct RunArrays<'a> {
    pub baseline_time_ns: &'a [Value],
    pub baseline_ns_per_iter: &'a [Value],
    pub optimized_time_ns: &'a [Value],
    pub optimized_ns_per_iter: &'a [Value],
    pub speedup: &'a [Value],
}

impl<'a> RunArrays<'a> {
    pub fn of(dataset: &'a Dataset) -> Self {
        Self {
            baseline_time_ns: dataset.raw(Side::Baseline, Domain::Time),
            baseline_ns_per_iter: dataset.raw(Side::Baseline, Domain::PerIter),
            optimized_time_ns: dataset.raw(Side::Optimized, Domain::Time),
            optimized_ns_per_iter: dataset.raw(Side::Optimized, Domain::PerIter),
            speedup: dataset.speedup_values(),
        }
    }

    /// Array lengths in [`RUNS_HEADER`] column order.
    pub fn lengths(&self) -> [usize; 5] {
        [
            self.baseline_time_ns.len(),
            self.baseline_ns_per_iter.len(),
            self.optimized_time_ns.len(),
            self.optimized_ns_per_iter.len(),
            self.speedup.len(),
        ]
    }

    /// Number of complete runs: the length of the shortest array.
    pub fn run_count(&self) -> usize {
        self.lengths().into_iter().min().unwrap_or(0)
    }

    /// Whether any array is longer than the run count.
    pub fn is_ragged(&self) -> bool {
        let lengths = self.lengths();
        lengths.iter().any(|&len| len != lengths[0])
    }
}

/// One timed run of one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub variant: String,
    /// 1-based position of the run.
    pub run_index: usize,
    pub timestamp: Cell,
    pub iters: Cell,
    pub baseline_time_ns: Value,
    pub baseline_ns_per_iter: Value,
    pub optimized_time_ns: Value,
    pub optimized_ns_per_iter: Value,
    pub speedup: Value,
}

impl RunRow {
    /// The measurement slots, in [`RUNS_HEADER`] order after `iters`.
    pub fn measurements(&self) -> [&Value; 5] {
        [
            &self.baseline_time_ns,
            &self.baseline_ns_per_iter,
            &self.optimized_time_ns,
            &self.optimized_ns_per_iter,
            &self.speedup,
        ]
    }
}

/// Expand the raw arrays of one dataset into run rows.
///
/// Produces exactly as many rows as the shortest of the five arrays; extra
/// trailing elements in longer arrays are dropped.
///
/// # Examples
///
/// ```
/// use benchtab_core::{expand_runs, Dataset};
/// use serde_json::json;
///
/// let ds = Dataset::new(json!({
///     "baseline": {"times_ns": [10, 11], "ns_per_iter": [1.0, 1.1]},
///     "optimized": {"times_ns": [5, 6], "ns_per_iter": [0.5, 0.6]},
///     "speedup": {"values": [2.0]}
/// }));
/// let rows = expand_runs("base", &ds);
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].run_index, 1);
/// ```
pub fn expand_runs(label: &str, dataset: &Dataset) -> Vec<RunRow> {
    let arrays = RunArrays::of(dataset);
    let timestamp = dataset.timestamp().cell();
    let iters = dataset.config("iters").cell();

    (0..arrays.run_count())
        .map(|i| RunRow {
            variant: label.to_string(),
            run_index: i + 1,
            timestamp: timestamp.clone(),
            iters: iters.clone(),
            baseline_time_ns: arrays.baseline_time_ns[i].clone(),
            baseline_ns_per_iter: arrays.baseline_ns_per_iter[i].clone(),
            optimized_time_ns: arrays.optimized_time_ns[i].clone(),
            optimized_ns_per_iter: arrays.optimized_ns_per_iter[i].clone(),
            speedup: arrays.speedup[i].clone(),
        })
        .collect()
}
