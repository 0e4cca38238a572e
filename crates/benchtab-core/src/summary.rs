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

//! One summary row per variant.

use crate::dataset::{Dataset, Domain, Side, Statistic};
use crate::lookup::{Cell, Field};
use serde_json::Value;

/// Column names of the summary table, in output order.
pub const SUMMARY_HEADER: [&str; 32] = [
    "variant",
    "timestamp",
    "iters",
    "runs",
    "warmup",
    "ir_calls_baseline",
    "ir_calls_optimized",
    "base_mean_time_ns",
    "base_median_time_ns",
    "base_min_time_ns",
    "base_max_time_ns",
    "base_stdev_time_ns",
    "base_mean_ns_per_iter",
    "base_median_ns_per_iter",
    "base_min_ns_per_iter",
    "base_max_ns_per_iter",
    "base_stdev_ns_per_iter",
    "opt_mean_time_ns",
    "opt_median_time_ns",
    "opt_min_time_ns",
    "opt_max_time_ns",
    "opt_stdev_time_ns",
    "opt_mean_ns_per_iter",
    "opt_median_ns_per_iter",
    "opt_min_ns_per_iter",
    "opt_max_ns_per_iter",
    "opt_stdev_ns_per_iter",
    "speedup_mean",
    "speedup_median",
    "speedup_min",
    "speedup_max",
    "speedup_stdev",
];

/// The five statistics of one statistics object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatCells {
    pub mean: Cell,
    pub median: Cell,
    pub min: Cell,
    pub max: Cell,
    pub stdev: Cell,
}

impl StatCells {
    /// Copy the statistics out of a (possibly absent) statistics object.
    pub fn from_stats(stats: Option<&Value>) -> Self {
        Self {
            mean: stats.field(Statistic::Mean.key()).cell(),
            median: stats.field(Statistic::Median.key()).cell(),
            min: stats.field(Statistic::Min.key()).cell(),
            max: stats.field(Statistic::Max.key()).cell(),
            stdev: stats.field(Statistic::Stdev.key()).cell(),
        }
    }

    pub fn get(&self, stat: Statistic) -> &Cell {
        match stat {
            Statistic::Mean => &self.mean,
            Statistic::Median => &self.median,
            Statistic::Min => &self.min,
            Statistic::Max => &self.max,
            Statistic::Stdev => &self.stdev,
        }
    }

    /// Cells in [`Statistic::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        Statistic::ALL.into_iter().map(move |s| self.get(s))
    }
}

/// Flattened statistics of one variant.
///
/// Every slot is optional; a dataset missing whole sub-objects still yields a
/// complete row with those slots absent.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub variant: String,
    pub timestamp: Cell,
    pub iters: Cell,
    pub runs: Cell,
    pub warmup: Cell,
    pub ir_calls_baseline: Cell,
    pub ir_calls_optimized: Cell,
    pub base_time: StatCells,
    pub base_per_iter: StatCells,
    pub opt_time: StatCells,
    pub opt_per_iter: StatCells,
    pub speedup: StatCells,
}

impl SummaryRow {
    /// Statistics of one side and domain.
    pub fn stats(&self, side: Side, domain: Domain) -> &StatCells {
        match (side, domain) {
            (Side::Baseline, Domain::Time) => &self.base_time,
            (Side::Baseline, Domain::PerIter) => &self.base_per_iter,
            (Side::Optimized, Domain::Time) => &self.opt_time,
            (Side::Optimized, Domain::PerIter) => &self.opt_per_iter,
        }
    }

    /// Every slot after `variant`, in [`SUMMARY_HEADER`] order.
    pub fn cells(&self) -> Vec<&Cell> {
        let mut cells = vec![
            &self.timestamp,
            &self.iters,
            &self.runs,
            &self.warmup,
            &self.ir_calls_baseline,
            &self.ir_calls_optimized,
        ];
        for side in Side::ALL {
            for domain in Domain::ALL {
                cells.extend(self.stats(side, domain).iter());
            }
        }
        cells.extend(self.speedup.iter());
        cells
    }

    /// Number of slots holding a non-null value.
    pub fn populated(&self) -> usize {
        self.cells()
            .into_iter()
            .filter(|c| !matches!(c, None | Some(Value::Null)))
            .count()
    }
}

/// Flatten one dataset into a summary row.
///
/// Never fails: values are copied as found, and anything missing is left
/// absent.
///
/// # Examples
///
/// ```
/// use benchtab_core::{summarize, Dataset};
/// use serde_json::json;
///
/// let ds = Dataset::new(json!({"config": {"iters": 1000}}));
/// let row = summarize("base", &ds);
/// assert_eq!(row.iters, Some(json!(1000)));
/// assert_eq!(row.base_time.mean, None);
/// ```
pub fn summarize(label: &str, dataset: &Dataset) -> SummaryRow {
    let stats = |side, domain| StatCells::from_stats(dataset.stats(side, domain));
    SummaryRow {
        variant: label.to_string(),
        timestamp: dataset.timestamp().cell(),
        iters: dataset.config("iters").cell(),
        runs: dataset.config("runs").cell(),
        warmup: dataset.config("warmup").cell(),
        ir_calls_baseline: dataset.ir_calls(Side::Baseline).cell(),
        ir_calls_optimized: dataset.ir_calls(Side::Optimized).cell(),
        base_time: stats(Side::Baseline, Domain::Time),
        base_per_iter: stats(Side::Baseline, Domain::PerIter),
        opt_time: stats(Side::Optimized, Domain::Time),
        opt_per_iter: stats(Side::Optimized, Domain::PerIter),
        speedup: StatCells::from_stats(dataset.speedup_stats()),
    }
}
