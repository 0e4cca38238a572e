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

//! The parsed measurement payload of one benchmark variant.

use crate::error::{BenchError, Result};
use crate::lookup::{path_string, Field};
use serde_json::Value;

/// Which half of the comparison a measurement belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The unmodified code path.
    Baseline,
    /// The transformed code path.
    Optimized,
}

impl Side {
    /// Both sides in report order.
    pub const ALL: [Side; 2] = [Side::Baseline, Side::Optimized];

    /// Key of the side's object in the dataset.
    pub fn key(self) -> &'static str {
        match self {
            Side::Baseline => "baseline",
            Side::Optimized => "optimized",
        }
    }

    /// Prefix used for summary column names.
    pub fn column_prefix(self) -> &'static str {
        match self {
            Side::Baseline => "base",
            Side::Optimized => "opt",
        }
    }
}

/// Unit domain of a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Whole-run wall time in nanoseconds.
    Time,
    /// Nanoseconds per loop iteration.
    PerIter,
}

impl Domain {
    /// Both domains in report order.
    pub const ALL: [Domain; 2] = [Domain::Time, Domain::PerIter];

    /// Key of the statistics object for this domain.
    pub fn stats_key(self) -> &'static str {
        match self {
            Domain::Time => "stats_time_ns",
            Domain::PerIter => "stats_ns_per_iter",
        }
    }

    /// Key of the raw per-run array for this domain.
    pub fn raw_key(self) -> &'static str {
        match self {
            Domain::Time => "times_ns",
            Domain::PerIter => "ns_per_iter",
        }
    }

    /// Suffix used for summary column names.
    pub fn column_suffix(self) -> &'static str {
        match self {
            Domain::Time => "time_ns",
            Domain::PerIter => "ns_per_iter",
        }
    }
}

/// One of the precomputed summary statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Statistic {
    Mean,
    Median,
    Min,
    Max,
    Stdev,
}

impl Statistic {
    /// All statistics in report order.
    pub const ALL: [Statistic; 5] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Min,
        Statistic::Max,
        Statistic::Stdev,
    ];

    /// Key inside a statistics object.
    pub fn key(self) -> &'static str {
        match self {
            Statistic::Mean => "mean",
            Statistic::Median => "median",
            Statistic::Min => "min",
            Statistic::Max => "max",
            Statistic::Stdev => "stdev",
        }
    }
}

/// A parsed benchmark payload.
///
/// No schema is enforced: any JSON value is accepted and every accessor
/// tolerates absence. The `require_*` accessors are the strict counterparts
/// used where a value must be present.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    root: Value,
}

impl Dataset {
    /// Wrap an already parsed JSON value.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// The underlying JSON value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Consume the dataset and return the JSON value.
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.field(key)
    }

    /// Look up a nested key path.
    pub fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        self.root.path(keys)
    }

    pub fn timestamp(&self) -> Option<&Value> {
        self.get("timestamp")
    }

    /// A value from the `config` object (`iters`, `runs`, `warmup`).
    pub fn config(&self, key: &str) -> Option<&Value> {
        self.get("config").field(key)
    }

    /// IR call count recorded for one side.
    pub fn ir_calls(&self, side: Side) -> Option<&Value> {
        self.get("ir_call_count").field(side.key())
    }

    /// The statistics object of one side and domain.
    pub fn stats(&self, side: Side, domain: Domain) -> Option<&Value> {
        self.get(side.key()).field(domain.stats_key())
    }

    /// The speedup statistics object.
    pub fn speedup_stats(&self) -> Option<&Value> {
        self.get("speedup").field("stats")
    }

    /// Raw per-run measurements of one side and domain.
    pub fn raw(&self, side: Side, domain: Domain) -> &[Value] {
        self.get(side.key()).field(domain.raw_key()).items()
    }

    /// Raw per-run speedup ratios.
    pub fn speedup_values(&self) -> &[Value] {
        self.get("speedup").field("values").items()
    }

    /// Look up a key path that must be present and non-null.
    pub fn require(&self, keys: &[&str]) -> Result<&Value> {
        match self.lookup(keys) {
            None | Some(Value::Null) => Err(BenchError::missing_field(path_string(keys))),
            Some(value) => Ok(value),
        }
    }

    /// Look up a key path that must hold a number.
    pub fn require_f64(&self, keys: &[&str]) -> Result<f64> {
        let value = self.require(keys)?;
        value.as_f64().ok_or_else(|| BenchError::InvalidField {
            path: path_string(keys),
            expected: "number",
            found: value.to_string(),
        })
    }

    /// Look up a key path that must hold an integer.
    ///
    /// Floats with no fractional part, such as `1000.0`, are accepted.
    pub fn require_i64(&self, keys: &[&str]) -> Result<i64> {
        let value = self.require(keys)?;
        let int = value.as_i64().or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        });
        int.ok_or_else(|| BenchError::InvalidField {
            path: path_string(keys),
            expected: "integer",
            found: value.to_string(),
        })
    }
}

impl From<Value> for Dataset {
    fn from(root: Value) -> Self {
        Self::new(root)
    }
}

/// A dataset paired with the label it is reported under.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    /// Label shown in reports, e.g. `base` or `SSA`.
    pub label: String,
    /// The variant's measurements.
    pub dataset: Dataset,
}

impl Variant {
    pub fn new(label: impl Into<String>, dataset: Dataset) -> Self {
        Self {
            label: label.into(),
            dataset,
        }
    }
}
