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

//! Measurement payload fixtures.

use benchtab_core::Dataset;
use serde_json::{json, Value};

/// Unoptimized-build payload with every field present and 5 runs.
///
/// Means render in LaTeX as `1.23`, `12.346`, `0.39`, `3.930` and `3.14`.
pub fn complete_json() -> Value {
    json!({
        "timestamp": "2025-03-14T09:26:53Z",
        "config": {"iters": 100000, "runs": 5, "warmup": 1},
        "ir_call_count": {"baseline": 3, "optimized": 1},
        "baseline": {
            "stats_time_ns": {
                "mean": 1234567.0, "median": 1230000.0, "min": 1200000.0,
                "max": 1290000.0, "stdev": 30000.5
            },
            "stats_ns_per_iter": {
                "mean": 12.3456, "median": 12.3, "min": 12.0, "max": 12.9, "stdev": 0.3
            },
            "times_ns": [1200000, 1220000, 1230000, 1250000, 1290000],
            "ns_per_iter": [12.0, 12.2, 12.3, 12.5, 12.9]
        },
        "optimized": {
            "stats_time_ns": {
                "mean": 393000.0, "median": 392000.0, "min": 380000.0,
                "max": 410000.0, "stdev": 11000.0
            },
            "stats_ns_per_iter": {
                "mean": 3.93, "median": 3.92, "min": 3.8, "max": 4.1, "stdev": 0.11
            },
            "times_ns": [380000, 390000, 392000, 393000, 410000],
            "ns_per_iter": [3.8, 3.9, 3.92, 3.93, 4.1]
        },
        "speedup": {
            "stats": {"mean": 3.14159, "median": 3.13, "min": 3.0, "max": 3.3, "stdev": 0.1},
            "values": [3.0, 3.1, 3.13, 3.2, 3.3]
        }
    })
}

/// See [`complete_json`].
pub fn complete() -> Dataset {
    Dataset::new(complete_json())
}

/// SSA-build payload with every field present and 5 runs.
///
/// Means render in LaTeX as `1.25`, `12.510`, `0.13`, `1.260` and `9.92`.
pub fn ssa_complete_json() -> Value {
    json!({
        "timestamp": "2025-03-14T09:31:07Z",
        "config": {"iters": 100000, "runs": 5, "warmup": 1},
        "ir_call_count": {"baseline": 3, "optimized": 0},
        "baseline": {
            "stats_time_ns": {
                "mean": 1251000.0, "median": 1250000.0, "min": 1240000.0,
                "max": 1270000.0, "stdev": 12000.0
            },
            "stats_ns_per_iter": {
                "mean": 12.51, "median": 12.5, "min": 12.4, "max": 12.7, "stdev": 0.12
            },
            "times_ns": [1240000, 1245000, 1250000, 1260000, 1270000],
            "ns_per_iter": [12.4, 12.45, 12.5, 12.6, 12.7]
        },
        "optimized": {
            "stats_time_ns": {
                "mean": 126000.0, "median": 126000.0, "min": 124000.0,
                "max": 129000.0, "stdev": 2000.0
            },
            "stats_ns_per_iter": {
                "mean": 1.26, "median": 1.26, "min": 1.24, "max": 1.29, "stdev": 0.02
            },
            "times_ns": [124000, 125000, 126000, 127000, 129000],
            "ns_per_iter": [1.24, 1.25, 1.26, 1.27, 1.29]
        },
        "speedup": {
            "stats": {"mean": 9.92, "median": 9.92, "min": 9.6, "max": 10.2, "stdev": 0.2},
            "values": [10.0, 9.96, 9.92, 9.92, 9.84]
        }
    })
}

/// See [`ssa_complete_json`].
pub fn ssa_complete() -> Dataset {
    Dataset::new(ssa_complete_json())
}

/// Payload with config and raw arrays but no statistics objects at all.
pub fn missing_stats_json() -> Value {
    json!({
        "timestamp": "2025-03-14T10:00:00Z",
        "config": {"iters": 1000, "runs": 2},
        "baseline": {"times_ns": [100, 110], "ns_per_iter": [0.1, 0.11]},
        "optimized": {"times_ns": [50, 55], "ns_per_iter": [0.05, 0.055]},
        "speedup": {"values": [2.0, 2.0]}
    })
}

/// See [`missing_stats_json`].
pub fn missing_stats() -> Dataset {
    Dataset::new(missing_stats_json())
}

/// Payload whose raw arrays have lengths 5, 5, 3, 5 and 4.
///
/// Element `i` of every array encodes its array and position so truncation
/// errors are visible: `baseline.times_ns[i] == 100 + i`, and so on.
pub fn ragged_runs_json() -> Value {
    json!({
        "timestamp": "ragged",
        "config": {"iters": 10, "runs": 5, "warmup": 0},
        "baseline": {
            "times_ns": [100, 101, 102, 103, 104],
            "ns_per_iter": [200, 201, 202, 203, 204]
        },
        "optimized": {
            "times_ns": [300, 301, 302],
            "ns_per_iter": [400, 401, 402, 403, 404]
        },
        "speedup": {"values": [500, 501, 502, 503]}
    })
}

/// See [`ragged_runs_json`].
pub fn ragged_runs() -> Dataset {
    Dataset::new(ragged_runs_json())
}

/// The empty object.
pub fn empty() -> Dataset {
    Dataset::new(json!({}))
}
