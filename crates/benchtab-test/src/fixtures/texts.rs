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

//! Raw input file texts.

/// A minimal harness output with one statistic and config.
pub const MINIMAL: &str = r#"window.BENCH_DATA = {"timestamp": "t1", "config": {"iters": 1000, "runs": 5, "warmup": 1}, "baseline": {"stats_time_ns": {"mean": 1000000.0}}};
"#;

/// Same payload as [`MINIMAL`] without the trailing semicolon.
pub const MINIMAL_NO_TERMINATOR: &str = r#"window.BENCH_DATA = {"timestamp": "t1", "config": {"iters": 1000, "runs": 5, "warmup": 1}, "baseline": {"stats_time_ns": {"mean": 1000000.0}}}"#;

/// Inputs whose wrapper is malformed, as (name, text) pairs.
pub fn malformed_wrappers() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "  \n\t "),
        ("no_prefix", "BENCH_DATA = {}"),
        ("lowercase_name", "window.benchData = {}"),
        ("missing_equals", "window.BENCH_DATA {}"),
        ("missing_value", "window.BENCH_DATA = ;"),
        ("declaration", "const BENCH_DATA = {};"),
        ("leading_number", "42"),
    ]
}

/// Inputs whose wrapper is fine but whose payload is not JSON, as (name, text) pairs.
pub fn malformed_payloads() -> Vec<(&'static str, &'static str)> {
    vec![
        ("trailing_comma", "window.BENCH_DATA = {\"a\": 1,};"),
        ("single_quotes", "window.BENCH_DATA = {'a': 1};"),
        ("truncated", "window.BENCH_DATA = {\"a\": [1, 2"),
        ("double_terminator", "window.BENCH_DATA = {};;"),
        ("js_comment", "window.BENCH_DATA = {} // generated"),
    ]
}
