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

//! Shared test fixtures for the benchtab crates.
//!
//! # Quick Start
//!
//! ```rust
//! use benchtab_test::{fixtures, wrap_js};
//!
//! let base = fixtures::complete();        // every field present, 5 runs
//! let ragged = fixtures::ragged_runs();   // raw arrays of lengths 5, 5, 3, 5, 4
//!
//! // Input file text as the harness writes it
//! let text = wrap_js(&fixtures::complete_json());
//! assert!(text.starts_with("window.BENCH_DATA = "));
//! ```

use benchtab_core::Dataset;
use serde_json::Value;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Dataset)>;

/// Wrap a JSON value the way the benchmark harness writes it.
pub fn wrap_js(value: &Value) -> String {
    wrap_js_as("BENCH_DATA", value)
}

/// Wrap a JSON value under a specific global name.
pub fn wrap_js_as(name: &str, value: &Value) -> String {
    let body = serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string());
    format!("window.{} = {};\n", name, body)
}

/// Canonical benchmark datasets and input texts.
pub mod fixtures;
