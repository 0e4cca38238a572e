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

//! Canonical fixtures organized by category:
//!
//! - **datasets**: complete, partial and degenerate measurement payloads
//! - **texts**: raw input file texts, valid and malformed

mod datasets;
pub mod texts;

pub use datasets::*;

use crate::FixtureList;

/// Returns all dataset fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("complete", complete),
        ("ssa_complete", ssa_complete),
        ("missing_stats", missing_stats),
        ("ragged_runs", ragged_runs),
        ("empty", empty),
    ]
}
