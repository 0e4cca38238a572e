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

//! LaTeX table fragment for benchmark reports.
//!
//! The fragment defines three macros for inclusion in a slide deck or paper:
//!
//! - `\BenchIters`: iteration count, digits grouped with `,`
//! - `\BenchRuns`: number of timed runs
//! - `\BenchTable`: a booktabs `table` with one row per variant
//!
//! Unlike the CSV tables, rendering is strict. Every variant must carry the
//! five means shown in its row and the first variant must carry
//! `config.iters` and `config.runs`; otherwise nothing is rendered.
//!
//! Times are converted from nanoseconds to milliseconds with two decimals,
//! per-iteration times keep three decimals and speedups two.

mod error;
mod format;
mod to_tex;

pub use error::{Result, TexError};
pub use format::{escape_latex, fmt_ms, fmt_ns_per_iter, fmt_speedup, group_thousands};
pub use to_tex::{to_tex, to_tex_with_config, TexConfig, TexRow};
