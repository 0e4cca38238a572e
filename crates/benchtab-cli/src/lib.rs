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

//! benchtab CLI library.
//!
//! Converts benchmark measurement payloads into report tables.
//!
//! # Commands
//!
//! - **csv**: summary and per-run CSV tables; absent inputs and fields are tolerated
//! - **tex**: LaTeX table fragment; every input and shown field is required
//! - **check**: per-input diagnostics in text or JSON
//! - **completion**: shell completion scripts
//!
//! # Examples
//!
//! ```no_run
//! use benchtab_cli::commands;
//! use benchtab_core::VariantSource;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), benchtab_cli::CliError> {
//! let sources = [
//!     VariantSource::new("Unoptimized", "viz/bench_data.js"),
//!     VariantSource::new("SSA", "viz/bench_data_ssa.js"),
//! ];
//! commands::tex(&sources, Some(Path::new("slides/bench_results.tex")))?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
