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

//! CLI command definitions and argument parsing.
//!
//! - [`report`]: report commands (csv, tex, check)
//! - [`utility`]: utility commands (completion)

mod report;
mod utility;

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

pub use report::ReportCommands;
pub use utility::UtilityCommands;

/// benchtab - benchmark data to CSV and LaTeX report tables
///
/// Reads the measurement payloads written by the benchmark harness and
/// renders a summary CSV, a per-run CSV and a LaTeX table fragment.
///
/// # Examples
///
/// ```bash
/// # Both CSV tables from viz/bench_data*.js
/// benchtab csv
///
/// # LaTeX fragment for three variants
/// benchtab tex --variant O0=o0.js --variant O2=o2.js --variant SSA=ssa.js
///
/// # Diagnose inputs
/// benchtab check --format json
/// ```
#[derive(Parser)]
#[command(name = "benchtab")]
#[command(author, version, about = "benchtab - benchmark data to CSV and LaTeX report tables", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Report (csv, tex, check)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Report(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
