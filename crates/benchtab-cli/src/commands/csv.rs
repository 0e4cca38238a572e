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

//! CSV command - summary and per-run tables

use super::{load_options, write_output};
use crate::error::CliError;
use benchtab_core::{expand_runs, load_available, summarize, RunArrays, VariantSource};
use benchtab_csv::{runs_to_csv, summary_to_csv, write_csv_file};
use colored::Colorize;
use std::path::Path;
use tracing::{debug, info};

/// Write the summary and per-run CSV tables for every input that exists.
///
/// Inputs that do not exist are skipped with a warning. Both tables are
/// rendered before either file is written, so a failure leaves existing
/// outputs untouched.
///
/// # Errors
///
/// Returns `Err` if:
/// - None of the inputs exist
/// - An existing input cannot be read or parsed
/// - An output file cannot be written
pub fn csv(
    sources: &[VariantSource],
    summary_path: &Path,
    runs_path: &Path,
    stdout: bool,
) -> Result<(), CliError> {
    let variants = load_available(sources, &load_options())?;
    info!(variants = variants.len(), "loaded benchmark data");

    let summaries: Vec<_> = variants
        .iter()
        .map(|v| summarize(&v.label, &v.dataset))
        .collect();
    let runs: Vec<_> = variants
        .iter()
        .flat_map(|v| {
            let arrays = RunArrays::of(&v.dataset);
            if arrays.is_ragged() {
                debug!(
                    variant = %v.label,
                    lengths = ?arrays.lengths(),
                    runs = arrays.run_count(),
                    "raw arrays differ in length, truncating"
                );
            }
            expand_runs(&v.label, &v.dataset)
        })
        .collect();

    let summary_csv = summary_to_csv(&summaries)?;
    let runs_csv = runs_to_csv(&runs)?;

    if stdout {
        write_output(&summary_csv, None)?;
        write_output("\n", None)?;
        return write_output(&runs_csv, None);
    }

    write_csv_file(summary_path, &summary_csv)?;
    write_csv_file(runs_path, &runs_csv)?;

    println!(
        "{} {} ({} variants)",
        "✓".green().bold(),
        summary_path.display(),
        summaries.len()
    );
    println!(
        "{} {} ({} runs)",
        "✓".green().bold(),
        runs_path.display(),
        runs.len()
    );
    Ok(())
}
