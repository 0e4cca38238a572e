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

//! Check command - input diagnostics

use super::load_options;
use crate::error::CliError;
use benchtab_core::{
    load_dataset_file, summarize, RunArrays, Variant, VariantSource, SUMMARY_HEADER,
};
use benchtab_tex::to_tex;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Report format for the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Outcome of checking one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    /// The input parsed.
    Loaded {
        /// Summary cells holding a value.
        populated: usize,
        /// Summary cells in total, the variant label excluded.
        cells: usize,
        /// Runs left after truncating to the shortest raw array.
        runs: usize,
        /// Raw array lengths, present only when they disagree.
        #[serde(skip_serializing_if = "Option::is_none")]
        ragged_lengths: Option<[usize; 5]>,
        /// Whether a LaTeX row can be rendered.
        latex_ready: bool,
        /// Why no LaTeX row can be rendered.
        #[serde(skip_serializing_if = "Option::is_none")]
        latex_error: Option<String>,
    },
    /// The input file does not exist.
    Missing,
    /// The input exists but could not be read or parsed.
    Failed { message: String },
}

impl CheckStatus {
    pub fn is_failure(&self) -> bool {
        !matches!(self, CheckStatus::Loaded { .. })
    }
}

/// Check result for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantCheck {
    pub label: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub status: CheckStatus,
}

/// Check results for all inputs, in argument order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub variants: Vec<VariantCheck>,
}

impl CheckReport {
    /// Number of inputs that are missing or failed to load.
    pub fn failed(&self) -> usize {
        self.variants.iter().filter(|v| v.status.is_failure()).count()
    }
}

/// Inspect one input without producing any report files.
pub fn check_source(source: &VariantSource) -> VariantCheck {
    let status = if !source.path.exists() {
        CheckStatus::Missing
    } else {
        match load_dataset_file(&source.path, &load_options()) {
            Err(e) => CheckStatus::Failed {
                message: e.to_string(),
            },
            Ok(dataset) => {
                let populated = summarize(&source.label, &dataset).populated();
                let arrays = RunArrays::of(&dataset);
                let ragged_lengths = arrays.is_ragged().then(|| arrays.lengths());
                let runs = arrays.run_count();
                let variant = Variant::new(source.label.clone(), dataset);
                let latex_error = to_tex(std::slice::from_ref(&variant))
                    .err()
                    .map(|e| e.to_string());
                CheckStatus::Loaded {
                    populated,
                    cells: SUMMARY_HEADER.len() - 1,
                    runs,
                    ragged_lengths,
                    latex_ready: latex_error.is_none(),
                    latex_error,
                }
            }
        }
    };
    debug!(variant = %source.label, ?status, "checked input");

    VariantCheck {
        label: source.label.clone(),
        path: source.path.clone(),
        status,
    }
}

/// Check every input and print a report.
///
/// # Errors
///
/// Returns `Err` if any input is missing or fails to load.
pub fn check(sources: &[VariantSource], format: OutputFormat) -> Result<(), CliError> {
    let report = CheckReport {
        variants: sources.iter().map(check_source).collect(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_text(&report),
    }

    match report.failed() {
        0 => Ok(()),
        failed => Err(CliError::CheckFailed {
            failed,
            total: report.variants.len(),
        }),
    }
}

fn print_text(report: &CheckReport) {
    for check in &report.variants {
        let path = check.path.display();
        match &check.status {
            CheckStatus::Missing => {
                println!("{} {} {}: {}", "✗".red().bold(), check.label.bold(), path, "missing".red());
            }
            CheckStatus::Failed { message } => {
                println!("{} {} {}", "✗".red().bold(), check.label.bold(), path);
                println!("    {}", message.red());
            }
            CheckStatus::Loaded {
                populated,
                cells,
                runs,
                ragged_lengths,
                latex_error,
                ..
            } => {
                println!("{} {} {}", "✓".green().bold(), check.label.bold(), path);
                println!("    summary cells: {}/{}", populated, cells);
                match ragged_lengths {
                    Some(lengths) => println!(
                        "    runs: {} {}",
                        runs,
                        format!("(array lengths {:?})", lengths).yellow()
                    ),
                    None => println!("    runs: {}", runs),
                }
                match latex_error {
                    None => println!("    LaTeX: {}", "ready".green()),
                    Some(e) => println!("    LaTeX: {} ({})", "not ready".yellow(), e),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const COMPLETE: &str = r#"window.BENCH_DATA = {
        "config": {"iters": 1000, "runs": 2},
        "baseline": {
            "stats_time_ns": {"mean": 1.0},
            "stats_ns_per_iter": {"mean": 1.0},
            "times_ns": [1, 2], "ns_per_iter": [1, 2]
        },
        "optimized": {
            "stats_time_ns": {"mean": 1.0},
            "stats_ns_per_iter": {"mean": 1.0},
            "times_ns": [1, 2], "ns_per_iter": [1, 2]
        },
        "speedup": {"stats": {"mean": 1.0}, "values": [1.0]}
    };"#;

    #[test]
    fn test_check_missing() {
        let dir = TempDir::new().unwrap();
        let check = check_source(&VariantSource::new("base", dir.path().join("none.js")));
        assert_eq!(check.status, CheckStatus::Missing);
        assert!(check.status.is_failure());
    }

    #[test]
    fn test_check_failed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.js");
        fs::write(&path, "window.bench = {}").unwrap();
        let check = check_source(&VariantSource::new("base", &path));
        match check.status {
            CheckStatus::Failed { message } => assert!(message.starts_with("Malformed wrapper")),
            other => panic!("unexpected status: {:?}", other),
        }
    }

    #[test]
    fn test_check_loaded() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.js");
        fs::write(&path, COMPLETE).unwrap();
        let check = check_source(&VariantSource::new("base", &path));
        assert_eq!(
            check.status,
            CheckStatus::Loaded {
                populated: 7,
                cells: 31,
                runs: 1,
                ragged_lengths: Some([2, 2, 2, 2, 1]),
                latex_ready: true,
                latex_error: None,
            }
        );
    }

    #[test]
    fn test_report_json_shape() {
        let report = CheckReport {
            variants: vec![VariantCheck {
                label: "ssa".to_string(),
                path: PathBuf::from("viz/bench_data_ssa.js"),
                status: CheckStatus::Missing,
            }],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "variants": [{"label": "ssa", "path": "viz/bench_data_ssa.js", "status": "missing"}]
            })
        );
        assert_eq!(report.failed(), 1);
    }
}
