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

//! Report commands.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use benchtab_core::VariantSource;
use clap::Subcommand;
use std::path::{Path, PathBuf};

/// Report commands.
///
/// Relative input and output paths are resolved against `--root`.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Write summary and per-run CSV tables
    ///
    /// Inputs that do not exist are skipped; the command fails only when
    /// none of them exist. Missing fields become empty cells.
    Csv {
        /// Variant input, repeatable (LABEL=PATH)
        #[arg(
            long = "variant",
            value_name = "LABEL=PATH",
            default_values = ["base=viz/bench_data.js", "ssa=viz/bench_data_ssa.js"]
        )]
        variants: Vec<VariantSource>,

        /// Summary table output path
        #[arg(long, value_name = "FILE", default_value = "out/bench_results_summary.csv")]
        summary: PathBuf,

        /// Per-run table output path
        #[arg(long, value_name = "FILE", default_value = "out/bench_results_runs.csv")]
        runs: PathBuf,

        /// Base directory for relative paths
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Print both tables to stdout instead of writing files
        #[arg(long, conflicts_with_all = ["summary", "runs"])]
        stdout: bool,
    },

    /// Write the LaTeX table fragment
    ///
    /// Every input must exist and carry the five means shown in its row.
    Tex {
        /// Variant input, repeatable (LABEL=PATH)
        #[arg(
            long = "variant",
            value_name = "LABEL=PATH",
            default_values = ["Unoptimized=viz/bench_data.js", "SSA=viz/bench_data_ssa.js"]
        )]
        variants: Vec<VariantSource>,

        /// Output file path
        #[arg(short, long, value_name = "FILE", default_value = "slides/bench_results.tex")]
        output: PathBuf,

        /// Base directory for relative paths
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Print the fragment to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },

    /// Report what each input provides
    ///
    /// Shows populated summary cells, run counts, ragged raw arrays and
    /// whether a LaTeX row can be rendered. Fails if any input is missing
    /// or cannot be parsed.
    Check {
        /// Variant input, repeatable (LABEL=PATH)
        #[arg(
            long = "variant",
            value_name = "LABEL=PATH",
            default_values = ["base=viz/bench_data.js", "ssa=viz/bench_data_ssa.js"]
        )]
        variants: Vec<VariantSource>,

        /// Base directory for relative paths
        #[arg(long, value_name = "DIR", default_value = ".")]
        root: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Csv {
                variants,
                summary,
                runs,
                root,
                stdout,
            } => commands::csv(
                &resolve_all(&root, &variants)?,
                &root.join(summary),
                &root.join(runs),
                stdout,
            ),
            ReportCommands::Tex {
                variants,
                output,
                root,
                stdout,
            } => {
                let output = root.join(output);
                commands::tex(
                    &resolve_all(&root, &variants)?,
                    (!stdout).then_some(output.as_path()),
                )
            }
            ReportCommands::Check {
                variants,
                root,
                format,
            } => commands::check(&resolve_all(&root, &variants)?, format),
        }
    }
}

fn resolve_all(root: &Path, sources: &[VariantSource]) -> Result<Vec<VariantSource>, CliError> {
    let mut resolved: Vec<VariantSource> = Vec::with_capacity(sources.len());
    for source in sources {
        if resolved.iter().any(|r| r.label == source.label) {
            return Err(CliError::invalid_input(format!(
                "duplicate variant label '{}'",
                source.label
            )));
        }
        resolved.push(source.resolved(root));
    }
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    fn report(args: &[&str]) -> ReportCommands {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Report(cmd) => cmd,
            Commands::Utility(_) => panic!("expected a report command"),
        }
    }

    #[test]
    fn test_csv_defaults() {
        match report(&["benchtab", "csv"]) {
            ReportCommands::Csv {
                variants,
                summary,
                runs,
                root,
                stdout,
            } => {
                assert_eq!(
                    variants,
                    [
                        VariantSource::new("base", "viz/bench_data.js"),
                        VariantSource::new("ssa", "viz/bench_data_ssa.js"),
                    ]
                );
                assert_eq!(summary, PathBuf::from("out/bench_results_summary.csv"));
                assert_eq!(runs, PathBuf::from("out/bench_results_runs.csv"));
                assert_eq!(root, PathBuf::from("."));
                assert!(!stdout);
            }
            _ => panic!("expected csv"),
        }
    }

    #[test]
    fn test_tex_defaults() {
        match report(&["benchtab", "tex"]) {
            ReportCommands::Tex {
                variants, output, ..
            } => {
                assert_eq!(variants[0].label, "Unoptimized");
                assert_eq!(variants[1].label, "SSA");
                assert_eq!(output, PathBuf::from("slides/bench_results.tex"));
            }
            _ => panic!("expected tex"),
        }
    }

    #[test]
    fn test_variant_flags_replace_defaults() {
        match report(&["benchtab", "tex", "--variant", "O2=a.js", "--variant", "O3=b.js", "--variant", "SSA=c.js"]) {
            ReportCommands::Tex { variants, .. } => {
                let labels: Vec<_> = variants.iter().map(|v| v.label.as_str()).collect();
                assert_eq!(labels, ["O2", "O3", "SSA"]);
            }
            _ => panic!("expected tex"),
        }
    }

    #[test]
    fn test_malformed_variant_rejected() {
        assert!(Cli::try_parse_from(["benchtab", "csv", "--variant", "nolabel"]).is_err());
        assert!(Cli::try_parse_from(["benchtab", "csv", "--variant", "=x.js"]).is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        assert!(Cli::try_parse_from(["benchtab", "tex", "--stdout", "-o", "x.tex"]).is_err());
        assert!(Cli::try_parse_from(["benchtab", "csv", "--stdout", "--runs", "r.csv"]).is_err());
    }

    #[test]
    fn test_resolve_all() {
        let sources = [
            VariantSource::new("a", "viz/a.js"),
            VariantSource::new("b", "/abs/b.js"),
        ];
        let resolved = resolve_all(Path::new("/work"), &sources).unwrap();
        assert_eq!(resolved[0].path, PathBuf::from("/work/viz/a.js"));
        assert_eq!(resolved[1].path, PathBuf::from("/abs/b.js"));
    }

    #[test]
    fn test_duplicate_labels_rejected() {
        let sources = [
            VariantSource::new("a", "x.js"),
            VariantSource::new("a", "y.js"),
        ];
        let err = resolve_all(Path::new("."), &sources).unwrap_err();
        assert!(err.to_string().contains("duplicate variant label 'a'"));
    }
}
