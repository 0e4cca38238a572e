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

//! Structured error types for the benchtab CLI.
//!
//! Library errors are flattened into messages so the enum stays `Clone`.
//! Input-location failures keep their paths.

use benchtab_core::BenchError;
use benchtab_csv::CsvError;
use benchtab_tex::TexError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error for '{}': {message}", .path.display())]
    Io {
        path: PathBuf,
        message: String,
    },

    /// A required input file does not exist.
    #[error("Missing {}", .path.display())]
    MissingInput {
        path: PathBuf,
    },

    /// None of the candidate input files exist.
    #[error("No benchmark data found in {}", join_paths(.expected))]
    NoInputs {
        expected: Vec<PathBuf>,
    },

    /// An input file exists but could not be loaded.
    #[error("{0}")]
    Load(String),

    /// CSV generation failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// LaTeX generation failed.
    #[error("LaTeX error: {0}")]
    Tex(String),

    /// Output could not be serialized.
    #[error("JSON format error: {message}")]
    JsonFormat {
        message: String,
    },

    /// Some inputs failed the `check` command.
    #[error("{failed} of {total} inputs failed to load")]
    CheckFailed {
        failed: usize,
        total: usize,
    },

    /// Invalid argument or argument combination.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<BenchError> for CliError {
    fn from(source: BenchError) -> Self {
        match source {
            BenchError::MissingInput { path } => Self::MissingInput { path },
            BenchError::NoInputs { expected } => Self::NoInputs { expected },
            other => Self::Load(other.to_string()),
        }
    }
}

impl From<CsvError> for CliError {
    fn from(source: CsvError) -> Self {
        match source {
            CsvError::Output { path, message } => Self::Io { path, message },
            other => Self::Csv(other.to_string()),
        }
    }
}

impl From<TexError> for CliError {
    fn from(source: TexError) -> Self {
        Self::Tex(source.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::io_error(
            "out/bench_results_summary.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/bench_results_summary.csv"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_missing_input_keeps_path() {
        let err: CliError = BenchError::MissingInput {
            path: PathBuf::from("viz/bench_data_ssa.js"),
        }
        .into();
        assert_eq!(err.to_string(), "Missing viz/bench_data_ssa.js");
    }

    #[test]
    fn test_no_inputs_lists_paths() {
        let err: CliError = BenchError::NoInputs {
            expected: vec![
                PathBuf::from("viz/bench_data.js"),
                PathBuf::from("viz/bench_data_ssa.js"),
            ],
        }
        .into();
        assert_eq!(
            err.to_string(),
            "No benchmark data found in viz/bench_data.js, viz/bench_data_ssa.js"
        );
    }

    #[test]
    fn test_parse_error_becomes_load() {
        let err: CliError = BenchError::Parse {
            line: 1,
            column: 21,
            message: "expected value".to_string(),
        }
        .into();
        assert!(matches!(err, CliError::Load(_)));
        assert_eq!(
            err.to_string(),
            "JSON parse error at line 1, column 21: expected value"
        );
    }

    #[test]
    fn test_tex_error_conversion() {
        let err: CliError = TexError::EmptyTable.into();
        assert!(err.to_string().starts_with("LaTeX error: "));
    }

    #[test]
    fn test_check_failed_display() {
        let err = CliError::CheckFailed { failed: 1, total: 2 };
        assert_eq!(err.to_string(), "1 of 2 inputs failed to load");
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::invalid_input("empty label");
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
