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

//! Error types for dataset loading and strict field lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for benchtab-core operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors produced while loading a dataset or resolving required fields.
///
/// Tolerant lookups never produce an error; only the loader and the strict
/// accessors in [`crate::Dataset`] do.
///
/// # Examples
///
/// ```
/// use benchtab_core::BenchError;
///
/// let err = BenchError::MissingField {
///     path: "baseline.stats_time_ns.mean".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing required field: baseline.stats_time_ns.mean"
/// );
/// ```
#[derive(Debug, Error)]
pub enum BenchError {
    /// The input file does not exist.
    #[error("Missing {}", .path.display())]
    MissingInput {
        /// Expected location of the input.
        path: PathBuf,
    },

    /// None of the candidate inputs exist.
    #[error("No benchmark data found in {}", format_paths(.expected))]
    NoInputs {
        /// Every location that was probed.
        expected: Vec<PathBuf>,
    },

    /// Reading the input file failed.
    #[error("Failed to read '{}': {message}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error message.
        message: String,
    },

    /// The input file exceeds the configured size limit.
    #[error("File '{}' is too large ({actual} bytes). Maximum allowed: {max} bytes", .path.display())]
    FileTooLarge {
        /// File being read.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured limit in bytes.
        max: u64,
    },

    /// The global-assignment wrapper around the JSON payload is malformed.
    #[error("Malformed wrapper at line {line}, column {column}: {message}")]
    Wrapper {
        /// Line number (1-based).
        line: usize,
        /// Column number (1-based).
        column: usize,
        /// What the decoder expected.
        message: String,
    },

    /// The payload is not valid JSON.
    #[error("JSON parse error at line {line}, column {column}: {message}")]
    Parse {
        /// Line number in the input text (1-based).
        line: usize,
        /// Column number in the input text (1-based).
        column: usize,
        /// Message from the JSON parser.
        message: String,
    },

    /// A field required by a strict consumer is absent.
    #[error("Missing required field: {path}")]
    MissingField {
        /// Dotted path of the field.
        path: String,
    },

    /// A field required by a strict consumer has the wrong type.
    #[error("Invalid field {path}: expected {expected}, got {found}")]
    InvalidField {
        /// Dotted path of the field.
        path: String,
        /// Expected type description.
        expected: &'static str,
        /// Rendering of the value found.
        found: String,
    },
}

impl BenchError {
    /// Create a wrapper error at a 1-based position.
    pub fn wrapper(line: usize, column: usize, message: impl Into<String>) -> Self {
        Self::Wrapper {
            line,
            column,
            message: message.into(),
        }
    }

    /// Create a missing-field error for a dotted path.
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingField { path: path.into() }
    }

    /// Whether this error comes from a required field rather than from loading.
    pub fn is_field_error(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidField { .. })
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
