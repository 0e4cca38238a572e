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

//! Error types for CSV table generation.

use std::path::PathBuf;
use thiserror::Error;

/// CSV generation error types.
///
/// # Examples
///
/// ```
/// use benchtab_csv::CsvError;
///
/// let err = CsvError::Record {
///     table: "runs",
///     row: 3,
///     message: "broken pipe".to_string(),
/// };
/// assert_eq!(err.to_string(), "Failed to write runs record 3: broken pipe");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// Writing the header row failed.
    #[error("Failed to write {table} header: {message}")]
    Header {
        /// Which table was being written.
        table: &'static str,
        /// Underlying error message.
        message: String,
    },

    /// Writing a data row failed.
    #[error("Failed to write {table} record {row}: {message}")]
    Record {
        /// Which table was being written.
        table: &'static str,
        /// Row number (1-based, header excluded).
        row: usize,
        /// Underlying error message.
        message: String,
    },

    /// Creating or writing the output file failed.
    #[error("Failed to write '{}': {message}", .path.display())]
    Output {
        /// Output file path.
        path: PathBuf,
        /// Underlying error message.
        message: String,
    },

    /// Generated output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// Where the invalid bytes came from.
        context: String,
    },

    /// I/O error while flushing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying CSV library.
    #[error("CSV library error: {0}")]
    CsvLib(#[from] csv::Error),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_header_error_display() {
        let err = CsvError::Header {
            table: "summary",
            message: "disk full".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to write summary header: disk full");
    }

    #[test]
    fn test_output_error_display() {
        let err = CsvError::Output {
            path: PathBuf::from("out/bench_results_runs.csv"),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("out/bench_results_runs.csv"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_from_io_error() {
        let err: CsvError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, CsvError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: boom");
    }
}
