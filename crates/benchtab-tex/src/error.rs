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

//! Error types for LaTeX table generation.

use benchtab_core::BenchError;
use thiserror::Error;

/// LaTeX generation error types.
#[derive(Debug, Error)]
pub enum TexError {
    /// No variants were given, so there is no row to render.
    #[error("Cannot render a LaTeX table without variants")]
    EmptyTable,

    /// A field needed by the fragment preamble is absent or malformed.
    #[error(transparent)]
    Field(#[from] BenchError),

    /// A field needed by one table row is absent or malformed.
    #[error("Variant '{label}': {source}")]
    Row {
        /// Label of the offending variant.
        label: String,
        /// The underlying lookup error.
        #[source]
        source: BenchError,
    },
}

impl TexError {
    /// Attach a variant label to a row lookup failure.
    pub fn row(label: impl Into<String>, source: BenchError) -> Self {
        Self::Row {
            label: label.into(),
            source,
        }
    }
}

/// Result type for LaTeX operations.
pub type Result<T> = std::result::Result<T, TexError>;
