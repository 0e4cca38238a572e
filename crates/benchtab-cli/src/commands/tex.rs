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

//! TeX command - LaTeX table fragment

use super::{load_options, write_output};
use crate::error::CliError;
use benchtab_core::{load_required, VariantSource};
use benchtab_tex::to_tex;
use colored::Colorize;
use std::path::Path;
use tracing::info;

/// Render the LaTeX fragment for all inputs.
///
/// Every input must exist and carry the fields shown in the table. When
/// `output` is `None` the fragment goes to stdout.
///
/// # Errors
///
/// Returns `Err` if any input is missing, cannot be parsed, or lacks a
/// required field. The output file is not created or modified in that case.
pub fn tex(sources: &[VariantSource], output: Option<&Path>) -> Result<(), CliError> {
    let variants = load_required(sources, &load_options())?;
    let fragment = to_tex(&variants)?;
    info!(variants = variants.len(), bytes = fragment.len(), "rendered LaTeX fragment");

    write_output(&fragment, output)?;
    if let Some(path) = output {
        println!("{} {}", "✓".green().bold(), path.display());
    }
    Ok(())
}
