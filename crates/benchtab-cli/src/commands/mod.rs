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

//! Command implementations.
//!
//! Each command takes resolved input sources and output paths; argument
//! parsing and path resolution live in [`crate::cli`].

mod check;
mod completion;
mod csv;
mod tex;

pub use check::{check, CheckReport, CheckStatus, OutputFormat, VariantCheck};
pub use completion::{generate_completion, print_installation_instructions};
pub use csv::csv;
pub use tex::tex;

use crate::error::CliError;
use benchtab_core::{LoadOptions, DEFAULT_MAX_FILE_SIZE};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Environment variable overriding the input size limit, in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "BENCHTAB_MAX_FILE_SIZE";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Loader options from the environment.
pub fn load_options() -> LoadOptions {
    LoadOptions {
        max_file_size: get_max_file_size(),
    }
}

/// Write `content` to `path`, or to stdout when `path` is `None`.
///
/// Missing parent directories are created.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), CliError> {
    match path {
        Some(p) => {
            if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))?;
            }
            fs::write(p, content).map_err(|e| CliError::io_error(p, e))
        }
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
