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

//! Loading datasets from text and from files.

use crate::dataset::{Dataset, Variant};
use crate::error::{BenchError, Result};
use crate::wrapper::{self, position};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Default maximum input size (100 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Options for reading input files.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Files larger than this are rejected before reading.
    pub max_file_size: u64,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Where to load one variant from.
///
/// Parses from the `LABEL=PATH` form used on the command line.
///
/// # Examples
///
/// ```
/// use benchtab_core::VariantSource;
///
/// let source: VariantSource = "ssa=viz/bench_data_ssa.js".parse().unwrap();
/// assert_eq!(source.label, "ssa");
/// assert_eq!(source.path.to_str(), Some("viz/bench_data_ssa.js"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSource {
    /// Label the variant is reported under.
    pub label: String,
    /// Path of the input file.
    pub path: PathBuf,
}

impl VariantSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Resolve a relative path against `root`.
    pub fn resolved(&self, root: &Path) -> Self {
        Self {
            label: self.label.clone(),
            path: root.join(&self.path),
        }
    }
}

impl FromStr for VariantSource {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (label, path) = s
            .split_once('=')
            .ok_or_else(|| format!("expected LABEL=PATH, got '{}'", s))?;
        let label = label.trim();
        if label.is_empty() {
            return Err(format!("empty label in '{}'", s));
        }
        if path.is_empty() {
            return Err(format!("empty path in '{}'", s));
        }
        Ok(Self::new(label, path))
    }
}

impl fmt::Display for VariantSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.path.display())
    }
}

/// Parse the text of an input file into a dataset.
///
/// # Errors
///
/// - [`BenchError::Wrapper`] if the global-assignment wrapper is malformed
/// - [`BenchError::Parse`] if the payload is not valid JSON; the position
///   refers to the input text, wrapper included
///
/// # Examples
///
/// ```
/// use benchtab_core::parse_dataset;
///
/// let ds = parse_dataset(r#"window.BENCH_DATA = {"config": {"iters": 1000}};"#).unwrap();
/// assert_eq!(ds.config("iters").and_then(|v| v.as_i64()), Some(1000));
/// ```
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    let payload = wrapper::decode(text)?;
    if let Some(target) = payload.target {
        debug!(global = target, "stripped global assignment wrapper");
    }

    let value: Value = serde_json::from_str(payload.json).map_err(|e| {
        let (start_line, start_column) = position(text, payload.offset);
        let line = start_line + e.line().saturating_sub(1);
        let column = if e.line() <= 1 {
            start_column + e.column().saturating_sub(1)
        } else {
            e.column()
        };
        // serde_json appends its own position, which is relative to the payload
        let full = e.to_string();
        let message = full
            .rsplit_once(" at line ")
            .map_or(full.as_str(), |(m, _)| m)
            .to_string();
        BenchError::Parse {
            line,
            column,
            message,
        }
    })?;

    Ok(Dataset::new(value))
}

/// Read and parse one input file.
///
/// # Errors
///
/// - [`BenchError::MissingInput`] if the file does not exist
/// - [`BenchError::FileTooLarge`] if it exceeds `options.max_file_size`
/// - [`BenchError::Io`] if it cannot be read as UTF-8 text
/// - any error from [`parse_dataset`]
pub fn load_dataset_file(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Dataset> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BenchError::MissingInput {
            path: path.to_path_buf(),
        });
    }

    let metadata = fs::metadata(path).map_err(|e| io_error(path, e))?;
    if metadata.len() > options.max_file_size {
        return Err(BenchError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: options.max_file_size,
        });
    }

    let text = fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    debug!(path = %path.display(), bytes = text.len(), "read input");
    parse_dataset(&text)
}

/// Load every source that exists, skipping the ones that do not.
///
/// Order follows `sources`. Files that exist but fail to read or parse are
/// fatal.
///
/// # Errors
///
/// Returns [`BenchError::NoInputs`] when none of the sources exist.
pub fn load_available(sources: &[VariantSource], options: &LoadOptions) -> Result<Vec<Variant>> {
    let mut variants = Vec::with_capacity(sources.len());
    for source in sources {
        if !source.path.exists() {
            warn!(variant = %source.label, path = %source.path.display(), "input not found, skipping");
            continue;
        }
        let dataset = load_dataset_file(&source.path, options)?;
        variants.push(Variant::new(source.label.clone(), dataset));
    }

    if variants.is_empty() {
        return Err(BenchError::NoInputs {
            expected: sources.iter().map(|s| s.path.clone()).collect(),
        });
    }
    Ok(variants)
}

/// Load every source, requiring all of them to exist.
///
/// Existence is checked for all sources before any file is parsed.
///
/// # Errors
///
/// Returns [`BenchError::MissingInput`] naming the first missing source.
pub fn load_required(sources: &[VariantSource], options: &LoadOptions) -> Result<Vec<Variant>> {
    if let Some(missing) = sources.iter().find(|s| !s.path.exists()) {
        return Err(BenchError::MissingInput {
            path: missing.path.clone(),
        });
    }

    sources
        .iter()
        .map(|source| {
            load_dataset_file(&source.path, options)
                .map(|dataset| Variant::new(source.label.clone(), dataset))
        })
        .collect()
}

fn io_error(path: &Path, source: std::io::Error) -> BenchError {
    BenchError::Io {
        path: path.to_path_buf(),
        message: source.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_wrapped() {
        let ds = parse_dataset("window.BENCH_DATA = {\"timestamp\": \"t1\"};\n").unwrap();
        assert_eq!(ds.timestamp(), Some(&json!("t1")));
    }

    #[test]
    fn test_parse_bare_json() {
        let ds = parse_dataset("{\"config\": {\"runs\": 5}}").unwrap();
        assert_eq!(ds.config("runs"), Some(&json!(5)));
    }

    #[test]
    fn test_json_error_position_on_first_line() {
        let err = parse_dataset("window.BENCH_DATA = {\"a\": }").unwrap_err();
        match err {
            BenchError::Parse {
                line,
                column,
                message,
            } => {
                assert_eq!(line, 1);
                assert_eq!(column, 27);
                assert_eq!(message, "expected value");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_position_on_later_line() {
        let text = "window.BENCH_DATA = {\n  \"a\": 1,\n  \"b\": ?\n};";
        let err = parse_dataset(text).unwrap_err();
        match err {
            BenchError::Parse { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 8);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_wrapper_error_is_not_json_error() {
        let err = parse_dataset("var x = {}").unwrap_err();
        assert!(matches!(err, BenchError::Wrapper { .. }));
    }

    #[test]
    fn test_variant_source_parse() {
        let s: VariantSource = "Unoptimized=viz/bench_data.js".parse().unwrap();
        assert_eq!(s, VariantSource::new("Unoptimized", "viz/bench_data.js"));
        assert_eq!(s.to_string(), "Unoptimized=viz/bench_data.js");
        assert!("nolabel".parse::<VariantSource>().is_err());
        assert!("=path".parse::<VariantSource>().is_err());
        assert!("label=".parse::<VariantSource>().is_err());
    }

    #[test]
    fn test_variant_source_path_may_contain_equals() {
        let s: VariantSource = "a=dir/x=y.js".parse().unwrap();
        assert_eq!(s.path, PathBuf::from("dir/x=y.js"));
    }

    #[test]
    fn test_resolved() {
        let s = VariantSource::new("base", "viz/bench_data.js").resolved(Path::new("/tmp/proj"));
        assert_eq!(s.path, PathBuf::from("/tmp/proj/viz/bench_data.js"));
    }
}
