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

//! Convert report rows to CSV.

use crate::error::{CsvError, Result};
use benchtab_core::{scalar_text, RunRow, SummaryRow, RUNS_HEADER, SUMMARY_HEADER};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
    /// Record terminator (default: CRLF)
    pub terminator: csv::Terminator,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
            terminator: csv::Terminator::CRLF,
        }
    }
}

/// A row type with a fixed CSV layout.
pub trait CsvTable {
    /// Table name used in diagnostics.
    const TABLE: &'static str;

    /// Column names in output order.
    fn header() -> &'static [&'static str];

    /// Cell texts in header order.
    fn record(&self) -> Vec<String>;
}

impl CsvTable for SummaryRow {
    const TABLE: &'static str = "summary";

    fn header() -> &'static [&'static str] {
        &SUMMARY_HEADER
    }

    fn record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(SUMMARY_HEADER.len());
        record.push(self.variant.clone());
        record.extend(self.cells().into_iter().map(|c| scalar_text(c.as_ref())));
        record
    }
}

impl CsvTable for RunRow {
    const TABLE: &'static str = "runs";

    fn header() -> &'static [&'static str] {
        &RUNS_HEADER
    }

    fn record(&self) -> Vec<String> {
        let mut record = Vec::with_capacity(RUNS_HEADER.len());
        record.push(self.variant.clone());
        record.push(self.run_index.to_string());
        record.push(scalar_text(self.timestamp.as_ref()));
        record.push(scalar_text(self.iters.as_ref()));
        record.extend(self.measurements().into_iter().map(value_to_csv_string));
        record
    }
}

/// Render one value as CSV cell text. `null` becomes the empty cell.
pub fn value_to_csv_string(value: &Value) -> String {
    scalar_text(Some(value))
}

/// Convert summary rows to a CSV string.
///
/// # Example
/// ```
/// use benchtab_core::{summarize, Dataset};
/// use benchtab_csv::summary_to_csv;
/// use serde_json::json;
///
/// let row = summarize("base", &Dataset::new(json!({"config": {"iters": 1000}})));
/// let csv = summary_to_csv(&[row]).unwrap();
/// assert!(csv.starts_with("variant,timestamp,iters,runs,"));
/// assert!(csv.contains("base,,1000,,"));
/// ```
pub fn summary_to_csv(rows: &[SummaryRow]) -> Result<String> {
    table_to_csv(rows, &ToCsvConfig::default())
}

/// Convert summary rows to a CSV string with custom configuration.
pub fn summary_to_csv_with_config(rows: &[SummaryRow], config: &ToCsvConfig) -> Result<String> {
    table_to_csv(rows, config)
}

/// Convert run rows to a CSV string.
pub fn runs_to_csv(rows: &[RunRow]) -> Result<String> {
    table_to_csv(rows, &ToCsvConfig::default())
}

/// Convert run rows to a CSV string with custom configuration.
pub fn runs_to_csv_with_config(rows: &[RunRow], config: &ToCsvConfig) -> Result<String> {
    table_to_csv(rows, config)
}

/// Write any [`CsvTable`] rows to a writer.
///
/// # Example
/// ```
/// use benchtab_csv::{table_to_writer, ToCsvConfig};
/// use benchtab_core::RunRow;
///
/// let mut buffer = Vec::new();
/// table_to_writer::<RunRow, _>(&[], &mut buffer, &ToCsvConfig::default()).unwrap();
/// assert!(buffer.starts_with(b"variant,run_index,"));
/// ```
pub fn table_to_writer<R: CsvTable, W: Write>(
    rows: &[R],
    writer: W,
    config: &ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .terminator(config.terminator)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(R::header()).map_err(|e| CsvError::Header {
            table: R::TABLE,
            message: e.to_string(),
        })?;
    }

    for (i, row) in rows.iter().enumerate() {
        wtr.write_record(row.record()).map_err(|e| CsvError::Record {
            table: R::TABLE,
            row: i + 1,
            message: e.to_string(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write any [`CsvTable`] rows to a string.
pub fn table_to_csv<R: CsvTable>(rows: &[R], config: &ToCsvConfig) -> Result<String> {
    // header plus a rough 12 bytes per cell
    let estimated = (rows.len() + 1) * R::header().len() * 12;
    let mut buffer = Vec::with_capacity(estimated.max(1024));
    table_to_writer(rows, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: format!("{} CSV output", R::TABLE),
    })
}

/// Write finished CSV text to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub fn write_csv_file(path: impl AsRef<Path>, contents: &str) -> Result<()> {
    let path = path.as_ref();
    let output_error = |e: std::io::Error| CsvError::Output {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(output_error)?;
    }
    fs::write(path, contents).map_err(output_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote CSV table");
    Ok(())
}

/// Write summary rows to a CSV file, replacing any existing file.
pub fn write_summary(path: impl AsRef<Path>, rows: &[SummaryRow], config: &ToCsvConfig) -> Result<()> {
    let contents = summary_to_csv_with_config(rows, config)?;
    write_csv_file(path, &contents)
}

/// Write run rows to a CSV file, replacing any existing file.
pub fn write_runs(path: impl AsRef<Path>, rows: &[RunRow], config: &ToCsvConfig) -> Result<()> {
    let contents = runs_to_csv_with_config(rows, config)?;
    write_csv_file(path, &contents)
}
