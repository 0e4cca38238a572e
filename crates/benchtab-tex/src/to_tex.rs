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

//! Render variants as a LaTeX table fragment.

use crate::error::{Result, TexError};
use crate::format::{escape_latex, fmt_ms, fmt_ns_per_iter, fmt_speedup, group_thousands};
use benchtab_core::{Dataset, Domain, Side, Statistic, Variant};
use std::fmt::Write as _;
use tracing::debug;

/// Column headings of the table, after the variant column.
const COLUMNS: [&str; 5] = [
    "Base mean (ms)",
    "Base ns/iter",
    "Opt mean (ms)",
    "Opt ns/iter",
    "Speedup",
];

/// Configuration for the LaTeX fragment.
#[derive(Debug, Clone)]
pub struct TexConfig {
    /// Table caption. May reference `\BenchRuns` and `\BenchIters`.
    pub caption: String,
    /// Leading `%` comment line, without the `% ` prefix (default: provenance note)
    pub comment: Option<String>,
    /// Float placement specifier for the `table` environment (default: "h")
    pub table_placement: String,
}

impl Default for TexConfig {
    fn default() -> Self {
        Self {
            caption: "Mean timings over \\BenchRuns runs at \\BenchIters iterations.".to_string(),
            comment: Some("Auto-generated from run_bench.sh data".to_string()),
            table_placement: "h".to_string(),
        }
    }
}

/// The five means shown for one variant.
#[derive(Debug, Clone, PartialEq)]
pub struct TexRow {
    pub label: String,
    pub base_time_ns: f64,
    pub base_ns_per_iter: f64,
    pub opt_time_ns: f64,
    pub opt_ns_per_iter: f64,
    pub speedup: f64,
}

impl TexRow {
    /// Extract the row from a dataset, failing on the first missing mean.
    pub fn from_dataset(label: &str, dataset: &Dataset) -> Result<Self> {
        let mean = |side: Side, domain: Domain| {
            dataset
                .require_f64(&[side.key(), domain.stats_key(), Statistic::Mean.key()])
                .map_err(|e| TexError::row(label, e))
        };

        Ok(Self {
            label: label.to_string(),
            base_time_ns: mean(Side::Baseline, Domain::Time)?,
            base_ns_per_iter: mean(Side::Baseline, Domain::PerIter)?,
            opt_time_ns: mean(Side::Optimized, Domain::Time)?,
            opt_ns_per_iter: mean(Side::Optimized, Domain::PerIter)?,
            speedup: dataset
                .require_f64(&["speedup", "stats", Statistic::Mean.key()])
                .map_err(|e| TexError::row(label, e))?,
        })
    }

    /// Extract the row for a labeled variant.
    pub fn from_variant(variant: &Variant) -> Result<Self> {
        Self::from_dataset(&variant.label, &variant.dataset)
    }

    /// The formatted cells, label first.
    pub fn cells(&self) -> [String; 6] {
        [
            escape_latex(&self.label).into_owned(),
            fmt_ms(self.base_time_ns),
            fmt_ns_per_iter(self.base_ns_per_iter),
            fmt_ms(self.opt_time_ns),
            fmt_ns_per_iter(self.opt_ns_per_iter),
            fmt_speedup(self.speedup),
        ]
    }

    /// One `tabular` line, ending in `\\`.
    pub fn render(&self) -> String {
        format!("{}\\\\", self.cells().join(" & "))
    }
}

/// Iteration and run counts advertised by the fragment's macros.
fn bench_counts(dataset: &Dataset) -> Result<(i64, i64)> {
    let iters = dataset.require_i64(&["config", "iters"])?;
    let runs = dataset.require_i64(&["config", "runs"])?;
    Ok((iters, runs))
}

/// Render variants as a LaTeX fragment with the default configuration.
///
/// # Errors
///
/// Fails if `variants` is empty, if the first variant lacks `config.iters`
/// or `config.runs`, or if any variant lacks one of the five means. Nothing
/// is rendered in that case.
///
/// # Example
///
/// ```
/// use benchtab_core::{Dataset, Variant};
/// use serde_json::json;
///
/// let dataset = Dataset::new(json!({
///     "config": {"iters": 100000, "runs": 5},
///     "baseline": {
///         "stats_time_ns": {"mean": 1234567.0},
///         "stats_ns_per_iter": {"mean": 12.3456}
///     },
///     "optimized": {
///         "stats_time_ns": {"mean": 393000.0},
///         "stats_ns_per_iter": {"mean": 3.93}
///     },
///     "speedup": {"stats": {"mean": 3.14159}}
/// }));
///
/// let tex = benchtab_tex::to_tex(&[Variant::new("Unoptimized", dataset)]).unwrap();
/// assert!(tex.contains("\\newcommand{\\BenchIters}{100,000}"));
/// assert!(tex.contains("Unoptimized & 1.23 & 12.346 & 0.39 & 3.930 & 3.14\\\\"));
/// ```
pub fn to_tex(variants: &[Variant]) -> Result<String> {
    to_tex_with_config(variants, &TexConfig::default())
}

/// Render variants as a LaTeX fragment.
pub fn to_tex_with_config(variants: &[Variant], config: &TexConfig) -> Result<String> {
    let first = variants.first().ok_or(TexError::EmptyTable)?;
    let (iters, runs) = bench_counts(&first.dataset)?;
    let rows = variants
        .iter()
        .map(TexRow::from_variant)
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = rows.len(), iters, runs, "rendering LaTeX table");

    let mut lines = Vec::with_capacity(rows.len() + 16);
    if let Some(comment) = &config.comment {
        lines.push(format!("% {}", comment));
    }
    lines.push(format!(
        "\\newcommand{{\\BenchIters}}{{{}}}",
        group_thousands(iters)
    ));
    lines.push(format!("\\newcommand{{\\BenchRuns}}{{{}}}", runs));
    lines.push("\\newcommand{\\BenchTable}{%".to_string());
    lines.push(format!("\\begin{{table}}[{}]", config.table_placement));
    lines.push("\\centering".to_string());
    lines.push("\\small".to_string());
    lines.push(format!("\\begin{{tabular}}{{l{}}}", "r".repeat(COLUMNS.len())));
    lines.push("\\toprule".to_string());
    lines.push(header_line());
    lines.push("\\midrule".to_string());
    lines.extend(rows.iter().map(TexRow::render));
    lines.push("\\bottomrule".to_string());
    lines.push("\\end{tabular}".to_string());
    lines.push(format!("\\caption{{{}}}", config.caption));
    lines.push("\\end{table}".to_string());
    lines.push("}%".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

fn header_line() -> String {
    let mut line = String::from("Variant");
    for column in COLUMNS {
        let _ = write!(line, " & {}", column);
    }
    line.push_str(" \\\\");
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn means(base: f64, base_iter: f64, opt: f64, opt_iter: f64, speedup: f64) -> Dataset {
        Dataset::new(json!({
            "config": {"iters": 100000, "runs": 5},
            "baseline": {
                "stats_time_ns": {"mean": base},
                "stats_ns_per_iter": {"mean": base_iter}
            },
            "optimized": {
                "stats_time_ns": {"mean": opt},
                "stats_ns_per_iter": {"mean": opt_iter}
            },
            "speedup": {"stats": {"mean": speedup}}
        }))
    }

    #[test]
    fn test_header_line() {
        assert_eq!(
            header_line(),
            "Variant & Base mean (ms) & Base ns/iter & Opt mean (ms) & Opt ns/iter & Speedup \\\\"
        );
    }

    #[test]
    fn test_row_render() {
        let row = TexRow::from_dataset("SSA", &means(1251000.0, 12.51, 126000.0, 1.26, 9.92)).unwrap();
        assert_eq!(row.render(), "SSA & 1.25 & 12.510 & 0.13 & 1.260 & 9.92\\\\");
    }

    #[test]
    fn test_row_label_escaped() {
        let row = TexRow::from_dataset("ssa_v2", &means(1e6, 1.0, 1e6, 1.0, 1.0)).unwrap();
        assert!(row.render().starts_with("ssa\\_v2 & 1.00 & 1.000"));
    }

    #[test]
    fn test_row_missing_speedup() {
        let dataset = Dataset::new(json!({
            "baseline": {
                "stats_time_ns": {"mean": 1.0},
                "stats_ns_per_iter": {"mean": 1.0}
            },
            "optimized": {
                "stats_time_ns": {"mean": 1.0},
                "stats_ns_per_iter": {"mean": 1.0}
            },
            "speedup": {"values": [1.0]}
        }));
        let err = TexRow::from_dataset("base", &dataset).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Variant 'base': Missing required field: speedup.stats.mean"
        );
    }

    #[test]
    fn test_row_reports_first_missing_mean() {
        let err = TexRow::from_dataset("base", &Dataset::new(json!({}))).unwrap_err();
        assert!(err.to_string().ends_with("baseline.stats_time_ns.mean"));
    }

    #[test]
    fn test_row_rejects_non_numeric_mean() {
        let mut dataset = means(1.0, 1.0, 1.0, 1.0, 1.0).into_inner();
        dataset["optimized"]["stats_ns_per_iter"]["mean"] = json!("fast");
        let err = TexRow::from_dataset("base", &Dataset::new(dataset)).unwrap_err();
        assert!(err
            .to_string()
            .contains("Invalid field optimized.stats_ns_per_iter.mean: expected number"));
    }

    #[test]
    fn test_empty_table() {
        assert!(matches!(to_tex(&[]), Err(TexError::EmptyTable)));
    }

    #[test]
    fn test_counts_required_from_first_variant() {
        let mut root = means(1.0, 1.0, 1.0, 1.0, 1.0).into_inner();
        root["config"] = json!({"iters": 1000});
        let err = to_tex(&[Variant::new("a", Dataset::new(root))]).unwrap_err();
        assert!(matches!(err, TexError::Field(_)));
        assert_eq!(err.to_string(), "Missing required field: config.runs");
    }

    #[test]
    fn test_counts_of_later_variants_ignored() {
        let mut second = means(1.0, 1.0, 1.0, 1.0, 1.0).into_inner();
        second["config"] = json!({"iters": 5});
        let tex = to_tex(&[
            Variant::new("a", means(1.0, 1.0, 1.0, 1.0, 1.0)),
            Variant::new("b", Dataset::new(second)),
        ])
        .unwrap();
        assert!(tex.contains("{\\BenchIters}{100,000}"));
        assert!(tex.contains("{\\BenchRuns}{5}"));
    }

    #[test]
    fn test_custom_config() {
        let config = TexConfig {
            caption: "Timings.".to_string(),
            comment: None,
            table_placement: "tbp".to_string(),
        };
        let tex =
            to_tex_with_config(&[Variant::new("a", means(1.0, 1.0, 1.0, 1.0, 1.0))], &config)
                .unwrap();
        assert!(tex.starts_with("\\newcommand{\\BenchIters}"));
        assert!(tex.contains("\\begin{table}[tbp]\n"));
        assert!(tex.contains("\\caption{Timings.}\n"));
    }
}
