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

//! Integration tests for benchtab-csv.

use benchtab_core::{expand_runs, summarize, Variant, RUNS_HEADER, SUMMARY_HEADER};
use benchtab_csv::{
    runs_to_csv, summary_to_csv, write_runs, write_summary, CsvTable, ToCsvConfig,
};
use benchtab_test::fixtures;
use std::fs;
use tempfile::TempDir;

fn variants() -> Vec<Variant> {
    vec![
        Variant::new("base", fixtures::complete()),
        Variant::new("ssa", fixtures::ssa_complete()),
    ]
}

fn read_back(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    let rows = reader
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect::<Vec<_>>())
        .collect();
    (headers, rows)
}

#[test]
fn test_summary_reads_back() {
    let rows: Vec<_> = variants()
        .iter()
        .map(|v| summarize(&v.label, &v.dataset))
        .collect();
    let csv = summary_to_csv(&rows).unwrap();
    let (headers, records) = read_back(&csv);

    assert_eq!(headers, SUMMARY_HEADER);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0][0], "base");
    assert_eq!(records[1][0], "ssa");
    assert_eq!(records[0][1], "2025-03-14T09:26:53Z");
    assert_eq!(records[0][2], "100000");
    assert_eq!(records[0][7], "1234567.0");
    assert_eq!(records[1][6], "0");
    assert_eq!(records[1][27], "9.92");
}

#[test]
fn test_missing_stats_become_empty_cells() {
    let row = summarize("base", &fixtures::missing_stats());
    let csv = summary_to_csv(&[row]).unwrap();
    let (_, records) = read_back(&csv);

    let record = &records[0];
    assert_eq!(record.len(), SUMMARY_HEADER.len());
    assert_eq!(record[2], "1000");
    assert_eq!(record[3], "2");
    // warmup and both IR call counts are absent too
    assert!(record[4..].iter().all(String::is_empty));
}

#[test]
fn test_runs_for_each_variant_in_order() {
    let rows: Vec<_> = variants()
        .iter()
        .flat_map(|v| expand_runs(&v.label, &v.dataset))
        .collect();
    let csv = runs_to_csv(&rows).unwrap();
    let (headers, records) = read_back(&csv);

    assert_eq!(headers, RUNS_HEADER);
    assert_eq!(records.len(), 10);
    let keys: Vec<_> = records
        .iter()
        .map(|r| format!("{}#{}", r[0], r[1]))
        .collect();
    assert_eq!(
        keys,
        [
            "base#1", "base#2", "base#3", "base#4", "base#5", "ssa#1", "ssa#2", "ssa#3", "ssa#4",
            "ssa#5"
        ]
    );
    assert_eq!(records[4][6], "410000");
    assert_eq!(records[5][8], "10.0");
}

#[test]
fn test_ragged_runs_table() {
    let rows = expand_runs("ragged", &fixtures::ragged_runs());
    let csv = runs_to_csv(&rows).unwrap();
    let (_, records) = read_back(&csv);

    assert_eq!(records.len(), 3);
    assert_eq!(
        records[2],
        ["ragged", "3", "ragged", "10", "102", "202", "302", "402", "502"]
    );
}

#[test]
fn test_empty_dataset_has_no_runs() {
    let rows = expand_runs("empty", &fixtures::empty());
    let csv = runs_to_csv(&rows).unwrap();
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn test_record_width_matches_header() {
    for (name, fixture) in fixtures::all() {
        let dataset = fixture();
        assert_eq!(
            summarize(name, &dataset).record().len(),
            SUMMARY_HEADER.len(),
            "{}",
            name
        );
        for row in expand_runs(name, &dataset) {
            assert_eq!(row.record().len(), RUNS_HEADER.len(), "{}", name);
        }
    }
}

#[test]
fn test_write_files_idempotent() {
    let dir = TempDir::new().unwrap();
    let summary_path = dir.path().join("out").join("bench_results.csv");
    let runs_path = dir.path().join("out").join("bench_results_runs.csv");
    let config = ToCsvConfig::default();

    let summaries: Vec<_> = variants()
        .iter()
        .map(|v| summarize(&v.label, &v.dataset))
        .collect();
    let runs: Vec<_> = variants()
        .iter()
        .flat_map(|v| expand_runs(&v.label, &v.dataset))
        .collect();

    write_summary(&summary_path, &summaries, &config).unwrap();
    write_runs(&runs_path, &runs, &config).unwrap();
    let first = (
        fs::read(&summary_path).unwrap(),
        fs::read(&runs_path).unwrap(),
    );

    write_summary(&summary_path, &summaries, &config).unwrap();
    write_runs(&runs_path, &runs, &config).unwrap();
    let second = (
        fs::read(&summary_path).unwrap(),
        fs::read(&runs_path).unwrap(),
    );

    assert_eq!(first, second);
}

#[test]
fn test_write_replaces_longer_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bench_results_runs.csv");
    fs::write(&path, "x".repeat(10_000)).unwrap();

    write_runs(&path, &[], &ToCsvConfig::default()).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, format!("{}\r\n", RUNS_HEADER.join(",")));
}
