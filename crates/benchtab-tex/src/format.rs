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

//! Number and text formatting for table cells.

use std::borrow::Cow;

const NS_PER_MS: f64 = 1e6;

/// Nanoseconds as milliseconds with two decimals.
///
/// ```
/// assert_eq!(benchtab_tex::fmt_ms(1234567.0), "1.23");
/// ```
pub fn fmt_ms(ns: f64) -> String {
    format!("{:.2}", ns / NS_PER_MS)
}

/// Per-iteration nanoseconds with three decimals.
pub fn fmt_ns_per_iter(ns: f64) -> String {
    format!("{:.3}", ns)
}

/// Speedup ratio with two decimals.
pub fn fmt_speedup(ratio: f64) -> String {
    format!("{:.2}", ratio)
}

/// Integer with `,` between groups of three digits.
///
/// ```
/// assert_eq!(benchtab_tex::group_thousands(1234567), "1,234,567");
/// assert_eq!(benchtab_tex::group_thousands(-1000), "-1,000");
/// ```
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Escape characters that LaTeX treats specially in text mode.
pub fn escape_latex(text: &str) -> Cow<'_, str> {
    const SPECIAL: &[char] = &['&', '%', '$', '#', '_', '{', '}', '~', '^', '\\'];
    if !text.contains(SPECIAL) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(c);
            }
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '\\' => out.push_str("\\textbackslash{}"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
