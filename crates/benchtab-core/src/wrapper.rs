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

//! Decoder for the global-assignment wrapper around benchmark payloads.
//!
//! The benchmark harness writes its results as a script that assigns a JSON
//! literal to a browser global, so the data can be loaded with a plain
//! `<script>` tag. The decoder accepts this grammar:
//!
//! ```text
//! file     := ws* ( assign | bare )
//! assign   := target ws* '=' ws* payload
//! bare     := ( '{' | '[' ) ...            ; a JSON object or array
//! target   := ident ( '.' ident )* '.' name
//! ident    := [A-Za-z_$] [A-Za-z0-9_$]*
//! name     := [A-Z_] [A-Z0-9_]*
//! payload  := json ws* ( ';' ws* )?
//! ```
//!
//! Only the wrapper is checked here. The payload slice is handed to the JSON
//! parser unchanged, together with its offset so parse errors can be reported
//! against the full input.

use crate::error::{BenchError, Result};

/// The JSON portion of a decoded input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payload<'a> {
    /// Assignment target such as `window.BENCH_DATA`, or `None` for bare JSON.
    pub target: Option<&'a str>,
    /// Payload text with the wrapper and trailing terminator removed.
    pub json: &'a str,
    /// Byte offset of `json` within the input text.
    pub offset: usize,
}

impl Payload<'_> {
    /// The upper-case global name, e.g. `BENCH_DATA`.
    pub fn global_name(&self) -> Option<&str> {
        self.target.and_then(|t| t.rsplit('.').next())
    }
}

/// Strip the global-assignment wrapper from `text`.
///
/// # Errors
///
/// Returns [`BenchError::Wrapper`] with the 1-based position of the first
/// character that does not fit the grammar.
///
/// # Examples
///
/// ```
/// use benchtab_core::decode_wrapper;
///
/// let payload = decode_wrapper("window.BENCH_DATA = {\"runs\": 3};\n").unwrap();
/// assert_eq!(payload.target, Some("window.BENCH_DATA"));
/// assert_eq!(payload.json, "{\"runs\": 3}");
/// ```
pub fn decode(text: &str) -> Result<Payload<'_>> {
    let mut cursor = Cursor::new(text);
    cursor.skip_ws();

    match cursor.peek() {
        None => Err(cursor.error("expected a global assignment or JSON value, found end of input")),
        Some('{') | Some('[') => Ok(cursor.payload(None)),
        Some(_) => {
            let start = cursor.pos;
            cursor.target()?;
            let target = &text[start..cursor.pos];
            cursor.skip_ws();
            cursor.expect('=')?;
            cursor.skip_ws();
            let payload = cursor.payload(Some(target));
            if payload.json.trim().is_empty() {
                return Err(cursor.error("expected a JSON value after '='"));
            }
            Ok(payload)
        }
    }
}

struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        match self.peek() {
            Some(c) if c == expected => {
                self.bump();
                Ok(())
            }
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c))),
            None => Err(self.error(format!("expected '{}', found end of input", expected))),
        }
    }

    /// Consume `ident ('.' ident)* '.' name`.
    fn target(&mut self) -> Result<()> {
        let mut segments = 0usize;
        let mut last_start;
        loop {
            last_start = self.pos;
            self.ident()?;
            segments += 1;
            if self.peek() == Some('.') {
                self.bump();
            } else {
                break;
            }
        }

        if segments < 2 {
            return Err(self.error("expected '.' followed by an upper-case global name"));
        }

        let name = &self.text[last_start..self.pos];
        let upper = name
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        if !upper || name.starts_with(|c: char| c.is_ascii_digit()) {
            let (line, column) = position(self.text, last_start);
            return Err(BenchError::wrapper(
                line,
                column,
                format!("global name '{}' must be upper-case (A-Z, 0-9, _)", name),
            ));
        }
        Ok(())
    }

    fn ident(&mut self) -> Result<()> {
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => self.bump(),
            Some(c) => return Err(self.error(format!("expected identifier, found '{}'", c))),
            None => return Err(self.error("expected identifier, found end of input")),
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_' || c == '$') {
            self.bump();
        }
        Ok(())
    }

    fn payload(&self, target: Option<&'a str>) -> Payload<'a> {
        let end = self.text.trim_end().len().max(self.pos);
        let body = &self.text[self.pos..end];
        let json = body.strip_suffix(';').unwrap_or(body);
        Payload {
            target,
            json,
            offset: self.pos,
        }
    }

    fn error(&self, message: impl Into<String>) -> BenchError {
        let (line, column) = position(self.text, self.pos);
        BenchError::wrapper(line, column, message)
    }
}

/// 1-based line and column of a byte offset.
pub(crate) fn position(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_assignment() {
        let p = decode("window.BENCH_DATA = {\"a\": 1};").unwrap();
        assert_eq!(p.target, Some("window.BENCH_DATA"));
        assert_eq!(p.global_name(), Some("BENCH_DATA"));
        assert_eq!(p.json, "{\"a\": 1}");
        assert_eq!(p.offset, 20);
    }

    #[test]
    fn test_terminator_optional() {
        let p = decode("window.BENCH_DATA={}\n").unwrap();
        assert_eq!(p.json, "{}");
    }

    #[test]
    fn test_only_one_terminator_removed() {
        let p = decode("window.BENCH_DATA = {};;").unwrap();
        assert_eq!(p.json, "{};");
    }

    #[test]
    fn test_surrounding_whitespace() {
        let p = decode("\n\n   window.BENCH_DATA\t=\n  {\"x\": [1, 2]}  ;  \n").unwrap();
        assert_eq!(p.json, "{\"x\": [1, 2]}  ");
    }

    #[test]
    fn test_dotted_prefix() {
        let p = decode("globalThis.bench.RESULTS_2 = []").unwrap();
        assert_eq!(p.target, Some("globalThis.bench.RESULTS_2"));
        assert_eq!(p.json, "[]");
    }

    #[test]
    fn test_bare_json() {
        let p = decode("  {\"timestamp\": \"t\"}\n").unwrap();
        assert_eq!(p.target, None);
        assert_eq!(p.json, "{\"timestamp\": \"t\"}");
        assert_eq!(p.offset, 2);
    }

    #[test]
    fn test_lowercase_name_rejected() {
        let err = decode("window.benchData = {}").unwrap_err();
        match err {
            BenchError::Wrapper { line, column, message } => {
                assert_eq!((line, column), (1, 8));
                assert!(message.contains("benchData"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_prefix_rejected() {
        let err = decode("BENCH_DATA = {}").unwrap_err();
        assert!(err.to_string().contains("upper-case global name"));
    }

    #[test]
    fn test_missing_equals() {
        let err = decode("window.BENCH_DATA {}").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed wrapper at line 1, column 19: expected '=', found '{'"
        );
    }

    #[test]
    fn test_missing_value() {
        let err = decode("window.BENCH_DATA =   \n").unwrap_err();
        assert!(err.to_string().contains("expected a JSON value"));
        let err = decode("window.BENCH_DATA = ;").unwrap_err();
        assert!(matches!(err, BenchError::Wrapper { line: 1, column: 21, .. }));
    }

    #[test]
    fn test_empty_input() {
        let err = decode("   \n ").unwrap_err();
        assert!(err.to_string().contains("found end of input"));
    }

    #[test]
    fn test_const_declaration_rejected() {
        let err = decode("const BENCH = {}").unwrap_err();
        assert!(matches!(err, BenchError::Wrapper { line: 1, column: 6, .. }));
    }

    #[test]
    fn test_position_counts_lines() {
        let text = "ab\ncd\nef";
        assert_eq!(position(text, 0), (1, 1));
        assert_eq!(position(text, 4), (2, 2));
        assert_eq!(position(text, 6), (3, 1));
    }
}
