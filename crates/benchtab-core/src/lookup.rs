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

//! Absent-tolerant lookups over JSON values.
//!
//! [`Field`] is implemented for both `&Value` and `Option<&Value>`, so lookups
//! chain without intermediate checks:
//!
//! ```
//! use benchtab_core::Field;
//! use serde_json::json;
//!
//! let data = json!({"baseline": {"stats_time_ns": {"mean": 1.5}}});
//! assert_eq!(
//!     data.field("baseline").field("stats_time_ns").field("mean"),
//!     Some(&json!(1.5))
//! );
//! assert_eq!(data.field("optimized").field("stats_time_ns").field("mean"), None);
//! ```

use serde_json::Value;

/// An owned, possibly absent scalar slot in a report row.
pub type Cell = Option<Value>;

/// Chained key lookup that yields `None` at the first missing level.
///
/// Lookups into anything that is not a JSON object (including `null`) are
/// absent. Array access goes through [`Field::items`], which yields an empty
/// slice for anything that is not an array.
pub trait Field<'a>: Sized {
    /// The value this lookup currently points at.
    fn value(self) -> Option<&'a Value>;

    /// Look up one key.
    fn field(self, key: &str) -> Option<&'a Value> {
        self.value()?.as_object()?.get(key)
    }

    /// Look up a sequence of keys.
    fn path(self, keys: &[&str]) -> Option<&'a Value> {
        keys.iter().try_fold(self.value()?, |v, k| v.field(k))
    }

    /// Array elements, or an empty slice when absent or not an array.
    fn items(self) -> &'a [Value] {
        self.value()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Owned copy of the value for storage in a row.
    fn cell(self) -> Cell {
        self.value().cloned()
    }
}

impl<'a> Field<'a> for &'a Value {
    fn value(self) -> Option<&'a Value> {
        Some(self)
    }
}

impl<'a> Field<'a> for Option<&'a Value> {
    fn value(self) -> Option<&'a Value> {
        self
    }
}

/// Render a scalar as plain text.
///
/// Absent values and JSON `null` render as the empty string, strings render
/// without quotes, numbers use their JSON spelling and compound values fall
/// back to compact JSON.
///
/// # Examples
///
/// ```
/// use benchtab_core::scalar_text;
/// use serde_json::json;
///
/// assert_eq!(scalar_text(None), "");
/// assert_eq!(scalar_text(Some(&json!(null))), "");
/// assert_eq!(scalar_text(Some(&json!("2024-05-01"))), "2024-05-01");
/// assert_eq!(scalar_text(Some(&json!(1000000.0))), "1000000.0");
/// assert_eq!(scalar_text(Some(&json!(1000))), "1000");
/// ```
pub fn scalar_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Dotted form of a key path, used in diagnostics.
pub fn path_string(keys: &[&str]) -> String {
    keys.join(".")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chain_through_missing_level() {
        let data = json!({"speedup": {}});
        assert_eq!(data.field("speedup").field("stats").field("mean"), None);
        assert_eq!(data.field("nope").field("stats").field("mean"), None);
    }

    #[test]
    fn test_lookup_into_non_object() {
        let data = json!({"config": 5, "baseline": null, "optimized": [1, 2]});
        assert_eq!(data.field("config").field("iters"), None);
        assert_eq!(data.field("baseline").field("times_ns"), None);
        assert_eq!(data.field("optimized").field("0"), None);
    }

    #[test]
    fn test_path_matches_chain() {
        let data = json!({"a": {"b": {"c": 3}}});
        assert_eq!(data.path(&["a", "b", "c"]), Some(&json!(3)));
        assert_eq!(data.path(&["a", "x", "c"]), None);
        assert_eq!(data.path(&[]), Some(&data));
        assert_eq!(None::<&Value>.path(&[]), None);
    }

    #[test]
    fn test_items() {
        let data = json!({"values": [1.0, 2.0], "scalar": 3});
        assert_eq!(data.field("values").items().len(), 2);
        assert!(data.field("scalar").items().is_empty());
        assert!(data.field("missing").items().is_empty());
    }

    #[test]
    fn test_null_field_is_present_but_renders_empty() {
        let data = json!({"timestamp": null});
        let ts = data.field("timestamp");
        assert_eq!(ts, Some(&Value::Null));
        assert_eq!(scalar_text(ts), "");
    }

    #[test]
    fn test_scalar_text_compound() {
        assert_eq!(scalar_text(Some(&json!(true))), "true");
        assert_eq!(scalar_text(Some(&json!([1, 2]))), "[1,2]");
        assert_eq!(scalar_text(Some(&json!({"a": 1}))), "{\"a\":1}");
        assert_eq!(scalar_text(Some(&json!(-0.5))), "-0.5");
    }

    #[test]
    fn test_path_string() {
        assert_eq!(path_string(&["speedup", "stats", "mean"]), "speedup.stats.mean");
    }
}
