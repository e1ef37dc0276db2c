//! # Loggable Values
//!
//! A [`LogValue`] is either plain text or a structured value. Text is
//! always printed verbatim; structured values are rendered as compact JSON
//! by [`Logger::log`](crate::Logger::log) and in an inspect style by
//! [`Logger::debug`](crate::Logger::debug).

use crate::error::LogError;
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Text(String),
    Structured(Value),
}

impl LogValue {
    /// Serializes any `Serialize` type into a loggable value. Anything that
    /// serializes to a plain string becomes [`LogValue::Text`].
    pub fn structured<T: Serialize + ?Sized>(value: &T) -> Result<Self, LogError> {
        Ok(LogValue::from(serde_json::to_value(value)?))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, LogValue::Text(_))
    }

    /// Text verbatim, anything else as compact JSON (`{"a":"b","c":123}`).
    pub fn render_json(&self) -> String {
        match self {
            LogValue::Text(s) | LogValue::Structured(Value::String(s)) => s.clone(),
            LogValue::Structured(v) => v.to_string(),
        }
    }

    /// Text verbatim, anything else in inspect style (`{ a: 'b', c: 123 }`).
    pub fn render_inspect(&self) -> String {
        match self {
            LogValue::Text(s) | LogValue::Structured(Value::String(s)) => s.clone(),
            LogValue::Structured(v) => {
                let mut out = String::new();
                inspect_into(&mut out, v);
                out
            }
        }
    }
}

fn inspect_into(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => {
            let _ = write!(out, "{}", b);
        }
        Value::Number(n) => {
            let _ = write!(out, "{}", n);
        }
        Value::String(s) => quote_into(out, s),
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return;
            }
            out.push_str("[ ");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                inspect_into(out, item);
            }
            out.push_str(" ]");
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return;
            }
            out.push_str("{ ");
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                if is_identifier(key) {
                    out.push_str(key);
                } else {
                    quote_into(out, key);
                }
                out.push_str(": ");
                inspect_into(out, item);
            }
            out.push_str(" }");
        }
    }
}

/// Single quotes unless the text contains one, then double quotes, then
/// backticks; the quote is escaped only when all three appear.
fn quote_into(out: &mut String, s: &str) {
    let quote = ['\'', '"', '`']
        .into_iter()
        .find(|q| !s.contains(*q))
        .unwrap_or('\'');
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out.push(quote);
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Text(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Text(s)
    }
}

impl From<&String> for LogValue {
    fn from(s: &String) -> Self {
        LogValue::Text(s.clone())
    }
}

impl From<Value> for LogValue {
    fn from(v: Value) -> Self {
        match v {
            Value::String(s) => LogValue::Text(s),
            other => LogValue::Structured(other),
        }
    }
}

macro_rules! structured_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for LogValue {
                fn from(v: $t) -> Self {
                    LogValue::Structured(Value::from(v))
                }
            }
        )*
    };
}

structured_from!(bool, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f32, f64);

/// Builds a `Vec<LogValue>` from a heterogeneous list of values.
///
/// ```
/// use pyx_log::{log_values, LogValue};
///
/// let values = log_values!["Multiple types", 123456, true];
/// assert_eq!(values.len(), 3);
/// assert_eq!(values[0], LogValue::Text("Multiple types".into()));
/// ```
#[macro_export]
macro_rules! log_values {
    () => {
        ::std::vec::Vec::<$crate::LogValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::LogValue::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_renders_verbatim() {
        let v = LogValue::from("hello world!");
        assert_eq!(v.render_json(), "hello world!");
        assert_eq!(v.render_inspect(), "hello world!");
    }

    #[test]
    fn test_object_renders_compact_json() {
        let v = LogValue::from(json!({"a": "b", "c": 123}));
        assert_eq!(v.render_json(), r#"{"a":"b","c":123}"#);
    }

    #[test]
    fn test_object_renders_inspect_style() {
        let v = LogValue::from(json!({"a": "b", "c": 123}));
        assert_eq!(v.render_inspect(), "{ a: 'b', c: 123 }");
    }

    #[test]
    fn test_inspect_nested_and_empty() {
        let v = LogValue::from(json!({
            "empty": {},
            "list": [1, "two", null],
            "none": [],
            "odd-key": false
        }));
        assert_eq!(
            v.render_inspect(),
            "{ empty: {}, list: [ 1, 'two', null ], none: [], 'odd-key': false }"
        );
    }

    #[test]
    fn test_inspect_switches_quotes() {
        let v = LogValue::from(json!(["it's", "say \"hi\"", "it's \"both\"", "'\"`"]));
        assert_eq!(
            v.render_inspect(),
            r#"[ "it's", 'say "hi"', `it's "both"`, '\'"`' ]"#
        );
    }

    #[test]
    fn test_json_string_becomes_text() {
        assert_eq!(LogValue::from(json!("hi")), LogValue::Text("hi".into()));
        assert_eq!(
            LogValue::structured(&"hello").unwrap(),
            LogValue::Text("hello".into())
        );
        let raw = LogValue::Structured(Value::String("raw".into()));
        assert_eq!(raw.render_json(), "raw");
        assert_eq!(raw.render_inspect(), "raw");
    }

    #[test]
    fn test_primitives_are_structured() {
        assert_eq!(LogValue::from(123456).render_json(), "123456");
        assert_eq!(LogValue::from(true).render_inspect(), "true");
        assert!(!LogValue::from(1.5).is_text());
    }

    #[test]
    fn test_structured_from_serialize() {
        #[derive(Serialize)]
        struct Point {
            x: i32,
            y: i32,
        }

        let v = LogValue::structured(&Point { x: 1, y: 2 }).unwrap();
        assert_eq!(v.render_json(), r#"{"x":1,"y":2}"#);
    }

    #[test]
    fn test_log_values_macro() {
        let values = log_values!["Hello", json!({"a": "b"}), 7];
        assert_eq!(values.len(), 3);
        assert!(values[0].is_text());
        assert!(!values[1].is_text());
        assert!(log_values![].is_empty());
    }
}
