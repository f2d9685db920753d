//! Value tree to JSON text encoder.

use crate::codepoint;
use crate::value::Value;
use std::fmt::Write;

/// Encoder configuration options
#[derive(Debug, Clone)]
pub struct EncoderOptions {
    /// Re-emit every character above U+007F as `\uXXXX` escapes, using a
    /// surrogate pair beyond the Basic Multilingual Plane (default: true).
    /// When false, non-ASCII text passes through as raw UTF-8.
    pub escape_unicode: bool,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        Self {
            escape_unicode: true,
        }
    }
}

/// Encode a [`Value`] tree as JSON text.
///
/// Object entries are written in insertion order, so
/// `decode(encode(v))` reproduces `v` exactly.
///
/// # Panics
///
/// Panics on a non-finite [`Value::Float`]; NaN and the infinities have no
/// JSON representation, and asking for one is a programming error.
pub fn encode(value: &Value, options: &EncoderOptions) -> String {
    let mut encoder = Encoder::new(options);
    encoder.encode_value(value);
    encoder.output
}

struct Encoder<'a> {
    options: &'a EncoderOptions,
    output: String,
}

impl<'a> Encoder<'a> {
    fn new(options: &'a EncoderOptions) -> Self {
        Self {
            options,
            output: String::new(),
        }
    }

    fn encode_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Boolean(true) => self.output.push_str("true"),
            Value::Boolean(false) => self.output.push_str("false"),
            Value::Integer(n) => {
                let _ = write!(self.output, "{}", n);
            }
            Value::Float(x) => self.encode_float(*x),
            Value::String(s) => self.encode_string(s),
            Value::Array(items) => {
                self.output.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.encode_value(item);
                }
                self.output.push(']');
            }
            Value::Object(entries) => {
                self.output.push('{');
                for (i, (key, item)) in entries.iter().enumerate() {
                    if i > 0 {
                        self.output.push(',');
                    }
                    self.encode_string(key);
                    self.output.push(':');
                    self.encode_value(item);
                }
                self.output.push('}');
            }
        }
    }

    /// Canonical decimal text for a float. The output always carries a
    /// fraction or an exponent so it reads back as a float.
    fn encode_float(&mut self, x: f64) {
        assert!(x.is_finite(), "cannot encode a non-finite number as JSON");
        let mut text = x.to_string();
        if !text.contains('.') && !text.contains('e') && !text.contains('E') {
            text.push_str(".0");
        }
        self.output.push_str(&text);
    }

    fn encode_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '/' => self.output.push_str("\\/"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                ch if (ch as u32) < 0x20 => {
                    // control characters outside the escape table
                    let _ = write!(self.output, "\\u{:04x}", ch as u32);
                }
                ch if ch.is_ascii() => self.output.push(ch),
                ch if self.options.escape_unicode => self.push_unicode_escape(ch),
                ch => self.output.push(ch),
            }
        }
        self.output.push('"');
    }

    fn push_unicode_escape(&mut self, ch: char) {
        let (high, low) = codepoint::utf16_units(ch);
        let _ = write!(self.output, "\\u{:04x}", high);
        if let Some(low) = low {
            let _ = write!(self.output, "\\u{:04x}", low);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::{decode, DecoderOptions};

    fn enc(value: &Value) -> String {
        encode(value, &EncoderOptions::default())
    }

    #[test]
    fn test_encode_scalars() {
        assert_eq!(enc(&Value::Null), "null");
        assert_eq!(enc(&Value::Boolean(true)), "true");
        assert_eq!(enc(&Value::Boolean(false)), "false");
        assert_eq!(enc(&Value::Integer(42)), "42");
        assert_eq!(enc(&Value::Integer(-7)), "-7");
        assert_eq!(enc(&Value::from("hi")), "\"hi\"");
    }

    #[test]
    fn test_encode_floats_keep_a_fraction_marker() {
        assert_eq!(enc(&Value::Float(3.25)), "3.25");
        assert_eq!(enc(&Value::Float(1.0)), "1.0");
        assert_eq!(enc(&Value::Float(-2.0)), "-2.0");
        assert_eq!(enc(&Value::Float(0.0015)), "0.0015");
    }

    #[test]
    #[should_panic(expected = "non-finite")]
    fn test_encode_nan_panics() {
        enc(&Value::Float(f64::NAN));
    }

    #[test]
    fn test_encode_array() {
        let value = Value::Array(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
        ]);
        assert_eq!(enc(&value), "[1,2,3]");
        assert_eq!(enc(&Value::Array(vec![])), "[]");
    }

    #[test]
    fn test_encode_object() {
        let value = Value::from_entries(vec![("a".to_string(), Value::Integer(1))]);
        assert_eq!(enc(&value), "{\"a\":1}");
    }

    #[test]
    fn test_encode_object_keeps_entry_order() {
        let value = Value::from_entries(vec![
            ("z".to_string(), Value::Integer(1)),
            ("a".to_string(), Value::Integer(2)),
        ]);
        assert_eq!(enc(&value), "{\"z\":1,\"a\":2}");
    }

    #[test]
    fn test_encode_string_escape_table() {
        assert_eq!(
            enc(&Value::from("a\"b\\c/d\u{0008}\u{000C}\n\r\t")),
            r#""a\"b\\c\/d\b\f\n\r\t""#
        );
    }

    #[test]
    fn test_encode_control_characters_as_u_escapes() {
        assert_eq!(enc(&Value::from("a\u{0001}b")), "\"a\\u0001b\"");
    }

    #[test]
    fn test_encode_bmp_character_as_single_escape() {
        assert_eq!(enc(&Value::from("é")), "\"\\u00e9\"");
        assert_eq!(enc(&Value::from("世")), "\"\\u4e16\"");
    }

    #[test]
    fn test_encode_astral_character_as_surrogate_pair() {
        assert_eq!(enc(&Value::from("😀")), "\"\\ud83d\\ude00\"");
    }

    #[test]
    fn test_raw_unicode_passthrough_when_not_escaping() {
        let options = EncoderOptions {
            escape_unicode: false,
        };
        assert_eq!(encode(&Value::from("é世😀"), &options), "\"é世😀\"");
    }

    #[test]
    fn test_nested_document() {
        let value = Value::from_entries(vec![
            ("name".to_string(), Value::from("Ann")),
            (
                "tags".to_string(),
                Value::Array(vec![Value::from("x"), Value::from("y")]),
            ),
            ("age".to_string(), Value::Integer(30)),
            ("ok".to_string(), Value::Boolean(true)),
            ("note".to_string(), Value::Null),
        ]);
        assert_eq!(
            enc(&value),
            r#"{"name":"Ann","tags":["x","y"],"age":30,"ok":true,"note":null}"#
        );
    }

    #[test]
    fn test_round_trip() {
        let value = Value::from_entries(vec![
            ("text".to_string(), Value::from("héllo\n😀")),
            (
                "nums".to_string(),
                Value::Array(vec![Value::Integer(-1), Value::Float(2.5)]),
            ),
            ("flag".to_string(), Value::Boolean(false)),
        ]);
        let text = enc(&value);
        let decoded = decode(&text, &DecoderOptions::default()).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn test_re_encode_is_idempotent() {
        let value = Value::Array(vec![
            Value::from("a/b"),
            Value::Float(1.0),
            Value::from_entries(vec![("k".to_string(), Value::Null)]),
        ]);
        let once = enc(&value);
        let twice = enc(&decode(&once, &DecoderOptions::default()).unwrap());
        assert_eq!(once, twice);
    }
}
