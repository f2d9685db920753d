//! # ordjson
//!
//! A self-contained JSON codec: a hand-written tokenizer, a
//! recursive-descent parser, and a mirrored encoder, with no other
//! serialization stack underneath.
//!
//! Decoded documents are [`Value`] trees. Object entries keep their
//! insertion order, integers stay distinct from floats, and every decode
//! failure reports a kind and a byte offset. A document proper is an array
//! or an object; bare scalars never decode successfully.
//!
//! ## Example
//!
//! ```rust
//! use ordjson::{decode, encode, DecoderOptions, EncoderOptions, Value};
//!
//! let doc = decode(r#"{"name":"Ann","age":30}"#, &DecoderOptions::default()).unwrap();
//! assert_eq!(doc.get("name").and_then(Value::as_str), Some("Ann"));
//! assert_eq!(doc.get("age").and_then(Value::as_i64), Some(30));
//!
//! let text = encode(&doc, &EncoderOptions::default());
//! assert_eq!(text, r#"{"name":"Ann","age":30}"#);
//! ```

mod codepoint;
mod decoder;
mod encoder;
mod error;
mod lexer;
mod value;

// Re-export public API
pub use decoder::{decode, DecoderOptions};
pub use encoder::{encode, EncoderOptions};
pub use error::DecodeError;
pub use value::Value;
