//! JSON text to value-tree decoder.

use crate::error::DecodeError;
use crate::lexer::{Lexer, Token};
use crate::value::Value;
use indexmap::IndexMap;

/// Decoder configuration options
#[derive(Debug, Clone)]
pub struct DecoderOptions {
    /// Maximum container nesting depth (default: 128)
    pub max_depth: usize,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Decode JSON text into a [`Value`] tree.
///
/// The document proper must be an array or an object. Scalar tokens before
/// the first `[` or `{` are skipped, and text after the document's closing
/// bracket is never examined; both behaviors are kept from the original
/// scanner this decoder replaces.
pub fn decode(input: &str, options: &DecoderOptions) -> Result<Value, DecodeError> {
    let mut decoder = Decoder::new(input, options);
    decoder.decode()
}

/// What the array production will accept next.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ArrayState {
    /// Immediately after `[`.
    ValueOrEnd,
    /// After an element.
    CommaOrEnd,
    /// After `,`.
    Value,
}

impl ArrayState {
    fn expected(self) -> &'static str {
        match self {
            ArrayState::ValueOrEnd => "a value or `]`",
            ArrayState::CommaOrEnd => "`,` or `]`",
            ArrayState::Value => "a value",
        }
    }

    fn accepts_value(self) -> bool {
        self != ArrayState::CommaOrEnd
    }
}

/// What the object production will accept next.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ObjectState {
    /// Immediately after `{`.
    KeyOrEnd,
    /// After a key.
    Colon,
    /// After `:`.
    Value,
    /// After an entry.
    CommaOrEnd,
    /// After `,`.
    Key,
}

impl ObjectState {
    fn expected(self) -> &'static str {
        match self {
            ObjectState::KeyOrEnd => "a key or `}`",
            ObjectState::Colon => "`:`",
            ObjectState::Value => "a value",
            ObjectState::CommaOrEnd => "`,` or `}`",
            ObjectState::Key => "a key",
        }
    }

    fn accepts_end(self) -> bool {
        matches!(self, ObjectState::KeyOrEnd | ObjectState::CommaOrEnd)
    }
}

struct Decoder<'a> {
    lexer: Lexer<'a>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Decoder<'a> {
    fn new(input: &'a str, options: &DecoderOptions) -> Self {
        Self {
            lexer: Lexer::new(input),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    fn decode(&mut self) -> Result<Value, DecodeError> {
        loop {
            match self.lexer.next_token()? {
                Token::ArrayStart => return self.parse_array(),
                Token::ObjectStart => return self.parse_object(),
                Token::End => {
                    return Err(DecodeError::UnexpectedToken {
                        position: self.lexer.token_start(),
                        expected: "`[` or `{`",
                        found: "end of input",
                    })
                }
                // anything before the first container is skipped
                _ => {}
            }
        }
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(DecodeError::TooDeeplyNested {
                position: self.lexer.token_start(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses an array body; the `[` token is already consumed.
    fn parse_array(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut items = Vec::new();
        let mut state = ArrayState::ValueOrEnd;

        loop {
            let token = self.lexer.next_token()?;
            let position = self.lexer.token_start();
            let found = token.describe();
            match token {
                Token::ArrayEnd if state != ArrayState::Value => break,
                Token::Comma if state == ArrayState::CommaOrEnd => {
                    state = ArrayState::Value;
                }
                Token::ArrayStart if state.accepts_value() => {
                    items.push(self.parse_array()?);
                    state = ArrayState::CommaOrEnd;
                }
                Token::ObjectStart if state.accepts_value() => {
                    items.push(self.parse_object()?);
                    state = ArrayState::CommaOrEnd;
                }
                Token::String(s) if state.accepts_value() => {
                    items.push(Value::String(s));
                    state = ArrayState::CommaOrEnd;
                }
                Token::Integer(n) if state.accepts_value() => {
                    items.push(Value::Integer(n));
                    state = ArrayState::CommaOrEnd;
                }
                Token::Float(x) if state.accepts_value() => {
                    items.push(Value::Float(x));
                    state = ArrayState::CommaOrEnd;
                }
                Token::Boolean(b) if state.accepts_value() => {
                    items.push(Value::Boolean(b));
                    state = ArrayState::CommaOrEnd;
                }
                Token::Null if state.accepts_value() => {
                    items.push(Value::Null);
                    state = ArrayState::CommaOrEnd;
                }
                _ => {
                    return Err(DecodeError::UnexpectedToken {
                        position,
                        expected: state.expected(),
                        found,
                    })
                }
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }

    /// Parses an object body; the `{` token is already consumed.
    fn parse_object(&mut self) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut entries: IndexMap<String, Value> = IndexMap::new();
        let mut state = ObjectState::KeyOrEnd;
        let mut current_key = String::new();

        loop {
            let token = self.lexer.next_token()?;
            let position = self.lexer.token_start();
            let found = token.describe();
            match token {
                Token::ObjectEnd if state.accepts_end() => break,
                // `]` has always terminated an object body here too;
                // kept as-is for input compatibility
                Token::ArrayEnd if state.accepts_end() => break,
                Token::String(key)
                    if matches!(state, ObjectState::KeyOrEnd | ObjectState::Key) =>
                {
                    if key.is_empty() || entries.contains_key(&key) {
                        return Err(DecodeError::DuplicateOrEmptyKey { position, key });
                    }
                    current_key = key;
                    state = ObjectState::Colon;
                }
                Token::Colon if state == ObjectState::Colon => {
                    state = ObjectState::Value;
                }
                Token::Comma if state == ObjectState::CommaOrEnd => {
                    state = ObjectState::Key;
                }
                Token::ArrayStart if state == ObjectState::Value => {
                    let value = self.parse_array()?;
                    entries.insert(std::mem::take(&mut current_key), value);
                    state = ObjectState::CommaOrEnd;
                }
                Token::ObjectStart if state == ObjectState::Value => {
                    let value = self.parse_object()?;
                    entries.insert(std::mem::take(&mut current_key), value);
                    state = ObjectState::CommaOrEnd;
                }
                Token::String(s) if state == ObjectState::Value => {
                    entries.insert(std::mem::take(&mut current_key), Value::String(s));
                    state = ObjectState::CommaOrEnd;
                }
                Token::Integer(n) if state == ObjectState::Value => {
                    entries.insert(std::mem::take(&mut current_key), Value::Integer(n));
                    state = ObjectState::CommaOrEnd;
                }
                Token::Float(x) if state == ObjectState::Value => {
                    entries.insert(std::mem::take(&mut current_key), Value::Float(x));
                    state = ObjectState::CommaOrEnd;
                }
                Token::Boolean(b) if state == ObjectState::Value => {
                    entries.insert(std::mem::take(&mut current_key), Value::Boolean(b));
                    state = ObjectState::CommaOrEnd;
                }
                Token::Null if state == ObjectState::Value => {
                    entries.insert(std::mem::take(&mut current_key), Value::Null);
                    state = ObjectState::CommaOrEnd;
                }
                _ => {
                    return Err(DecodeError::UnexpectedToken {
                        position,
                        expected: state.expected(),
                        found,
                    })
                }
            }
        }

        self.leave();
        Ok(Value::Object(entries))
    }
}
