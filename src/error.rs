//! Custom error types for the decoder.

use std::fmt;

/// An error that can occur while decoding JSON text.
///
/// Every variant carries the byte offset in the input at which the problem
/// was detected; [`DecodeError::position`] returns it uniformly.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input ended in the middle of a token.
    IncompleteInput { position: usize },
    /// A token could not be scanned (bad literal, bad escape, bad number).
    MalformedToken { position: usize, detail: String },
    /// An object key was empty or repeated a key already present.
    DuplicateOrEmptyKey { position: usize, key: String },
    /// The grammar required a different token at this point.
    UnexpectedToken {
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// Container nesting exceeded the configured limit.
    TooDeeplyNested { position: usize, limit: usize },
}

impl DecodeError {
    /// Byte offset in the input at which the error was detected.
    pub fn position(&self) -> usize {
        match self {
            DecodeError::IncompleteInput { position }
            | DecodeError::MalformedToken { position, .. }
            | DecodeError::DuplicateOrEmptyKey { position, .. }
            | DecodeError::UnexpectedToken { position, .. }
            | DecodeError::TooDeeplyNested { position, .. } => *position,
        }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::IncompleteInput { position } => {
                write!(f, "Unexpected end of input at offset {}", position)
            }
            DecodeError::MalformedToken { position, detail } => {
                write!(f, "Malformed token at offset {}: {}", position, detail)
            }
            DecodeError::DuplicateOrEmptyKey { position, key } => {
                if key.is_empty() {
                    write!(f, "Empty object key at offset {}", position)
                } else {
                    write!(f, "Duplicate object key \"{}\" at offset {}", key, position)
                }
            }
            DecodeError::UnexpectedToken {
                position,
                expected,
                found,
            } => write!(
                f,
                "Expected {} at offset {}, found {}",
                expected, position, found
            ),
            DecodeError::TooDeeplyNested { position, limit } => {
                write!(f, "Nesting exceeds {} levels at offset {}", limit, position)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
