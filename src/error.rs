//! Error types for text rendering and symbol classification.
//!
//! ## Error Categories
//!
//! - **Empty symbols**: a symbol was rendered or classified with no text
//! - **Invalid encoding**: UTF-16 input contains an unmatched surrogate
//! - **Invalid scalars**: a code point outside the Unicode scalar value space
//! - **Sink failures**: the output target reported an error (`fmt` or `io`)
//!
//! Output already written to a sink before an error is not rolled back.
//!
//! ## Examples
//!
//! ```rust
//! use ion_text::{print_symbol, Error};
//!
//! let err = print_symbol("").unwrap_err();
//! assert!(matches!(err, Error::EmptySymbol));
//! ```

use std::{fmt, io};
use thiserror::Error;

/// Which half of a surrogate pair was found without its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurrogateKind {
    High,
    Low,
}

impl fmt::Display for SurrogateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SurrogateKind::High => "high",
            SurrogateKind::Low => "low",
        })
    }
}

/// Represents all possible errors raised while rendering Ion text.
#[derive(Debug, Error)]
pub enum Error {
    /// A symbol must contain at least one character
    #[error("Symbols must contain at least one character")]
    EmptySymbol,

    /// UTF-16 input contains an unmatched surrogate
    #[error("text is invalid UTF-16. It contains an unmatched {kind} surrogate 0x{unit:x} at index {index}")]
    InvalidEncoding {
        kind: SurrogateKind,
        unit: u16,
        index: usize,
    },

    /// Value is a surrogate or lies above U+10FFFF
    #[error("0x{0:x} is not a Unicode scalar value")]
    InvalidScalar(u32),

    /// The `fmt::Write` sink failed
    #[error("Formatter error: {0}")]
    Fmt(#[from] fmt::Error),

    /// The `io::Write` sink failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid encoding error for an unmatched surrogate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ion_text::{Error, SurrogateKind};
    ///
    /// let err = Error::unmatched_surrogate(SurrogateKind::High, 0xD800, 3);
    /// assert!(err.to_string().contains("high surrogate 0xd800 at index 3"));
    /// ```
    pub fn unmatched_surrogate(kind: SurrogateKind, unit: u16, index: usize) -> Self {
        Error::InvalidEncoding { kind, unit, index }
    }

    /// Creates an error for a value that is not a Unicode scalar value.
    pub fn invalid_scalar(value: u32) -> Self {
        Error::InvalidScalar(value)
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors raised by the output sink rather than by the input.
    pub fn is_sink_failure(&self) -> bool {
        matches!(self, Error::Fmt(_) | Error::Io(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
