//! Configuration options for Ion text output.
//!
//! - [`TextOptions`]: main configuration struct
//! - [`Charset`]: the encoding of the output target, which decides whether
//!   non-ASCII characters are escaped or written through
//!
//! ## Examples
//!
//! ```rust
//! use ion_text::{print_with_options, Charset, Context, TextOptions};
//!
//! // ASCII output escapes everything above 0x7E
//! let options = TextOptions::ascii();
//! assert_eq!(print_with_options("caf\u{e9}", Context::ShortString, &options).unwrap(), "\"caf\\xe9\"");
//!
//! // UTF-8 output writes it through
//! let options = TextOptions::new().with_charset(Charset::Utf8);
//! assert_eq!(print_with_options("caf\u{e9}", Context::ShortString, &options).unwrap(), "\"caf\u{e9}\"");
//! ```

use serde::{Deserialize, Serialize};

/// Text encoding of an output target.
///
/// # Examples
///
/// ```rust
/// use ion_text::Charset;
///
/// assert!(Charset::Ascii.escape_unicode());
/// assert!(!Charset::Utf8.escape_unicode());
/// assert_eq!(Charset::Utf16.as_str(), "UTF-16");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Charset {
    Ascii,
    #[default]
    Utf8,
    Utf16,
}

impl Charset {
    /// Returns the conventional name of this charset.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Charset::Ascii => "US-ASCII",
            Charset::Utf8 => "UTF-8",
            Charset::Utf16 => "UTF-16",
        }
    }

    /// Whether characters above 0x7E must be written as numeric escapes.
    #[must_use]
    pub const fn escape_unicode(&self) -> bool {
        matches!(self, Charset::Ascii)
    }
}

/// Configuration for the `print_*` helpers and [`crate::to_writer`].
///
/// # Examples
///
/// ```rust
/// use ion_text::{Charset, TextOptions};
///
/// let options = TextOptions::new()
///     .with_charset(Charset::Ascii)
///     .with_quote_operators(false);
/// assert!(!options.quote_operators);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    pub charset: Charset,
    /// When `false`, operator symbols such as `+-` are written bare.
    pub quote_operators: bool,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            charset: Charset::default(),
            quote_operators: true,
        }
    }
}

impl TextOptions {
    /// Creates default options (UTF-8 output, operators quoted).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ion_text::{Charset, TextOptions};
    ///
    /// let options = TextOptions::new();
    /// assert_eq!(options.charset, Charset::Utf8);
    /// assert!(options.quote_operators);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for ASCII-only output.
    #[must_use]
    pub fn ascii() -> Self {
        TextOptions {
            charset: Charset::Ascii,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_charset(mut self, charset: Charset) -> Self {
        self.charset = charset;
        self
    }

    /// Sets whether operator symbols need quotes.
    ///
    /// Containers such as s-expressions accept bare operators, so writers
    /// emitting into them turn this off.
    #[must_use]
    pub fn with_quote_operators(mut self, quote_operators: bool) -> Self {
        self.quote_operators = quote_operators;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_from_json() {
        let options: TextOptions = serde_json::from_str(r#"{"charset":"ascii"}"#).unwrap();
        assert_eq!(options.charset, Charset::Ascii);
        assert!(options.quote_operators);
    }

    #[test]
    fn test_options_json_roundtrip() {
        let options = TextOptions::new()
            .with_charset(Charset::Utf16)
            .with_quote_operators(false);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"charset":"utf16","quote_operators":false}"#);
        let back: TextOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
