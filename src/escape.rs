//! Syntactic contexts and their escape tables.
//!
//! Every context maps each value 0x00-0xFF to an optional escape sequence.
//! Values without an entry are written as-is; values at or above 0x100 never
//! reach these tables and are handled by the numeric escape rules.
//!
//! | Value | Short string / clob | Long string | Symbol | JSON |
//! |-------|--------------------|-------------|--------|------|
//! | NUL | `\0` | `\0` | `\0` | `\u0000` |
//! | BEL | `\a` | `\a` | `\a` | `\u0007` |
//! | VT | `\v` | `\v` | `\v` | `\u000b` |
//! | LF | `\n` | literal | `\n` | `\n` |
//! | `"` | `\"` | literal | literal | `\"` |
//! | `'` | literal | `\'` | `\'` | literal |
//! | 0x7F-0xFF | `\xHH` | `\xHH` | `\xHH` | `\u00HH` |

use crate::error::{Error, Result};
use crate::sink::TextSink;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// The syntactic position a piece of text is rendered into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Context {
    /// Double-quoted string, `"..."`
    ShortString,
    /// Triple-quoted string, `'''...'''`
    LongString,
    /// Single-quoted symbol, `'...'`
    Symbol,
    /// Double-quoted clob body; bytes are always escaped
    Clob,
    /// JSON string
    Json,
}

impl Context {
    #[must_use]
    pub fn escape_table(self) -> &'static EscapeTable {
        EscapeTable::for_context(self)
    }

    #[must_use]
    pub const fn is_json(self) -> bool {
        matches!(self, Context::Json)
    }
}

/// An immutable mapping from 0x00-0xFF to escape text.
#[derive(Clone, Debug)]
pub struct EscapeTable {
    entries: [Option<Box<str>>; 256],
}

impl EscapeTable {
    /// Returns the table for `context`. Tables are built once, on first use.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ion_text::{Context, EscapeTable};
    ///
    /// let table = EscapeTable::for_context(Context::LongString);
    /// assert_eq!(table.lookup(b'\n'), None);
    /// assert_eq!(table.lookup(b'\''), Some("\\'"));
    /// ```
    #[must_use]
    pub fn for_context(context: Context) -> &'static EscapeTable {
        match context {
            Context::ShortString | Context::Clob => &*STRING_ESCAPES,
            Context::LongString => &*LONG_STRING_ESCAPES,
            Context::Symbol => &*SYMBOL_ESCAPES,
            Context::Json => &*JSON_ESCAPES,
        }
    }

    #[inline]
    #[must_use]
    pub fn lookup(&self, value: u8) -> Option<&str> {
        self.entries[usize::from(value)].as_deref()
    }

    #[inline]
    #[must_use]
    pub fn needs_escape(&self, value: u8) -> bool {
        self.entries[usize::from(value)].is_some()
    }

    fn with(mut self, value: u8, escape: Option<&str>) -> Self {
        self.entries[usize::from(value)] = escape.map(Box::from);
        self
    }
}

/// Looks up the escape text for `value` in `context`.
///
/// # Examples
///
/// ```rust
/// use ion_text::{escape, Context};
///
/// assert_eq!(escape::lookup(Context::ShortString, 0x07), Some("\\a"));
/// assert_eq!(escape::lookup(Context::Json, 0x07), Some("\\u0007"));
/// assert_eq!(escape::lookup(Context::Symbol, b'a'), None);
/// ```
#[must_use]
pub fn lookup(context: Context, value: u8) -> Option<&'static str> {
    EscapeTable::for_context(context).lookup(value)
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes `\` + `marker` + `digits` lowercase hex digits of `value`, such as
/// `\x0b`, `\u00e9` or `\U0001f600`.
pub(crate) fn write_hex_escape<S: TextSink + ?Sized>(
    sink: &mut S,
    marker: u8,
    value: u32,
    digits: usize,
) -> Result<()> {
    let mut buf = [0u8; 10];
    buf[0] = b'\\';
    buf[1] = marker;
    for (k, slot) in buf[2..2 + digits].iter_mut().enumerate() {
        let shift = 4 * (digits - 1 - k);
        *slot = HEX_DIGITS[((value >> shift) & 0xF) as usize];
    }
    let text = std::str::from_utf8(&buf[..2 + digits]).map_err(Error::custom)?;
    sink.append_ascii(text)
}

fn named_escape(value: u8, json: bool) -> Option<&'static str> {
    Some(match (value, json) {
        (0x00, false) => "\\0",
        (0x00, true) => "\\u0000",
        (0x07, false) => "\\a",
        (0x07, true) => "\\u0007",
        (0x08, _) => "\\b",
        (b'\t', _) => "\\t",
        (b'\n', _) => "\\n",
        (0x0B, false) => "\\v",
        (0x0B, true) => "\\u000b",
        (0x0C, _) => "\\f",
        (b'\r', _) => "\\r",
        (b'\\', _) => "\\\\",
        (b'"', _) => "\\\"",
        _ => return None,
    })
}

fn build_table(json: bool) -> EscapeTable {
    EscapeTable {
        entries: std::array::from_fn(|i| {
            let value = i as u8;
            if let Some(named) = named_escape(value, json) {
                return Some(Box::from(named));
            }
            let escaped = value < 0x20 || value >= 0x7F;
            match (escaped, json) {
                (false, _) => None,
                (true, false) => Some(format!("\\x{value:02x}").into_boxed_str()),
                (true, true) => Some(format!("\\u{value:04x}").into_boxed_str()),
            }
        }),
    }
}

static STRING_ESCAPES: LazyLock<EscapeTable> = LazyLock::new(|| build_table(false));

static LONG_STRING_ESCAPES: LazyLock<EscapeTable> = LazyLock::new(|| {
    STRING_ESCAPES
        .clone()
        .with(b'\n', None)
        .with(b'\'', Some("\\'"))
        .with(b'"', None)
});

static SYMBOL_ESCAPES: LazyLock<EscapeTable> = LazyLock::new(|| {
    STRING_ESCAPES
        .clone()
        .with(b'\'', Some("\\'"))
        .with(b'"', None)
});

static JSON_ESCAPES: LazyLock<EscapeTable> = LazyLock::new(|| build_table(true));
