//! Batched rendering of strings, symbols and clobs.
//!
//! This is the fast path. The body of every value is scanned left to right
//! for the longest run of characters that need no escaping in the active
//! [`Context`]; each run reaches the sink in a single
//! [`TextSink::append_ascii`] call. Only the character that breaks a run is
//! looked at individually:
//!
//! | Character | `escape_unicode` | otherwise |
//! |-----------|------------------|-----------|
//! | below 0x80, table entry | table escape | table escape |
//! | 0x80-0xFF | table escape (`\xHH`, JSON `\u00HH`) | written through |
//! | 0x100-0xFFFF | `\uHHHH` | written through |
//! | surrogate pair | `\UHHHHHHHH` (JSON `\uHHHH\uHHHH`) | pair written through |
//! | unmatched surrogate | [`Error::InvalidEncoding`] | [`Error::InvalidEncoding`] |
//!
//! Output is identical to rendering one scalar at a time with
//! [`crate::scalar::render_scalar`].
//!
//! ## Examples
//!
//! ```rust
//! use ion_text::{render_long_string, render_symbol, FmtSink};
//!
//! let mut out = String::new();
//! let mut sink = FmtSink::ascii(&mut out);
//! render_symbol(&mut sink, Some("name")).unwrap();
//! render_long_string(&mut sink, Some("it's\ntwo lines")).unwrap();
//! assert_eq!(out, "name'''it\\'s\ntwo lines'''");
//! ```

use crate::error::{Error, Result, SurrogateKind};
use crate::escape::{write_hex_escape, Context, EscapeTable};
use crate::sink::TextSink;
use crate::symbol::symbol_needs_quoting;
use crate::utf16::{
    combine_surrogates, is_high_surrogate, is_low_surrogate, split_surrogates,
};
use tracing::debug;

const NULL_STRING: &str = "null.string";
const NULL_SYMBOL: &str = "null.symbol";
const NULL_CLOB: &str = "null.clob";
const JSON_NULL: &str = "null";
const TRIPLE_QUOTES: &str = "'''";

/// A character sequence the encoders can render and classify.
///
/// Implemented for `str`, which is always well formed, and for `[u16]`, raw
/// UTF-16 code units whose surrogates are validated while rendering.
pub trait CharSequence {
    fn is_empty(&self) -> bool;

    /// The sequence as UTF-16 code units.
    fn code_units(&self) -> impl Iterator<Item = u16> + '_;

    /// Renders the sequence, without delimiters, escaped for `context`.
    fn render_body<S: TextSink + ?Sized>(&self, sink: &mut S, context: Context) -> Result<()>;
}

impl CharSequence for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }

    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.encode_utf16()
    }

    fn render_body<S: TextSink + ?Sized>(&self, sink: &mut S, context: Context) -> Result<()> {
        let table = context.escape_table();
        let bytes = self.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let start = i;
            // UTF-8 lead bytes are >= 0x80 and every Latin-1 value from 0x7F
            // up has a table entry, so a run is always plain ASCII.
            while i < bytes.len() && bytes[i] < 0x80 && !table.needs_escape(bytes[i]) {
                i += 1;
            }
            if i > start {
                sink.append_ascii(&self[start..i])?;
            }
            let Some(ch) = self[i..].chars().next() else {
                break;
            };
            let scalar = u32::from(ch);
            match u16::try_from(scalar) {
                Ok(unit) => write_unit(sink, table, unit)?,
                Err(_) => {
                    let (lead, trail) = split_surrogates(scalar);
                    write_pair(sink, lead, trail, context)?;
                }
            }
            i += ch.len_utf8();
        }
        Ok(())
    }
}

impl CharSequence for [u16] {
    fn is_empty(&self) -> bool {
        <[u16]>::is_empty(self)
    }

    fn code_units(&self) -> impl Iterator<Item = u16> + '_ {
        self.iter().copied()
    }

    fn render_body<S: TextSink + ?Sized>(&self, sink: &mut S, context: Context) -> Result<()> {
        let table = context.escape_table();
        let len = self.len();
        let mut run = String::new();
        let mut i = 0;
        while i < len {
            let start = i;
            while i < len && is_plain(table, self[i]) {
                i += 1;
            }
            if i > start {
                run.clear();
                run.extend(self[start..i].iter().map(|&unit| ascii_char(unit)));
                sink.append_ascii(&run)?;
            }
            if i == len {
                break;
            }

            let unit = self[i];
            if is_high_surrogate(unit) {
                match self.get(i + 1) {
                    Some(&trail) if is_low_surrogate(trail) => {
                        write_pair(sink, unit, trail, context)?;
                        i += 2;
                    }
                    _ => return Err(unmatched(SurrogateKind::High, unit, i)),
                }
            } else if is_low_surrogate(unit) {
                return Err(unmatched(SurrogateKind::Low, unit, i));
            } else {
                write_unit(sink, table, unit)?;
                i += 1;
            }
        }
        Ok(())
    }
}

#[inline]
fn is_plain(table: &EscapeTable, unit: u16) -> bool {
    u8::try_from(unit).is_ok_and(|b| !table.needs_escape(b))
}

/// Only called on units that passed [`is_plain`], which are all below 0x7F.
#[inline]
fn ascii_char(unit: u16) -> char {
    char::from(unit as u8)
}

fn unmatched(kind: SurrogateKind, unit: u16, index: usize) -> Error {
    debug!(%kind, unit, index, "rejecting ill-formed UTF-16");
    Error::unmatched_surrogate(kind, unit, index)
}

/// Handles one non-surrogate code unit that broke a plain run.
fn write_unit<S: TextSink + ?Sized>(sink: &mut S, table: &EscapeTable, unit: u16) -> Result<()> {
    if let Ok(b) = u8::try_from(unit) {
        if let Some(escape) = table.lookup(b) {
            if b < 0x80 || sink.escape_unicode() {
                return sink.append_ascii(escape);
            }
        }
    } else if sink.escape_unicode() {
        return write_hex_escape(sink, b'u', u32::from(unit), 4);
    }
    let ch = char::from_u32(u32::from(unit)).ok_or(Error::invalid_scalar(u32::from(unit)))?;
    sink.append_char(ch)
}

/// Handles a validated surrogate pair.
fn write_pair<S: TextSink + ?Sized>(
    sink: &mut S,
    lead: u16,
    trail: u16,
    context: Context,
) -> Result<()> {
    if !sink.escape_unicode() {
        return sink.append_surrogate_pair(lead, trail);
    }
    if context.is_json() {
        // JSON has no eight-digit escape
        write_hex_escape(sink, b'u', u32::from(lead), 4)?;
        return write_hex_escape(sink, b'u', u32::from(trail), 4);
    }
    write_hex_escape(sink, b'U', combine_surrogates(lead, trail), 8)
}

fn render_delimited<S, T>(
    sink: &mut S,
    text: Option<&T>,
    null: &str,
    delimiter: &str,
    context: Context,
) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    let Some(text) = text else {
        return sink.append_ascii(null);
    };
    sink.append_ascii(delimiter)?;
    text.render_body(sink, context)?;
    sink.append_ascii(delimiter)
}

/// Renders a double-quoted string, or `null.string` when `text` is absent.
///
/// # Errors
///
/// Fails on unmatched UTF-16 surrogates and on sink failures.
pub fn render_string<S, T>(sink: &mut S, text: Option<&T>) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    render_delimited(sink, text, NULL_STRING, "\"", Context::ShortString)
}

/// Renders a triple-quoted string with literal newlines, or `null.string`.
///
/// # Errors
///
/// Fails on unmatched UTF-16 surrogates and on sink failures.
pub fn render_long_string<S, T>(sink: &mut S, text: Option<&T>) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    render_delimited(sink, text, NULL_STRING, TRIPLE_QUOTES, Context::LongString)
}

/// Renders a JSON string, or `null` when `text` is absent.
///
/// # Errors
///
/// Fails on unmatched UTF-16 surrogates and on sink failures.
pub fn render_json_string<S, T>(sink: &mut S, text: Option<&T>) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    render_delimited(sink, text, JSON_NULL, "\"", Context::Json)
}

/// Renders a symbol, adding single quotes only when it cannot stand bare.
/// Operator symbols are quoted.
///
/// # Errors
///
/// Fails with [`Error::EmptySymbol`] on empty text, on unmatched UTF-16
/// surrogates, and on sink failures.
pub fn render_symbol<S, T>(sink: &mut S, text: Option<&T>) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    render_symbol_with(sink, text, true)
}

/// Renders a symbol, leaving operator symbols such as `+-` bare when
/// `quote_operators` is `false`.
///
/// # Examples
///
/// ```rust
/// use ion_text::{render_symbol_with, FmtSink};
///
/// let mut out = String::new();
/// render_symbol_with(&mut FmtSink::ascii(&mut out), Some("+-"), false).unwrap();
/// assert_eq!(out, "+-");
/// ```
///
/// # Errors
///
/// See [`render_symbol`].
pub fn render_symbol_with<S, T>(sink: &mut S, text: Option<&T>, quote_operators: bool) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    let Some(text) = text else {
        return sink.append_ascii(NULL_SYMBOL);
    };
    if symbol_needs_quoting(text, quote_operators)? {
        render_delimited(sink, Some(text), NULL_SYMBOL, "'", Context::Symbol)
    } else {
        // Bare identifiers and operators are ASCII with no escapes, so this
        // is a single run.
        text.render_body(sink, Context::Symbol)
    }
}

/// Renders a symbol in single quotes regardless of its text.
///
/// # Errors
///
/// Fails with [`Error::EmptySymbol`] on empty text, on unmatched UTF-16
/// surrogates, and on sink failures.
pub fn render_quoted_symbol<S, T>(sink: &mut S, text: Option<&T>) -> Result<()>
where
    S: TextSink + ?Sized,
    T: CharSequence + ?Sized,
{
    if text.is_some_and(|t| t.is_empty()) {
        debug!("rejecting empty symbol");
        return Err(Error::EmptySymbol);
    }
    render_delimited(sink, text, NULL_SYMBOL, "'", Context::Symbol)
}

fn render_bytes<S: TextSink + ?Sized>(sink: &mut S, bytes: &[u8], context: Context) -> Result<()> {
    let table = context.escape_table();
    let mut i = 0;
    while i < bytes.len() {
        let start = i;
        while i < bytes.len() && !table.needs_escape(bytes[i]) {
            i += 1;
        }
        if i > start {
            // every byte >= 0x7F has a table entry, so the run is ASCII
            let run = std::str::from_utf8(&bytes[start..i]).map_err(Error::custom)?;
            sink.append_ascii(run)?;
        }
        if let Some(escape) = bytes.get(i).and_then(|&b| table.lookup(b)) {
            sink.append_ascii(escape)?;
        }
        i += 1;
    }
    Ok(())
}

fn render_delimited_bytes<S: TextSink + ?Sized>(
    sink: &mut S,
    bytes: Option<&[u8]>,
    null: &str,
    delimiter: &str,
    context: Context,
) -> Result<()> {
    let Some(bytes) = bytes else {
        return sink.append_ascii(null);
    };
    sink.append_ascii(delimiter)?;
    render_bytes(sink, bytes, context)?;
    sink.append_ascii(delimiter)
}

/// Renders clob content as a double-quoted string of bytes, or `null.clob`.
///
/// Every byte from 0x7F up is written as `\xHH` whatever the sink's charset.
///
/// # Errors
///
/// Fails only when the sink fails.
pub fn render_clob<S: TextSink + ?Sized>(sink: &mut S, bytes: Option<&[u8]>) -> Result<()> {
    render_delimited_bytes(sink, bytes, NULL_CLOB, "\"", Context::Clob)
}

/// Renders clob content as a triple-quoted string of bytes, or `null.clob`.
///
/// # Errors
///
/// Fails only when the sink fails.
pub fn render_long_clob<S: TextSink + ?Sized>(sink: &mut S, bytes: Option<&[u8]>) -> Result<()> {
    render_delimited_bytes(sink, bytes, NULL_CLOB, TRIPLE_QUOTES, Context::LongString)
}

/// Renders clob content as a JSON string, or `null`.
///
/// # Errors
///
/// Fails only when the sink fails.
pub fn render_json_clob<S: TextSink + ?Sized>(sink: &mut S, bytes: Option<&[u8]>) -> Result<()> {
    render_delimited_bytes(sink, bytes, JSON_NULL, "\"", Context::Json)
}
