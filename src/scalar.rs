//! One-scalar-at-a-time rendering.
//!
//! [`render_scalar`] escapes a single Unicode scalar value straight into a
//! sink. It is the baseline the batched encoder in [`crate::text`] is measured
//! against: for every context, sink and well-formed input both produce the
//! same characters.
//!
//! ## Examples
//!
//! ```rust
//! use ion_text::{render_scalar, Context, FmtSink};
//!
//! let mut out = String::new();
//! let mut sink = FmtSink::ascii(&mut out);
//! render_scalar(&mut sink, 0x07, Context::ShortString).unwrap();
//! render_scalar(&mut sink, 0x07, Context::Json).unwrap();
//! render_scalar(&mut sink, 0x1D11E, Context::Json).unwrap();
//! assert_eq!(out, "\\a\\u0007\\ud834\\udd1e");
//! ```

use crate::error::{Error, Result};
use crate::escape::{write_hex_escape, Context};
use crate::sink::{append_supplementary, TextSink};
use crate::utf16::{split_surrogates, Scalars};

fn named_escape(scalar: u32, context: Context) -> Option<&'static str> {
    let json = context.is_json();
    match scalar {
        0x00 if json => Some("\\u0000"),
        0x00 => Some("\\0"),
        0x09 => Some("\\t"),
        0x0A if context == Context::LongString => Some("\n"),
        0x0A => Some("\\n"),
        0x0D => Some("\\r"),
        0x0C => Some("\\f"),
        0x08 => Some("\\b"),
        0x07 if json => Some("\\u0007"),
        0x07 => Some("\\a"),
        0x0B if json => Some("\\u000b"),
        0x0B => Some("\\v"),
        0x22 if matches!(context, Context::Json | Context::ShortString | Context::Clob) => {
            Some("\\\"")
        }
        0x27 if matches!(context, Context::Symbol | Context::LongString) => Some("\\'"),
        0x5C => Some("\\\\"),
        _ => None,
    }
}

/// Writes a two-digit `\xHH` escape, or `\u00HH` in JSON.
fn write_latin1_escape<S: TextSink + ?Sized>(sink: &mut S, scalar: u32, json: bool) -> Result<()> {
    if json {
        write_hex_escape(sink, b'u', scalar, 4)
    } else {
        write_hex_escape(sink, b'x', scalar, 2)
    }
}

/// Renders one Unicode scalar value escaped for `context`.
///
/// Surrogate pairs must already be combined by the caller. Characters above
/// 0x7F are written through when the sink does not escape Unicode.
///
/// # Errors
///
/// Returns [`Error::InvalidScalar`] for surrogates and values above
/// U+10FFFF, and propagates sink failures.
pub fn render_scalar<S: TextSink + ?Sized>(sink: &mut S, scalar: u32, context: Context) -> Result<()> {
    let ch = char::from_u32(scalar).ok_or(Error::invalid_scalar(scalar))?;
    if let Some(escape) = named_escape(scalar, context) {
        return sink.append_ascii(escape);
    }

    let json = context.is_json();
    if scalar < 0x20 || scalar == 0x7F {
        return write_latin1_escape(sink, scalar, json);
    }
    if scalar < 0x7F {
        let mut buf = [0u8; 4];
        return sink.append_ascii(ch.encode_utf8(&mut buf));
    }
    if !sink.escape_unicode() {
        return if scalar > 0xFFFF {
            append_supplementary(sink, scalar)
        } else {
            sink.append_char(ch)
        };
    }
    if scalar <= 0xFF {
        write_latin1_escape(sink, scalar, json)
    } else if scalar <= 0xFFFF {
        write_hex_escape(sink, b'u', scalar, 4)
    } else if json {
        // JSON escapes supplementary characters as a surrogate pair (RFC 4627)
        let (lead, trail) = split_surrogates(scalar);
        write_hex_escape(sink, b'u', u32::from(lead), 4)?;
        write_hex_escape(sink, b'u', u32::from(trail), 4)
    } else {
        write_hex_escape(sink, b'U', scalar, 8)
    }
}

/// Renders UTF-16 text one scalar at a time, without delimiters.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] on the first unmatched surrogate and
/// propagates sink failures.
pub fn render_code_points<S: TextSink + ?Sized>(sink: &mut S, text: &[u16], context: Context) -> Result<()> {
    for scalar in Scalars::new(text) {
        render_scalar(sink, scalar?, context)?;
    }
    Ok(())
}

/// Renders UTF-8 text one scalar at a time, without delimiters.
///
/// # Errors
///
/// Propagates sink failures.
pub fn render_chars<S: TextSink + ?Sized>(sink: &mut S, text: &str, context: Context) -> Result<()> {
    for ch in text.chars() {
        render_scalar(sink, u32::from(ch), context)?;
    }
    Ok(())
}
