//! # ion_text
//!
//! Escaping and quoting for the Ion text notation.
//!
//! ## What does it do?
//!
//! Given text or bytes that are about to become an Ion (or JSON) value, this
//! crate decides, character by character, how they must be escaped for the
//! syntactic position they are written to, and whether a symbol can be
//! written without quotes.
//!
//! ## Key Features
//!
//! - **Five contexts**: strings, long strings, symbols, clobs and JSON strings,
//!   each with its own escape table
//! - **Batched output**: runs of characters that need no escaping reach the
//!   output in one call
//! - **UTF-16 aware**: accepts `&str` or raw `&[u16]`, validating surrogate
//!   pairs instead of corrupting malformed input
//! - **Charset aware**: ASCII targets get numeric escapes, UTF-8 and UTF-16
//!   targets get the characters themselves
//! - **Lexical symbol classification** that matches how a reader tokenizes
//!
//! ## Quick Start
//!
//! ```rust
//! use ion_text::{print_long_string, print_string, print_symbol};
//!
//! assert_eq!(print_string("tab\there").unwrap(), "\"tab\\there\"");
//! assert_eq!(print_long_string("two\nlines").unwrap(), "'''two\nlines'''");
//! assert_eq!(print_symbol("name").unwrap(), "name");
//! assert_eq!(print_symbol("first name").unwrap(), "'first name'");
//! assert_eq!(print_symbol("null").unwrap(), "'null'");
//! ```
//!
//! ### Writing to your own output
//!
//! The `render_*` functions write into any [`TextSink`]. Absent values are
//! passed as `None`:
//!
//! ```rust
//! use ion_text::{render_json_string, render_string, FmtSink};
//!
//! let mut out = String::new();
//! let mut sink = FmtSink::unicode(&mut out);
//! render_string(&mut sink, Some("\u{e9}t\u{e9}")).unwrap();
//! render_json_string::<_, str>(&mut sink, None).unwrap();
//! assert_eq!(out, "\"\u{e9}t\u{e9}\"null");
//! ```
//!
//! ### UTF-16 input
//!
//! ```rust
//! use ion_text::{render_string, Error, FmtSink};
//!
//! let grinning: Vec<u16> = vec![0xD83D, 0xDE00];
//! let mut out = String::new();
//! render_string(&mut FmtSink::ascii(&mut out), Some(grinning.as_slice())).unwrap();
//! assert_eq!(out, "\"\\U0001f600\"");
//!
//! let broken: Vec<u16> = vec![0xD800];
//! let err = render_string(&mut FmtSink::ascii(String::new()), Some(broken.as_slice())).unwrap_err();
//! assert!(matches!(err, Error::InvalidEncoding { index: 0, .. }));
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Escape tables are immutable once built and shared freely across threads
//! - Output written before an error is not rolled back; buffer externally if
//!   you need all-or-nothing output
//!
//! ## Notation
//!
//! See the [`grammar`] module for the full list of emitted forms.

pub mod classify;
pub mod error;
pub mod escape;
pub mod grammar;
pub mod options;
pub mod scalar;
pub mod sink;
pub mod symbol;
pub mod text;
pub mod utf16;

pub use error::{Error, Result, SurrogateKind};
pub use escape::{Context, EscapeTable};
pub use options::{Charset, TextOptions};
pub use scalar::{render_chars, render_code_points, render_scalar};
pub use sink::{FmtSink, IoSink, TextSink, Utf16Sink};
pub use symbol::{is_identifier_keyword, symbol_needs_quoting, symbol_variant, SymbolVariant};
pub use text::{
    render_clob, render_json_clob, render_json_string, render_long_clob, render_long_string,
    render_quoted_symbol, render_string, render_symbol, render_symbol_with, CharSequence,
};

use std::io;

fn render_text<S: TextSink + ?Sized>(
    sink: &mut S,
    text: &str,
    context: Context,
    quote_operators: bool,
) -> Result<()> {
    match context {
        Context::ShortString => render_string(sink, Some(text)),
        Context::LongString => render_long_string(sink, Some(text)),
        Context::Symbol => render_symbol_with(sink, Some(text), quote_operators),
        Context::Clob => render_clob(sink, Some(text.as_bytes())),
        Context::Json => render_json_string(sink, Some(text)),
    }
}

fn print_ascii<F>(capacity: usize, render: F) -> Result<String>
where
    F: FnOnce(&mut FmtSink<&mut String>) -> Result<()>,
{
    let mut out = String::with_capacity(capacity);
    render(&mut FmtSink::ascii(&mut out))?;
    Ok(out)
}

/// Renders `text` as a double-quoted, ASCII-only Ion string.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_string;
///
/// assert_eq!(print_string("").unwrap(), "\"\"");
/// assert_eq!(print_string("caf\u{e9}").unwrap(), "\"caf\\xe9\"");
/// ```
///
/// # Errors
///
/// Never fails for `&str` input; the `Result` mirrors the sink-based API.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_string(text: &str) -> Result<String> {
    print_ascii(text.len() + 2, |sink| render_string(sink, Some(text)))
}

/// Renders `text` as a triple-quoted, ASCII-only Ion long string.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_long_string;
///
/// assert_eq!(print_long_string("").unwrap(), "''''''");
/// ```
///
/// # Errors
///
/// Never fails for `&str` input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_long_string(text: &str) -> Result<String> {
    print_ascii(text.len() + 6, |sink| render_long_string(sink, Some(text)))
}

/// Renders `text` as an ASCII-only JSON string.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_json_string;
///
/// assert_eq!(print_json_string("a\"b").unwrap(), "\"a\\\"b\"");
/// ```
///
/// # Errors
///
/// Never fails for `&str` input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_json_string(text: &str) -> Result<String> {
    print_ascii(text.len() + 2, |sink| render_json_string(sink, Some(text)))
}

/// Renders `text` as an ASCII-only symbol, quoted only when needed.
/// Operator symbols such as `+` are quoted.
///
/// # Errors
///
/// Returns [`Error::EmptySymbol`] when `text` is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_symbol(text: &str) -> Result<String> {
    print_ascii(text.len() + 2, |sink| render_symbol(sink, Some(text)))
}

/// Renders `text` as a single-quoted, ASCII-only symbol.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_quoted_symbol;
///
/// assert_eq!(print_quoted_symbol("abc").unwrap(), "'abc'");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptySymbol`] when `text` is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_quoted_symbol(text: &str) -> Result<String> {
    print_ascii(text.len() + 2, |sink| render_quoted_symbol(sink, Some(text)))
}

/// Renders clob bytes as a double-quoted string.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_clob;
///
/// assert_eq!(print_clob(b"hi\x00\xff").unwrap(), "\"hi\\0\\xff\"");
/// ```
///
/// # Errors
///
/// Never fails in practice; the `Result` mirrors the sink-based API.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_clob(bytes: &[u8]) -> Result<String> {
    print_ascii(bytes.len() + 2, |sink| render_clob(sink, Some(bytes)))
}

/// Renders a single code point as a double-quoted, ASCII-only Ion string.
///
/// # Examples
///
/// ```rust
/// use ion_text::print_code_point;
///
/// assert_eq!(print_code_point(0x41).unwrap(), "\"A\"");
/// assert_eq!(print_code_point(0x1F600).unwrap(), "\"\\U0001f600\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidScalar`] for surrogates and values above U+10FFFF.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_code_point(code_point: u32) -> Result<String> {
    print_ascii(12, |sink| {
        sink.append_ascii("\"")?;
        render_scalar(sink, code_point, Context::ShortString)?;
        sink.append_ascii("\"")
    })
}

/// Renders `text` for `context` with custom options.
///
/// The charset decides whether non-ASCII characters are escaped, and
/// `quote_operators` applies to the symbol context. In the clob context the
/// UTF-8 bytes of `text` are rendered.
///
/// # Examples
///
/// ```rust
/// use ion_text::{print_with_options, Context, TextOptions};
///
/// let options = TextOptions::new().with_quote_operators(false);
/// assert_eq!(print_with_options("<=", Context::Symbol, &options).unwrap(), "<=");
/// assert_eq!(print_with_options("\u{e9}", Context::Clob, &options).unwrap(), "\"\\xc3\\xa9\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptySymbol`] for an empty symbol.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn print_with_options(text: &str, context: Context, options: &TextOptions) -> Result<String> {
    let mut out = String::with_capacity(text.len() + 6);
    let mut sink = FmtSink::with_charset(&mut out, options.charset);
    render_text(&mut sink, text, context, options.quote_operators)?;
    Ok(out)
}

/// Renders `text` for `context` to a byte stream encoded with
/// `options.charset`.
///
/// # Examples
///
/// ```rust
/// use ion_text::{to_writer, Context, TextOptions};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, "caf\u{e9}", Context::Json, &TextOptions::ascii()).unwrap();
/// assert_eq!(buffer, b"\"caf\\u00e9\"");
/// ```
///
/// # Errors
///
/// Returns an error for an empty symbol or when writing to `writer` fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, text: &str, context: Context, options: &TextOptions) -> Result<()>
where
    W: io::Write,
{
    let mut sink = IoSink::new(writer, options.charset);
    render_text(&mut sink, text, context, options.quote_operators)
}
