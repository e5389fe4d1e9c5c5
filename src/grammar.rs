//! Ion Text Notation
//!
//! This module documents the lexical forms this library emits.
//!
//! # Overview
//!
//! Ion text is a superset of JSON. Text values come in three shapes and
//! binary-safe character data (clobs) in two; JSON output is supported for
//! consumers that only read JSON.
//!
//! | Form | Delimiters | Absent value |
//! |------|------------|--------------|
//! | String | `"..."` | `null.string` |
//! | Long string | `'''...'''` | `null.string` |
//! | Symbol | bare, or `'...'` | `null.symbol` |
//! | Clob body | `"..."` or `'''...'''` | `null.clob` |
//! | JSON string | `"..."` | `null` |
//!
//! # Escapes
//!
//! ```text
//! \0  - NUL                    (JSON: \u0000)
//! \a  - bell                   (JSON: \u0007)
//! \b  - backspace
//! \t  - tab
//! \n  - newline                (literal inside long strings)
//! \v  - vertical tab           (JSON: \u000b)
//! \f  - form feed
//! \r  - carriage return
//! \\  - backslash
//! \"  - double quote           (strings, clobs, JSON)
//! \'  - single quote           (symbols, long strings)
//! \xHH        - 0x01-0x1F, 0x7F-0xFF   (JSON: \u00HH)
//! \uHHHH      - 0x100-0xFFFF
//! \UHHHHHHHH  - 0x10000-0x10FFFF       (JSON: \uHHHH\uHHHH surrogate pair)
//! ```
//!
//! Hex digits are lowercase and zero-padded to their full width.
//!
//! Characters from 0x80 up are only escaped for ASCII-only targets; UTF-8
//! and UTF-16 targets receive them unchanged. DEL (0x7F) and every control
//! character are escaped for all targets. Clob bytes from 0x7F up are always
//! escaped, because a clob holds bytes, not characters.
//!
//! # Symbols
//!
//! A symbol is written without quotes when it is an **identifier**:
//!
//! ```text
//! name   _tmp   $ref   camelCase2
//! ```
//!
//! - Starts with `a-z`, `A-Z`, `_` or `$`
//! - Continues with those characters or `0-9`
//! - Is not a keyword: `true`, `false`, `null`, `nan`
//! - Is not a symbol ID: `$` followed only by digits, such as `$10`
//!
//! Inside s-expressions a symbol may also be written bare when it is an
//! **operator**, built only from these characters:
//!
//! ```text
//! < > = + - * & ^ % ~ / ? . ; ! | @ ` #
//! ```
//!
//! Everything else is quoted: `'hello world'`, `'true'`, `'$10'`, `'caf\xe9'`.
//!
//! # Lexical classes
//!
//! | Class | Members |
//! |-------|---------|
//! | Whitespace | space, tab, `\n`, `\r` |
//! | Numeric stop | end of input, `{ } [ ] ( ) , " '`, whitespace |
//!
//! A `/` after a number starts a comment only when followed by `/` or `*`;
//! deciding that is left to the reader, which can look ahead.
//!
//! # UTF-16 input
//!
//! Text supplied as UTF-16 code units must be well formed. A high surrogate
//! must be followed by a low surrogate; anything else aborts the render with
//! [`crate::Error::InvalidEncoding`] naming the unit and its index.
