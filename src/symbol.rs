//! Symbol quoting decisions.
//!
//! Whether a symbol may be written bare is a purely lexical question, and it
//! must be answered exactly the way a reader tokenizes the text back:
//!
//! - **Identifiers** start with a letter, `_` or `$` and continue with those
//!   or digits: `name`, `$x`, `_tmp1`
//! - **Operators** consist only of operator characters: `+`, `<=`, `!==`
//! - Everything else is **quoted**, including the keywords `true`, `false`,
//!   `null` and `nan`, the symbol ID form `$` + digits, and any text with a
//!   non-ASCII character
//!
//! Bare operators are only legal inside s-expressions, which is why
//! [`symbol_needs_quoting`] lets the caller choose whether they need quotes.

use crate::classify::{
    is_decimal_digit, is_identifier_part, is_identifier_start, is_operator_part,
};
use crate::error::{Error, Result};
use crate::text::CharSequence;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

const KEYWORDS: [&str; 4] = ["true", "false", "null", "nan"];

/// Lexical class of a symbol's text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolVariant {
    /// Can be written bare anywhere
    Identifier,
    /// Can be written bare inside an s-expression
    Operator,
    /// Must always be quoted
    Quoted,
}

/// Whether `text` is a keyword (`true`, `false`, `null`, `nan`) or a symbol
/// ID (`$` followed by one or more digits). Such text must be quoted to be
/// read back as a symbol.
///
/// Typed nulls such as `null.int` are not matched; they are not identifiers.
///
/// # Examples
///
/// ```rust
/// use ion_text::is_identifier_keyword;
///
/// assert!(is_identifier_keyword("nan"));
/// assert!(is_identifier_keyword("$42"));
/// assert!(!is_identifier_keyword("$"));
/// assert!(!is_identifier_keyword("nulls"));
/// ```
pub fn is_identifier_keyword<T: CharSequence + ?Sized>(text: &T) -> bool {
    let mut units = text.code_units();
    if units.next() == Some(u16::from(b'$')) {
        let mut digits = 0usize;
        for unit in units {
            if !is_decimal_digit(u32::from(unit)) {
                return false;
            }
            digits += 1;
        }
        return digits > 0;
    }
    KEYWORDS
        .iter()
        .any(|keyword| text.code_units().eq(keyword.encode_utf16()))
}

#[inline]
fn is_bare_identifier_unit(unit: u16) -> bool {
    let c = u32::from(unit);
    c != u32::from(b'\'') && c != u32::from(b'"') && (32..=126).contains(&c) && is_identifier_part(c)
}

/// Classifies a symbol as an identifier, an operator, or text that always
/// needs quotes.
///
/// # Examples
///
/// ```rust
/// use ion_text::{symbol_variant, SymbolVariant};
///
/// assert_eq!(symbol_variant("foo").unwrap(), SymbolVariant::Identifier);
/// assert_eq!(symbol_variant("<=").unwrap(), SymbolVariant::Operator);
/// assert_eq!(symbol_variant("false").unwrap(), SymbolVariant::Quoted);
/// assert_eq!(symbol_variant("a b").unwrap(), SymbolVariant::Quoted);
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptySymbol`] when `text` is empty.
pub fn symbol_variant<T: CharSequence + ?Sized>(text: &T) -> Result<SymbolVariant> {
    let Some(first) = text.code_units().next() else {
        debug!("rejecting empty symbol");
        return Err(Error::EmptySymbol);
    };

    let variant = if is_identifier_keyword(text) {
        SymbolVariant::Quoted
    } else if is_identifier_start(u32::from(first)) {
        if text.code_units().all(is_bare_identifier_unit) {
            SymbolVariant::Identifier
        } else {
            SymbolVariant::Quoted
        }
    } else if is_operator_part(u32::from(first)) {
        // operator characters are all ASCII, so no escapes to look for
        if text.code_units().all(|unit| is_operator_part(u32::from(unit))) {
            SymbolVariant::Operator
        } else {
            SymbolVariant::Quoted
        }
    } else {
        // includes surrogates, which neither start identifiers nor operators
        SymbolVariant::Quoted
    };
    trace!(?variant, "classified symbol");
    Ok(variant)
}

/// Whether a symbol must be wrapped in single quotes.
///
/// With `quote_operators` set, operator symbols such as `!=` need quotes too.
///
/// # Examples
///
/// ```rust
/// use ion_text::symbol_needs_quoting;
///
/// assert!(!symbol_needs_quoting("abc", true).unwrap());
/// assert!(symbol_needs_quoting("+-", true).unwrap());
/// assert!(!symbol_needs_quoting("+-", false).unwrap());
/// assert!(symbol_needs_quoting("null", false).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`Error::EmptySymbol`] when `text` is empty.
pub fn symbol_needs_quoting<T: CharSequence + ?Sized>(text: &T, quote_operators: bool) -> Result<bool> {
    Ok(match symbol_variant(text)? {
        SymbolVariant::Identifier => false,
        SymbolVariant::Operator => quote_operators,
        SymbolVariant::Quoted => true,
    })
}
