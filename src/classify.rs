//! Lexical character classes of the Ion text grammar.
//!
//! The identifier and operator classes are ASCII-anchored: they are looked up
//! in 256-entry tables and every value above 0xFF is outside them. Surrogate
//! code units therefore never start or continue an identifier or operator.

const fn identifier_flags(include_digits: bool) -> [bool; 256] {
    let mut flags = [false; 256];
    let mut c = 0;
    while c < 256 {
        let b = c as u8;
        flags[c] = b.is_ascii_alphabetic()
            || b == b'_'
            || b == b'$'
            || (include_digits && b.is_ascii_digit());
        c += 1;
    }
    flags
}

const fn operator_flags() -> [bool; 256] {
    let mut flags = [false; 256];
    let mut i = 0;
    while i < OPERATOR_CHARS.len() {
        flags[OPERATOR_CHARS[i] as usize] = true;
        i += 1;
    }
    flags
}

/// Characters that may appear in a bare operator symbol such as `<=` or `!`.
pub const OPERATOR_CHARS: [u8; 19] = [
    b'<', b'>', b'=', b'+', b'-', b'*', b'&', b'^', b'%', b'~', b'/', b'?', b'.', b';', b'!', b'|',
    b'@', b'`', b'#',
];

static IDENTIFIER_START_FLAGS: [bool; 256] = identifier_flags(false);
static IDENTIFIER_PART_FLAGS: [bool; 256] = identifier_flags(true);
static OPERATOR_FLAGS: [bool; 256] = operator_flags();

#[inline]
fn in_table(table: &[bool; 256], codepoint: u32) -> bool {
    usize::try_from(codepoint)
        .ok()
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(false)
}

/// Letters, `_` and `$`.
///
/// # Examples
///
/// ```rust
/// use ion_text::classify::is_identifier_start;
///
/// assert!(is_identifier_start(u32::from('$')));
/// assert!(!is_identifier_start(u32::from('7')));
/// assert!(!is_identifier_start(0x0141));
/// ```
#[inline]
#[must_use]
pub fn is_identifier_start(codepoint: u32) -> bool {
    in_table(&IDENTIFIER_START_FLAGS, codepoint)
}

/// Identifier start characters plus decimal digits.
#[inline]
#[must_use]
pub fn is_identifier_part(codepoint: u32) -> bool {
    in_table(&IDENTIFIER_PART_FLAGS, codepoint)
}

#[inline]
#[must_use]
pub fn is_operator_part(codepoint: u32) -> bool {
    in_table(&OPERATOR_FLAGS, codepoint)
}

/// Space, tab, newline and carriage return; the same set JSON allows.
#[must_use]
pub fn is_whitespace(codepoint: u32) -> bool {
    matches!(codepoint, 0x20 | 0x09 | 0x0A | 0x0D)
}

/// Whether `codepoint` may legally follow a numeric literal. `None` stands
/// for the end of input.
///
/// `/` is not a stop on its own: it only ends a number when it opens a
/// comment (`//` or `/*`), which needs one character of lookahead the caller
/// has to perform.
///
/// # Examples
///
/// ```rust
/// use ion_text::classify::is_numeric_stop;
///
/// assert!(is_numeric_stop(None));
/// assert!(is_numeric_stop(Some(u32::from(']'))));
/// assert!(!is_numeric_stop(Some(u32::from('/'))));
/// ```
#[must_use]
pub fn is_numeric_stop(codepoint: Option<u32>) -> bool {
    let Some(c) = codepoint else {
        return true;
    };
    is_whitespace(c)
        || matches!(
            char::from_u32(c),
            Some('{' | '}' | '[' | ']' | '(' | ')' | ',' | '"' | '\'')
        )
}

#[inline]
#[must_use]
pub fn is_decimal_digit(codepoint: u32) -> bool {
    (u32::from('0')..=u32::from('9')).contains(&codepoint)
}

/// Radix-aware digit test for radix 8, 10 and 16. Any other radix has no
/// digits.
///
/// # Examples
///
/// ```rust
/// use ion_text::classify::is_digit;
///
/// assert!(is_digit(u32::from('7'), 8));
/// assert!(!is_digit(u32::from('8'), 8));
/// assert!(is_digit(u32::from('F'), 16));
/// assert!(!is_digit(u32::from('a'), 10));
/// ```
#[must_use]
pub fn is_digit(codepoint: u32, radix: u32) -> bool {
    let Some(c) = char::from_u32(codepoint) else {
        return false;
    };
    match c {
        '0'..='7' => matches!(radix, 8 | 10 | 16),
        '8' | '9' => matches!(radix, 10 | 16),
        'a'..='f' | 'A'..='F' => radix == 16,
        _ => false,
    }
}
