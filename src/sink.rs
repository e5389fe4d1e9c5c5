//! Output targets for rendered text.
//!
//! The encoders only ever talk to a [`TextSink`]: a capability set of three
//! append operations plus the `escape_unicode` flag fixed when the sink was
//! built. Adapters are provided for the common output media:
//!
//! - [`FmtSink`]: any [`std::fmt::Write`], such as `String`
//! - [`IoSink`]: any [`std::io::Write`] byte stream with a fixed [`Charset`]
//! - [`Utf16Sink`]: an in-memory buffer of UTF-16 code units
//!
//! A sink is borrowed for a single render call. Sharing one sink across
//! concurrent render calls interleaves their output.
//!
//! ## Examples
//!
//! ```rust
//! use ion_text::{render_string, FmtSink};
//!
//! let mut out = String::new();
//! render_string(&mut FmtSink::ascii(&mut out), Some("na\u{ef}ve")).unwrap();
//! assert_eq!(out, "\"na\\xefve\"");
//! ```

use crate::error::{Error, Result};
use crate::options::Charset;
use crate::utf16::{combine_surrogates, split_surrogates};
use std::{fmt, io};

/// Capability interface implemented by every output target.
pub trait TextSink {
    /// `true` when the target can only hold ASCII, so every character above
    /// 0x7E is written as a numeric escape.
    fn escape_unicode(&self) -> bool;

    /// Appends text already known to need no escaping. Callers only pass
    /// ASCII here.
    fn append_ascii(&mut self, text: &str) -> Result<()>;

    /// Appends a character verbatim.
    fn append_char(&mut self, ch: char) -> Result<()>;

    /// Appends a validated surrogate pair verbatim.
    ///
    /// The default combines the pair and forwards to [`TextSink::append_char`].
    fn append_surrogate_pair(&mut self, lead: u16, trail: u16) -> Result<()> {
        let scalar = combine_surrogates(lead, trail);
        let ch = char::from_u32(scalar).ok_or(Error::invalid_scalar(scalar))?;
        self.append_char(ch)
    }
}

impl<S: TextSink + ?Sized> TextSink for &mut S {
    fn escape_unicode(&self) -> bool {
        (**self).escape_unicode()
    }

    fn append_ascii(&mut self, text: &str) -> Result<()> {
        (**self).append_ascii(text)
    }

    fn append_char(&mut self, ch: char) -> Result<()> {
        (**self).append_char(ch)
    }

    fn append_surrogate_pair(&mut self, lead: u16, trail: u16) -> Result<()> {
        (**self).append_surrogate_pair(lead, trail)
    }
}

/// Adapter over a [`fmt::Write`] target.
#[derive(Debug)]
pub struct FmtSink<W> {
    out: W,
    escape_unicode: bool,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Escapes everything outside printable ASCII.
    pub fn ascii(out: W) -> Self {
        FmtSink {
            out,
            escape_unicode: true,
        }
    }

    /// Writes non-ASCII characters through unchanged.
    pub fn unicode(out: W) -> Self {
        FmtSink {
            out,
            escape_unicode: false,
        }
    }

    pub fn with_charset(out: W, charset: Charset) -> Self {
        FmtSink {
            out,
            escape_unicode: charset.escape_unicode(),
        }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: fmt::Write> TextSink for FmtSink<W> {
    fn escape_unicode(&self) -> bool {
        self.escape_unicode
    }

    fn append_ascii(&mut self, text: &str) -> Result<()> {
        self.out.write_str(text)?;
        Ok(())
    }

    fn append_char(&mut self, ch: char) -> Result<()> {
        self.out.write_char(ch)?;
        Ok(())
    }
}

/// Adapter over a byte stream that encodes text with a fixed [`Charset`].
///
/// UTF-16 output is big-endian without a byte order mark.
///
/// # Examples
///
/// ```rust
/// use ion_text::{render_symbol, Charset, IoSink};
///
/// let mut sink = IoSink::new(Vec::new(), Charset::Utf8);
/// render_symbol(&mut sink, Some("\u{e9}t\u{e9}")).unwrap();
/// assert_eq!(sink.into_inner(), "'\u{e9}t\u{e9}'".as_bytes());
/// ```
#[derive(Debug)]
pub struct IoSink<W> {
    out: W,
    charset: Charset,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(out: W, charset: Charset) -> Self {
        IoSink { out, charset }
    }

    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_utf16_units(&mut self, units: &[u16]) -> Result<()> {
        for unit in units {
            self.out.write_all(&unit.to_be_bytes())?;
        }
        Ok(())
    }
}

impl<W: io::Write> TextSink for IoSink<W> {
    fn escape_unicode(&self) -> bool {
        self.charset.escape_unicode()
    }

    fn append_ascii(&mut self, text: &str) -> Result<()> {
        match self.charset {
            Charset::Ascii | Charset::Utf8 => self.out.write_all(text.as_bytes())?,
            Charset::Utf16 => {
                for b in text.bytes() {
                    self.out.write_all(&[0, b])?;
                }
            }
        }
        Ok(())
    }

    fn append_char(&mut self, ch: char) -> Result<()> {
        match self.charset {
            Charset::Ascii if !ch.is_ascii() => {
                return Err(Error::custom(format!(
                    "U+{:04X} cannot be encoded in {}",
                    u32::from(ch),
                    self.charset.as_str()
                )));
            }
            Charset::Ascii | Charset::Utf8 => {
                let mut buf = [0u8; 4];
                self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            }
            Charset::Utf16 => {
                let mut buf = [0u16; 2];
                let units = ch.encode_utf16(&mut buf);
                self.write_utf16_units(units)?;
            }
        }
        Ok(())
    }

    fn append_surrogate_pair(&mut self, lead: u16, trail: u16) -> Result<()> {
        if self.charset == Charset::Utf16 {
            return self.write_utf16_units(&[lead, trail]);
        }
        let scalar = combine_surrogates(lead, trail);
        let ch = char::from_u32(scalar).ok_or(Error::invalid_scalar(scalar))?;
        self.append_char(ch)
    }
}

/// Collects rendered text as UTF-16 code units.
///
/// # Examples
///
/// ```rust
/// use ion_text::{render_string, Utf16Sink};
///
/// let text: Vec<u16> = "\u{1F600}".encode_utf16().collect();
/// let mut sink = Utf16Sink::new();
/// render_string(&mut sink, Some(text.as_slice())).unwrap();
/// assert_eq!(sink.as_units(), &[0x22, 0xD83D, 0xDE00, 0x22]);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Utf16Sink {
    units: Vec<u16>,
    escape_unicode: bool,
}

impl Utf16Sink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer that still escapes everything outside printable ASCII.
    pub fn ascii() -> Self {
        Utf16Sink {
            units: Vec::new(),
            escape_unicode: true,
        }
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn into_units(self) -> Vec<u16> {
        self.units
    }

    /// Decodes the collected units. Sinks filled by the encoders always hold
    /// well-formed UTF-16.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }
}

impl TextSink for Utf16Sink {
    fn escape_unicode(&self) -> bool {
        self.escape_unicode
    }

    fn append_ascii(&mut self, text: &str) -> Result<()> {
        self.units.extend(text.bytes().map(u16::from));
        Ok(())
    }

    fn append_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0u16; 2];
        self.units.extend_from_slice(ch.encode_utf16(&mut buf));
        Ok(())
    }

    fn append_surrogate_pair(&mut self, lead: u16, trail: u16) -> Result<()> {
        self.units.extend_from_slice(&[lead, trail]);
        Ok(())
    }
}

/// Writes `scalar` (>= 0x10000) through `sink` as its surrogate pair.
pub(crate) fn append_supplementary<S: TextSink + ?Sized>(sink: &mut S, scalar: u32) -> Result<()> {
    let (lead, trail) = split_surrogates(scalar);
    sink.append_surrogate_pair(lead, trail)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingWriter;

    impl fmt::Write for FailingWriter {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_fmt_sink_propagates_failure() {
        let mut sink = FmtSink::ascii(FailingWriter);
        let err = sink.append_ascii("abc").unwrap_err();
        assert!(matches!(err, Error::Fmt(_)));
    }

    #[test]
    fn test_io_sink_utf16_encoding() {
        let mut sink = IoSink::new(Vec::new(), Charset::Utf16);
        sink.append_ascii("a").unwrap();
        sink.append_char('\u{e9}').unwrap();
        sink.append_surrogate_pair(0xD83D, 0xDE00).unwrap();
        assert_eq!(
            sink.into_inner(),
            vec![0x00, 0x61, 0x00, 0xE9, 0xD8, 0x3D, 0xDE, 0x00]
        );
    }

    #[test]
    fn test_io_sink_ascii_rejects_wide_chars() {
        let mut sink = IoSink::new(Vec::new(), Charset::Ascii);
        assert!(sink.escape_unicode());
        assert!(sink.append_char('\u{e9}').is_err());
    }

    #[test]
    fn test_default_surrogate_pair_combines() {
        let mut out = String::new();
        FmtSink::unicode(&mut out)
            .append_surrogate_pair(0xD83D, 0xDE00)
            .unwrap();
        assert_eq!(out, "\u{1F600}");
    }
}
