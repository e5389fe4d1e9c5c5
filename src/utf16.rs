//! UTF-16 surrogate helpers.

use crate::error::{Error, Result, SurrogateKind};

pub const HIGH_SURROGATE_START: u16 = 0xD800;
pub const LOW_SURROGATE_START: u16 = 0xDC00;
pub const SURROGATE_END: u16 = 0xDFFF;

#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_START && unit < LOW_SURROGATE_START
}

#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_START && unit <= SURROGATE_END
}

#[inline]
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= SURROGATE_END
}

/// Combines a validated surrogate pair into a scalar value >= 0x10000.
///
/// # Examples
///
/// ```rust
/// use ion_text::utf16::combine_surrogates;
///
/// assert_eq!(combine_surrogates(0xD83D, 0xDE00), 0x1F600);
/// ```
#[inline]
#[must_use]
pub const fn combine_surrogates(lead: u16, trail: u16) -> u32 {
    0x10000 + (((lead - HIGH_SURROGATE_START) as u32) << 10) + (trail - LOW_SURROGATE_START) as u32
}

/// Splits a scalar value >= 0x10000 into its surrogate pair.
#[inline]
#[must_use]
pub const fn split_surrogates(scalar: u32) -> (u16, u16) {
    let offset = scalar - 0x10000;
    (
        HIGH_SURROGATE_START + (offset >> 10) as u16,
        LOW_SURROGATE_START + (offset & 0x3FF) as u16,
    )
}

/// Decodes UTF-16 code units into scalar values, rejecting unmatched
/// surrogates with the index of the offending unit.
pub(crate) struct Scalars<'a> {
    units: &'a [u16],
    pos: usize,
}

impl<'a> Scalars<'a> {
    pub(crate) fn new(units: &'a [u16]) -> Self {
        Scalars { units, pos: 0 }
    }
}

impl Iterator for Scalars<'_> {
    type Item = Result<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.pos;
        let unit = *self.units.get(index)?;
        self.pos += 1;
        if is_high_surrogate(unit) {
            return Some(match self.units.get(self.pos) {
                Some(&trail) if is_low_surrogate(trail) => {
                    self.pos += 1;
                    Ok(combine_surrogates(unit, trail))
                }
                _ => Err(Error::unmatched_surrogate(SurrogateKind::High, unit, index)),
            });
        }
        if is_low_surrogate(unit) {
            return Some(Err(Error::unmatched_surrogate(
                SurrogateKind::Low,
                unit,
                index,
            )));
        }
        Some(Ok(u32::from(unit)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_matches_std() {
        for c in ['\u{10000}', '\u{1F600}', '\u{10FFFF}'] {
            let mut buf = [0u16; 2];
            c.encode_utf16(&mut buf);
            assert_eq!(split_surrogates(u32::from(c)), (buf[0], buf[1]));
            assert_eq!(combine_surrogates(buf[0], buf[1]), u32::from(c));
        }
    }

    #[test]
    fn test_scalars_decodes_pairs() {
        let units = [0x61, 0xD83D, 0xDE00, 0x62];
        let scalars: Vec<u32> = Scalars::new(&units).map(|r| r.unwrap()).collect();
        assert_eq!(scalars, vec![0x61, 0x1F600, 0x62]);
    }

    #[test]
    fn test_scalars_rejects_lone_surrogates() {
        let err = Scalars::new(&[0x61, 0xD800]).nth(1).unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding { kind: SurrogateKind::High, unit: 0xD800, index: 1 }
        ));

        let err = Scalars::new(&[0xDC00]).next().unwrap().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidEncoding { kind: SurrogateKind::Low, unit: 0xDC00, index: 0 }
        ));
    }
}
