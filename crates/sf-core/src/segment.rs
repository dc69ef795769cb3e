//! Segments d'un afficheur 7 segments.
//!
//! ```text
//!  --a--
//! |     |
//! f     b
//! |     |
//!  --g--
//! |     |
//! e     c
//! |     |
//!  --d--
//! ```
//!
//! Bit 7 (0x80) is reserved for the decimal point and never assigned here.

use crate::error::TableError;

/// Reserved decimal-point bit.
pub const RESERVED_BIT: u8 = 0x80;

/// Segment identifier → bit mask.
pub const SEGMENT_BITS: &[(char, u8)] = &[
    ('a', 0x01),
    ('b', 0x02),
    ('c', 0x04),
    ('d', 0x08),
    ('e', 0x10),
    ('f', 0x20),
    ('g', 0x40),
];

/// Read-only view over a segment → bit table.
///
/// # Example
/// ```
/// use sf_core::segment::{SegmentMap, SEGMENT_BITS};
/// let map = SegmentMap::new(SEGMENT_BITS);
/// assert_eq!(map.bit('g'), Some(0x40));
/// assert_eq!(map.bit('h'), None);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SegmentMap<'a> {
    entries: &'a [(char, u8)],
}

impl<'a> SegmentMap<'a> {
    /// Wrap a static segment table.
    #[must_use]
    pub const fn new(entries: &'a [(char, u8)]) -> Self {
        Self { entries }
    }

    /// Bit assigned to `segment`, if the segment exists.
    #[must_use]
    pub fn bit(&self, segment: char) -> Option<u8> {
        self.entries
            .iter()
            .find(|&&(id, _)| id == segment)
            .map(|&(_, bit)| bit)
    }

    /// Combine the bits of every segment lit by `glyph`.
    ///
    /// Bits are OR-ed, so a segment listed twice counts once. An empty
    /// segment list yields 0.
    ///
    /// # Errors
    /// Returns [`TableError::UnknownSegment`] on the first segment missing
    /// from the map.
    ///
    /// # Example
    /// ```
    /// use sf_core::segment::{SegmentMap, SEGMENT_BITS};
    /// let map = SegmentMap::new(SEGMENT_BITS);
    /// assert_eq!(map.mask_for('7', "abc").unwrap(), 0x07);
    /// assert_eq!(map.mask_for(' ', "").unwrap(), 0x00);
    /// ```
    pub fn mask_for(&self, glyph: char, segments: &str) -> Result<u8, TableError> {
        segments.chars().try_fold(0u8, |mask, segment| {
            self.bit(segment)
                .map(|bit| mask | bit)
                .ok_or(TableError::UnknownSegment { glyph, segment })
        })
    }

    /// Check that every bit is a single, unreserved bit used by one segment only.
    ///
    /// # Errors
    /// Returns [`TableError::InvalidSegmentBit`] for the first offending entry.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut seen = 0u8;
        for &(segment, bit) in self.entries {
            if !bit.is_power_of_two() || bit & RESERVED_BIT != 0 || seen & bit != 0 {
                return Err(TableError::InvalidSegmentBit { segment, bit });
            }
            seen |= bit;
        }
        log::debug!("{} segments validés (masque 0x{seen:02x})", self.entries.len());
        Ok(())
    }
}
