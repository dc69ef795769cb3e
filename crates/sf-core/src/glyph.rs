use crate::error::TableError;
use crate::segment::SegmentMap;

/// Segments allumés pour chaque caractère affichable.
///
/// Keys are case-sensitive: `C` and `c` are different shapes. Authoring
/// order carries no meaning, output is always sorted by key.
pub const GLYPHS: &[(char, &str)] = &[
    ('0', "abcdef"),
    ('1', "bc"),
    ('2', "abedg"),
    ('3', "abcdg"),
    ('4', "bcfg"),
    ('5', "acdfg"),
    ('6', "acdefg"),
    ('7', "abc"),
    ('8', "abcdefg"),
    ('9', "abcdfg"),
    ('A', "abcefg"),
    ('b', "cdefg"),
    ('C', "adef"),
    ('c', "deg"),
    ('d', "bcdeg"),
    ('E', "adefg"),
    ('F', "aefg"),
    ('G', "acdef"),
    ('h', "cefg"),
    ('i', "c"),
    ('j', "c"),
    ('K', "bcefg"),
    ('L', "def"),
    ('M', "abcef"),
    ('n', "ceg"),
    ('o', "cdeg"),
    ('P', "abefg"),
    ('q', "cdeg"),
    ('r', "eg"),
    ('S', "acdfg"),
    ('t', "defg"),
    ('u', "cde"),
    ('v', "cde"),
    ('W', "bcdef"),
    ('X', "bcefg"),
    ('y', "bcdfg"),
    ('z', "abedg"),
    ('-', "g"),
    (' ', ""),
];

/// Read-only view over a character → segments table.
///
/// # Example
/// ```
/// use sf_core::glyph::{GlyphTable, GLYPHS};
/// let table = GlyphTable::new(GLYPHS);
/// let sorted = table.sorted();
/// assert_eq!(sorted.first().map(|g| g.0), Some(' '));
/// assert_eq!(sorted.last().map(|g| g.0), Some('z'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GlyphTable<'a> {
    entries: &'a [(char, &'a str)],
}

impl<'a> GlyphTable<'a> {
    /// Wrap a static glyph table.
    #[must_use]
    pub const fn new(entries: &'a [(char, &'a str)]) -> Self {
        Self { entries }
    }

    /// Number of glyphs.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the table has no glyph at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Segments for `key`, if present.
    #[must_use]
    pub fn segments(&self, key: char) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|&&(k, _)| k == key)
            .map(|&(_, segs)| segs)
    }

    /// Entries in ascending code-point order of their key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, &'a str)> {
        let mut sorted = self.entries.to_vec();
        sorted.sort_unstable_by_key(|&(key, _)| key);
        sorted
    }

    /// Check key uniqueness and that every referenced segment exists.
    ///
    /// Runs before anything is written, so a broken table never produces
    /// a partial listing.
    ///
    /// # Errors
    /// [`TableError::DuplicateGlyph`] or [`TableError::UnknownSegment`].
    pub fn validate(&self, segments: &SegmentMap<'_>) -> Result<(), TableError> {
        let sorted = self.sorted();
        if let Some(pair) = sorted.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(TableError::DuplicateGlyph { glyph: pair[0].0 });
        }
        for &(key, segs) in &sorted {
            segments.mask_for(key, segs)?;
        }
        log::debug!("{} glyphes validés", sorted.len());
        Ok(())
    }
}
