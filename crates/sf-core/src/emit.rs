//! Génération de la table C `{ 'X', 0xHH },`.

use std::fmt::Write as _;
use std::io::Write;

use crate::error::TableError;
use crate::glyph::GlyphTable;
use crate::segment::SegmentMap;

/// Uppercased display form of a table key.
///
/// Falls back to the key itself when uppercasing would expand into more
/// than one character (`ß` → `SS`), since a C char literal holds one.
///
/// # Example
/// ```
/// use sf_core::emit::display_char;
/// assert_eq!(display_char('b'), 'B');
/// assert_eq!(display_char('-'), '-');
/// assert_eq!(display_char('ß'), 'ß');
/// ```
#[must_use]
pub fn display_char(key: char) -> char {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => key,
    }
}

/// One table line, without the trailing newline.
///
/// Quote and backslash get C escapes so the literal stays well-formed.
///
/// # Example
/// ```
/// use sf_core::emit::format_entry;
/// assert_eq!(format_entry('c', 5), "{ 'C', 0x05 },");
/// assert_eq!(format_entry('\'', 0), "{ '\\'', 0x00 },");
/// ```
#[must_use]
pub fn format_entry(key: char, mask: u8) -> String {
    let shown = display_char(key);
    let mut line = String::with_capacity(16);
    line.push_str("{ '");
    if matches!(shown, '\'' | '\\') {
        line.push('\\');
    }
    line.push(shown);
    // Écriture dans une String : ne peut pas échouer.
    let _ = write!(line, "', 0x{mask:02x} }},");
    line
}

/// Validated, sorted `(display char, mask)` pairs.
///
/// This is the emitted table as data, in output order.
///
/// # Errors
/// Any [`TableError`] raised by table validation.
pub fn compile(
    segment_bits: &[(char, u8)],
    glyphs: &[(char, &str)],
) -> Result<Vec<(char, u8)>, TableError> {
    let segments = SegmentMap::new(segment_bits);
    let table = GlyphTable::new(glyphs);
    segments.validate()?;
    table.validate(&segments)?;

    table
        .sorted()
        .into_iter()
        .map(|(key, segs)| Ok((display_char(key), segments.mask_for(key, segs)?)))
        .collect()
}

/// Build the complete table text, one newline-terminated line per glyph.
///
/// # Errors
/// [`TableError::UnknownSegment`] if a glyph references a missing segment,
/// or the other validation errors of [`compile`]. Nothing is produced on
/// failure.
///
/// # Example
/// ```
/// use sf_core::emit::emit_table;
/// let text = emit_table(&[('a', 1), ('b', 2)], &[('b', "ab"), (' ', "")]).unwrap();
/// assert_eq!(text, "{ ' ', 0x00 },\n{ 'B', 0x03 },\n");
/// ```
pub fn emit_table(
    segment_bits: &[(char, u8)],
    glyphs: &[(char, &str)],
) -> Result<String, TableError> {
    let segments = SegmentMap::new(segment_bits);
    let table = GlyphTable::new(glyphs);
    segments.validate()?;
    table.validate(&segments)?;

    let mut out = String::with_capacity(table.len() * 16);
    for (key, segs) in table.sorted() {
        let mask = segments.mask_for(key, segs)?;
        log::trace!("'{key}' ← \"{segs}\" = 0x{mask:02x}");
        out.push_str(&format_entry(key, mask));
        out.push('\n');
    }
    Ok(out)
}

/// Emit the table into `writer` and flush it.
///
/// The text is fully generated before the first byte is written.
///
/// # Errors
/// Validation errors from [`emit_table`], or [`TableError::Io`] if the
/// writer fails.
pub fn write_table<W: Write>(
    writer: &mut W,
    segment_bits: &[(char, u8)],
    glyphs: &[(char, &str)],
) -> Result<(), TableError> {
    let text = emit_table(segment_bits, glyphs)?;
    writer.write_all(text.as_bytes())?;
    writer.flush()?;
    log::info!("{} glyphes écrits", glyphs.len());
    Ok(())
}

/// First-match linear search by display character, as firmware reads the table.
///
/// Unknown characters map to `0x00` (blank digit). When two keys share a
/// display character (`C` and `c`), the first in sorted order wins, i.e.
/// the uppercase-keyed glyph.
///
/// # Example
/// ```
/// use sf_core::emit::{compile, lookup};
/// use sf_core::{GLYPHS, SEGMENT_BITS};
/// let table = compile(SEGMENT_BITS, GLYPHS).unwrap();
/// assert_eq!(lookup(&table, '8'), 0x7f);
/// assert_eq!(lookup(&table, '?'), 0x00);
/// ```
#[must_use]
pub fn lookup(table: &[(char, u8)], ch: char) -> u8 {
    table
        .iter()
        .find(|&&(c, _)| c == ch)
        .map_or(0, |&(_, mask)| mask)
}
