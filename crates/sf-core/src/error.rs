use thiserror::Error;

/// Errors raised while validating or emitting a glyph table.
///
/// Every variant except `Io` points at a defect in the static tables
/// themselves; none of them is recoverable at runtime.
#[derive(Error, Debug)]
pub enum TableError {
    /// A glyph references a segment absent from the segment map.
    #[error("Segment inconnu '{segment}' dans le glyphe '{glyph}'")]
    UnknownSegment {
        /// Table key of the offending glyph.
        glyph: char,
        /// Segment identifier that failed the lookup.
        segment: char,
    },

    /// The same character key appears twice in the glyph table.
    #[error("Glyphe dupliqué : '{glyph}'")]
    DuplicateGlyph {
        /// The repeated key.
        glyph: char,
    },

    /// A segment bit is zero, not a single bit, reserved, or shared.
    #[error("Bit de segment invalide pour '{segment}' : 0x{bit:02x}")]
    InvalidSegmentBit {
        /// Segment identifier.
        segment: char,
        /// The rejected mask value.
        bit: u8,
    },

    /// The output stream refused the generated text.
    #[error("Erreur d'écriture : {0}")]
    Io(#[from] std::io::Error),
}
