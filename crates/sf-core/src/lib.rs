/// Seven-segment font tables and the C table emitter for segfont.
///
/// Holds the static segment/glyph tables, their validation, and the
/// generation of `{ 'X', 0xHH },` lines.

pub mod emit;
pub mod error;
pub mod glyph;
pub mod segment;

pub use emit::{compile, emit_table, write_table};
pub use error::TableError;
pub use glyph::{GLYPHS, GlyphTable};
pub use segment::{SEGMENT_BITS, SegmentMap};
