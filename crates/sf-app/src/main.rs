use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use sf_core::{GLYPHS, SEGMENT_BITS};

pub mod cli;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging (stderr, stdout reste réservé à la table)
    env_logger::Builder::new()
        .filter_level(cli.level_filter())
        .init();

    // 3. Générer la table
    let stdout = std::io::stdout();
    run(&mut stdout.lock(), SEGMENT_BITS, GLYPHS)
}

/// Validate the tables and write the generated listing to `out`.
fn run<W: Write>(
    out: &mut W,
    segment_bits: &[(char, u8)],
    glyphs: &[(char, &str)],
) -> Result<()> {
    log::debug!(
        "Génération : {} segments, {} glyphes",
        segment_bits.len(),
        glyphs.len()
    );
    sf_core::write_table(out, segment_bits, glyphs)
        .context("Impossible de générer la table 7 segments")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_succeed() {
        let mut out = Vec::new();
        run(&mut out, SEGMENT_BITS, GLYPHS).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), GLYPHS.len());
        assert!(text.starts_with("{ ' ', 0x00 },\n{ '-', 0x40 },\n"));
        assert!(text.ends_with("{ 'Z', 0x5b },\n"));
    }

    #[test]
    fn unknown_segment_is_fatal_and_silent() {
        let mut out = Vec::new();
        let glyphs = [('0', "abcdef"), ('8', "abcdefgh")];
        let err = run(&mut out, SEGMENT_BITS, &glyphs).unwrap_err();
        assert!(out.is_empty());
        let chain = format!("{err:#}");
        assert!(chain.contains("'h'"), "{chain}");
        assert!(chain.contains("'8'"), "{chain}");
    }

    #[test]
    fn output_failure_is_fatal() {
        struct Full;
        impl Write for Full {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(std::io::ErrorKind::WriteZero))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        assert!(run(&mut Full, SEGMENT_BITS, GLYPHS).is_err());
    }
}
