use clap::Parser;

/// segfont — générateur de table 7 segments pour firmware.
///
/// Writes `{ 'X', 0xHH },` lines to stdout, ready to paste inside a C array.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Niveau de log : error, warn, info, debug, trace. Logs go to stderr.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Parsed log level, `Warn` if the value is not recognised.
    #[must_use]
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["segfont"]).unwrap();
        assert_eq!(cli.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn log_level_override() {
        let cli = Cli::try_parse_from(["segfont", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn bogus_log_level_falls_back() {
        let cli = Cli::try_parse_from(["segfont", "--log-level", "bavard"]).unwrap();
        assert_eq!(cli.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["segfont", "font.txt"]).is_err());
    }
}
