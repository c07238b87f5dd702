//! Command-line configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{
    cases::CASE_THRESHOLD,
    config::logging::LoggingConfig,
    counts::CountMap,
    varieties::Variety,
};

pub mod logging;

/// Cookie Trails command-line configuration
#[derive(Debug, Parser)]
#[command(
    name = "cookie-trails",
    about = "Cookie cost, distribution and case calculator",
    long_about = None
)]
pub struct Config {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// YAML tables file overriding the standard prices and popularity
    #[arg(short, long, env = "COOKIE_TABLES", global = true)]
    pub tables: Option<PathBuf>,

    /// What to calculate.
    #[command(subcommand)]
    pub command: Command,
}

/// Calculations available from the command line.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Total price of a set of boxes, e.g. `cost TMint=3 Sam=2`
    Cost {
        /// Box counts as CODE=COUNT
        #[arg(required = true, value_parser = parse_box_count)]
        boxes: Vec<(Variety, u32)>,
    },

    /// Estimate boxes per variety for a total, by popularity
    Estimate {
        /// Total number of boxes
        total: u32,

        /// Fewest boxes of a variety worth a case
        #[arg(long, default_value_t = CASE_THRESHOLD)]
        threshold: u32,
    },

    /// Suggest cases to order for a set of boxes, e.g. `cases TMint=57 Sam=26`
    Cases {
        /// Box counts as CODE=COUNT
        #[arg(required = true, value_parser = parse_box_count)]
        boxes: Vec<(Variety, u32)>,

        /// Fewest boxes of a variety worth a case
        #[arg(long, default_value_t = CASE_THRESHOLD)]
        threshold: u32,
    },
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

/// Combine `CODE=COUNT` pairs into a count table. Repeated codes add up.
pub fn counts_from_pairs(pairs: &[(Variety, u32)]) -> CountMap {
    let mut counts = CountMap::default();

    for &(variety, count) in pairs {
        counts[variety] = counts[variety].saturating_add(count);
    }

    counts
}

/// Parse a `CODE=COUNT` argument, e.g. `TMint=12`.
fn parse_box_count(s: &str) -> Result<(Variety, u32), String> {
    let (code, count) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CODE=COUNT, got: {s}"))?;

    let variety = code.trim().parse::<Variety>().map_err(|err| err.to_string())?;

    let count = count
        .trim()
        .parse::<u32>()
        .map_err(|err| format!("invalid box count for {code}: {err}"))?;

    Ok((variety, count))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::logging::LogFormat;

    use super::*;

    #[test]
    fn parse_box_count_accepts_code_and_count() -> TestResult {
        assert_eq!(parse_box_count("TMint=12")?, (Variety::ThinMints, 12));
        assert_eq!(parse_box_count("D-S-D = 3")?, (Variety::DoSiDos, 3));

        Ok(())
    }

    #[test]
    fn parse_box_count_rejects_bad_input() {
        assert!(parse_box_count("TMint").is_err());
        assert!(parse_box_count("Oreo=3").is_err());
        assert!(parse_box_count("TMint=-3").is_err());
        assert!(parse_box_count("TMint=lots").is_err());
    }

    #[test]
    fn repeated_codes_add_up() {
        let counts = counts_from_pairs(&[
            (Variety::Samoas, 2),
            (Variety::ThinMints, 1),
            (Variety::Samoas, 3),
        ]);

        assert_eq!(counts[Variety::Samoas], 5);
        assert_eq!(counts[Variety::ThinMints], 1);
    }

    #[test]
    fn parses_cases_command() -> TestResult {
        let config = Config::try_parse_from([
            "cookie-trails",
            "--log-format",
            "json",
            "cases",
            "TMint=57",
            "Sam=26",
            "--threshold",
            "4",
        ])?;

        assert_eq!(config.logging.log_format, LogFormat::Json);

        match config.command {
            Command::Cases { boxes, threshold } => {
                assert_eq!(boxes, [(Variety::ThinMints, 57), (Variety::Samoas, 26)]);
                assert_eq!(threshold, 4);
            }
            other => panic!("expected cases command, got {other:?}"),
        }

        Ok(())
    }

    #[test]
    fn estimate_defaults_threshold() -> TestResult {
        let config = Config::try_parse_from(["cookie-trails", "estimate", "120"])?;

        assert!(matches!(
            config.command,
            Command::Estimate {
                total: 120,
                threshold: CASE_THRESHOLD
            }
        ));

        Ok(())
    }

    #[test]
    fn cost_requires_boxes() {
        assert!(Config::try_parse_from(["cookie-trails", "cost"]).is_err());
    }

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;

        Config::command().debug_assert();
    }
}
