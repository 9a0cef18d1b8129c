//! Command-line surface.
//!
//! Flags override config-file values, which override built-in defaults.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;

use crate::config::ScannerConfig;
use crate::report::OutputFormat;

const ABOUT: &str = "\
Prints the cost and in-the-money boundaries of buying both a call and a put
on a stock, together with the maximum loss, which drops below the premium
when the call/put strikes overlap.

Open the options page of a stock on Yahoo Finance and pass its URL with
-U/--url, along with the current stock price via -P/--price. Without them the
scanner uses the January 2022 UBER chain priced as of 2019-12-07.

Optional constraints on total cost, floor and ceiling filter the results.";

/// A limit that may be unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(pub Option<Decimal>);

fn parse_decimal(s: &str) -> Result<Decimal, String> {
    Decimal::from_str(s.trim()).map_err(|e| format!("'{s}' is not a number: {e}"))
}

fn is_pos_inf(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "inf" | "+inf" | "infinity" | "+infinity")
}

fn is_neg_inf(s: &str) -> bool {
    matches!(s.trim().to_ascii_lowercase().as_str(), "-inf" | "-infinity")
}

/// Parse an upper limit; `inf` means unbounded.
pub fn parse_upper_limit(s: &str) -> Result<Limit, String> {
    if is_pos_inf(s) {
        return Ok(Limit(None));
    }
    if is_neg_inf(s) {
        return Err("an upper limit of -inf can never be met".to_string());
    }
    parse_decimal(s).map(|d| Limit(Some(d)))
}

/// Parse a lower limit; `-inf` means unbounded.
pub fn parse_lower_limit(s: &str) -> Result<Limit, String> {
    if is_neg_inf(s) {
        return Ok(Limit(None));
    }
    if is_pos_inf(s) {
        return Err("a lower limit of +inf can never be met".to_string());
    }
    parse_decimal(s).map(|d| Limit(Some(d)))
}

/// Straddle/strangle spread scanner.
#[derive(Parser, Debug)]
#[command(
    name = "spread-scanner",
    version,
    about = "Call/put pair cost and break-even scanner",
    long_about = ABOUT
)]
pub struct Args {
    /// Maximum cost
    #[arg(short = 'C', long, value_parser = parse_upper_limit, allow_hyphen_values = true)]
    pub cost: Option<Limit>,

    /// Maximum price at which your call will cover costs
    #[arg(short = 'T', long = "ceil", value_parser = parse_upper_limit, allow_hyphen_values = true)]
    pub ceil: Option<Limit>,

    /// Minimum price at which your put will cover costs
    #[arg(short = 'F', long, value_parser = parse_lower_limit, allow_hyphen_values = true)]
    pub floor: Option<Limit>,

    /// Current price of the ticker
    #[arg(short = 'P', long, value_parser = parse_decimal)]
    pub price: Option<Decimal>,

    /// Option chain page URL, e.g. https://finance.yahoo.com/quote/UBER/options?date=1642723200
    #[arg(short = 'U', long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read a saved option chain page instead of fetching one
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Config file (defaults to ./spread-scanner.yaml when present)
    #[arg(long)]
    pub config: Option<String>,
}

impl Args {
    /// Apply flag overrides onto the loaded configuration.
    pub fn apply(&self, config: &mut ScannerConfig) {
        if let Some(Limit(v)) = self.cost {
            config.constraints.max_cost = v;
        }
        if let Some(Limit(v)) = self.ceil {
            config.constraints.ceiling = v;
        }
        if let Some(Limit(v)) = self.floor {
            config.constraints.floor = v;
        }
        if let Some(price) = self.price {
            config.constraints.current_price = price;
        }
        if let Some(url) = &self.url {
            config.source.url.clone_from(url);
            config.source.file = None;
        }
        if let Some(file) = &self.file {
            config.source.file = Some(file.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use test_case::test_case;

    use super::*;
    use crate::domain::{Constraints, ConstraintsError};

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("spread-scanner").chain(args.iter().copied())).unwrap()
    }

    #[test_case("inf", None ; "inf")]
    #[test_case("+Infinity", None ; "infinity")]
    #[test_case("4.5", Some(dec!(4.5)) ; "number")]
    fn upper_limits(text: &str, expected: Option<Decimal>) {
        assert_eq!(parse_upper_limit(text), Ok(Limit(expected)));
    }

    #[test]
    fn nonsensical_infinities_are_rejected() {
        assert!(parse_upper_limit("-inf").is_err());
        assert!(parse_lower_limit("inf").is_err());
        assert!(parse_upper_limit("cheap").is_err());
    }

    #[test]
    fn defaults_leave_config_untouched() {
        let args = parse(&[]);
        let mut config = ScannerConfig::default();
        args.apply(&mut config);
        let constraints = config.constraints.to_constraints().unwrap();

        assert_eq!(constraints, Constraints::unbounded(dec!(27.86)));
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn short_flags_override_config() {
        let args = parse(&[
            "-C",
            "5",
            "-T",
            "40",
            "-F",
            "-inf",
            "-P",
            "30.5",
            "-U",
            "https://example.com/x",
        ]);
        let mut config = ScannerConfig::default();
        config.constraints.floor = Some(dec!(10));
        config.source.file = Some(PathBuf::from("saved.html"));

        args.apply(&mut config);
        let constraints = config.constraints.to_constraints().unwrap();
        assert_eq!(constraints.max_cost(), Some(dec!(5)));
        assert_eq!(constraints.ceiling(), Some(dec!(40)));
        assert_eq!(constraints.floor(), None);
        assert_eq!(constraints.current_price(), dec!(30.5));
        assert_eq!(config.source.url, "https://example.com/x");
        assert!(config.source.file.is_none());
    }

    #[test]
    fn negative_floor_value_parses() {
        let args = parse(&["--floor", "-5"]);
        assert_eq!(args.floor, Some(Limit(Some(dec!(-5)))));
    }

    #[test]
    fn url_and_file_conflict() {
        let result =
            Args::try_parse_from(["spread-scanner", "--url", "https://a", "--file", "b.html"]);
        assert!(result.is_err());
    }

    #[test]
    fn inverted_flag_bounds_are_a_constraints_error() {
        let args = parse(&["--floor", "40", "--ceil", "30"]);
        let mut config = ScannerConfig::default();
        args.apply(&mut config);

        let err = config.constraints.to_constraints().unwrap_err();
        assert!(matches!(err, ConstraintsError::InvertedBounds { .. }));
    }

    #[test]
    fn json_format() {
        assert_eq!(parse(&["--format", "json"]).format, OutputFormat::Json);
    }
}
