use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::render::{JsonStyle, OutputFormat, OutputOptions};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Format of the diagnostic log written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Show today's entry from a training plan spreadsheet
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Output format
    #[clap(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write JSON in the legacy layout (no escaping, header-position commas)
    #[clap(long)]
    pub legacy_json: bool,

    /// Print debugging messages to stderr
    #[clap(short = 'd', long)]
    pub debug: bool,

    /// Format of the messages written to stderr
    #[clap(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Read the plan from a JSON value-range file instead of the Sheets API
    #[clap(long, value_name = "PATH")]
    pub grid_file: Option<PathBuf>,

    /// Look up this date instead of today (format: YYYY-MM-DD or YYYYMMDD)
    #[clap(long)]
    pub date: Option<String>,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        CliArgs::parse_from(std::env::args())
    }

    /// Get the date if specified, parsing it into a NaiveDate
    pub fn parse_date(&self) -> Option<Result<NaiveDate, chrono::ParseError>> {
        self.date.as_ref().map(|date_str| {
            NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
                .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
        })
    }

    /// Rendering settings selected by the flags
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.format,
            json_style: if self.legacy_json {
                JsonStyle::Legacy
            } else {
                JsonStyle::Strict
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn args_with_date(date: Option<&str>) -> CliArgs {
        CliArgs {
            format: OutputFormat::Text,
            legacy_json: false,
            debug: false,
            log_format: LogFormat::Text,
            grid_file: None,
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn test_default_args() {
        let args = CliArgs::parse_from(vec!["runplan"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert!(!args.legacy_json);
        assert!(!args.debug);
        assert_eq!(args.log_format, LogFormat::Text);
        assert!(args.grid_file.is_none());
        assert!(args.date.is_none());
        assert_eq!(args.output_options(), OutputOptions::default());
    }

    #[test]
    fn test_format_option() {
        let args = CliArgs::parse_from(vec!["runplan", "--format", "json"]);
        assert_eq!(args.format, OutputFormat::Json);

        // Test short form
        let args = CliArgs::parse_from(vec!["runplan", "-f", "summary"]);
        assert_eq!(args.format, OutputFormat::Summary);

        assert!(CliArgs::try_parse_from(vec!["runplan", "--format", "xml"]).is_err());
    }

    #[test]
    fn test_legacy_json_flag() {
        let args = CliArgs::parse_from(vec!["runplan", "--format", "json", "--legacy-json"]);
        let options = args.output_options();
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(options.json_style, JsonStyle::Legacy);
    }

    #[test]
    fn test_debug_and_log_format() {
        let args = CliArgs::parse_from(vec!["runplan", "--debug", "--log-format", "json"]);
        assert!(args.debug);
        assert_eq!(args.log_format, LogFormat::Json);

        // Test short form
        let args = CliArgs::parse_from(vec!["runplan", "-d"]);
        assert!(args.debug);
    }

    #[test]
    fn test_grid_file_option() {
        let args = CliArgs::parse_from(vec!["runplan", "--grid-file", "/tmp/plan.json"]);
        assert_eq!(args.grid_file, Some(PathBuf::from("/tmp/plan.json")));
    }

    #[test]
    fn test_parse_date() {
        let parsed_date = args_with_date(Some("2023-01-15"))
            .parse_date()
            .unwrap()
            .unwrap();
        assert_eq!(parsed_date.year(), 2023);
        assert_eq!(parsed_date.month(), 1);
        assert_eq!(parsed_date.day(), 15);

        let parsed_date = args_with_date(Some("20230115"))
            .parse_date()
            .unwrap()
            .unwrap();
        assert_eq!(parsed_date, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());

        assert!(args_with_date(None).parse_date().is_none());
        assert!(args_with_date(Some("01/15")).parse_date().unwrap().is_err());
    }
}
