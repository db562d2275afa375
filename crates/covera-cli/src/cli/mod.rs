use chrono::{DateTime, Utc};
use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `covera` binary.
#[derive(Debug, Parser)]
#[command(
    name = "covera",
    version,
    about = "Covera - AI security framework coverage knowledge base"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Evaluate freshness at this instant (RFC 3339 or YYYY-MM-DD) instead of now
    #[arg(long, global = true, value_parser = global::parse_instant)]
    pub at: Option<DateTime<Utc>>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            at: self.at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["covera", "--format", "table", "--verbose", "list"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::List));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["covera", "summary", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Summary(ref args) if args.id.is_none()));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["covera", "--format", "xml", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn status_takes_optional_id_and_instant() {
        let cli = Cli::try_parse_from([
            "covera",
            "status",
            "framework-coverage",
            "--at",
            "2025-06-20",
        ])
        .expect("cli should parse");

        let Commands::Status(args) = &cli.command else {
            panic!("expected status command");
        };
        assert_eq!(args.id.as_deref(), Some("framework-coverage"));
        assert_eq!(cli.at, Some(Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap()));
    }

    #[test]
    fn invalid_instant_is_rejected() {
        let parsed = Cli::try_parse_from(["covera", "status", "--at", "yesterday"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn validate_accepts_strict_flag() {
        let cli = Cli::try_parse_from(["covera", "validate", "--strict"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Validate(ref args) if args.strict && args.id.is_none()));
    }

    #[test]
    fn frameworks_accepts_status_filter() {
        let cli = Cli::try_parse_from(["covera", "frameworks", "--status", "no-guidance"])
            .expect("cli should parse");
        let Commands::Frameworks(args) = &cli.command else {
            panic!("expected frameworks command");
        };
        assert_eq!(args.status.as_deref(), Some("no-guidance"));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["covera", "--at", "2025-01-01", "list"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.at, cli.at);
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
