//! CLI argument parsing using clap v4
//!
//! Defines the command-line interface for the personnel report tool.

use std::fmt;

use clap::{Parser, Subcommand, ValueEnum};

/// Builds a project registry and employee roster from a TOML file (or the
/// bundled demo roster) and prints each employee's total compensation.
#[derive(Parser, Debug)]
#[command(name = "ksd-personnel")]
#[command(author, version, about = "KSD Personnel - compensation report for KSD employees", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the compensation report for a roster
    Report {
        /// Path to configuration file
        #[arg(short, long, env = "KSD_CONFIG")]
        config: Option<String>,

        /// Roster file (defaults to the bundled demo roster)
        #[arg(short, long)]
        roster: Option<String>,

        /// Output format, overriding the configured one
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Report output format
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Parse a configured format name; config validation guarantees a known value
    pub fn from_config(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_names_tool() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("KSD Personnel - compensation report"));
    }

    #[test]
    fn test_report_defaults() {
        let cli = Cli::parse_from(["ksd-personnel", "report"]);
        match cli.command {
            Commands::Report { roster, format, .. } => {
                assert!(roster.is_none());
                assert!(format.is_none());
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_report_with_options() {
        let cli = Cli::parse_from([
            "ksd-personnel",
            "report",
            "--roster",
            "staff.toml",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Report { roster, format, .. } => {
                assert_eq!(roster, Some("staff.toml".to_string()));
                assert_eq!(format, Some(OutputFormat::Json));
            }
            _ => panic!("Expected Report command"),
        }
    }

    #[test]
    fn test_report_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["ksd-personnel", "report", "--format", "csv"]).is_err());
    }

    #[test]
    fn test_format_from_config() {
        assert_eq!(OutputFormat::from_config("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_config("text"), OutputFormat::Text);
    }

    #[test]
    fn test_verbose_flags() {
        let cli = Cli::parse_from(["ksd-personnel", "-vv", "version"]);
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_quiet_flag() {
        let cli = Cli::parse_from(["ksd-personnel", "report", "--quiet"]);
        assert!(cli.quiet);
    }

    #[test]
    fn test_config_init() {
        let cli = Cli::parse_from(["ksd-personnel", "config", "init", "--force"]);
        match cli.command {
            Commands::Config {
                subcommand: ConfigSubcommand::Init { path, force },
            } => {
                assert!(path.is_none());
                assert!(force);
            }
            _ => panic!("Expected Config Init command"),
        }
    }
}
