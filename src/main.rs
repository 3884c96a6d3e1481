//! KSD Personnel - compensation report CLI
//!
//! Loads configuration, builds the project registry and roster, and prints
//! the compensation report.

use std::path::Path;

use clap::Parser;
use tracing::{debug, info};

use ksd_personnel::cli::{Cli, Commands, ConfigSubcommand, OutputFormat};
use ksd_personnel::config::{self, AppConfig, LoggingSettings};
use ksd_personnel::error::Result;
use ksd_personnel::logging;
use ksd_personnel::personnel::{CompensationReport, ProjectRegistry};
use ksd_personnel::roster::Roster;
use ksd_personnel::version;

fn main() {
    // Parse CLI arguments first (before logging, so we know verbosity)
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        debug!(error = %e.format_for_log(), "Command failed");
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            version::print_version();
            Ok(())
        }
        Commands::Config { subcommand } => {
            let _log_guards = logging::init_logging(&LoggingSettings::default(), cli.verbose, cli.quiet)?;
            handle_config_command(subcommand)
        }
        Commands::Report {
            config: config_path,
            roster,
            format,
        } => {
            let app_config = AppConfig::load(config_path.as_deref())?;

            // The guards must be kept alive until the report is written
            let _log_guards = logging::init_logging(&app_config.logging, cli.verbose, cli.quiet)?;

            let build = version::build_info();
            debug!(version = %build.full_version(), "Starting KSD Personnel");

            let roster_path = roster
                .map(|p| config::expand_path(&p))
                .or_else(|| app_config.report.roster.clone());
            let format =
                format.unwrap_or_else(|| OutputFormat::from_config(&app_config.report.format));

            run_report(roster_path.as_deref(), format)
        }
    }
}

/// Build the roster and print its compensation report to stdout
fn run_report(roster_path: Option<&str>, format: OutputFormat) -> Result<()> {
    let roster = match roster_path {
        Some(path) => {
            info!(path = %path, "Loading roster");
            Roster::from_path(Path::new(path))?
        }
        None => {
            info!("No roster configured, using the bundled demo roster");
            Roster::demo()?
        }
    };

    let mut registry = ProjectRegistry::new();
    let employees = roster.build(&mut registry)?;
    let report = CompensationReport::build(&employees, &registry);

    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Json => println!("{}", report.render_json()?),
    }

    debug!(
        employees = report.lines.len(),
        format = %format,
        "Report written"
    );
    Ok(())
}

fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = AppConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let created = config::init_config(path.as_deref(), force)?;
            println!("Configuration written to {}", created.display());
        }
        ConfigSubcommand::Validate { config } => {
            AppConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
