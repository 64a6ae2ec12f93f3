//! film-reports CLI
//!
//! Command-line interface for running reports against a film-rental database.

mod cli_types;
mod commands;
mod error;
mod output;
mod settings;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};

use cli_types::{Cli, Commands, ConfigAction};
use commands::config::{run_config_clear_db, run_config_path, run_config_set_db, run_config_show};
use commands::database::{run_init, run_seed};
use commands::list::run_reports;
use commands::report::run_report_command;

pub(crate) use error::CliError;

/// Emit an empty line through the logger so spacing follows `--quiet`.
pub(crate) fn log_blank() {
    log::info!("");
}

/// Configure env_logger from the `--quiet`/`--verbose` flags.
///
/// `RUST_LOG` still applies on top of the flag-selected level. Info lines are
/// printed bare; warnings and errors get a level prefix. `--verbose` switches
/// to the standard format with timestamps.
fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr);

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(
                buf,
                "{}: {}",
                level.as_str().to_lowercase(),
                record.args()
            ),
        });
    }

    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Init => run_init(cli.db),
        Commands::Seed { path } => run_seed(cli.db, &path),
        Commands::Reports => {
            run_reports();
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                run_config_show(cli.db);
                Ok(())
            }
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
            ConfigAction::SetDb { path } => run_config_set_db(path),
            ConfigAction::ClearDb => run_config_clear_db(),
        },
        Commands::Report(report) => run_report_command(cli.db, cli.format, report.invocation()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
