//! better-import CLI - find monorepo dependencies that have better alternatives.

use anyhow::Result;
use better_import_cli::commands::{self, CheckArgs, Outcome, QueryArgs};
use clap::Parser;
use colored::Colorize;
use miette::Diagnostic;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "better-import", version)]
#[command(about = "Find dependencies in your monorepo that have better alternatives", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose output (-v for debug logs, -vv for trace logs)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Check all packages in monorepo for replaceable dependencies
    Check(CheckArgs),

    /// Query if a specific package has better alternatives
    Query(QueryArgs),
}

/// Initialize the tracing subscriber for logging.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<Outcome> {
    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Command::Check(args) => commands::handle_check_command(args, cli.verbose > 0, &mut stdout),
        Command::Query(args) => commands::handle_query_command(args, &mut stdout),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_tracing(cli.verbose);
    tracing::debug!("better-import starting with args: {:?}", cli);

    match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            let help = err
                .downcast_ref::<better_import_deps::Error>()
                .and_then(|e| e.help().map(|help| help.to_string()));
            if let Some(help) = help {
                eprintln!("{} {}", "help:".cyan(), help);
            }
            ExitCode::FAILURE
        }
    }
}
