mod backend;
mod cli;
mod commands;
mod config;
mod error;
mod prompt;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use backend::security::SecurityCli;
use backend::FindOptions;
use cli::{Cli, Command};
use error::SecretToolError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Argument errors take precedence over a broken config file.
    commands::credential_from(attributes(&cli.command))?;

    let cfg = config::load(cli.config.as_deref()).context("Failed to load config")?;
    let backend = SecurityCli::from_config(&cfg);

    match cli.command {
        Command::Lookup { attributes } => {
            commands::lookup::run(&backend, &attributes, &mut io::stdout().lock())?
        }
        Command::Store { label, attributes } => commands::store::run(
            &backend,
            &attributes,
            label.as_deref(),
            prompt::read_password,
        )?,
        Command::Search {
            all,
            unlock,
            attributes,
        } => commands::search::run(
            &backend,
            &attributes,
            FindOptions { all, unlock },
            &mut io::stdout().lock(),
        )?,
        Command::Clear { attributes } => commands::clear::run(&backend, &attributes)?,
    }

    Ok(())
}

fn attributes(command: &Command) -> &[String] {
    match command {
        Command::Lookup { attributes }
        | Command::Store { attributes, .. }
        | Command::Search { attributes, .. }
        | Command::Clear { attributes } => attributes,
    }
}

/// Exit code for a failed run: the `security` status when there is one, else 1.
fn exit_code(err: &anyhow::Error) -> u8 {
    let code = err
        .downcast_ref::<SecretToolError>()
        .map_or(1, SecretToolError::exit_code);
    u8::try_from(code).unwrap_or(1)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -d.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    tracing::debug!(?level, "logging initialized");
}
