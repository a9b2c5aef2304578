use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "secret-tool",
    about = "Store and retrieve passwords in the macOS keychain.",
    version
)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Path to a config.toml overriding the default location.
    #[arg(long, global = true, env = "SECRET_TOOL_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Lookup a password.
    Lookup {
        /// Service and account.
        #[arg(value_name = "ATTRIBUTE VALUE")]
        attributes: Vec<String>,
    },

    /// Store a password (read from stdin, hidden when interactive).
    Store {
        /// Label for the keychain item.
        #[arg(long)]
        label: Option<String>,

        /// Service and account.
        #[arg(value_name = "ATTRIBUTE VALUE")]
        attributes: Vec<String>,
    },

    /// Search a password.
    Search {
        /// All.
        #[arg(long)]
        all: bool,

        /// Unlock.
        #[arg(long)]
        unlock: bool,

        /// Service and account.
        #[arg(value_name = "ATTRIBUTE VALUE")]
        attributes: Vec<String>,
    },

    /// Remove a password.
    Clear {
        /// Service and account.
        #[arg(value_name = "ATTRIBUTE VALUE")]
        attributes: Vec<String>,
    },
}
