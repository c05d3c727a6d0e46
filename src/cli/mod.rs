//! Command-line interface.

pub mod demo;
pub mod output;
pub mod shell;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::constants;
use crate::error::Result;

/// Vaultkeep - an in-memory credential vault.
#[derive(Parser)]
#[command(
    name = "vaultkeep",
    about = "An in-memory credential vault",
    version,
    after_help = "Entries live only as long as the session."
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Emit log lines as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Shell prompt
    #[arg(long, global = true, env = constants::PROMPT_ENV)]
    pub prompt: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Resolve flags and environment into runtime settings.
    pub fn config(&self) -> Config {
        Config::new(
            self.verbose,
            self.no_color,
            self.log_json,
            self.prompt.clone(),
        )
    }
}

/// Top-level commands.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Read vault commands from stdin (default)
    Shell,

    /// Walk through create/read/update/delete on a fresh vault
    Demo,
}

/// Execute a command, defaulting to the shell.
///
/// # Errors
///
/// Returns error if reading input or writing output fails.
pub fn execute(command: Option<Command>, config: &Config) -> Result<()> {
    match command.unwrap_or(Command::Shell) {
        Command::Shell => shell::execute(config),
        Command::Demo => demo::execute(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["vaultkeep"]).unwrap();

        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_global_flags() {
        let cli =
            Cli::try_parse_from(["vaultkeep", "demo", "--verbose", "--no-color", "--log-json"])
                .unwrap();

        assert_eq!(cli.command, Some(Command::Demo));
        let config = cli.config();
        assert!(config.verbose);
        assert!(!config.color);
    }

    #[test]
    fn test_cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["vaultkeep", "serve"]).is_err());
    }
}
