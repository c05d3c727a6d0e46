//! Vaultkeep - an in-memory credential vault.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*};

use vaultkeep::cli::output;
use vaultkeep::cli::{execute, Cli};
use vaultkeep::core::config::LogFormat;

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    if !config.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    // Logs go to stderr so shell output on stdout stays clean
    let json = config.log_format == LogFormat::Json;
    let ansi = config.color && std::io::stderr().is_terminal();

    tracing_subscriber::registry()
        .with(config.log_filter())
        .with(json.then(|| fmt::layer().json().with_writer(std::io::stderr)))
        .with((!json).then(|| {
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(ansi)
                .with_writer(std::io::stderr)
        }))
        .init();

    if let Err(e) = execute(cli.command, &config) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
