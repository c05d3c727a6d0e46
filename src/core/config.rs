//! Runtime configuration for the vaultkeep binary.
//!
//! Resolves command-line flags and environment variables into the settings
//! the driver and logging setup need. Nothing is read from or written to disk.

use tracing_subscriber::EnvFilter;

use crate::core::constants;

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Resolved driver settings
#[derive(Debug, Clone)]
pub struct Config {
    /// Debug logging for this crate when no filter is set in the environment
    pub verbose: bool,
    /// Styled terminal output and ANSI log lines
    pub color: bool,
    pub log_format: LogFormat,
    /// Shell prompt, printed only for interactive input
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            color: true,
            log_format: LogFormat::Text,
            prompt: constants::DEFAULT_PROMPT.to_string(),
        }
    }
}

impl Config {
    /// Build settings from parsed flags.
    ///
    /// Color is disabled by `--no-color` or a `NO_COLOR` variable in the
    /// environment.
    pub fn new(verbose: bool, no_color: bool, log_json: bool, prompt: Option<String>) -> Self {
        let color = !no_color && std::env::var_os("NO_COLOR").is_none();

        Self {
            verbose,
            color,
            log_format: if log_json {
                LogFormat::Json
            } else {
                LogFormat::Text
            },
            prompt: prompt.unwrap_or_else(|| constants::DEFAULT_PROMPT.to_string()),
        }
    }

    /// Log filter: `VAULTKEEP_LOG` when set and valid, otherwise a default
    /// driven by `verbose`.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(constants::LOG_ENV)
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }

    fn default_directive(&self) -> &'static str {
        if self.verbose {
            "vaultkeep=debug"
        } else {
            "vaultkeep=warn"
        }
    }
}
