//! Constants used throughout vaultkeep.
//!
//! Centralizes validation limits and driver settings.

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 5;

/// Column width of the account name in an entry's display line.
pub const ACCOUNT_COLUMN_WIDTH: usize = 20;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "VAULTKEEP_LOG";

/// Environment variable overriding the shell prompt.
pub const PROMPT_ENV: &str = "VAULTKEEP_PROMPT";

/// Shell prompt used when none is configured.
pub const DEFAULT_PROMPT: &str = "vault> ";
