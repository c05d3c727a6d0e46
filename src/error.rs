use thiserror::Error;

use crate::core::constants::MIN_PASSWORD_LEN;

/// Rejected entry field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Account name cannot be empty")]
    InvalidAccountName,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    InvalidPassword,
}

/// Shell input that could not be turned into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {input}")]
    Unknown {
        input: String,
        suggestion: Option<String>,
    },

    #[error("unexpected argument for {command}: {arg}")]
    UnexpectedArgument { command: String, arg: String },

    #[error("unterminated quote in: {0}")]
    UnterminatedQuote(String),
}

/// Driver error. Vault operations never produce one.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
