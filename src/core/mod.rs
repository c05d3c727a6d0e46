//! Core library components.
//!
//! Entry validation and the in-memory vault, plus the settings used by the
//! binary.

pub mod config;
pub mod constants;
pub mod domain;
pub mod types;
pub mod validation;
pub mod vault;
