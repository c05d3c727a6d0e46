//! Test support utilities for vaultkeep integration tests.
//!
//! Provides helpers to drive the binary over stdin.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use commands::*;
