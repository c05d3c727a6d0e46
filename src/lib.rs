//! Vaultkeep - an in-memory credential vault.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line driver
//! │   ├── shell         # Line-oriented vault shell over stdin
//! │   ├── demo          # Scripted walkthrough
//! │   └── output        # Terminal output helpers
//! └── core/             # Library components
//!     ├── config        # Runtime settings
//!     ├── constants     # Validation limits, env var names
//!     ├── domain/       # Entry type
//!     ├── validation    # Account name and password rules
//!     └── vault         # Entry store with CRUD operations
//! ```
//!
//! Entries are validated on construction and mutation; the vault reports
//! rejected operations as `false` and logs the reason.
//!
//! ```
//! use vaultkeep::Vault;
//!
//! let mut vault = Vault::new();
//! assert!(vault.create_entry("alice", "secret1"));
//! assert!(!vault.create_entry("bob", "1234"));
//! assert_eq!(vault.read_entry("alice").unwrap().password(), "secret1");
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::domain::Entry;
pub use crate::core::vault::Vault;
pub use crate::error::{Error, Result, ValidationError};
