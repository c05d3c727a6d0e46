//! Type aliases for domain concepts.

use std::collections::BTreeMap;

use crate::core::domain::Entry;

/// An account name, as entered (untrimmed).
pub type AccountName = String;

/// Snapshot of a vault's contents, keyed by account name.
pub type Entries = BTreeMap<AccountName, Entry>;
