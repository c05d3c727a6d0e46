//! The primary interface for vaultkeep operations.
//!
//! `Vault` owns every entry and exposes the CRUD surface. Field validation
//! lives in [`Entry`]; the vault turns rejected input into `false` and a
//! `warn!` diagnostic instead of returning errors.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::core::domain::Entry;
use crate::core::types::{AccountName, Entries};

/// In-memory store of entries keyed by account name.
///
/// Every key equals the account name of the entry stored under it.
#[derive(Debug, Default)]
pub struct Vault {
    entries: BTreeMap<AccountName, Entry>,
}

impl Vault {
    /// Create an empty vault.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry.
    ///
    /// # Returns
    ///
    /// `true` if the entry was inserted. `false` if the account already
    /// exists or the entry failed validation; the vault is unchanged in
    /// both cases.
    pub fn create_entry(&mut self, account_name: &str, password: &str) -> bool {
        if self.entries.contains_key(account_name) {
            debug!(account = account_name, "account already exists");
            return false;
        }

        match Entry::new(account_name, password) {
            Ok(entry) => {
                self.entries.insert(account_name.to_string(), entry);
                debug!(account = account_name, "entry created");
                true
            }
            Err(e) => {
                warn!(account = account_name, "error creating entry: {}", e);
                false
            }
        }
    }

    /// Look up an entry by account name.
    pub fn read_entry(&self, account_name: &str) -> Option<&Entry> {
        self.entries.get(account_name)
    }

    /// Copy of all entries.
    ///
    /// Changes to the returned map are not reflected in the vault.
    pub fn read_all_entries(&self) -> Entries {
        self.entries.clone()
    }

    /// Change the password of an existing entry.
    ///
    /// # Returns
    ///
    /// `false` if the account does not exist or the new password is
    /// rejected, leaving the old password in place.
    pub fn update_entry(&mut self, account_name: &str, new_password: &str) -> bool {
        let Some(entry) = self.entries.get_mut(account_name) else {
            debug!(account = account_name, "update of unknown account");
            return false;
        };

        match entry.set_password(new_password) {
            Ok(()) => {
                debug!(account = account_name, "password updated");
                true
            }
            Err(e) => {
                warn!(account = account_name, "error updating password: {}", e);
                false
            }
        }
    }

    /// Remove an entry. Returns `true` if one was removed.
    pub fn delete_entry(&mut self, account_name: &str) -> bool {
        let removed = self.entries.remove(account_name).is_some();
        debug!(account = account_name, removed, "delete entry");
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_account(&self, account_name: &str) -> bool {
        self.entries.contains_key(account_name)
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        debug!(count = self.entries.len(), "clearing vault");
        self.entries.clear();
    }
}
