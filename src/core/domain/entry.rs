//! Entry type.
//!
//! A single account/password pair that is valid for its whole lifetime.

use std::hash::{Hash, Hasher};

use zeroize::Zeroizing;

use crate::core::constants::ACCOUNT_COLUMN_WIDTH;
use crate::core::validation::{validate_account_name, validate_password};
use crate::error::ValidationError;

/// A validated account/password pair.
///
/// Identity is the account name alone: two entries with the same name are
/// equal and hash the same regardless of their passwords.
#[derive(Clone)]
pub struct Entry {
    account_name: String,
    password: Zeroizing<String>,
}

impl Entry {
    /// Create an entry, validating the account name then the password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if either field is rejected.
    pub fn new(
        account_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let account_name = account_name.into();
        let password = Zeroizing::new(password.into());

        validate_account_name(&account_name)?;
        validate_password(&password)?;

        Ok(Self {
            account_name,
            password,
        })
    }

    /// Account name, exactly as it was entered
    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    /// Plaintext password
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Replace the account name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAccountName` and keeps the current
    /// name if `name` is blank.
    pub fn set_account_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_account_name(&name)?;
        self.account_name = name;
        Ok(())
    }

    /// Replace the password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPassword` and keeps the current
    /// password if `password` is too short.
    pub fn set_password(&mut self, password: impl Into<String>) -> Result<(), ValidationError> {
        let password = Zeroizing::new(password.into());
        validate_password(&password)?;
        self.password = password;
        Ok(())
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.account_name == other.account_name
    }
}

impl Eq for Entry {}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.account_name.hash(state);
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Account: {:<width$} | Password: {}",
            self.account_name,
            self.password.as_str(),
            width = ACCOUNT_COLUMN_WIDTH
        )
    }
}

impl std::fmt::Debug for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entry")
            .field("account_name", &self.account_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(entry: &Entry) -> u64 {
        let mut hasher = DefaultHasher::new();
        entry.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_entry_new() {
        let entry = Entry::new("alice", "secret1").unwrap();

        assert_eq!(entry.account_name(), "alice");
        assert_eq!(entry.password(), "secret1");
    }

    #[test]
    fn test_entry_keeps_untrimmed_name() {
        let entry = Entry::new("  alice ", "secret1").unwrap();
        assert_eq!(entry.account_name(), "  alice ");
    }

    #[test]
    fn test_entry_new_rejects_invalid_fields() {
        assert_eq!(
            Entry::new("   ", "validpass").unwrap_err(),
            ValidationError::InvalidAccountName
        );
        assert_eq!(
            Entry::new("bob", "1234").unwrap_err(),
            ValidationError::InvalidPassword
        );
        // Name is checked first
        assert_eq!(
            Entry::new("", "").unwrap_err(),
            ValidationError::InvalidAccountName
        );
    }

    #[test]
    fn test_set_password_rejection_keeps_old_value() {
        let mut entry = Entry::new("alice", "secret1").unwrap();

        assert!(entry.set_password("abc").is_err());
        assert_eq!(entry.password(), "secret1");

        entry.set_password("newpass2").unwrap();
        assert_eq!(entry.password(), "newpass2");
    }

    #[test]
    fn test_set_account_name_rejection_keeps_old_value() {
        let mut entry = Entry::new("alice", "secret1").unwrap();

        assert!(entry.set_account_name(" ").is_err());
        assert_eq!(entry.account_name(), "alice");

        entry.set_account_name("carol").unwrap();
        assert_eq!(entry.account_name(), "carol");
    }

    #[test]
    fn test_reapplying_accepted_values_succeeds() {
        let mut entry = Entry::new("alice", "secret1").unwrap();

        entry.set_account_name("alice").unwrap();
        entry.set_password("secret1").unwrap();
        assert!(Entry::new(entry.account_name(), entry.password()).is_ok());
    }

    #[test]
    fn test_equality_ignores_password() {
        let a = Entry::new("alice", "secret1").unwrap();
        let b = Entry::new("alice", "different").unwrap();
        let c = Entry::new("Alice", "secret1").unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new("alice", "secret1").unwrap();
        let expected = format!("Account: alice{} | Password: secret1", " ".repeat(15));

        assert_eq!(entry.to_string(), expected);
    }

    #[test]
    fn test_entry_display_long_name_not_truncated() {
        let name = "a-very-long-account-name-indeed";
        let entry = Entry::new(name, "secret1").unwrap();

        assert_eq!(
            entry.to_string(),
            format!("Account: {} | Password: secret1", name)
        );
    }

    #[test]
    fn test_entry_display_pads_by_chars() {
        let entry = Entry::new("😀", "secret1").unwrap();
        let expected = format!("Account: 😀{} | Password: secret1", " ".repeat(19));

        assert_eq!(entry.to_string(), expected);
    }

    #[test]
    fn test_entry_debug_redacts_password() {
        let entry = Entry::new("alice", "secret1").unwrap();
        let debug = format!("{:?}", entry);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("secret1"));
    }
}
