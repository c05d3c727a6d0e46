//! Scripted walkthrough of the vault operations.
//!
//! Runs create/read/update/delete against a fresh vault and prints what each
//! step returned, including the rejected inputs.

use tracing::info;

use crate::cli::output;
use crate::core::vault::Vault;
use crate::error::Result;

/// Run the walkthrough.
pub fn execute() -> Result<()> {
    info!("running demo");
    let mut vault = Vault::new();

    output::header("Round trip");
    output::rule();
    output::kv("create alice", vault.create_entry("alice", "secret1"));
    print_entry(&vault, "alice");
    output::kv("update alice", vault.update_entry("alice", "newpass2"));
    print_entry(&vault, "alice");
    output::kv("delete alice", vault.delete_entry("alice"));
    print_entry(&vault, "alice");
    output::kv("size", vault.len());

    println!();
    output::header("Rejected input");
    output::rule();
    output::kv("create bob (4-char password)", vault.create_entry("bob", "1234"));
    output::kv("contains bob", vault.contains_account("bob"));
    output::kv("create blank name", vault.create_entry("   ", "validpass"));
    output::kv("create carol", vault.create_entry("carol", "hunter22"));
    output::kv("create carol again", vault.create_entry("carol", "other-pass"));
    print_entry(&vault, "carol");
    output::kv("update carol (short)", vault.update_entry("carol", "abc"));
    print_entry(&vault, "carol");

    println!();
    vault.clear();
    output::kv("after clear, empty", vault.is_empty());

    Ok(())
}

fn print_entry(vault: &Vault, account: &str) {
    match vault.read_entry(account) {
        Some(entry) => println!("  {}", entry),
        None => output::dimmed(&format!("  {} not found", account)),
    }
}
