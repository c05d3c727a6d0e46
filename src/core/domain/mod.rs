//! Domain types.

mod entry;

pub use entry::Entry;
