//! Durable client-side key/value storage
//!
//! Plays the part browser local storage plays for the web client: a flat map
//! of string keys to string values that outlives the process.

mod file;
mod memory;

pub use file::{write_atomic, FileStorage};
pub use memory::MemoryStorage;

use crate::error::Result;

/// String key/value storage.
///
/// Multi-key writes and removals are all-or-nothing from the point of view of
/// any other reader in the same process.
pub trait Storage: Send + Sync {
    /// Read a single key
    fn get(&self, key: &str) -> Option<String>;

    /// Write every entry in one step
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()>;

    /// Remove every key in one step; missing keys are ignored
    fn remove_many(&self, keys: &[&str]) -> Result<()>;

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.remove_many(&[key])
    }
}
