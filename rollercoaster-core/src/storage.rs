//! String-keyed persistence abstraction.
//!
//! The browser's `localStorage` is the production backend; it lives in the
//! web crate. [`MemoryStorage`] stands in for it natively and in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::rc::Rc;

/// Trait for the flat string key-value store that backs persisted badges.
/// Platform-specific implementations should provide this.
pub trait KeyValueStorage {
    type Error: std::error::Error + 'static;

    /// Every key currently present, in backend order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be enumerated.
    fn keys(&self) -> Result<Vec<String>, Self::Error>;

    /// Read a single entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a single entry, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write (e.g. quota).
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a single entry. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), Self::Error>;
}

/// In-memory storage. Clones share the same entries, so a clone handed to a
/// second store behaves like the same browser profile after a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with raw entries (keys are stored verbatim).
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            entries: Rc::new(RefCell::new(map)),
        }
    }

    /// Raw view of a stored entry, bypassing any namespacing.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    type Error = Infallible;

    fn keys(&self) -> Result<Vec<String>, Self::Error> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Self::Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
