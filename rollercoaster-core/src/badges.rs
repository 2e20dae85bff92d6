//! Badge persistence with an in-memory mirror.
//!
//! Every badge is one storage entry under [`STORAGE_PREFIX`]. The mirror is
//! the read path for views; storage is the durability path. Mutations write
//! storage first, then swap in a fresh mapping so holders of an older
//! snapshot never observe the change.

use crate::storage::KeyValueStorage;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

/// Namespace prepended to every badge key in storage.
pub const STORAGE_PREFIX: &str = "rc-badge-";

/// Badge key to saved answer.
pub type BadgeMap = BTreeMap<String, String>;

/// Storage key for a badge, e.g. `rc-badge-quiet-victory`.
#[must_use]
pub fn storage_key(badge_key: &str) -> String {
    format!("{STORAGE_PREFIX}{badge_key}")
}

enum Backend<S> {
    Live(S),
    /// No persistent storage in this environment (native builds, SSR).
    Null,
}

fn scan_into<S: KeyValueStorage>(storage: &S, restored: &mut BadgeMap) -> Result<(), S::Error> {
    for key in storage.keys()? {
        let Some(badge_key) = key.strip_prefix(STORAGE_PREFIX) else {
            continue;
        };
        if let Some(value) = storage.get(&key)?
            && !value.is_empty()
        {
            restored.insert(badge_key.to_string(), value);
        }
    }
    Ok(())
}

pub struct BadgeStore<S> {
    backend: Backend<S>,
    badges: RefCell<Rc<BadgeMap>>,
    initialized: Cell<bool>,
}

impl<S: KeyValueStorage> BadgeStore<S> {
    /// Store backed by real persistence.
    #[must_use]
    pub fn live(storage: S) -> Self {
        Self::with_backend(Backend::Live(storage))
    }

    /// Store whose mutations are no-ops and whose reads are always empty.
    #[must_use]
    pub fn null() -> Self {
        Self::with_backend(Backend::Null)
    }

    /// Pick the live or null variant depending on whether storage exists.
    #[must_use]
    pub fn from_capability(storage: Option<S>) -> Self {
        storage.map_or_else(Self::null, Self::live)
    }

    fn with_backend(backend: Backend<S>) -> Self {
        Self {
            backend,
            badges: RefCell::new(Rc::new(BadgeMap::new())),
            initialized: Cell::new(false),
        }
    }

    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live(_))
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Populate the mirror from storage. Runs at most once per store; later
    /// calls return immediately.
    ///
    /// # Errors
    ///
    /// Returns the storage error if enumerating or reading entries fails.
    /// The store stays initialized with whatever was read before the error.
    pub fn initialize(&self) -> Result<(), S::Error> {
        if self.initialized.replace(true) {
            return Ok(());
        }
        let Backend::Live(storage) = &self.backend else {
            return Ok(());
        };

        let mut restored = BadgeMap::new();
        let result = scan_into(storage, &mut restored);

        log::debug!("restored {} saved badge(s)", restored.len());
        self.badges.replace(Rc::new(restored));
        result
    }

    fn ensure_initialized(&self) {
        if let Err(err) = self.initialize() {
            log::warn!("badge storage scan failed: {err}");
        }
    }

    /// Persist `value` under `key` and publish a new mapping containing it.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the write is rejected; the mirror is
    /// left untouched in that case.
    pub fn save(&self, key: &str, value: &str) -> Result<(), S::Error> {
        self.ensure_initialized();
        let Backend::Live(storage) = &self.backend else {
            return Ok(());
        };
        storage.set(&storage_key(key), value)?;
        self.replace_with(|map| {
            map.insert(key.to_string(), value.to_string());
        });
        Ok(())
    }

    /// Current answer for `key` from the mirror.
    #[must_use]
    pub fn load(&self, key: &str) -> Option<String> {
        self.ensure_initialized();
        self.badges.borrow().get(key).cloned()
    }

    /// Delete `key` from storage and publish a mapping without it.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the delete is rejected.
    pub fn remove(&self, key: &str) -> Result<(), S::Error> {
        self.ensure_initialized();
        let Backend::Live(storage) = &self.backend else {
            return Ok(());
        };
        storage.remove(&storage_key(key))?;
        if self.badges.borrow().contains_key(key) {
            self.replace_with(|map| {
                map.remove(key);
            });
        }
        Ok(())
    }

    /// Shared read-only snapshot of the mapping. A new `Rc` is published on
    /// every change, so `Rc::ptr_eq` tells whether anything moved.
    #[must_use]
    pub fn badges(&self) -> Rc<BadgeMap> {
        self.ensure_initialized();
        Rc::clone(&self.badges.borrow())
    }

    /// Owned copy of every known badge.
    #[must_use]
    pub fn list(&self) -> Vec<(String, String)> {
        self.badges()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn replace_with(&self, apply: impl FnOnce(&mut BadgeMap)) {
        let mut next = BadgeMap::clone(&self.badges.borrow());
        apply(&mut next);
        self.badges.replace(Rc::new(next));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn live() -> (MemoryStorage, BadgeStore<MemoryStorage>) {
        let storage = MemoryStorage::new();
        let store = BadgeStore::live(storage.clone());
        (storage, store)
    }

    #[test]
    fn save_then_load_returns_value() {
        let (storage, store) = live();
        store.save("quiet-victory", "finished the zine").unwrap();
        assert_eq!(
            store.load("quiet-victory").as_deref(),
            Some("finished the zine")
        );
        assert_eq!(
            storage.raw("rc-badge-quiet-victory").as_deref(),
            Some("finished the zine")
        );
    }

    #[test]
    fn resave_overwrites() {
        let (storage, store) = live();
        store.save("skill-builder", "knitting").unwrap();
        store.save("skill-builder", "welding").unwrap();
        assert_eq!(store.load("skill-builder").as_deref(), Some("welding"));
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn remove_clears_mirror_and_storage() {
        let (storage, store) = live();
        store.save("thread-finder", "old sketchbook").unwrap();
        store.remove("thread-finder").unwrap();
        assert_eq!(store.load("thread-finder"), None);
        assert!(storage.raw("rc-badge-thread-finder").is_none());

        // never-present key
        store.remove("knowledge-sharer").unwrap();
        assert_eq!(store.load("knowledge-sharer"), None);
    }

    #[test]
    fn save_save_remove_leaves_only_the_survivor() {
        let (_storage, store) = live();
        store
            .save("quiet-victory", "I finally organized my notes")
            .unwrap();
        store.save("thread-finder", "the archive project").unwrap();
        store.remove("quiet-victory").unwrap();

        let expected: BadgeMap = [(
            "thread-finder".to_string(),
            "the archive project".to_string(),
        )]
        .into_iter()
        .collect();
        assert_eq!(*store.badges(), expected);
    }

    #[test]
    fn mutations_publish_new_snapshots() {
        let (_storage, store) = live();
        let before = store.badges();
        store.save("quiet-victory", "a").unwrap();
        let after = store.badges();
        assert!(!Rc::ptr_eq(&before, &after));
        assert!(before.is_empty(), "old snapshot must not be mutated");
        assert_eq!(after.len(), 1);

        // removing an absent key publishes nothing new
        store.remove("missing").unwrap();
        assert!(Rc::ptr_eq(&after, &store.badges()));
    }

    #[test]
    fn initial_scan_filters_namespace_and_empty_values() {
        let storage = MemoryStorage::with_entries([
            ("rc-badge-quiet-victory", "shipped it"),
            ("rc-badge-skill-builder", ""),
            ("rc.locale", "de"),
            ("other-app-quiet-victory", "not ours"),
        ]);
        let store = BadgeStore::live(storage);
        let badges = store.badges();
        assert_eq!(badges.len(), 1);
        assert_eq!(
            badges.get("quiet-victory").map(String::as_str),
            Some("shipped it")
        );
        assert!(store.is_initialized());
    }

    #[test]
    fn initialize_runs_once() {
        let storage = MemoryStorage::with_entries([("rc-badge-quiet-victory", "first")]);
        let store = BadgeStore::live(storage.clone());
        store.initialize().unwrap();

        // entries written behind the store's back are not picked up again
        storage.set("rc-badge-thread-finder", "sneaky").unwrap();
        store.initialize().unwrap();
        assert_eq!(store.load("thread-finder"), None);
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn null_store_is_inert() {
        let store: BadgeStore<MemoryStorage> = BadgeStore::from_capability(None);
        assert!(!store.is_live());
        store.save("quiet-victory", "ignored").unwrap();
        assert_eq!(store.load("quiet-victory"), None);
        store.remove("quiet-victory").unwrap();
        assert!(store.badges().is_empty());
    }

    #[test]
    fn storage_key_uses_prefix() {
        assert_eq!(storage_key("quiet-victory"), "rc-badge-quiet-victory");
    }
}
