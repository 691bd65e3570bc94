// SPDX-License-Identifier: MPL-2.0
//! Bookmark persistence port.
//!
//! The session controller never touches storage directly; the application
//! shell owns a [`BookmarkStore`] implementation and flushes through it on
//! every store mutation. Tests substitute the in-memory fake below.
//!
//! # Design Notes
//!
//! - Records are keyed by the *title* string, which the catalog guarantees
//!   to be stable for a given piece of content.
//! - Failures are soft: loads degrade to an empty list and saves report a
//!   warning key. Persistence problems never take the session down.

use crate::player::Bookmark;

/// Port for per-title bookmark persistence.
pub trait BookmarkStore {
    /// Loads the bookmark list for a title.
    ///
    /// Returns the entries plus an optional warning key when stored data
    /// was missing-corrupt (the list is empty in that case, never an
    /// error).
    fn load(&self, title: &str) -> (Vec<Bookmark>, Option<String>);

    /// Persists the full bookmark list for a title.
    ///
    /// Returns a warning key when the write failed.
    fn save(&mut self, title: &str, bookmarks: &[Bookmark]) -> Option<String>;
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct InMemoryBookmarkStore {
    records: std::collections::HashMap<String, Vec<Bookmark>>,
}

impl InMemoryBookmarkStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookmarkStore for InMemoryBookmarkStore {
    fn load(&self, title: &str) -> (Vec<Bookmark>, Option<String>) {
        (self.records.get(title).cloned().unwrap_or_default(), None)
    }

    fn save(&mut self, title: &str, bookmarks: &[Bookmark]) -> Option<String> {
        self.records.insert(title.to_string(), bookmarks.to_vec());
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Object safety keeps `Box<dyn BookmarkStore>` usable in the shell
    fn _assert_object_safe(_: &dyn BookmarkStore) {}

    #[test]
    fn load_unknown_title_is_empty() {
        let store = InMemoryBookmarkStore::new();
        let (entries, warning) = store.load("nothing here");
        assert!(entries.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn save_then_load_round_trips_per_title() {
        let mut store = InMemoryBookmarkStore::new();
        let bookmarks = vec![Bookmark::new(12.0, "scene".to_string(), None)];

        assert!(store.save("Movie A", &bookmarks).is_none());

        let (loaded, _) = store.load("Movie A");
        assert_eq!(loaded, bookmarks);

        // A different title starts empty
        let (other, _) = store.load("Movie B");
        assert!(other.is_empty());
    }

    #[test]
    fn save_replaces_the_whole_record() {
        let mut store = InMemoryBookmarkStore::new();
        store.save(
            "Movie A",
            &[
                Bookmark::new(1.0, "one".to_string(), None),
                Bookmark::new(2.0, "two".to_string(), None),
            ],
        );
        store.save("Movie A", &[Bookmark::new(3.0, "three".to_string(), None)]);

        let (loaded, _) = store.load("Movie A");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "three");
    }
}
