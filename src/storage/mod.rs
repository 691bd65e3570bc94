// SPDX-License-Identifier: MPL-2.0
//! File-backed bookmark storage using CBOR records.
//!
//! One record per title, stored under the app data directory as
//! `bookmarks/<blake3(title)>.cbor`. CBOR keeps the records compact and
//! clearly separated from the user-editable TOML preferences; hashing the
//! title yields a deterministic, filesystem-safe key for arbitrary
//! catalog titles.
//!
//! There is no schema versioning: unparseable content is treated as
//! absence (empty list plus a warning key for a notification), never as a
//! session-fatal error.

use crate::app::paths;
use crate::application::port::BookmarkStore;
use crate::player::Bookmark;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// Subdirectory of the app data directory holding bookmark records.
const BOOKMARKS_DIR: &str = "bookmarks";

/// Bookmark store writing one CBOR file per title.
#[derive(Debug, Clone, Default)]
pub struct FileBookmarkStore {
    /// Optional base directory override (for tests). `None` resolves the
    /// app data directory at call time.
    base_dir: Option<PathBuf>,
}

impl FileBookmarkStore {
    /// Creates a store rooted at the default app data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store rooted at an explicit directory.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }

    /// Returns the record path for a title, if a data directory exists.
    fn record_path(&self, title: &str) -> Option<PathBuf> {
        let digest = blake3::hash(title.as_bytes()).to_hex();
        paths::get_app_data_dir_with_override(self.base_dir.clone()).map(|mut path| {
            path.push(BOOKMARKS_DIR);
            path.push(format!("{digest}.cbor"));
            path
        })
    }
}

impl BookmarkStore for FileBookmarkStore {
    fn load(&self, title: &str) -> (Vec<Bookmark>, Option<String>) {
        let Some(path) = self.record_path(title) else {
            return (Vec::new(), None);
        };

        if !path.exists() {
            return (Vec::new(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => {
                let reader = BufReader::new(file);
                match ciborium::from_reader(reader) {
                    Ok(bookmarks) => (bookmarks, None),
                    Err(_) => (
                        Vec::new(),
                        Some("notification-bookmarks-parse-error".to_string()),
                    ),
                }
            }
            Err(_) => (
                Vec::new(),
                Some("notification-bookmarks-read-error".to_string()),
            ),
        }
    }

    fn save(&mut self, title: &str, bookmarks: &[Bookmark]) -> Option<String> {
        let Some(path) = self.record_path(title) else {
            return Some("notification-bookmarks-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification-bookmarks-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                if ciborium::into_writer(&bookmarks, writer).is_err() {
                    return Some("notification-bookmarks-write-error".to_string());
                }
                None
            }
            Err(_) => Some("notification-bookmarks-create-error".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> FileBookmarkStore {
        FileBookmarkStore::with_base_dir(dir.path().to_path_buf())
    }

    fn sample_bookmarks() -> Vec<Bookmark> {
        vec![
            Bookmark::new(5.0, "intro".to_string(), None),
            Bookmark::new(42.5, "twist".to_string(), Some("who saw it coming".to_string())),
        ]
    }

    #[test]
    fn load_missing_record_is_empty_without_warning() {
        let dir = tempdir().expect("create temp dir");
        let store = store_in(&dir);

        let (entries, warning) = store.load("Never Saved");
        assert!(entries.is_empty());
        assert!(warning.is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().expect("create temp dir");
        let mut store = store_in(&dir);
        let bookmarks = sample_bookmarks();

        assert!(store.save("Big Buck Bunny", &bookmarks).is_none());

        let (loaded, warning) = store.load("Big Buck Bunny");
        assert!(warning.is_none());
        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn titles_map_to_distinct_records() {
        let dir = tempdir().expect("create temp dir");
        let mut store = store_in(&dir);

        store.save("Movie A", &sample_bookmarks());

        let (other, _) = store.load("Movie B");
        assert!(other.is_empty());
    }

    #[test]
    fn awkward_titles_are_filesystem_safe() {
        let dir = tempdir().expect("create temp dir");
        let mut store = store_in(&dir);
        let title = "So/Long: and thanks * for all the fish?";

        assert!(store.save(title, &sample_bookmarks()).is_none());
        let (loaded, _) = store.load(title);
        assert_eq!(loaded.len(), 2);
    }

    #[test]
    fn corrupt_record_degrades_to_empty_with_warning() {
        let dir = tempdir().expect("create temp dir");
        let mut store = store_in(&dir);
        let title = "Corrupted";

        store.save(title, &sample_bookmarks());

        // Overwrite the record with garbage
        let digest = blake3::hash(title.as_bytes()).to_hex();
        let path = dir
            .path()
            .join(BOOKMARKS_DIR)
            .join(format!("{digest}.cbor"));
        fs::write(&path, b"definitely not cbor").expect("write garbage");

        let (entries, warning) = store.load(title);
        assert!(entries.is_empty());
        assert_eq!(
            warning.as_deref(),
            Some("notification-bookmarks-parse-error")
        );

        // A subsequent save recovers the record
        assert!(store.save(title, &sample_bookmarks()).is_none());
        let (recovered, warning) = store.load(title);
        assert!(warning.is_none());
        assert_eq!(recovered.len(), 2);
    }

    #[test]
    fn save_overwrites_previous_record() {
        let dir = tempdir().expect("create temp dir");
        let mut store = store_in(&dir);

        store.save("Movie", &sample_bookmarks());
        store.save("Movie", &[]);

        let (loaded, _) = store.load("Movie");
        assert!(loaded.is_empty());
    }
}
