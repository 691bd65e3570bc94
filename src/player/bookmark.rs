// SPDX-License-Identifier: MPL-2.0
//! Timestamped bookmarks for one title.
//!
//! The in-memory list is a cache of the persisted per-title record; it is
//! kept sorted by timestamp ascending at all times, and every mutation is
//! followed by a store flush (driven by the session's `PersistBookmarks`
//! effect).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Opaque unique bookmark identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookmarkId(Uuid);

impl BookmarkId {
    /// Creates a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookmarkId {
    fn default() -> Self {
        Self::new()
    }
}

/// A timestamped annotation on the media timeline.
///
/// The timestamp is immutable after creation: the edit dialog only touches
/// title and note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,

    /// Position on the timeline, in seconds. Clamped to `[0, duration]`
    /// at creation time by the session.
    #[serde(rename = "timestamp")]
    pub timestamp_secs: f64,

    /// Non-empty display title.
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Creates a bookmark at the given position.
    #[must_use]
    pub fn new(timestamp_secs: f64, title: String, note: Option<String>) -> Self {
        Self {
            id: BookmarkId::new(),
            timestamp_secs,
            title,
            note,
            created_at: Utc::now(),
        }
    }
}

fn by_timestamp(a: &Bookmark, b: &Bookmark) -> Ordering {
    a.timestamp_secs
        .partial_cmp(&b.timestamp_secs)
        .unwrap_or(Ordering::Equal)
}

/// Ordered bookmark collection for the open title.
#[derive(Debug, Clone, Default)]
pub struct BookmarkList {
    entries: Vec<Bookmark>,
}

impl BookmarkList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a list from persisted entries, restoring the sort invariant
    /// in case the stored record was produced by an older build or edited
    /// by hand.
    #[must_use]
    pub fn from_entries(mut entries: Vec<Bookmark>) -> Self {
        entries.sort_by(by_timestamp);
        Self { entries }
    }

    /// Inserts a bookmark, keeping the list sorted by timestamp.
    pub fn insert(&mut self, bookmark: Bookmark) {
        self.entries.push(bookmark);
        self.entries.sort_by(by_timestamp);
    }

    /// Updates title and note of an existing bookmark.
    ///
    /// The timestamp is deliberately not part of the signature: it cannot
    /// change after creation. Returns false when the id is unknown.
    pub fn update(&mut self, id: BookmarkId, title: String, note: Option<String>) -> bool {
        match self.entries.iter_mut().find(|b| b.id == id) {
            Some(bookmark) => {
                bookmark.title = title;
                bookmark.note = note;
                true
            }
            None => false,
        }
    }

    /// Removes a bookmark; returns it when found.
    pub fn remove(&mut self, id: BookmarkId) -> Option<Bookmark> {
        let index = self.entries.iter().position(|b| b.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Looks up a bookmark by id.
    #[must_use]
    pub fn get(&self, id: BookmarkId) -> Option<&Bookmark> {
        self.entries.iter().find(|b| b.id == id)
    }

    /// Returns the entries in timestamp order.
    #[must_use]
    pub fn entries(&self) -> &[Bookmark] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Pending editor state for the add/edit dialog.
///
/// The buffer never touches the list until confirmed, so cancelling is
/// side-effect free.
#[derive(Debug, Clone, PartialEq)]
pub struct EditBuffer {
    /// The bookmark being edited, or `None` when adding a new one.
    pub editing: Option<BookmarkId>,
    pub title: String,
    pub note: String,
}

impl EditBuffer {
    /// Buffer for a new bookmark with a pre-filled default title.
    #[must_use]
    pub fn for_add(default_title: String) -> Self {
        Self {
            editing: None,
            title: default_title,
            note: String::new(),
        }
    }

    /// Buffer pre-filled from an existing bookmark.
    #[must_use]
    pub fn for_edit(bookmark: &Bookmark) -> Self {
        Self {
            editing: Some(bookmark.id),
            title: bookmark.title.clone(),
            note: bookmark.note.clone().unwrap_or_default(),
        }
    }

    /// Returns the trimmed title when the buffer is confirmable.
    ///
    /// An empty trimmed title refuses the save; the dialog keeps its
    /// confirm action disabled in that case.
    #[must_use]
    pub fn confirmable_title(&self) -> Option<String> {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Returns the trimmed note, mapped to `None` when blank.
    #[must_use]
    pub fn trimmed_note(&self) -> Option<String> {
        let trimmed = self.note.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    fn bookmark_at(timestamp: f64) -> Bookmark {
        Bookmark::new(timestamp, format!("at {timestamp}"), None)
    }

    fn timestamps(list: &BookmarkList) -> Vec<f64> {
        list.entries().iter().map(|b| b.timestamp_secs).collect()
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(BookmarkId::new(), BookmarkId::new());
    }

    #[test]
    fn insert_keeps_list_sorted_regardless_of_order() {
        let mut list = BookmarkList::new();
        for t in [42.0, 3.0, 99.5, 0.0, 17.2] {
            list.insert(bookmark_at(t));
        }
        assert_eq!(timestamps(&list), vec![0.0, 3.0, 17.2, 42.0, 99.5]);
    }

    #[test]
    fn from_entries_restores_sort_invariant() {
        let entries = vec![bookmark_at(30.0), bookmark_at(5.0), bookmark_at(12.0)];
        let list = BookmarkList::from_entries(entries);
        assert_eq!(timestamps(&list), vec![5.0, 12.0, 30.0]);
    }

    #[test]
    fn update_changes_title_and_note_only() {
        let mut list = BookmarkList::new();
        let bookmark = bookmark_at(25.0);
        let id = bookmark.id;
        let created_at = bookmark.created_at;
        list.insert(bookmark);

        assert!(list.update(id, "renamed".to_string(), Some("a note".to_string())));

        let updated = list.get(id).expect("bookmark should exist");
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.note.as_deref(), Some("a note"));
        assert_abs_diff_eq!(updated.timestamp_secs, 25.0);
        assert_eq!(updated.created_at, created_at);
    }

    #[test]
    fn update_unknown_id_is_rejected() {
        let mut list = BookmarkList::new();
        assert!(!list.update(BookmarkId::new(), "x".to_string(), None));
    }

    #[test]
    fn remove_returns_the_bookmark() {
        let mut list = BookmarkList::new();
        let bookmark = bookmark_at(10.0);
        let id = bookmark.id;
        list.insert(bookmark);
        list.insert(bookmark_at(20.0));

        let removed = list.remove(id).expect("should remove");
        assert_abs_diff_eq!(removed.timestamp_secs, 10.0);
        assert_eq!(list.len(), 1);
        assert!(list.remove(id).is_none());
    }

    #[test]
    fn serde_round_trip_preserves_entries() {
        let original = vec![
            bookmark_at(1.5),
            Bookmark::new(7.25, "with note".to_string(), Some("detail".to_string())),
        ];

        let mut buffer = Vec::new();
        ciborium::into_writer(&original, &mut buffer).expect("serialize");
        let restored: Vec<Bookmark> =
            ciborium::from_reader(buffer.as_slice()).expect("deserialize");

        assert_eq!(original, restored);
    }

    #[test]
    fn edit_buffer_for_add_has_no_target() {
        let buffer = EditBuffer::for_add("Bookmark at 0:42".to_string());
        assert_eq!(buffer.editing, None);
        assert_eq!(buffer.title, "Bookmark at 0:42");
        assert!(buffer.note.is_empty());
    }

    #[test]
    fn edit_buffer_for_edit_copies_current_values() {
        let bookmark = Bookmark::new(9.0, "scene".to_string(), Some("dragons".to_string()));
        let buffer = EditBuffer::for_edit(&bookmark);
        assert_eq!(buffer.editing, Some(bookmark.id));
        assert_eq!(buffer.title, "scene");
        assert_eq!(buffer.note, "dragons");
    }

    #[test]
    fn blank_title_refuses_confirmation() {
        let mut buffer = EditBuffer::for_add("x".to_string());
        buffer.title = "   ".to_string();
        assert_eq!(buffer.confirmable_title(), None);

        buffer.title = "  trimmed  ".to_string();
        assert_eq!(buffer.confirmable_title(), Some("trimmed".to_string()));
    }

    #[test]
    fn blank_note_becomes_none() {
        let mut buffer = EditBuffer::for_add("x".to_string());
        buffer.note = "  ".to_string();
        assert_eq!(buffer.trimmed_note(), None);

        buffer.note = " keep ".to_string();
        assert_eq!(buffer.trimmed_note(), Some("keep".to_string()));
    }
}
