//! Local cache of the note collection
//!
//! The collection is the client-side snapshot of server state, kept in
//! a single JSON file. Mutations happen here explicitly; views are
//! re-derived from `notes()` after every change.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NotelitError, Result};
use crate::note::{Label, Note};

/// The cached note collection
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Collection {
    notes: Vec<Note>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the collection from a JSON cache file. A missing file is an
    /// empty collection; unreadable JSON is a data error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "cache file missing, starting empty");
            return Ok(Self::new());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| NotelitError::InvalidCache {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Write the collection back to the cache file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!(path = %path.display(), count = self.notes.len(), "cache saved");
        Ok(())
    }

    /// All notes in stored (manual) order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Add a note to the end of the collection
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// Look up a note by id
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Note> {
        self.notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotelitError::NoteNotFound { id: id.to_string() })
    }

    /// Apply an edit to a note, bumping its update timestamp
    pub fn update<F>(&mut self, id: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Note),
    {
        let note = self.get_mut(id)?;
        edit(note);
        note.touch();
        Ok(())
    }

    /// Remove a note, returning it
    pub fn remove(&mut self, id: &str) -> Result<Note> {
        let pos = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| NotelitError::NoteNotFound { id: id.to_string() })?;
        Ok(self.notes.remove(pos))
    }

    /// Pin a note to the promoted shelf
    pub fn pin(&mut self, id: &str) -> Result<()> {
        self.get_mut(id)?.pin();
        Ok(())
    }

    /// Unpin a note, clearing its pin timestamp
    pub fn unpin(&mut self, id: &str) -> Result<()> {
        self.get_mut(id)?.unpin();
        Ok(())
    }

    /// Attach a label to a note (at most once per name)
    pub fn attach_label(&mut self, id: &str, label: Label) -> Result<()> {
        let note = self.get_mut(id)?;
        note.attach_label(label)?;
        note.touch();
        Ok(())
    }

    /// Detach a label from a note by name
    pub fn detach_label(&mut self, id: &str, name: &str) -> Result<()> {
        let note = self.get_mut(id)?;
        note.detach_label(name)?;
        note.touch();
        Ok(())
    }

    /// All labels in use across the collection, deduped by name.
    /// First-seen color wins when the same name appears with different
    /// colors.
    pub fn available_labels(&self) -> Vec<Label> {
        let mut seen: Vec<Label> = Vec::new();
        for note in &self.notes {
            for label in &note.labels {
                if !seen.iter().any(|l| l.name == label.name) {
                    seen.push(label.clone());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection_with(titles: &[&str]) -> Collection {
        let mut collection = Collection::new();
        for title in titles {
            collection.add(Note::new(*title, ""));
        }
        collection
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let collection = Collection::load(&dir.path().join("absent.json")).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn load_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "{not json").unwrap();
        let err = Collection::load(&path).unwrap_err();
        assert!(matches!(err, NotelitError::InvalidCache { .. }));
    }

    #[test]
    fn save_and_reload_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let mut collection = collection_with(&["First", "Second"]);
        let id = collection.notes()[0].id.clone();
        collection.pin(&id).unwrap();
        collection.save(&path).unwrap();

        let reloaded = Collection::load(&path).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert!(reloaded.get(&id).unwrap().is_pinned);
    }

    #[test]
    fn update_bumps_updated_at() {
        let mut collection = collection_with(&["Draft"]);
        let id = collection.notes()[0].id.clone();
        assert!(collection.get(&id).unwrap().updated_at.is_none());

        collection
            .update(&id, |n| n.content = "revised".to_string())
            .unwrap();
        let note = collection.get(&id).unwrap();
        assert_eq!(note.content, "revised");
        assert!(note.updated_at.is_some());
    }

    #[test]
    fn remove_unknown_id_is_not_found() {
        let mut collection = collection_with(&["Only"]);
        let err = collection.remove("nl-missing").unwrap_err();
        assert!(matches!(err, NotelitError::NoteNotFound { .. }));
    }

    #[test]
    fn available_labels_dedupe_by_name_first_color_wins() {
        let mut collection = collection_with(&["One", "Two"]);
        let first = collection.notes()[0].id.clone();
        let second = collection.notes()[1].id.clone();
        collection
            .attach_label(&first, Label::new("work", "#ff0000"))
            .unwrap();
        collection
            .attach_label(&second, Label::new("work", "#00ff00"))
            .unwrap();
        collection
            .attach_label(&second, Label::new("home", "#0000ff"))
            .unwrap();

        let labels = collection.available_labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].name, "work");
        assert_eq!(labels[0].color, "#ff0000");
    }
}
