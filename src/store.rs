//! In-memory note store owned by the orchestrator.

use crate::error::{NotaError, Result};
use crate::note::Note;

/// Ordered collection of notes, newest first.
///
/// The store is single-threaded state: mutations arrive one at a time from
/// the event loop, so no locking is involved.
#[derive(Debug, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Replace the entire set, as the initial load does.
    pub fn replace(&mut self, notes: Vec<Note>) {
        self.notes = notes;
    }

    /// New notes go to the head of the list.
    pub fn prepend(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) {
        self.notes.retain(|n| n.id != id);
    }

    /// Flip the archived flag and return the updated note.
    pub fn toggle_archived(&mut self, id: &str) -> Result<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotaError::NoteNotFound(id.to_string()))?;
        note.archived = !note.archived;
        Ok(note.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, archived: bool) -> Note {
        let mut n = Note::new(id.to_string(), format!("title {}", id), "body".to_string());
        n.archived = archived;
        n
    }

    #[test]
    fn test_prepend_puts_newest_first() {
        let mut store = NoteStore::new();
        store.prepend(note("1", false));
        store.prepend(note("2", false));

        let ids: Vec<&str> = store.all().iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut store = NoteStore::new();
        store.prepend(note("old", false));
        store.replace(vec![note("a", false), note("b", true)]);

        assert_eq!(store.len(), 2);
        assert!(store.get("old").is_none());
        assert!(store.get("a").is_some());
    }

    #[test]
    fn test_remove_exactly_one() {
        let mut store = NoteStore::new();
        store.replace(vec![note("1", false), note("2", false), note("3", false)]);

        store.remove("2");
        assert_eq!(store.len(), 2);
        assert!(store.get("2").is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = NoteStore::new();
        store.replace(vec![note("1", false)]);

        store.remove("nope");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_archived_flips_and_returns() {
        let mut store = NoteStore::new();
        store.replace(vec![note("1", false)]);

        let updated = store.toggle_archived("1").unwrap();
        assert!(updated.archived);
        assert!(store.get("1").unwrap().archived);
    }

    #[test]
    fn test_toggle_archived_twice_is_involutive() {
        let mut store = NoteStore::new();
        store.replace(vec![note("1", false)]);

        store.toggle_archived("1").unwrap();
        store.toggle_archived("1").unwrap();
        assert!(!store.get("1").unwrap().archived);
    }

    #[test]
    fn test_toggle_archived_missing_id_fails() {
        let mut store = NoteStore::new();
        let err = store.toggle_archived("ghost").unwrap_err();
        assert!(matches!(err, NotaError::NoteNotFound(_)));
    }
}
