//! Interactive widgets.
//!
//! Widgets are presentational units: each one renders itself as text and
//! emits typed [`UiEvent`]s through a channel handed to it at construction.
//! Widgets never touch the store; the orchestrator on the receiving end of
//! the channel does all mutation.

mod form;

pub use form::{AddNoteForm, DEFAULT_MAX_TITLE_LEN};

use tokio::sync::mpsc::UnboundedSender;

/// Typed messages flowing from widgets to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    AddNote { title: String, body: String },
    DeleteNote { id: String },
    ArchiveNote { id: String },
    SearchNotes { term: String },
}

/// A presentational unit that can describe itself as text.
pub trait Widget {
    fn view(&self) -> String;
}

/// Search input. Emits on every change; an empty term is a valid signal
/// meaning "clear the filter".
pub struct SearchBar {
    term: String,
    events: UnboundedSender<UiEvent>,
}

impl SearchBar {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self {
            term: String::new(),
            events,
        }
    }

    pub fn input(&mut self, term: &str) {
        self.term = term.to_string();
        let _ = self.events.send(UiEvent::SearchNotes {
            term: self.term.clone(),
        });
    }
}

impl Widget for SearchBar {
    fn view(&self) -> String {
        format!("search: {}", self.term)
    }
}

/// Actions attached to a note card. Delete asks the confirmation callback
/// before the event goes out; archive-toggle emits unconditionally.
pub struct NoteActions {
    events: UnboundedSender<UiEvent>,
}

impl NoteActions {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self { events }
    }

    /// Returns whether the delete was confirmed and emitted.
    pub fn request_delete(&self, id: &str, confirm: impl FnOnce() -> bool) -> bool {
        if !confirm() {
            return false;
        }
        let _ = self.events.send(UiEvent::DeleteNote { id: id.to_string() });
        true
    }

    pub fn toggle_archive(&self, id: &str) {
        let _ = self.events.send(UiEvent::ArchiveNote { id: id.to_string() });
    }
}

/// Stateless busy marker on stderr. The orchestrator owns show/hide
/// timing; the indicator itself has no logic. Suppressed when stderr is
/// not a terminal so piped output stays clean.
pub struct LoadingIndicator {
    enabled: bool,
}

impl LoadingIndicator {
    pub fn new() -> Self {
        Self {
            enabled: atty::is(atty::Stream::Stderr),
        }
    }

    pub fn show(&self) {
        if self.enabled {
            eprint!("loading...");
        }
    }

    pub fn hide(&self) {
        if self.enabled {
            eprint!("\r          \r");
        }
    }
}

impl Default for LoadingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[test]
    fn test_search_bar_emits_on_every_input() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bar = SearchBar::new(tx);

        bar.input("gro");
        bar.input("groc");

        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::SearchNotes {
                term: "gro".to_string()
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::SearchNotes {
                term: "groc".to_string()
            }
        );
    }

    #[test]
    fn test_search_bar_empty_term_is_a_clear_signal() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut bar = SearchBar::new(tx);

        bar.input("");
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::SearchNotes {
                term: String::new()
            }
        );
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let actions = NoteActions::new(tx);

        assert!(!actions.request_delete("notes-1", || false));
        assert!(rx.try_recv().is_err());

        assert!(actions.request_delete("notes-1", || true));
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::DeleteNote {
                id: "notes-1".to_string()
            }
        );
    }

    #[test]
    fn test_archive_toggle_emits_unconditionally() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let actions = NoteActions::new(tx);

        actions.toggle_archive("notes-9");
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::ArchiveNote {
                id: "notes-9".to_string()
            }
        );
    }
}
