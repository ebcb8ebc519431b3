//! Event orchestrator.
//!
//! The `App` owns the note store and wires widget events to service calls:
//! show the loading indicator, call the service, mutate the store on
//! success, re-render, notify. Failures are logged and turned into generic
//! user-facing notifications; nothing here is fatal, the event loop keeps
//! running after any error.

use std::io::Write;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error};

use crate::api::NoteService;
use crate::notify::{Notification, Notifier};
use crate::render::{render, SearchFilter};
use crate::store::NoteStore;
use crate::ui::{LoadingIndicator, UiEvent};

pub struct App {
    store: NoteStore,
    service: Box<dyn NoteService>,
    notifier: Box<dyn Notifier>,
    indicator: LoadingIndicator,
    filter: Option<SearchFilter>,
    sink: Box<dyn Write + Send>,
}

impl App {
    pub fn new(
        service: Box<dyn NoteService>,
        notifier: Box<dyn Notifier>,
        sink: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            store: NoteStore::new(),
            service,
            notifier,
            indicator: LoadingIndicator::new(),
            filter: None,
            sink,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Redraw the current view without touching the store. An active
    /// search filter stays applied across mutations.
    pub fn refresh(&mut self) {
        let view = render(self.store.all(), self.filter.as_ref());
        if let Err(e) = view.write_to(self.sink.as_mut()) {
            error!(error = %e, "failed to write note view");
        }
    }

    /// Run until the widget side of the channel closes.
    pub async fn run(&mut self, mut events: UnboundedReceiver<UiEvent>) {
        while let Some(event) = events.recv().await {
            self.dispatch(event).await;
        }
    }

    pub async fn dispatch(&mut self, event: UiEvent) {
        match event {
            UiEvent::AddNote { title, body } => self.add_note(title, body).await,
            UiEvent::DeleteNote { id } => self.delete_note(id).await,
            UiEvent::ArchiveNote { id } => self.toggle_archive(id).await,
            UiEvent::SearchNotes { term } => self.search(&term),
        }
    }

    /// Fetch the full note set and replace the store wholesale.
    pub async fn load(&mut self) {
        self.indicator.show();
        match self.service.list_notes().await {
            Ok(notes) => {
                debug!(count = notes.len(), "notes loaded");
                self.store.replace(notes);
                self.refresh();
            }
            Err(e) => {
                error!(error = %e, "failed to fetch notes");
                self.notifier.notify(&Notification::error(
                    "Oops...",
                    "Failed to fetch notes. Please try again later.",
                ));
            }
        }
        self.indicator.hide();
    }

    pub async fn add_note(&mut self, title: String, body: String) {
        self.indicator.show();
        match self.service.create_note(&title, &body).await {
            Ok(note) => {
                self.store.prepend(note);
                self.refresh();
                self.notifier
                    .notify(&Notification::success("Done!", "New note added."));
            }
            Err(e) => {
                error!(error = %e, "failed to add note");
                self.notifier.notify(&Notification::error(
                    "Oops...",
                    "Failed to add note. Please try again.",
                ));
            }
        }
        self.indicator.hide();
    }

    pub async fn delete_note(&mut self, id: String) {
        self.indicator.show();
        match self.service.delete_note(&id).await {
            Ok(()) => {
                self.store.remove(&id);
                self.refresh();
                self.notifier
                    .notify(&Notification::success("Done!", "Note deleted."));
            }
            Err(e) => {
                error!(id = %id, error = %e, "failed to delete note");
                self.notifier.notify(&Notification::error(
                    "Oops...",
                    "Failed to delete note. Please try again.",
                ));
            }
        }
        self.indicator.hide();
    }

    /// Archive or unarchive depending on the note's current state. The
    /// store lookup happens first; an unknown id notifies and stops
    /// without ever showing the indicator.
    pub async fn toggle_archive(&mut self, id: String) {
        let Some(note) = self.store.get(&id) else {
            error!(id = %id, "note not found in store");
            self.notifier
                .notify(&Notification::error("Oops...", "Note not found."));
            return;
        };
        let was_archived = note.archived;

        self.indicator.show();
        let result = if was_archived {
            self.service.unarchive_note(&id).await
        } else {
            self.service.archive_note(&id).await
        };

        match result {
            Ok(_) => match self.store.toggle_archived(&id) {
                Ok(updated) => {
                    self.refresh();
                    let text = if updated.archived {
                        "Note archived."
                    } else {
                        "Note moved out of the archive."
                    };
                    self.notifier.notify(&Notification::success("Done!", text));
                }
                Err(e) => {
                    error!(id = %id, error = %e, "note vanished from store mid-toggle");
                    self.notifier
                        .notify(&Notification::error("Oops...", "Note not found."));
                }
            },
            Err(e) => {
                error!(id = %id, error = %e, "archive toggle failed");
                let text = if was_archived {
                    "Failed to unarchive note. Please try again."
                } else {
                    "Failed to archive note. Please try again."
                };
                self.notifier.notify(&Notification::error("Oops...", text));
            }
        }
        self.indicator.hide();
    }

    /// Synchronous: no indicator, no service call. An empty term clears
    /// the filter.
    pub fn search(&mut self, term: &str) {
        let filter = SearchFilter::new(term);
        self.filter = if filter.is_empty() {
            None
        } else {
            Some(filter)
        };
        self.refresh();
    }
}
