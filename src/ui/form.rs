//! Add-note form with live validation.
//!
//! Both fields re-validate on every change, and again on submit. A failed
//! validation never becomes an error value; it is surfaced as inline field
//! messages on the form. The add event fires only when both checks pass.

use tokio::sync::mpsc::UnboundedSender;

use super::{UiEvent, Widget};

pub const DEFAULT_MAX_TITLE_LEN: usize = 50;

pub struct AddNoteForm {
    max_title_len: usize,
    title: String,
    body: String,
    title_error: Option<String>,
    body_error: Option<String>,
    events: UnboundedSender<UiEvent>,
}

impl AddNoteForm {
    pub fn new(events: UnboundedSender<UiEvent>) -> Self {
        Self::with_max_title_len(events, DEFAULT_MAX_TITLE_LEN)
    }

    pub fn with_max_title_len(events: UnboundedSender<UiEvent>, max_title_len: usize) -> Self {
        Self {
            max_title_len,
            title: String::new(),
            body: String::new(),
            title_error: None,
            body_error: None,
            events,
        }
    }

    /// Live character counter, `current/max`.
    pub fn char_count(&self) -> String {
        format!("{}/{}", self.title.chars().count(), self.max_title_len)
    }

    pub fn title_error(&self) -> Option<&str> {
        self.title_error.as_deref()
    }

    pub fn body_error(&self) -> Option<&str> {
        self.body_error.as_deref()
    }

    /// Update the title field; validation runs on every change.
    pub fn input_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.validate_title();
    }

    /// Update the body field; validation runs on every change.
    pub fn input_body(&mut self, body: &str) {
        self.body = body.to_string();
        self.validate_body();
    }

    fn validate_title(&mut self) -> bool {
        if self.title.chars().count() > self.max_title_len {
            self.title_error = Some(format!(
                "title exceeds maximum length of {} characters",
                self.max_title_len
            ));
            false
        } else {
            self.title_error = None;
            true
        }
    }

    fn validate_body(&mut self) -> bool {
        if self.body.trim().is_empty() {
            self.body_error = Some("note body must not be empty".to_string());
            false
        } else {
            self.body_error = None;
            true
        }
    }

    /// Re-validate both fields and emit the add event if both pass. The
    /// fields reset after a successful emission.
    pub fn submit(&mut self) -> bool {
        let title_ok = self.validate_title();
        let body_ok = self.validate_body();
        if !(title_ok && body_ok) {
            return false;
        }

        let _ = self.events.send(UiEvent::AddNote {
            title: std::mem::take(&mut self.title),
            body: std::mem::take(&mut self.body),
        });
        self.title_error = None;
        self.body_error = None;
        true
    }
}

impl Widget for AddNoteForm {
    fn view(&self) -> String {
        let mut out = format!("title: {}  [{}]\n", self.title, self.char_count());
        if let Some(e) = &self.title_error {
            out.push_str(&format!("  ! {}\n", e));
        }
        out.push_str(&format!("body: {}\n", self.body));
        if let Some(e) = &self.body_error {
            out.push_str(&format!("  ! {}\n", e));
        }
        out
    }
}
