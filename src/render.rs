//! Projection of the note list into the two output regions.
//!
//! Rendering is a pure pass over the store: apply the optional search
//! filter, then partition into active and archived, preserving order.
//! Every pass replaces the previous output wholesale; the lists are small
//! enough that incremental updates would buy nothing.

use std::io::{self, Write};

use chrono::{DateTime, Utc};

use crate::note::Note;

/// Case-insensitive substring filter over title and body.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    term: String,
}

impl SearchFilter {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
        }
    }

    /// An empty term matches everything, meaning "no filter".
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.term.is_empty()
            || note.title.to_lowercase().contains(&self.term)
            || note.body.to_lowercase().contains(&self.term)
    }
}

/// The two regions produced by a render pass.
#[derive(Debug, Clone)]
pub struct NoteView {
    pub active: Vec<Note>,
    pub archived: Vec<Note>,
}

/// Build the view: filter, then partition. Store order is kept within
/// each region.
pub fn render(notes: &[Note], filter: Option<&SearchFilter>) -> NoteView {
    let mut active = Vec::new();
    let mut archived = Vec::new();

    for note in notes {
        if let Some(f) = filter {
            if !f.matches(note) {
                continue;
            }
        }
        if note.archived {
            archived.push(note.clone());
        } else {
            active.push(note.clone());
        }
    }

    NoteView { active, archived }
}

impl NoteView {
    /// Write both regions to the sink, replacing whatever was shown before.
    pub fn write_to(&self, out: &mut dyn Write) -> io::Result<()> {
        write_region(out, "Active Notes", &self.active)?;
        write_region(out, "Archived Notes", &self.archived)?;
        out.flush()
    }
}

fn write_region(out: &mut dyn Write, heading: &str, notes: &[Note]) -> io::Result<()> {
    writeln!(out, "== {} ({}) ==", heading, notes.len())?;
    if notes.is_empty() {
        writeln!(out, "  (none)")?;
    }
    for note in notes {
        write_card(out, note)?;
    }
    writeln!(out)
}

/// One note card: id, title, body, creation date.
fn write_card(out: &mut dyn Write, note: &Note) -> io::Result<()> {
    writeln!(out, "  [{}] {}", note.id, note.title)?;
    for line in note.body.lines() {
        writeln!(out, "      {}", line)?;
    }
    writeln!(out, "      created {}", format_date(&note.created_at))
}

/// Format a timestamp as a human-readable date.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, body: &str, archived: bool) -> Note {
        let mut n = Note::new(id.to_string(), title.to_string(), body.to_string());
        n.archived = archived;
        n
    }

    #[test]
    fn test_partition_covers_every_note_exactly_once() {
        let notes = vec![
            note("1", "a", "x", false),
            note("2", "b", "y", true),
            note("3", "c", "z", false),
            note("4", "d", "w", true),
        ];

        let view = render(&notes, None);
        assert_eq!(view.active.len() + view.archived.len(), notes.len());
        assert!(view.active.iter().all(|n| !n.archived));
        assert!(view.archived.iter().all(|n| n.archived));
    }

    #[test]
    fn test_partition_preserves_order_within_regions() {
        let notes = vec![
            note("1", "a", "x", false),
            note("2", "b", "y", true),
            note("3", "c", "z", false),
        ];

        let view = render(&notes, None);
        let active_ids: Vec<&str> = view.active.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(active_ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_filter_equals_no_filter() {
        let notes = vec![note("1", "a", "x", false), note("2", "b", "y", true)];

        let filtered = render(&notes, Some(&SearchFilter::new("")));
        let unfiltered = render(&notes, None);
        assert_eq!(filtered.active.len(), unfiltered.active.len());
        assert_eq!(filtered.archived.len(), unfiltered.archived.len());
    }

    #[test]
    fn test_filter_matches_title_or_body_case_insensitive() {
        let notes = vec![
            note("1", "Test", "", false),
            note("2", "abc", "test case", false),
        ];

        // "t" matches the first by title and the second by body.
        let view = render(&notes, Some(&SearchFilter::new("t")));
        assert_eq!(view.active.len(), 2);

        let view = render(&notes, Some(&SearchFilter::new("ABC")));
        let ids: Vec<&str> = view.active.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn test_filter_does_not_touch_input() {
        let notes = vec![note("1", "a", "x", false), note("2", "b", "y", false)];
        let _ = render(&notes, Some(&SearchFilter::new("a")));
        assert_eq!(notes.len(), 2);
    }

    #[test]
    fn test_view_writes_both_regions() {
        let notes = vec![note("1", "Groceries", "eggs", false)];
        let view = render(&notes, None);

        let mut out = Vec::new();
        view.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Active Notes (1)"));
        assert!(text.contains("Archived Notes (0)"));
        assert!(text.contains("Groceries"));
    }
}
