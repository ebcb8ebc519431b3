use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single note as the remote service stores it.
///
/// The `id` and `created_at` fields are server-assigned; the wire format
/// uses camelCase keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub archived: bool,
}

impl Note {
    pub fn new(id: String, title: String, body: String) -> Self {
        Self {
            id,
            title,
            body,
            created_at: Utc::now(),
            archived: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{
            "id": "notes-V1StGXR8_Z5jdHi6B-myT",
            "title": "Weekly groceries",
            "body": "Eggs, rice, coffee",
            "createdAt": "2024-06-01T08:30:00.000Z",
            "archived": false
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id, "notes-V1StGXR8_Z5jdHi6B-myT");
        assert_eq!(note.title, "Weekly groceries");
        assert!(!note.archived);

        let back = serde_json::to_string(&note).unwrap();
        assert!(back.contains("createdAt"));
    }
}
