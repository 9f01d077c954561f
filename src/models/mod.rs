use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Store-assigned note identifier.
///
/// Treated as opaque. Stores seen in practice hand out either UUID strings or
/// integers, so both are accepted on the wire and kept as text.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub(crate) struct NoteId(String);

impl NoteId {
    #[cfg(test)]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNoteId {
    Text(String),
    Int(i64),
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawNoteId::deserialize(deserializer)? {
            RawNoteId::Text(s) => NoteId(s),
            RawNoteId::Int(n) => NoteId(n.to_string()),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: NoteId,
    pub title: String,
    pub text: String,
}

/// Body of `POST /api/notes`. Fields are sent exactly as typed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NewNote {
    pub title: String,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_deserializes_integer_id() {
        let parsed: Note = serde_json::from_str(r#"{"id": 1, "title": "A", "text": "B"}"#)
            .expect("note with integer id should parse");
        assert_eq!(parsed.id, NoteId::new("1"));
        assert_eq!(parsed.title, "A");
        assert_eq!(parsed.text, "B");
    }

    #[test]
    fn test_note_deserializes_string_id() {
        let parsed: Note = serde_json::from_str(
            r#"{"id": "8f14e45f-ceea-467f-a0e6-3c2d1f6b7b1a", "title": "t", "text": "x"}"#,
        )
        .expect("note with string id should parse");
        assert_eq!(parsed.id.as_str(), "8f14e45f-ceea-467f-a0e6-3c2d1f6b7b1a");
    }

    #[test]
    fn test_note_missing_text_is_rejected() {
        let parsed = serde_json::from_str::<Note>(r#"{"id": 1, "title": "A"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_new_note_serialization_shape() {
        let v = serde_json::to_value(NewNote {
            title: " A ".to_string(),
            text: "B".to_string(),
        })
        .expect("should serialize");
        assert_eq!(v, serde_json::json!({"title": " A ", "text": "B"}));
    }

    #[test]
    fn test_note_id_serializes_as_plain_string() {
        let v = serde_json::to_value(NoteId::new("42")).expect("should serialize");
        assert_eq!(v, serde_json::json!("42"));
    }
}
