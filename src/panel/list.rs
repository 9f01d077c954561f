use crate::models::{Note, NoteId};

pub(crate) const EMPTY_LIST_LABEL: &str = "No saved Notes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ListEntry {
    /// Stands in for an empty collection. Not clickable, no delete control.
    Placeholder,
    /// One row per note; the row owns its payload, so duplicate ids stay distinct.
    Entry(Note),
}

impl ListEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Placeholder => EMPTY_LIST_LABEL,
            Self::Entry(note) => &note.title,
        }
    }

    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Placeholder => None,
            Self::Entry(note) => Some(note),
        }
    }

    pub fn note_id(&self) -> Option<&NoteId> {
        self.note().map(|n| &n.id)
    }

    #[cfg(test)]
    pub fn has_delete(&self) -> bool {
        matches!(self, Self::Entry(_))
    }
}

/// Rendered note list. Rows are addressed by position, never patched.
///
/// Always built from scratch by [`render_note_list`].
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct NoteListView {
    entries: Vec<ListEntry>,
}

impl NoteListView {
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// The note behind row `index`; `None` for the placeholder or a stale index.
    pub fn note_at(&self, index: usize) -> Option<&Note> {
        self.entries.get(index).and_then(ListEntry::note)
    }

    #[cfg(test)]
    pub fn delete_affordances(&self) -> usize {
        self.entries.iter().filter(|e| e.has_delete()).count()
    }

    /// False until the first successful list fetch.
    #[cfg(test)]
    pub fn is_rendered(&self) -> bool {
        !self.entries.is_empty()
    }
}

pub(crate) fn render_note_list(notes: &[Note]) -> NoteListView {
    if notes.is_empty() {
        return NoteListView {
            entries: vec![ListEntry::Placeholder],
        };
    }

    NoteListView {
        entries: notes.iter().cloned().map(ListEntry::Entry).collect(),
    }
}
