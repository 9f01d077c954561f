pub(crate) mod list;
pub(crate) mod sync;

pub(crate) use list::{render_note_list, NoteListView};
pub(crate) use sync::{delete_note, refresh_notes, save_note};

use crate::api::{ApiError, ApiResult};
use crate::models::{NewNote, Note, NoteId};
use tracing::{debug, warn};

/// The note currently shown in the detail form, if any.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum ActiveNote {
    /// "New note" mode: the form is editable.
    #[default]
    Empty,
    Viewing(Note),
}

impl ActiveNote {
    pub fn id(&self) -> Option<&NoteId> {
        match self {
            Self::Empty => None,
            Self::Viewing(n) => Some(&n.id),
        }
    }

    pub fn is_viewing(&self) -> bool {
        matches!(self, Self::Viewing(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct DetailForm {
    pub title: String,
    pub text: String,
    pub readonly: bool,
    pub save_visible: bool,
}

/// Save is offered only when both fields have non-whitespace content.
pub(crate) fn save_button_visible(title: &str, text: &str) -> bool {
    !title.trim().is_empty() && !text.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NoticeKind {
    /// The list could not be refreshed; cleared by the next good fetch.
    ListUnavailable,
    /// A save or delete failed; stays until dismissed.
    ChangeFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Controller state for the notes view: selection, form, list and notice.
///
/// Every field is private; handlers go through the methods below so the state
/// machine transitions stay in one place.
#[derive(Clone, Debug, Default)]
pub(crate) struct NotePanel {
    active: ActiveNote,
    form: DetailForm,
    list: NoteListView,
    notice: Option<Notice>,
    pending_fetches: u32,
}

impl NotePanel {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn active(&self) -> &ActiveNote {
        &self.active
    }

    pub fn form(&self) -> &DetailForm {
        &self.form
    }

    pub fn list(&self) -> &NoteListView {
        &self.list
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetches > 0
    }

    /// Select the list row at `index`. Returns false for the placeholder or a
    /// row that is no longer in the current list.
    pub fn view_note(&mut self, index: usize) -> bool {
        let Some(note) = self.list.note_at(index).cloned() else {
            debug!(index, "ignoring selection of unknown row");
            return false;
        };

        debug!(id = %note.id, index, "viewing note");
        self.active = ActiveNote::Viewing(note);
        self.render_active_note();
        true
    }

    pub fn new_note(&mut self) {
        debug!("switching to new note");
        self.active = ActiveNote::Empty;
        self.render_active_note();
    }

    /// Keystroke in either field. Read-only while a note is being viewed.
    pub fn input(&mut self, title: &str, text: &str) {
        if self.active.is_viewing() {
            return;
        }
        self.form.title = title.to_string();
        self.form.text = text.to_string();
        self.form.save_visible = save_button_visible(title, text);
    }

    pub fn set_title(&mut self, title: &str) {
        let text = self.form.text.clone();
        self.input(title, &text);
    }

    pub fn set_text(&mut self, text: &str) {
        let title = self.form.title.clone();
        self.input(&title, text);
    }

    /// Project the active note onto the detail form.
    pub fn render_active_note(&mut self) {
        self.form = match &self.active {
            ActiveNote::Viewing(note) => DetailForm {
                title: note.title.clone(),
                text: note.text.clone(),
                readonly: true,
                save_visible: false,
            },
            ActiveNote::Empty => DetailForm {
                title: String::new(),
                text: String::new(),
                readonly: false,
                save_visible: save_button_visible("", ""),
            },
        };
    }

    /// The note to create, if saving is currently offered.
    pub fn draft(&self) -> Option<NewNote> {
        if self.active.is_viewing() || !save_button_visible(&self.form.title, &self.form.text) {
            return None;
        }
        Some(NewNote {
            title: self.form.title.clone(),
            text: self.form.text.clone(),
        })
    }

    /// Deleting the active note drops the selection before anything re-renders.
    pub fn begin_delete(&mut self, id: &NoteId) {
        if self.active.id() == Some(id) {
            debug!(%id, "deleting the active note; clearing selection");
            self.active = ActiveNote::Empty;
        }
    }

    pub fn begin_fetch(&mut self) {
        self.pending_fetches = self.pending_fetches.saturating_add(1);
    }

    pub fn finish_fetch(&mut self, result: ApiResult<Vec<Note>>) {
        self.pending_fetches = self.pending_fetches.saturating_sub(1);
        match result {
            Ok(notes) => {
                self.list = render_note_list(&notes);
                if self.notice.as_ref().map(|n| n.kind) == Some(NoticeKind::ListUnavailable) {
                    self.notice = None;
                }
            }
            Err(e) => self.report(NoticeKind::ListUnavailable, &e),
        }
    }

    pub fn report(&mut self, kind: NoticeKind, err: &ApiError) {
        warn!(error = %err, ?kind, "note store call failed");
        self.notice = Some(Notice {
            kind,
            message: err.to_string(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
