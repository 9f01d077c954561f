use super::{NoticeKind, NotePanel};
use crate::api::{ApiResult, NoteStore};
use crate::models::{Note, NoteId};
use leptos::prelude::*;
use tracing::{debug, warn};

/// Somewhere the panel state lives between awaits.
///
/// The async flows below never hold a borrow across a remote call: they read
/// or mutate the panel in short closures, so other handlers can run while a
/// request is in flight. `None` means the owner is gone (e.g. a disposed signal).
pub(crate) trait PanelCell {
    fn update_panel<R>(&self, f: impl FnOnce(&mut NotePanel) -> R) -> Option<R>;
    fn read_panel<R>(&self, f: impl FnOnce(&NotePanel) -> R) -> Option<R>;
}

impl PanelCell for RwSignal<NotePanel> {
    fn update_panel<R>(&self, f: impl FnOnce(&mut NotePanel) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn read_panel<R>(&self, f: impl FnOnce(&NotePanel) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

/// `list_notes` with a single automatic retry on transient failures.
pub(crate) async fn fetch_notes<S: NoteStore>(store: &S) -> ApiResult<Vec<Note>> {
    match store.list_notes().await {
        Err(e) if e.is_transient() => {
            warn!(error = %e, "listing notes failed; retrying once");
            store.list_notes().await
        }
        other => other,
    }
}

/// Re-fetch the whole collection and rebuild the list.
///
/// Overlapping refreshes are not coordinated: whichever response lands last
/// decides what the list shows.
pub(crate) async fn refresh_notes<P: PanelCell, S: NoteStore>(panel: &P, store: &S) {
    panel.update_panel(NotePanel::begin_fetch);
    let result = fetch_notes(store).await;
    panel.update_panel(|p| p.finish_fetch(result));
}

/// Mutations never patch the list locally; the store's answer replaces it.
async fn after_mutation<P: PanelCell, S: NoteStore>(panel: &P, store: &S) {
    panel.update_panel(NotePanel::render_active_note);
    refresh_notes(panel, store).await;
}

pub(crate) async fn save_note<P: PanelCell, S: NoteStore>(panel: &P, store: &S) {
    let Some(Some(draft)) = panel.read_panel(NotePanel::draft) else {
        debug!("save requested but not offered; ignoring");
        return;
    };

    if let Err(e) = store.save_note(&draft).await {
        panel.update_panel(|p| p.report(NoticeKind::ChangeFailed, &e));
    }

    after_mutation(panel, store).await;
}

pub(crate) async fn delete_note<P: PanelCell, S: NoteStore>(panel: &P, store: &S, id: NoteId) {
    panel.update_panel(|p| p.begin_delete(&id));

    if let Err(e) = store.delete_note(&id).await {
        panel.update_panel(|p| p.report(NoticeKind::ChangeFailed, &e));
    }

    after_mutation(panel, store).await;
}
