use crate::api::{ApiClient, EnvConfig};
use crate::panel::NotePanel;
use leptos::prelude::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Selection, detail form and rendered list for the notes view.
    pub panel: RwSignal<NotePanel>,
}

impl AppState {
    pub fn new(config: &EnvConfig) -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env(config)),
            panel: RwSignal::new(NotePanel::new()),
        }
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
