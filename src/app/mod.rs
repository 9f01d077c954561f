use crate::pages::{LandingPage, NotesPage};
use crate::panel::refresh_notes;
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(state: AppState) -> impl IntoView {
    let panel = state.panel;
    let client = state.api_client.get_untracked();
    provide_context(AppContext(state));

    // Fetched once at startup whatever the route; only /notes shows the result.
    spawn_local(async move {
        refresh_notes(&panel, &client).await;
    });

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("notes") view=NotesPage />
                <Route path=path!("") view=LandingPage />
            </Routes>
        </Router>
    }
}
