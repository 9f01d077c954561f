use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, Input, ListGroup, ListGroupItem, Spinner, Textarea,
};
use crate::models::NoteId;
use crate::panel::{delete_note, save_note, NotePanel};
use crate::state::AppContext;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-md flex-col justify-center px-4 py-12">
                <Card>
                    <CardHeader>
                        <CardTitle class="text-xl">"Note Taker"</CardTitle>
                    </CardHeader>
                    <CardContent class="flex flex-col gap-4">
                        <p class="text-sm text-muted-foreground">
                            "Write a note, save it, read it back later."
                        </p>
                        <a
                            href="/notes"
                            class="inline-flex h-9 items-center justify-center rounded-md bg-primary px-4 text-sm font-medium text-primary-foreground hover:bg-primary/90"
                        >
                            "Get Started"
                        </a>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let panel = app_state.0.panel;
    let api_client = app_state.0.api_client;

    let save_visible = move || panel.with(|p| p.form().save_visible);

    let on_save = move |_| {
        let client = api_client.get_untracked();
        spawn_local(async move {
            save_note(&panel, &client).await;
        });
    };

    let on_new_note = move |_| panel.update(NotePanel::new_note);

    view! {
        <div class="min-h-screen bg-background">
            <nav class="border-b">
                <div class="mx-auto flex w-full max-w-[1080px] items-center justify-between px-4 py-3">
                    <a href="/" class="text-sm font-medium text-foreground">"Note Taker"</a>

                    <div class="flex items-center gap-2">
                        <Show when=save_visible fallback=|| ().into_view()>
                            <Button class="save-note" attr:title="Save Note" on:click=on_save>
                                "Save"
                            </Button>
                        </Show>

                        <Button
                            variant=ButtonVariant::Outline
                            class="new-note"
                            attr:title="New Note"
                            on:click=on_new_note
                        >
                            "New note"
                        </Button>
                    </div>
                </div>
            </nav>

            <div class="mx-auto w-full max-w-[1080px] space-y-4 px-4 py-6">
                <NoticeBanner />

                <div class="grid gap-4 md:grid-cols-[320px_1fr]">
                    <NoteList />
                    <NoteDetail />
                </div>
            </div>
        </div>
    }
}

#[component]
fn NoticeBanner() -> impl IntoView {
    let panel = expect_context::<AppContext>().0.panel;

    view! {
        {move || {
            panel.with(|p| p.notice().cloned()).map(|notice| view! {
                <Alert class="border-destructive/30">
                    <AlertDescription class="text-destructive">{notice.message}</AlertDescription>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Sm
                        on:click=move |_| panel.update(NotePanel::dismiss_notice)
                    >
                        "Dismiss"
                    </Button>
                </Alert>
            })
        }}
    }
}

#[component]
fn NoteList() -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let panel = app_state.0.panel;
    let api_client = app_state.0.api_client;

    // Keystrokes in the form update the panel too; only rebuild rows when the list changed.
    let entries = Memo::new(move |_| panel.with(|p| p.list().entries().to_vec()));

    let view_note = move |index: usize| {
        panel.update(|p| {
            p.view_note(index);
        });
    };

    let remove_note = move |id: NoteId| {
        let client = api_client.get_untracked();
        spawn_local(async move {
            delete_note(&panel, &client, id).await;
        });
    };

    view! {
        <Card class="py-4">
            <CardHeader>
                <CardTitle class="text-sm">"Notes"</CardTitle>
                <Show when=move || panel.with(|p| p.is_loading()) fallback=|| ().into_view()>
                    <Spinner />
                </Show>
            </CardHeader>

            <CardContent>
                <ListGroup class="list-container">
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| {
                                let label = entry.label().to_string();
                                let Some(id) = entry.note_id().cloned() else {
                                    return view! {
                                        <ListGroupItem class="text-muted-foreground">{label}</ListGroupItem>
                                    }
                                    .into_any();
                                };

                                view! {
                                    <ListGroupItem
                                        class="note-entry cursor-pointer transition-colors hover:bg-accent"
                                        on:click=move |ev: web_sys::MouseEvent| {
                                            ev.prevent_default();
                                            view_note(index);
                                        }
                                    >
                                        <span class="flex-1 truncate">{label}</span>

                                        <Button
                                            variant=ButtonVariant::Ghost
                                            size=ButtonSize::Icon
                                            class="delete-note h-7 w-7 text-destructive"
                                            attr:title="Delete"
                                            on:click=move |ev: web_sys::MouseEvent| {
                                                // The row itself is clickable; keep this from also selecting it.
                                                ev.stop_propagation();
                                                remove_note(id.clone());
                                            }
                                        >
                                            <svg
                                                xmlns="http://www.w3.org/2000/svg"
                                                width="16"
                                                height="16"
                                                viewBox="0 0 24 24"
                                                fill="none"
                                                stroke="currentColor"
                                                stroke-width="2"
                                                stroke-linecap="round"
                                                stroke-linejoin="round"
                                                aria-hidden="true"
                                            >
                                                <path d="M3 6h18" />
                                                <path d="M8 6V4h8v2" />
                                                <path d="M19 6l-1 14H6L5 6" />
                                            </svg>
                                        </Button>
                                    </ListGroupItem>
                                }
                                .into_any()
                            })
                            .collect_view()
                    }}
                </ListGroup>
            </CardContent>
        </Card>
    }
}

#[component]
fn NoteDetail() -> impl IntoView {
    let panel = expect_context::<AppContext>().0.panel;

    let title = Signal::derive(move || panel.with(|p| p.form().title.clone()));
    let text = Signal::derive(move || panel.with(|p| p.form().text.clone()));
    let readonly = Signal::derive(move || panel.with(|p| p.form().readonly));

    let on_title = Callback::new(move |v: String| panel.update(|p| p.set_title(&v)));
    let on_text = Callback::new(move |v: String| panel.update(|p| p.set_text(&v)));

    view! {
        <Card class="py-4">
            <CardContent class="flex flex-col gap-3">
                <Input
                    class="note-title"
                    placeholder="Note Title"
                    value=title
                    readonly=readonly
                    on_input=on_title
                    attr:maxlength="28"
                />
                <Textarea
                    class="note-textarea"
                    placeholder="Note Text"
                    value=text
                    readonly=readonly
                    on_input=on_text
                />
            </CardContent>
        </Card>
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::api::EnvConfig;
    use crate::models::Note;
    use crate::panel::ActiveNote;
    use crate::state::AppState;
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    fn seeded_state() -> (AppState, Vec<Note>) {
        let notes: Vec<Note> = serde_json::from_str(
            r#"[{"id": 1, "title": "keep", "text": "a"}, {"id": 2, "title": "other", "text": "b"}]"#,
        )
        .expect("seed notes");

        let state = AppState::new(&EnvConfig {
            api_url: "http://127.0.0.1:9".to_string(),
            log_level: "info".to_string(),
        });
        let seed = notes.clone();
        state.panel.update(move |p| {
            p.begin_fetch();
            p.finish_fetch(Ok(seed));
        });
        (state, notes)
    }

    fn host() -> HtmlElement {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("document");
        let host = document.create_element("div").expect("create host");
        document
            .body()
            .expect("body")
            .append_child(&host)
            .expect("attach host");
        host.unchecked_into()
    }

    fn click(host: &HtmlElement, selector: &str) {
        host.query_selector(selector)
            .expect("valid selector")
            .unwrap_or_else(|| panic!("no element for {selector}"))
            .unchecked_into::<HtmlElement>()
            .click();
    }

    #[wasm_bindgen_test]
    fn test_delete_click_does_not_select_row() {
        let (state, notes) = seeded_state();
        let panel = state.panel;
        let host = host();
        let _handle = mount_to(host.clone(), move || {
            provide_context(AppContext(state));
            view! { <NoteList /> }
        });

        assert_eq!(host.query_selector_all(".note-entry").expect("rows").length(), 2);

        click(&host, ".delete-note");
        assert_eq!(panel.with_untracked(|p| p.active().clone()), ActiveNote::Empty);

        // The row itself still selects.
        click(&host, ".note-entry:nth-child(2) span");
        assert_eq!(
            panel.with_untracked(|p| p.active().clone()),
            ActiveNote::Viewing(notes[1].clone())
        );
    }
}
