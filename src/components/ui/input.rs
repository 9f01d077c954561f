use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

pub(crate) const FIELD_CLASS: &str = "placeholder:text-muted-foreground selection:bg-primary selection:text-primary-foreground border-input w-full min-w-0 rounded-md border bg-transparent px-3 py-1 text-base shadow-xs transition-[color,box-shadow] outline-none focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2 read-only:bg-muted read-only:cursor-default md:text-sm";

/// Single-line text field driven by external state.
///
/// The value is not owned here: every keystroke is reported through
/// `on_input`, and whatever `value` yields afterwards is what is shown.
#[component]
pub fn Input(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,

    #[prop(into)] value: Signal<String>,
    #[prop(into)] readonly: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!("flex h-9", FIELD_CLASS, class);

    let handle_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(input) = target.dyn_ref::<web_sys::HtmlInputElement>() {
                on_input.run(input.value());
            }
        }
    };

    view! {
        <input
            data-name="Input"
            type="text"
            class=merged_class
            placeholder=placeholder
            id=id
            readonly=move || readonly.get()
            prop:value=move || value.get()
            on:input=handle_input
        />
    }
}
