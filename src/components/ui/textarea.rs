use super::input::FIELD_CLASS;
use leptos::prelude::*;
use tw_merge::tw_merge;
use wasm_bindgen::JsCast;

/// Multi-line counterpart of [`super::Input`], same controlled-value contract.
#[component]
pub fn Textarea(
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] placeholder: String,
    #[prop(into, optional)] id: String,

    #[prop(into)] value: Signal<String>,
    #[prop(into)] readonly: Signal<bool>,
    on_input: Callback<String>,
) -> impl IntoView {
    let merged_class = tw_merge!("min-h-64 py-2 resize-y", FIELD_CLASS, class);

    let handle_input = move |ev: web_sys::Event| {
        if let Some(target) = ev.target() {
            if let Some(area) = target.dyn_ref::<web_sys::HtmlTextAreaElement>() {
                on_input.run(area.value());
            }
        }
    };

    view! {
        <textarea
            data-name="Textarea"
            class=merged_class
            placeholder=placeholder
            id=id
            readonly=move || readonly.get()
            prop:value=move || value.get()
            on:input=handle_input
        ></textarea>
    }
}
