use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {CardHeader, div, "flex items-center justify-between gap-2 px-6"}
    clx! {CardTitle, h2, "leading-none font-semibold"}
    clx! {CardContent, div, "px-6"}

    // Note list container and its rows.
    clx! {ListGroup, ul, "list-group flex flex-col divide-y rounded-md border"}
    clx! {ListGroupItem, li, "list-group-item flex items-center gap-2 px-4 py-2 text-sm"}
}

pub use components::*;
