//! Entity List Component
//!
//! Plain list of entity summaries, optionally linking to detail pages.

use leptos::prelude::*;
use leptos_router::components::A;

/// One row: label plus optional detail route
#[derive(Clone, Debug, PartialEq)]
pub struct ListRow {
    pub id: u32,
    pub label: String,
    pub href: Option<String>,
}

#[component]
pub fn EntityList(#[prop(into)] rows: Signal<Vec<ListRow>>) -> impl IntoView {
    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <p class="empty-list">"Nothing here yet."</p> }
        >
            <ul class="entity-list">
                <For
                    each=move || rows.get()
                    key=|row| (row.id, row.label.clone())
                    children=move |row| {
                        let ListRow { label, href, .. } = row;
                        match href {
                            Some(href) => view! { <li><A href=href>{label}</A></li> }.into_any(),
                            None => view! { <li>{label}</li> }.into_any(),
                        }
                    }
                />
            </ul>
        </Show>
    }
}
