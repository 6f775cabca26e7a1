//! Edit Actions Component
//!
//! Save / delete button row shared by the detail editors.

use leptos::prelude::*;

/// Save and delete buttons
///
/// Deletion is confirmed by the delete command itself, so `on_delete` runs
/// on every click.
///
/// # Arguments
/// * `saving` / `deleting` - pending flags; the matching button is disabled and relabelled
/// * `on_save` / `on_delete` - click callbacks
#[component]
pub fn EditActions(
    #[prop(into)] saving: Signal<bool>,
    #[prop(into)] deleting: Signal<bool>,
    #[prop(into)] on_save: Callback<()>,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="edit-actions">
            <button
                class="btn btn-save"
                disabled=move || saving.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    on_save.run(());
                }
            >
                {move || if saving.get() { "Saving..." } else { "💾 Save" }}
            </button>
            <button
                class="btn btn-delete"
                disabled=move || deleting.get()
                on:click=move |ev| {
                    ev.prevent_default();
                    on_delete.run(());
                }
            >
                {move || if deleting.get() { "Deleting..." } else { "❌ Delete" }}
            </button>
        </div>
    }
}
