//! Add recipe page.
//!
//! Ingredients are typed one per line and sent as an ordered list.

use leptos::prelude::*;

use crud_core::domain::Recipe;
use crud_core::forms::RecipeForm;
use crud_core::Navigation;
use leptos_query::use_mutation;

use crate::commands::{self, entity_keys};
use crate::components::PendingOverlay;
use crate::context::{use_api, use_navigation};

#[component]
pub fn AddRecipePage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigation();
    let form = RwSignal::new(RecipeForm::default());

    let create = use_mutation(entity_keys::<Recipe>(), move |form: &RecipeForm| {
        commands::create_entity::<Recipe, _>(api.clone(), form.clone())
    });
    create.on_success(move |nav: &Navigation| navigate(nav));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        create.dispatch(form.get_untracked());
    };

    view! {
        <form class="page-card form-card" on:submit=on_submit>
            <Show when=move || create.pending()>
                <PendingOverlay message="Adding Recipe..." />
            </Show>

            <h2 class="page-title">"Add Your Recipe"</h2>

            <div class="form-field">
                <label>"Recipe Title"</label>
                <input
                    type="text"
                    class="form-input"
                    required=true
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        form.update(|f| f.title = title);
                    }
                />
            </div>

            <div class="form-field">
                <label>"Description"</label>
                <textarea
                    class="form-input"
                    rows="4"
                    required=true
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        form.update(|f| f.description = description);
                    }
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Ingredients (one per line)"</label>
                <textarea
                    class="form-input"
                    rows="6"
                    required=true
                    prop:value=move || form.with(|f| f.ingredients_text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.ingredients_text = text);
                    }
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Instructions"</label>
                <textarea
                    class="form-input"
                    rows="6"
                    required=true
                    prop:value=move || form.with(|f| f.instructions.clone())
                    on:input=move |ev| {
                        let instructions = event_target_value(&ev);
                        form.update(|f| f.instructions = instructions);
                    }
                ></textarea>
            </div>

            {move || create.error().map(|err| view! { <p class="form-error">{err.to_string()}</p> })}

            <button type="submit" class="btn btn-primary wide" disabled=move || create.pending()>
                "Submit Recipe"
            </button>
        </form>
    }
}
