//! Add product page.

use leptos::prelude::*;

use crud_core::domain::Product;
use crud_core::forms::ProductForm;
use crud_core::Navigation;
use leptos_query::use_mutation;

use crate::commands::{self, entity_keys};
use crate::components::PendingOverlay;
use crate::context::{use_api, use_navigation};

#[component]
pub fn AddProductPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigation();
    let form = RwSignal::new(ProductForm::default());

    let create = use_mutation(entity_keys::<Product>(), move |form: &ProductForm| {
        commands::create_entity::<Product, _>(api.clone(), form.clone())
    });
    create.on_success(move |nav: &Navigation| navigate(nav));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        create.dispatch(form.get_untracked());
    };

    view! {
        <form class="page-card form-card" on:submit=on_submit>
            <Show when=move || create.pending()>
                <PendingOverlay message="Adding Product..." />
            </Show>

            <h2 class="page-title">"Add Product"</h2>

            <div class="form-field">
                <label>"Title"</label>
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
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| {
                        let description = event_target_value(&ev);
                        form.update(|f| f.description = description);
                    }
                ></textarea>
            </div>

            <div class="form-field">
                <label>"Price"</label>
                <input
                    type="text"
                    inputmode="decimal"
                    class="form-input"
                    required=true
                    prop:value=move || form.with(|f| f.price_text.clone())
                    on:input=move |ev| {
                        let price = event_target_value(&ev);
                        form.update(|f| f.price_text = price);
                    }
                />
            </div>

            <div class="form-field">
                <label>"Thumbnail URL"</label>
                <input
                    type="url"
                    class="form-input"
                    prop:value=move || form.with(|f| f.thumbnail.clone())
                    on:input=move |ev| {
                        let thumbnail = event_target_value(&ev);
                        form.update(|f| f.thumbnail = thumbnail);
                    }
                />
            </div>

            {move || create.error().map(|err| view! { <p class="form-error">{err.to_string()}</p> })}

            <button type="submit" class="btn btn-primary wide" disabled=move || create.pending()>
                "Add Product"
            </button>
        </form>
    }
}
