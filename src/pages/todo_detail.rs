//! Todo detail page: edit text and completion, or delete.

use leptos::prelude::*;

use crud_core::domain::Todo;
use crud_core::forms::{EditForm, TodoForm};
use crud_core::Navigation;
use leptos_query::{use_mutation, use_mutation_with};

use super::{use_detail_query, use_id_param};
use crate::commands::{self, entity_keys};
use crate::components::{EditActions, ErrorMessage, LoadingMessage};
use crate::context::{use_api, use_navigation};

#[component]
pub fn TodoDetailPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigation();
    let id = use_id_param();
    let todo = use_detail_query::<Todo>(id);

    // Local form state, re-synced whenever the fetch resolves
    let form = RwSignal::new(TodoForm::default());
    Effect::new(move |_| {
        if let Some(fetched) = todo.data() {
            form.set(TodoForm::sync(&fetched));
        }
    });

    let update = use_mutation(entity_keys::<Todo>(), {
        let api = api.clone();
        move |(id, form): &(u32, TodoForm)| commands::update_entity::<Todo, _>(api.clone(), *id, form.clone())
    });
    let delete = use_mutation_with(commands::settle_delete::<Todo>, move |id: &u32| {
        commands::delete_entity::<Todo>(api.clone(), *id)
    });

    update.on_success({
        let navigate = navigate.clone();
        move |nav: &Navigation| navigate(nav)
    });
    delete.on_success(move |nav: &Option<Navigation>| {
        if let Some(nav) = nav {
            navigate(nav);
        }
    });

    let on_save = move |_: ()| {
        if let Some(id) = id.get_untracked() {
            update.dispatch((id, form.get_untracked()));
        }
    };
    let on_delete = move |_: ()| {
        if let Some(id) = id.get_untracked() {
            delete.dispatch(id);
        }
    };

    move || {
        if todo.is_loading() {
            return view! { <LoadingMessage message="Loading todo details..." /> }.into_any();
        }
        if todo.error().is_some() {
            return view! { <ErrorMessage message="Error fetching todo details." /> }.into_any();
        }

        view! {
            <div class="page-card">
                <h1 class="page-title">"Edit Todo"</h1>
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || form.with(|f| f.text.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.text = text);
                    }
                />
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || form.with(|f| f.completed)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            form.update(|f| f.completed = checked);
                        }
                    />
                    <span>"Completed"</span>
                </label>
                {move || {
                    update
                        .error()
                        .or_else(|| delete.error())
                        .map(|err| view! { <p class="form-error">{err.to_string()}</p> })
                }}
                <EditActions
                    saving=Signal::derive(move || update.pending())
                    deleting=Signal::derive(move || delete.pending())
                    on_save=on_save
                    on_delete=on_delete
                />
            </div>
        }
        .into_any()
    }
}
