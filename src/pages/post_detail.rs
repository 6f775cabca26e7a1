//! Post detail page: edit title and body, or delete.

use leptos::prelude::*;

use crud_core::domain::Post;
use crud_core::forms::{EditForm, PostForm};
use crud_core::Navigation;
use leptos_query::{use_mutation, use_mutation_with};

use super::{use_detail_query, use_id_param};
use crate::commands::{self, entity_keys};
use crate::components::{EditActions, ErrorMessage, LoadingMessage};
use crate::context::{use_api, use_navigation};

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigation();
    let id = use_id_param();
    let post = use_detail_query::<Post>(id);

    let form = RwSignal::new(PostForm::default());
    Effect::new(move |_| {
        if let Some(fetched) = post.data() {
            form.set(PostForm::sync(&fetched));
        }
    });

    let update = use_mutation(entity_keys::<Post>(), {
        let api = api.clone();
        move |(id, form): &(u32, PostForm)| commands::update_entity::<Post, _>(api.clone(), *id, form.clone())
    });
    let delete = use_mutation_with(commands::settle_delete::<Post>, move |id: &u32| {
        commands::delete_entity::<Post>(api.clone(), *id)
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
        if post.is_loading() {
            return view! { <LoadingMessage message="Loading post details..." /> }.into_any();
        }
        if post.error().is_some() {
            return view! { <ErrorMessage message="Error fetching post details." /> }.into_any();
        }

        view! {
            <div class="page-card">
                <h1 class="page-title">"Edit Post"</h1>
                <input
                    type="text"
                    class="form-input"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| {
                        let title = event_target_value(&ev);
                        form.update(|f| f.title = title);
                    }
                />
                <textarea
                    class="form-input"
                    rows="4"
                    prop:value=move || form.with(|f| f.body.clone())
                    on:input=move |ev| {
                        let body = event_target_value(&ev);
                        form.update(|f| f.body = body);
                    }
                ></textarea>
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
