//! Recipe list page.
//!
//! Recipes have no detail screen, so rows are not links.

use leptos::prelude::*;
use crud_core::domain::Recipe;

use super::list_page;

#[component]
pub fn RecipeListPage() -> impl IntoView {
    view! {
        <div class="page-actions">
            <a href="/recipes/add" class="btn btn-primary">"+ Add Recipe"</a>
        </div>
        {list_page::<Recipe>("Recipes", false)}
    }
}
