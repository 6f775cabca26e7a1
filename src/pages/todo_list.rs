//! Todo list page.

use leptos::prelude::*;
use crud_core::domain::Todo;

use super::list_page;

#[component]
pub fn TodoListPage() -> impl IntoView {
    list_page::<Todo>("Todos", true)
}
