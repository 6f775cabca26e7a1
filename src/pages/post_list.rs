//! Post list page.

use leptos::prelude::*;
use crud_core::domain::Post;

use super::list_page;

#[component]
pub fn PostListPage() -> impl IntoView {
    list_page::<Post>("Posts", true)
}
