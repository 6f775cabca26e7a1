//! Comment list page.

use leptos::prelude::*;
use crud_core::domain::Comment;

use super::list_page;

#[component]
pub fn CommentListPage() -> impl IntoView {
    list_page::<Comment>("Comments", true)
}
