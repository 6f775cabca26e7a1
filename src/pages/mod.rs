//! Page components.

mod add_recipe;
mod recipe_list;
mod comment_detail;
mod comment_list;
mod post_detail;
mod post_list;
mod todo_detail;
mod todo_list;
mod product_list;
mod product_detail;
mod add_product;
mod not_found;

pub use add_recipe::AddRecipePage;
pub use recipe_list::RecipeListPage;
pub use comment_detail::CommentDetailPage;
pub use comment_list::CommentListPage;
pub use post_detail::PostDetailPage;
pub use post_list::PostListPage;
pub use todo_detail::TodoDetailPage;
pub use todo_list::TodoListPage;
pub use product_list::ProductListPage;
pub use product_detail::ProductDetailPage;
pub use add_product::AddProductPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crud_core::{ApiError, Entity};
use leptos_query::{use_query, Query};

use crate::commands::{self, list_key};
use crate::components::{EntityList, ErrorMessage, ListRow, LoadingMessage};
use crate::context::use_api;

/// Numeric `:id` route parameter; `None` when missing or malformed
fn use_id_param() -> Memo<Option<u32>> {
    let params = use_params_map();
    Memo::new(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok())))
}

/// Fetch the `:id` entity of the current route; disabled without an id
fn use_detail_query<E: Entity>(id: Memo<Option<u32>>) -> Query<E, ApiError> {
    let api = use_api();
    use_query(
        move || id.get(),
        |id: &u32| commands::detail_key::<E>(*id),
        move |id| commands::fetch_detail::<E>(api.clone(), id),
    )
}

/// Fetch the whole collection of `E`
fn use_list_query<E: Entity>() -> Query<Vec<E>, ApiError> {
    let api = use_api();
    use_query(
        || Some(()),
        |_: &()| list_key::<E>(),
        move |_| commands::fetch_list::<E>(api.clone()),
    )
}

/// Summaries for `EntityList`, linking to detail routes when `linked`
fn list_rows<E: Entity>(items: &[E], linked: bool) -> Vec<ListRow> {
    items
        .iter()
        .map(|item| ListRow {
            id: item.id(),
            label: item.summary(),
            href: linked.then(|| E::detail_route(item.id())),
        })
        .collect()
}

/// Shared body of the plain list pages
fn list_page<E: Entity>(title: &'static str, linked: bool) -> impl IntoView {
    let list = use_list_query::<E>();
    let rows = Signal::derive(move || {
        list.data()
            .map(|items| list_rows(&items, linked))
            .unwrap_or_default()
    });

    view! {
        <div class="page-card">
            <h1 class="page-title">{title}</h1>
            {move || {
                if list.is_loading() {
                    view! { <LoadingMessage message=format!("Loading {}s...", E::NAME) /> }.into_any()
                } else if list.error().is_some() && list.data().is_none() {
                    view! { <ErrorMessage message=format!("Error fetching {}s.", E::NAME) /> }.into_any()
                } else {
                    view! { <EntityList rows=rows /> }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crud_core::domain::{Comment, Post};

    #[test]
    fn test_list_rows_link_to_detail_routes() {
        let posts = vec![
            Post { id: 3, title: "Hello".into(), body: String::new() },
            Post { id: 7, title: "World".into(), body: String::new() },
        ];
        let rows = list_rows(&posts, true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, 3);
        assert_eq!(rows[0].label, posts[0].summary());
        assert_eq!(rows[0].href.as_deref(), Some("/post/3"));
        assert_eq!(rows[1].href.as_deref(), Some("/post/7"));
    }

    #[test]
    fn test_list_rows_without_links() {
        let comments = vec![Comment { id: 1, body: "Nice".into() }];
        let rows = list_rows(&comments, false);
        assert_eq!(rows[0].href, None);
    }
}
