//! CRUD Pages Frontend App
//!
//! Root component: context providers and the route table.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use leptos_query::provide_query_client;

use crate::components::NavBar;
use crate::config::load_config;
use crate::context::AppContext;
use crate::pages::{
    AddProductPage, AddRecipePage, CommentDetailPage, CommentListPage, NotFoundPage,
    PostDetailPage, PostListPage, ProductDetailPage, ProductListPage, RecipeListPage,
    TodoDetailPage, TodoListPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(load_config()));
    provide_query_client();

    view! {
        <Router>
            <div class="app-layout">
                <NavBar />
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage /> }>
                        <Route path=path!("/") view=ProductListPage />
                        <Route path=path!("/recipes") view=RecipeListPage />
                        <Route path=path!("/recipes/add") view=AddRecipePage />
                        <Route path=path!("/comments") view=CommentListPage />
                        <Route path=path!("/comments/:id") view=CommentDetailPage />
                        <Route path=path!("/posts") view=PostListPage />
                        <Route path=path!("/post/:id") view=PostDetailPage />
                        <Route path=path!("/todos") view=TodoListPage />
                        <Route path=path!("/todos/:id") view=TodoDetailPage />
                        <Route path=path!("/product") view=ProductListPage />
                        <Route path=path!("/product/add") view=AddProductPage />
                        <Route path=path!("/product/:id") view=ProductDetailPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
