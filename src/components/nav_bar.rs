//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::AppContext;

const LINKS: &[(&str, &str)] = &[
    ("/product", "Products"),
    ("/recipes", "Recipes"),
    ("/posts", "Posts"),
    ("/comments", "Comments"),
    ("/todos", "Todos"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <nav class="nav-bar" title=format!("API: {}", ctx.config.base_url)>
            <span class="nav-brand">"CRUD Pages"</span>
            <ul class="nav-links">
                {LINKS.iter().map(|(href, label)| view! {
                    <li><A href=*href>{*label}</A></li>
                }).collect_view()}
            </ul>
        </nav>
    }
}
