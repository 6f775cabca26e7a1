//! Product list page: card grid with skeletons while fetching.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crud_core::domain::Product;

use super::use_list_query;
use crate::components::{ErrorMessage, ProductSkeleton, SKELETON_COUNT};

#[component]
pub fn ProductListPage() -> impl IntoView {
    let products = use_list_query::<Product>();
    let navigate = use_navigate();

    let open_add = move |_| navigate("/product/add", Default::default());

    view! {
        <div class="page-container">
            <button class="fab" title="Add product" on:click=open_add>"+"</button>

            <div class="page-card">
                <h2 class="page-title">"Featured Products"</h2>
                {move || {
                    if products.is_fetching() {
                        return view! {
                            <div class="product-grid">
                                {(0..SKELETON_COUNT).map(|_| view! { <ProductSkeleton /> }).collect_view()}
                            </div>
                        }
                        .into_any();
                    }
                    if products.error().is_some() && products.data().is_none() {
                        return view! { <ErrorMessage message="Error fetching products." /> }.into_any();
                    }

                    view! {
                        <div class="product-grid">
                            {products
                                .data()
                                .unwrap_or_default()
                                .into_iter()
                                .map(|product| {
                                    let href = format!("/product/{}", product.id);
                                    let price = product.display_price();
                                    view! {
                                        <a class="product-card" href=href>
                                            <img src=product.thumbnail alt=product.title.clone() class="product-image" />
                                            <div class="product-body">
                                                <h3>{product.title}</h3>
                                                <p class="product-description">{product.description}</p>
                                                <p class="product-price">{price}</p>
                                            </div>
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
