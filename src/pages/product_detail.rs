//! Product detail page.
//!
//! There is no single-product endpoint; the product is looked up in the
//! cached list, which is fetched first if needed.

use leptos::prelude::*;

use crud_core::domain::Product;

use super::{use_id_param, use_list_query};
use crate::components::{ErrorMessage, LoadingMessage};

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let id = use_id_param();
    let products = use_list_query::<Product>();

    let product = Memo::new(move |_| {
        let id = id.get()?;
        products
            .data()
            .map(|list| Product::find_in(&list, id))
    });

    move || {
        if products.is_loading() {
            return view! { <LoadingMessage message="Loading product details..." /> }.into_any();
        }
        match product.get() {
            Some(Ok(product)) => {
                let price = product.display_price();
                view! {
                    <div class="page-card product-detail">
                        <img src=product.thumbnail alt=product.title.clone() class="product-image large" />
                        <h1 class="page-title">{product.title}</h1>
                        <p class="product-description">{product.description}</p>
                        <p class="product-price">{price}</p>
                        <a href="/product" class="btn btn-secondary">"Back to products"</a>
                    </div>
                }
                .into_any()
            }
            Some(Err(_)) => view! { <ErrorMessage message="Product not found." /> }.into_any(),
            None => view! { <ErrorMessage message="Error fetching product details." /> }.into_any(),
        }
    }
}
