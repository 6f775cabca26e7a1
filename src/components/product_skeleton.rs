//! Placeholder card shown while products load.

use leptos::prelude::*;

/// Number of skeleton cards rendered during a fetch
pub const SKELETON_COUNT: usize = 8;

#[component]
pub fn ProductSkeleton() -> impl IntoView {
    view! {
        <div class="product-card skeleton">
            <div class="skeleton-image"></div>
            <div class="skeleton-line wide"></div>
            <div class="skeleton-line narrow"></div>
        </div>
    }
}
