//! Loading and error placeholders.

use leptos::prelude::*;

/// Centered message shown while a page's first fetch is in flight
#[component]
pub fn LoadingMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-screen">
            <div class="spinner"></div>
            <h2 class="status-text">{message}</h2>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="status-screen">
            <p class="status-text error">{message}</p>
        </div>
    }
}

/// Translucent overlay over a form while it submits
#[component]
pub fn PendingOverlay(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="pending-overlay">
            <span class="pending-pill">{message}</span>
        </div>
    }
}
