//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crud_core::{ApiConfig, Navigation};
use crate::commands::HttpTransport;

/// App-wide handles provided via context
#[derive(Clone)]
pub struct AppContext {
    /// Transport every command goes through
    pub api: HttpTransport,
    /// Resolved backend settings, kept for display
    pub config: ApiConfig,
}

impl AppContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: HttpTransport::new(config.clone()),
            config,
        }
    }
}

/// Transport from the app context
pub fn use_api() -> HttpTransport {
    expect_context::<AppContext>().api
}

/// Perform the navigation a mutation asked for
pub fn use_navigation() -> impl Fn(&Navigation) + Clone + 'static {
    let navigate = use_navigate();
    move |nav: &Navigation| {
        log::debug!("[nav] {} (replace={})", nav.path, nav.replace);
        navigate(
            &nav.path,
            NavigateOptions {
                replace: nav.replace,
                ..Default::default()
            },
        );
    }
}
