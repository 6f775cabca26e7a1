//! Startup configuration
//!
//! Reads the backend base URL from the page, falling back to the build
//! environment.

use crud_core::config::{ApiConfig, META_NAME};

/// Resolve the API settings once at startup
pub fn load_config() -> ApiConfig {
    let meta = read_meta(META_NAME);
    let config = ApiConfig::resolve(meta.as_deref(), option_env!("CRUD_API_BASE_URL"));
    log::info!("[config] API base URL: {}", config.base_url);
    config
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", name);
    document.query_selector(&selector).ok()??.get_attribute("content")
}
