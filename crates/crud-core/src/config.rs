//! API Configuration
//!
//! Resolves the REST base URL from, in order: the page's
//! `<meta name="api-base-url">`, the `CRUD_API_BASE_URL` build variable,
//! and a built-in default.

/// Used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

/// Name of the meta tag read at startup
pub const META_NAME: &str = "api-base-url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string() }
    }
}

impl ApiConfig {
    /// Pick the first non-blank source and normalize it
    pub fn resolve(meta: Option<&str>, env: Option<&str>) -> Self {
        let chosen = [meta, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self {
            base_url: chosen.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for a REST path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_wins_over_env() {
        let config = ApiConfig::resolve(Some("https://api.local/"), Some("https://env.local"));
        assert_eq!(config.base_url, "https://api.local");
    }

    #[test]
    fn test_blank_sources_fall_through() {
        let config = ApiConfig::resolve(Some("  "), None);
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::resolve(None, Some("http://localhost:3000//"));
        assert_eq!(config.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_url_for_joins_single_slash() {
        let config = ApiConfig::resolve(Some("http://localhost:3000/api/"), None);
        assert_eq!(config.url_for("/todos/1"), "http://localhost:3000/api/todos/1");
        assert_eq!(config.url_for("product"), "http://localhost:3000/api/product");
    }
}
