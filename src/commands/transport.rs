//! Browser Transport
//!
//! Sends repository requests with `fetch` through gloo-net.

use std::sync::Arc;

use async_trait::async_trait;
use gloo_net::http::Request;

use crud_core::repository::{ApiRequest, ApiResponse, Confirm, Method, Transport};
use crud_core::{ApiConfig, ApiError, ApiResult};

/// HTTP transport bound to the configured base URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    config: Arc<ApiConfig>,
}

impl HttpTransport {
    pub fn new(config: ApiConfig) -> Self {
        Self { config: Arc::new(config) }
    }
}

fn network_error(url: &str, err: gloo_net::Error) -> ApiError {
    log::warn!("[api] {} failed: {}", url, err);
    ApiError::Network(err.to_string())
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let url = self.config.url_for(&request.path);
        log::debug!("[api] {} {}", request.method.as_str(), url);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        let sent = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| network_error(&url, e))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| network_error(&url, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| network_error(&url, e))?;
        Ok(ApiResponse { status, body })
    }
}

/// `window.confirm` prompt; a missing window counts as "no"
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
