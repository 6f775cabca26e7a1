//! REST Repository Implementation
//!
//! One generic implementation serves every entity; paths and envelope
//! names come from the `Entity` impl.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::traits::Repository;
use super::transport::{ApiRequest, Transport};
use crate::domain::{ApiError, ApiResult, Entity};

/// Repository for entity `E` over transport `T`
#[derive(Debug, Clone)]
pub struct RestRepository<E, T> {
    transport: T,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, T: Transport> RestRepository<E, T> {
    pub fn new(transport: T) -> Self {
        Self { transport, _entity: PhantomData }
    }

    /// Send, reject non-2xx, and hand back the parsed JSON body
    async fn exchange(&self, request: ApiRequest) -> ApiResult<Value> {
        let label = format!("{} {}", request.method.as_str(), request.path);
        let response = self.transport.send(request).await?;
        if !response.is_success() {
            log::warn!("[{}] {} failed with {}", E::NAME, label, response.status);
            return Err(ApiError::Status {
                status: response.status,
                body: response.body,
            });
        }
        let text = response.body.trim();
        if text.is_empty() {
            return Ok(Value::Object(Default::default()));
        }
        Ok(serde_json::from_str(text)?)
    }
}

fn decode<D: DeserializeOwned>(value: Value) -> ApiResult<D> {
    Ok(serde_json::from_value(value)?)
}

fn encode<S: serde::Serialize>(draft: &S) -> ApiResult<Value> {
    serde_json::to_value(draft).map_err(|e| ApiError::InvalidInput(e.to_string()))
}

#[async_trait(?Send)]
impl<E: Entity, T: Transport> Repository<E> for RestRepository<E, T> {
    async fn find_by_id(&self, id: u32) -> ApiResult<E> {
        let body = self.exchange(ApiRequest::get(E::detail_path(id))).await?;
        decode(body)
    }

    async fn list(&self) -> ApiResult<Vec<E>> {
        let mut body = self.exchange(ApiRequest::get(E::LIST_PATH)).await?;
        // Envelope first, bare array as fallback
        match body.get_mut(E::LIST_FIELD).map(Value::take) {
            Some(items) => decode(items),
            None if body.is_array() => decode(body),
            None => Err(ApiError::Decode(format!(
                "missing '{}' in list response",
                E::LIST_FIELD
            ))),
        }
    }

    async fn create(&self, draft: &E::Draft) -> ApiResult<E> {
        let body = self.exchange(ApiRequest::post(E::CREATE_PATH, encode(draft)?)).await?;
        decode(body)
    }

    async fn update(&self, id: u32, draft: &E::Draft) -> ApiResult<E> {
        let body = self.exchange(ApiRequest::put(E::write_path(id), encode(draft)?)).await?;
        decode(body)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.exchange(ApiRequest::delete(E::write_path(id))).await?;
        Ok(())
    }
}
