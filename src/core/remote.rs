use std::time::Duration;

use async_trait::async_trait;
use awc::{http::StatusCode, Client, ClientRequest};
use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{debug, error};

use crate::{
    core::content::{CollectionId, ContentService},
    error::ContentError,
    types::QueryResult,
};

const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Backend that forwards every call to another folio-compatible API
/// (`/collections/{collection}[/{id}]` under `base_url`).
#[derive(Clone, Debug)]
pub struct RemoteContentService {
    base_url: String,
    token: Option<String>,
    timeout: Duration,
}

impl RemoteContentService {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> Self {
        RemoteContentService {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            timeout,
        }
    }

    fn collection_url(&self, collection: &CollectionId) -> String {
        format!(
            "{}/collections/{}",
            self.base_url,
            urlencoding::encode(collection.as_str())
        )
    }

    fn item_url(&self, collection: &CollectionId, id: &str) -> String {
        format!("{}/{}", self.collection_url(collection), urlencoding::encode(id))
    }

    // awc clients are bound to the current arbiter, so one is built per call.
    fn client(&self) -> Client {
        Client::builder().timeout(self.timeout).finish()
    }

    fn authorize(&self, request: ClientRequest) -> ClientRequest {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(
        &self,
        request: ClientRequest,
        body: Option<Value>,
    ) -> Result<(StatusCode, Vec<u8>), ContentError> {
        let url = request.get_uri().to_string();
        let sent = match body {
            Some(body) => request.send_json(&body).await,
            None => request.send().await,
        };
        let mut response = sent.map_err(|error| {
            error!(%url, %error, "error requesting remote content");
            ContentError::Transport(error.to_string())
        })?;
        let status = response.status();
        let bytes = response
            .body()
            .limit(MAX_BODY_BYTES)
            .await
            .map_err(|error| ContentError::Transport(error.to_string()))?;
        debug!(%url, status = status.as_u16(), size = bytes.len(), "remote content answered");
        Ok((status, bytes.to_vec()))
    }
}

fn decode<T: DeserializeOwned>(status: StatusCode, body: &[u8]) -> Result<T, ContentError> {
    if !status.is_success() {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|value| value.get("error").and_then(Value::as_str).map(str::to_string))
            .unwrap_or_else(|| String::from_utf8_lossy(body).into_owned());
        return Err(ContentError::Remote {
            status: status.as_u16(),
            message,
        });
    }
    Ok(serde_json::from_slice(body)?)
}

#[async_trait(?Send)]
impl ContentService for RemoteContentService {
    fn mode(&self) -> &'static str {
        "remote"
    }

    async fn create(
        &self,
        collection: &CollectionId,
        item: Value,
        multi_references: Option<Map<String, Value>>,
    ) -> Result<Value, ContentError> {
        let request = self.authorize(self.client().post(self.collection_url(collection)));
        let body = json!({ "item": item, "multiReferences": multi_references });
        let (status, bytes) = self.send(request, Some(body)).await?;
        decode(status, &bytes)
    }

    async fn get_all(
        &self,
        collection: &CollectionId,
        include_references: &[String],
    ) -> Result<QueryResult<Value>, ContentError> {
        let mut request = self.client().get(self.collection_url(collection));
        if !include_references.is_empty() {
            request = request
                .query(&[("include", include_references.join(","))])
                .map_err(|error| ContentError::Transport(error.to_string()))?;
        }
        let (status, bytes) = self.send(request, None).await?;
        decode(status, &bytes)
    }

    async fn get_by_id(
        &self,
        collection: &CollectionId,
        id: &str,
        include_references: &[String],
    ) -> Result<Option<Value>, ContentError> {
        let mut request = self.client().get(self.item_url(collection, id));
        if !include_references.is_empty() {
            request = request
                .query(&[("include", include_references.join(","))])
                .map_err(|error| ContentError::Transport(error.to_string()))?;
        }
        let (status, bytes) = self.send(request, None).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        decode::<Option<Value>>(status, &bytes)
    }

    async fn update(&self, collection: &CollectionId, item: Value) -> Result<Value, ContentError> {
        let id = item
            .get("_id")
            .map(|id| match id {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .ok_or_else(|| ContentError::InvalidItem("item is missing _id".to_string()))?;
        let request = self.authorize(self.client().put(self.item_url(collection, &id)));
        let (status, bytes) = self.send(request, Some(item)).await?;
        decode(status, &bytes)
    }

    async fn delete(&self, collection: &CollectionId, id: &str) -> Result<Value, ContentError> {
        let request = self.authorize(self.client().delete(self.item_url(collection, id)));
        let (status, bytes) = self.send(request, None).await?;
        decode(status, &bytes)
    }
}
