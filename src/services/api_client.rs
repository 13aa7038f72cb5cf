//! REST client for the bookmark collection resource.
//!
//! `BookmarkApi` is the seam the view talks through; `HttpBookmarkApi` is the
//! reqwest implementation used by the terminal front end.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use uuid::Uuid;

use crate::types::bookmark::{Bookmark, BookmarkPatch, NewBookmark};
use crate::types::errors::ApiError;
use crate::types::settings::ClientSettings;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Operations on the remote bookmark collection.
#[async_trait]
pub trait BookmarkApi: Send + Sync {
    /// `GET /bookmarks[?tag=<tag>]`
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Bookmark>, ApiError>;
    /// `POST /bookmarks`
    async fn create(&self, bookmark: &NewBookmark) -> Result<Bookmark, ApiError>;
    /// `PUT /bookmarks/{id}`
    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, ApiError>;
    /// `DELETE /bookmarks/{id}`
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// `BookmarkApi` over HTTP.
pub struct HttpBookmarkApi {
    client: Client,
    collection: Url,
}

impl HttpBookmarkApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::with_client(client, &settings.api_url)
    }

    pub fn with_client(client: Client, api_url: &str) -> Result<Self, ApiError> {
        let mut base =
            Url::parse(api_url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(api_url.to_string()));
        }
        // `join` replaces the last segment unless the base ends with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let collection = base
            .join("bookmarks")
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_url, e)))?;
        Ok(Self { client, collection })
    }

    /// The collection endpoint, e.g. `http://localhost:8080/bookmarks`.
    pub fn collection_url(&self) -> &Url {
        &self.collection
    }

    fn item_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.collection.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.collection.to_string()))?
            .push(id);
        Ok(url)
    }

    async fn send(
        &self,
        method: Method,
        url: Url,
        build: impl Send + FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request_id = Uuid::new_v4();
        let span = tracing::debug_span!("api_request", %method, path = %url.path(), %request_id);

        async move {
            let mut request = self
                .client
                .request(method, url)
                .header(ACCEPT, HeaderValue::from_static("application/json"));
            if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                request = request.header(REQUEST_ID_HEADER, value);
            }
            let response = build(request)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            tracing::debug!(status = response.status().as_u16(), "response received");
            Ok(response)
        }
        .instrument(span)
        .await
    }
}

/// Reads the body and decodes it as `T`.
///
/// Non-success statuses, and success bodies that fail to decode but carry an
/// `error` field, become `Rejected` when the server gave a message.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(error_from_body(status.as_u16(), &body));
    }

    serde_json::from_slice::<T>(&body).map_err(|e| match server_error_message(&body) {
        Some(msg) => ApiError::Rejected(msg),
        None => ApiError::Decode(e.to_string()),
    })
}

fn error_from_body(status: u16, body: &[u8]) -> ApiError {
    match server_error_message(body) {
        Some(msg) => ApiError::Rejected(msg),
        None => ApiError::Status {
            status,
            message: String::from_utf8_lossy(body).trim().chars().take(200).collect(),
        },
    }
}

/// Extracts `{"error": "..."}` from a body, if present.
pub fn server_error_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("error")? {
        serde_json::Value::String(msg) if !msg.trim().is_empty() => Some(msg.clone()),
        _ => None,
    }
}

#[async_trait]
impl BookmarkApi for HttpBookmarkApi {
    async fn list(&self, tag: Option<&str>) -> Result<Vec<Bookmark>, ApiError> {
        let response = self
            .send(Method::GET, self.collection.clone(), |req| match tag {
                Some(tag) => req.query(&[("tag", tag)]),
                None => req,
            })
            .await?;
        decode(response).await
    }

    async fn create(&self, bookmark: &NewBookmark) -> Result<Bookmark, ApiError> {
        let response = self
            .send(Method::POST, self.collection.clone(), |req| req.json(bookmark))
            .await?;
        decode(response).await
    }

    async fn update(&self, id: &str, patch: &BookmarkPatch) -> Result<Bookmark, ApiError> {
        let url = self.item_url(id)?;
        let response = self.send(Method::PUT, url, |req| req.json(patch)).await?;
        decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id)?;
        let response = self.send(Method::DELETE, url, |req| req).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Err(error_from_body(status.as_u16(), &body))
    }
}
