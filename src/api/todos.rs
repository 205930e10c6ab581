//! Todo Operations
//!
//! List/create/update/delete against the todos resource. One round trip each.

use std::sync::Arc;

use serde::Serialize;

use super::transport::FetchTransport;
use super::{ApiError, ApiResult, HttpRequest, HttpResponse, Method, Transport};
use crate::config::AppConfig;
use crate::models::{Item, NewItem};

// ========================
// Request Bodies
// ========================

/// Create and update both send the title and nothing else
#[derive(Serialize)]
struct TitleBody<'a> {
    title: &'a str,
}

fn title_json(title: &str) -> ApiResult<String> {
    serde_json::to_string(&TitleBody { title }).map_err(ApiError::Encode)
}

fn decode<T: serde::de::DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

// ========================
// Client
// ========================

#[derive(Clone)]
pub struct TodoApi {
    transport: Arc<dyn Transport>,
    config: AppConfig,
}

impl TodoApi {
    pub fn new(transport: Arc<dyn Transport>, config: AppConfig) -> Self {
        Self { transport, config }
    }

    /// Client talking to the real backend through the Fetch API
    pub fn fetch(config: AppConfig) -> Self {
        Self::new(Arc::new(FetchTransport), config)
    }

    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let method = request.method;
        let url = request.url.clone();
        let response = self.transport.send(request).await?;
        if !response.ok() {
            log::warn!("{} {} returned status {}", method.as_str(), url, response.status);
        }
        Ok(response)
    }

    /// GET the whole collection. Non-ok status yields an empty list.
    pub async fn list_items(&self) -> ApiResult<Vec<Item>> {
        let response = self
            .send(HttpRequest::new(Method::Get, self.config.todos_url()))
            .await?;
        if response.ok() {
            decode(&response)
        } else {
            Ok(Vec::new())
        }
    }

    /// POST a new item. Non-ok status yields `None`.
    pub async fn create_item(&self, new_item: &NewItem) -> ApiResult<Option<Item>> {
        let request = HttpRequest::new(Method::Post, self.config.todos_url())
            .with_json_body(title_json(&new_item.title)?);
        let response = self.send(request).await?;
        if response.ok() {
            decode(&response).map(Some)
        } else {
            Ok(None)
        }
    }

    /// PUT the item's title to its own URL. Non-ok status yields `None`.
    pub async fn update_item(&self, item: &Item) -> ApiResult<Option<Item>> {
        let request = HttpRequest::new(Method::Put, self.config.todo_url(item.id))
            .with_json_body(title_json(&item.title)?);
        let response = self.send(request).await?;
        if response.ok() {
            decode(&response).map(Some)
        } else {
            Ok(None)
        }
    }

    /// DELETE the item. Returns the ok flag; the body is never parsed.
    pub async fn delete_item(&self, item: &Item) -> ApiResult<bool> {
        let response = self
            .send(HttpRequest::new(Method::Delete, self.config.todo_url(item.id)))
            .await?;
        Ok(response.ok())
    }
}
