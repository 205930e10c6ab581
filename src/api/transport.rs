//! HTTP Transport
//!
//! The network boundary. Production requests go through the browser Fetch API.

use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder};

use super::{ApiError, ApiResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Outgoing request. `body` is always JSON when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), body: None }
    }

    pub fn with_json_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response as seen by the todo operations. `body` is empty unless `ok()`,
/// and always empty for DELETE.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Same rule as `Response.ok` in the Fetch API
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

/// Sends one request and waits for the response.
///
/// Futures are `?Send`: browser fetch futures are tied to the JS event loop.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse>;
}

/// Fetch API transport (no timeout, no retry, connection reuse left to the browser)
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

fn network_error(e: gloo::net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// DELETE only reports the status, so its body is never touched
fn reads_body(method: Method, ok: bool) -> bool {
    ok && method != Method::Delete
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let builder: RequestBuilder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Put => Request::put(&request.url),
            Method::Delete => Request::delete(&request.url),
        };

        let response = match request.body {
            Some(body) => {
                builder
                    .header("Content-Type", "application/json")
                    .body(body)
                    .map_err(network_error)?
                    .send()
                    .await
            }
            None => builder.send().await,
        }
        .map_err(network_error)?;

        let status = response.status();
        let body = if reads_body(request.method, response.ok()) {
            response.text().await.map_err(network_error)?
        } else {
            String::new()
        };
        Ok(HttpResponse { status, body })
    }
}
