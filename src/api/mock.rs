//! In-memory transports for tests. Both record every request they receive.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{ApiError, ApiResult, HttpRequest, HttpResponse, Transport};

/// Replays queued responses in order
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<ApiResult<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with the given status and body
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.push(Ok(HttpResponse::new(status, body)))
    }

    /// Queue a transport-level failure
    pub fn fail(self, message: &str) -> Self {
        self.push(Err(ApiError::Network(message.to_string())))
    }

    fn push(self, outcome: ApiResult<HttpResponse>) -> Self {
        self.responses.lock().unwrap().push_back(outcome);
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".to_string())))
    }
}

/// Transport whose responses are held back until the test releases them.
///
/// Each `gate()` call reserves the response for the next request, in arrival
/// order; sending on the returned channel lets that request complete.
#[derive(Default)]
pub struct GatedTransport {
    gates: Mutex<VecDeque<oneshot::Receiver<HttpResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl GatedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gate(&self) -> oneshot::Sender<HttpResponse> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(rx);
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait(?Send)]
impl Transport for GatedTransport {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        let gate = self.gates.lock().unwrap().pop_front();
        match gate {
            Some(rx) => rx
                .await
                .map_err(|_| ApiError::Network("gate dropped".to_string())),
            None => Err(ApiError::Network("no gate reserved".to_string())),
        }
    }
}
