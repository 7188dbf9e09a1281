use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Method, Request, RequestBuilder, Response, Url};

use crate::api::client::ApiTransport;

#[derive(Debug)]
pub(crate) struct RecordedRequest {
    pub(crate) method: Method,
    pub(crate) url: Url,
    pub(crate) headers: HeaderMap,
    pub(crate) body: Option<Vec<u8>>,
}

impl RecordedRequest {
    pub(crate) fn json_body(&self) -> serde_json::Value {
        let body = self.body.as_deref().expect("request to have a body");
        serde_json::from_slice(body).expect("request body to be JSON")
    }
}

/// Transport double that records every request it receives and answers with queued canned
/// responses instead of touching the network.
pub(crate) struct RecordingTransport {
    client: reqwest::Client,
    requests: Mutex<Vec<RecordedRequest>>,
    responses: Mutex<VecDeque<http::Response<Vec<u8>>>>,
}

impl RecordingTransport {
    /// Removes and returns the most recent request, calling it again yields the one before.
    pub(crate) fn take_last_request(&self) -> RecordedRequest {
        self.requests
            .lock()
            .unwrap()
            .pop()
            .expect("a request to have been executed")
    }

    pub(crate) fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        }
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn respond(&self, response: http::Response<Vec<u8>>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn respond_json(&self, status: u16, body: &str) {
        let response = http::Response::builder()
            .status(status)
            .header("Content-Type", "application/json")
            .body(body.as_bytes().to_vec())
            .unwrap();

        self.respond(response);
    }
}

#[async_trait]
impl ApiTransport for RecordingTransport {
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client.request(method, url)
    }

    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        let recorded = RecordedRequest {
            method: request.method().clone(),
            url: request.url().clone(),
            headers: request.headers().clone(),
            body: request
                .body()
                .and_then(|body| body.as_bytes())
                .map(|bytes| bytes.to_vec()),
        };
        self.requests.lock().unwrap().push(recorded);

        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("a canned response to be queued");

        Ok(Response::from(response))
    }
}
