use async_trait::async_trait;
use reqwest::{Method, Request, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::api::client::ApiError;

/// The HTTP capability an [`crate::api::ApiClient`] is built on top of. Implementations hand out
/// request builders and execute the finished requests, everything else (paths, payloads, auth,
/// decoding) is handled by the client itself.
///
/// Connection pooling, TLS and timeouts all live behind this trait. The default implementation
/// is a plain [`reqwest::Client`].
#[async_trait]
pub trait ApiTransport: Send + Sync {
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder;

    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error>;
}

#[async_trait]
impl ApiTransport for reqwest::Client {
    fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.request(method, url)
    }

    async fn execute(&self, request: Request) -> Result<Response, reqwest::Error> {
        reqwest::Client::execute(self, request).await
    }
}

pub(crate) trait ApiRequest {
    type Response: DeserializeOwned;

    const METHOD: Method = Method::GET;

    /// What an empty success body is decoded as.
    const EMPTY_BODY: &'static [u8] = b"null";

    fn add_payload(&self, request_builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request_builder)
    }

    /// Path relative to the API base URL, it must not start with a slash or it will replace the
    /// `/api/v4/` prefix when joined.
    fn path(&self) -> String;
}
