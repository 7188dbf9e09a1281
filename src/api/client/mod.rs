mod api_auth;
mod error;
mod request_option;
mod response;
mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use api_auth::ApiAuth;
pub use error::{ApiClientError, ApiError};
pub use request_option::RequestOption;
pub use response::{ApiResponse, Pagination};
pub use traits::ApiTransport;

pub(crate) use error::RawApiError;
pub(crate) use traits::ApiRequest;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as RClient, Request, Url};
use serde::de::DeserializeOwned;

const API_VERSION_PATH: &str = "/api/v4";

/// Shared handle on a GitLab instance. Cloning is cheap when the transport is (the default
/// reqwest client is reference counted internally).
#[derive(Clone, Debug)]
pub struct ApiClient<T = RClient> {
    auth: Option<ApiAuth>,
    base_url: Url,
    transport: T,
}

impl ApiClient<RClient> {
    pub fn anonymous(base_url: &str) -> Result<Self, ApiClientError> {
        Self::with_transport(base_url, None, default_reqwest_client()?)
    }

    pub fn authenticated(base_url: &str, auth: ApiAuth) -> Result<Self, ApiClientError> {
        Self::with_transport(base_url, Some(auth), default_reqwest_client()?)
    }
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn build_request<R: ApiRequest>(
        &self,
        request: &R,
        options: &[RequestOption],
    ) -> Result<Request, ApiError> {
        let full_url = self.base_url.join(&request.path())?;
        let mut request_builder = self.transport.build_request(R::METHOD, full_url);

        if let Some(auth) = &self.auth {
            request_builder = auth.apply(request_builder);
        }

        let request_builder = request.add_payload(request_builder)?;
        let request_builder = request_option::apply_all(request_builder, options);

        request_builder.build().map_err(ApiError::Build)
    }

    pub(crate) async fn call<R: ApiRequest>(
        &self,
        request: R,
        options: &[RequestOption],
    ) -> Result<(R::Response, ApiResponse), ApiError> {
        let request = self.build_request(&request, options)?;
        self.execute(request, R::EMPTY_BODY).await
    }

    async fn execute<D: DeserializeOwned>(
        &self,
        request: Request,
        empty_body: &[u8],
    ) -> Result<(D, ApiResponse), ApiError> {
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!(%method, %url, "dispatching api request");

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;

        let metadata = ApiResponse::new(response.status(), response.headers().clone());
        let body = response.bytes().await.map_err(ApiError::Transport)?;

        if !metadata.status().is_success() {
            let message = RawApiError::describe(&body);
            let status = metadata.status().as_u16();
            tracing::warn!(%method, %url, status, "api request failed: {message}");

            return Err(ApiError::Message {
                response: Box::new(metadata),
                message,
            });
        }

        match decode_body(&body, empty_body) {
            Ok(decoded) => Ok((decoded, metadata)),
            Err(source) => Err(ApiError::Decode {
                response: Box::new(metadata),
                source,
            }),
        }
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }

    pub fn with_transport(
        base_url: &str,
        auth: Option<ApiAuth>,
        transport: T,
    ) -> Result<Self, ApiClientError> {
        let base_url = normalize_base_url(base_url)?;

        if let Some(auth) = &auth {
            auth.validate()?;
        }

        Ok(Self {
            auth,
            base_url,
            transport,
        })
    }
}

/// GitLab occasionally answers with no body at all, those are decoded from the request's
/// `EMPTY_BODY` stand-in instead (`null` for records, `[]` for collections).
fn decode_body<D: DeserializeOwned>(body: &[u8], empty_body: &[u8]) -> serde_json::Result<D> {
    let body = if body.iter().all(u8::is_ascii_whitespace) {
        empty_body
    } else {
        body
    };

    serde_json::from_slice(body)
}

fn default_reqwest_client() -> Result<RClient, ApiClientError> {
    let mut default_headers = HeaderMap::new();
    default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let client = RClient::builder()
        .default_headers(default_headers)
        .user_agent(crate::version::user_agent())
        .build()?;

    Ok(client)
}

/// Accepts either the instance root (`https://gitlab.example.com`) or the full API root and
/// always produces one ending in `/api/v4/` so relative endpoint paths join underneath it.
fn normalize_base_url(base_url: &str) -> Result<Url, ApiClientError> {
    let mut url = Url::parse(base_url)?;

    if url.cannot_be_a_base() {
        return Err(ApiClientError::CannotBeABase(base_url.to_string()));
    }

    let mut path = url.path().trim_end_matches('/').to_string();
    if !path.ends_with(API_VERSION_PATH) {
        path.push_str(API_VERSION_PATH);
    }
    path.push('/');

    url.set_path(&path);
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::api::client::testing::RecordingTransport;

    #[test]
    fn test_base_url_normalization() {
        let cases = [
            ("https://gitlab.example.com", "https://gitlab.example.com/api/v4/"),
            ("https://gitlab.example.com/", "https://gitlab.example.com/api/v4/"),
            ("https://gitlab.example.com/api/v4", "https://gitlab.example.com/api/v4/"),
            ("https://example.com/gitlab/api/v4/", "https://example.com/gitlab/api/v4/"),
            ("https://example.com/gitlab?x=1", "https://example.com/gitlab/api/v4/"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize_base_url(input).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn test_rejects_unusable_base_urls() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(ApiClientError::BadUrl(_))
        ));
        assert!(matches!(
            normalize_base_url("mailto:admin@example.com"),
            Err(ApiClientError::CannotBeABase(_))
        ));
    }

    struct VersionRequest;

    impl ApiRequest for VersionRequest {
        type Response = serde_json::Value;

        fn path(&self) -> String {
            "version".into()
        }
    }

    #[test]
    fn test_decode_empty_body() {
        decode_body::<()>(b"", b"null").unwrap();

        let missing: Option<u32> = decode_body(b"  \n", b"null").unwrap();
        assert_eq!(missing, None);

        let listed: Vec<u32> = decode_body(b"", b"[]").unwrap();
        assert!(listed.is_empty());

        assert!(decode_body::<Vec<u32>>(b"", b"null").is_err());
        assert!(decode_body::<Vec<u32>>(b"[1,", b"[]").is_err());
    }

    #[tokio::test]
    async fn test_auth_header_attached() {
        let transport = RecordingTransport::new();
        transport.respond_json(200, r#"{"version":"17.0.0"}"#);

        let auth = ApiAuth::PrivateToken("glpat-abc".into());
        let client =
            ApiClient::with_transport("https://gitlab.example.com", Some(auth), transport).unwrap();

        let (body, response) = client.call(VersionRequest, &[]).await.unwrap();
        assert_eq!(body["version"], "17.0.0");
        assert_eq!(response.status(), reqwest::StatusCode::OK);

        let recorded = client.transport.take_last_request();
        assert_eq!(recorded.method, reqwest::Method::GET);
        assert_eq!(recorded.url.as_str(), "https://gitlab.example.com/api/v4/version");
        assert_eq!(recorded.headers["PRIVATE-TOKEN"], "glpat-abc");
    }

    #[tokio::test]
    async fn test_error_status_surfaces_message() {
        let transport = RecordingTransport::new();
        transport.respond_json(403, r#"{"message":"403 Forbidden"}"#);

        let client =
            ApiClient::with_transport("https://gitlab.example.com", None, transport).unwrap();
        let err = client.call(VersionRequest, &[]).await.unwrap_err();

        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.response().unwrap().status(), reqwest::StatusCode::FORBIDDEN);
        assert!(matches!(err, ApiError::Message { ref message, .. } if message == "403 Forbidden"));
        assert_eq!(
            err.to_string(),
            "API returned 403 response with message: 403 Forbidden"
        );
    }

    #[tokio::test]
    async fn test_invalid_request_option_fails_before_sending() {
        let transport = RecordingTransport::new();
        let client =
            ApiClient::with_transport("https://gitlab.example.com", None, transport).unwrap();

        let options = [RequestOption::Header("not valid".into(), "x".into())];
        let err = client.call(VersionRequest, &options).await.unwrap_err();

        assert!(matches!(err, ApiError::Build(_)));
        assert_eq!(client.transport.request_count(), 0);
    }
}
