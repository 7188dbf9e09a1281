use serde::Deserialize;

use crate::api::client::ApiResponse;

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("provided URL wasn't valid: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("provided URL can't be used as an API base: {0}")]
    CannotBeABase(String),

    #[error("auth token can't be sent as a header value")]
    InvalidAuth(#[from] reqwest::header::InvalidHeaderValue),

    #[error("underlying HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Everything that can go wrong during a single API call. Nothing here is retried, each variant
/// is handed back to the caller as soon as it occurs. Once the server has answered, its response
/// metadata travels with the error so rate limit and pagination headers stay reachable.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("API returned {} response with message: {message}", .response.status().as_u16())]
    Message {
        response: Box<ApiResponse>,
        message: String,
    },

    #[error("request URL is invalid: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unable to build request: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request could not be completed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("response body could not be decoded: {source}")]
    Decode {
        response: Box<ApiResponse>,

        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Metadata of the response that caused the failure, absent when the request never got one.
    pub fn response(&self) -> Option<&ApiResponse> {
        match self {
            ApiError::Message { response, .. } | ApiError::Decode { response, .. } => {
                Some(&**response)
            }
            _ => None,
        }
    }

    /// The HTTP status the remote service answered with, only present for non-success
    /// responses.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Message { response, .. } => Some(response.status().as_u16()),
            _ => None,
        }
    }
}

/// GitLab reports failures as either `{"message": ...}` or `{"error": ...}`. The message may be a
/// plain string or an object of per-field validation errors.
#[derive(Debug, Deserialize)]
pub(crate) struct RawApiError {
    message: Option<serde_json::Value>,
    error: Option<String>,
}

impl RawApiError {
    pub(crate) fn describe(body: &[u8]) -> String {
        let raw = match serde_json::from_slice::<RawApiError>(body) {
            Ok(raw) => raw,
            Err(_) => return String::from_utf8_lossy(body).trim().to_string(),
        };

        match (raw.message, raw.error) {
            (Some(serde_json::Value::String(msg)), _) => msg,
            (Some(other), _) => other.to_string(),
            (None, Some(err)) => err,
            (None, None) => String::from_utf8_lossy(body).trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_message() {
        let body = br#"{"message":"404 Snippet Not Found"}"#;
        assert_eq!(RawApiError::describe(body), "404 Snippet Not Found");
    }

    #[test]
    fn test_structured_message() {
        let body = br#"{"message":{"destination_storage_name":["is not included in the list"]}}"#;
        assert_eq!(
            RawApiError::describe(body),
            r#"{"destination_storage_name":["is not included in the list"]}"#
        );
    }

    #[test]
    fn test_error_field() {
        let body = br#"{"error":"insufficient_scope"}"#;
        assert_eq!(RawApiError::describe(body), "insufficient_scope");
    }

    #[test]
    fn test_non_json_body() {
        assert_eq!(RawApiError::describe(b"Bad Gateway\n"), "Bad Gateway");
    }
}
