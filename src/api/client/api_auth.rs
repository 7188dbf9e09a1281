use std::fmt::{self, Debug, Formatter};

use reqwest::header::HeaderValue;
use reqwest::RequestBuilder;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::api::client::ApiClientError;

const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";
const JOB_TOKEN_HEADER: &str = "JOB-TOKEN";

/// The credential attached to every request made by an authenticated client. Storage move
/// endpoints are restricted to administrators so anonymous clients will only ever see 401/403
/// responses from them.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum ApiAuth {
    PrivateToken(String),
    OAuthToken(String),
    JobToken(String),
}

impl ApiAuth {
    pub(crate) fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder {
        match self {
            ApiAuth::PrivateToken(token) => request_builder.header(PRIVATE_TOKEN_HEADER, token),
            ApiAuth::OAuthToken(token) => request_builder.bearer_auth(token),
            ApiAuth::JobToken(token) => request_builder.header(JOB_TOKEN_HEADER, token),
        }
    }

    fn token(&self) -> &str {
        match self {
            ApiAuth::PrivateToken(token) | ApiAuth::OAuthToken(token) | ApiAuth::JobToken(token) => {
                token
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ApiClientError> {
        HeaderValue::from_str(self.token())?;
        Ok(())
    }
}

impl Debug for ApiAuth {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ApiAuth::PrivateToken(_) => "PrivateToken",
            ApiAuth::OAuthToken(_) => "OAuthToken",
            ApiAuth::JobToken(_) => "JobToken",
        };

        write!(f, "ApiAuth::{kind}(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let auth = ApiAuth::PrivateToken("glpat-secret".into());
        let rendered = format!("{auth:?}");

        assert_eq!(rendered, "ApiAuth::PrivateToken(<redacted>)");
        assert!(!rendered.contains("glpat-secret"));
    }

    #[test]
    fn test_rejects_unprintable_token() {
        let auth = ApiAuth::OAuthToken("bad\ntoken".into());
        assert!(matches!(auth.validate(), Err(ApiClientError::InvalidAuth(_))));
    }

    #[test]
    fn test_headers_per_kind() {
        let client = reqwest::Client::new();
        let url = "https://gitlab.example.com/api/v4/";

        let private = ApiAuth::PrivateToken("one".into())
            .apply(client.get(url))
            .build()
            .unwrap();
        assert_eq!(private.headers()[PRIVATE_TOKEN_HEADER], "one");

        let oauth = ApiAuth::OAuthToken("two".into())
            .apply(client.get(url))
            .build()
            .unwrap();
        assert_eq!(oauth.headers()[reqwest::header::AUTHORIZATION], "Bearer two");

        let job = ApiAuth::JobToken("three".into())
            .apply(client.get(url))
            .build()
            .unwrap();
        assert_eq!(job.headers()[JOB_TOKEN_HEADER], "three");
    }
}
