use std::time::Duration;

use reqwest::RequestBuilder;

const SUDO_HEADER: &str = "Sudo";

/// Per-call adjustments applied to a request after the client has attached its payload and
/// credentials. Options are applied in the order they're provided. Headers are appended, repeating
/// a name sends every value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOption {
    /// Set an arbitrary header on the request.
    Header(String, String),

    /// Append an additional query parameter.
    Query(String, String),

    /// Perform the call as another user, only honored for administrator credentials.
    Sudo(String),

    /// Override the transport's timeout for this request only.
    Timeout(Duration),
}

impl RequestOption {
    /// Invalid header names or values aren't reported here, reqwest defers them until the request
    /// is built where they surface as [`crate::api::ApiError::Build`].
    pub(crate) fn apply(&self, request_builder: RequestBuilder) -> RequestBuilder {
        match self {
            RequestOption::Header(name, value) => {
                request_builder.header(name.as_str(), value.as_str())
            }
            RequestOption::Query(key, value) => {
                request_builder.query(&[(key.as_str(), value.as_str())])
            }
            RequestOption::Sudo(user) => request_builder.header(SUDO_HEADER, user.as_str()),
            RequestOption::Timeout(timeout) => request_builder.timeout(*timeout),
        }
    }
}

pub(crate) fn apply_all(
    mut request_builder: RequestBuilder,
    options: &[RequestOption],
) -> RequestBuilder {
    for option in options {
        request_builder = option.apply(request_builder);
    }

    request_builder
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> RequestBuilder {
        reqwest::Client::new().get("https://gitlab.example.com/api/v4/snippet_repository_storage_moves")
    }

    #[test]
    fn test_options_apply_in_order() {
        let options = [
            RequestOption::Header("X-Trace".into(), "first".into()),
            RequestOption::Sudo("root".into()),
            RequestOption::Header("X-Trace".into(), "second".into()),
            RequestOption::Query("page".into(), "2".into()),
        ];

        let request = apply_all(builder(), &options).build().unwrap();

        let traces: Vec<_> = request.headers().get_all("X-Trace").iter().collect();
        assert_eq!(traces, ["first", "second"]);
        assert_eq!(request.headers()["Sudo"], "root");
        assert_eq!(request.url().query(), Some("page=2"));
    }

    #[test]
    fn test_timeout_is_attached() {
        let options = [RequestOption::Timeout(Duration::from_secs(3))];
        let request = apply_all(builder(), &options).build().unwrap();

        assert_eq!(request.timeout(), Some(&Duration::from_secs(3)));
    }

    #[test]
    fn test_invalid_header_fails_at_build() {
        let options = [RequestOption::Header("bad header".into(), "value".into())];
        assert!(apply_all(builder(), &options).build().is_err());
    }
}
