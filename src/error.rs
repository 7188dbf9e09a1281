use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub struct SnipmoveError(String);

impl From<&'static str> for SnipmoveError {
    fn from(val: &'static str) -> Self {
        Self(val.to_string())
    }
}

impl From<String> for SnipmoveError {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl Display for SnipmoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for SnipmoveError {}

#[cfg(feature = "api")]
impl From<crate::api::ApiClientError> for SnipmoveError {
    fn from(error: crate::api::ApiClientError) -> Self {
        Self(error.to_string())
    }
}

#[cfg(feature = "api")]
impl From<crate::api::ApiError> for SnipmoveError {
    fn from(error: crate::api::ApiError) -> Self {
        Self(error.to_string())
    }
}

pub type SnipmoveResult<T> = Result<T, SnipmoveError>;
