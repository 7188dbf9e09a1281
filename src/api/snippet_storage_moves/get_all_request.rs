use reqwest::RequestBuilder;

use crate::api::client::{ApiError, ApiRequest};
use crate::api::models::{ListOptions, SnippetRepositoryStorageMove};

pub(crate) struct GetAllRequest {
    options: ListOptions,
}

impl GetAllRequest {
    pub(crate) fn new(options: ListOptions) -> Self {
        Self { options }
    }
}

impl ApiRequest for GetAllRequest {
    type Response = Vec<SnippetRepositoryStorageMove>;

    const EMPTY_BODY: &'static [u8] = b"[]";

    fn add_payload(&self, request_builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request_builder.query(&self.options))
    }

    fn path(&self) -> String {
        "snippet_repository_storage_moves".to_string()
    }
}
