use reqwest::RequestBuilder;

use crate::api::client::{ApiError, ApiRequest};
use crate::api::models::{ListOptions, SnippetId, SnippetRepositoryStorageMove};

pub(crate) struct GetAllForSnippetRequest {
    snippet_id: SnippetId,
    options: ListOptions,
}

impl GetAllForSnippetRequest {
    pub(crate) fn new(snippet_id: SnippetId, options: ListOptions) -> Self {
        Self {
            snippet_id,
            options,
        }
    }
}

impl ApiRequest for GetAllForSnippetRequest {
    type Response = Vec<SnippetRepositoryStorageMove>;

    const EMPTY_BODY: &'static [u8] = b"[]";

    fn add_payload(&self, request_builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request_builder.query(&self.options))
    }

    fn path(&self) -> String {
        format!("snippets/{}/repository_storage_moves", self.snippet_id)
    }
}
