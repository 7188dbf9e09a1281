use reqwest::{Method, RequestBuilder};

use crate::api::client::{ApiError, ApiRequest};
use crate::api::models::{
    ScheduleSnippetStorageMoveOptions, SnippetId, SnippetRepositoryStorageMove,
};

pub(crate) struct ScheduleRequest {
    snippet_id: SnippetId,
    options: ScheduleSnippetStorageMoveOptions,
}

impl ScheduleRequest {
    pub(crate) fn new(snippet_id: SnippetId, options: ScheduleSnippetStorageMoveOptions) -> Self {
        Self {
            snippet_id,
            options,
        }
    }
}

impl ApiRequest for ScheduleRequest {
    type Response = SnippetRepositoryStorageMove;

    const METHOD: Method = Method::POST;

    fn add_payload(&self, request_builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request_builder.json(&self.options))
    }

    fn path(&self) -> String {
        format!("snippets/{}/repository_storage_moves", self.snippet_id)
    }
}
