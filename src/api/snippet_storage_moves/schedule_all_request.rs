use reqwest::{Method, RequestBuilder};
use serde::de::IgnoredAny;

use crate::api::client::{ApiError, ApiRequest};
use crate::api::models::ScheduleSnippetStorageMoveOptions;

pub(crate) struct ScheduleAllRequest {
    options: ScheduleSnippetStorageMoveOptions,
}

impl ScheduleAllRequest {
    pub(crate) fn new(options: ScheduleSnippetStorageMoveOptions) -> Self {
        Self { options }
    }
}

impl ApiRequest for ScheduleAllRequest {
    // note: the body still has to be valid JSON (or empty) but nothing in it is kept, there's no
    // single move that represents a whole shard being scheduled.
    type Response = IgnoredAny;

    const METHOD: Method = Method::POST;

    fn add_payload(&self, request_builder: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        Ok(request_builder.json(&self.options))
    }

    fn path(&self) -> String {
        "snippet_repository_storage_moves".to_string()
    }
}
