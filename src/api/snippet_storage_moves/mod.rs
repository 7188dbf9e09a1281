//! Administrator endpoints for moving snippet repositories between storage shards.
//!
//! Every method issues exactly one request and hands back the decoded body together with the
//! [`ApiResponse`] metadata. Identifiers aren't checked locally, the server is the one that
//! rejects unknown or nonsensical values.

mod get_all_for_snippet_request;
mod get_all_request;
mod get_for_snippet_request;
mod get_request;
mod schedule_all_request;
mod schedule_request;

use get_all_for_snippet_request::GetAllForSnippetRequest;
use get_all_request::GetAllRequest;
use get_for_snippet_request::GetForSnippetRequest;
use get_request::GetRequest;
use schedule_all_request::ScheduleAllRequest;
use schedule_request::ScheduleRequest;

use crate::api::client::{ApiClient, ApiError, ApiResponse, ApiTransport, RequestOption};
use crate::api::models::{
    RetrieveAllSnippetStorageMovesOptions, ScheduleSnippetStorageMoveOptions, SnippetId,
    SnippetRepositoryStorageMove, StorageMoveId,
};

pub struct SnippetRepositoryStorageMoveService<'a, T = reqwest::Client> {
    client: &'a ApiClient<T>,
}

impl<'a, T: ApiTransport> SnippetRepositoryStorageMoveService<'a, T> {
    pub fn new(client: &'a ApiClient<T>) -> Self {
        Self { client }
    }

    pub async fn get_snippet_storage_move(
        &self,
        storage_move_id: StorageMoveId,
        options: &[RequestOption],
    ) -> Result<(SnippetRepositoryStorageMove, ApiResponse), ApiError> {
        let request = GetRequest::new(storage_move_id);
        self.client.call(request, options).await
    }

    pub async fn get_storage_move_for_snippet(
        &self,
        snippet_id: SnippetId,
        storage_move_id: StorageMoveId,
        options: &[RequestOption],
    ) -> Result<(SnippetRepositoryStorageMove, ApiResponse), ApiError> {
        let request = GetForSnippetRequest::new(snippet_id, storage_move_id);
        self.client.call(request, options).await
    }

    /// All snippet storage moves visible to the authenticated administrator.
    pub async fn retrieve_all_snippet_storage_moves(
        &self,
        list_options: RetrieveAllSnippetStorageMovesOptions,
        options: &[RequestOption],
    ) -> Result<(Vec<SnippetRepositoryStorageMove>, ApiResponse), ApiError> {
        let request = GetAllRequest::new(list_options);
        self.client.call(request, options).await
    }

    pub async fn retrieve_all_storage_moves_for_snippet(
        &self,
        snippet_id: SnippetId,
        list_options: RetrieveAllSnippetStorageMovesOptions,
        options: &[RequestOption],
    ) -> Result<(Vec<SnippetRepositoryStorageMove>, ApiResponse), ApiError> {
        let request = GetAllForSnippetRequest::new(snippet_id, list_options);
        self.client.call(request, options).await
    }

    /// Schedules a move of every snippet repository on `source_storage_name`. Only the response
    /// metadata is returned, whatever body the server sends back is validated and dropped.
    ///
    /// note: this differs from [`Self::schedule_storage_move_for_snippet`] which returns the
    /// created record. Kept as-is until it's confirmed the server never sends anything useful.
    pub async fn schedule_all_snippet_storage_moves(
        &self,
        schedule_options: ScheduleSnippetStorageMoveOptions,
        options: &[RequestOption],
    ) -> Result<ApiResponse, ApiError> {
        let request = ScheduleAllRequest::new(schedule_options);
        let (_, response) = self.client.call(request, options).await?;

        Ok(response)
    }

    pub async fn schedule_storage_move_for_snippet(
        &self,
        snippet_id: SnippetId,
        schedule_options: ScheduleSnippetStorageMoveOptions,
        options: &[RequestOption],
    ) -> Result<(SnippetRepositoryStorageMove, ApiResponse), ApiError> {
        let request = ScheduleRequest::new(snippet_id, schedule_options);
        self.client.call(request, options).await
    }
}

impl<T: ApiTransport> ApiClient<T> {
    pub fn snippet_repository_storage_moves(&self) -> SnippetRepositoryStorageMoveService<'_, T> {
        SnippetRepositoryStorageMoveService::new(self)
    }
}
