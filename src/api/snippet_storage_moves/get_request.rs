use crate::api::client::ApiRequest;
use crate::api::models::{SnippetRepositoryStorageMove, StorageMoveId};

pub(crate) struct GetRequest {
    storage_move_id: StorageMoveId,
}

impl GetRequest {
    pub(crate) fn new(storage_move_id: StorageMoveId) -> Self {
        Self { storage_move_id }
    }
}

impl ApiRequest for GetRequest {
    type Response = SnippetRepositoryStorageMove;

    fn path(&self) -> String {
        format!("snippet_repository_storage_moves/{}", self.storage_move_id)
    }
}
