use crate::api::client::ApiRequest;
use crate::api::models::{SnippetId, SnippetRepositoryStorageMove, StorageMoveId};

pub(crate) struct GetForSnippetRequest {
    snippet_id: SnippetId,
    storage_move_id: StorageMoveId,
}

impl GetForSnippetRequest {
    pub(crate) fn new(snippet_id: SnippetId, storage_move_id: StorageMoveId) -> Self {
        Self {
            snippet_id,
            storage_move_id,
        }
    }
}

impl ApiRequest for GetForSnippetRequest {
    type Response = SnippetRepositoryStorageMove;

    fn path(&self) -> String {
        format!(
            "snippets/{}/repository_storage_moves/{}",
            self.snippet_id, self.storage_move_id
        )
    }
}
