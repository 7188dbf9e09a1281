mod basic_snippet;
mod list_options;
mod schedule_options;
mod snippet_repository_storage_move;
mod visibility;

pub use basic_snippet::{BasicSnippet, ProjectId, SnippetId};
pub use list_options::{ListOptions, RetrieveAllSnippetStorageMovesOptions};
pub use schedule_options::ScheduleSnippetStorageMoveOptions;
pub use snippet_repository_storage_move::{
    SnippetRepositoryStorageMove, StorageMoveId, StorageMoveState,
};
pub use visibility::Visibility;
