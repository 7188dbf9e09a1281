//! Client for the GitLab snippet repository storage move API. The client accepts any base URL so
//! it works against self-managed instances as well as GitLab.com, though the endpoints themselves
//! require administrator access.

pub mod models;
pub mod snippet_storage_moves;

pub(crate) mod client;

pub use client::{
    ApiAuth, ApiClient, ApiClientError, ApiError, ApiResponse, ApiTransport, Pagination,
    RequestOption,
};
pub use snippet_storage_moves::SnippetRepositoryStorageMoveService;
