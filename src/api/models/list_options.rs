use serde::Serialize;

/// Pagination and ordering parameters shared by list endpoints. Unset fields are left out of the
/// query string so the server defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ListOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,

    /// `keyset` switches the endpoint to cursor pagination, follow
    /// [`crate::api::Pagination::next_link`] from there.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}

impl ListOptions {
    pub fn page(page: u64, per_page: u64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            ..Default::default()
        }
    }
}

pub type RetrieveAllSnippetStorageMovesOptions = ListOptions;
