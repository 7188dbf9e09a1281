use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api::models::Visibility;

/// The snippet a storage move belongs to, as it looked when the move record was rendered.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct BasicSnippet {
    pub id: SnippetId,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    pub visibility: Visibility,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    // Personal snippets don't belong to a project
    #[serde(default)]
    pub project_id: Option<ProjectId>,

    pub web_url: String,
    pub raw_url: String,
    pub ssh_url_to_repo: String,
    pub http_url_to_repo: String,
}

pub type ProjectId = i64;

pub type SnippetId = i64;
