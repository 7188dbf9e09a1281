use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api::models::BasicSnippet;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "strict", serde(deny_unknown_fields))]
pub struct SnippetRepositoryStorageMove {
    pub id: StorageMoveId,

    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    pub state: StorageMoveState,

    pub source_storage_name: String,
    pub destination_storage_name: String,

    pub snippet: BasicSnippet,
}

pub type StorageMoveId = i64;

/// The remote service owns the move state machine (`initial`, `scheduled`, `started`,
/// `finished`, `failed`, `replicated`, `cleanup failed` at the time of writing) so it's kept as
/// the raw label.
pub type StorageMoveState = String;
