use serde::Serialize;

/// Body of both schedule endpoints. Omitting the source lets the server pick the snippet's
/// current shard, omitting the destination lets it choose based on storage weights.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleSnippetStorageMoveOptions {
    #[serde(skip_serializing_if = "is_blank")]
    pub source_storage_name: Option<String>,

    #[serde(skip_serializing_if = "is_blank")]
    pub destination_storage_name: Option<String>,
}

impl ScheduleSnippetStorageMoveOptions {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source_storage_name: Some(source.into()),
            destination_storage_name: Some(destination.into()),
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    match value {
        Some(name) => name.is_empty(),
        None => true,
    }
}
