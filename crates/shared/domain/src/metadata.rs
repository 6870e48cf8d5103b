use serde::{Deserialize, Serialize};

/// Audit stamps written by the persistence layer. Read-only for this workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_by_user_id: Option<String>,
}

impl Metadata {
    /// A record that was never saved has no creation stamp; hosts hide the metadata block.
    pub const fn is_recorded(&self) -> bool {
        self.created_date.is_some()
    }
}
