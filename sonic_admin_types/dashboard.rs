use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters and storage figures shown on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub collections: u64,
    pub content_items: u64,
    pub media_files: u64,
    pub users: u64,
    /// Database size in bytes, when the storage backend reports it.
    #[serde(default)]
    pub database_size: Option<u64>,
    /// Total size of all media objects in bytes.
    #[serde(default)]
    pub media_size: Option<u64>,
    #[serde(default)]
    pub recent_activity: Vec<ActivityItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Content,
    Media,
    User,
    Collection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub action: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub user: String,
}
