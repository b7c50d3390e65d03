use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Editorial workflow state of a content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    #[default]
    Draft,
    Review,
    Published,
    Archived,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Draft,
        ContentStatus::Review,
        ContentStatus::Published,
        ContentStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Review => "review",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentStatus::Draft => "Draft",
            ContentStatus::Review => "In Review",
            ContentStatus::Published => "Published",
            ContentStatus::Archived => "Archived",
        }
    }
}

/// A stored content item being edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub status: ContentStatus,
    #[serde(default)]
    pub data: Map<String, Value>,
    pub collection_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentItem {
    /// Form value for a model field; missing or null data yields an empty string.
    pub fn field_value(&self, name: &str) -> String {
        match self.data.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value() {
        let mut data = Map::new();
        data.insert("body".to_string(), json!("Hello"));
        data.insert("views".to_string(), json!(42));
        data.insert("draft".to_string(), Value::Null);

        let item = ContentItem {
            id: "1".to_string(),
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            status: ContentStatus::Review,
            data,
            collection_id: "blog_posts".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert_eq!(item.field_value("body"), "Hello");
        assert_eq!(item.field_value("views"), "42");
        assert_eq!(item.field_value("draft"), "");
        assert_eq!(item.field_value("missing"), "");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ContentStatus::Review.label(), "In Review");
        assert_eq!(ContentStatus::default().as_str(), "draft");
    }
}
