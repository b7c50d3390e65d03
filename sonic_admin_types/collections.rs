use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Collection row as listed in the admin collections screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub id: String,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CollectionSummary {
    /// Two-letter avatar badge derived from the machine name.
    pub fn badge(&self) -> String {
        self.name.chars().take(2).collect::<String>().to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge() {
        let collection = CollectionSummary {
            id: "c1".to_string(),
            name: "blog_posts".to_string(),
            display_name: "Blog Posts".to_string(),
            description: None,
            created_at: Utc::now(),
        };
        assert_eq!(collection.badge(), "BL");
    }
}
