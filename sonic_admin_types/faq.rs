use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categories offered by the FAQ editor, as (value, label).
pub const FAQ_CATEGORIES: [(&str, &str); 6] = [
    ("general", "General"),
    ("technical", "Technical"),
    ("billing", "Billing"),
    ("support", "Support"),
    ("account", "Account"),
    ("features", "Features"),
];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    #[serde(default)]
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    /// Comma separated tag list as typed by the editor.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Faq {
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_list() {
        let mut faq = Faq {
            id: Some(1),
            question: "q".to_string(),
            answer: "a".to_string(),
            category: None,
            tags: Some(" billing, ,invoices ".to_string()),
            is_published: true,
            sort_order: 0,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(faq.tag_list(), vec!["billing", "invoices"]);

        faq.tags = None;
        assert!(faq.tag_list().is_empty());
    }
}
