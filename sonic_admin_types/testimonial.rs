use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(default)]
    pub id: Option<i64>,
    pub author_name: String,
    #[serde(default)]
    pub author_title: Option<String>,
    #[serde(default)]
    pub author_company: Option<String>,
    pub testimonial_text: String,
    /// Star rating between 1 and 5.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sort_order: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Testimonial {
    /// "Title · Company" byline, skipping whichever part is missing.
    pub fn byline(&self) -> Option<String> {
        let parts: Vec<&str> = [self.author_title.as_deref(), self.author_company.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial() -> Testimonial {
        Testimonial {
            id: Some(7),
            author_name: "Grace".to_string(),
            author_title: Some("CTO".to_string()),
            author_company: None,
            testimonial_text: "Great".to_string(),
            rating: Some(5),
            is_published: true,
            sort_order: 1,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_byline() {
        let mut t = testimonial();
        assert_eq!(t.byline().as_deref(), Some("CTO"));

        t.author_company = Some("Navy".to_string());
        assert_eq!(t.byline().as_deref(), Some("CTO · Navy"));

        t.author_title = None;
        t.author_company = None;
        assert_eq!(t.byline(), None);
    }
}
