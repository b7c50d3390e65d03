use chrono::{TimeZone, Utc};
use serde_json::json;

use sonic_admin_types::collections::CollectionSummary;
use sonic_admin_types::faq::Faq;
use sonic_admin_types::fields::ContentModel;
use sonic_admin_types::user::AdminUser;
use sonic_admin_web::{
    CollectionsListPageData, ContentNewPageData, FaqFormData, FieldErrorMap, render_collections_list_page,
    render_content_new_page, render_faq_form,
};

fn admin() -> AdminUser {
    AdminUser::new("Ada Lovelace", "ada@example.com", "admin")
}

#[test]
fn test_collections_empty_state_has_no_rows() {
    let html = render_collections_list_page(&CollectionsListPageData {
        collections: vec![],
        user: Some(admin()),
        version: None,
    });

    assert!(html.contains("No collections found."));
    assert!(html.contains("href=\"/admin/collections/new\""));
    assert!(!html.contains("<tr"));
}

#[test]
fn test_collections_escape_record_values() {
    let collection = CollectionSummary {
        id: "c1".to_string(),
        name: "blog_posts".to_string(),
        display_name: "<script>alert(1)</script>".to_string(),
        description: Some("Posts & news".to_string()),
        created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    };
    let html = render_collections_list_page(&CollectionsListPageData {
        collections: vec![collection],
        user: Some(admin()),
        version: None,
    });

    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!html.contains("<script>alert(1)</script>"));
    assert!(html.contains("Posts &amp; news"));
    assert!(html.contains("6/1/2024"));
    assert!(html.contains("id=\"collections-table\""));
}

#[test]
fn test_faq_error_appears_once_next_to_its_field() {
    let mut errors = FieldErrorMap::new();
    errors.insert("question".to_string(), vec!["Question is <required>".to_string()]);
    errors.insert("sortOrder".to_string(), vec!["Must be positive".to_string()]);
    let html = render_faq_form(&FaqFormData {
        faq: Some(Faq {
            question: String::new(),
            answer: "An answer".to_string(),
            sort_order: -1,
            ..Default::default()
        }),
        errors,
        ..Default::default()
    });

    assert_eq!(html.matches("Question is &lt;required&gt;").count(), 1);
    assert_eq!(html.matches("Must be positive").count(), 1);
    let question = html.find("data-field=\"question\"").unwrap();
    let answer = html.find("data-field=\"answer\"").unwrap();
    let error = html.find("Question is &lt;required&gt;").unwrap();
    assert!(question < error && error < answer);
    let sort_order = html.find("data-field=\"sortOrder\"").unwrap();
    assert!(html.find("Must be positive").unwrap() > sort_order);
}

#[test]
fn test_content_new_placeholders_and_positions() {
    let model = ContentModel::from_schema(
        "articles",
        "Articles",
        json!({
            "body": { "type": "textarea", "ui": { "position": 3 } },
            "headline": { "type": "text", "ui": { "position": 1, "placeholder": "A catchy headline" } },
            "teaser": { "type": "text", "ui": { "position": 2 } }
        }),
    )
    .unwrap();
    let html = render_content_new_page(&ContentNewPageData {
        models: vec![model],
        user: Some(admin()),
        ..Default::default()
    });

    assert!(html.contains("placeholder=\"A catchy headline\""));
    let headline = html.find("data-field=\"headline\"").unwrap();
    let teaser = html.find("data-field=\"teaser\"").unwrap();
    let body = html.find("data-field=\"body\"").unwrap();
    assert!(headline < teaser && teaser < body);
    assert!(html.contains("Create New Content - SonicJS AI Admin"));
    assert!(html.contains("Ada Lovelace"));
}
