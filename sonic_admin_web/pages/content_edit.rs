use dioxus::prelude::*;
use serde::Deserialize;
use sonic_admin_types::content::{ContentItem, ContentStatus};
use sonic_admin_types::fields::{ContentModel, FieldDefinition, FieldKind, SelectOption};
use sonic_admin_types::user::AdminUser;

use crate::components::alert::{Alert, AlertData, AlertKind};
use crate::components::form::{Form, FormButton, FormData, FormField, FormTarget};
use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::pages::common::{content_breadcrumb, glass_form_styles};
use crate::view_helpers::capitalize;

const FORM_ID: &str = "edit-content-form";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEditPageData {
    pub content: ContentItem,
    #[serde(default)]
    pub models: Vec<ContentModel>,
    #[serde(default)]
    pub selected_model: Option<ContentModel>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ContentEditPageData {
    /// The explicitly selected model, else the one the item's collection points at.
    pub fn model(&self) -> Option<&ContentModel> {
        self.selected_model
            .as_ref()
            .or_else(|| self.models.iter().find(|m| m.name == self.content.collection_id))
    }
}

fn model_field(content: &ContentItem, definition: &FieldDefinition) -> FormField {
    let label = definition
        .label
        .clone()
        .unwrap_or_else(|| capitalize(&definition.name));
    let placeholder = definition
        .placeholder
        .clone()
        .unwrap_or_else(|| format!("Enter {}", definition.name));

    let mut field = FormField::new(definition.name.clone(), label, definition.kind.clone())
        .value(content.field_value(&definition.name))
        .placeholder(placeholder)
        .required(definition.required);
    field.help_text = definition.help_text.clone();
    field
}

fn edit_form(data: &ContentEditPageData) -> FormData {
    let content = &data.content;
    let mut fields = vec![
        FormField::new("title", "Title", FieldKind::Text)
            .required(true)
            .value(content.title.clone())
            .placeholder("Enter content title"),
        FormField::new("slug", "Slug", FieldKind::Text)
            .required(true)
            .value(content.slug.clone())
            .placeholder("enter-url-slug"),
    ];
    if let Some(model) = data.model() {
        fields.extend(model.ordered_fields().into_iter().map(|d| model_field(content, d)));
    }
    let statuses = ContentStatus::ALL
        .iter()
        .map(|s| SelectOption::new(s.as_str(), s.label()))
        .collect();
    fields.push(
        FormField::new("status", "Status", FieldKind::select(statuses))
            .required(true)
            .value(content.status.as_str()),
    );

    let mut form = FormData::new(
        FormTarget::HxPost(format!("/admin/content/{}/edit", content.id)),
        fields,
    );
    form.id = Some(FORM_ID.to_string());
    form.hx_target = Some("#form-response".to_string());
    form.buttons = vec![
        FormButton::submit("Update Content"),
        FormButton::button("Cancel", "window.history.back()").with_class(
            "bg-white/10 hover:bg-white/20 text-white backdrop-blur-sm border border-white/20 ml-2",
        ),
    ];
    form
}

/// Edit page for an existing content item.
pub fn render_content_edit_page(data: &ContentEditPageData) -> String {
    let content = &data.content;
    let form = edit_form(data);
    tracing::debug!(
        id = %content.id,
        model = data.model().map(|m| m.name.as_str()).unwrap_or("none"),
        fields = form.fields.len(),
        "Rendering content edit page"
    );
    let styles = glass_form_styles(FORM_ID);

    let body = rsx! {
        div { class: "min-h-screen py-8",
            div { class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "backdrop-blur-xl bg-white/10 rounded-xl border border-white/20 shadow-2xl p-8 mb-8",
                    {content_breadcrumb("Edit")}
                    h1 { class: "text-4xl font-bold text-white mb-3", "Edit Content" }
                    p { class: "text-gray-300 text-lg",
                        "Editing: "
                        span { class: "text-white font-medium", "{content.title}" }
                    }
                }
                if let Some(error) = &data.error {
                    div { class: "backdrop-blur-xl bg-red-500/10 border border-red-500/20 rounded-2xl p-4 mb-6",
                        Alert { data: AlertData::new(AlertKind::Error, error.clone()) }
                    }
                }
                div { class: "backdrop-blur-xl bg-white/10 rounded-xl border border-white/20 shadow-2xl overflow-hidden",
                    div { class: "p-8",
                        div { id: "form-response" }
                        style { dangerous_inner_html: "{styles}" }
                        Form { data: form }
                    }
                }
            }
        }
    };

    let ctx = LayoutContext::new(format!("Edit: {}", content.title), "/admin/content")
        .with_page_title("Content Management")
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::{Map, json};

    fn item() -> ContentItem {
        let mut data = Map::new();
        data.insert("excerpt".to_string(), json!("Short & sweet"));
        ContentItem {
            id: "abc-123".to_string(),
            title: "Hello <World>".to_string(),
            slug: "hello-world".to_string(),
            status: ContentStatus::Review,
            data,
            collection_id: "blog_posts".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 3, 3, 4, 5).unwrap(),
        }
    }

    fn blog() -> ContentModel {
        ContentModel::from_schema(
            "blog_posts",
            "Blog Posts",
            json!({
                "excerpt": { "type": "textarea" },
                "author": { "type": "text", "label": "Written by", "placeholder": "Jane" }
            }),
        )
        .unwrap()
    }

    fn page(models: Vec<ContentModel>) -> ContentEditPageData {
        ContentEditPageData {
            content: item(),
            models,
            selected_model: None,
            error: None,
            user: None,
            version: None,
        }
    }

    #[test]
    fn test_edit_page_base_fields() {
        let html = render_content_edit_page(&page(vec![]));

        assert!(html.contains("Edit: Hello &lt;World&gt; - SonicJS AI Admin"));
        assert!(html.contains("Editing: "));
        assert!(html.contains("hx-post=\"/admin/content/abc-123/edit\""));
        assert!(html.contains("hx-target=\"#form-response\""));
        assert!(html.contains("placeholder=\"enter-url-slug\""));
        assert!(html.contains("Update Content"));
        assert!(html.contains("window.history.back()"));
        assert!(html.contains("In Review"));
    }

    #[test]
    fn test_model_fields_from_collection() {
        let html = render_content_edit_page(&page(vec![blog()]));

        assert!(html.contains(">Excerpt<"));
        assert!(html.contains("placeholder=\"Enter excerpt\""));
        assert!(html.contains("Short &amp; sweet"));
        assert!(html.contains("Written by"));
        assert!(html.contains("placeholder=\"Jane\""));
    }

    #[test]
    fn test_status_reflects_item() {
        let html = render_content_edit_page(&page(vec![]));

        let review = html.find("value=\"review\"").unwrap();
        let tag = &html[review..html[review..].find('>').unwrap() + review];
        assert!(tag.contains("selected"));
    }
}
