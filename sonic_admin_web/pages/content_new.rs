use dioxus::prelude::*;
use serde::Deserialize;
use sonic_admin_types::fields::{ContentModel, FieldDefinition, FieldKind, SelectOption};
use sonic_admin_types::user::AdminUser;

use crate::components::alert::{Alert, AlertData, AlertKind};
use crate::components::form::{Field, FieldRefresh, Form, FormButton, FormData, FormField, FormTarget};
use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::pages::common::{PLUS_ICON, content_breadcrumb, glass_form_styles};

const FORM_ID: &str = "content-form";
const DYNAMIC_FIELDS_ID: &str = "dynamic-fields";

const SLUG_SCRIPT: &str = r#"function generateSlug(title) {
  return title.toLowerCase().replace(/[^\w\s-]/g, '').replace(/\s+/g, '-').trim();
}
document.addEventListener('input', function (e) {
  if (e.target.name === 'title') {
    const slugField = document.querySelector('[name="slug"]');
    if (slugField && !slugField.dataset.manual) {
      slugField.value = generateSlug(e.target.value);
    }
  }
  if (e.target.name === 'slug') {
    e.target.dataset.manual = 'true';
  }
});"#;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentNewPageData {
    #[serde(default)]
    pub models: Vec<ContentModel>,
    #[serde(default)]
    pub selected_model: Option<ContentModel>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub success: Option<String>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
}

fn model_field(definition: &FieldDefinition) -> FormField {
    let label = definition.label.clone().unwrap_or_else(|| definition.name.clone());
    let mut field = FormField::new(definition.name.clone(), label, definition.kind.clone())
        .required(definition.required);
    field.placeholder = definition.placeholder.clone();
    field.help_text = definition.help_text.clone();
    field
}

/// Form inputs for every field of `model`, in UI order.
fn model_fields(model: Option<&ContentModel>) -> Vec<FormField> {
    model
        .map(|m| m.ordered_fields().into_iter().map(model_field).collect())
        .unwrap_or_default()
}

/// Fragment swapped into `#dynamic-fields` when the content type changes.
pub fn render_content_form_fields(model: &ContentModel) -> String {
    tracing::debug!(model = %model.name, fields = model.fields.len(), "Rendering content form fields");

    let fields = model_fields(Some(model));
    dioxus_ssr::render_element(rsx! {
        for field in fields {
            Field { field: field }
        }
    })
}

fn no_models() -> Element {
    rsx! {
        div { class: "min-h-screen py-8",
            div { class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "backdrop-blur-xl bg-white/10 rounded-3xl border border-white/20 shadow-2xl p-8",
                    Alert {
                        data: AlertData::new(AlertKind::Warning, "Please create a collection first before adding content.")
                            .with_title("No Content Models Available")
                            .with_class("mb-4")
                    }
                    div { class: "text-center",
                        a {
                            href: "/admin/collections/new",
                            class: "inline-flex items-center px-6 py-3 bg-gradient-to-r from-blue-500 to-purple-600 text-white rounded-lg hover:from-blue-600 hover:to-purple-700 transition-all font-medium",
                            svg { class: "w-5 h-5 mr-2", "fill": "none", "stroke": "currentColor", "viewBox": "0 0 24 24",
                                path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2", "d": PLUS_ICON }
                            }
                            "Create a Collection"
                        }
                    }
                }
            }
        }
    }
}

fn content_form(data: &ContentNewPageData) -> FormData {
    let selected = data.selected_model.as_ref().or(data.models.first());
    let selected_name = selected.map(|m| m.name.clone()).unwrap_or_default();
    let options = data
        .models
        .iter()
        .map(|m| SelectOption::new(m.name.clone(), m.display_name.clone()))
        .collect();

    let content_type = FormField::new("modelName", "Content Type", FieldKind::select(options))
        .required(true)
        .value(selected_name)
        .refresh(FieldRefresh {
            get: "/admin/content/form-fields".to_string(),
            trigger: "change".to_string(),
            target: format!("#{DYNAMIC_FIELDS_ID}"),
        });

    let mut form = FormData::new(FormTarget::HxPost("/admin/content".to_string()), vec![content_type])
        .with_group(DYNAMIC_FIELDS_ID, model_fields(selected));
    form.id = Some(FORM_ID.to_string());
    form.hx_target = Some("#form-messages".to_string());
    form.title = Some("Create New Content".to_string());
    form.description = Some("Fill in the details for your new content item.".to_string());
    form.buttons = vec![
        FormButton::submit("Save as Draft")
            .with_value("status", "draft")
            .with_class("btn-secondary"),
        FormButton::submit("Publish").with_value("status", "published"),
    ];
    form
}

/// Content creation page driven by the selected content model's schema.
pub fn render_content_new_page(data: &ContentNewPageData) -> String {
    let ctx = LayoutContext::new("Create New Content", "/admin/content")
        .with_user(data.user.clone())
        .with_version(data.version.clone());

    if data.models.is_empty() {
        tracing::debug!("Rendering content creation page without models");
        return render_admin_layout(&ctx.with_page_title("Create New Content"), no_models());
    }

    let form = content_form(data);
    tracing::debug!(
        models = data.models.len(),
        fields = form.groups.iter().map(|g| g.fields.len()).sum::<usize>(),
        "Rendering content creation page"
    );
    let styles = glass_form_styles(FORM_ID);

    let content = rsx! {
        div { class: "min-h-screen py-8",
            div { class: "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "backdrop-blur-xl bg-white/10 rounded-3xl border border-white/20 shadow-2xl p-8 mb-8",
                    {content_breadcrumb("New")}
                    h1 { class: "text-4xl font-bold text-white mb-3", "Create New Content" }
                    p { class: "text-gray-300 text-lg", "Fill in the details for your new content item" }
                }
                if let Some(error) = &data.error {
                    div { class: "backdrop-blur-xl bg-red-500/10 border border-red-500/20 rounded-2xl p-4 mb-6",
                        Alert { data: AlertData::new(AlertKind::Error, error.clone()) }
                    }
                }
                if let Some(success) = &data.success {
                    div { class: "backdrop-blur-xl bg-green-500/10 border border-green-500/20 rounded-2xl p-4 mb-6",
                        Alert { data: AlertData::new(AlertKind::Success, success.clone()) }
                    }
                }
                div { class: "backdrop-blur-xl bg-white/10 rounded-3xl border border-white/20 shadow-2xl overflow-hidden",
                    div { class: "p-8",
                        style { dangerous_inner_html: "{styles}" }
                        Form { data: form }
                        div { class: "mt-6 pt-6 border-t border-white/10",
                            a { href: "/admin/content", class: "inline-flex items-center text-gray-300 hover:text-white transition-colors",
                                "Cancel and return to content list"
                            }
                        }
                    }
                }
            }
        }
        script { dangerous_inner_html: SLUG_SCRIPT }
    };

    render_admin_layout(&ctx.with_page_title("Content Management"), content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn blog() -> ContentModel {
        ContentModel::from_schema(
            "blog_posts",
            "Blog Posts",
            json!({
                "body": { "type": "rich_text", "ui": { "position": 2 } },
                "title": { "type": "text", "required": true, "ui": { "position": 1, "placeholder": "Post title" } },
                "tags": { "type": "multi_select", "validation": { "options": ["rust", "web"] } }
            }),
        )
        .unwrap()
    }

    fn pages() -> ContentModel {
        ContentModel::from_schema("pages", "Pages", json!({ "summary": { "type": "textarea" } })).unwrap()
    }

    #[test]
    fn test_no_models_warning() {
        let html = render_content_new_page(&ContentNewPageData::default());

        assert!(html.contains("No Content Models Available"));
        assert!(html.contains("Please create a collection first before adding content."));
        assert!(html.contains("href=\"/admin/collections/new\""));
        assert!(!html.contains("id=\"content-form\""));
    }

    #[test]
    fn test_first_model_selected_by_default() {
        let data = ContentNewPageData {
            models: vec![blog(), pages()],
            ..Default::default()
        };
        let html = render_content_new_page(&data);

        assert!(html.contains("hx-get=\"/admin/content/form-fields\""));
        assert!(html.contains("hx-target=\"#dynamic-fields\""));
        assert!(html.contains("Blog Posts"));
        let title = html.find("data-field=\"title\"").unwrap();
        let body = html.find("data-field=\"body\"").unwrap();
        let tags = html.find("data-field=\"tags\"").unwrap();
        assert!(title < body && body < tags);
        assert!(html.contains("placeholder=\"Post title\""));
        assert!(html.contains("multiple"));
        assert!(!html.contains("data-field=\"summary\""));
    }

    #[test]
    fn test_selected_model_overrides_first() {
        let data = ContentNewPageData {
            models: vec![blog(), pages()],
            selected_model: Some(pages()),
            success: Some("Saved".to_string()),
            ..Default::default()
        };
        let html = render_content_new_page(&data);

        assert!(html.contains("data-field=\"summary\""));
        assert!(!html.contains("data-field=\"body\""));
        assert!(html.contains("Saved"));
        assert!(html.contains("name=\"status\""));
        assert!(html.contains("value=\"published\""));
        assert!(html.contains("generateSlug"));
    }

    #[test]
    fn test_form_fields_fragment() {
        let html = render_content_form_fields(&blog());

        assert!(!html.contains("<form"));
        assert!(html.contains("data-field=\"title\""));
        assert!(html.contains("easymde"));
    }

    #[test]
    fn test_schema_fields_without_placeholder() {
        let model = ContentModel::from_schema(
            "recipes",
            "Recipes",
            json!({
                "course": { "type": "select", "validation": { "options": ["starter", "main"] } },
                "notes": { "type": "textarea" }
            }),
        )
        .unwrap();
        let html = render_content_form_fields(&model);

        assert!(html.contains("value=\"starter\""));
        assert!(!html.contains("<option value=\"\""));
        assert!(!html.contains("placeholder=\"\""));
    }
}
