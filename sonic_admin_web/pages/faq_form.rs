use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::faq::{FAQ_CATEGORIES, Faq};
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::pages::common::{
    FieldErrorMap, FieldErrors, FlashMessage, INPUT_CLASS, char_counter_script, errors_for, flash,
};

pub const QUESTION_MAX_LENGTH: u32 = 500;
pub const ANSWER_MAX_LENGTH: u32 = 2000;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqFormData {
    #[serde(default)]
    pub faq: Option<Faq>,
    #[serde(default)]
    pub is_edit: bool,
    #[serde(default)]
    pub errors: FieldErrorMap,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub message: Option<FlashMessage>,
}

/// Create / edit form for a single FAQ entry.
pub fn render_faq_form(data: &FaqFormData) -> String {
    let faq = data.faq.as_ref();
    let faq_id = faq.and_then(|f| f.id).map(|id| id.to_string()).unwrap_or_default();
    let page_title = if data.is_edit { "Edit FAQ" } else { "New FAQ" };
    tracing::debug!(edit = data.is_edit, id = %faq_id, errors = data.errors.len(), "Rendering FAQ form");

    let (hx_post, hx_put) = if data.is_edit {
        (None, Some(format!("/admin/faq/{faq_id}")))
    } else {
        (Some("/admin/faq".to_string()), None)
    };
    let question = faq.map(|f| f.question.clone()).unwrap_or_default();
    let answer = faq.map(|f| f.answer.clone()).unwrap_or_default();
    let category = faq.and_then(|f| f.category.clone()).unwrap_or_default();
    let tags = faq.and_then(|f| f.tags.clone()).unwrap_or_default();
    let sort_order = faq.map(|f| f.sort_order).unwrap_or(0);
    let published = faq.is_none_or(|f| f.is_published);
    let counters = format!(
        "{}\n{}",
        char_counter_script("question", "question-count"),
        char_counter_script("answer", "answer-count")
    );

    let content = rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                div {
                    h1 { class: "text-2xl font-semibold text-gray-100", "{page_title}" }
                    p { class: "mt-2 text-sm text-gray-400",
                        if data.is_edit { "Update the FAQ details below" } else { "Create a new frequently asked question" }
                    }
                }
                a {
                    href: "/admin/faq",
                    class: "inline-flex items-center px-3 py-2 border border-gray-600 shadow-sm text-sm leading-4 font-medium rounded-md text-gray-300 bg-gray-700 hover:bg-gray-600",
                    "Back to List"
                }
            }
            {flash(data.message.as_ref())}
            div { class: "bg-gray-800 shadow rounded-lg",
                form {
                    "hx-post": hx_post,
                    "hx-put": hx_put,
                    "hx-target": "body",
                    "hx-swap": "outerHTML",
                    class: "space-y-6 p-6",
                    div { "data-field": "question",
                        label { r#for: "question", class: "block text-sm font-medium text-gray-300",
                            "Question "
                            span { class: "text-red-400", "*" }
                        }
                        div { class: "mt-1",
                            textarea {
                                name: "question",
                                id: "question",
                                rows: "3",
                                required: true,
                                "maxlength": "{QUESTION_MAX_LENGTH}",
                                class: INPUT_CLASS,
                                placeholder: "Enter the frequently asked question...",
                                "{question}"
                            }
                            p { class: "mt-1 text-sm text-gray-400",
                                span { id: "question-count", "0" }
                                "/{QUESTION_MAX_LENGTH} characters"
                            }
                        }
                        FieldErrors { errors: errors_for(&data.errors, "question") }
                    }
                    div { "data-field": "answer",
                        label { r#for: "answer", class: "block text-sm font-medium text-gray-300",
                            "Answer "
                            span { class: "text-red-400", "*" }
                        }
                        div { class: "mt-1",
                            textarea {
                                name: "answer",
                                id: "answer",
                                rows: "6",
                                required: true,
                                "maxlength": "{ANSWER_MAX_LENGTH}",
                                class: INPUT_CLASS,
                                placeholder: "Enter the detailed answer...",
                                "{answer}"
                            }
                            p { class: "mt-1 text-sm text-gray-400",
                                span { id: "answer-count", "0" }
                                "/{ANSWER_MAX_LENGTH} characters. You can use basic HTML for formatting."
                            }
                        }
                        FieldErrors { errors: errors_for(&data.errors, "answer") }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div { "data-field": "category",
                            label { r#for: "category", class: "block text-sm font-medium text-gray-300", "Category" }
                            div { class: "mt-1",
                                select { name: "category", id: "category", class: INPUT_CLASS,
                                    option { value: "", "Select a category" }
                                    for (value, label) in FAQ_CATEGORIES {
                                        option { value: value, selected: category == value, "{label}" }
                                    }
                                }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "category") }
                        }
                        div { "data-field": "tags",
                            label { r#for: "tags", class: "block text-sm font-medium text-gray-300", "Tags" }
                            div { class: "mt-1",
                                input {
                                    r#type: "text",
                                    name: "tags",
                                    id: "tags",
                                    value: "{tags}",
                                    class: INPUT_CLASS,
                                    placeholder: "e.g., payment, setup, troubleshooting",
                                }
                                p { class: "mt-1 text-sm text-gray-400", "Separate multiple tags with commas" }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "tags") }
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div { "data-field": "isPublished",
                            label { class: "block text-sm font-medium text-gray-300", "Status" }
                            div { class: "mt-2 space-y-2",
                                div { class: "flex items-center",
                                    input {
                                        id: "published",
                                        name: "isPublished",
                                        r#type: "radio",
                                        value: "true",
                                        checked: published,
                                        class: "h-4 w-4 text-blue-600 border-gray-600 bg-gray-700",
                                    }
                                    label { r#for: "published", class: "ml-2 block text-sm text-gray-300",
                                        "Published "
                                        span { class: "text-gray-400", "(visible to users)" }
                                    }
                                }
                                div { class: "flex items-center",
                                    input {
                                        id: "draft",
                                        name: "isPublished",
                                        r#type: "radio",
                                        value: "false",
                                        checked: !published,
                                        class: "h-4 w-4 text-blue-600 border-gray-600 bg-gray-700",
                                    }
                                    label { r#for: "draft", class: "ml-2 block text-sm text-gray-300",
                                        "Draft "
                                        span { class: "text-gray-400", "(not visible to users)" }
                                    }
                                }
                            }
                        }
                        div { "data-field": "sortOrder",
                            label { r#for: "sortOrder", class: "block text-sm font-medium text-gray-300", "Sort Order" }
                            div { class: "mt-1",
                                input {
                                    r#type: "number",
                                    name: "sortOrder",
                                    id: "sortOrder",
                                    value: "{sort_order}",
                                    "min": "0",
                                    "step": "1",
                                    class: INPUT_CLASS,
                                }
                                p { class: "mt-1 text-sm text-gray-400", "Lower numbers appear first (0 = highest priority)" }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "sortOrder") }
                        }
                    }
                    div { class: "flex items-center justify-end space-x-3 pt-6 border-t border-gray-700",
                        a {
                            href: "/admin/faq",
                            class: "inline-flex items-center px-4 py-2 border border-gray-600 shadow-sm text-sm font-medium rounded-md text-gray-300 bg-gray-700 hover:bg-gray-600",
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "inline-flex items-center px-4 py-2 border border-transparent shadow-sm text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700",
                            if data.is_edit { "Update FAQ" } else { "Create FAQ" }
                        }
                    }
                }
            }
        }
        script { dangerous_inner_html: "{counters}" }
    };

    let current_path = if data.is_edit {
        format!("/admin/faq/{faq_id}")
    } else {
        "/admin/faq/new".to_string()
    };
    let ctx = LayoutContext::new(format!("{page_title} - Admin"), current_path)
        .with_page_title(page_title)
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq() -> Faq {
        Faq {
            id: Some(7),
            question: "How do I <reset> my password?".to_string(),
            answer: "Use the link.".to_string(),
            category: Some("account".to_string()),
            tags: Some("password, login".to_string()),
            is_published: false,
            sort_order: 3,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_new_faq_defaults() {
        let html = render_faq_form(&FaqFormData::default());

        assert!(html.contains("New FAQ - Admin - SonicJS AI Admin"));
        assert!(html.contains("hx-post=\"/admin/faq\""));
        assert!(!html.contains("hx-put"));
        assert!(html.contains("Create FAQ"));
        assert!(html.contains("value=\"0\""));
        let published = html.find("id=\"published\"").unwrap();
        let tag_end = html[published..].find('>').unwrap() + published;
        assert!(html[published..tag_end].contains("checked"));
    }

    #[test]
    fn test_edit_faq_prefills_values() {
        let data = FaqFormData {
            faq: Some(faq()),
            is_edit: true,
            ..Default::default()
        };
        let html = render_faq_form(&data);

        assert!(html.contains("hx-put=\"/admin/faq/7\""));
        assert!(html.contains("Update FAQ"));
        assert!(html.contains("How do I &lt;reset&gt; my password?"));
        assert!(html.contains("value=\"password, login\""));
        assert!(html.contains("value=\"3\""));
        let draft = html.find("id=\"draft\"").unwrap();
        let tag_end = html[draft..].find('>').unwrap() + draft;
        assert!(html[draft..tag_end].contains("checked"));
    }

    #[test]
    fn test_question_error_rendered_once_under_question() {
        let mut errors = FieldErrorMap::new();
        errors.insert("question".to_string(), vec!["Question is required".to_string()]);
        let data = FaqFormData {
            errors,
            ..Default::default()
        };
        let html = render_faq_form(&data);

        assert_eq!(html.matches("Question is required").count(), 1);
        let question = html.find("data-field=\"question\"").unwrap();
        let answer = html.find("data-field=\"answer\"").unwrap();
        let error = html.find("Question is required").unwrap();
        assert!(question < error && error < answer);
    }
}
