use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::testimonial::Testimonial;
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::pages::common::{
    FieldErrorMap, FieldErrors, FlashMessage, INPUT_CLASS, char_counter_script, errors_for, flash,
};

pub const AUTHOR_MAX_LENGTH: u32 = 100;
pub const TESTIMONIAL_MAX_LENGTH: u32 = 1000;

const GLASS_BUTTON: &str = "inline-flex items-center justify-center rounded-xl backdrop-blur-sm bg-white/10 px-4 py-2 text-sm font-semibold text-white border border-white/20 hover:bg-white/20 transition-all";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialFormData {
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
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

fn rating_label(stars: u8) -> String {
    let plural = if stars == 1 { "star" } else { "stars" };
    format!("{} ({stars} {plural})", "⭐".repeat(stars as usize))
}

#[derive(Debug, Clone, PartialEq)]
struct AuthorInput {
    name: &'static str,
    label: &'static str,
    value: String,
    placeholder: &'static str,
    required: bool,
    errors: Vec<String>,
}

#[component]
fn AuthorField(input: AuthorInput) -> Element {
    rsx! {
        div { class: "mb-4", "data-field": input.name,
            label { r#for: input.name, class: "block text-sm font-medium text-white",
                "{input.label}"
                if input.required {
                    " "
                    span { class: "text-red-400", "*" }
                }
            }
            div { class: "mt-1",
                input {
                    r#type: "text",
                    name: input.name,
                    id: input.name,
                    value: "{input.value}",
                    required: input.required,
                    "maxlength": "{AUTHOR_MAX_LENGTH}",
                    class: INPUT_CLASS,
                    placeholder: input.placeholder,
                }
            }
            FieldErrors { errors: input.errors.clone() }
        }
    }
}

/// Create / edit form for a customer testimonial.
pub fn render_testimonials_form(data: &TestimonialFormData) -> String {
    let testimonial = data.testimonial.as_ref();
    let id = testimonial.and_then(|t| t.id).map(|id| id.to_string()).unwrap_or_default();
    let page_title = if data.is_edit { "Edit Testimonial" } else { "New Testimonial" };
    tracing::debug!(edit = data.is_edit, id = %id, errors = data.errors.len(), "Rendering testimonial form");

    let (hx_post, hx_put) = if data.is_edit {
        (None, Some(format!("/admin/testimonials/{id}")))
    } else {
        (Some("/admin/testimonials".to_string()), None)
    };
    let author = |name: &'static str, label, placeholder, required, value: Option<&String>| AuthorInput {
        name,
        label,
        value: value.cloned().unwrap_or_default(),
        placeholder,
        required,
        errors: errors_for(&data.errors, name),
    };
    let author_name = author("authorName", "Author Name", "John Doe", true, testimonial.map(|t| &t.author_name));
    let author_title = author(
        "authorTitle",
        "Title/Position",
        "CEO",
        false,
        testimonial.and_then(|t| t.author_title.as_ref()),
    );
    let author_company = author(
        "authorCompany",
        "Company",
        "Acme Corp",
        false,
        testimonial.and_then(|t| t.author_company.as_ref()),
    );
    let text = testimonial.map(|t| t.testimonial_text.clone()).unwrap_or_default();
    let rating = testimonial.and_then(|t| t.rating);
    let sort_order = testimonial.map(|t| t.sort_order).unwrap_or(0);
    let published = testimonial.is_none_or(|t| t.is_published);
    let counter = char_counter_script("testimonialText", "testimonial-count");

    let content = rsx! {
        div { class: "w-full px-4 sm:px-6 lg:px-8 py-6 space-y-6",
            div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6",
                div {
                    h1 { class: "text-2xl font-semibold text-white", "{page_title}" }
                    p { class: "mt-2 text-sm text-gray-300",
                        if data.is_edit { "Update the testimonial details below" } else { "Create a new customer testimonial" }
                    }
                }
                div { class: "mt-4 sm:mt-0 sm:ml-16 sm:flex-none",
                    a { href: "/admin/testimonials", class: GLASS_BUTTON, "Back to List" }
                }
            }
            {flash(data.message.as_ref())}
            div { class: "backdrop-blur-xl bg-white/10 rounded-xl border border-white/20 shadow-2xl",
                form {
                    "hx-post": hx_post,
                    "hx-put": hx_put,
                    "hx-target": "body",
                    "hx-swap": "outerHTML",
                    class: "space-y-6 p-6",
                    div {
                        h2 { class: "text-lg font-medium text-white mb-4", "Author Information" }
                        AuthorField { input: author_name }
                        div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                            AuthorField { input: author_title }
                            AuthorField { input: author_company }
                        }
                    }
                    div {
                        h2 { class: "text-lg font-medium text-white mb-4", "Testimonial" }
                        div { class: "mb-4", "data-field": "testimonialText",
                            label { r#for: "testimonialText", class: "block text-sm font-medium text-white",
                                "Testimonial "
                                span { class: "text-red-400", "*" }
                            }
                            div { class: "mt-1",
                                textarea {
                                    name: "testimonialText",
                                    id: "testimonialText",
                                    rows: "6",
                                    required: true,
                                    "maxlength": "{TESTIMONIAL_MAX_LENGTH}",
                                    class: "backdrop-blur-sm bg-white/10 border border-white/20 rounded-xl px-3 py-2 text-white placeholder-gray-300 focus:border-blue-400 focus:outline-none transition-colors w-full",
                                    placeholder: "Enter the customer's testimonial...",
                                    "{text}"
                                }
                                p { class: "mt-1 text-sm text-gray-300",
                                    span { id: "testimonial-count", "0" }
                                    "/{TESTIMONIAL_MAX_LENGTH} characters"
                                }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "testimonialText") }
                        }
                        div { class: "mb-4", "data-field": "rating",
                            label { r#for: "rating", class: "block text-sm font-medium text-white", "Rating (Optional)" }
                            div { class: "mt-1",
                                select { name: "rating", id: "rating", class: INPUT_CLASS,
                                    option { value: "", "No rating" }
                                    for stars in (1..=5u8).rev() {
                                        option {
                                            value: "{stars}",
                                            selected: rating == Some(stars),
                                            "{rating_label(stars)}"
                                        }
                                    }
                                }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "rating") }
                        }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        div { "data-field": "isPublished",
                            label { class: "block text-sm font-medium text-white", "Status" }
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
                                    label { r#for: "published", class: "ml-2 block text-sm text-white",
                                        "Published "
                                        span { class: "text-gray-300", "(visible on site)" }
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
                                    label { r#for: "draft", class: "ml-2 block text-sm text-white",
                                        "Draft "
                                        span { class: "text-gray-300", "(not visible on site)" }
                                    }
                                }
                            }
                        }
                        div { "data-field": "sortOrder",
                            label { r#for: "sortOrder", class: "block text-sm font-medium text-white", "Sort Order" }
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
                                p { class: "mt-1 text-sm text-gray-300", "Lower numbers appear first (0 = highest priority)" }
                            }
                            FieldErrors { errors: errors_for(&data.errors, "sortOrder") }
                        }
                    }
                    div { class: "flex items-center justify-end space-x-3 pt-6 border-t border-white/20",
                        a { href: "/admin/testimonials", class: GLASS_BUTTON, "Cancel" }
                        button {
                            r#type: "submit",
                            class: "inline-flex items-center justify-center rounded-xl backdrop-blur-sm bg-blue-500/80 px-4 py-2 text-sm font-semibold text-white border border-white/20 hover:bg-blue-500 transition-all",
                            if data.is_edit { "Update Testimonial" } else { "Create Testimonial" }
                        }
                    }
                }
            }
        }
        script { dangerous_inner_html: "{counter}" }
    };

    let current_path = if data.is_edit {
        format!("/admin/testimonials/{id}")
    } else {
        "/admin/testimonials/new".to_string()
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

    fn testimonial() -> Testimonial {
        Testimonial {
            id: Some(12),
            author_name: "Jane \"JD\" Doe".to_string(),
            author_title: Some("CTO".to_string()),
            author_company: None,
            testimonial_text: "Fast & reliable".to_string(),
            rating: Some(4),
            is_published: true,
            sort_order: 2,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(1), "⭐ (1 star)");
        assert_eq!(rating_label(3), "⭐⭐⭐ (3 stars)");
    }

    #[test]
    fn test_new_testimonial_form() {
        let html = render_testimonials_form(&TestimonialFormData::default());

        assert!(html.contains("hx-post=\"/admin/testimonials\""));
        assert!(html.contains("Create Testimonial"));
        assert!(html.contains("No rating"));
        assert!(html.contains("placeholder=\"Acme Corp\""));
        assert!(html.contains("id=\"testimonial-count\""));
    }

    #[test]
    fn test_edit_testimonial_prefills() {
        let data = TestimonialFormData {
            testimonial: Some(testimonial()),
            is_edit: true,
            ..Default::default()
        };
        let html = render_testimonials_form(&data);

        assert!(html.contains("hx-put=\"/admin/testimonials/12\""));
        assert!(html.contains("Update Testimonial"));
        assert!(html.contains("Fast &amp; reliable"));
        assert!(html.contains("value=\"CTO\""));
        let four = html.find("value=\"4\"").unwrap();
        let tag_end = html[four..].find('>').unwrap() + four;
        assert!(html[four..tag_end].contains("selected"));
    }

    #[test]
    fn test_author_errors_stay_with_field() {
        let mut errors = FieldErrorMap::new();
        errors.insert("authorName".to_string(), vec!["Author name is required".to_string()]);
        let html = render_testimonials_form(&TestimonialFormData {
            errors,
            ..Default::default()
        });

        assert_eq!(html.matches("Author name is required").count(), 1);
        let field = html.find("data-field=\"authorName\"").unwrap();
        let next = html.find("data-field=\"authorTitle\"").unwrap();
        let error = html.find("Author name is required").unwrap();
        assert!(field < error && error < next);
    }
}
