use std::collections::BTreeMap;

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::alert::{Alert, AlertData, AlertKind};

/// Validation messages keyed by form field name.
pub type FieldErrorMap = BTreeMap<String, Vec<String>>;

pub(crate) const PLUS_ICON: &str = "M12 6v6m0 0v6m0-6h6m-6 0H6";
pub(crate) const FILTER_SELECT_CLASS: &str = "block w-full rounded-md border-0 bg-gray-700 py-1.5 text-gray-100 shadow-sm ring-1 ring-inset ring-gray-600 focus:ring-2 focus:ring-inset focus:ring-blue-600 sm:text-sm sm:leading-6";
pub(crate) const FILTER_LABEL_CLASS: &str = "block text-sm font-medium text-gray-300 mb-1";
pub(crate) const INPUT_CLASS: &str = "block w-full rounded-md border-0 bg-gray-700 py-1.5 px-3 text-gray-100 shadow-sm ring-1 ring-inset ring-gray-600 placeholder:text-gray-400 focus:ring-2 focus:ring-inset focus:ring-blue-600 sm:text-sm sm:leading-6";

/// One-off status line shown above a page's main content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashMessage {
    #[serde(default, rename = "type")]
    pub kind: AlertKind,
    pub text: String,
}

impl FlashMessage {
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

pub(crate) fn flash(message: Option<&FlashMessage>) -> Element {
    match message {
        Some(message) => rsx! {
            Alert { data: AlertData::new(message.kind, message.text.clone()).dismissible() }
        },
        None => rsx! {},
    }
}

pub(crate) fn errors_for(errors: &FieldErrorMap, field: &str) -> Vec<String> {
    errors.get(field).cloned().unwrap_or_default()
}

/// Placeholder shown instead of a table when a listing has no rows.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EmptyStateData {
    pub title: String,
    pub message: String,
    pub action_label: String,
    pub action_href: String,
    pub icon: &'static str,
}

#[component]
pub(crate) fn EmptyState(data: EmptyStateData) -> Element {
    rsx! {
        div { class: "text-center py-12",
            svg {
                class: "mx-auto h-12 w-12 text-gray-400",
                "fill": "none",
                "stroke": "currentColor",
                "viewBox": "0 0 24 24",
                path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2", "d": data.icon }
            }
            h3 { class: "mt-2 text-sm font-medium text-gray-100", "{data.title}" }
            p { class: "mt-1 text-sm text-gray-400", "{data.message}" }
            div { class: "mt-6",
                a {
                    href: "{data.action_href}",
                    class: "inline-flex items-center px-4 py-2 border border-transparent shadow-sm text-sm font-medium rounded-md text-white bg-blue-600 hover:bg-blue-700",
                    svg { class: "-ml-1 mr-2 h-5 w-5", "fill": "none", "stroke": "currentColor", "viewBox": "0 0 24 24",
                        path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2", "d": PLUS_ICON }
                    }
                    "{data.action_label}"
                }
            }
        }
    }
}

/// Published / Draft pill.
pub(crate) fn publish_badge(is_published: bool) -> Element {
    if is_published {
        rsx! {
            span { class: "inline-flex items-center rounded-md bg-green-600 px-2 py-1 text-xs font-medium text-white", "Published" }
        }
    } else {
        rsx! {
            span { class: "inline-flex items-center rounded-md bg-yellow-600 px-2 py-1 text-xs font-medium text-white", "Draft" }
        }
    }
}

pub(crate) fn muted_dash() -> Element {
    rsx! { span { class: "text-gray-500", "-" } }
}

/// Title block with an optional call-to-action link on the right.
pub(crate) fn page_header(title: &str, subtitle: &str, action: Option<(&str, &str)>) -> Element {
    rsx! {
        div { class: "flex flex-col sm:flex-row sm:items-center sm:justify-between mb-6",
            div {
                h1 { class: "text-2xl font-semibold text-white", "{title}" }
                p { class: "mt-2 text-sm text-gray-300", "{subtitle}" }
            }
            if let Some((href, label)) = action {
                div { class: "mt-4 sm:mt-0 sm:ml-16 sm:flex-none",
                    a {
                        href: "{href}",
                        class: "inline-flex items-center justify-center rounded-md bg-gradient-to-r from-blue-500 to-purple-600 px-3 py-2 text-sm font-semibold text-white shadow-sm hover:from-blue-600 hover:to-purple-700 transition-all",
                        svg { class: "-ml-0.5 mr-1.5 h-5 w-5", "fill": "none", "stroke": "currentColor", "viewBox": "0 0 24 24",
                            path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": "2", "d": PLUS_ICON }
                        }
                        "{label}"
                    }
                }
            }
        }
    }
}

/// Validation messages rendered right under a hand-built field.
#[component]
pub(crate) fn FieldErrors(errors: Vec<String>) -> Element {
    rsx! {
        for error in errors.iter() {
            p { class: "mt-1 text-sm text-red-400", "{error}" }
        }
    }
}

const HOME_ICON: &str = "M10.707 2.293a1 1 0 00-1.414 0l-7 7a1 1 0 001.414 1.414L4 10.414V17a1 1 0 001 1h2a1 1 0 001-1v-2a1 1 0 011-1h2a1 1 0 011 1v2a1 1 0 001 1h2a1 1 0 001-1v-6.586l.293.293a1 1 0 001.414-1.414l-7-7z";
const CHEVRON_ICON: &str = "M7.293 14.707a1 1 0 010-1.414L10.586 10 7.293 6.707a1 1 0 011.414-1.414l4 4a1 1 0 010 1.414l-4 4a1 1 0 01-1.414 0z";

/// Home > Content > `current` trail shown above content editors.
pub(crate) fn content_breadcrumb(current: &str) -> Element {
    rsx! {
        nav { class: "flex mb-6", "aria-label": "Breadcrumb",
            ol { class: "flex items-center space-x-3",
                li {
                    a { href: "/admin", class: "text-gray-300 hover:text-white transition-colors",
                        svg { class: "h-5 w-5", "fill": "currentColor", "viewBox": "0 0 20 20",
                            path { "d": HOME_ICON }
                        }
                    }
                }
                li { class: "flex items-center",
                    svg { class: "h-5 w-5 text-gray-400 mx-2", "fill": "currentColor", "viewBox": "0 0 20 20",
                        path { "fill-rule": "evenodd", "clip-rule": "evenodd", "d": CHEVRON_ICON }
                    }
                    a { href: "/admin/content", class: "text-sm font-medium text-gray-300 hover:text-white transition-colors", "Content" }
                }
                li { class: "flex items-center",
                    svg { class: "h-5 w-5 text-gray-400 mx-2", "fill": "currentColor", "viewBox": "0 0 20 20",
                        path { "fill-rule": "evenodd", "clip-rule": "evenodd", "d": CHEVRON_ICON }
                    }
                    span { class: "text-sm font-medium text-gray-200", "{current}" }
                }
            }
        }
    }
}

/// Glass styling for the generic form controls, scoped to one form id.
pub(crate) fn glass_form_styles(form_id: &str) -> String {
    format!(
        "#{form_id} .form-group {{ margin-bottom: 1.5rem; }}
#{form_id} .form-label {{ display: block; font-size: 0.875rem; font-weight: 500; color: #e5e7eb; margin-bottom: 0.5rem; }}
#{form_id} .form-input, #{form_id} select {{ width: 100%; padding: 0.75rem 1rem; background: rgba(255, 255, 255, 0.05); border: 1px solid rgba(255, 255, 255, 0.1); border-radius: 0.75rem; color: white; font-size: 0.875rem; }}
#{form_id} .form-input:focus, #{form_id} select:focus {{ outline: none; border-color: rgba(255, 255, 255, 0.3); }}
#{form_id} select option {{ background: #1f2937; color: white; }}
#{form_id} .btn {{ padding: 0.75rem 1.5rem; font-weight: 500; border-radius: 0.75rem; border: none; cursor: pointer; }}
#{form_id} .btn-primary {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; }}
#{form_id} .btn-secondary {{ background: rgba(255, 255, 255, 0.1); color: white; border: 1px solid rgba(255, 255, 255, 0.2); }}"
    )
}

/// Live "n/max" counter bound to a textarea.
pub(crate) fn char_counter_script(field_id: &str, counter_id: &str) -> String {
    format!(
        "(function () {{ const field = document.getElementById('{field_id}'); const counter = document.getElementById('{counter_id}'); if (!field || !counter) return; const update = () => {{ counter.textContent = field.value.length; }}; field.addEventListener('input', update); update(); }})();"
    )
}
