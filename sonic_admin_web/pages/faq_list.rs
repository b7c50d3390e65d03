use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::faq::{FAQ_CATEGORIES, Faq};
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::components::pagination::{DEFAULT_PAGE_SIZE, Pagination, PaginationData};
use crate::components::table::{SortType, TableColumn, TableData, TableRow, render_table};
use crate::pages::common::{
    EmptyState, EmptyStateData, FILTER_LABEL_CLASS, FILTER_SELECT_CLASS, FlashMessage, flash,
    muted_dash, page_header, publish_badge,
};
use crate::view_helpers::format_date;

const QUESTION_ICON: &str = "M8.228 9c.549-1.165 2.03-2 3.772-2 2.21 0 4 1.343 4 3 0 1.4-1.278 2.575-3.006 2.907-.542.104-.994.54-.994 1.093m0 3h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqListData {
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default = "first_page")]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// Page size used for the summary and page links; 20 when unset.
    #[serde(default)]
    pub items_per_page: Option<u32>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub message: Option<FlashMessage>,
}

pub(crate) fn first_page() -> u32 {
    1
}

impl TableRow for Faq {
    fn cell_value(&self, key: &str) -> Option<String> {
        match key {
            "question" => Some(self.question.clone()),
            "category" => self.category.clone().filter(|c| !c.is_empty()),
            "isPublished" => Some(self.is_published.to_string()),
            "sortOrder" => Some(self.sort_order.to_string()),
            "created_at" => self.created_at.as_ref().map(format_date),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        self.id.map(|id| id.to_string())
    }
}

fn columns() -> Vec<TableColumn<Faq>> {
    vec![
        TableColumn::new("question", "Question")
            .sortable(SortType::String)
            .render(|_, faq: &Faq| {
                rsx! {
                    div { class: "max-w-xs",
                        div { class: "font-medium text-gray-100 truncate", "{faq.question}" }
                        if let Some(tags) = faq.tags.as_ref().filter(|t| !t.is_empty()) {
                            div { class: "text-sm text-gray-400 mt-1", "{tags}" }
                        }
                    }
                }
            }),
        TableColumn::new("category", "Category")
            .sortable(SortType::String)
            .render(|value, _| match value {
                Some(category) => rsx! {
                    span { class: "inline-flex items-center rounded-md bg-gray-600 px-2 py-1 text-xs font-medium text-gray-300", "{category}" }
                },
                None => muted_dash(),
            }),
        TableColumn::new("isPublished", "Status")
            .sortable(SortType::Boolean)
            .render(|_, faq: &Faq| publish_badge(faq.is_published)),
        TableColumn::new("sortOrder", "Order").sortable(SortType::Number),
        TableColumn::new("created_at", "Created")
            .sortable(SortType::Date)
            .render(|value, _| match value {
                Some(date) => rsx! { "{date}" },
                None => muted_dash(),
            }),
        TableColumn::new("actions", "Actions").render(|_, faq: &Faq| {
            let id = faq.id.map(|id| id.to_string()).unwrap_or_default();
            rsx! {
                div { class: "flex items-center space-x-2",
                    a { href: "/admin/faq/{id}", class: "text-blue-400 hover:text-blue-300 text-sm font-medium", "Edit" }
                    button {
                        r#type: "button",
                        class: "text-red-400 hover:text-red-300 text-sm font-medium",
                        "hx-delete": "/admin/faq/{id}",
                        "hx-confirm": "Are you sure you want to delete this FAQ?",
                        "hx-target": "#faq-list",
                        "hx-swap": "outerHTML",
                        "Delete"
                    }
                }
            }
        }),
    ]
}

fn filters() -> Element {
    rsx! {
        div { class: "bg-gray-800 rounded-lg p-4",
            div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                div {
                    label { r#for: "category", class: FILTER_LABEL_CLASS, "Category" }
                    select {
                        name: "category",
                        id: "category",
                        class: FILTER_SELECT_CLASS,
                        "hx-get": "/admin/faq",
                        "hx-trigger": "change",
                        "hx-target": "#faq-list",
                        "hx-include": "[name='published'], [name='search']",
                        option { value: "", "All Categories" }
                        for (value, label) in FAQ_CATEGORIES {
                            option { value: value, "{label}" }
                        }
                    }
                }
                div {
                    label { r#for: "published", class: FILTER_LABEL_CLASS, "Status" }
                    select {
                        name: "published",
                        id: "published",
                        class: FILTER_SELECT_CLASS,
                        "hx-get": "/admin/faq",
                        "hx-trigger": "change",
                        "hx-target": "#faq-list",
                        "hx-include": "[name='category'], [name='search']",
                        option { value: "", "All" }
                        option { value: "true", "Published" }
                        option { value: "false", "Draft" }
                    }
                }
                div {
                    label { r#for: "search", class: FILTER_LABEL_CLASS, "Search" }
                    input {
                        r#type: "text",
                        name: "search",
                        id: "search",
                        placeholder: "Search questions...",
                        class: FILTER_SELECT_CLASS,
                        "hx-get": "/admin/faq",
                        "hx-trigger": "keyup changed delay:300ms",
                        "hx-target": "#faq-list",
                        "hx-include": "[name='category'], [name='published']",
                    }
                }
            }
        }
    }
}

/// FAQ management listing with filters and bulk selection.
pub fn render_faq_list(data: &FaqListData) -> String {
    tracing::debug!(faqs = data.faqs.len(), page = data.current_page, "Rendering FAQ list");

    let listing = if data.faqs.is_empty() {
        rsx! {
            div { class: "bg-gray-800 rounded-lg",
                EmptyState {
                    data: EmptyStateData {
                        title: "No FAQs".to_string(),
                        message: "Get started by creating your first FAQ.".to_string(),
                        action_label: "New FAQ".to_string(),
                        action_href: "/admin/faq/new".to_string(),
                        icon: QUESTION_ICON,
                    }
                }
            }
        }
    } else {
        let table = TableData::new(columns(), &data.faqs).with_id("faq-table").selectable();
        render_table(&table)
    };
    let pagination = (data.total_pages > 1).then(|| {
        PaginationData::new(
            "/admin/faq",
            data.current_page,
            data.items_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
            data.total_count,
        )
    });

    let content = rsx! {
        div { class: "space-y-6",
            {page_header("FAQ Management", "Manage frequently asked questions", Some(("/admin/faq/new", "Add FAQ")))}
            {flash(data.message.as_ref())}
            {filters()}
            div { id: "faq-list", {listing} }
            if let Some(pagination) = pagination {
                Pagination { data: pagination }
            }
        }
    };

    let ctx = LayoutContext::new("FAQ Management - Admin", "/admin/faq")
        .with_page_title("FAQ Management")
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::alert::AlertKind;

    fn faq(id: i64, question: &str, published: bool) -> Faq {
        Faq {
            id: Some(id),
            question: question.to_string(),
            answer: "Answer".to_string(),
            category: Some("billing".to_string()),
            tags: Some("invoices".to_string()),
            is_published: published,
            sort_order: id,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_faq_list() {
        let html = render_faq_list(&FaqListData::default());

        assert!(html.contains("No FAQs"));
        assert!(html.contains("id=\"faq-list\""));
        assert!(!html.contains("<table"));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_faq_rows_and_delete_action() {
        let data = FaqListData {
            faqs: vec![faq(1, "Can I pay <yearly>?", true), faq(2, "Refunds?", false)],
            total_count: 2,
            current_page: 1,
            total_pages: 1,
            message: Some(FlashMessage::new(AlertKind::Success, "FAQ saved")),
            ..Default::default()
        };
        let html = render_faq_list(&data);

        assert!(html.contains("Can I pay &lt;yearly&gt;?"));
        assert!(html.contains("hx-delete=\"/admin/faq/2\""));
        assert!(html.contains("Are you sure you want to delete this FAQ?"));
        assert!(html.contains("select-all-faq-table"));
        assert!(html.contains("FAQ saved"));
        assert!(html.contains("Published"));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_faq_pagination_when_many_pages() {
        let data = FaqListData {
            faqs: vec![faq(1, "Q", true)],
            total_count: 45,
            current_page: 2,
            total_pages: 3,
            ..Default::default()
        };
        let html = render_faq_list(&data);

        assert!(html.contains("Showing"));
        assert!(html.contains("/admin/faq?page=3"));
    }

    #[test]
    fn test_faq_pagination_custom_page_size() {
        let data = FaqListData {
            faqs: vec![faq(11, "Q", true)],
            total_count: 42,
            current_page: 2,
            total_pages: 5,
            items_per_page: Some(10),
            ..Default::default()
        };
        let html = render_faq_list(&data);

        assert!(html.contains("limit=10"));
        assert!(html.contains(">11<"));
        assert!(html.contains(">20<"));
    }
}
