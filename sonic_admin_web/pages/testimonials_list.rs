use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::testimonial::Testimonial;
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::components::pagination::{DEFAULT_PAGE_SIZE, Pagination, PaginationData};
use crate::components::table::{SortType, TableColumn, TableData, TableRow, render_table};
use crate::pages::common::{
    EmptyState, EmptyStateData, FILTER_LABEL_CLASS, FILTER_SELECT_CLASS, FlashMessage, flash,
    muted_dash, page_header, publish_badge,
};
use crate::pages::faq_list::first_page;
use crate::view_helpers::{format_date, truncate_chars};

const PREVIEW_LENGTH: usize = 100;
const CHAT_ICON: &str = "M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.418-4.03 8-9 8a9.863 9.863 0 01-4.255-.949L3 20l1.395-3.72C3.512 15.042 3 13.574 3 12c0-4.418 4.03-8 9-8s9 3.582 9 8z";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialsListData {
    pub testimonials: Vec<Testimonial>,
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

impl TableRow for Testimonial {
    fn cell_value(&self, key: &str) -> Option<String> {
        match key {
            "author_name" => Some(self.author_name.clone()),
            "testimonial_text" => Some(self.testimonial_text.clone()),
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

fn columns() -> Vec<TableColumn<Testimonial>> {
    vec![
        TableColumn::new("author_name", "Author")
            .sortable(SortType::String)
            .render(|_, row: &Testimonial| {
                let stars = "⭐".repeat(row.rating.unwrap_or(0) as usize);
                rsx! {
                    div {
                        div { class: "text-sm font-medium text-white", "{row.author_name}" }
                        if let Some(byline) = row.byline() {
                            div { class: "text-sm text-gray-400", "{byline}" }
                        }
                        if !stars.is_empty() {
                            div { class: "text-xs mt-1", "{stars}" }
                        }
                    }
                }
            }),
        TableColumn::new("testimonial_text", "Testimonial").render(|value, _| {
            let preview = truncate_chars(&value.unwrap_or_default(), PREVIEW_LENGTH);
            rsx! { div { class: "text-sm text-gray-300 max-w-md whitespace-normal", "{preview}" } }
        }),
        TableColumn::new("isPublished", "Status")
            .sortable(SortType::Boolean)
            .render(|_, row: &Testimonial| publish_badge(row.is_published)),
        TableColumn::new("sortOrder", "Sort Order").sortable(SortType::Number),
        TableColumn::new("created_at", "Created")
            .sortable(SortType::Date)
            .render(|value, _| match value {
                Some(date) => rsx! { div { class: "text-sm text-gray-400", "{date}" } },
                None => muted_dash(),
            }),
    ]
}

fn filters(total_count: u64) -> Element {
    let noun = if total_count == 1 { "item" } else { "items" };

    rsx! {
        div { class: "backdrop-blur-md bg-black/20 rounded-xl border border-white/10 p-4 mb-6",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center space-x-4 flex-1",
                    div {
                        label { r#for: "published", class: FILTER_LABEL_CLASS, "Status" }
                        select {
                            name: "published",
                            id: "published",
                            class: FILTER_SELECT_CLASS,
                            "hx-get": "/admin/testimonials",
                            "hx-trigger": "change",
                            "hx-target": "#testimonials-list",
                            "hx-include": "[name='minRating'], [name='search']",
                            option { value: "", "All" }
                            option { value: "true", "Published" }
                            option { value: "false", "Draft" }
                        }
                    }
                    div {
                        label { r#for: "minRating", class: FILTER_LABEL_CLASS, "Rating" }
                        select {
                            name: "minRating",
                            id: "minRating",
                            class: FILTER_SELECT_CLASS,
                            "hx-get": "/admin/testimonials",
                            "hx-trigger": "change",
                            "hx-target": "#testimonials-list",
                            "hx-include": "[name='published'], [name='search']",
                            option { value: "", "All Ratings" }
                            option { value: "5", "5 Stars" }
                            option { value: "4", "4+ Stars" }
                            option { value: "3", "3+ Stars" }
                        }
                    }
                    div { class: "flex-1",
                        label { r#for: "search", class: FILTER_LABEL_CLASS, "Search" }
                        input {
                            r#type: "text",
                            name: "search",
                            id: "search",
                            placeholder: "Search testimonials...",
                            class: FILTER_SELECT_CLASS,
                            "hx-get": "/admin/testimonials",
                            "hx-trigger": "keyup changed delay:300ms",
                            "hx-target": "#testimonials-list",
                            "hx-include": "[name='published'], [name='minRating']",
                        }
                    }
                }
                div { class: "flex items-center gap-x-3 ml-4",
                    span { class: "text-sm font-medium text-gray-300 px-3 py-1.5 rounded-full bg-white/10", "{total_count} {noun}" }
                    button {
                        r#type: "button",
                        "onclick": "location.reload()",
                        class: "inline-flex items-center gap-x-1.5 px-3 py-1.5 bg-white/10 text-white text-sm font-medium rounded-full ring-1 ring-inset ring-cyan-700/50 hover:bg-white/20 transition-all",
                        "Refresh"
                    }
                }
            }
        }
    }
}

/// Testimonials listing with status, rating and text filters.
pub fn render_testimonials_list(data: &TestimonialsListData) -> String {
    tracing::debug!(
        testimonials = data.testimonials.len(),
        page = data.current_page,
        "Rendering testimonials list"
    );

    let listing = if data.testimonials.is_empty() {
        rsx! {
            div { class: "backdrop-blur-md bg-black/20 rounded-xl border border-white/10",
                EmptyState {
                    data: EmptyStateData {
                        title: "No testimonials".to_string(),
                        message: "Get started by creating a new testimonial.".to_string(),
                        action_label: "New Testimonial".to_string(),
                        action_href: "/admin/testimonials/new".to_string(),
                        icon: CHAT_ICON,
                    }
                }
            }
        }
    } else {
        let table = TableData::new(columns(), &data.testimonials)
            .with_id("testimonials-table")
            .row_click(|row: &Testimonial| {
                format!("/admin/testimonials/{}", row.id.map(|id| id.to_string()).unwrap_or_default())
            });
        render_table(&table)
    };
    let pagination = (data.total_pages > 1).then(|| {
        PaginationData::new(
            "/admin/testimonials",
            data.current_page,
            data.items_per_page.unwrap_or(DEFAULT_PAGE_SIZE),
            data.total_count,
        )
    });

    let content = rsx! {
        div {
            {page_header("Testimonials", "Manage customer testimonials and reviews", Some(("/admin/testimonials/new", "Add Testimonial")))}
            {flash(data.message.as_ref())}
            {filters(data.total_count)}
            div { id: "testimonials-list", {listing} }
            if let Some(pagination) = pagination {
                Pagination { data: pagination }
            }
        }
    };

    let ctx = LayoutContext::new("Testimonials", "/admin/testimonials")
        .with_page_title("Testimonials")
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn testimonial(id: i64, text: &str, rating: Option<u8>) -> Testimonial {
        Testimonial {
            id: Some(id),
            author_name: format!("Author {id}"),
            author_title: Some("CEO".to_string()),
            author_company: Some("Acme".to_string()),
            testimonial_text: text.to_string(),
            rating,
            is_published: id % 2 == 0,
            sort_order: id,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_testimonials() {
        let html = render_testimonials_list(&TestimonialsListData::default());

        assert!(html.contains("No testimonials"));
        assert!(html.contains("Get started by creating a new testimonial."));
        assert!(html.contains("0 items"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_testimonial_rows() {
        let long_text = "x".repeat(150);
        let data = TestimonialsListData {
            testimonials: vec![
                testimonial(1, "Great <product>", Some(3)),
                testimonial(2, &long_text, None),
            ],
            total_count: 1,
            ..Default::default()
        };
        let html = render_testimonials_list(&data);

        assert!(html.contains("id=\"testimonials-table\""));
        assert!(html.contains("Great &lt;product&gt;"));
        assert!(html.contains("CEO · Acme"));
        assert!(html.contains("⭐⭐⭐"));
        assert!(!html.contains("⭐⭐⭐⭐"));
        assert!(html.contains(&format!("{}...", "x".repeat(100))));
        assert!(!html.contains(&"x".repeat(101)));
        assert!(html.contains("/admin/testimonials/2"));
        assert!(html.contains("1 item<"));
    }

    #[test]
    fn test_pagination_only_for_multiple_pages() {
        let data = TestimonialsListData {
            testimonials: vec![testimonial(1, "Nice", Some(5))],
            total_count: 30,
            current_page: 1,
            total_pages: 2,
            ..Default::default()
        };
        let html = render_testimonials_list(&data);
        assert!(html.contains("/admin/testimonials?page=2"));
    }
}
