use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Page size that is left implicit in generated URLs.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_MAX_PAGE_NUMBERS: u32 = 5;

const LINK_CLASS: &str = "rounded-lg bg-white dark:bg-zinc-800 px-3 py-2 text-sm font-semibold text-zinc-950 dark:text-white shadow-sm ring-1 ring-inset ring-zinc-950/10 dark:ring-white/10 hover:bg-zinc-50 dark:hover:bg-zinc-700 transition-colors";
const DISABLED_CLASS: &str = "inline-flex items-center rounded-lg bg-white dark:bg-zinc-800 px-3 py-2 text-sm font-semibold text-zinc-400 dark:text-zinc-600 shadow-sm ring-1 ring-inset ring-zinc-950/10 dark:ring-white/10 opacity-50 cursor-not-allowed";
const CURRENT_CLASS: &str =
    "rounded-lg bg-zinc-950 dark:bg-white px-3 py-2 text-sm font-semibold text-white dark:text-zinc-950";

fn default_true() -> bool {
    true
}

fn default_max_page_numbers() -> u32 {
    DEFAULT_MAX_PAGE_NUMBERS
}

fn default_page_size_options() -> Vec<u32> {
    vec![10, 20, 50, 100]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationData {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub items_per_page: u32,
    pub start_item: u64,
    pub end_item: u64,
    pub base_url: String,
    #[serde(default)]
    pub query_params: Vec<(String, String)>,
    #[serde(default = "default_true")]
    pub show_page_numbers: bool,
    #[serde(default = "default_max_page_numbers")]
    pub max_page_numbers: u32,
    #[serde(default = "default_true")]
    pub show_page_size_selector: bool,
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<u32>,
}

impl PaginationData {
    /// Derives page count and the visible item range from the totals.
    /// `current_page` is clamped to the available pages.
    pub fn new(
        base_url: impl Into<String>,
        current_page: u32,
        items_per_page: u32,
        total_items: u64,
    ) -> Self {
        let per_page = items_per_page.max(1);
        let total_pages = u32::try_from(total_items.div_ceil(per_page as u64)).unwrap_or(u32::MAX);
        let current_page = current_page.clamp(1, total_pages.max(1));
        let start_item = if total_items == 0 {
            0
        } else {
            (current_page as u64 - 1) * per_page as u64 + 1
        };
        let end_item = (current_page as u64 * per_page as u64).min(total_items);

        Self {
            current_page,
            total_pages,
            total_items,
            items_per_page: per_page,
            start_item,
            end_item,
            base_url: base_url.into(),
            query_params: Vec::new(),
            show_page_numbers: true,
            max_page_numbers: DEFAULT_MAX_PAGE_NUMBERS,
            show_page_size_selector: true,
            page_size_options: default_page_size_options(),
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    pub fn without_page_size_selector(mut self) -> Self {
        self.show_page_size_selector = false;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.total_pages > 1 || (self.show_page_size_selector && self.total_items > 0)
    }

    fn url_with(&self, page: u32, limit: Option<u32>) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.query_params {
            if key != "page" && key != "limit" {
                query.append_pair(key, value);
            }
        }
        query.append_pair("page", &page.to_string());
        if let Some(limit) = limit {
            query.append_pair("limit", &limit.to_string());
        }
        format!("{}?{}", self.base_url, query.finish())
    }

    /// Link to `page`, keeping the current page size when it is not the default.
    pub fn page_url(&self, page: u32) -> String {
        let limit = (self.items_per_page != DEFAULT_PAGE_SIZE).then_some(self.items_per_page);
        self.url_with(page, limit)
    }

    /// Link that switches page size and restarts from the first page.
    pub fn page_size_url(&self, limit: u32) -> String {
        self.url_with(1, Some(limit))
    }

    /// Consecutive page numbers centred on the current page, shifted to stay within bounds.
    pub fn page_window(&self) -> Vec<u32> {
        // Widened so the bounds arithmetic cannot overflow near `u32::MAX`.
        let max_numbers = u64::from(self.max_page_numbers.max(1));
        let total_pages = u64::from(self.total_pages);
        let mut start = u64::from(self.current_page).saturating_sub(max_numbers / 2).max(1);
        let end = (start + max_numbers - 1).min(total_pages);

        if end + 1 < start + max_numbers {
            start = (end + 1).saturating_sub(max_numbers).max(1);
        }

        (start..=end).filter_map(|page| u32::try_from(page).ok()).collect()
    }
}

#[component]
pub fn Pagination(data: PaginationData) -> Element {
    if !data.is_visible() {
        return rsx! {};
    }

    let multi_page = data.total_pages > 1;
    let has_prev = data.current_page > 1;
    let has_next = data.current_page < data.total_pages;
    let prev_url = data.page_url(data.current_page.saturating_sub(1).max(1));
    let next_url = data.page_url(data.current_page.saturating_add(1));
    let last_url = data.page_url(data.total_pages);

    let window = if data.show_page_numbers { data.page_window() } else { Vec::new() };
    let first_in_window = window.first().copied();
    let last_in_window = window.last().copied();
    let show_first = first_in_window.is_some_and(|p| p > 1);
    let leading_gap = first_in_window.is_some_and(|p| p > 2);
    let show_last = last_in_window.is_some_and(|p| p < data.total_pages);
    let trailing_gap = last_in_window.is_some_and(|p| p.saturating_add(1) < data.total_pages);
    let pages: Vec<(u32, String, bool)> = window
        .iter()
        .map(|&page| (page, data.page_url(page), page == data.current_page))
        .collect();
    let sizes: Vec<(u32, String, bool)> = data
        .page_size_options
        .iter()
        .map(|&size| (size, data.page_size_url(size), size == data.items_per_page))
        .collect();

    rsx! {
        div { class: "rounded-xl bg-white dark:bg-zinc-900 shadow-sm ring-1 ring-zinc-950/5 dark:ring-white/10 px-4 py-3 flex items-center justify-between mt-4",
            if multi_page {
                div { class: "flex-1 flex justify-between sm:hidden",
                    if has_prev {
                        a { href: "{prev_url}", class: "inline-flex items-center {LINK_CLASS}", "Previous" }
                    } else {
                        span { class: DISABLED_CLASS, "Previous" }
                    }
                    if has_next {
                        a { href: "{next_url}", class: "inline-flex items-center {LINK_CLASS}", "Next" }
                    } else {
                        span { class: DISABLED_CLASS, "Next" }
                    }
                }
            }
            div { class: "hidden sm:flex-1 sm:flex sm:items-center sm:justify-between",
                div { class: "flex items-center gap-4",
                    p { class: "text-sm text-zinc-500 dark:text-zinc-400",
                        "Showing "
                        span { class: "font-medium text-zinc-950 dark:text-white", "{data.start_item}" }
                        " to "
                        span { class: "font-medium text-zinc-950 dark:text-white", "{data.end_item}" }
                        " of "
                        span { class: "font-medium text-zinc-950 dark:text-white", "{data.total_items}" }
                        " results"
                    }
                    if data.show_page_size_selector {
                        div { class: "flex items-center gap-2",
                            label { r#for: "page-size", class: "text-sm text-zinc-500 dark:text-zinc-400", "Per page:" }
                            select {
                                id: "page-size",
                                class: "rounded-md bg-white/5 py-1.5 pl-3 pr-8 text-sm text-zinc-950 dark:text-white outline outline-1 -outline-offset-1 outline-zinc-500/30",
                                "onchange": "window.location.href = this.value",
                                for (size, url, selected) in sizes {
                                    option { value: "{url}", selected: selected, "{size}" }
                                }
                            }
                        }
                    }
                }
                if multi_page {
                    div { class: "flex items-center gap-x-1",
                        if has_prev {
                            a { href: "{prev_url}", class: LINK_CLASS, "Previous" }
                        }
                        if show_first {
                            a { href: "{data.page_url(1)}", class: LINK_CLASS, "1" }
                            if leading_gap {
                                span { class: "px-2 text-sm text-zinc-500 dark:text-zinc-400", "..." }
                            }
                        }
                        for (page, url, current) in pages {
                            if current {
                                span { class: CURRENT_CLASS, "aria-current": "page", "{page}" }
                            } else {
                                a { href: "{url}", class: LINK_CLASS, "{page}" }
                            }
                        }
                        if show_last {
                            if trailing_gap {
                                span { class: "px-2 text-sm text-zinc-500 dark:text-zinc-400", "..." }
                            }
                            a { href: "{last_url}", class: LINK_CLASS, "{data.total_pages}" }
                        }
                        if has_next {
                            a { href: "{next_url}", class: LINK_CLASS, "Next" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(data: PaginationData) -> String {
        dioxus_ssr::render_element(rsx! { Pagination { data: data } })
    }

    #[test]
    fn test_new_computes_range() {
        let data = PaginationData::new("/admin/faq", 3, 20, 45);
        assert_eq!(data.total_pages, 3);
        assert_eq!(data.start_item, 41);
        assert_eq!(data.end_item, 45);

        let empty = PaginationData::new("/admin/faq", 1, 20, 0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.start_item, 0);
        assert_eq!(empty.end_item, 0);
    }

    #[test]
    fn test_page_window_stays_in_bounds() {
        let window = |current, total_items| {
            PaginationData::new("/x", current, 10, total_items).page_window()
        };

        assert_eq!(window(1, 100), vec![1, 2, 3, 4, 5]);
        assert_eq!(window(5, 100), vec![3, 4, 5, 6, 7]);
        assert_eq!(window(10, 100), vec![6, 7, 8, 9, 10]);
        assert_eq!(window(2, 30), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let data = PaginationData::new("/admin/faq", u32::MAX, 20, 60);
        assert_eq!(data.current_page, 3);
        assert_eq!(data.start_item, 41);
        assert_eq!(data.end_item, 60);
        assert_eq!(data.page_window(), vec![1, 2, 3]);

        let html = render(data);
        assert!(html.contains("page=2"));
    }

    #[test]
    fn test_page_window_with_unclamped_fields() {
        let data = PaginationData {
            current_page: u32::MAX,
            total_pages: u32::MAX,
            ..PaginationData::new("/admin/faq", 1, 20, 60)
        };
        assert_eq!(
            data.page_window(),
            vec![u32::MAX - 4, u32::MAX - 3, u32::MAX - 2, u32::MAX - 1, u32::MAX]
        );

        let html = render(data);
        assert!(html.contains("Previous"));
    }

    #[test]
    fn test_urls_keep_filters_and_only_non_default_limit() {
        let data = PaginationData::new("/admin/faq", 2, 20, 100)
            .with_query("search", "how to")
            .with_query("page", "9");
        assert_eq!(data.page_url(3), "/admin/faq?search=how+to&page=3");
        assert_eq!(data.page_size_url(50), "/admin/faq?search=how+to&page=1&limit=50");

        let wide = PaginationData::new("/admin/faq", 1, 50, 100);
        assert_eq!(wide.page_url(2), "/admin/faq?page=2&limit=50");
    }

    #[test]
    fn test_hidden_without_items() {
        let html = render(PaginationData::new("/admin/faq", 1, 20, 0));
        assert!(!html.contains("Showing"));
    }

    #[test]
    fn test_single_page_shows_only_summary_and_selector() {
        let html = render(PaginationData::new("/admin/faq", 1, 20, 7));
        assert!(html.contains("Showing"));
        assert!(html.contains("Per page:"));
        assert!(!html.contains("Next"));

        let bare = render(PaginationData::new("/admin/faq", 1, 20, 7).without_page_size_selector());
        assert!(!bare.contains("Showing"));
    }

    #[test]
    fn test_ellipses_and_edges() {
        let html = render(PaginationData::new("/admin/faq", 10, 10, 200));
        assert!(html.contains("href=\"/admin/faq?page=1&"));
        assert!(html.contains("href=\"/admin/faq?page=20&"));
        assert!(!html.contains("href=\"/admin/faq?page=2&"));
        assert_eq!(html.matches("...").count(), 2);
        assert!(html.contains("aria-current=\"page\""));
        assert!(html.contains("Previous"));
        assert!(html.contains("Next"));
    }
}
