use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::collections::CollectionSummary;
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::components::table::{SortType, TableColumn, TableData, TableRow, render_table};
use crate::pages::common::{EmptyState, EmptyStateData, muted_dash, page_header};
use crate::view_helpers::format_date;

const COLLECTION_ICON: &str = "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionsListPageData {
    pub collections: Vec<CollectionSummary>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
}

impl TableRow for CollectionSummary {
    fn cell_value(&self, key: &str) -> Option<String> {
        match key {
            "name" => Some(self.name.clone()),
            "display_name" => Some(self.display_name.clone()),
            "description" => self.description.clone().filter(|d| !d.is_empty()),
            "created_at" => Some(format_date(&self.created_at)),
            _ => None,
        }
    }

    fn row_id(&self) -> Option<String> {
        Some(self.id.clone())
    }
}

fn columns() -> Vec<TableColumn<CollectionSummary>> {
    vec![
        TableColumn::new("name", "Name")
            .sortable(SortType::String)
            .render(|_, collection: &CollectionSummary| {
                rsx! {
                    div { class: "flex items-center",
                        div { class: "w-8 h-8 bg-gradient-to-br from-purple-400 to-pink-500 rounded-full mr-3 flex items-center justify-center",
                            span { class: "text-white text-sm font-medium", "{collection.badge()}" }
                        }
                        div { class: "text-sm font-medium text-white", "{collection.name}" }
                    }
                }
            }),
        TableColumn::new("display_name", "Display Name").sortable(SortType::String),
        TableColumn::new("description", "Description")
            .sortable(SortType::String)
            .render(|value, _| match value {
                Some(description) => rsx! { "{description}" },
                None => muted_dash(),
            }),
        TableColumn::new("created_at", "Created").sortable(SortType::Date),
        TableColumn::new("actions", "Actions").render(|_, collection: &CollectionSummary| {
            let content_key = if collection.name.is_empty() { &collection.id } else { &collection.name };
            rsx! {
                div { class: "flex items-center space-x-2",
                    a {
                        href: "/admin/collections/{collection.id}",
                        class: "inline-flex items-center px-3 py-1 border border-white/20 text-sm leading-4 font-medium rounded-md text-gray-300 bg-white/10 hover:bg-white/20 hover:text-white transition-colors",
                        "Edit"
                    }
                    a {
                        href: "/admin/collections/{content_key}/content",
                        class: "inline-flex items-center px-3 py-1 border border-transparent text-sm leading-4 font-medium rounded-md text-white bg-blue-500/20 hover:bg-blue-500/30 transition-colors",
                        "Content"
                    }
                }
            }
        }),
    ]
}

/// Collections index with schema shortcuts.
pub fn render_collections_list_page(data: &CollectionsListPageData) -> String {
    tracing::debug!(collections = data.collections.len(), "Rendering collections list");

    let listing = if data.collections.is_empty() {
        rsx! {
            EmptyState {
                data: EmptyStateData {
                    title: "No collections".to_string(),
                    message: "No collections found. Get started by creating your first collection.".to_string(),
                    action_label: "New Collection".to_string(),
                    action_href: "/admin/collections/new".to_string(),
                    icon: COLLECTION_ICON,
                }
            }
        }
    } else {
        let table = TableData::new(columns(), &data.collections)
            .with_id("collections-table")
            .empty_message("No collections found.");
        render_table(&table)
    };

    let content = rsx! {
        div { class: "py-6",
            {page_header("Collections", "Manage your content collections and their schemas", Some(("/admin/collections/new", "New Collection")))}
            div { class: "backdrop-blur-md bg-black/20 rounded-lg shadow-sm border border-white/10",
                {listing}
            }
        }
    };

    let ctx = LayoutContext::new("Collections", "/admin/collections")
        .with_page_title("Collections")
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, content)
}
