use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::user::AdminUser;

use crate::components::logo::{Logo, LogoData, LogoSize, LogoVariant};
use crate::document::{admin_document, or_body};

/// Everything the admin chrome needs besides the page content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutContext {
    pub title: String,
    #[serde(default)]
    pub page_title: Option<String>,
    pub current_path: String,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

impl LayoutContext {
    pub fn new(title: impl Into<String>, current_path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            current_path: current_path.into(),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, user: Option<AdminUser>) -> Self {
        self.user = user;
        self
    }

    pub fn with_version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn with_page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = Some(page_title.into());
        self
    }

    pub fn with_script(mut self, src: impl Into<String>) -> Self {
        self.scripts.push(src.into());
        self
    }
}

struct MenuItem {
    label: &'static str,
    path: &'static str,
    icon: &'static str,
    outline: bool,
}

static MENU_ITEMS: [MenuItem; 10] = [
    MenuItem {
        label: "Dashboard",
        path: "/admin",
        icon: "M3 4a1 1 0 011-1h12a1 1 0 011 1v2a1 1 0 01-1 1H4a1 1 0 01-1-1V4zM3 10a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H4a1 1 0 01-1-1v-6zM14 9a1 1 0 00-1 1v6a1 1 0 001 1h2a1 1 0 001-1v-6a1 1 0 00-1-1h-2z",
        outline: false,
    },
    MenuItem {
        label: "Content",
        path: "/admin/content",
        icon: "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.586a1 1 0 01.707.293l5.414 5.414a1 1 0 01.293.707V19a2 2 0 01-2 2z",
        outline: true,
    },
    MenuItem {
        label: "Collections",
        path: "/admin/collections",
        icon: "M19 11H5m14 0a2 2 0 012 2v6a2 2 0 01-2 2H5a2 2 0 01-2-2v-6a2 2 0 012-2m14 0V9a2 2 0 00-2-2M5 11V9a2 2 0 012-2m0 0V5a2 2 0 012-2h6a2 2 0 012 2v2M7 7h10",
        outline: true,
    },
    MenuItem {
        label: "Media",
        path: "/admin/media",
        icon: "M4 16l4.586-4.586a2 2 0 012.828 0L16 16m-2-2l1.586-1.586a2 2 0 012.828 0L20 14m-6-6h.01M6 20h12a2 2 0 002-2V6a2 2 0 00-2-2H6a2 2 0 00-2 2v12a2 2 0 002 2z",
        outline: true,
    },
    MenuItem {
        label: "Users",
        path: "/admin/users",
        icon: "M13 6a3 3 0 11-6 0 3 3 0 016 0zM18 8a2 2 0 11-4 0 2 2 0 014 0zM14 15a4 4 0 00-8 0v3h8v-3z",
        outline: false,
    },
    MenuItem {
        label: "FAQ",
        path: "/admin/faq",
        icon: "M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-8-4a1 1 0 00-1 1v3a1 1 0 002 0V7a1 1 0 00-1-1zm0 8a1 1 0 100-2 1 1 0 000 2z",
        outline: false,
    },
    MenuItem {
        label: "Plugins",
        path: "/admin/plugins",
        icon: "M11 4a2 2 0 114 0v1a1 1 0 001 1h3a1 1 0 011 1v3a1 1 0 01-1 1h-1a2 2 0 100 4h1a1 1 0 011 1v3a1 1 0 01-1 1h-3a1 1 0 01-1-1v-1a2 2 0 10-4 0v1a1 1 0 01-1 1H7a1 1 0 01-1-1v-3a1 1 0 00-1-1H4a2 2 0 110-4h1a1 1 0 001-1V7a1 1 0 011-1h3a1 1 0 001-1V4z",
        outline: true,
    },
    MenuItem {
        label: "Design",
        path: "/admin/design",
        icon: "M7 21a4 4 0 01-4-4V5a2 2 0 012-2h4a2 2 0 012 2v12a4 4 0 01-4 4zM21 5a2 2 0 00-2-2h-4a2 2 0 00-2 2v12a4 4 0 004 4h4a2 2 0 002-2V5z",
        outline: true,
    },
    MenuItem {
        label: "Settings",
        path: "/admin/settings",
        icon: "M11.49 3.17c-.38-1.56-2.6-1.56-2.98 0a1.532 1.532 0 01-2.286.948c-1.372-.836-2.942.734-2.106 2.106.54.886.061 2.042-.947 2.287-1.561.379-1.561 2.6 0 2.978a1.532 1.532 0 01.947 2.287c-.836 1.372.734 2.942 2.106 2.106a1.532 1.532 0 012.287.947c.379 1.561 2.6 1.561 2.978 0a1.533 1.533 0 012.287-.947c1.372.836 2.942-.734 2.106-2.106a1.533 1.533 0 01.947-2.287c1.561-.379 1.561-2.6 0-2.978a1.532 1.532 0 01-.947-2.287c.836-1.372-.734-2.942-2.106-2.106a1.532 1.532 0 01-2.287-.947zM10 13a3 3 0 100-6 3 3 0 000 6z",
        outline: false,
    },
    MenuItem {
        label: "API Reference",
        path: "/admin/api-reference",
        icon: "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        outline: true,
    },
];

/// A menu entry is active on its exact path, and non-root entries also on any sub-path.
pub fn is_menu_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path || (item_path != "/admin" && current_path.starts_with(item_path))
}

#[component]
fn Sidebar(current_path: String) -> Element {
    rsx! {
        nav { class: "backdrop-blur-md bg-black/30 rounded-xl border border-white/10 shadow-xl p-6 h-[calc(100vh-9.5rem)] sticky top-8",
            div { class: "space-y-4",
                for item in MENU_ITEMS.iter() {
                    {menu_link(item, is_menu_active(&current_path, item.path))}
                }
            }
        }
    }
}

fn menu_link(item: &MenuItem, active: bool) -> Element {
    let class = if active {
        "flex items-center space-x-3 text-white bg-white/20 rounded-lg px-3 py-2 transition-all hover:bg-white/10"
    } else {
        "flex items-center space-x-3 text-gray-300 hover:text-white rounded-lg px-3 py-2 transition-all hover:bg-white/10"
    };
    let (fill, stroke, view_box) = if item.outline {
        ("none", Some("currentColor"), "0 0 24 24")
    } else {
        ("currentColor", None, "0 0 20 20")
    };
    let stroke_width = item.outline.then_some("2");

    rsx! {
        a {
            href: item.path,
            class: class,
            "aria-current": if active { "page" },
            svg { class: "w-5 h-5", "fill": fill, "stroke": stroke, "viewBox": view_box,
                path { "stroke-linecap": "round", "stroke-linejoin": "round", "stroke-width": stroke_width, "d": item.icon }
            }
            span { "{item.label}" }
        }
    }
}

#[component]
fn TopBar(page_title: Option<String>, user: Option<AdminUser>, version: Option<String>) -> Element {
    let logo = LogoData {
        size: LogoSize::Md,
        variant: LogoVariant::White,
        show_text: true,
        version,
        href: Some("/admin".to_string()),
        ..Default::default()
    };
    let account = match user {
        Some(user) => rsx! { UserMenu { user: user } },
        None => rsx! {
            a {
                href: "/auth/login",
                class: "backdrop-blur-md bg-white/10 px-4 py-2 rounded-lg text-white font-medium hover:bg-white/20 transition-all",
                "Sign In"
            }
        },
    };

    rsx! {
        header { class: "backdrop-blur-md bg-white/10 border-b border-white/20 shadow-lg relative z-[9998]",
            div { class: "px-4 sm:px-6 lg:px-8",
                div { class: "flex justify-between items-center py-4",
                    div { class: "flex items-center space-x-4",
                        Logo { data: logo }
                        if let Some(page_title) = &page_title {
                            span { class: "hidden md:inline text-sm text-gray-300", "{page_title}" }
                        }
                    }
                    div { class: "flex items-center space-x-4", {account} }
                }
            }
        }
    }
}

#[component]
fn UserMenu(user: AdminUser) -> Element {
    let menu_link = "flex items-center gap-3 px-4 py-2 text-sm text-gray-300 hover:bg-white/10 hover:text-white transition-colors";

    rsx! {
        div { class: "relative z-[9999]",
            button {
                r#type: "button",
                class: "flex items-center space-x-3 p-2 rounded-lg hover:bg-white/10 transition-colors group",
                "data-user-menu": "true",
                "onclick": "toggleUserDropdown()",
                div { class: "w-8 h-8 bg-gradient-to-br from-green-400 to-blue-500 rounded-full flex items-center justify-center",
                    span { class: "text-white text-sm font-medium", "{user.initial()}" }
                }
                div { class: "hidden md:block text-left",
                    div { class: "text-white text-sm font-medium", "{user.name}" }
                    div { class: "text-gray-400 text-xs", "{user.role_label()}" }
                }
            }
            div {
                id: "userDropdown",
                class: "hidden absolute right-0 mt-2 w-48 backdrop-blur-md bg-black/95 rounded-xl border border-white/10 shadow-xl z-[9999]",
                div { class: "py-2",
                    div { class: "px-4 py-2 border-b border-white/10",
                        p { class: "text-sm font-medium text-gray-100", "{user.name}" }
                        p { class: "text-xs text-gray-400", "{user.email}" }
                    }
                    a { href: "/admin/profile", class: menu_link, "My Profile" }
                    a { href: "/admin/settings", class: menu_link, "Settings" }
                    a {
                        href: "/auth/logout",
                        class: "flex items-center gap-3 px-4 py-2 text-sm text-red-300 hover:bg-red-500/10 hover:text-red-200 transition-colors",
                        "Sign Out"
                    }
                }
            }
        }
    }
}

fn admin_shell(ctx: &LayoutContext, content: Element) -> Element {
    rsx! {
        div {
            id: "background-overlay",
            class: "fixed inset-0 backdrop-blur-sm",
            style: "background-color: rgba(0, 0, 0, 0.2);",
        }
        div { class: "relative z-10 min-h-screen",
            TopBar {
                page_title: ctx.page_title.clone(),
                user: ctx.user.clone(),
                version: ctx.version.clone(),
            }
            div { class: "px-4 sm:px-6 lg:px-8 py-8",
                div { class: "grid grid-cols-1 lg:grid-cols-5 gap-6",
                    div { class: "lg:col-span-1",
                        Sidebar { current_path: ctx.current_path.clone() }
                    }
                    div { class: "lg:col-span-4", {content} }
                }
            }
        }
        div { id: "notification-container", class: "fixed top-4 right-4 z-50 space-y-2" }
    }
}

/// Wraps page content in the admin chrome and document shell.
pub fn render_admin_layout(ctx: &LayoutContext, content: Element) -> String {
    let body = dioxus_ssr::render_element(admin_shell(ctx, content));
    let document = admin_document(&ctx.title, &ctx.styles, &ctx.scripts, &body);
    or_body(document, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_labels(html: &str) -> Vec<&'static str> {
        html.split("<a ")
            .skip(1)
            .filter_map(|segment| segment.find('>').map(|end| &segment[..end]))
            .filter(|tag| tag.contains("aria-current=\"page\""))
            .filter_map(|tag| {
                MENU_ITEMS
                    .iter()
                    .find(|item| tag.contains(&format!("href=\"{}\"", item.path)))
                    .map(|item| item.label)
            })
            .collect()
    }

    #[test]
    fn test_menu_active_rules() {
        assert!(is_menu_active("/admin", "/admin"));
        assert!(!is_menu_active("/admin/content", "/admin"));
        assert!(is_menu_active("/admin/content/new", "/admin/content"));
        assert!(!is_menu_active("/admin/collections", "/admin/content"));
    }

    #[test]
    fn test_layout_highlights_current_section() {
        let ctx = LayoutContext::new("Edit post", "/admin/content/42/edit");
        let html = render_admin_layout(&ctx, rsx! { p { "page body" } });

        assert!(html.contains("<title>Edit post - SonicJS AI Admin</title>"));
        assert!(html.contains("<p>page body</p>"));
        assert_eq!(active_labels(&html), vec!["Content"]);

        let dashboard = render_admin_layout(&LayoutContext::new("Dashboard", "/admin"), rsx! {});
        assert_eq!(active_labels(&dashboard), vec!["Dashboard"]);
    }

    #[test]
    fn test_layout_without_user_offers_sign_in() {
        let html = render_admin_layout(&LayoutContext::new("FAQ", "/admin/faq"), rsx! {});
        assert!(html.contains("Sign In"));
        assert!(!html.contains("userDropdown\""));
        assert!(html.contains("id=\"notification-container\""));
    }

    #[test]
    fn test_layout_user_menu() {
        let mut user = AdminUser::new("grace <admin>", "grace@example.com", "");
        user.role = None;
        let ctx = LayoutContext::new("FAQ", "/admin/faq")
            .with_user(Some(user))
            .with_version(Some("v2.0.0".to_string()));
        let html = render_admin_layout(&ctx, rsx! {});

        assert!(html.contains("grace &lt;admin&gt;"));
        assert!(html.contains("Administrator"));
        assert!(html.contains("grace@example.com"));
        assert!(html.contains("Sign Out"));
        assert!(html.contains("v2.0.0"));
        assert!(!html.contains(">Sign In<"));
    }
}
