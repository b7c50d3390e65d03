use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::logs::{LogCategory, LogConfig, LogLevel};
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::view_helpers::format_date;

pub const RETENTION_DAYS_MIN: u32 = 1;
pub const RETENTION_DAYS_MAX: u32 = 365;
pub const MAX_SIZE_MIN: u32 = 100;
pub const MAX_SIZE_MAX: u32 = 100_000;

const CONFIG_INPUT_CLASS: &str = "mt-1 block w-full rounded-md bg-white/10 border border-white/20 text-white shadow-sm focus:border-indigo-500 focus:ring-indigo-500 sm:text-sm";
const PILL_CLASS: &str = "px-2 inline-flex text-xs leading-5 font-semibold rounded-full";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogConfigPageData {
    #[serde(default)]
    pub configs: Vec<LogConfig>,
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub version: Option<String>,
}

fn level_badge_class(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Debug => "bg-gray-100 text-gray-800",
        LogLevel::Info => "bg-blue-100 text-blue-800",
        LogLevel::Warn => "bg-yellow-100 text-yellow-800",
        LogLevel::Error => "bg-red-100 text-red-800",
        LogLevel::Fatal => "bg-purple-100 text-purple-800",
    }
}

fn level_reference() -> Element {
    rsx! {
        div { class: "mt-6 backdrop-blur-md bg-black/20 rounded-xl border border-white/10",
            div { class: "px-6 py-4 border-b border-white/10",
                h2 { class: "text-lg font-medium text-white", "Log Levels Reference" }
            }
            div { class: "px-6 py-4",
                div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-5",
                    for level in LogLevel::ALL {
                        div { class: "text-center",
                            span { class: "{PILL_CLASS} {level_badge_class(level)}", "{level.as_str()}" }
                            p { class: "mt-2 text-xs text-gray-400", "{level.description()}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConfigCard(config: LogConfig) -> Element {
    let category = config.category.as_str();
    let max_size = config.max_size.map(|n| n.to_string()).unwrap_or_default();
    let (status_class, status_label) = if config.enabled {
        ("bg-green-100 text-green-800", "Enabled")
    } else {
        ("bg-red-100 text-red-800", "Disabled")
    };

    rsx! {
        div { class: "backdrop-blur-md bg-black/20 rounded-xl border border-white/10 overflow-hidden", "data-category": category,
            div { class: "px-6 py-4 border-b border-white/10",
                div { class: "flex items-center justify-between",
                    h3 { class: "text-lg font-medium text-white capitalize", "{category}" }
                    span { class: "{PILL_CLASS} {status_class}", "{status_label}" }
                }
            }
            form {
                "hx-post": "/admin/logs/config/{category}",
                "hx-target": "#config-result-{category}",
                div { class: "px-6 py-4 space-y-4",
                    div { class: "flex items-center",
                        input {
                            id: "enabled-{category}",
                            name: "enabled",
                            r#type: "checkbox",
                            checked: config.enabled,
                            class: "h-4 w-4 text-indigo-600 focus:ring-indigo-500 border-gray-300 rounded",
                        }
                        label { r#for: "enabled-{category}", class: "ml-2 block text-sm text-gray-200",
                            "Enable logging for this category"
                        }
                    }
                    div {
                        label { r#for: "level-{category}", class: "block text-sm font-medium text-gray-300", "Minimum Log Level" }
                        select { id: "level-{category}", name: "level", class: CONFIG_INPUT_CLASS,
                            for level in LogLevel::ALL {
                                option { value: level.as_str(), selected: level == config.level, "{level.label()}" }
                            }
                        }
                        p { class: "mt-1 text-sm text-gray-400", "Only logs at this level or higher will be stored" }
                    }
                    div {
                        label { r#for: "retention-{category}", class: "block text-sm font-medium text-gray-300", "Retention Period (days)" }
                        input {
                            r#type: "number",
                            id: "retention-{category}",
                            name: "retention",
                            value: "{config.retention}",
                            "min": "{RETENTION_DAYS_MIN}",
                            "max": "{RETENTION_DAYS_MAX}",
                            class: CONFIG_INPUT_CLASS,
                        }
                        p { class: "mt-1 text-sm text-gray-400", "Logs older than this will be deleted" }
                    }
                    div {
                        label { r#for: "max_size-{category}", class: "block text-sm font-medium text-gray-300", "Maximum Log Count" }
                        input {
                            r#type: "number",
                            id: "max_size-{category}",
                            name: "max_size",
                            value: "{max_size}",
                            "min": "{MAX_SIZE_MIN}",
                            "max": "{MAX_SIZE_MAX}",
                            class: CONFIG_INPUT_CLASS,
                        }
                        p { class: "mt-1 text-sm text-gray-400", "Maximum number of logs to keep for this category" }
                    }
                }
                div { class: "px-6 py-4 border-t border-white/10",
                    div { id: "config-result-{category}", class: "mb-4" }
                    button {
                        r#type: "submit",
                        class: "w-full inline-flex justify-center items-center px-4 py-2 text-sm font-medium rounded-md text-white bg-indigo-600 hover:bg-indigo-700",
                        "Update Configuration"
                    }
                }
            }
            div { class: "px-6 py-3 border-t border-white/10",
                div { class: "text-xs text-gray-400",
                    div { "Created: {format_date(&config.created_at)}" }
                    div { "Updated: {format_date(&config.updated_at)}" }
                }
            }
        }
    }
}

fn global_settings() -> Element {
    let storage = ["Total Log Entries", "Storage Used", "Oldest Log"];

    rsx! {
        div { class: "mt-8 backdrop-blur-md bg-black/20 rounded-xl border border-white/10",
            div { class: "px-6 py-4 border-b border-white/10",
                h2 { class: "text-lg font-medium text-white", "Global Log Settings" }
            }
            div { class: "px-6 py-4 space-y-6",
                div {
                    h3 { class: "text-base font-medium text-white", "Storage Information" }
                    div { class: "mt-2 grid grid-cols-1 gap-4 sm:grid-cols-3",
                        for label in storage {
                            div { class: "bg-white/5 rounded-lg p-4",
                                div { class: "text-2xl font-bold text-white", "-" }
                                div { class: "text-sm text-gray-400", "{label}" }
                            }
                        }
                    }
                }
                div {
                    h3 { class: "text-base font-medium text-white", "Log Categories" }
                    ul { class: "mt-2 text-sm text-gray-300 list-disc list-inside space-y-1",
                        for category in LogCategory::ALL {
                            li {
                                strong { "{category.as_str()}" }
                                " - {category.description()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Per-category logging settings with a retention cleanup action.
pub fn render_log_config_page(data: &LogConfigPageData) -> String {
    tracing::debug!(configs = data.configs.len(), "Rendering log configuration");

    let content = rsx! {
        div { class: "px-4 sm:px-6 lg:px-8",
            div { class: "sm:flex sm:items-center",
                div { class: "sm:flex-auto",
                    nav { class: "mb-4",
                        a { href: "/admin/logs", class: "text-indigo-400 hover:text-indigo-300", "← Back to Logs" }
                    }
                    h1 { class: "text-2xl font-semibold text-white", "Log Configuration" }
                    p { class: "mt-2 text-sm text-gray-300",
                        "Configure logging settings for different categories and manage log retention policies."
                    }
                }
                div { class: "mt-4 sm:mt-0 sm:ml-16 sm:flex-none",
                    button {
                        r#type: "button",
                        "hx-post": "/admin/logs/cleanup",
                        "hx-confirm": "Are you sure you want to run log cleanup? This will permanently delete old logs based on retention policies.",
                        "hx-target": "#cleanup-result",
                        class: "inline-flex items-center justify-center rounded-md bg-red-600 px-4 py-2 text-sm font-medium text-white shadow-sm hover:bg-red-700",
                        "Run Cleanup"
                    }
                }
            }
            div { id: "cleanup-result", class: "mt-4" }
            {level_reference()}
            div { class: "mt-8 grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3",
                for config in data.configs.iter() {
                    ConfigCard { config: config.clone() }
                }
            }
            {global_settings()}
        }
    };

    let ctx = LayoutContext::new("Log Configuration", "/admin/logs/config")
        .with_page_title("Log Configuration")
        .with_user(data.user.clone())
        .with_version(data.version.clone());
    render_admin_layout(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn config(category: LogCategory, enabled: bool, level: LogLevel, max_size: Option<u32>) -> LogConfig {
        LogConfig {
            category,
            enabled,
            level,
            retention: 30,
            max_size,
            created_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 2, 9, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_log_config_cards() {
        let data = LogConfigPageData {
            configs: vec![
                config(LogCategory::Auth, true, LogLevel::Warn, Some(5000)),
                config(LogCategory::Media, false, LogLevel::Debug, None),
            ],
            ..Default::default()
        };
        let html = render_log_config_page(&data);

        assert!(html.contains("hx-post=\"/admin/logs/config/auth\""));
        assert!(html.contains("id=\"config-result-media\""));
        assert!(html.contains("Enabled"));
        assert!(html.contains("Disabled"));
        assert!(html.contains("value=\"5000\""));
        assert!(html.contains("max=\"365\""));
        assert!(html.contains("min=\"100\""));
        assert!(html.contains("Created: 2/1/2024"));
        assert!(html.contains("Updated: 2/9/2024"));

        let auth = html.find("data-category=\"auth\"").unwrap();
        let media = html.find("data-category=\"media\"").unwrap();
        let warn = html[auth..media].find("value=\"warn\"").unwrap() + auth;
        let tag = &html[warn..html[warn..].find('>').unwrap() + warn];
        assert!(tag.contains("selected"));
    }

    #[test]
    fn test_cleanup_and_reference() {
        let html = render_log_config_page(&LogConfigPageData::default());

        assert!(html.contains("hx-post=\"/admin/logs/cleanup\""));
        assert!(html.contains("hx-target=\"#cleanup-result\""));
        assert!(html.contains("Critical system errors"));
        assert!(html.contains("Security-related events and alerts"));
        assert!(html.contains("Log Configuration - SonicJS AI Admin"));
    }
}
