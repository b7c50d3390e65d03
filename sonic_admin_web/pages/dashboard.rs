use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use sonic_admin_types::dashboard::{ActivityItem, ActivityKind, DashboardStats};
use sonic_admin_types::user::AdminUser;

use crate::components::layout::{LayoutContext, render_admin_layout};
use crate::view_helpers::{format_bytes, format_number, format_relative_time, initials};

const DATABASE_LIMIT_GB: f64 = 10.0;
const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;
const CARD_COLORS: [&str; 4] = ["text-cyan-400", "text-lime-400", "text-pink-400", "text-purple-400"];
const PANEL_CLASS: &str = "rounded-lg bg-white dark:bg-zinc-900 shadow-sm ring-1 ring-zinc-950/5 dark:ring-white/10";
const PANEL_HEADER_CLASS: &str = "border-b border-zinc-950/5 dark:border-white/10 px-6 py-6";
const PANEL_TITLE_CLASS: &str = "text-base/7 font-semibold text-zinc-950 dark:text-white";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js";
/// Number of one-second samples kept on the requests chart.
const CHART_POINTS: usize = 60;

const CHART_SCRIPT: &str = r#"(function () {
  const ctx = document.getElementById('requestsChart');
  if (!ctx || typeof Chart === 'undefined') return;
  const maxDataPoints = __POINTS__;
  const labels = [];
  const data = [];
  for (let i = maxDataPoints - 1; i >= 0; i--) {
    labels.push('-' + i + 's');
    data.push(0);
  }
  const isDark = document.documentElement.classList.contains('dark');
  const muted = isDark ? 'rgb(161, 161, 170)' : 'rgb(113, 113, 122)';
  const chart = new Chart(ctx, {
    type: 'line',
    data: {
      labels: labels,
      datasets: [{
        label: 'Requests/sec',
        data: data,
        borderColor: isDark ? 'rgb(34, 211, 238)' : 'rgb(6, 182, 212)',
        backgroundColor: isDark ? 'rgba(34, 211, 238, 0.1)' : 'rgba(6, 182, 212, 0.1)',
        borderWidth: 2,
        fill: true,
        tension: 0.4,
        pointRadius: 0,
        pointHoverRadius: 4
      }]
    },
    options: {
      responsive: true,
      maintainAspectRatio: false,
      plugins: {
        legend: { display: false },
        tooltip: {
          displayColors: false,
          callbacks: {
            label: function (context) { return 'Requests/sec: ' + context.parsed.y.toFixed(2); }
          }
        }
      },
      scales: {
        y: {
          beginAtZero: true,
          border: { display: false },
          grid: { color: isDark ? 'rgba(255, 255, 255, 0.05)' : 'rgba(0, 0, 0, 0.05)' },
          ticks: { color: muted, padding: 8, callback: function (value) { return value.toFixed(1); } }
        },
        x: {
          border: { display: false },
          grid: { display: false },
          ticks: { color: muted, padding: 8, maxTicksLimit: 6 }
        }
      }
    }
  });
  window.addEventListener('htmx:afterRequest', function (event) {
    if (event.detail.pathInfo.requestPath !== '/admin/api/metrics') return;
    try {
      const metrics = JSON.parse(event.detail.xhr.responseText);
      const rps = document.getElementById('current-rps');
      if (rps) rps.textContent = metrics.requestsPerSecond.toFixed(2);
      chart.data.datasets[0].data.shift();
      chart.data.datasets[0].data.push(metrics.requestsPerSecond);
      const next = [];
      for (let i = maxDataPoints - 1; i >= 1; i--) next.push('-' + i + 's');
      next.push('now');
      chart.data.labels = next;
      chart.update('none');
    } catch (e) {
      console.error('Error updating metrics:', e);
    }
  });
})();"#;

const REFRESH_SCRIPT: &str = r#"function refreshDashboard() {
  htmx.trigger('#stats-container', 'htmx:load');
  showNotification('Dashboard refreshed', 'success');
}"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPageData {
    #[serde(default)]
    pub user: Option<AdminUser>,
    #[serde(default)]
    pub stats: Option<DashboardStats>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
struct StatCard {
    title: &'static str,
    value: u64,
    change: &'static str,
    positive: bool,
}

impl StatCard {
    fn badge_class(&self) -> &'static str {
        if self.positive {
            "bg-lime-400/10 text-lime-600 dark:text-lime-400"
        } else {
            "bg-pink-400/10 text-pink-600 dark:text-pink-400"
        }
    }
}

fn stat_cards(stats: &DashboardStats) -> Vec<StatCard> {
    vec![
        StatCard {
            title: "Total Collections",
            value: stats.collections,
            change: "12.5",
            positive: true,
        },
        StatCard {
            title: "Content Items",
            value: stats.content_items,
            change: "8.2",
            positive: true,
        },
        StatCard {
            title: "Media Files",
            value: stats.media_files,
            change: "15.3",
            positive: true,
        },
        StatCard {
            title: "Active Users",
            value: stats.users,
            change: "2.4",
            positive: false,
        },
    ]
}

#[component]
fn StatsCards(stats: DashboardStats) -> Element {
    let cards = stat_cards(&stats);

    rsx! {
        div {
            h3 { class: "text-base font-semibold text-zinc-950 dark:text-white", "Last 30 days" }
            dl { class: "mt-5 grid grid-cols-1 divide-zinc-950/5 dark:divide-white/10 overflow-hidden rounded-lg bg-zinc-800/75 ring-1 ring-inset ring-zinc-950/10 dark:ring-white/10 md:grid-cols-4 md:divide-x md:divide-y-0",
                for (card, color) in cards.into_iter().zip(CARD_COLORS) {
                    div { class: "px-4 py-5 sm:p-6",
                        dt { class: "text-base font-normal text-zinc-700 dark:text-zinc-100", "{card.title}" }
                        dd { class: "mt-1 flex items-baseline justify-between md:block lg:flex",
                            div { class: "flex items-baseline text-2xl font-semibold {color}", "{card.value}" }
                            div { class: "inline-flex items-baseline rounded-full {card.badge_class()} px-2.5 py-0.5 text-sm font-medium md:mt-2 lg:mt-0",
                                span { class: "sr-only", if card.positive { "Increased by" } else { "Decreased by" } }
                                "{card.change}%"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn stats_skeleton() -> Element {
    rsx! {
        div {
            div { class: "h-6 w-32 bg-zinc-200 dark:bg-zinc-700 rounded animate-pulse mb-5" }
            div { class: "grid grid-cols-1 overflow-hidden rounded-lg bg-zinc-800/75 ring-1 ring-inset ring-zinc-950/10 dark:ring-white/10 md:grid-cols-4 md:divide-x md:divide-y-0",
                for _ in 0..4 {
                    div { class: "px-4 py-5 sm:p-6 animate-pulse",
                        div { class: "h-4 w-24 bg-zinc-200 dark:bg-zinc-700 rounded mb-3" }
                        div { class: "h-8 w-16 bg-zinc-200 dark:bg-zinc-700 rounded" }
                    }
                }
            }
        }
    }
}

/// Avatar background and text colour for an activity. `None` is the placeholder entry.
fn activity_colors(kind: Option<ActivityKind>) -> (&'static str, &'static str) {
    match kind {
        Some(ActivityKind::Content) => ("bg-lime-500/10 dark:bg-lime-400/10", "text-lime-700 dark:text-lime-300"),
        Some(ActivityKind::Media) => ("bg-cyan-500/10 dark:bg-cyan-400/10", "text-cyan-700 dark:text-cyan-300"),
        Some(ActivityKind::User) => ("bg-pink-500/10 dark:bg-pink-400/10", "text-pink-700 dark:text-pink-300"),
        Some(ActivityKind::Collection) => {
            ("bg-purple-500/10 dark:bg-purple-400/10", "text-purple-700 dark:text-purple-300")
        }
        None => ("bg-gray-500/10 dark:bg-gray-400/10", "text-gray-700 dark:text-gray-300"),
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ActivityRow {
    description: String,
    user: String,
    initials: String,
    time: String,
    bg_class: &'static str,
    text_class: &'static str,
}

fn activity_rows(activities: &[ActivityItem], now: &DateTime<Utc>) -> Vec<ActivityRow> {
    if activities.is_empty() {
        let (bg_class, text_class) = activity_colors(None);
        return vec![ActivityRow {
            description: "No recent activity".to_string(),
            user: "System".to_string(),
            initials: "SY".to_string(),
            time: String::new(),
            bg_class,
            text_class,
        }];
    }

    activities
        .iter()
        .map(|activity| {
            let (bg_class, text_class) = activity_colors(Some(activity.kind));
            ActivityRow {
                description: activity.description.clone(),
                user: activity.user.clone(),
                initials: initials(&activity.user),
                time: format_relative_time(&activity.timestamp, now),
                bg_class,
                text_class,
            }
        })
        .collect()
}

#[component]
fn RecentActivity(rows: Vec<ActivityRow>) -> Element {
    rsx! {
        div { class: PANEL_CLASS,
            div { class: PANEL_HEADER_CLASS,
                div { class: "flex items-center justify-between",
                    h3 { class: PANEL_TITLE_CLASS, "Recent Activity" }
                    button { class: "text-xs/5 font-medium text-zinc-500 hover:text-zinc-700 dark:text-zinc-400 dark:hover:text-zinc-300 transition-colors",
                        "View all"
                    }
                }
            }
            div { class: "px-6 py-6",
                ul { "role": "list", class: "space-y-6",
                    for row in rows.iter() {
                        li { class: "relative flex gap-x-4",
                            div { class: "flex h-10 w-10 flex-none items-center justify-center rounded-full {row.bg_class}",
                                span { class: "text-xs font-semibold {row.text_class}", "{row.initials}" }
                            }
                            div { class: "flex-auto",
                                p { class: "text-sm/6 font-medium text-zinc-950 dark:text-white", "{row.description}" }
                                p { class: "mt-1 text-xs/5 text-zinc-500 dark:text-zinc-400",
                                    span { class: "font-medium text-zinc-950 dark:text-white", "{row.user}" }
                                    span { class: "text-zinc-400 dark:text-zinc-500", " · " }
                                    "{row.time}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn activity_skeleton() -> Element {
    rsx! {
        div { class: "{PANEL_CLASS} animate-pulse",
            div { class: PANEL_HEADER_CLASS,
                div { class: "h-5 w-32 bg-zinc-200 dark:bg-zinc-700 rounded" }
            }
            div { class: "px-6 py-6",
                div { class: "space-y-6",
                    for _ in 0..3 {
                        div { class: "flex gap-x-4",
                            div { class: "h-10 w-10 rounded-full bg-zinc-200 dark:bg-zinc-700" }
                            div { class: "flex-auto space-y-2",
                                div { class: "h-4 w-48 bg-zinc-200 dark:bg-zinc-700 rounded" }
                                div { class: "h-3 w-32 bg-zinc-200 dark:bg-zinc-700 rounded" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Share of the database quota in use, kept between 0.5 and 100 so the bar stays visible.
pub fn database_usage_percent(database_size: Option<u64>) -> f64 {
    let used_gb = database_size.unwrap_or(0) as f64 / BYTES_PER_GB;
    (used_gb / DATABASE_LIMIT_GB * 100.0).clamp(0.5, 100.0)
}

fn usage_bar_class(percent: f64) -> &'static str {
    if percent > 80.0 {
        "bg-red-500 dark:bg-red-400"
    } else if percent > 60.0 {
        "bg-amber-500 dark:bg-amber-400"
    } else {
        "bg-cyan-500 dark:bg-cyan-400"
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StorageItem {
    label: &'static str,
    used: String,
    total: &'static str,
    percent: f64,
    bar_class: &'static str,
    note: Option<&'static str>,
}

fn storage_items(database_size: Option<u64>, media_size: Option<u64>) -> Vec<StorageItem> {
    let database_percent = database_usage_percent(database_size);
    vec![
        StorageItem {
            label: "Database",
            used: database_size
                .filter(|b| *b > 0)
                .map(format_bytes)
                .unwrap_or_else(|| "Unknown".to_string()),
            total: "10 GB",
            percent: database_percent,
            bar_class: usage_bar_class(database_percent),
            note: None,
        },
        StorageItem {
            label: "Media Files",
            used: format_bytes(media_size.unwrap_or(0)),
            total: "∞",
            percent: 0.0,
            bar_class: "bg-lime-500 dark:bg-lime-400",
            note: Some("Stored in R2"),
        },
        StorageItem {
            label: "Cache (KV)",
            used: "N/A".to_string(),
            total: "∞",
            percent: 0.0,
            bar_class: "bg-purple-500 dark:bg-purple-400",
            note: Some("Unlimited"),
        },
    ]
}

#[component]
fn StorageUsage(items: Vec<StorageItem>) -> Element {
    rsx! {
        div { class: PANEL_CLASS,
            div { class: PANEL_HEADER_CLASS,
                h3 { class: PANEL_TITLE_CLASS, "Storage Usage" }
            }
            div { class: "px-6 py-6",
                dl { class: "space-y-6",
                    for item in items.iter() {
                        div {
                            div { class: "flex items-center justify-between mb-2",
                                dt { class: "text-sm/6 text-zinc-500 dark:text-zinc-400",
                                    "{item.label}"
                                    if let Some(note) = item.note {
                                        span { class: "ml-2 text-xs text-zinc-400 dark:text-zinc-500", "({note})" }
                                    }
                                }
                                dd { class: "text-sm/6 font-medium text-zinc-950 dark:text-white", "{item.used} / {item.total}" }
                            }
                            div { class: "w-full bg-zinc-100 dark:bg-zinc-800 rounded-full h-1.5 overflow-hidden",
                                div {
                                    class: "{item.bar_class} h-full rounded-full transition-all duration-300",
                                    style: "width: {format_number(item.percent)}%",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn analytics_chart() -> Element {
    let script = CHART_SCRIPT.replace("__POINTS__", &CHART_POINTS.to_string());

    rsx! {
        div { class: PANEL_CLASS,
            div { class: PANEL_HEADER_CLASS,
                div { class: "flex flex-wrap items-start justify-between gap-3 sm:flex-nowrap",
                    div {
                        h3 { class: PANEL_TITLE_CLASS, "Real-Time Analytics" }
                        p { class: "mt-1 text-sm/6 text-zinc-500 dark:text-zinc-400", "Requests per second (live)" }
                    }
                    div { class: "flex items-center gap-2",
                        div { class: "h-2 w-2 rounded-full bg-lime-500 animate-pulse" }
                        span { class: "text-xs text-zinc-500 dark:text-zinc-400", "Live" }
                    }
                }
                div { class: "mt-4 flex items-baseline gap-2",
                    span { id: "current-rps", class: "text-4xl font-bold text-cyan-500 dark:text-cyan-400", "0" }
                    span { class: "text-sm text-zinc-500 dark:text-zinc-400", "req/s" }
                }
            }
            div { class: "px-6 py-6",
                canvas { id: "requestsChart", class: "w-full", style: "height: 300px;" }
            }
            div {
                "hx-get": "/admin/api/metrics",
                "hx-trigger": "every 1s",
                "hx-swap": "none",
                style: "display: none;",
            }
        }
        script { dangerous_inner_html: "{script}" }
    }
}

fn quick_actions() -> Element {
    let actions = [
        ("Create Content", "Add new blog post or page", "/admin/content/new"),
        ("Upload Media", "Add images and files", "/admin/media"),
        ("Manage Users", "Add or edit user accounts", "/admin/users"),
    ];

    rsx! {
        div { class: PANEL_CLASS,
            div { class: PANEL_HEADER_CLASS,
                h3 { class: PANEL_TITLE_CLASS, "Quick Actions" }
            }
            div { class: "p-6",
                div { class: "space-y-2",
                    for (title, description, href) in actions {
                        a { href: href, class: "group flex items-center gap-x-3 rounded-lg px-3 py-2 hover:bg-zinc-50 dark:hover:bg-zinc-800/50 transition-colors",
                            div { class: "flex-auto",
                                p { class: "text-sm/6 font-medium text-zinc-950 dark:text-white", "{title}" }
                                p { class: "text-xs/5 text-zinc-500 dark:text-zinc-400", "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn system_status() -> Element {
    rsx! {
        div { class: "{PANEL_CLASS} overflow-hidden",
            div { class: PANEL_HEADER_CLASS,
                div { class: "flex items-center justify-between",
                    h3 { class: PANEL_TITLE_CLASS, "System Status" }
                    div { class: "flex items-center gap-2",
                        div { class: "h-2 w-2 rounded-full bg-lime-500 animate-pulse" }
                        span { class: "text-xs text-zinc-500 dark:text-zinc-400", "Live" }
                    }
                }
            }
            div {
                id: "system-status-container",
                class: "p-6",
                "hx-get": "/admin/api/system-status",
                "hx-trigger": "load, every 30s",
                "hx-swap": "innerHTML",
                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    for _ in 0..4 {
                        div { class: "bg-zinc-50 dark:bg-zinc-800/50 rounded-xl p-5 border border-zinc-200/50 dark:border-zinc-700/50 animate-pulse",
                            div { class: "h-4 w-24 bg-zinc-200 dark:bg-zinc-700 rounded mb-3" }
                            div { class: "h-3 w-20 bg-zinc-200 dark:bg-zinc-700 rounded" }
                        }
                    }
                }
            }
        }
    }
}

fn header_links() -> Element {
    rsx! {
        div { class: "mb-8 flex flex-col sm:flex-row sm:items-center sm:justify-between",
            div {
                h1 { class: "text-2xl/8 font-semibold text-zinc-950 dark:text-white sm:text-xl/8", "Dashboard" }
                p { class: "mt-2 text-sm/6 text-zinc-500 dark:text-zinc-400", "Welcome to your SonicJS AI admin dashboard" }
            }
            div { class: "mt-4 sm:mt-0 flex items-center gap-x-3",
                a {
                    href: "/docs/getting-started",
                    target: "_blank",
                    class: "inline-flex items-center justify-center gap-x-1.5 rounded-lg bg-lime-600 dark:bg-lime-700 px-3.5 py-2.5 text-sm font-semibold text-white hover:bg-lime-700 transition-colors shadow-sm",
                    "Developer Docs"
                }
                a {
                    href: "/admin/api-reference",
                    class: "inline-flex items-center justify-center gap-x-1.5 rounded-lg bg-white dark:bg-zinc-800 px-3.5 py-2.5 text-sm font-semibold text-zinc-950 dark:text-white ring-1 ring-inset ring-zinc-950/10 dark:ring-white/10 transition-colors shadow-sm",
                    "API Docs"
                }
                a {
                    href: "/api",
                    target: "_blank",
                    class: "inline-flex items-center justify-center gap-x-1.5 rounded-lg bg-zinc-950 dark:bg-white px-3.5 py-2.5 text-sm font-semibold text-white dark:text-zinc-950 transition-colors shadow-sm",
                    "OpenAPI"
                }
            }
        }
    }
}

/// Stats cards fragment served to `/admin/api/stats`.
pub fn render_stats_cards(stats: &DashboardStats) -> String {
    tracing::debug!(collections = stats.collections, content = stats.content_items, "Rendering stats cards");
    dioxus_ssr::render_element(rsx! { StatsCards { stats: stats.clone() } })
}

/// Recent activity fragment served to `/admin/api/recent-activity`.
pub fn render_recent_activity(activities: &[ActivityItem], now: DateTime<Utc>) -> String {
    tracing::debug!(activities = activities.len(), "Rendering recent activity");
    let rows = activity_rows(activities, &now);
    dioxus_ssr::render_element(rsx! { RecentActivity { rows: rows } })
}

/// Storage usage fragment served to `/admin/api/storage`.
pub fn render_storage_usage(database_size: Option<u64>, media_size: Option<u64>) -> String {
    tracing::debug!(?database_size, ?media_size, "Rendering storage usage");
    let items = storage_items(database_size, media_size);
    dioxus_ssr::render_element(rsx! { StorageUsage { items: items } })
}

/// Dashboard page. Stats and activity load lazily; storage renders from the given stats.
/// The analytics chart polls `/admin/api/metrics` once a second.
pub fn render_dashboard_page(data: &DashboardPageData) -> String {
    tracing::debug!(has_stats = data.stats.is_some(), "Rendering dashboard");

    let storage = storage_items(
        data.stats.as_ref().and_then(|s| s.database_size),
        data.stats.as_ref().and_then(|s| s.media_size),
    );
    let content = rsx! {
        {header_links()}
        div {
            id: "stats-container",
            class: "mb-8",
            "hx-get": "/admin/api/stats",
            "hx-trigger": "load",
            "hx-swap": "innerHTML",
            {stats_skeleton()}
        }
        div { class: "grid grid-cols-1 gap-6 xl:grid-cols-3 mb-8",
            div { class: "xl:col-span-2", {analytics_chart()} }
            div {
                class: "xl:col-span-1",
                id: "recent-activity-container",
                "hx-get": "/admin/api/recent-activity",
                "hx-trigger": "load",
                "hx-swap": "innerHTML",
                {activity_skeleton()}
            }
        }
        div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
            {quick_actions()}
            {system_status()}
            div {
                id: "storage-usage-container",
                "hx-get": "/admin/api/storage",
                "hx-trigger": "load",
                "hx-swap": "innerHTML",
                StorageUsage { items: storage }
            }
        }
        script { dangerous_inner_html: REFRESH_SCRIPT }
    };

    let ctx = LayoutContext::new("Dashboard", "/admin")
        .with_page_title("Dashboard")
        .with_user(data.user.clone())
        .with_version(data.version.clone())
        .with_script(CHART_JS);
    render_admin_layout(&ctx, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn stats() -> DashboardStats {
        DashboardStats {
            collections: 4,
            content_items: 120,
            media_files: 37,
            users: 3,
            ..Default::default()
        }
    }

    #[test]
    fn test_stats_cards() {
        let html = render_stats_cards(&stats());

        assert!(html.contains("Total Collections"));
        assert!(html.contains(">120<"));
        assert!(html.contains("12.5%"));
        assert!(html.contains("Decreased by"));
        assert!(html.contains("text-purple-400"));
    }

    #[test]
    fn test_empty_recent_activity() {
        let html = render_recent_activity(&[], Utc::now());

        assert!(html.contains("No recent activity"));
        assert!(html.contains(">System<"));
        assert!(html.contains(">SY<"));
        assert!(html.contains("bg-gray-500/10"));
    }

    #[test]
    fn test_recent_activity_rows() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let activity = ActivityItem {
            id: "1".to_string(),
            kind: ActivityKind::Media,
            action: "uploaded".to_string(),
            description: "Uploaded <hero>.png".to_string(),
            timestamp: now - Duration::hours(3),
            user: "Ada Lovelace".to_string(),
        };
        let html = render_recent_activity(&[activity], now);

        assert!(html.contains("Uploaded &lt;hero&gt;.png"));
        assert!(html.contains(">AL<"));
        assert!(html.contains("3 hours ago"));
        assert!(html.contains("bg-cyan-500/10"));
    }

    #[test]
    fn test_database_usage_percent() {
        assert_eq!(database_usage_percent(None), 0.5);
        assert_eq!(database_usage_percent(Some(1024)), 0.5);
        assert_eq!(database_usage_percent(Some(5 * 1024 * 1024 * 1024)), 50.0);
        assert_eq!(database_usage_percent(Some(50 * 1024 * 1024 * 1024)), 100.0);
        assert_eq!(usage_bar_class(81.0), "bg-red-500 dark:bg-red-400");
        assert_eq!(usage_bar_class(61.0), "bg-amber-500 dark:bg-amber-400");
        assert_eq!(usage_bar_class(60.0), "bg-cyan-500 dark:bg-cyan-400");
    }

    #[test]
    fn test_storage_usage() {
        let html = render_storage_usage(Some(7 * 1024 * 1024 * 1024), None);

        assert!(html.contains("7.00 GB / 10 GB"));
        assert!(html.contains("width: 70%"));
        assert!(html.contains("bg-amber-500"));
        assert!(html.contains("0 B / ∞"));
        assert!(html.contains("(Stored in R2)"));

        let unknown = render_storage_usage(None, None);
        assert!(unknown.contains("Unknown / 10 GB"));
        assert!(unknown.contains("width: 0.5%"));
    }

    #[test]
    fn test_dashboard_page() {
        let html = render_dashboard_page(&DashboardPageData {
            stats: Some(stats()),
            version: Some("v2.0.0".to_string()),
            ..Default::default()
        });

        assert!(html.contains("Dashboard - SonicJS AI Admin"));
        assert!(html.contains("hx-get=\"/admin/api/stats\""));
        assert!(html.contains("hx-get=\"/admin/api/recent-activity\""));
        assert!(html.contains("hx-trigger=\"load, every 30s\""));
        assert!(html.contains("Quick Actions"));
        assert!(html.contains("Storage Usage"));
        assert!(html.contains("v2.0.0"));
    }

    #[test]
    fn test_dashboard_analytics_panel() {
        let html = render_dashboard_page(&DashboardPageData::default());

        assert!(html.contains("Real-Time Analytics"));
        assert!(html.contains("id=\"requestsChart\""));
        assert!(html.contains("id=\"current-rps\""));
        assert!(html.contains("hx-get=\"/admin/api/metrics\""));
        assert!(html.contains("const maxDataPoints = 60;"));
        assert!(html.contains("function refreshDashboard()"));
        assert!(html.contains(CHART_JS));

        let chart = html.find("class=\"xl:col-span-2\"");
        let activity = html.find("class=\"xl:col-span-1\"");
        assert!(chart.is_some() && activity.is_some());
        assert!(chart < activity);
        assert!(!html.contains("xl:col-span-3"));
    }
}
