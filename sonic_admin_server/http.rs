use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Html,
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::{f64::consts::TAU, net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;

use sonic_admin_web::{
    render_content_form_fields, render_recent_activity, render_stats_cards, render_storage_usage,
};

use crate::{
    config::Config,
    errors::PreviewError,
    fixtures::{Fixtures, PreviewPage},
};

#[derive(Clone)]
pub struct PreviewState {
    pub fixtures: Arc<Fixtures>,
}

impl PreviewState {
    pub fn new(config: &Config) -> PreviewState {
        PreviewState {
            fixtures: Arc::new(Fixtures::new(config)),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PreviewQuery {
    #[serde(default)]
    pub page: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormFieldsQuery {
    #[serde(default)]
    pub model_name: Option<String>,
}

/// Body of `/admin/api/metrics`, read by the dashboard chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetrics {
    pub requests_per_second: f64,
}

impl RequestMetrics {
    /// Synthetic traffic: a one-minute wave between 1 and 3 requests per second.
    pub fn demo(unix_seconds: i64) -> Self {
        let phase = unix_seconds.rem_euclid(60) as f64 / 60.0;
        Self {
            requests_per_second: 2.0 + (phase * TAU).sin(),
        }
    }
}

pub struct PreviewRouter {}

impl PreviewRouter {
    /// Preview pages under `/preview/{page}` plus the partial endpoints the pages poll,
    /// mounted at the paths the rendered markup points at.
    pub fn router(state: PreviewState) -> Router {
        Router::new()
            .route("/", get(index))
            .route("/preview/{page}", get(preview_page))
            .route("/admin/api/stats", get(stats_fragment))
            .route("/admin/api/recent-activity", get(recent_activity_fragment))
            .route("/admin/api/storage", get(storage_fragment))
            .route("/admin/api/metrics", get(metrics))
            .route("/admin/content/form-fields", get(form_fields_fragment))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: PreviewState, port: u16) -> Result<(), PreviewError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("Preview server started, listening on http://{addr}");
        axum::serve(listener, router).await?;

        Ok(())
    }
}

async fn index() -> Html<String> {
    let links: String = PreviewPage::ALL
        .iter()
        .map(|p| format!(r#"<li><a href="/preview/{}">{}</a></li>"#, p.slug(), p.title()))
        .collect();

    Html(format!(
        "<!DOCTYPE html><html><head><title>SonicJS admin preview</title></head>\
         <body><h1>SonicJS admin preview</h1><ul>{links}</ul></body></html>"
    ))
}

async fn preview_page(
    State(state): State<PreviewState>,
    Path(page): Path<String>,
    Query(query): Query<PreviewQuery>,
) -> Result<Html<String>, PreviewError> {
    let page: PreviewPage = page.parse()?;
    let html = state.fixtures.render(page, query.page.unwrap_or(1)).await?;
    Ok(Html(html))
}

async fn stats_fragment(State(state): State<PreviewState>) -> Result<Html<String>, PreviewError> {
    let stats = state.fixtures.stats().await?;
    Ok(Html(render_stats_cards(&stats)))
}

async fn recent_activity_fragment(
    State(state): State<PreviewState>,
) -> Result<Html<String>, PreviewError> {
    let stats = state.fixtures.stats().await?;
    Ok(Html(render_recent_activity(&stats.recent_activity, Utc::now())))
}

async fn storage_fragment(State(state): State<PreviewState>) -> Result<Html<String>, PreviewError> {
    let stats = state.fixtures.stats().await?;
    Ok(Html(render_storage_usage(stats.database_size, stats.media_size)))
}

async fn metrics() -> Json<RequestMetrics> {
    Json(RequestMetrics::demo(Utc::now().timestamp()))
}

async fn form_fields_fragment(
    State(state): State<PreviewState>,
    Query(query): Query<FormFieldsQuery>,
) -> Result<Html<String>, PreviewError> {
    let Some(name) = query.model_name.filter(|n| !n.is_empty()) else {
        return Ok(Html(String::new()));
    };

    let models = state.fixtures.models().await?;
    let model = models
        .iter()
        .find(|m| m.name == name)
        .ok_or(PreviewError::UnknownModel(name))?;
    Ok(Html(render_content_form_fields(model)))
}
