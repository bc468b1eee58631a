//! Admin page handlers.
//!
//! The dashboard and knowledge pages have a soft-fail contract: a read
//! failure substitutes empty defaults and the page still renders with
//! HTTP 200. A broken store must not take the admin UI down with it.

use crate::state::AppState;
use crate::{ApiError, ApiResult};

use kb_core::{Announcement, KnowledgeEntry, KnowledgeStats};

use std::future::Future;

use axum::{extract::State, response::Html};
use chrono::Utc;
use log::warn;
use minijinja::context;

/// Run a fallible read, substituting `fallback` on failure.
///
/// This is the whole soft-fail policy; services stay free of UI concerns.
pub async fn with_fallback<T, E, F>(operation: F, fallback: T) -> T
where
    F: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            warn!("Read failed, rendering fallback: {e}");
            fallback
        }
    }
}

/// Banner shown when no announcement has been published (or the read failed).
fn placeholder_announcement() -> Announcement {
    Announcement {
        title: "Announcement".to_string(),
        message: "No announcement available".to_string(),
        updated_at: Utc::now(),
    }
}

fn render(state: &AppState, name: &str, ctx: minijinja::Value) -> ApiResult<Html<String>> {
    let template = state
        .templates
        .get_template(name)
        .map_err(|e| ApiError::internal(format!("Template {} not registered: {}", name, e)))?;

    let html = template
        .render(ctx)
        .map_err(|e| ApiError::internal(format!("Failed to render {}: {}", name, e)))?;

    Ok(Html(html))
}

/// GET /
///
/// Dashboard with corpus stats and the current announcement
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let stats = with_fallback(state.knowledge.stats(), KnowledgeStats::default()).await;
    let announcement = with_fallback(state.announcements.current(), None)
        .await
        .unwrap_or_else(placeholder_announcement);

    render(
        &state,
        "dashboard.html",
        context! { stats => stats, announcement => announcement },
    )
}

/// GET /knowledge
///
/// Knowledge management page listing every entry
pub async fn knowledge_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let knowledge_list: Vec<KnowledgeEntry> =
        with_fallback(state.knowledge.list_all(), Vec::new()).await;

    render(
        &state,
        "knowledge.html",
        context! { knowledge_list => knowledge_list },
    )
}

/// GET /testing
pub async fn testing_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render(&state, "testing.html", context! {})
}

/// GET /models
pub async fn models_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render(&state, "models.html", context! {})
}

/// GET /announcement
pub async fn announcement_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render(&state, "announcement.html", context! {})
}

/// GET /api-docs
pub async fn api_docs_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render(&state, "api_docs.html", context! {})
}

/// GET /settings
pub async fn settings_page(State(state): State<AppState>) -> ApiResult<Html<String>> {
    render(&state, "settings.html", context! {})
}
