//! Axum handlers for the rendered page and its data source.

use axum::{extract::State, Json};
use chrono::{Datelike, Utc};
use maud::Markup;

use crate::errors::AppError;
use crate::loader::load_resume;
use crate::models::resume::ResumeDocument;
use crate::page::{shell::render_document, Page};
use crate::render::RenderOptions;
use crate::state::AppState;

/// GET /
///
/// Runs the full pipeline for this request. A failed load still answers 200
/// with the page in its error state, the same page a visitor would see.
pub async fn handle_page(State(state): State<AppState>) -> Markup {
    let options = RenderOptions {
        projects_layout: state.config.projects_layout,
        footer_year: Utc::now().year(),
        feed_timeout: state.config.feed_timeout,
    };

    let mut page = Page::new();
    // Failures are logged by the loader and shown on the page itself.
    let _ = load_resume(&mut page, state.source.as_ref(), state.feed.clone(), &options).await;

    render_document(&page)
}

/// GET /resume-data.json
///
/// The parsed document, re-serialised.
pub async fn handle_resume_data(
    State(state): State<AppState>,
) -> Result<Json<ResumeDocument>, AppError> {
    let document = state.source.fetch().await?;
    Ok(Json(document))
}
