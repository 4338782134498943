//! HTTP route handlers for the browser front-end.
//!
//! Each UI event (link or form post) maps onto one controller call, then
//! redirects back to the page so a reload never repeats the action.

use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::api::NotesApi;
use crate::form::NoteForm;
use crate::templates::render_page;
use crate::AppState;

// ============================================================================
// Router
// ============================================================================

pub fn router<A: NotesApi + 'static>(state: Arc<AppState<A>>) -> Router {
    Router::new()
        .route("/", get(index::<A>))
        .route("/refresh", get(refresh::<A>))
        // Search and filters
        .route("/search", get(search::<A>))
        .route("/clear", get(clear_filters::<A>))
        .route("/category", get(select_category::<A>))
        // Note form
        .route("/new", get(new_note::<A>))
        .route("/edit/{id}", get(edit_note::<A>))
        .route("/close", get(close_form::<A>))
        .route("/submit", post(submit_form::<A>))
        .route("/delete/{id}", post(delete_note::<A>))
        .with_state(state)
}

// ============================================================================
// Page Handler
// ============================================================================

pub async fn index<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Html<String> {
    Html(render_page(&state.controller.view(), Utc::now()))
}

pub async fn refresh<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.controller.load_notes().await;
    state.controller.update_stats().await;
    Redirect::to("/")
}

// ============================================================================
// Search and Filter Handlers
// ============================================================================

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search: String,
    pub category: Option<String>,
}

pub async fn search<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Query(query): Query<SearchQuery>,
) -> Redirect {
    let category = query
        .category
        .unwrap_or_else(|| state.controller.config().all_categories.clone());
    state.controller.search_notes(&query.search, &category).await;
    Redirect::to("/")
}

pub async fn clear_filters<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.controller.clear_filters().await;
    Redirect::to("/")
}

#[derive(Deserialize)]
pub struct CategoryQuery {
    pub name: String,
}

pub async fn select_category<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Query(query): Query<CategoryQuery>,
) -> Redirect {
    state.controller.select_category(&query.name).await;
    Redirect::to("/")
}

// ============================================================================
// Form Handlers
// ============================================================================

pub async fn new_note<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.controller.new_note();
    Redirect::to("/")
}

pub async fn edit_note<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(id): Path<i64>,
) -> Redirect {
    state.controller.edit_note(id);
    Redirect::to("/")
}

pub async fn close_form<A: NotesApi>(State(state): State<Arc<AppState<A>>>) -> Redirect {
    state.controller.hide_note_form();
    Redirect::to("/")
}

pub async fn submit_form<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Form(fields): Form<NoteForm>,
) -> Redirect {
    state.controller.submit_form(fields).await;
    Redirect::to("/")
}

// ============================================================================
// Delete Handler
// ============================================================================

#[derive(Deserialize)]
pub struct DeleteNoteBody {
    #[serde(default)]
    pub confirmed: String,
}

pub async fn delete_note<A: NotesApi>(
    State(state): State<Arc<AppState<A>>>,
    Path(id): Path<i64>,
    Form(body): Form<DeleteNoteBody>,
) -> Redirect {
    // The browser already asked; its answer arrives in the form.
    let confirmed = body.confirmed == "true";
    debug!(id, confirmed, "Delete requested");
    state
        .controller
        .delete_note(id, &|_: &str| confirmed)
        .await;
    Redirect::to("/")
}
