//! Notes client library - re-exports for testing and external use.
//!
//! The client talks to a notes backend over HTTP, keeps a cached copy of the
//! notes and categories, and renders them into a browser page.

pub mod api;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod handlers;
pub mod models;
pub mod notes;
pub mod templates;
pub mod view;

#[cfg(test)]
pub(crate) mod test_support;

use api::{HttpApi, NotesApi};
use config::ClientConfig;
use controller::NotesController;
use error::ClientError;

// ============================================================================
// Application State
// ============================================================================

/// Shared by every route handler: the one controller the front-end drives.
pub struct AppState<A = HttpApi> {
    pub controller: NotesController<A>,
}

impl AppState {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let api = HttpApi::new(&config)?;
        Ok(Self::with_api(api, config))
    }
}

impl<A: NotesApi> AppState<A> {
    pub fn with_api(api: A, config: ClientConfig) -> Self {
        Self {
            controller: NotesController::new(api, config),
        }
    }
}

// Re-export commonly used types
pub use models::{MessageResponse, Note, NoteDraft, SearchFilter, Stats, Toast, ToastKind};

pub use api::NoteQuery;

pub use controller::{ClientState, Confirm, DELETE_CONFIRMATION};

pub use error::Action;

pub use form::{FormState, NoteForm};

pub use notes::{format_created_at, html_escape, is_hex_color, join_tags, parse_tags, safe_color};

pub use view::View;
