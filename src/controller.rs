//! The client controller.
//!
//! Owns the cached notes and categories, turns UI events into backend
//! requests, and re-renders the [`View`] after every state change.
//!
//! Backend failures never escape a controller method: they become a toast
//! (or a log line, for categories and stats) and the cached state is left
//! as it was. Nothing is updated optimistically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, error, info, warn};

use crate::api::{NoteQuery, NotesApi};
use crate::config::ClientConfig;
use crate::error::Action;
use crate::form::{FormState, NoteForm};
use crate::models::{Note, NoteDraft, SearchFilter, Stats, Toast, ToastKind};
use crate::templates::{
    category_filter_options, category_tags, note_form, notes_grid, stats_label,
};
use crate::view::View;

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this note?";

// ============================================================================
// Confirmation
// ============================================================================

/// Asks the user a yes/no question before a destructive action.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

// ============================================================================
// Client State
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ClientState {
    /// Notes from the last successful load or search, in backend order.
    pub notes: Vec<Note>,
    pub categories: Vec<String>,
    pub form: FormState,
    pub fields: NoteForm,
    pub filter: SearchFilter,
    pub toast: Option<Toast>,
    pub stats: Option<Stats>,
}

impl ClientState {
    pub fn current_editing_note(&self) -> Option<&Note> {
        self.form.editing()
    }
}

struct Inner {
    state: ClientState,
    view: View,
}

impl Inner {
    fn render_notes(&mut self) {
        self.view.notes_grid = notes_grid(&self.state.notes);
    }

    fn render_filter(&mut self, all_categories: &str) {
        self.view.category_filter = category_filter_options(
            &self.state.categories,
            all_categories,
            &self.state.filter.category,
        );
        self.view.category_tags = category_tags(&self.state.categories);
        self.view.filter = self.state.filter.clone();
    }

    fn render_form(&mut self) {
        self.view.note_form =
            note_form(&self.state.form, &self.state.fields, &self.state.categories);
    }

    fn render_stats(&mut self) {
        self.view.notes_count = stats_label(self.state.stats.as_ref());
    }
}

// ============================================================================
// Controller
// ============================================================================

pub struct NotesController<A> {
    api: A,
    config: ClientConfig,
    inner: Mutex<Inner>,
    /// Bumped for every notes fetch; used to spot overtaken responses.
    generation: AtomicU64,
}

impl<A: NotesApi> NotesController<A> {
    pub fn new(api: A, config: ClientConfig) -> Self {
        let state = ClientState {
            filter: SearchFilter {
                search: String::new(),
                category: config.all_categories.clone(),
            },
            ..ClientState::default()
        };

        let mut inner = Inner {
            state,
            view: View::default(),
        };
        inner.render_notes();
        inner.render_filter(&config.all_categories);
        inner.render_form();
        inner.render_stats();

        Self {
            api,
            config,
            inner: Mutex::new(inner),
            generation: AtomicU64::new(0),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Run `f` with the state locked. The lock is never held across an
    /// `.await`; a poisoned lock still holds valid state, so it is reused.
    fn with_inner<R>(&self, f: impl FnOnce(&mut Inner) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn state(&self) -> ClientState {
        self.with_inner(|inner| inner.state.clone())
    }

    pub fn view(&self) -> View {
        self.with_inner(|inner| inner.view.clone())
    }

    pub fn current_editing_note(&self) -> Option<Note> {
        self.with_inner(|inner| inner.state.current_editing_note().cloned())
    }

    // ------------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------------

    /// Load categories, then notes, then stats. Each step runs even if an
    /// earlier one failed.
    pub async fn init(&self) {
        info!(api = %self.config.api_url, "Initializing notes client");
        self.load_categories().await;
        self.load_notes().await;
        self.update_stats().await;
    }

    pub async fn load_categories(&self) {
        match self.api.list_categories().await {
            Ok(categories) => {
                debug!(count = categories.len(), "Loaded categories");
                let all = self.config.all_categories.as_str();
                self.with_inner(|inner| {
                    inner.state.categories = categories;
                    inner.render_filter(all);
                    inner.render_form();
                });
            }
            Err(err) => error!(%err, "Error loading categories"),
        }
    }

    pub async fn update_stats(&self) {
        match self.api.stats().await {
            Ok(stats) => self.with_inner(|inner| {
                inner.state.stats = Some(stats);
                inner.render_stats();
            }),
            Err(err) => error!(%err, "Error updating stats"),
        }
    }

    // ------------------------------------------------------------------------
    // Loading and Searching
    // ------------------------------------------------------------------------

    /// Reload every note, ignoring the current filter.
    pub async fn load_notes(&self) {
        self.fetch_notes(NoteQuery::default(), Action::LoadNotes).await;
    }

    /// Search with the given text and category. The category is dropped
    /// from the request when it is the configured "all" sentinel.
    pub async fn search_notes(&self, search: &str, category: &str) {
        let all = self.config.all_categories.as_str();
        self.with_inner(|inner| {
            inner.state.filter = SearchFilter {
                search: search.to_string(),
                category: category.to_string(),
            };
            inner.render_filter(all);
        });

        let query = NoteQuery::from_filter(search, category, all);
        self.fetch_notes(query, Action::Search).await;
    }

    pub async fn clear_filters(&self) {
        let all = self.config.all_categories.clone();
        self.search_notes("", &all).await;
    }

    /// Quick category tag: keep the search text, switch the category.
    pub async fn select_category(&self, category: &str) {
        let search = self.with_inner(|inner| inner.state.filter.search.clone());
        self.search_notes(&search, category).await;
    }

    fn is_stale(&self, ticket: u64) -> bool {
        self.config.discard_stale_responses && self.generation.load(Ordering::SeqCst) != ticket
    }

    async fn fetch_notes(&self, query: NoteQuery, action: Action) {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.api.list_notes(&query).await;

        if self.is_stale(ticket) {
            debug!(ticket, ?action, "Discarding overtaken notes response");
            return;
        }

        match result {
            Ok(notes) => {
                debug!(count = notes.len(), ?action, "Loaded notes");
                self.with_inner(|inner| {
                    inner.state.notes = notes;
                    inner.render_notes();
                });
            }
            Err(err) => {
                warn!(%err, ?action, "Notes request failed");
                self.show_toast(action.failure_message(), ToastKind::Error);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Writes
    // ------------------------------------------------------------------------

    pub async fn create_note(&self, draft: NoteDraft) {
        match self.api.create_note(&draft).await {
            Ok(response) => {
                info!(title = %draft.title, "Note created");
                self.show_toast(response.message, ToastKind::Success);
                self.load_notes().await;
                self.hide_note_form();
            }
            Err(err) => {
                warn!(%err, "Create failed");
                self.show_toast(err.to_string(), ToastKind::Error);
            }
        }
    }

    pub async fn update_note(&self, id: i64, draft: NoteDraft) {
        match self.api.update_note(id, &draft).await {
            Ok(response) => {
                info!(id, "Note updated");
                self.show_toast(response.message, ToastKind::Success);
                self.load_notes().await;
                self.hide_note_form();
            }
            Err(err) => {
                warn!(%err, id, "Update failed");
                self.show_toast(err.to_string(), ToastKind::Error);
            }
        }
    }

    /// Delete after asking `confirm`. Declining sends nothing.
    pub async fn delete_note(&self, id: i64, confirm: &impl Confirm) {
        if !confirm.confirm(DELETE_CONFIRMATION) {
            debug!(id, "Delete declined");
            return;
        }

        match self.api.delete_note(id).await {
            Ok(response) => {
                info!(id, "Note deleted");
                self.show_toast(response.message, ToastKind::Success);
                self.load_notes().await;
            }
            Err(err) => {
                warn!(%err, id, "Delete failed");
                self.show_toast(err.to_string(), ToastKind::Error);
            }
        }
    }

    // ------------------------------------------------------------------------
    // Form Lifecycle
    // ------------------------------------------------------------------------

    /// Open the form, filled from `note` for editing or with defaults for a
    /// new note.
    pub fn show_note_form(&self, note: Option<Note>) {
        self.with_inner(|inner| {
            match note {
                Some(note) => {
                    inner.state.fields = NoteForm::from_note(&note);
                    inner.state.form = FormState::OpenForEdit(note);
                }
                None => {
                    inner.state.fields = NoteForm::default();
                    inner.state.form = FormState::OpenForCreate;
                }
            }
            inner.render_form();
        });
    }

    pub fn new_note(&self) {
        self.show_note_form(None);
    }

    /// Open the form for the cached note with this id. Returns false, and
    /// leaves the form alone, when no such note is loaded.
    pub fn edit_note(&self, id: i64) -> bool {
        let note = self.with_inner(|inner| inner.state.notes.iter().find(|n| n.id == id).cloned());
        match note {
            Some(note) => {
                self.show_note_form(Some(note));
                true
            }
            None => {
                debug!(id, "Edit requested for unknown note");
                false
            }
        }
    }

    pub fn hide_note_form(&self) {
        self.with_inner(|inner| {
            inner.state.form = FormState::Closed;
            inner.state.fields = NoteForm::default();
            inner.render_form();
        });
    }

    /// Submit the form: update when editing, create otherwise.
    ///
    /// A submit only counts against the form that is actually open. One
    /// arriving after the form closed, or naming a different note than the
    /// one being edited, is dropped without touching the backend.
    pub async fn submit_form(&self, fields: NoteForm) {
        let draft = fields.to_draft();
        let target = self.with_inner(|inner| {
            let target = match (&inner.state.form, fields.note_id) {
                (FormState::OpenForCreate, None) => Some(None),
                (FormState::OpenForEdit(note), Some(id)) if note.id == id => Some(Some(id)),
                _ => None,
            };
            if target.is_some() {
                inner.state.fields = fields.clone();
                inner.render_form();
            }
            target
        });

        match target {
            Some(Some(id)) => self.update_note(id, draft).await,
            Some(None) => self.create_note(draft).await,
            None => debug!(note_id = ?fields.note_id, "Ignoring submit for a form that is not open"),
        }
    }

    // ------------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------------

    /// Show a toast, replacing whatever toast is currently up.
    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) {
        let toast = Toast::new(message, kind, self.config.toast_duration);
        self.with_inner(|inner| {
            inner.state.toast = Some(toast.clone());
            inner.view.toast = Some(toast);
        });
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;
