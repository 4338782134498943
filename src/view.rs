//! The bound view-model: one rendered fragment per page region.
//!
//! The controller rebuilds the affected fragments after each state change;
//! the page template only stitches them together.

use crate::models::{SearchFilter, Toast};
use crate::templates::EMPTY_STATE_ID;

#[derive(Debug, Clone, Default)]
pub struct View {
    pub notes_grid: String,
    pub category_filter: String,
    pub category_tags: String,
    pub note_form: String,
    pub notes_count: String,
    pub filter: SearchFilter,
    pub toast: Option<Toast>,
}

impl View {
    /// Number of note cards currently rendered.
    pub fn card_count(&self) -> usize {
        self.notes_grid.matches("data-note-id=").count()
    }

    pub fn shows_empty_state(&self) -> bool {
        self.notes_grid
            .contains(&format!("id=\"{}\"", EMPTY_STATE_ID))
    }
}
