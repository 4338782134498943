//! HTML templates and styling for the notes client.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Page regions (note cards, category options, form, toast)
//! - `page` - Navigation bar and the full page template

mod styles;
mod components;
mod page;

pub use styles::STYLE;
pub use components::{
    category_filter_options, category_select_options, category_tags, note_card, note_form,
    notes_grid, stats_label, toast_html, EMPTY_STATE_ID,
};
pub use page::{nav_bar, render_page};
