//! The note editing form: its lifecycle and its field values.

use serde::Deserialize;

use crate::models::{Note, NoteDraft, DEFAULT_CATEGORY, DEFAULT_COLOR};
use crate::notes::{join_tags, parse_tags};

/// Where the form is in its lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormState {
    #[default]
    Closed,
    OpenForCreate,
    OpenForEdit(Note),
}

impl FormState {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormState::Closed)
    }

    /// The note being edited, if any.
    pub fn editing(&self) -> Option<&Note> {
        match self {
            FormState::OpenForEdit(note) => Some(note),
            _ => None,
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            FormState::OpenForEdit(_) => "Edit Note",
            _ => "New Note",
        }
    }
}

/// Raw form field values, tags still as the comma-separated input string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NoteForm {
    /// Id of the note being edited; absent on the create form.
    #[serde(default)]
    pub note_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub tags: String,
    /// HTML checkboxes post "on" when ticked and nothing otherwise.
    #[serde(default, deserialize_with = "checkbox")]
    pub is_pinned: bool,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref(),
        Some("on") | Some("true") | Some("1")
    ))
}

impl Default for NoteForm {
    fn default() -> Self {
        Self {
            note_id: None,
            title: String::new(),
            content: String::new(),
            category: default_category(),
            color: default_color(),
            tags: String::new(),
            is_pinned: false,
        }
    }
}

impl NoteForm {
    pub fn from_note(note: &Note) -> Self {
        Self {
            note_id: Some(note.id),
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            color: note.color.clone(),
            tags: join_tags(&note.tags),
            is_pinned: note.is_pinned,
        }
    }

    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            category: self.category.clone(),
            color: self.color.clone(),
            tags: parse_tags(&self.tags),
            is_pinned: self.is_pinned,
        }
    }
}
