//! Data models for the notes client.
//!
//! This module contains the wire types exchanged with the notes backend
//! and the small client-side types built on top of them (toasts, filters).

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Category assigned to notes that don't name one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Accent color used for new notes and for notes with an unusable color.
pub const DEFAULT_COLOR: &str = "#3498db";

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

// Backends send `null` as often as they omit a field; both mean "default".

fn null_as_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

fn null_as_color<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_color))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Core Note Types
// ============================================================================

/// A note as returned by `GET /notes`.
///
/// Everything but `id`, `title` and `content` is optional on the wire so the
/// client keeps working against minimal backends.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Note {
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default = "default_category", deserialize_with = "null_as_category")]
    pub category: String,
    #[serde(default = "default_color", deserialize_with = "null_as_color")]
    pub color: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_pinned: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
}

/// Body of `POST /notes` and `PUT /notes/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub color: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
            category: note.category.clone(),
            color: note.color.clone(),
            tags: note.tags.clone(),
            is_pinned: note.is_pinned,
        }
    }
}

/// Confirmation body returned by every write endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Aggregate counters from `GET /stats`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_notes: u64,
    pub pinned_notes: u64,
}

// ============================================================================
// Search
// ============================================================================

/// The search box and category dropdown, as last submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub search: String,
    pub category: String,
}

// ============================================================================
// Notifications
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for ToastKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToastKind::Success => write!(f, "success"),
            ToastKind::Error => write!(f, "error"),
            ToastKind::Info => write!(f, "info"),
        }
    }
}

/// A transient notification. Only one exists at a time; showing a new one
/// replaces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: DateTime<Utc>,
    pub duration: TimeDelta,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind, duration: TimeDelta) -> Self {
        Self {
            message: message.into(),
            kind,
            shown_at: Utc::now(),
            duration,
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.shown_at + self.duration
    }

    /// Whether the toast is still on screen at `now`.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.shown_at && now < self.expires_at()
    }

    /// Milliseconds left before auto-dismiss, zero once expired.
    pub fn remaining_ms(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at() - now).num_milliseconds().max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults_for_minimal_backend() {
        let note: Note =
            serde_json::from_str(r#"{"id": 7, "title": "T", "content": "C"}"#).unwrap();
        assert_eq!(note.category, "General");
        assert_eq!(note.color, DEFAULT_COLOR);
        assert!(note.tags.is_empty());
        assert!(!note.is_pinned);
        assert_eq!(note.created_at, "");
    }

    #[test]
    fn test_null_fields_take_defaults() {
        let notes: Vec<Note> = serde_json::from_str(
            r#"[{"id": 1, "title": null, "content": "C", "category": null, "color": null,
                "tags": null, "is_pinned": null, "created_at": null}]"#,
        )
        .unwrap();
        assert_eq!(notes.len(), 1);
        let note = &notes[0];
        assert_eq!(note.title, "");
        assert_eq!(note.content, "C");
        assert_eq!(note.category, "General");
        assert_eq!(note.color, DEFAULT_COLOR);
        assert!(note.tags.is_empty());
        assert!(!note.is_pinned);
        assert_eq!(note.created_at, "");
    }

    #[test]
    fn test_draft_has_no_id() {
        let draft = NoteDraft {
            title: "A".to_string(),
            content: "B".to_string(),
            category: "General".to_string(),
            color: DEFAULT_COLOR.to_string(),
            tags: vec![],
            is_pinned: false,
        };
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["title"], "A");
        assert_eq!(json["is_pinned"], false);
    }

    #[test]
    fn test_toast_expires_after_duration() {
        let toast = Toast::new("Saved", ToastKind::Success, TimeDelta::seconds(3));
        assert!(toast.is_visible_at(toast.shown_at));
        assert!(toast.is_visible_at(toast.shown_at + TimeDelta::milliseconds(2999)));
        assert!(!toast.is_visible_at(toast.shown_at + TimeDelta::seconds(3)));
        assert_eq!(toast.remaining_ms(toast.shown_at + TimeDelta::seconds(5)), 0);
    }

    #[test]
    fn test_toast_kind_class_names() {
        assert_eq!(ToastKind::Success.to_string(), "success");
        assert_eq!(ToastKind::Error.to_string(), "error");
        assert_eq!(ToastKind::Info.to_string(), "info");
    }
}
