//! Note field processing shared by the controller and the templates.
//!
//! Escaping, tag parsing, color validation and timestamp formatting.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDateTime};
use regex::Regex;

use crate::models::DEFAULT_COLOR;

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

// ============================================================================
// Tags
// ============================================================================

/// Split the comma-separated tag input into trimmed, non-empty tags,
/// keeping their order.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_tags`] for filling the edit form.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

// ============================================================================
// Colors
// ============================================================================

fn hex_color_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap())
}

pub fn is_hex_color(s: &str) -> bool {
    hex_color_re().is_match(s)
}

/// The color is interpolated into a `style` attribute, so anything that
/// isn't a plain hex code is replaced with the default.
pub fn safe_color(s: &str) -> &str {
    if is_hex_color(s) {
        s
    } else {
        DEFAULT_COLOR
    }
}

// ============================================================================
// Timestamps
// ============================================================================

/// Render `created_at` as `YYYY-MM-DD HH:MM` when it is RFC 3339 or the
/// SQL-ish `YYYY-MM-DD HH:MM:SS[.f]`; otherwise return it untouched.
pub fn format_created_at(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.format("%Y-%m-%d %H:%M").to_string();
        }
    }
    raw.to_string()
}
