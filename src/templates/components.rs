//! HTML fragments for the notes page.
//!
//! Each function renders one region of the page from client state. Every
//! user-supplied string goes through `html_escape` on the way in.

use chrono::{DateTime, Utc};

use crate::form::{FormState, NoteForm};
use crate::models::{Note, Stats, Toast, DEFAULT_CATEGORY};
use crate::notes::{format_created_at, html_escape, safe_color};

pub const EMPTY_STATE_ID: &str = "empty-state";

// ============================================================================
// Note Cards
// ============================================================================

pub fn note_card(note: &Note) -> String {
    let class = if note.is_pinned {
        "note-card pinned"
    } else {
        "note-card"
    };

    let tags_html = if note.tags.is_empty() {
        String::new()
    } else {
        let tags: String = note
            .tags
            .iter()
            .map(|tag| format!(r#"<span class="note-tag">{}</span>"#, html_escape(tag)))
            .collect();
        format!(r#"<div class="note-tags">{}</div>"#, tags)
    };

    format!(
        r#"<div class="{class}" data-note-id="{id}" style="border-left-color: {color}">
    <div class="note-header">
        <h3 class="note-title">{title}</h3>
        <div class="note-actions">
            <a class="action-btn edit-btn" href="/edit/{id}" title="Edit">Edit</a>
            <form method="post" action="/delete/{id}" onsubmit="this.confirmed.value = confirm('Are you sure you want to delete this note?') ? 'true' : 'false'">
                <input type="hidden" name="confirmed" value="false">
                <button type="submit" class="action-btn delete-btn" title="Delete">Delete</button>
            </form>
        </div>
    </div>
    <div class="note-content">{content}</div>
    {tags}
    <div class="note-meta">
        <span class="note-category">{category}</span>
        <span class="note-date">{created}</span>
    </div>
</div>"#,
        class = class,
        id = note.id,
        color = safe_color(&note.color),
        title = html_escape(&note.title),
        content = html_escape(&note.content),
        tags = tags_html,
        category = html_escape(&note.category),
        created = html_escape(&format_created_at(&note.created_at)),
    )
}

/// The notes grid: cards in backend order, or the empty-state placeholder.
pub fn notes_grid(notes: &[Note]) -> String {
    if notes.is_empty() {
        return format!(
            r#"<div id="{}" class="empty-state">
    <h3>No notes yet</h3>
    <p>Create your first note or adjust the filters.</p>
</div>"#,
            EMPTY_STATE_ID
        );
    }

    notes.iter().map(note_card).collect::<Vec<_>>().join("\n")
}

// ============================================================================
// Categories
// ============================================================================

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn category_options(categories: &[String], selected: &str) -> String {
    categories
        .iter()
        .map(|cat| option(cat, cat, cat == selected))
        .collect()
}

/// Options for the category filter dropdown. The leading synthetic option
/// carries the "all" sentinel as its value.
pub fn category_filter_options(categories: &[String], all_categories: &str, selected: &str) -> String {
    let all_selected = selected.is_empty() || selected == all_categories;
    format!(
        "{}{}",
        option(all_categories, "All categories", all_selected),
        category_options(categories, selected)
    )
}

/// Options for the form's category selector, led by the default category.
/// A selected category missing from the list gets its own trailing option,
/// so saving an edited note keeps its category.
pub fn category_select_options(categories: &[String], selected: &str) -> String {
    let missing = !selected.is_empty()
        && selected != DEFAULT_CATEGORY
        && !categories.iter().any(|cat| cat == selected);

    let mut html = format!(
        "{}{}",
        option(DEFAULT_CATEGORY, DEFAULT_CATEGORY, selected == DEFAULT_CATEGORY),
        category_options(categories, selected)
    );
    if missing {
        html.push_str(&option(selected, selected, true));
    }
    html
}

/// Quick filter links, one per category.
pub fn category_tags(categories: &[String]) -> String {
    categories
        .iter()
        .map(|cat| {
            format!(
                r#"<a class="category-tag" href="/category?name={}">{}</a>"#,
                urlencoding::encode(cat),
                html_escape(cat)
            )
        })
        .collect()
}

// ============================================================================
// Stats
// ============================================================================

pub fn stats_label(stats: Option<&Stats>) -> String {
    match stats {
        Some(s) => format!("{} notes • {} pinned", s.total_notes, s.pinned_notes),
        None => String::new(),
    }
}

// ============================================================================
// Toast
// ============================================================================

/// The single toast element. It is always present so the page layout is
/// stable; it only carries `show` while the toast is unexpired.
pub fn toast_html(toast: Option<&Toast>, now: DateTime<Utc>) -> String {
    match toast.filter(|t| t.is_visible_at(now)) {
        Some(t) => format!(
            r#"<div id="toast" class="toast {kind} show" data-dismiss-ms="{ms}">{message}</div>"#,
            kind = t.kind,
            ms = t.remaining_ms(now),
            message = html_escape(&t.message),
        ),
        None => r#"<div id="toast" class="toast"></div>"#.to_string(),
    }
}

// ============================================================================
// Note Form
// ============================================================================

pub fn note_form(state: &FormState, fields: &NoteForm, categories: &[String]) -> String {
    let hidden = if state.is_open() { "" } else { " hidden" };
    let checked = if fields.is_pinned { " checked" } else { "" };
    let note_id = match fields.note_id {
        Some(id) => format!(r#"<input type="hidden" name="note_id" value="{}">"#, id),
        None => String::new(),
    };

    format!(
        r#"<div id="note-form-container" class="form-overlay{hidden}">
    <form id="note-form" class="note-form" method="post" action="/submit">
        {note_id}
        <div class="note-form-header">
            <h2 id="form-title">{heading}</h2>
            <a id="close-form" href="/close" title="Close">&times;</a>
        </div>
        <label for="title">Title</label>
        <input type="text" id="title" name="title" value="{title}" required>
        <label for="content">Content</label>
        <textarea id="content" name="content" required>{content}</textarea>
        <div class="form-row">
            <div>
                <label for="category">Category</label>
                <select id="category" name="category">{categories}</select>
            </div>
            <div>
                <label for="color">Color</label>
                <input type="color" id="color" name="color" value="{color}"
                       oninput="document.getElementById('color-preview').style.backgroundColor = this.value">
            </div>
            <span id="color-preview" class="color-preview" style="background-color: {color}"></span>
        </div>
        <label for="tags">Tags (comma separated)</label>
        <input type="text" id="tags" name="tags" value="{tags}">
        <label><input type="checkbox" id="is-pinned" name="is_pinned"{checked}> Pinned</label>
        <div class="form-row">
            <button type="submit" class="btn">Save</button>
            <a id="cancel-btn" class="btn secondary" href="/close">Cancel</a>
        </div>
    </form>
</div>"#,
        hidden = hidden,
        note_id = note_id,
        heading = state.heading(),
        title = html_escape(&fields.title),
        content = html_escape(&fields.content),
        categories = category_select_options(categories, &fields.category),
        color = safe_color(&fields.color),
        tags = html_escape(&fields.tags),
        checked = checked,
    )
}
