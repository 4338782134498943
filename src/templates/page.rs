//! Full page template assembled from the view-model fragments.

use chrono::{DateTime, Utc};

use crate::notes::html_escape;
use crate::view::View;

use super::components::toast_html;
use super::styles::STYLE;

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(view: &View) -> String {
    format!(
        r#"<nav class="nav-bar">
            <a href="/">Notes</a>
            <a id="new-note-btn" href="/new">New note</a>
            <a href="/refresh">Refresh</a>
            <span class="spacer"></span>
            <span id="notes-count" class="notes-count">{count}</span>
            <form class="search-box" action="/search" method="get">
                <input type="text" id="search-input" name="search" placeholder="Search..." value="{search}">
                <select id="category-filter" name="category" onchange="this.form.submit()">{filter}</select>
                <button type="submit">Go</button>
                <a id="clear-filters" class="btn secondary" href="/clear">Clear</a>
            </form>
        </nav>"#,
        count = html_escape(&view.notes_count),
        search = html_escape(&view.filter.search),
        filter = view.category_filter,
    )
}

// ============================================================================
// Page
// ============================================================================

pub fn render_page(view: &View, now: DateTime<Utc>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Notes</title>
    <style>{style}</style>
</head>
<body>
    {nav}
    <div class="container">
        <div class="category-tags">{tags}</div>
        <div id="notes-grid" class="notes-grid">
{grid}
        </div>
    </div>
    {form}
    {toast}
    <script>
    // Auto-dismiss the toast once its time is up
    (function () {{
        const toast = document.getElementById('toast');
        if (!toast || !toast.dataset.dismissMs) return;
        setTimeout(() => {{
            toast.classList.remove('show');
        }}, Number(toast.dataset.dismissMs));
    }})();
    </script>
</body>
</html>"#,
        style = STYLE,
        nav = nav_bar(view),
        tags = view.category_tags,
        grid = view.notes_grid,
        form = view.note_form,
        toast = toast_html(view.toast.as_ref(), now),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SearchFilter, Toast, ToastKind};
    use chrono::TimeDelta;

    #[test]
    fn test_page_includes_fragments() {
        let view = View {
            notes_grid: "<div data-note-id=\"1\"></div>".to_string(),
            category_filter: "<option value=\"Todos\">All categories</option>".to_string(),
            notes_count: "1 notes • 0 pinned".to_string(),
            filter: SearchFilter {
                search: "<q>".to_string(),
                category: "Todos".to_string(),
            },
            ..View::default()
        };
        let html = render_page(&view, Utc::now());
        assert!(html.contains("<div data-note-id=\"1\"></div>"));
        assert!(html.contains("1 notes • 0 pinned"));
        assert!(html.contains(r#"value="&lt;q&gt;""#));
        assert!(html.contains(r#"<div id="toast" class="toast"></div>"#));
    }

    #[test]
    fn test_page_shows_live_toast() {
        let toast = Toast::new("Created", ToastKind::Success, TimeDelta::seconds(3));
        let view = View {
            toast: Some(toast.clone()),
            ..View::default()
        };
        let html = render_page(&view, toast.shown_at);
        assert!(html.contains(r#"class="toast success show""#));
        assert!(html.contains(">Created</div>"));
    }
}
