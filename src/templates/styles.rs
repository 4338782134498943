//! CSS styles for the notes client.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --yellow: #b58900;
    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
    --pinned-bg: #f7f2e2;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}

.container {
    max-width: 1100px;
    margin: 0 auto;
    padding: 1rem;
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}

.nav-bar .spacer { flex: 1; }
.nav-bar .notes-count { font-size: 0.8rem; color: var(--muted); }

.search-box { display: flex; gap: 0.5rem; }

.search-box input, .search-box select {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-size: 0.9rem;
}

.btn, .search-box button {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--accent);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.9rem;
    font-family: inherit;
}
.btn.secondary { background: none; }

.category-tags { display: flex; gap: 0.5rem; flex-wrap: wrap; margin: 0.75rem 0; }
.category-tag {
    font-size: 0.75rem;
    padding: 0.1rem 0.5rem;
    background: var(--accent);
    border-radius: 3px;
}

.notes-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 1rem;
}

.note-card {
    border: 1px solid var(--border);
    border-left: 4px solid var(--blue);
    border-radius: 4px;
    padding: 0.75rem 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
}
.note-card.pinned { background: var(--pinned-bg); }
.note-card.pinned .note-title::before { content: "\1F4CC  "; }

.note-header { display: flex; justify-content: space-between; align-items: baseline; gap: 0.5rem; }
.note-title { font-size: 1rem; font-weight: 600; }
.note-actions { display: flex; gap: 0.25rem; }
.note-actions form { display: inline; }
.action-btn {
    background: none;
    border: none;
    color: var(--link);
    cursor: pointer;
    font-size: 0.8rem;
    font-family: inherit;
}
.delete-btn { color: var(--red); }

.note-content { white-space: pre-wrap; font-size: 0.9rem; }
.note-tags { display: flex; gap: 0.25rem; flex-wrap: wrap; }
.note-tag {
    font-size: 0.7rem;
    padding: 0.05rem 0.4rem;
    background: var(--accent);
    border-radius: 3px;
}
.note-meta { display: flex; justify-content: space-between; font-size: 0.75rem; color: var(--muted); }

.empty-state { text-align: center; padding: 3rem 1rem; color: var(--muted); }

.hidden { display: none !important; }

.form-overlay {
    position: fixed;
    inset: 0;
    background: rgba(0, 43, 54, 0.3);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 200;
}
.note-form {
    background: var(--bg);
    border-radius: 6px;
    padding: 1.5rem;
    width: min(560px, 95vw);
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}
.note-form-header { display: flex; justify-content: space-between; align-items: center; }
.note-form label { font-size: 0.8rem; color: var(--base01); }
.note-form input[type=text], .note-form textarea, .note-form select {
    width: 100%;
    padding: 0.4rem 0.6rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-family: inherit;
}
.note-form textarea { min-height: 8rem; }
.form-row { display: flex; gap: 0.75rem; align-items: center; }
.color-preview { width: 1.5rem; height: 1.5rem; border-radius: 50%; border: 1px solid var(--border); }

.toast {
    position: fixed;
    bottom: 1.5rem;
    right: 1.5rem;
    padding: 0.6rem 1rem;
    border-radius: 4px;
    color: var(--base3);
    background: var(--base01);
    opacity: 0;
    transition: opacity 0.2s;
    z-index: 300;
}
.toast.show { opacity: 1; }
.toast.success { background: var(--green); }
.toast.error { background: var(--red); }
.toast.info { background: var(--blue); }
"#;
