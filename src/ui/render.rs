//! Plain-text rendering of the bookmark list.

use std::fmt::Write;

use crate::types::bookmark::Bookmark;

/// Renders the visible list with a filter banner and `#tag` chips.
pub fn render_list(bookmarks: &[&Bookmark], active_tag: Option<&str>, search: &str) -> String {
    let mut out = String::new();

    if let Some(tag) = active_tag {
        let _ = writeln!(out, "Filter: #{} (type 'clear' to remove)", tag);
    }
    if !search.is_empty() {
        let _ = writeln!(out, "Search: \"{}\"", search);
    }

    if bookmarks.is_empty() {
        out.push_str("No bookmarks.\n");
        return out;
    }

    for bookmark in bookmarks {
        let _ = writeln!(out, "[{}] {}", bookmark.id, bookmark.title);
        let _ = writeln!(out, "    {}", bookmark.url);
        if !bookmark.description.is_empty() {
            let _ = writeln!(out, "    {}", bookmark.description);
        }
        if !bookmark.tags.is_empty() {
            let chips: Vec<String> = bookmark.tags.iter().map(|t| format!("#{}", t)).collect();
            let _ = writeln!(out, "    {}", chips.join(" "));
        }
    }
    out
}
