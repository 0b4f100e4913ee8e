//! Plain-text transcript renderer.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use vidchat::view::{EMPTY_STATE_TEXT, EntryBody, EntryView, PanelView};
use vidchat::Role;

const PENDING_MARKER: &str = "...";

/// Format one entry as a single `speaker> text` block.
#[must_use]
pub fn format_entry(entry: &EntryView) -> String {
    let speaker = match entry.role {
        Role::User => "you",
        Role::Bot => "bot",
    };
    match &entry.body {
        EntryBody::Text(text) => format!("{speaker}> {text}"),
        EntryBody::Pending => format!("{speaker}> {PENDING_MARKER}"),
    }
}

/// Format the whole panel: header, notice or transcript.
#[must_use]
pub fn format_view(view: &PanelView) -> String {
    if let Some(notice) = view.notice {
        return notice.to_owned();
    }
    let mut lines = Vec::with_capacity(view.entries.len() + 1);
    if let Some(address) = &view.address {
        lines.push(format!("# {address}"));
    }
    if view.show_empty_state {
        lines.push(EMPTY_STATE_TEXT.to_owned());
    }
    lines.extend(view.entries.iter().map(format_entry));
    lines.join("\n")
}
