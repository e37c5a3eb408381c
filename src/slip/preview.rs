//! Read-only HTML preview of a note.
//!
//! Rendering follows GitHub-flavoured conventions: tables, strikethrough and task lists
//! are enabled, and a single newline inside a paragraph is a line break.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::markdown::note_to_markdown;
use crate::model::Note;

pub fn render_html(markdown: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Renders the note's title heading followed by its body.
pub fn render_note(note: &Note) -> String {
    render_html(&note_to_markdown(note))
}
