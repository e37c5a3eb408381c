use crate::commands::{CmdMessage, CmdResult, ExportedNote};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::markdown::note_to_markdown;
use crate::model::Note;
use crate::preview::render_note;
use crate::store::DataStore;
use crate::tree::encode_tree;
use std::fmt;
use std::str::FromStr;

use super::helpers::notes_by_selectors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Markdown,
    Html,
    /// Rich-editor JSON of the body
    Tree,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" => Ok(ExportFormat::Html),
            "tree" | "json" => Ok(ExportFormat::Tree),
            other => Err(format!(
                "Unknown export format '{}'. Use markdown, html or tree.",
                other
            )),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExportFormat::Markdown => "markdown",
            ExportFormat::Html => "html",
            ExportFormat::Tree => "tree",
        };
        write!(f, "{}", name)
    }
}

pub fn render(note: &Note, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Markdown => Ok(note_to_markdown(note)),
        ExportFormat::Html => Ok(render_note(note)),
        ExportFormat::Tree => encode_tree(note.body()).to_json(),
    }
}

pub fn run<S: DataStore>(
    store: &S,
    selectors: &[NoteSelector],
    format: ExportFormat,
) -> Result<CmdResult> {
    let notes = notes_by_selectors(store, selectors)?;
    if notes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("No slips to export")));
    }

    let exported = notes
        .iter()
        .map(|dn| {
            Ok(ExportedNote {
                title: dn.note.title.clone(),
                content: render(&dn.note, format)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CmdResult::default().with_exported(exported))
}
