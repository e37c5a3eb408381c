use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::markdown::decode_markdown;
use crate::model::{Note, DEFAULT_TITLE};
use crate::store::DataStore;

/// Creates a note. The optional body is Markdown.
pub fn run<S: DataStore>(
    store: &mut S,
    title: Option<String>,
    body: Option<String>,
) -> Result<CmdResult> {
    let title = title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let blocks = body.as_deref().map(decode_markdown).unwrap_or_default();

    let note = Note::from_parts(title, blocks);
    store.save_note(&note)?;

    let message = CmdMessage::success(format!("Slip created: {}", note.title));
    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BlockKind;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_untitled_minimum_note() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, None, None).unwrap();

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Untitled");
        assert_eq!(notes[0].blocks.len(), 2);
        assert_eq!(result.messages[0].content, "Slip created: Untitled");
    }

    #[test]
    fn decodes_markdown_body() {
        let mut store = InMemoryStore::new();
        run(
            &mut store,
            Some("  Groceries ".into()),
            Some("- eggs\n- milk".into()),
        )
        .unwrap();

        let note = &store.list_notes().unwrap()[0];
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.blocks[0].content, "Groceries");
        assert_eq!(note.body().len(), 2);
        assert!(note.body().iter().all(|b| b.kind == BlockKind::BulletList));
    }

    #[test]
    fn blank_title_falls_back_to_untitled() {
        let mut store = InMemoryStore::new();
        run(&mut store, Some("   ".into()), None).unwrap();
        assert_eq!(store.list_notes().unwrap()[0].title, "Untitled");
    }
}
