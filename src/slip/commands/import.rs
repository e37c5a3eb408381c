use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::markdown::{decode_markdown, split_title};
use crate::model::{Block, BlockKind, Note, DEFAULT_TITLE};
use crate::store::DataStore;
use crate::tree::{decode_tree, TreeDocument};
use std::fs;
use std::path::{Path, PathBuf};

/// Imports files as new notes. `.json` files are read as rich-editor documents,
/// anything else as Markdown whose leading `# ` line becomes the title.
/// Unreadable files are reported and skipped.
pub fn run<S: DataStore>(store: &mut S, paths: &[PathBuf]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for path in paths {
        match read_note(path) {
            Ok(note) => {
                store.save_note(&note)?;
                result.add_message(CmdMessage::success(format!(
                    "Slip imported: {} ({})",
                    note.title,
                    path.display()
                )));
                result.affected_notes.push(note);
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "import failed");
                result.add_message(CmdMessage::error(format!(
                    "Failed to import {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    Ok(result)
}

fn read_note(path: &Path) -> Result<Note> {
    let content = fs::read_to_string(path)?;
    let stem_title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let tree = TreeDocument::from_json(&content)?;
        let title = Block::with_content(BlockKind::Heading1, stem_title.clone());
        let mut blocks = decode_tree(&tree, title);
        blocks.remove(0);
        return Ok(Note::from_parts(stem_title, blocks));
    }

    let (title, body) = split_title(&content);
    Ok(Note::from_parts(
        title.unwrap_or(stem_title),
        decode_markdown(body),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    #[test]
    fn imports_markdown_with_title_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("groceries.md");
        fs::write(&path, "# Shopping\n\n- eggs\n- milk\n").unwrap();

        let mut store = InMemoryStore::new();
        run(&mut store, &[path]).unwrap();

        let note = &store.list_notes().unwrap()[0];
        assert_eq!(note.title, "Shopping");
        assert_eq!(note.body().len(), 2);
        assert_eq!(note.body()[0].kind, BlockKind::BulletList);
    }

    #[test]
    fn markdown_without_title_uses_file_name() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ideas.txt");
        fs::write(&path, "just a thought").unwrap();

        let mut store = InMemoryStore::new();
        run(&mut store, &[path]).unwrap();

        let note = &store.list_notes().unwrap()[0];
        assert_eq!(note.title, "ideas");
        assert_eq!(note.body()[0].content, "just a thought");
    }

    #[test]
    fn imports_tree_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plan.json");
        fs::write(
            &path,
            r#"{"type":"doc","content":[
                {"type":"bulletList","content":[
                    {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"a"}]}]},
                    {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"b"}]}]}
                ]}
            ]}"#,
        )
        .unwrap();

        let mut store = InMemoryStore::new();
        run(&mut store, &[path]).unwrap();

        let note = &store.list_notes().unwrap()[0];
        assert_eq!(note.title, "plan");
        assert_eq!(note.blocks[0].content, "plan");
        assert_eq!(note.body().len(), 2);
    }

    #[test]
    fn bad_files_are_reported_not_fatal() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{nope").unwrap();
        let missing = dir.path().join("missing.md");
        let good = dir.path().join("good.md");
        fs::write(&good, "ok").unwrap();

        let mut store = InMemoryStore::new();
        let result = run(&mut store, &[broken, missing, good]).unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        let errors = result
            .messages
            .iter()
            .filter(|m| m.level == MessageLevel::Error)
            .count();
        assert_eq!(errors, 2);
    }
}
