use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, NoteSelector};
use crate::markdown::{decode_markdown, split_title};
use crate::session::{EditSession, StoreSink, ViewMode};
use crate::store::DataStore;
use std::time::{Duration, Instant};

use super::helpers::single_note;

/// Applies a full Markdown document to one note, as written back by an external editor.
///
/// A leading `# ` line sets the title. The rest replaces the body through a Markdown
/// edit session that is flushed straight into the store. One save is one commit,
/// whether the title, the body or both changed.
pub fn run<S: DataStore>(
    store: &mut S,
    selectors: &[NoteSelector],
    text: &str,
    debounce: Duration,
) -> Result<CmdResult> {
    let target = single_note(store, selectors)?;
    let mut note = target.note;
    let (title, body) = split_title(text);

    let title_changed = title.as_deref().is_some_and(|t| t != note.title);
    let current: Vec<_> = note.body().iter().map(|b| (b.kind, b.content.clone())).collect();
    let edited: Vec<_> = decode_markdown(body)
        .into_iter()
        .map(|b| (b.kind, b.content))
        .collect();

    if !title_changed && current == edited {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No changes to {}", note.title))));
    }

    let new_title = title.filter(|_| title_changed);
    let now = Instant::now();

    if current == edited {
        let mut session =
            EditSession::new(note, ViewMode::Markdown, debounce, StoreSink::new(store));
        if let Some(title) = new_title {
            session.set_title(title)?;
        }
        return Ok(finish(session, target.index));
    }

    // The body commit re-attaches the title block, so a new title rides along with it.
    if let Some(title) = new_title {
        note.set_title(title);
    }
    let mut session = EditSession::new(note, ViewMode::Markdown, debounce, StoreSink::new(store));
    session.input_markdown(body, body.chars().count(), now);
    session.flush(now)?;
    Ok(finish(session, target.index))
}

fn finish<S: DataStore>(
    mut session: EditSession<StoreSink<'_, S>>,
    index: DisplayIndex,
) -> CmdResult {
    let updated = session.note().clone();
    session.close();

    let message = CmdMessage::success(format!("Slip updated ({}): {}", index, updated.title));
    CmdResult::default()
        .with_affected_notes(vec![updated])
        .with_message(message)
}
