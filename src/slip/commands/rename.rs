use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::DataStore;

use super::helpers::single_note;

pub fn run<S: DataStore>(
    store: &mut S,
    selectors: &[NoteSelector],
    new_title: &str,
) -> Result<CmdResult> {
    let target = single_note(store, selectors)?;
    let mut note = target.note;
    let new_title = new_title.trim();

    if new_title.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::warning("Title cannot be empty")));
    }
    if new_title == note.title {
        return Ok(CmdResult::default().with_message(CmdMessage::warning(format!(
            "Title is already \"{}\"",
            new_title
        ))));
    }

    let old_title = std::mem::take(&mut note.title);
    note.set_title(new_title);
    note.touch();
    store.save_note(&note)?;

    let message = CmdMessage::success(format!(
        "Slip renamed ({}): {} -> {}",
        target.index, old_title, note.title
    ));
    Ok(CmdResult::default()
        .with_affected_notes(vec![note])
        .with_message(message))
}
