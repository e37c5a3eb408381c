use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::DataStore;

use super::helpers::notes_by_selectors;

/// Removes notes permanently. All selectors are resolved before anything is deleted.
pub fn run<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let targets = notes_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for dn in targets {
        if result.affected_notes.iter().any(|n| n.id == dn.note.id) {
            continue;
        }
        store.delete_note(&dn.note.id)?;
        result.add_message(CmdMessage::success(format!(
            "Slip deleted ({}): {}",
            dn.index, dn.note.title
        )));
        result.affected_notes.push(dn.note);
    }

    Ok(result)
}
