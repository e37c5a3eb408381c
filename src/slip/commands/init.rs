use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;

/// Seeds the welcome slip into an empty store.
pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let existing = store.list_notes()?.len();
    if existing > 0 {
        return Ok(CmdResult::default().with_message(CmdMessage::info(format!(
            "Store already has {} slip{}",
            existing,
            if existing == 1 { "" } else { "s" }
        ))));
    }

    let welcome = Note::welcome();
    store.save_note(&welcome)?;
    tracing::debug!(note = %welcome.id, "seeded welcome slip");

    let message = CmdMessage::success(format!("Slip created: {}", welcome.title));
    Ok(CmdResult::default()
        .with_affected_notes(vec![welcome])
        .with_message(message))
}
