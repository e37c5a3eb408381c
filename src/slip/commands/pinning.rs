use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::DataStore;

use super::helpers::notes_by_selectors;

pub fn pin<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    pin_state(store, selectors, true)
}

pub fn unpin<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    pin_state(store, selectors, false)
}

fn pin_state<S: DataStore>(
    store: &mut S,
    selectors: &[NoteSelector],
    is_pinned: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for dn in notes_by_selectors(store, selectors)? {
        let mut note = dn.note;
        if note.is_pinned == is_pinned {
            let state = if is_pinned { "pinned" } else { "not pinned" };
            result.add_message(CmdMessage::info(format!(
                "Slip {} is already {}: {}",
                dn.index, state, note.title
            )));
            continue;
        }
        note.set_pinned(is_pinned);
        store.save_note(&note)?;

        let verb = if is_pinned { "pinned" } else { "unpinned" };
        result.add_message(CmdMessage::success(format!(
            "Slip {} ({}): {}",
            verb, dn.index, note.title
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::list;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    fn regular(n: usize) -> Vec<NoteSelector> {
        vec![NoteSelector::Index(DisplayIndex::Regular(n))]
    }

    #[test]
    fn pinning_assigns_p_index() {
        let mut fixture = StoreFixture::new().with_notes(2);
        pin(&mut fixture.store, &regular(2)).unwrap();

        let result = list::run(&fixture.store).unwrap();
        let pinned = &result.listed_notes[0];
        assert_eq!(pinned.index, DisplayIndex::Pinned(1));
        assert_eq!(pinned.note.title, "Test Slip 1");
        assert!(pinned.note.pinned_at.is_some());
    }

    #[test]
    fn unpinning_clears_state() {
        let mut fixture = StoreFixture::new().with_pinned_note("Pinned");
        unpin(&mut fixture.store, &regular(1)).unwrap();

        let note = &fixture.store.list_notes().unwrap()[0];
        assert!(!note.is_pinned);
        assert!(note.pinned_at.is_none());
    }

    #[test]
    fn pinning_twice_reports_info() {
        let mut fixture = StoreFixture::new().with_pinned_note("Pinned");
        let result = pin(&mut fixture.store, &regular(1)).unwrap();
        assert!(result.affected_notes.is_empty());
        assert!(result.messages[0].content.contains("already pinned"));
    }
}
