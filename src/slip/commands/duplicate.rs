use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::DataStore;

use super::helpers::notes_by_selectors;

pub fn run<S: DataStore>(store: &mut S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for dn in notes_by_selectors(store, selectors)? {
        let copy = dn.note.duplicate();
        store.save_note(&copy)?;
        result.add_message(CmdMessage::success(format!(
            "Slip duplicated ({}): {}",
            dn.index, copy.title
        )));
        result.affected_notes.push(copy);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn duplicate_is_saved_as_newest() {
        let mut fixture = StoreFixture::new().with_note("Recipe", "- flour\n- water");
        let original = fixture.store.list_notes().unwrap()[0].clone();

        run(
            &mut fixture.store,
            &[NoteSelector::Index(DisplayIndex::Regular(1))],
        )
        .unwrap();

        let notes = fixture.store.list_notes().unwrap();
        assert_eq!(notes.len(), 2);
        let copy = &notes[0];
        assert_eq!(copy.title, "Recipe (Copy)");
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.body().len(), original.body().len());
        assert!(copy
            .blocks
            .iter()
            .all(|b| original.blocks.iter().all(|o| o.id != b.id)));
    }
}
