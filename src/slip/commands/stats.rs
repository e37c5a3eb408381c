use crate::commands::{CmdResult, NoteStats};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::DataStore;

use super::helpers::notes_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[NoteSelector]) -> Result<CmdResult> {
    let stats = notes_by_selectors(store, selectors)?
        .into_iter()
        .map(|dn| NoteStats {
            index: dn.index,
            stats: dn.note.stats(),
            title: dn.note.title,
        })
        .collect();
    Ok(CmdResult::default().with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn counts_title_and_body() {
        let fixture = StoreFixture::new().with_note("Two words", "and three more");
        let result = run(
            &fixture.store,
            &[NoteSelector::Index(DisplayIndex::Regular(1))],
        )
        .unwrap();

        let stats = &result.stats[0];
        assert_eq!(stats.title, "Two words");
        assert_eq!(stats.stats.words, 5);
        assert_eq!(
            stats.stats.characters,
            "Two words and three more".chars().count()
        );
    }
}
