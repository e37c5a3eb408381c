use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayNote};
use crate::store::DataStore;
use std::cmp::Ordering;

use super::helpers::indexed_notes;

/// Ranks: exact title, then title contains, then any block contains.
/// Ties go to the shorter title, then the older note.
pub fn run<S: DataStore>(store: &S, term: &str) -> Result<CmdResult> {
    let term_lower = term.to_lowercase();

    let mut matches: Vec<(DisplayNote, u8)> = indexed_notes(store)?
        .into_iter()
        .filter(|dn| matches!(dn.index, DisplayIndex::Regular(_)))
        .filter_map(|dn| {
            let title_lower = dn.note.title.to_lowercase();
            let score = if title_lower == term_lower {
                1
            } else if title_lower.contains(&term_lower) {
                2
            } else if dn.note.matches(term) {
                3
            } else {
                return None;
            };
            Some((dn, score))
        })
        .collect();

    matches.sort_by(|(a, score_a), (b, score_b)| match score_a.cmp(score_b) {
        Ordering::Equal => a
            .note
            .title
            .len()
            .cmp(&b.note.title.len())
            .then_with(|| a.note.created_at.cmp(&b.note.created_at)),
        ord => ord,
    });

    let listed = matches.into_iter().map(|(dn, _)| dn).collect();
    Ok(CmdResult::default().with_listed_notes(listed))
}
