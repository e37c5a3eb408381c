use crate::error::{Result, SlipError};
use crate::index::{index_notes, DisplayIndex, DisplayNote, NoteSelector};
use crate::store::DataStore;

pub fn indexed_notes<S: DataStore>(store: &S) -> Result<Vec<DisplayNote>> {
    Ok(index_notes(store.list_notes()?))
}

/// Resolves selectors to notes, in selector order. A title term must match exactly one
/// note, by title or block content.
pub fn notes_by_selectors<S: DataStore>(
    store: &S,
    selectors: &[NoteSelector],
) -> Result<Vec<DisplayNote>> {
    let indexed = indexed_notes(store)?;
    let mut resolved = Vec::with_capacity(selectors.len());

    for selector in selectors {
        match selector {
            NoteSelector::Index(idx) => {
                let found = indexed
                    .iter()
                    .find(|dn| dn.index == *idx)
                    .ok_or_else(|| SlipError::Api(format!("Index {} not found", idx)))?;
                resolved.push(found.clone());
            }
            NoteSelector::Title(term) => {
                let matches: Vec<&DisplayNote> = indexed
                    .iter()
                    .filter(|dn| matches!(dn.index, DisplayIndex::Regular(_)))
                    .filter(|dn| dn.note.matches(term))
                    .collect();

                match matches.as_slice() {
                    [] => {
                        return Err(SlipError::Api(format!(
                            "No slip found matching \"{}\"",
                            term
                        )))
                    }
                    [one] => resolved.push((*one).clone()),
                    many => {
                        return Err(SlipError::Api(format!(
                            "Term \"{}\" matches {} slips. Please be more specific.",
                            term,
                            many.len()
                        )))
                    }
                }
            }
        }
    }

    Ok(resolved)
}

/// Like [`notes_by_selectors`] but requires exactly one note.
pub fn single_note<S: DataStore>(store: &S, selectors: &[NoteSelector]) -> Result<DisplayNote> {
    let mut notes = notes_by_selectors(store, selectors)?;
    match notes.len() {
        1 => Ok(notes.remove(0)),
        0 => Err(SlipError::Api("No slip selected".to_string())),
        n => Err(SlipError::Api(format!(
            "Expected a single slip, got {}",
            n
        ))),
    }
}
