//! # Display Indexes
//!
//! Notes are addressed on the command line by short positional indexes rather than
//! UUIDs:
//!
//! ```text
//! p1  ⚲ Groceries        <- pinned section
//! 1     Meeting notes    <- every note, newest created first
//! 2   ⚲ Groceries
//! 3     Welcome to Slip
//! ```
//!
//! A pinned note carries two indexes, `pN` and its regular one. The regular index is
//! therefore stable when a note is pinned or unpinned.
//!
//! Anything that does not parse as an index is taken as a title search term, see
//! [`NoteSelector`].

use crate::model::Note;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Pinned(usize),
    Regular(usize),
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayIndex::Pinned(i) => write!(f, "p{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (digits, pinned) = match s.strip_prefix('p') {
            Some(rest) => (rest, true),
            None => (s, false),
        };
        let n: usize = digits
            .parse()
            .map_err(|_| format!("Invalid index format: {}", s))?;
        Ok(if pinned {
            DisplayIndex::Pinned(n)
        } else {
            DisplayIndex::Regular(n)
        })
    }
}

/// User input naming one note: an index, or a term matched against titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteSelector {
    Index(DisplayIndex),
    Title(String),
}

impl fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteSelector::Index(idx) => write!(f, "{}", idx),
            NoteSelector::Title(t) => write!(f, "\"{}\"", t),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Assigns display indexes. Pinned entries come first, then every note with its
/// regular index. Both sections are ordered newest created first.
pub fn index_notes(mut notes: Vec<Note>) -> Vec<DisplayNote> {
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let pinned = notes
        .iter()
        .filter(|note| note.is_pinned)
        .enumerate()
        .map(|(i, note)| DisplayNote {
            note: note.clone(),
            index: DisplayIndex::Pinned(i + 1),
        });

    let regular = notes.iter().enumerate().map(|(i, note)| DisplayNote {
        note: note.clone(),
        index: DisplayIndex::Regular(i + 1),
    });

    pinned.chain(regular).collect()
}

/// Parses `3`, `p2`, or a same-kind range such as `1-3` or `p1-p2`.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    match s.split_once('-') {
        Some((start, end)) if !start.is_empty() => {
            expand_range(DisplayIndex::from_str(start)?, DisplayIndex::from_str(end)?)
        }
        _ => DisplayIndex::from_str(s).map(|idx| vec![idx]),
    }
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    let (s, e, make): (usize, usize, fn(usize) -> DisplayIndex) = match (start, end) {
        (DisplayIndex::Regular(s), DisplayIndex::Regular(e)) => (s, e, DisplayIndex::Regular),
        (DisplayIndex::Pinned(s), DisplayIndex::Pinned(e)) => (s, e, DisplayIndex::Pinned),
        _ => {
            return Err(format!(
                "Invalid range: cannot mix index types ({} and {})",
                start, end
            ))
        }
    };
    if s > e {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }
    Ok((s..=e).map(make).collect())
}

/// Turns raw arguments into selectors. If any argument is not an index, the whole
/// input is joined into one title search term.
pub fn parse_selectors(inputs: &[String]) -> Vec<NoteSelector> {
    let mut selectors = Vec::new();
    for input in inputs {
        match parse_index_or_range(input) {
            Ok(indexes) => selectors.extend(indexes.into_iter().map(NoteSelector::Index)),
            Err(_) => return vec![NoteSelector::Title(inputs.join(" "))],
        }
    }
    selectors
}
