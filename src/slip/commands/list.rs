use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

use super::helpers::indexed_notes;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_notes(indexed_notes(store)?))
}
