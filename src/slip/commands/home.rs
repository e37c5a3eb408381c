use crate::commands::{CmdResult, HomeSummary};
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};

const RECENT_LIMIT: usize = 6;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let summary = summarize(store.list_notes()?, Local::now().date_naive());
    Ok(CmdResult::default().with_home(summary))
}

/// Builds the overview. `today` is the local calendar date.
pub fn summarize(notes: Vec<Note>, today: NaiveDate) -> HomeSummary {
    let total = notes.len();
    let pinned = notes.iter().filter(|n| n.is_pinned).count();

    let mut headline = format!(
        "You have {} Slip{}",
        total,
        if total == 1 { "" } else { "s" }
    );
    if pinned > 0 {
        headline.push_str(&format!(" • {} pinned", pinned));
    }

    let mut recent: Vec<Note> = notes.iter().filter(|n| !n.is_pinned).cloned().collect();
    recent.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    recent.truncate(RECENT_LIMIT);

    let updated_today = notes
        .into_iter()
        .filter(|n| n.updated_at.with_timezone(&Local).date_naive() == today)
        .collect();

    HomeSummary {
        total,
        pinned,
        headline,
        recent,
        updated_today,
    }
}
