//! # Edit Session
//!
//! An [`EditSession`] owns the editing loop for one note in one active view. It turns
//! raw input into committed notes and hands each commit to a [`CommitSink`].
//!
//! ## States
//!
//! ```text
//!            input_markdown                 poll(now >= due) / flush
//!   Idle ──────────────────> PendingCommit ─────────────────────────> Idle
//!     ^                        │    ^
//!     │   note_updated(newer)  │    │ input_markdown (re-arms due)
//!     └────────────────────────┘    └──────
//!
//!   close() from any state ──> Closed (terminal)
//! ```
//!
//! The live buffer is updated synchronously on every input. Only the commit is
//! deferred: the Markdown view commits after `debounce` of quiet, while the rich view
//! commits on every change since its tree already is the live buffer.
//!
//! ## Time
//!
//! The session holds no timers. Callers pass `Instant`s into [`EditSession::input_markdown`]
//! and [`EditSession::poll`], which keeps the debounce deterministic.
//!
//! ## Echoes
//!
//! Each commit bumps [`Note::revision`] and the session remembers the last revision it
//! produced. When the store hands a note back through [`EditSession::note_updated`], a
//! revision at or below that mark is our own echo and leaves the buffer alone. Anything
//! newer is an external change and replaces the buffer.
//!
//! ## Caret
//!
//! Offsets are in chars. Every buffer replacement schedules one restore, delivered by
//! [`EditSession::after_redraw`] once the view has redrawn, clamped to the new length.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::markdown::{decode_markdown, encode_markdown};
use crate::model::{Block, DocumentStats, Note};
use crate::preview::render_note;
use crate::store::DataStore;
use crate::tree::{decode_tree, encode_tree, TreeDocument};

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Rich,
    Markdown,
    Preview,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Rich => "rich",
            ViewMode::Markdown => "markdown",
            ViewMode::Preview => "preview",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rich" | "text" => Ok(ViewMode::Rich),
            "markdown" | "md" => Ok(ViewMode::Markdown),
            "preview" => Ok(ViewMode::Preview),
            other => Err(format!(
                "Unknown view '{}'. Use rich, markdown or preview.",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    PendingCommit { due: Instant },
    Closed,
}

/// Receives every committed note.
pub trait CommitSink {
    fn commit(&mut self, note: &Note) -> Result<()>;
}

/// Records commits in order.
impl CommitSink for Vec<Note> {
    fn commit(&mut self, note: &Note) -> Result<()> {
        self.push(note.clone());
        Ok(())
    }
}

/// Writes commits straight into a [`DataStore`].
pub struct StoreSink<'a, S: DataStore> {
    store: &'a mut S,
}

impl<'a, S: DataStore> StoreSink<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }
}

impl<S: DataStore> CommitSink for StoreSink<'_, S> {
    fn commit(&mut self, note: &Note) -> Result<()> {
        self.store.save_note(note)
    }
}

pub struct EditSession<C: CommitSink> {
    note: Note,
    mode: ViewMode,
    debounce: Duration,
    sink: C,
    state: EditState,
    markdown: String,
    tree: TreeDocument,
    caret: usize,
    restore_pending: bool,
    last_revision: u64,
}

impl<C: CommitSink> EditSession<C> {
    pub fn new(note: Note, mode: ViewMode, debounce: Duration, sink: C) -> Self {
        let markdown = encode_markdown(note.body());
        let tree = encode_tree(note.body());
        let last_revision = note.revision;
        Self {
            note,
            mode,
            debounce,
            sink,
            state: EditState::Idle,
            markdown,
            tree,
            caret: 0,
            restore_pending: false,
            last_revision,
        }
    }

    /// The last committed (or adopted) note.
    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    /// Live Markdown buffer.
    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    /// Live rich-tree buffer.
    pub fn tree(&self) -> &TreeDocument {
        &self.tree
    }

    pub fn preview_html(&self) -> String {
        render_note(&self.note)
    }

    /// Counts for the active view's live content.
    pub fn stats(&self) -> DocumentStats {
        match self.mode {
            ViewMode::Markdown => {
                DocumentStats::of(&format!("{} {}", self.note.title, self.markdown))
            }
            ViewMode::Rich => {
                DocumentStats::of(&format!("{} {}", self.note.title, self.tree.plain_text()))
            }
            ViewMode::Preview => self.note.stats(),
        }
    }

    pub fn sink(&self) -> &C {
        &self.sink
    }

    pub fn into_sink(self) -> C {
        self.sink
    }

    fn accepts(&self, mode: ViewMode, action: &str) -> bool {
        if self.state == EditState::Closed {
            tracing::warn!(note = %self.note.id, action, "input after close ignored");
            return false;
        }
        if self.mode != mode {
            tracing::warn!(
                note = %self.note.id,
                action,
                active = %self.mode,
                "input for inactive view ignored"
            );
            return false;
        }
        true
    }

    /// Replaces the Markdown buffer and re-arms the debounce.
    pub fn input_markdown(&mut self, text: impl Into<String>, caret: usize, now: Instant) {
        if !self.accepts(ViewMode::Markdown, "input_markdown") {
            return;
        }
        self.markdown = text.into();
        self.caret = caret;
        self.restore_pending = true;

        let due = now + self.debounce;
        tracing::debug!(note = %self.note.id, ?due, "debounce armed");
        self.state = EditState::PendingCommit { due };
    }

    /// Tracks caret moves that do not change the text (clicks, selection).
    pub fn record_caret(&mut self, offset: usize) {
        self.caret = offset;
    }

    /// Commits the Markdown buffer if the debounce has elapsed.
    pub fn poll(&mut self, now: Instant) -> Result<bool> {
        match self.state {
            EditState::PendingCommit { due } if now >= due => {
                self.commit_markdown()?;
                Ok(true)
            }
            EditState::Closed => {
                tracing::warn!(note = %self.note.id, "poll after close ignored");
                Ok(false)
            }
            _ => Ok(false),
        }
    }

    /// Commits a pending Markdown buffer without waiting for the debounce.
    pub fn flush(&mut self, now: Instant) -> Result<bool> {
        match self.state {
            EditState::PendingCommit { due } => {
                tracing::debug!(
                    note = %self.note.id,
                    early_by = ?due.saturating_duration_since(now),
                    "flushing pending commit"
                );
                self.commit_markdown()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Yields the caret to restore after a redraw, once per scheduled restore.
    pub fn after_redraw(&mut self, buffer_len: usize) -> Option<usize> {
        if !self.restore_pending {
            return None;
        }
        self.restore_pending = false;
        let caret = self.caret.min(buffer_len);
        tracing::debug!(note = %self.note.id, caret, "caret restored");
        Some(caret)
    }

    /// A change event from the rich surface. Commits immediately.
    pub fn rich_change(&mut self, tree: TreeDocument) -> Result<()> {
        if !self.accepts(ViewMode::Rich, "rich_change") {
            return Ok(());
        }
        let blocks = decode_tree(&tree, self.note.title_block());
        self.tree = tree;
        self.commit(blocks)
    }

    /// Renames the note. Commits immediately with the last committed body; a pending
    /// Markdown commit stays armed and picks up the new title when it fires.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        if self.state == EditState::Closed {
            tracing::warn!(note = %self.note.id, "set_title after close ignored");
            return Ok(());
        }
        self.note.title = title.into();
        let mut blocks = vec![self.note.title_block()];
        blocks.extend_from_slice(self.note.body());

        let pending = self.state;
        self.commit(blocks)?;
        self.state = pending;
        Ok(())
    }

    /// A note arriving from the store.
    pub fn note_updated(&mut self, note: Note) {
        if self.state == EditState::Closed {
            return;
        }
        if note.id != self.note.id {
            tracing::warn!(
                note = %self.note.id,
                incoming = %note.id,
                "update for another note ignored"
            );
            return;
        }
        if note.revision <= self.last_revision {
            tracing::debug!(
                note = %note.id,
                revision = note.revision,
                "echo of own commit ignored"
            );
            return;
        }

        tracing::debug!(note = %note.id, revision = note.revision, "external update adopted");
        self.last_revision = note.revision;
        self.note = note;
        self.reload_buffers();
        self.state = EditState::Idle;
        self.restore_pending = true;
    }

    /// Flushes pending edits, then shows `mode` with buffers rebuilt from the
    /// committed note.
    pub fn switch_view(&mut self, mode: ViewMode, now: Instant) -> Result<()> {
        if self.state == EditState::Closed {
            tracing::warn!(note = %self.note.id, "switch_view after close ignored");
            return Ok(());
        }
        self.flush(now)?;
        self.mode = mode;
        self.reload_buffers();
        self.restore_pending = true;
        Ok(())
    }

    /// Ends the session. A pending commit is dropped, not written.
    pub fn close(&mut self) {
        if let EditState::PendingCommit { .. } = self.state {
            tracing::debug!(note = %self.note.id, "pending commit cancelled on close");
        }
        self.state = EditState::Closed;
    }

    fn reload_buffers(&mut self) {
        self.markdown = encode_markdown(self.note.body());
        self.tree = encode_tree(self.note.body());
    }

    fn commit_markdown(&mut self) -> Result<()> {
        let mut blocks = vec![self.note.title_block()];
        blocks.extend(decode_markdown(&self.markdown));
        self.commit(blocks)
    }

    fn commit(&mut self, blocks: Vec<Block>) -> Result<()> {
        self.note.blocks = blocks;
        self.note.touch();
        self.last_revision = self.note.revision;
        self.state = EditState::Idle;
        tracing::debug!(note = %self.note.id, revision = self.note.revision, "commit");
        self.sink.commit(&self.note)
    }
}
