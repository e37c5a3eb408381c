use crate::config::SlipConfig;
use crate::index::{DisplayIndex, DisplayNote};
use crate::model::{DocumentStats, Note};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod duplicate;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod home;
pub mod import;
pub mod init;
pub mod list;
pub mod pinning;
pub mod rename;
pub mod search;
pub mod stats;
pub mod view;

/// Where slip keeps its files.
#[derive(Debug, Clone)]
pub struct SlipPaths {
    /// Directory holding config.json
    pub home: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

/// One rendered note from `export`.
#[derive(Debug, Clone)]
pub struct ExportedNote {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct NoteStats {
    pub index: DisplayIndex,
    pub title: String,
    pub stats: DocumentStats,
}

/// The home-screen overview.
#[derive(Debug, Clone)]
pub struct HomeSummary {
    pub total: usize,
    pub pinned: usize,
    /// "You have N Slips • M pinned"
    pub headline: String,
    /// Most recently updated unpinned notes, newest first
    pub recent: Vec<Note>,
    pub updated_today: Vec<Note>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<DisplayNote>,
    pub config: Option<SlipConfig>,
    pub exported: Vec<ExportedNote>,
    pub stats: Vec<NoteStats>,
    pub home: Option<HomeSummary>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: SlipConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_exported(mut self, exported: Vec<ExportedNote>) -> Self {
        self.exported = exported;
        self
    }

    pub fn with_stats(mut self, stats: Vec<NoteStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_home(mut self, home: HomeSummary) -> Self {
        self.home = Some(home);
        self
    }
}
