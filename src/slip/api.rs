//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for slip operations, whichever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: raw selector strings become [`NoteSelector`]s
//! - **Returns structured types** (`Result<CmdResult>`), never printed text
//!
//! `SlipApi<S: DataStore>` is generic over storage: `SlipApi<FileStore>` in the CLI,
//! `SlipApi<InMemoryStore>` in tests.
//!
//! Edit sessions are not routed through here. Embedders that drive a live editor build
//! an [`crate::session::EditSession`] directly, with the store behind a
//! [`crate::session::StoreSink`].

use crate::commands;
use crate::commands::export::ExportFormat;
use crate::config::SlipConfig;
use crate::error::Result;
use crate::index::{parse_selectors, NoteSelector};
use crate::store::DataStore;
use std::path::PathBuf;

pub struct SlipApi<S: DataStore> {
    store: S,
    paths: commands::SlipPaths,
}

impl<S: DataStore> SlipApi<S> {
    pub fn new(store: S, paths: commands::SlipPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_note(
        &mut self,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, title, body)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_notes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, &selectors_from(selectors))
    }

    pub fn search_notes(&self, term: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, term)
    }

    /// Applies edited Markdown (title line plus body) to one note.
    pub fn edit_note<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        text: &str,
    ) -> Result<commands::CmdResult> {
        let debounce = self.config()?.debounce();
        commands::edit::run(&mut self.store, &selectors_from(selectors), text, debounce)
    }

    pub fn rename_note<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
        title: &str,
    ) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, &selectors_from(selectors), title)
    }

    pub fn duplicate_notes<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, &selectors_from(selectors))
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &selectors_from(selectors))
    }

    pub fn pin_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::pinning::pin(&mut self.store, &selectors_from(selectors))
    }

    pub fn unpin_notes<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::pinning::unpin(&mut self.store, &selectors_from(selectors))
    }

    pub fn export_notes<I: AsRef<str>>(
        &self,
        selectors: &[I],
        format: ExportFormat,
    ) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, &selectors_from(selectors), format)
    }

    pub fn import_notes(&mut self, paths: &[PathBuf]) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, paths)
    }

    pub fn stats<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, &selectors_from(selectors))
    }

    pub fn home(&self) -> Result<commands::CmdResult> {
        commands::home::run(&self.store)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn config_action(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn config(&self) -> Result<SlipConfig> {
        SlipConfig::load(&self.paths.home)
    }

    pub fn paths(&self) -> &commands::SlipPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn selectors_from<I: AsRef<str>>(inputs: &[I]) -> Vec<NoteSelector> {
    let owned: Vec<String> = inputs.iter().map(|s| s.as_ref().to_string()).collect();
    parse_selectors(&owned)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, SlipPaths};
