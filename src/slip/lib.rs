//! # Slip Architecture
//!
//! Slip is a block-based note library. A note is a flat list of typed [`model::Block`]s
//! (headings, paragraphs, list items, quotes) and can be edited through two views: a
//! Markdown text buffer and a rich nested document tree. Both views are projections of
//! the same block list and convert losslessly for the supported block kinds.
//!
//! The binary is one client of the library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs + args.rs)                                    │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade: selector strings in, CmdResult out          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)   │  Edit session (session.rs)    │
//! │  - One pure `run` per verb  │  - Debounced commits, caret   │
//! │                             │    restore, echo suppression  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Conversions (markdown.rs, tree.rs, preview.rs)             │
//! │  Storage (store/): DataStore, FileStore, InMemoryStore      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O in the core
//!
//! From `api.rs` inward nothing writes to stdout or stderr, and time is passed in
//! rather than read from a clock where behavior depends on it ([`session::EditSession`]
//! takes `Instant`s). Diagnostics go through `tracing`; the binary decides where they
//! end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade over commands
//! - [`commands`]: Business logic for each verb
//! - [`session`]: The live editing session shared by both views
//! - [`markdown`]: Block list to and from Markdown text
//! - [`tree`]: Block list to and from the rich document tree
//! - [`preview`]: Markdown to HTML for the read-only preview
//! - [`model`]: `Note`, `Block`, `BlockKind`
//! - [`index`]: Display indexes (`1`, `p1`, ranges)
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Per-home configuration
//! - [`editor`]: External editor integration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod index;
pub mod markdown;
pub mod model;
pub mod preview;
pub mod session;
pub mod store;
pub mod tree;

pub use error::{Result, SlipError};
pub use markdown::{decode_markdown, encode_markdown};
pub use model::{Block, BlockKind, Note};
pub use preview::render_html;
pub use session::{CommitSink, EditSession, EditState, StoreSink, ViewMode};
pub use tree::{decode_tree, encode_tree, TreeDocument};
