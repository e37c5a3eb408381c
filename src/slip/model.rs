//! # Domain Model: Blocks and Notes
//!
//! This module defines the only persisted shape in slip: a [`Note`] holding an ordered
//! list of typed [`Block`]s. Every other representation (the rich editor tree, Markdown
//! text, rendered HTML) is derived from the block list by a codec and converted back
//! into a fresh block list on commit.
//!
//! ## The Title Block
//!
//! ```text
//! blocks[0]   Heading1 "Groceries"      <-- mirrors Note::title
//! blocks[1]   Paragraph "for the weekend"
//! blocks[2]   BulletList "eggs"
//! blocks[3]   BulletList "flour"
//! ```
//!
//! Editing surfaces show the title in a separate input and only ever edit
//! `blocks[1..]` (see [`Note::body`]). On commit the title block is re-attached with its
//! original id (see [`Note::title_block`]).
//!
//! ## Minimum Viable Document
//!
//! A note never has zero blocks after a conversion. [`create_document`] produces a
//! title heading plus one empty paragraph, and both codecs synthesize an empty
//! paragraph when decoding yields nothing.
//!
//! ## Identity
//!
//! Block and note ids are v4 UUIDs. Ids are only meaningful within one note; codecs mint
//! fresh ids for every block they decode, except the title block which callers carry
//! across commits.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_TITLE: &str = "Untitled";

/// The closed set of block kinds. Serialized names match the persisted form
/// (`heading1`, `bulletList`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Heading1,
    Heading2,
    Heading3,
    Paragraph,
    BulletList,
    NumberedList,
    Blockquote,
}

impl BlockKind {
    /// Maps an editor heading level to a heading kind.
    /// Level 0 and 1 become `Heading1`, anything above 2 is clamped to `Heading3`.
    pub fn heading(level: u8) -> Self {
        match level {
            0 | 1 => BlockKind::Heading1,
            2 => BlockKind::Heading2,
            _ => BlockKind::Heading3,
        }
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            _ => None,
        }
    }

    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: BlockKind,
    #[serde(default)]
    pub content: String,
}

impl Block {
    /// Creates an empty block with a freshly minted id.
    pub fn new(kind: BlockKind) -> Self {
        Self::with_content(kind, String::new())
    }

    pub fn with_content(kind: BlockKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
        }
    }
}

/// Word and character counts, as shown in the editor footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DocumentStats {
    pub words: usize,
    pub characters: usize,
}

impl DocumentStats {
    pub fn of(text: &str) -> Self {
        Self {
            words: text.split_whitespace().count(),
            characters: text.chars().count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub blocks: Vec<Block>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub pinned_at: Option<DateTime<Utc>>,
    /// Bumped on every committed mutation. Edit sessions compare it to tell their own
    /// echoes apart from external changes.
    #[serde(default)]
    pub revision: u64,
}

/// Creates a new, untitled note in the minimum viable state.
pub fn create_document() -> Note {
    Note::new()
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

impl Note {
    pub fn new() -> Self {
        Self::from_parts(
            DEFAULT_TITLE.to_string(),
            vec![Block::new(BlockKind::Paragraph)],
        )
    }

    /// Builds a note from a title and its body blocks. The title heading is prepended.
    pub fn from_parts(title: String, mut body: Vec<Block>) -> Self {
        if body.is_empty() {
            body.push(Block::new(BlockKind::Paragraph));
        }
        let mut blocks = Vec::with_capacity(body.len() + 1);
        blocks.push(Block::with_content(BlockKind::Heading1, title.clone()));
        blocks.extend(body);

        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            blocks,
            created_at: now,
            updated_at: now,
            is_pinned: false,
            pinned_at: None,
            revision: 0,
        }
    }

    /// The first-run welcome Slip.
    pub fn welcome() -> Self {
        use BlockKind::*;
        let body = [
            (Paragraph, "Your beautiful, distraction-free note-taking space. Start writing below or create a new Slip to begin organizing your thoughts."),
            (Heading2, "Getting Started"),
            (BulletList, "Create headings by typing # followed by space"),
            (BulletList, "Make bullet lists by typing - followed by space"),
            (BulletList, "Create numbered lists by typing 1. followed by space"),
            (BulletList, "Use Enter to create new lines and blocks"),
            (BulletList, "Customize themes from the sidebar"),
            (BulletList, "Right-click Slips for options like pin, rename, and delete"),
            (BulletList, "Use the Workspace for quick access to the editor"),
            (Paragraph, "Happy note-taking! ✨"),
        ]
        .into_iter()
        .map(|(kind, content)| Block::with_content(kind, content))
        .collect();

        Self::from_parts("Welcome to Slip".to_string(), body)
    }

    /// Everything after the title block.
    pub fn body(&self) -> &[Block] {
        self.blocks.get(1..).unwrap_or(&[])
    }

    /// The title block to re-attach on commit: keeps the id of `blocks[0]` when there is
    /// one, and always carries the current title as a level 1 heading.
    pub fn title_block(&self) -> Block {
        Block {
            id: self
                .blocks
                .first()
                .map(|block| block.id)
                .unwrap_or_else(Uuid::new_v4),
            kind: BlockKind::Heading1,
            content: self.title.clone(),
        }
    }

    /// Sets the title and mirrors it into the first block when that block is a heading.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        match self.blocks.first_mut() {
            Some(first) if first.kind.is_heading() => first.content = self.title.clone(),
            Some(_) => {}
            None => self
                .blocks
                .push(Block::with_content(BlockKind::Heading1, self.title.clone())),
        }
    }

    /// Refreshes `updated_at` and bumps the revision. Called once per committed mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
        self.revision += 1;
    }

    pub fn set_pinned(&mut self, pinned: bool) {
        self.is_pinned = pinned;
        self.pinned_at = if pinned { Some(Utc::now()) } else { None };
    }

    /// Copies the note under fresh ids with a "(Copy)" title.
    pub fn duplicate(&self) -> Note {
        let title = format!("{} (Copy)", self.title);
        let blocks = self
            .blocks
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let content = if i == 0 && block.kind == BlockKind::Heading1 {
                    title.clone()
                } else {
                    block.content.clone()
                };
                Block::with_content(block.kind, content)
            })
            .collect();

        let now = Utc::now();
        Note {
            id: Uuid::new_v4(),
            title,
            blocks,
            created_at: now,
            updated_at: now,
            is_pinned: false,
            pinned_at: None,
            revision: 0,
        }
    }

    /// Counts over the title followed by every body block.
    pub fn stats(&self) -> DocumentStats {
        let body: Vec<&str> = self.body().iter().map(|b| b.content.as_str()).collect();
        DocumentStats::of(&format!("{} {}", self.title, body.join(" ")))
    }

    /// Case-insensitive match against the title and every block.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self
                .blocks
                .iter()
                .any(|block| block.content.to_lowercase().contains(&query))
    }
}
