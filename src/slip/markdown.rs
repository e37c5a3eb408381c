//! Markdown codec for note bodies.
//!
//! The format is deliberately flat: one line per block, blocks separated by a blank line.
//! Decoding is a line scan that classifies each line by prefix. Inline markup is kept as
//! literal text.
//!
//! The codec works on body blocks only. Callers strip the title block before encoding and
//! re-attach it after decoding (see [`crate::model::Note::title_block`]).
//!
//! Round-trips are lossy in two documented ways: numbered items always encode as `1.`,
//! and blocks with blank content are dropped on decode.

use crate::model::{Block, BlockKind, Note};

pub fn encode_markdown(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(encode_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn encode_block(block: &Block) -> String {
    let prefix = match block.kind {
        BlockKind::Heading1 => "# ",
        BlockKind::Heading2 => "## ",
        BlockKind::Heading3 => "### ",
        BlockKind::BulletList => "- ",
        BlockKind::NumberedList => "1. ",
        BlockKind::Blockquote => "> ",
        BlockKind::Paragraph => "",
    };
    format!("{}{}", prefix, block.content)
}

/// Decodes Markdown text into body blocks. Never returns an empty list.
pub fn decode_markdown(text: &str) -> Vec<Block> {
    let mut decoder = Decoder::default();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            decoder.flush_paragraph();
            continue;
        }

        match classify(line) {
            Some((kind, content)) => {
                decoder.flush_paragraph();
                decoder.push(kind, content);
            }
            None => decoder.accumulate(line),
        }
    }
    decoder.flush_paragraph();

    if decoder.blocks.is_empty() {
        decoder.blocks.push(Block::new(BlockKind::Paragraph));
    }
    decoder.blocks
}

/// Splits a prefixed line into its block kind and raw content.
fn classify(line: &str) -> Option<(BlockKind, &str)> {
    const PREFIXES: [(&str, BlockKind); 5] = [
        ("# ", BlockKind::Heading1),
        ("## ", BlockKind::Heading2),
        ("### ", BlockKind::Heading3),
        ("- ", BlockKind::BulletList),
        ("* ", BlockKind::BulletList),
    ];

    PREFIXES
        .iter()
        .find_map(|(prefix, kind)| line.strip_prefix(*prefix).map(|rest| (*kind, rest)))
        .or_else(|| strip_numeral(line).map(|rest| (BlockKind::NumberedList, rest)))
        .or_else(|| line.strip_prefix("> ").map(|rest| (BlockKind::Blockquote, rest)))
}

/// Matches `^\d+\.\s` and returns what follows it.
fn strip_numeral(line: &str) -> Option<&str> {
    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits == 0 {
        return None;
    }
    let rest = line[digits..].strip_prefix('.')?;
    let mut chars = rest.chars();
    match chars.next() {
        Some(c) if c.is_whitespace() => Some(chars.as_str()),
        _ => None,
    }
}

#[derive(Default)]
struct Decoder {
    blocks: Vec<Block>,
    paragraph: String,
}

impl Decoder {
    fn push(&mut self, kind: BlockKind, content: &str) {
        let content = content.trim();
        if !content.is_empty() {
            self.blocks.push(Block::with_content(kind, content));
        }
    }

    fn accumulate(&mut self, line: &str) {
        if !self.paragraph.is_empty() {
            self.paragraph.push('\n');
        }
        self.paragraph.push_str(line);
    }

    fn flush_paragraph(&mut self) {
        let paragraph = std::mem::take(&mut self.paragraph);
        self.push(BlockKind::Paragraph, &paragraph);
    }
}

/// Full Markdown for a note: the title as a level 1 heading, then the body.
pub fn note_to_markdown(note: &Note) -> String {
    format!("# {}\n\n{}", note.title, encode_markdown(note.body()))
}

/// Strips a leading `# ` title line, skipping blank lines before it.
/// Returns the title (if any) and the remaining body text.
pub fn split_title(text: &str) -> (Option<String>, &str) {
    let start = text.len() - text.trim_start().len();
    let rest = &text[start..];
    let Some(line_rest) = rest.strip_prefix("# ") else {
        return (None, text);
    };
    let (title, body) = match line_rest.split_once('\n') {
        Some((title, body)) => (title, body),
        None => (line_rest, ""),
    };
    let title = title.trim();
    if title.is_empty() {
        return (None, body);
    }
    (Some(title.to_string()), body)
}
