//! Rich-tree codec.
//!
//! The rich editing surface works on a nested document in the ProseMirror/TipTap JSON
//! shape:
//!
//! ```json
//! {"type": "doc", "content": [
//!   {"type": "heading", "attrs": {"level": 2}, "content": [{"type": "text", "text": "Plan"}]},
//!   {"type": "bulletList", "content": [
//!     {"type": "listItem", "content": [
//!       {"type": "paragraph", "content": [{"type": "text", "text": "eggs"}]}]}]}
//! ]}
//! ```
//!
//! Nodes are kept untyped ([`TreeNode::kind`] is a plain string) so that documents
//! carrying node kinds this codec does not know still deserialize. Decoding folds any
//! such node into a paragraph holding its text.
//!
//! Unlike the Markdown codec, encoding keeps empty blocks: an empty block becomes a node
//! with no text child, so the editor still shows a line to type into.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::model::{Block, BlockKind};

pub const DOC: &str = "doc";
pub const HEADING: &str = "heading";
pub const PARAGRAPH: &str = "paragraph";
pub const BULLET_LIST: &str = "bulletList";
pub const ORDERED_LIST: &str = "orderedList";
pub const LIST_ITEM: &str = "listItem";
pub const BLOCKQUOTE: &str = "blockquote";
pub const TEXT: &str = "text";

fn doc_kind() -> String {
    DOC.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeDocument {
    #[serde(rename = "type", default = "doc_kind")]
    pub kind: String,
    #[serde(default)]
    pub content: Vec<TreeNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<TreeNode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marks: Option<Value>,
}

impl TreeNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: TEXT.to_string(),
            attrs: None,
            content: None,
            text: Some(text.into()),
            marks: None,
        }
    }

    pub fn container(kind: &str, children: Vec<TreeNode>) -> Self {
        Self {
            kind: kind.to_string(),
            attrs: None,
            content: Some(children),
            text: None,
            marks: None,
        }
    }

    /// A node holding `content` as its only text child, or no child when empty.
    fn inline(kind: &str, content: &str) -> Self {
        let children = if content.is_empty() {
            Vec::new()
        } else {
            vec![TreeNode::text(content)]
        };
        Self::container(kind, children)
    }

    pub fn heading(level: u8, content: &str) -> Self {
        let mut node = Self::inline(HEADING, content);
        node.attrs = Some(serde_json::json!({ "level": level }));
        node
    }

    /// Heading level from `attrs.level`. Missing or zero means 1.
    pub fn level(&self) -> u8 {
        let level = self
            .attrs
            .as_ref()
            .and_then(|attrs| attrs.get("level"))
            .and_then(Value::as_u64)
            .unwrap_or(1);
        u8::try_from(level).unwrap_or(u8::MAX)
    }

    pub fn children(&self) -> &[TreeNode] {
        self.content.as_deref().unwrap_or(&[])
    }
}

impl Default for TreeDocument {
    fn default() -> Self {
        Self {
            kind: doc_kind(),
            content: Vec::new(),
        }
    }
}

impl TreeDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Visible text of the document, top-level nodes separated by a blank line.
    pub fn plain_text(&self) -> String {
        self.content
            .iter()
            .map(extract_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Depth-first concatenation of every text leaf under `node`.
pub fn extract_text(node: &TreeNode) -> String {
    if node.kind == TEXT {
        return node.text.clone().unwrap_or_default();
    }
    node.children().iter().map(extract_text).collect()
}

pub fn encode_tree(blocks: &[Block]) -> TreeDocument {
    let mut content: Vec<TreeNode> = blocks.iter().map(encode_block).collect();
    if content.is_empty() {
        content.push(TreeNode::inline(PARAGRAPH, ""));
    }
    TreeDocument {
        kind: doc_kind(),
        content,
    }
}

fn encode_block(block: &Block) -> TreeNode {
    let list_item = |content: &str| {
        TreeNode::container(LIST_ITEM, vec![TreeNode::inline(PARAGRAPH, content)])
    };

    match block.kind {
        BlockKind::Heading1 | BlockKind::Heading2 | BlockKind::Heading3 => {
            TreeNode::heading(block.kind.heading_level().unwrap_or(1), &block.content)
        }
        BlockKind::BulletList => {
            TreeNode::container(BULLET_LIST, vec![list_item(&block.content)])
        }
        BlockKind::NumberedList => {
            TreeNode::container(ORDERED_LIST, vec![list_item(&block.content)])
        }
        BlockKind::Blockquote => TreeNode::container(
            BLOCKQUOTE,
            vec![TreeNode::inline(PARAGRAPH, &block.content)],
        ),
        BlockKind::Paragraph => TreeNode::inline(PARAGRAPH, &block.content),
    }
}

/// Decodes a tree into `[title, ...body]`. Never fails: unknown nodes become
/// paragraphs, and a tree that yields no body blocks (empty, or lists without
/// items) gets one empty paragraph after the title.
pub fn decode_tree(tree: &TreeDocument, title: Block) -> Vec<Block> {
    let mut blocks = vec![title];

    for node in &tree.content {
        match node.kind.as_str() {
            HEADING => blocks.push(Block::with_content(
                BlockKind::heading(node.level()),
                extract_text(node),
            )),
            BULLET_LIST | ORDERED_LIST => {
                let kind = if node.kind == BULLET_LIST {
                    BlockKind::BulletList
                } else {
                    BlockKind::NumberedList
                };
                blocks.extend(
                    node.children()
                        .iter()
                        .map(|item| Block::with_content(kind, extract_text(item))),
                );
            }
            BLOCKQUOTE => blocks.push(Block::with_content(
                BlockKind::Blockquote,
                extract_text(node),
            )),
            _ => blocks.push(Block::with_content(
                BlockKind::Paragraph,
                extract_text(node),
            )),
        }
    }

    if blocks.len() == 1 {
        blocks.push(Block::new(BlockKind::Paragraph));
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(blocks: &[Block]) -> Vec<(BlockKind, String)> {
        blocks.iter().map(|b| (b.kind, b.content.clone())).collect()
    }

    fn title() -> Block {
        Block::with_content(BlockKind::Heading1, "Title")
    }

    #[test]
    fn round_trip_is_lossless_including_empty_blocks() {
        let blocks = vec![
            Block::with_content(BlockKind::Heading1, "One"),
            Block::with_content(BlockKind::Heading2, ""),
            Block::with_content(BlockKind::Heading3, "Three"),
            Block::with_content(BlockKind::Paragraph, ""),
            Block::with_content(BlockKind::BulletList, "bullet"),
            Block::with_content(BlockKind::NumberedList, ""),
            Block::with_content(BlockKind::Blockquote, "quoted"),
            Block::with_content(BlockKind::Paragraph, "  spaced  "),
        ];
        let title = title();
        let decoded = decode_tree(&encode_tree(&blocks), title.clone());

        assert_eq!(decoded[0], title);
        assert_eq!(pairs(&decoded[1..]), pairs(&blocks));
    }

    #[test]
    fn empty_block_has_no_text_child() {
        let tree = encode_tree(&[Block::new(BlockKind::Paragraph)]);
        assert_eq!(tree.content[0].kind, PARAGRAPH);
        assert!(tree.content[0].children().is_empty());
    }

    #[test]
    fn empty_block_list_encodes_one_empty_paragraph() {
        let tree = encode_tree(&[]);
        assert_eq!(tree.content.len(), 1);
        assert_eq!(tree.content[0].kind, PARAGRAPH);
        assert_eq!(tree.content[0].content, Some(Vec::new()));
    }

    #[test]
    fn three_bullets_stay_three_blocks() {
        let blocks: Vec<Block> = ["a", "b", "c"]
            .iter()
            .map(|c| Block::with_content(BlockKind::BulletList, *c))
            .collect();
        let decoded = decode_tree(&encode_tree(&blocks), title());
        assert_eq!(decoded.len(), 4);
        assert!(decoded[1..].iter().all(|b| b.kind == BlockKind::BulletList));
    }

    #[test]
    fn multi_item_list_expands_per_item() {
        let json = r#"{"type":"doc","content":[
            {"type":"orderedList","content":[
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"first"}]}]},
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"second"}]}]},
                {"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"third"}]}]}
            ]}
        ]}"#;
        let tree = TreeDocument::from_json(json).unwrap();
        let decoded = decode_tree(&tree, title());
        assert_eq!(
            pairs(&decoded[1..]),
            vec![
                (BlockKind::NumberedList, "first".to_string()),
                (BlockKind::NumberedList, "second".to_string()),
                (BlockKind::NumberedList, "third".to_string()),
            ]
        );
    }

    #[test]
    fn empty_tree_decodes_to_title_and_empty_paragraph() {
        let title = title();
        for tree in [TreeDocument::default(), TreeDocument::from_json("{}").unwrap()] {
            let decoded = decode_tree(&tree, title.clone());
            assert_eq!(decoded.len(), 2);
            assert_eq!(decoded[0], title);
            assert_eq!(decoded[1].kind, BlockKind::Paragraph);
            assert_eq!(decoded[1].content, "");
        }
    }

    #[test]
    fn lists_without_items_still_leave_a_body_block() {
        for json in [
            r#"{"type":"doc","content":[{"type":"bulletList","content":[]}]}"#,
            r#"{"type":"doc","content":[{"type":"orderedList"},{"type":"bulletList","content":[]}]}"#,
        ] {
            let decoded = decode_tree(&TreeDocument::from_json(json).unwrap(), title());
            assert_eq!(
                pairs(&decoded[1..]),
                vec![(BlockKind::Paragraph, String::new())]
            );
        }
    }

    #[test]
    fn unknown_nodes_become_paragraphs() {
        let json = r#"{"type":"doc","content":[
            {"type":"codeBlock","attrs":{"language":"rust"},"content":[{"type":"text","text":"fn main() {}"}]},
            {"type":"horizontalRule"}
        ]}"#;
        let decoded = decode_tree(&TreeDocument::from_json(json).unwrap(), title());
        assert_eq!(
            pairs(&decoded[1..]),
            vec![
                (BlockKind::Paragraph, "fn main() {}".to_string()),
                (BlockKind::Paragraph, String::new()),
            ]
        );
    }

    #[test]
    fn heading_levels_map_and_clamp() {
        let json = r#"{"type":"doc","content":[
            {"type":"heading","content":[{"type":"text","text":"none"}]},
            {"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"two"}]},
            {"type":"heading","attrs":{"level":5},"content":[{"type":"text","text":"five"}]},
            {"type":"heading","attrs":{"level":0},"content":[{"type":"text","text":"zero"}]}
        ]}"#;
        let decoded = decode_tree(&TreeDocument::from_json(json).unwrap(), title());
        let kinds: Vec<BlockKind> = decoded[1..].iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Heading1,
                BlockKind::Heading2,
                BlockKind::Heading3,
                BlockKind::Heading1,
            ]
        );
    }

    #[test]
    fn extract_text_concatenates_depth_first() {
        let node = TreeNode::container(
            BLOCKQUOTE,
            vec![
                TreeNode::container(
                    PARAGRAPH,
                    vec![TreeNode::text("Hello, "), TreeNode::text("world")],
                ),
                TreeNode::container(PARAGRAPH, vec![TreeNode::text("!")]),
                TreeNode::container("image", Vec::new()),
            ],
        );
        assert_eq!(extract_text(&node), "Hello, world!");
    }

    #[test]
    fn marks_are_tolerated_and_text_kept() {
        let json = r#"{"type":"doc","content":[
            {"type":"paragraph","content":[
                {"type":"text","text":"plain "},
                {"type":"text","marks":[{"type":"bold"}],"text":"bold"}
            ]}
        ]}"#;
        let decoded = decode_tree(&TreeDocument::from_json(json).unwrap(), title());
        assert_eq!(decoded[1].content, "plain bold");
    }

    #[test]
    fn json_uses_tiptap_shape() {
        let tree = encode_tree(&[Block::with_content(BlockKind::Heading2, "Plan")]);
        let value: Value = serde_json::from_str(&tree.to_json().unwrap()).unwrap();
        assert_eq!(value["type"], "doc");
        assert_eq!(value["content"][0]["type"], "heading");
        assert_eq!(value["content"][0]["attrs"]["level"], 2);
        assert_eq!(value["content"][0]["content"][0]["text"], "Plan");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(TreeDocument::from_json("{not json").is_err());
    }

    #[test]
    fn plain_text_joins_top_level_nodes() {
        let tree = encode_tree(&[
            Block::with_content(BlockKind::Paragraph, "one"),
            Block::with_content(BlockKind::BulletList, "two"),
        ]);
        assert_eq!(tree.plain_text(), "one\n\ntwo");
    }
}
