//! Structured content blocks.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::OnceLock;

/// Fully qualified name of the page-break block.
pub(crate) const NEXTPAGE_BLOCK_NAME: &str = "core/nextpage";

/// Inner HTML of the page-break block.
const NEXTPAGE_BLOCK_HTML: &str = "\n<!--nextpage-->\n";

/// A parsed content block.
///
/// Field names serialize to the same JSON shape the host's block parser
/// produces, so parsed blocks can be exchanged with it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Namespaced block name (`core/paragraph`), `None` for freeform HTML
    pub block_name: Option<String>,

    /// Block attributes, in source order
    #[serde(default)]
    pub attrs: Map<String, Value>,

    /// Nested blocks
    #[serde(default)]
    pub inner_blocks: Vec<Block>,

    /// HTML of this block without its inner blocks
    #[serde(rename = "innerHTML", default)]
    pub inner_html: String,

    /// HTML chunks interleaved with inner blocks; `None` marks where the next
    /// inner block goes
    #[serde(default)]
    pub inner_content: Vec<Option<String>>,
}

impl Block {
    /// Create an empty named block.
    pub fn new(name: impl Into<String>, attrs: Map<String, Value>) -> Self {
        Self {
            block_name: Some(name.into()),
            attrs,
            inner_blocks: Vec::new(),
            inner_html: String::new(),
            inner_content: Vec::new(),
        }
    }

    /// Create a freeform block holding raw HTML.
    pub fn freeform(html: impl Into<String>) -> Self {
        let html = html.into();
        Self {
            block_name: None,
            attrs: Map::new(),
            inner_blocks: Vec::new(),
            inner_html: html.clone(),
            inner_content: vec![Some(html)],
        }
    }

    /// The page-break block inserted between pages.
    ///
    /// Built once and cloned on every call.
    pub fn page_break() -> Self {
        static PAGE_BREAK: OnceLock<Block> = OnceLock::new();
        PAGE_BREAK
            .get_or_init(|| {
                let mut block = Block::new(NEXTPAGE_BLOCK_NAME, Map::new());
                block.push_html(NEXTPAGE_BLOCK_HTML);
                block
            })
            .clone()
    }

    /// Block name, if any.
    pub fn name(&self) -> Option<&str> {
        self.block_name.as_deref()
    }

    /// Check if this is freeform HTML rather than a delimited block.
    pub fn is_freeform(&self) -> bool {
        self.block_name.is_none()
    }

    /// Check if this block is a page break.
    pub fn is_page_break(&self) -> bool {
        self.name() == Some(NEXTPAGE_BLOCK_NAME)
    }

    /// Append an HTML chunk to the block body.
    pub fn push_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
        self.inner_content.push(Some(html.to_string()));
    }

    /// Append an inner block at the current position.
    pub fn push_inner_block(&mut self, block: Block) {
        self.inner_blocks.push(block);
        self.inner_content.push(None);
    }

    /// Check whether this block or any descendant is a page break.
    pub fn contains_page_break(&self) -> bool {
        self.is_page_break() || self.inner_blocks.iter().any(Block::contains_page_break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_break_block() {
        let block = Block::page_break();
        assert!(block.is_page_break());
        assert!(!block.is_freeform());
        assert_eq!(block.inner_html, "\n<!--nextpage-->\n");
        assert_eq!(
            block.inner_content,
            vec![Some("\n<!--nextpage-->\n".to_string())]
        );
        assert_eq!(block, Block::page_break());
    }

    #[test]
    fn test_freeform_block() {
        let block = Block::freeform("\n\n");
        assert!(block.is_freeform());
        assert_eq!(block.name(), None);
        assert_eq!(block.inner_content, vec![Some("\n\n".to_string())]);
    }

    #[test]
    fn test_push_inner_block_marks_position() {
        let mut group = Block::new("core/group", Map::new());
        group.push_html("<div>");
        group.push_inner_block(Block::page_break());
        group.push_html("</div>");

        assert_eq!(group.inner_html, "<div></div>");
        assert_eq!(group.inner_content.len(), 3);
        assert_eq!(group.inner_content[1], None);
        assert!(group.contains_page_break());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(Block::freeform("x")).unwrap();
        assert!(json.get("blockName").is_some());
        assert!(json.get("innerHTML").is_some());
        assert!(json.get("innerBlocks").is_some());
        assert!(json.get("innerContent").is_some());
    }
}
