//! Block markup support.
//!
//! Structured content is stored as HTML interleaved with comment delimiters:
//!
//! ```text
//! <!-- wp:paragraph {"align":"center"} -->
//! <p>Hello</p>
//! <!-- /wp:paragraph -->
//! ```
//!
//! The filter talks to this module through the [`BlockCodec`] trait, so a host
//! that already has its own parser can plug it in. [`BlockGrammar`] is the
//! built-in implementation.

mod parser;
mod serializer;

pub use parser::parse_blocks;
pub use serializer::{serialize_attributes, serialize_block, serialize_blocks};

use crate::detect;
use crate::error::Result;
use crate::model::Block;

/// Probe, parse and serialize structured block content.
pub trait BlockCodec: Send + Sync {
    /// Check whether a body uses block syntax.
    fn has_blocks(&self, body: &str) -> bool;

    /// Parse a body into top-level blocks.
    fn parse(&self, body: &str) -> Result<Vec<Block>>;

    /// Serialize blocks back into markup.
    fn serialize(&self, blocks: &[Block]) -> String;
}

/// Built-in codec for comment-delimited block markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockGrammar;

impl BlockGrammar {
    /// Create the built-in codec.
    pub fn new() -> Self {
        Self
    }
}

impl BlockCodec for BlockGrammar {
    fn has_blocks(&self, body: &str) -> bool {
        detect::has_blocks(body)
    }

    fn parse(&self, body: &str) -> Result<Vec<Block>> {
        parse_blocks(body)
    }

    fn serialize(&self, blocks: &[Block]) -> String {
        serialize_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grammar_round_trip() {
        let body = "<!-- wp:paragraph -->\n<p>One</p>\n<!-- /wp:paragraph -->\n\n\
                    <!-- wp:image {\"id\":3} /-->";
        let codec = BlockGrammar::new();

        assert!(codec.has_blocks(body));
        let blocks = codec.parse(body).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(codec.serialize(&blocks), body);
    }

    #[test]
    fn test_grammar_plain_body() {
        let codec = BlockGrammar::new();
        assert!(!codec.has_blocks("<p>Plain</p>"));
        let blocks = codec.parse("<p>Plain</p>").unwrap();
        assert_eq!(blocks, vec![Block::freeform("<p>Plain</p>")]);
    }
}
