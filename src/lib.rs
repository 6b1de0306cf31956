//! # autopaging
//!
//! Automatic page-break insertion for long-form content.
//!
//! Given a batch of content items and a configuration, this library inserts
//! `<!--nextpage-->` markers so each eligible item renders across several
//! pages. Flat paragraph text gets inline markers; block markup gets a
//! `core/nextpage` block between blocks.
//!
//! ## Quick Start
//!
//! ```
//! use autopaging::{ContentFilter, ContentItem, PaginationConfig};
//!
//! let config = PaginationConfig::new().with_num_pages(2);
//! let filter = ContentFilter::new(config);
//!
//! let items = filter.filter(vec![
//!     ContentItem::post(1, "1\r\n\r\n2\r\n\r\n3"),
//!     ContentItem::new(2, "page", "A page.\r\n\r\nLeft alone."),
//! ]);
//!
//! assert_eq!(items[0].body, "1\r\n\r\n2<!--nextpage-->\r\n\r\n3");
//! assert_eq!(items[1].body, "A page.\r\n\r\nLeft alone.");
//! ```
//!
//! ## Features
//!
//! - **Two strategies**: a fixed number of pages, or approximate words per page
//! - **Two representations**: flat paragraph markup and comment-delimited blocks
//! - **Idempotent**: content that already has a page break is never touched
//! - **Injected collaborators**: opt-out flags, admin detection, per-item
//!   overrides and the block codec are all supplied by the host
//! - **Settings**: stored-option snapshots with the host's sanitizing rules

pub mod blocks;
pub mod detect;
pub mod error;
pub mod filter;
pub mod model;
pub mod paginate;
pub mod settings;

// Re-export commonly used types
pub use blocks::{parse_blocks, serialize_blocks, BlockCodec, BlockGrammar};
pub use detect::{contains_break_marker, has_blocks, NEXTPAGE_MARKER};
pub use error::{Error, Result};
pub use filter::{
    AdminProbe, ContentFilter, FilterReport, ItemOutcome, OptOutLookup, OptOutSet, PageOverrides,
};
pub use model::{Block, ContentItem};
pub use paginate::{paginate_blocks, paginate_flat, PagingType, Strategy};
pub use settings::{PaginationConfig, StoredOptions};

/// Paginate a batch with default collaborators.
///
/// Shorthand for [`ContentFilter::new`] followed by [`ContentFilter::filter`]:
/// no item is opted out, no administrative context, built-in block grammar.
pub fn paginate(items: Vec<ContentItem>, config: &PaginationConfig) -> Vec<ContentItem> {
    ContentFilter::new(config.clone()).filter(items)
}

/// Paginate a single body of either representation.
///
/// Applies the same rules as [`ContentFilter`] once an item is eligible:
/// existing page breaks (inline or as blocks) leave the body alone, flat
/// bodies come back normalized even when no marker lands, and block bodies
/// are re-serialized. Returns `None` when the resulting body would be
/// identical to the input.
///
/// # Example
///
/// ```
/// use autopaging::{paginate_body, Strategy};
///
/// let body = paginate_body("a\r\n\r\nb", Strategy::FixedPages { pages: 2 });
/// assert_eq!(body.as_deref(), Some("a<!--nextpage-->\r\n\r\nb"));
/// ```
pub fn paginate_body(body: &str, strategy: Strategy) -> Option<String> {
    if contains_break_marker(body) {
        return None;
    }

    let paged = if has_blocks(body) {
        let blocks = match parse_blocks(body) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("Unparseable block content: {}", e);
                return None;
            }
        };
        if blocks.iter().any(Block::contains_page_break) {
            return None;
        }
        serialize_blocks(&paginate_blocks(blocks, strategy)?.blocks)
    } else {
        paginate_flat(body, strategy)?.body
    };

    (paged != body).then_some(paged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_default_config() {
        let items = paginate(
            vec![ContentItem::post(1, "1\r\n\r\n2\r\n\r\n3")],
            &PaginationConfig::default(),
        );
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].body, "1\r\n\r\n2<!--nextpage-->\r\n\r\n3");
    }

    #[test]
    fn test_paginate_body_flat() {
        assert_eq!(
            paginate_body("1\r\n\r\n2\r\n\r\n3", Strategy::FixedPages { pages: 2 }),
            Some("1\r\n\r\n2<!--nextpage-->\r\n\r\n3".to_string())
        );
    }

    #[test]
    fn test_paginate_body_blocks() {
        let body = "<!-- wp:paragraph --><p>a</p><!-- /wp:paragraph -->\
                    <!-- wp:paragraph --><p>b</p><!-- /wp:paragraph -->";
        let paged = paginate_body(body, Strategy::FixedPages { pages: 2 }).unwrap();
        assert_eq!(
            paged,
            "<!-- wp:paragraph --><p>a</p><!-- /wp:paragraph -->\
             <!-- wp:nextpage -->\n<!--nextpage-->\n<!-- /wp:nextpage -->\
             <!-- wp:paragraph --><p>b</p><!-- /wp:paragraph -->"
        );
    }

    #[test]
    fn test_paginate_body_noop() {
        assert_eq!(
            paginate_body("a<!--nextpage-->\r\n\r\nb", Strategy::FixedPages { pages: 2 }),
            None
        );
        assert_eq!(paginate_body("single", Strategy::FixedPages { pages: 2 }), None);
        assert_eq!(
            paginate_body(
                "<!-- wp:paragraph --><p>a</p><!-- /wp:paragraph -->",
                Strategy::ApproximateWords { words: 1 }
            ),
            None
        );
    }

    #[test]
    fn test_paginate_body_matches_filter() {
        let body = "<p>A</p>\r\n\r\nB";
        let strategy = Strategy::ApproximateWords { words: 0 };
        let config = PaginationConfig::new()
            .with_paging_type(PagingType::Words)
            .with_num_pages(2);
        let filtered = paginate(vec![ContentItem::post(1, body)], &config);

        assert_eq!(
            paginate_body(body, strategy).as_deref(),
            Some("A\r\n\r\n\r\n\r\nB")
        );
        assert_eq!(filtered[0].body, "A\r\n\r\n\r\n\r\nB");
    }

    #[test]
    fn test_paginate_body_parsed_page_break() {
        let body = "<!-- wp:paragraph --><p>a</p><!-- /wp:paragraph -->\
                    <!--  wp:nextpage /-->\
                    <!-- wp:paragraph --><p>b</p><!-- /wp:paragraph -->";
        assert!(!contains_break_marker(body));
        assert_eq!(paginate_body(body, Strategy::FixedPages { pages: 2 }), None);
    }

    #[test]
    fn test_error_reexport() {
        let result: Result<Vec<Block>> = parse_blocks("<!-- wp:x {oops} -->");
        assert!(matches!(result, Err(Error::BlockParse { .. })));
    }
}
