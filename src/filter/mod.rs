//! Batch orchestration: decide per item whether and how to paginate.
//!
//! [`ContentFilter`] is the entry point the host's render pipeline calls once
//! per content retrieval. It owns an immutable [`PaginationConfig`] and the
//! collaborators it consults, all injected at construction.
//!
//! # Example
//!
//! ```
//! use autopaging::{ContentFilter, ContentItem, PaginationConfig};
//!
//! let filter = ContentFilter::new(PaginationConfig::default());
//! let items = filter.filter(vec![ContentItem::post(1, "1\r\n\r\n2\r\n\r\n3")]);
//! assert_eq!(items[0].body, "1\r\n\r\n2<!--nextpage-->\r\n\r\n3");
//! ```

mod collaborators;
mod report;

pub use collaborators::{
    AdminProbe, FrontEnd, NoOptOuts, NoOverrides, OptOutLookup, OptOutSet, PageOverrides,
};
pub use report::{FilterReport, ItemOutcome};

use crate::blocks::{BlockCodec, BlockGrammar};
use crate::detect;
use crate::model::{Block, ContentItem};
use crate::paginate::{paginate_blocks, paginate_flat, Strategy};
use crate::settings::PaginationConfig;
use std::fmt;

/// Inserts page breaks into eligible content items.
pub struct ContentFilter {
    config: PaginationConfig,
    admin: Box<dyn AdminProbe>,
    opt_outs: Box<dyn OptOutLookup>,
    overrides: Box<dyn PageOverrides>,
    codec: Box<dyn BlockCodec>,
}

impl ContentFilter {
    /// Create a filter with default collaborators: never admin, no opt-outs,
    /// no per-item overrides, built-in block grammar.
    pub fn new(config: PaginationConfig) -> Self {
        Self {
            config,
            admin: Box::new(FrontEnd),
            opt_outs: Box::new(NoOptOuts),
            overrides: Box::new(NoOverrides),
            codec: Box::new(BlockGrammar::new()),
        }
    }

    /// Set the administrative-context probe.
    pub fn with_admin_probe(mut self, probe: impl AdminProbe + 'static) -> Self {
        self.admin = Box::new(probe);
        self
    }

    /// Set the opt-out flag lookup.
    pub fn with_opt_outs(mut self, lookup: impl OptOutLookup + 'static) -> Self {
        self.opt_outs = Box::new(lookup);
        self
    }

    /// Set per-item target overrides.
    pub fn with_overrides(mut self, overrides: impl PageOverrides + 'static) -> Self {
        self.overrides = Box::new(overrides);
        self
    }

    /// Set the block codec.
    pub fn with_codec(mut self, codec: impl BlockCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    /// Configuration in use.
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Paginate a batch and hand it back.
    ///
    /// Order and size of the batch never change. In an administrative context
    /// the batch is returned as received.
    pub fn filter(&self, mut items: Vec<ContentItem>) -> Vec<ContentItem> {
        self.filter_in_place(&mut items);
        items
    }

    /// Paginate a batch in place and report what happened to each item.
    pub fn filter_in_place(&self, items: &mut [ContentItem]) -> FilterReport {
        if self.admin.is_admin() {
            log::debug!("Administrative context, leaving {} items alone", items.len());
            return FilterReport::bypassed();
        }

        let outcomes = items.iter_mut().map(|item| self.filter_item(item)).collect();
        FilterReport {
            bypassed: false,
            outcomes,
        }
    }

    /// Paginate a single item if it is eligible.
    ///
    /// Does not consult the administrative probe.
    pub fn filter_item(&self, item: &mut ContentItem) -> ItemOutcome {
        if !self.config.allows(&item.content_type) {
            return ItemOutcome::UnsupportedType;
        }
        if detect::contains_break_marker(&item.body) {
            log::debug!("Item {} is already paginated", item.id);
            return ItemOutcome::AlreadyPaginated;
        }
        if self.opt_outs.is_opted_out(item) {
            log::debug!("Item {} opted out of autopaging", item.id);
            return ItemOutcome::OptedOut;
        }

        let num_pages = self.overrides.num_pages(item, self.config.num_pages());
        let num_words = self.overrides.num_words(item, self.config.num_words());
        if num_pages < 2 && num_words == 0 {
            return ItemOutcome::BelowThreshold;
        }

        let strategy = Strategy::select(self.config.paging_type(), num_pages, num_words);

        if self.codec.has_blocks(&item.body) {
            self.paginate_structured(item, strategy)
        } else {
            match paginate_flat(&item.body, strategy) {
                Some(outcome) => {
                    item.body = outcome.body;
                    ItemOutcome::from_markers(outcome.markers)
                }
                None => ItemOutcome::NoBreakPoints,
            }
        }
    }

    fn paginate_structured(&self, item: &mut ContentItem, strategy: Strategy) -> ItemOutcome {
        let blocks = match self.codec.parse(&item.body) {
            Ok(blocks) => blocks,
            Err(e) => {
                log::warn!("Leaving item {} unpaginated: {}", item.id, e);
                return ItemOutcome::Malformed;
            }
        };

        if blocks.iter().any(Block::contains_page_break) {
            return ItemOutcome::AlreadyPaginated;
        }

        match paginate_blocks(blocks, strategy) {
            Some(outcome) => {
                item.body = self.codec.serialize(&outcome.blocks);
                ItemOutcome::from_markers(outcome.markers)
            }
            None => ItemOutcome::NoBreakPoints,
        }
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl fmt::Debug for ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentFilter")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate::PagingType;

    const CLASSIC: &str = "1\r\n\r\n2\r\n\r\n3";

    #[test]
    fn test_classic_post_two_pages() {
        let filter = ContentFilter::default();
        let mut item = ContentItem::post(1, CLASSIC);
        assert_eq!(
            filter.filter_item(&mut item),
            ItemOutcome::Paginated { markers: 1 }
        );
        assert_eq!(item.body, "1\r\n\r\n2<!--nextpage-->\r\n\r\n3");
    }

    #[test]
    fn test_unsupported_type() {
        let filter = ContentFilter::default();
        let body = "I am a page.\r\n\r\nI should not be paginated.";
        let mut item = ContentItem::new(1, "page", body);
        assert_eq!(filter.filter_item(&mut item), ItemOutcome::UnsupportedType);
        assert_eq!(item.body, body);
    }

    #[test]
    fn test_already_paginated() {
        let filter = ContentFilter::default();
        let body = "1\r\n\r\n<!--nextpage-->\r\n\r\n2\r\n\r\n3";
        let mut item = ContentItem::post(1, body);
        assert_eq!(filter.filter_item(&mut item), ItemOutcome::AlreadyPaginated);
        assert_eq!(item.body, body);
    }

    #[test]
    fn test_below_threshold() {
        let filter = ContentFilter::new(PaginationConfig::new().with_num_pages(1));
        let mut item = ContentItem::post(1, CLASSIC);
        assert_eq!(filter.filter_item(&mut item), ItemOutcome::BelowThreshold);
        assert_eq!(item.body, CLASSIC);
    }

    #[test]
    fn test_word_target_lifts_threshold() {
        let config = PaginationConfig::new()
            .with_num_pages(0)
            .with_num_words(1)
            .with_paging_type(PagingType::Words);
        let filter = ContentFilter::new(config);
        let mut item = ContentItem::post(1, CLASSIC);
        assert_eq!(
            filter.filter_item(&mut item),
            ItemOutcome::Paginated { markers: 2 }
        );
        assert_eq!(
            item.body,
            "1<!--nextpage-->\r\n\r\n2<!--nextpage-->\r\n\r\n3"
        );
    }

    #[test]
    fn test_single_paragraph() {
        let filter = ContentFilter::default();
        let mut item = ContentItem::post(1, "Short and sweet.");
        assert_eq!(filter.filter_item(&mut item), ItemOutcome::NoBreakPoints);
        assert_eq!(item.body, "Short and sweet.");
    }

    #[test]
    fn test_admin_bypass() {
        let filter = ContentFilter::default().with_admin_probe(|| true);
        let mut items = vec![ContentItem::post(1, CLASSIC)];
        let report = filter.filter_in_place(&mut items);
        assert!(report.bypassed);
        assert!(report.outcomes.is_empty());
        assert_eq!(items[0].body, CLASSIC);
    }

    #[test]
    fn test_debug_shows_config() {
        let debug = format!("{:?}", ContentFilter::default());
        assert!(debug.starts_with("ContentFilter"));
        assert!(debug.contains("num_pages: 2"));
    }
}
