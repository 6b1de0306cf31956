//! Pagination of structured block content.

use super::counter::InsertionPlan;
use super::strategy::Strategy;
use crate::model::Block;

/// Result of paginating a block sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredOutcome {
    /// Blocks with page-break blocks interleaved
    pub blocks: Vec<Block>,

    /// Number of page-break blocks inserted
    pub markers: usize,
}

/// Insert page-break blocks into a top-level block sequence.
///
/// Only the fixed-pages strategy applies to blocks. Word-based splitting has
/// no block equivalent and returns `None`, meaning the content stays as is.
pub fn paginate_blocks(blocks: Vec<Block>, strategy: Strategy) -> Option<StructuredOutcome> {
    let Strategy::FixedPages { pages } = strategy else {
        log::debug!("Word-based paging does not apply to block content");
        return None;
    };

    let count = blocks.len();
    let mut plan = InsertionPlan::new(count, pages);
    let mut paged = Vec::with_capacity(count + count.saturating_sub(1));
    let mut markers = 0;

    for (index, block) in blocks.into_iter().enumerate() {
        paged.push(block);
        if plan.breaks_after(index) {
            paged.push(Block::page_break());
            markers += 1;
        }
    }

    log::debug!("Block body: {} blocks, {} markers", count, markers);

    Some(StructuredOutcome {
        blocks: paged,
        markers,
    })
}
