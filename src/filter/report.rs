//! Per-batch record of what the filter did to each item.

use serde::{Deserialize, Serialize};

/// What happened to one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ItemOutcome {
    /// Break markers were inserted
    Paginated {
        /// Number of markers inserted
        markers: usize,
    },
    /// Processed, but no position qualified for a break
    NoBreakPoints,
    /// Content type is not enabled
    UnsupportedType,
    /// Body already contains a break marker
    AlreadyPaginated,
    /// Item carries the opt-out flag
    OptedOut,
    /// Fewer than two pages requested and no word target
    BelowThreshold,
    /// Block content could not be parsed
    Malformed,
}

impl ItemOutcome {
    /// Check if markers were inserted.
    pub fn is_paginated(&self) -> bool {
        matches!(self, ItemOutcome::Paginated { .. })
    }

    /// Number of markers inserted.
    pub fn markers(&self) -> usize {
        match self {
            ItemOutcome::Paginated { markers } => *markers,
            _ => 0,
        }
    }

    pub(crate) fn from_markers(markers: usize) -> Self {
        if markers == 0 {
            ItemOutcome::NoBreakPoints
        } else {
            ItemOutcome::Paginated { markers }
        }
    }
}

/// Outcome of filtering a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterReport {
    /// The batch was returned untouched because of an administrative context
    pub bypassed: bool,

    /// One entry per item, in batch order (empty when bypassed)
    pub outcomes: Vec<ItemOutcome>,
}

impl FilterReport {
    /// Report for a batch that was not looked at.
    pub fn bypassed() -> Self {
        Self {
            bypassed: true,
            outcomes: Vec::new(),
        }
    }

    /// Number of items that received markers.
    pub fn paginated_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_paginated()).count()
    }

    /// Total markers inserted across the batch.
    pub fn total_markers(&self) -> usize {
        self.outcomes.iter().map(ItemOutcome::markers).sum()
    }
}
