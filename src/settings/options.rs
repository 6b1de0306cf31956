//! Resolved pagination configuration.

use crate::paginate::PagingType;
use serde::{Deserialize, Serialize};

/// Content types paginated when nothing else is configured.
pub const DEFAULT_POST_TYPES: [&str; 1] = ["post"];

/// Page count used when none is configured.
pub const DEFAULT_NUM_PAGES: u32 = 2;

/// Immutable configuration for one filter invocation.
///
/// Fields are read through accessors; build a modified copy with the `with_*`
/// methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    post_types: Vec<String>,
    paging_type: PagingType,
    num_pages: u32,
    num_words: u32,
}

impl PaginationConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content types to paginate. Duplicates are dropped.
    pub fn with_post_types<I, S>(mut self, post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_types.clear();
        for post_type in post_types {
            let post_type = post_type.into();
            if !self.post_types.contains(&post_type) {
                self.post_types.push(post_type);
            }
        }
        self
    }

    /// Set the paging type.
    pub fn with_paging_type(mut self, paging_type: PagingType) -> Self {
        self.paging_type = paging_type;
        self
    }

    /// Set the target page count.
    pub fn with_num_pages(mut self, num_pages: u32) -> Self {
        self.num_pages = num_pages;
        self
    }

    /// Set the target words per page (0 = unset).
    pub fn with_num_words(mut self, num_words: u32) -> Self {
        self.num_words = num_words;
        self
    }

    /// Content types eligible for pagination.
    pub fn post_types(&self) -> &[String] {
        &self.post_types
    }

    /// Configured paging type.
    pub fn paging_type(&self) -> PagingType {
        self.paging_type
    }

    /// Default target page count.
    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    /// Default target words per page, 0 when unset.
    pub fn num_words(&self) -> u32 {
        self.num_words
    }

    /// Check whether a content type is eligible.
    pub fn allows(&self, content_type: &str) -> bool {
        self.post_types.iter().any(|t| t == content_type)
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            post_types: DEFAULT_POST_TYPES.iter().map(|t| t.to_string()).collect(),
            paging_type: PagingType::Pages,
            num_pages: DEFAULT_NUM_PAGES,
            num_words: 0,
        }
    }
}
