//! Paging strategy selection.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How content should be split, as chosen in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PagingType {
    /// Split into a fixed number of pages
    #[default]
    #[serde(rename = "pages", alias = "fixed-pages")]
    Pages,
    /// Split so each page holds roughly a number of words
    #[serde(rename = "words", alias = "approximate-words")]
    Words,
}

impl PagingType {
    /// Every allowed paging type.
    pub const ALL: [PagingType; 2] = [PagingType::Pages, PagingType::Words];

    /// Stored option value for this type.
    pub fn as_str(&self) -> &'static str {
        match self {
            PagingType::Pages => "pages",
            PagingType::Words => "words",
        }
    }
}

impl fmt::Display for PagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PagingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pages" | "fixed-pages" => Ok(PagingType::Pages),
            "words" | "approximate-words" => Ok(PagingType::Words),
            other => Err(Error::InvalidOption {
                name: "autopaging_paging_type",
                value: other.to_string(),
            }),
        }
    }
}

/// Strategy resolved for one content item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Split into `pages` pages
    FixedPages {
        /// Target page count
        pages: usize,
    },
    /// Break after the paragraph where the running word count reaches `words`
    ApproximateWords {
        /// Target words per page, 0 when unset
        words: usize,
    },
}

impl Strategy {
    /// Pick the algorithm for an item from its paging type and targets.
    pub fn select(paging_type: PagingType, num_pages: u32, num_words: u32) -> Self {
        match paging_type {
            PagingType::Pages => Strategy::FixedPages {
                pages: num_pages as usize,
            },
            PagingType::Words => Strategy::ApproximateWords {
                words: num_words as usize,
            },
        }
    }
}
