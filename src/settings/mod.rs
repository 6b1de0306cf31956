//! Settings: the per-request configuration snapshot and the stored options it
//! is resolved from.
//!
//! The host owns storage. It hands over raw option values as a
//! [`StoredOptions`] snapshot (usually JSON), which resolves into an immutable
//! [`PaginationConfig`] used for one filter invocation.

mod options;
mod sanitize;
mod stored;

pub use options::{PaginationConfig, DEFAULT_NUM_PAGES, DEFAULT_POST_TYPES};
pub use sanitize::{
    sanitize_num_pages, sanitize_num_words, sanitize_paging_type, sanitize_post_types,
    DEFAULT_MAX_PAGES, DEFAULT_MIN_WORDS,
};
pub use stored::StoredOptions;

/// Option holding the supported content types.
pub const OPTION_POST_TYPES: &str = "autopaging_post_types";

/// Option holding the paging type.
pub const OPTION_PAGING_TYPE: &str = "autopaging_paging_type";

/// Option holding the number of pages to split into.
pub const OPTION_NUM_PAGES: &str = "autopaging_num_pages";

/// Option holding the approximate number of words per page.
pub const OPTION_NUM_WORDS: &str = "autopaging_num_words";

/// Every option the host stores for us; removed on uninstall.
pub const OPTION_NAMES: [&str; 4] = [
    OPTION_POST_TYPES,
    OPTION_PAGING_TYPE,
    OPTION_NUM_PAGES,
    OPTION_NUM_WORDS,
];

/// Per-item metadata key marking an item as opted out of automatic paging.
pub const DISABLE_AUTOPAGING_META_KEY: &str = "_disable_autopaging";
