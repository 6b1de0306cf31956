//! Sanitizers applied to option values as they are saved.

use crate::paginate::PagingType;

/// Upper bound offered for the page count.
pub const DEFAULT_MAX_PAGES: u32 = 10;

/// Lower bound for a configured words-per-page value.
pub const DEFAULT_MIN_WORDS: u32 = 10;

/// Content type that is never offered for pagination.
const EXCLUDED_POST_TYPE: &str = "attachment";

/// Keep only selected types that are registered and public.
///
/// `registered` is the host's list of public content types. Selection order
/// is preserved.
pub fn sanitize_post_types<S, R>(checked: &[S], registered: &[R]) -> Vec<String>
where
    S: AsRef<str>,
    R: AsRef<str>,
{
    checked
        .iter()
        .map(AsRef::as_ref)
        .filter(|t| *t != EXCLUDED_POST_TYPE)
        .filter(|t| registered.iter().any(|r| r.as_ref() == *t))
        .map(str::to_string)
        .collect()
}

/// Validate a paging type, falling back to the default.
pub fn sanitize_paging_type(value: &str) -> PagingType {
    value.parse().unwrap_or_else(|_| {
        log::warn!("Unknown paging type {:?}, using {}", value, PagingType::default());
        PagingType::default()
    })
}

/// Clamp a page count to `[2, max_pages]`.
pub fn sanitize_num_pages(value: i64, max_pages: u32) -> u32 {
    let max_pages = i64::from(max_pages.max(2));
    value.clamp(2, max_pages) as u32
}

/// Sanitize a words-per-page value.
///
/// Zero stays zero (unset); anything else is raised to at least `min_words`.
pub fn sanitize_num_words(value: i64, min_words: u32) -> u32 {
    let value = u32::try_from(value.unsigned_abs()).unwrap_or(u32::MAX);
    if value == 0 {
        return 0;
    }
    value.max(min_words)
}
