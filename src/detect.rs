//! Content representation and break-marker detection.

/// Inline page-break marker understood by the host renderer.
pub const NEXTPAGE_MARKER: &str = "<!--nextpage-->";

/// Opening delimiter of the structured page-break block.
pub const NEXTPAGE_BLOCK_OPENER: &str = "<!-- wp:nextpage";

/// Prefix every block delimiter starts with.
const BLOCK_DELIMITER_PREFIX: &str = "<!-- wp:";

/// Check whether a body already carries a page break in either form.
///
/// The inline marker is matched case-insensitively, so `<!--NextPage-->`
/// typed by hand counts as well.
///
/// # Example
/// ```
/// use autopaging::detect::contains_break_marker;
///
/// assert!(contains_break_marker("a<!--NEXTPAGE-->b"));
/// assert!(!contains_break_marker("a\r\n\r\nb"));
/// ```
pub fn contains_break_marker(body: &str) -> bool {
    contains_ignore_ascii_case(body, NEXTPAGE_MARKER)
        || contains_ignore_ascii_case(body, NEXTPAGE_BLOCK_OPENER)
}

/// Check whether a body uses structured block syntax.
pub fn has_blocks(body: &str) -> bool {
    body.contains(BLOCK_DELIMITER_PREFIX)
}

fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    let needle = needle.as_bytes();
    if needle.len() > haystack.len() {
        return false;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .any(|window| window.eq_ignore_ascii_case(needle))
}
