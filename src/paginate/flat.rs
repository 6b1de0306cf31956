//! Pagination of flat, paragraph-delimited markup.

use super::counter::InsertionPlan;
use super::strategy::Strategy;
use crate::detect::NEXTPAGE_MARKER;
use regex::Regex;
use std::sync::OnceLock;

/// Canonical paragraph delimiter after normalization.
pub const PARAGRAPH_DELIMITER: &str = "\r\n\r\n";

/// Result of paginating a flat body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatOutcome {
    /// Normalized body with markers applied
    pub body: String,

    /// Number of paragraph units found
    pub paragraphs: usize,

    /// Number of markers inserted
    pub markers: usize,
}

fn paragraph_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<p>(.+?)</p>").expect("paragraph pattern is valid"))
}

fn line_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br(\s*/)?>").expect("line break pattern is valid"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Rewrite paragraph and line-break markup into plain delimiters.
///
/// Content saved without an editor pass may still carry `<p>` wrappers and
/// `<br>` tags; both become `\r\n` sequences so paragraphs can be counted.
pub fn normalize(body: &str) -> String {
    let body = paragraph_regex().replace_all(body, "${1}\r\n\r\n");
    line_break_regex().replace_all(&body, "\r\n").into_owned()
}

/// Count words in a paragraph, ignoring markup.
///
/// Tags are removed outright, so a word broken up by inline markup still
/// counts once.
pub fn word_count(paragraph: &str) -> usize {
    tag_regex().replace_all(paragraph, "").split_whitespace().count()
}

/// Apply page breaks to a flat body.
///
/// Returns `None` when the body holds a single paragraph, in which case it
/// must be left exactly as it was. Otherwise the returned body is the
/// normalized text, whether or not any marker landed.
pub fn paginate_flat(body: &str, strategy: Strategy) -> Option<FlatOutcome> {
    let normalized = normalize(body);
    if !normalized.contains(PARAGRAPH_DELIMITER) {
        return None;
    }

    let mut paragraphs: Vec<String> = normalized
        .split(PARAGRAPH_DELIMITER)
        .map(str::to_string)
        .collect();

    // Trailing delimiters left by `</p>` must not count as paragraphs, or
    // the last real paragraph would get a marker and an empty page after it.
    let units = paragraphs
        .iter()
        .rposition(|p| !p.is_empty())
        .map_or(0, |last| last + 1);
    let content = &mut paragraphs[..units];

    let markers = match strategy {
        Strategy::FixedPages { pages } => break_by_pages(content, pages),
        Strategy::ApproximateWords { words } => break_by_words(content, words),
    };

    log::debug!(
        "Flat body: {} paragraphs, {} markers ({:?})",
        units,
        markers,
        strategy
    );

    Some(FlatOutcome {
        paragraphs: units,
        body: paragraphs.join(PARAGRAPH_DELIMITER),
        markers,
    })
}

fn break_by_pages(paragraphs: &mut [String], pages: usize) -> usize {
    let mut plan = InsertionPlan::new(paragraphs.len(), pages);
    let mut markers = 0;

    for (index, paragraph) in paragraphs.iter_mut().enumerate() {
        if plan.breaks_after(index) {
            paragraph.push_str(NEXTPAGE_MARKER);
            markers += 1;
        }
    }

    markers
}

fn break_by_words(paragraphs: &mut [String], words: usize) -> usize {
    if words == 0 {
        return 0;
    }

    let last = paragraphs.len().saturating_sub(1);
    let mut running = 0;
    let mut markers = 0;

    for (index, paragraph) in paragraphs.iter_mut().enumerate() {
        running += word_count(paragraph);
        if running >= words && index < last {
            paragraph.push_str(NEXTPAGE_MARKER);
            markers += 1;
            running = 0;
        }
    }

    markers
}
