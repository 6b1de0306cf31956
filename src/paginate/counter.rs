//! Insertion arithmetic for the fixed-pages strategy.
//!
//! Units (paragraphs or blocks) are walked in order. A marker goes after the
//! unit at 0-based `index` when `index + 1` is the next multiple of the
//! insertion frequency, and never after the last unit.

/// After how many units a page break should go.
///
/// When more pages are requested than there are units, every unit gets its
/// own page.
///
/// # Example
/// ```
/// use autopaging::paginate::insertion_frequency;
///
/// assert_eq!(insertion_frequency(10, 2), 5);
/// assert_eq!(insertion_frequency(5, 2), 3);
/// assert_eq!(insertion_frequency(3, 8), 1);
/// ```
pub fn insertion_frequency(count: usize, target_pages: usize) -> usize {
    if target_pages == 0 {
        return 0;
    }
    if target_pages > count {
        return 1;
    }
    (count as f64 / target_pages as f64).round() as usize
}

/// Starting value of the insertion iterator.
///
/// With one more unit than pages and a frequency of one, starting at `1`
/// would put a break after every unit and leave the last one alone on an
/// extra page. Starting at `2` skips the first boundary instead.
pub fn initial_counter(count: usize, target_pages: usize) -> usize {
    let one_spare_unit = count.checked_sub(1) == Some(target_pages);
    if one_spare_unit && insertion_frequency(count, target_pages) == 1 {
        2
    } else {
        1
    }
}

/// Check whether a break belongs after the unit at `index`.
pub fn is_insertion_point(index: usize, iterator: usize, frequency: usize) -> bool {
    index + 1 == iterator * frequency
}

/// Check whether `index` is the final unit.
pub fn is_last_unit(index: usize, count: usize) -> bool {
    index + 1 == count
}

/// Running state for walking units under the fixed-pages strategy.
#[derive(Debug, Clone)]
pub struct InsertionPlan {
    count: usize,
    frequency: usize,
    iterator: usize,
}

impl InsertionPlan {
    /// Plan breaks for `count` units split into `target_pages` pages.
    pub fn new(count: usize, target_pages: usize) -> Self {
        Self {
            count,
            frequency: insertion_frequency(count, target_pages),
            iterator: initial_counter(count, target_pages),
        }
    }

    /// Insertion frequency in use.
    pub fn frequency(&self) -> usize {
        self.frequency
    }

    /// Decide whether a break follows the unit at `index`.
    ///
    /// Must be called with increasing indices; advances the iterator each
    /// time it answers `true`.
    pub fn breaks_after(&mut self, index: usize) -> bool {
        if is_last_unit(index, self.count) {
            return false;
        }
        if is_insertion_point(index, self.iterator, self.frequency) {
            self.iterator += 1;
            return true;
        }
        false
    }
}
