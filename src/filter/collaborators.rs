//! Host-provided collaborators the filter consults per item.
//!
//! Closures implement [`AdminProbe`] and [`OptOutLookup`] directly:
//!
//! ```
//! use autopaging::filter::{AdminProbe, OptOutLookup};
//! use autopaging::ContentItem;
//!
//! let admin = || false;
//! let opted_out = |item: &ContentItem| item.id == 7;
//!
//! assert!(!admin.is_admin());
//! assert!(opted_out.is_opted_out(&ContentItem::post(7, "")));
//! ```

use crate::model::ContentItem;
use crate::settings::DISABLE_AUTOPAGING_META_KEY;
use std::collections::HashSet;

/// Tells whether the current request is an administrative/editing context.
pub trait AdminProbe: Send + Sync {
    /// `true` when content is being edited rather than rendered.
    fn is_admin(&self) -> bool;
}

impl<F> AdminProbe for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_admin(&self) -> bool {
        self()
    }
}

/// Per-item opt-out flag lookup.
pub trait OptOutLookup: Send + Sync {
    /// `true` when the item must never be paginated automatically.
    fn is_opted_out(&self, item: &ContentItem) -> bool;
}

impl<F> OptOutLookup for F
where
    F: Fn(&ContentItem) -> bool + Send + Sync,
{
    fn is_opted_out(&self, item: &ContentItem) -> bool {
        self(item)
    }
}

/// Opt-out flags held in memory, keyed by item id.
#[derive(Debug, Clone, Default)]
pub struct OptOutSet {
    ids: HashSet<u64>,
}

impl OptOutSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag an item id as opted out.
    pub fn insert(&mut self, id: u64) -> bool {
        self.ids.insert(id)
    }

    /// Remove the flag from an item id.
    pub fn remove(&mut self, id: u64) -> bool {
        self.ids.remove(&id)
    }

    /// Build the set from `(id, key, value)` metadata rows.
    ///
    /// An item is opted out when it carries [`DISABLE_AUTOPAGING_META_KEY`]
    /// with a truthy value; empty strings and `"0"` are falsy.
    pub fn from_meta<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (u64, &'a str, &'a str)>,
    {
        rows.into_iter()
            .filter(|(_, key, value)| {
                *key == DISABLE_AUTOPAGING_META_KEY && !value.is_empty() && *value != "0"
            })
            .map(|(id, _, _)| id)
            .collect()
    }
}

impl FromIterator<u64> for OptOutSet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl OptOutLookup for OptOutSet {
    fn is_opted_out(&self, item: &ContentItem) -> bool {
        self.ids.contains(&item.id)
    }
}

/// Per-item adjustment of the configured targets.
///
/// Both methods receive the configured default and return the value to use
/// for this item. The defaults leave the value alone.
pub trait PageOverrides: Send + Sync {
    /// Target page count for `item`.
    fn num_pages(&self, item: &ContentItem, default: u32) -> u32 {
        let _ = item;
        default
    }

    /// Target words per page for `item` (0 = unset).
    fn num_words(&self, item: &ContentItem, default: u32) -> u32 {
        let _ = item;
        default
    }
}

/// Never in an administrative context.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrontEnd;

impl AdminProbe for FrontEnd {
    fn is_admin(&self) -> bool {
        false
    }
}

/// No item is opted out.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOptOuts;

impl OptOutLookup for NoOptOuts {
    fn is_opted_out(&self, _item: &ContentItem) -> bool {
        false
    }
}

/// Configured targets apply to every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl PageOverrides for NoOverrides {}

#[cfg(test)]
mod tests {
    use super::*;

    struct LongReads;

    impl PageOverrides for LongReads {
        fn num_pages(&self, item: &ContentItem, default: u32) -> u32 {
            if item.is_type("longread") {
                default * 2
            } else {
                default
            }
        }
    }

    #[test]
    fn test_defaults() {
        let item = ContentItem::post(1, "");
        assert!(!FrontEnd.is_admin());
        assert!(!NoOptOuts.is_opted_out(&item));
        assert_eq!(NoOverrides.num_pages(&item, 3), 3);
        assert_eq!(NoOverrides.num_words(&item, 0), 0);
    }

    #[test]
    fn test_opt_out_set() {
        let mut flags: OptOutSet = [4, 9].into_iter().collect();
        assert!(flags.is_opted_out(&ContentItem::post(9, "")));
        assert!(!flags.is_opted_out(&ContentItem::post(5, "")));

        flags.insert(5);
        flags.remove(9);
        assert!(flags.is_opted_out(&ContentItem::post(5, "")));
        assert!(!flags.is_opted_out(&ContentItem::post(9, "")));
    }

    #[test]
    fn test_opt_out_set_from_meta() {
        let flags = OptOutSet::from_meta([
            (1, DISABLE_AUTOPAGING_META_KEY, "1"),
            (2, DISABLE_AUTOPAGING_META_KEY, ""),
            (3, DISABLE_AUTOPAGING_META_KEY, "0"),
            (4, "_edit_lock", "1"),
        ]);
        assert!(flags.is_opted_out(&ContentItem::post(1, "")));
        for id in 2..=4 {
            assert!(!flags.is_opted_out(&ContentItem::post(id, "")), "item {}", id);
        }
    }

    #[test]
    fn test_partial_override() {
        let overrides = LongReads;
        assert_eq!(
            overrides.num_pages(&ContentItem::new(1, "longread", ""), 3),
            6
        );
        assert_eq!(overrides.num_pages(&ContentItem::post(1, ""), 3), 3);
        assert_eq!(overrides.num_words(&ContentItem::post(1, ""), 200), 200);
    }
}
