//! Content model shared by the paginators and the filter.
//!
//! A [`ContentItem`] carries its body as markup. Whether that markup is flat
//! paragraph text or a sequence of [`Block`]s is decided at filter time by the
//! block-structure probe, so both representations travel as the same type.

mod block;
mod item;

pub use block::Block;
pub use item::ContentItem;
