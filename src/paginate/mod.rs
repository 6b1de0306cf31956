//! Content segmentation: where page breaks go.
//!
//! Two representations are supported. Flat bodies are split into paragraph
//! units on `\r\n\r\n` and get the inline `<!--nextpage-->` marker appended
//! to the chosen units. Block bodies get a `core/nextpage` block inserted
//! after the chosen blocks. Both share the arithmetic in [`counter`].

pub mod counter;
mod flat;
mod strategy;
mod structured;

pub use counter::{
    initial_counter, insertion_frequency, is_insertion_point, is_last_unit, InsertionPlan,
};
pub use flat::{normalize, paginate_flat, word_count, FlatOutcome, PARAGRAPH_DELIMITER};
pub use strategy::{PagingType, Strategy};
pub use structured::{paginate_blocks, StructuredOutcome};
