//! himap-search
//!
//! Pure derivations over the school catalog: facet filtering and the
//! suggestion search behind the search box.

pub mod filter;
pub mod search;

pub use filter::{filter, FilterState};
pub use search::{SearchMatcher, DEFAULT_LIMIT};
