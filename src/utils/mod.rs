//! Utility functions for handling user input.
//!
//! - [`selection_count`] - Parsing of the free-text "rows to select" field

pub mod selection_count;

pub use selection_count::{SelectionCount, parse_selection_count};
