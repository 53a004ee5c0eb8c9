//! Parsing of the user-typed selection count.
//!
//! The input box accepts free text. Parsing is deliberately lenient in the way
//! browsers' `parseInt(text, 10)` is: leading whitespace and an optional sign
//! are accepted, then the longest run of decimal digits is read and anything
//! after it is ignored, so `"20 rows"` selects 20.

use crate::error::{AppError, AppResult};
use std::fmt;
use std::num::NonZeroUsize;

/// A strictly positive number of records to select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SelectionCount(NonZeroUsize);

impl SelectionCount {
    /// Returns `None` for zero.
    pub fn new(count: usize) -> Option<Self> {
        NonZeroUsize::new(count).map(Self)
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for SelectionCount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Parses the selection count typed by the user.
///
/// Values too large for `usize` saturate.
///
/// # Errors
///
/// Returns [`AppError::InvalidInput`] when the text has no leading digits or
/// the number is zero or negative.
pub fn parse_selection_count(input: &str) -> AppResult<SelectionCount> {
    let text = input.trim();

    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits: &str = {
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());
        &digits[..end]
    };

    if digits.is_empty() {
        return Err(AppError::invalid_input(
            "selection count is not a number",
            input,
        ));
    }

    let value = digits.bytes().fold(0usize, |acc, b| {
        acc.saturating_mul(10).saturating_add(usize::from(b - b'0'))
    });

    if negative {
        return Err(AppError::invalid_input(
            "selection count must be positive",
            input,
        ));
    }

    SelectionCount::new(value)
        .ok_or_else(|| AppError::invalid_input("selection count must be positive", input))
}
