//! Total-count input validation.
//!
//! Raw text from the user never reaches
//! [`InfiniteScrollList::set_items_total`](scrollwin_core::InfiniteScrollList::set_items_total)
//! unless it parses as a non-negative integer here.

use crate::error::{DemoError, Result};

pub const INVALID_TOTAL_MESSAGE: &str = "Invalid input value. It must be a non-negative integer.";

/// Parse a total item count.
///
/// Accepts ASCII decimal digits with optional surrounding whitespace. Signs,
/// fractions, exponents and empty input are rejected.
pub fn parse_items_total(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();
    let invalid = || DemoError::InvalidTotal {
        input: raw.to_string(),
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse::<usize>().map_err(|_| invalid())
}
