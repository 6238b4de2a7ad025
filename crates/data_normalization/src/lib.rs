//! Locale-aware numeric normalization for the reporting layer: raw API
//! field values in, canonical finite amounts out, and the reverse direction
//! back into locale display strings.

pub mod amount;
pub mod format;

// Re-export commonly used items
pub use crate::amount::{parse_amount, parse_amount_opt, parse_amount_str, parse_count};
pub use crate::format::{format_currency, format_decimal, FormatError, Locale};
