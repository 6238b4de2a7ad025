pub mod dates;
pub mod records;

// Re-export commonly used items
pub use crate::dates::{month_key, parse_flexible_date};
pub use crate::records::{field_str, records_array, sort_records_by_date};
