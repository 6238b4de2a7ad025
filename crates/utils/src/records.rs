use anyhow::{anyhow, Result};
use serde_json::Value;

use crate::dates::parse_flexible_date;

/// Returns a record's field as a string slice, if present and textual.
pub fn field_str<'a>(record: &'a Value, field: &str) -> Option<&'a str> {
    record.get(field).and_then(Value::as_str)
}

/// Returns the array under `key`, or an empty slice when the key is absent
/// or holds something else. Report inputs routinely omit whole sections.
pub fn records_array<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    document
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// Sorts the records under `array_key` in-place by `date_field` ascending.
///
/// Sorting is stable and understands every date format of
/// [`parse_flexible_date`]. Records with a missing or unreadable date are
/// placed at the end, preserving their relative order.
pub fn sort_records_by_date(document: &mut Value, array_key: &str, date_field: &str) -> Result<()> {
    let arr = document
        .get_mut(array_key)
        .and_then(|v| v.as_array_mut())
        .ok_or_else(|| anyhow!("document missing '{}' array", array_key))?;

    arr.sort_by_key(|record| {
        let date = record
            .get(date_field)
            .and_then(Value::as_str)
            .and_then(|s| parse_flexible_date(s).ok());
        (date.is_none(), date)
    });

    Ok(())
}
