use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use data_normalization::parse_amount_opt;
use utils::{field_str, month_key, parse_flexible_date};

/// One month of accumulated value, keyed `MM/YYYY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBucket {
    pub month: String,
    pub total: f64,
}

/// Inflow/outflow rollup across a record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CashFlowTotals {
    pub total_inflow: f64,
    pub total_outflow: f64,
    pub net_flow: f64,
}

/// Reduces dated records into month buckets.
///
/// The bucket key comes from each record's own calendar date; amounts go
/// through the amount parser, so a malformed value counts as zero rather
/// than poisoning its bucket. A record whose date is missing or unreadable
/// cannot be attributed to any month: it is skipped and warn-logged.
/// Buckets appear in first-seen order of the input sequence.
pub fn aggregate_by_month(
    records: &[Value],
    date_field: &str,
    amount_field: &str,
) -> Vec<MonthBucket> {
    let mut buckets: Vec<MonthBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let date = match field_str(record, date_field).map(parse_flexible_date) {
            Some(Ok(date)) => date,
            _ => {
                logger::warn(
                    "skipping record with unreadable date",
                    Some(&json!({ "field": date_field, "value": record.get(date_field) })),
                );
                continue;
            }
        };

        let amount = parse_amount_opt(record.get(amount_field));
        let key = month_key(date);

        match index.get(&key) {
            Some(&pos) => buckets[pos].total += amount,
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(MonthBucket { month: key, total: amount });
            }
        }
    }

    buckets
}

/// Chronological variant of [`aggregate_by_month`]: same buckets, ordered by
/// calendar month ascending.
pub fn sorted_by_month(records: &[Value], date_field: &str, amount_field: &str) -> Vec<MonthBucket> {
    let mut buckets = aggregate_by_month(records, date_field, amount_field);
    buckets.sort_by_key(|bucket| month_sort_key(&bucket.month));
    buckets
}

/// Splits a record set into inflow and outflow totals.
///
/// Non-negative amounts count as inflow; negative amounts accumulate as
/// positive outflow. `net_flow` is inflow minus outflow.
pub fn cash_flow_totals(records: &[Value], amount_field: &str) -> CashFlowTotals {
    let mut totals = CashFlowTotals::default();

    for record in records {
        let amount = parse_amount_opt(record.get(amount_field));
        if amount >= 0.0 {
            totals.total_inflow += amount;
        } else {
            totals.total_outflow += -amount;
        }
    }

    totals.net_flow = totals.total_inflow - totals.total_outflow;
    totals
}

fn month_sort_key(key: &str) -> (i32, u32) {
    let (month, year) = key.split_once('/').unwrap_or(("0", "0"));
    (year.parse().unwrap_or(0), month.parse().unwrap_or(0))
}
