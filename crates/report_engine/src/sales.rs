use serde::Serialize;
use serde_json::Value;

use data_normalization::parse_amount_opt;
use utils::field_str;

use crate::percentage::percentage_of;

/// Headline figures for a sales record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SalesSummary {
    pub count: usize,
    pub total_value: f64,
    pub average_ticket: f64,
}

/// One labeled share of a whole, in percent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParticipationShare {
    pub label: String,
    pub part: f64,
    pub share: f64,
}

/// Totals a sales record set. The average ticket of an empty set is zero.
pub fn sales_summary(records: &[Value], amount_field: &str) -> SalesSummary {
    let total_value: f64 = records
        .iter()
        .map(|record| parse_amount_opt(record.get(amount_field)))
        .sum();
    let count = records.len();
    let average_ticket = if count > 0 {
        total_value / count as f64
    } else {
        0.0
    };

    SalesSummary {
        count,
        total_value,
        average_ticket,
    }
}

/// Per-record participation: `part_field` over `whole_field`, in percent.
///
/// A record without a label keeps an empty label rather than being dropped;
/// the share itself follows the zero-denominator policy.
pub fn participation_shares(
    records: &[Value],
    label_field: &str,
    part_field: &str,
    whole_field: &str,
) -> Vec<ParticipationShare> {
    records
        .iter()
        .map(|record| {
            let part = parse_amount_opt(record.get(part_field));
            let whole = parse_amount_opt(record.get(whole_field));
            ParticipationShare {
                label: field_str(record, label_field).unwrap_or_default().to_string(),
                part,
                share: percentage_of(part, whole),
            }
        })
        .collect()
}
