use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use data_normalization::parse_amount_opt;
use utils::{field_str, parse_flexible_date};

use crate::percentage::percentage_of;
use crate::settings::AgingThresholds;

/// Receivables grouped by how far each due date sits from the reference day.
///
/// Bucket fields count titles; the value rollups cover every title with a
/// readable due date. `skipped` counts the titles left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgingSummary {
    pub due_today: usize,
    pub due_soon: usize,
    pub due_later: usize,
    pub overdue_recent: usize,
    pub overdue_mid: usize,
    pub overdue_late: usize,
    pub total_receivables: f64,
    pub overdue_total: f64,
    pub overdue_percentage: f64,
    pub skipped: usize,
}

/// Classifies each title by due-date distance from `reference_date`.
///
/// The reference date is an explicit parameter so a report regenerated over
/// the same data is identical regardless of when it runs.
pub fn aging_summary(
    records: &[Value],
    due_date_field: &str,
    amount_field: &str,
    reference_date: NaiveDate,
    thresholds: &AgingThresholds,
) -> AgingSummary {
    let mut summary = AgingSummary::default();

    for record in records {
        let due = match field_str(record, due_date_field).map(parse_flexible_date) {
            Some(Ok(date)) => date,
            _ => {
                summary.skipped += 1;
                logger::warn(
                    "skipping title with unreadable due date",
                    Some(&json!({
                        "field": due_date_field,
                        "value": record.get(due_date_field),
                    })),
                );
                continue;
            }
        };

        let amount = parse_amount_opt(record.get(amount_field));
        summary.total_receivables += amount;

        let days = (due - reference_date).num_days();
        if days == 0 {
            summary.due_today += 1;
        } else if days > 0 {
            if days <= thresholds.upcoming_days {
                summary.due_soon += 1;
            } else {
                summary.due_later += 1;
            }
        } else {
            summary.overdue_total += amount;
            let overdue_by = -days;
            if overdue_by <= thresholds.overdue_near_days {
                summary.overdue_recent += 1;
            } else if overdue_by <= thresholds.overdue_far_days {
                summary.overdue_mid += 1;
            } else {
                summary.overdue_late += 1;
            }
        }
    }

    summary.overdue_percentage = percentage_of(summary.overdue_total, summary.total_receivables);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn title(due: &str, value: &str) -> Value {
        json!({ "data_vencimento": due, "valor": value })
    }

    #[test]
    fn test_bucket_boundaries() {
        let records = vec![
            title("2025-06-15", "100,00"), // today
            title("2025-06-16", "100,00"), // +1: soon
            title("2025-07-15", "100,00"), // +30: soon
            title("2025-07-16", "100,00"), // +31: later
            title("2025-06-14", "100,00"), // -1: recent
            title("2025-05-16", "100,00"), // -30: recent
            title("2025-05-15", "100,00"), // -31: mid
            title("2025-04-16", "100,00"), // -60: mid
            title("2025-04-15", "100,00"), // -61: late
        ];

        let summary = aging_summary(
            &records,
            "data_vencimento",
            "valor",
            reference(),
            &AgingThresholds::default(),
        );

        assert_eq!(summary.due_today, 1);
        assert_eq!(summary.due_soon, 2);
        assert_eq!(summary.due_later, 1);
        assert_eq!(summary.overdue_recent, 2);
        assert_eq!(summary.overdue_mid, 2);
        assert_eq!(summary.overdue_late, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_value_rollups_and_overdue_percentage() {
        let records = vec![
            title("2025-07-01", "3.000,00"),
            title("2025-06-01", "1.000,00"),
        ];

        let summary = aging_summary(
            &records,
            "data_vencimento",
            "valor",
            reference(),
            &AgingThresholds::default(),
        );

        assert_eq!(summary.total_receivables, 4000.0);
        assert_eq!(summary.overdue_total, 1000.0);
        assert_eq!(summary.overdue_percentage, 25.0);
    }

    #[test]
    fn test_unreadable_due_dates_are_skipped() {
        let records = vec![
            title("2025-07-01", "100,00"),
            json!({ "data_vencimento": null, "valor": "900,00" }),
            json!({ "valor": "900,00" }),
        ];

        let summary = aging_summary(
            &records,
            "data_vencimento",
            "valor",
            reference(),
            &AgingThresholds::default(),
        );

        assert_eq!(summary.skipped, 2);
        assert_eq!(summary.total_receivables, 100.0);
    }

    #[test]
    fn test_empty_input_is_all_zero() {
        let summary = aging_summary(
            &[],
            "data_vencimento",
            "valor",
            reference(),
            &AgingThresholds::default(),
        );
        assert_eq!(summary, AgingSummary::default());
    }
}
