pub mod cash_flow;
pub mod percentage;
pub mod receivables;
pub mod sales;
pub mod settings;

// Re-export commonly used items
pub use crate::cash_flow::{
    aggregate_by_month, cash_flow_totals, sorted_by_month, CashFlowTotals, MonthBucket,
};
pub use crate::percentage::{percentage, percentage_of, variation_percentage};
pub use crate::receivables::{aging_summary, AgingSummary};
pub use crate::sales::{participation_shares, sales_summary, ParticipationShare, SalesSummary};
pub use crate::settings::{load_settings, AgingThresholds, ReportSettings};
