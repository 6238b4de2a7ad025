use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;

use data_normalization::format_currency;
use report_engine::{
    aging_summary, cash_flow_totals, load_settings, sales_summary, sorted_by_month, AgingSummary,
    CashFlowTotals, MonthBucket, SalesSummary,
};
use utils::{field_str, parse_flexible_date, records_array};

// Field names as the backend emits them.
const SALES_DATE_FIELD: &str = "data_emissao";
const SALES_AMOUNT_FIELD: &str = "total";
const RECEIVABLE_DUE_FIELD: &str = "data_vencimento";
const RECEIVABLE_AMOUNT_FIELD: &str = "valor";
const CASH_FLOW_DATE_FIELD: &str = "data";
const CASH_FLOW_AMOUNT_FIELD: &str = "valor";

#[derive(Debug, Serialize)]
struct ReportMetadata {
    generated_at: String,
    reference_date: String,
    locale: String,
    currency: String,
}

#[derive(Debug, Serialize)]
struct ReportDisplay {
    total_sales: String,
    average_ticket: String,
    net_cash_flow: String,
    total_receivables: String,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    metadata: ReportMetadata,
    monthly_sales: Vec<MonthBucket>,
    monthly_cash_flow: Vec<MonthBucket>,
    cash_flow: CashFlowTotals,
    sales: SalesSummary,
    receivables: AgingSummary,
    display: ReportDisplay,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
fn round4(v: f64) -> f64 {
    (v * 10000.0).round() / 10000.0
}

impl ReportOutput {
    fn finalize(mut self) -> Self {
        // Round nested money values to cents for the emitted JSON
        for bucket in self
            .monthly_sales
            .iter_mut()
            .chain(self.monthly_cash_flow.iter_mut())
        {
            bucket.total = round2(bucket.total);
        }
        self.cash_flow.total_inflow = round2(self.cash_flow.total_inflow);
        self.cash_flow.total_outflow = round2(self.cash_flow.total_outflow);
        self.cash_flow.net_flow = round2(self.cash_flow.net_flow);
        self.sales.total_value = round2(self.sales.total_value);
        self.sales.average_ticket = round2(self.sales.average_ticket);
        self.receivables.total_receivables = round2(self.receivables.total_receivables);
        self.receivables.overdue_total = round2(self.receivables.overdue_total);
        self.receivables.overdue_percentage = round4(self.receivables.overdue_percentage);
        self
    }
}

fn main() -> Result<()> {
    let records = arg_value("--records").unwrap_or_else(|| "records.json".to_string());
    let settings_path = arg_value("--settings").unwrap_or_else(|| "settings.json".to_string());
    let out = arg_value("--out");

    let settings = load_settings(&settings_path);

    let raw = fs::read_to_string(&records)
        .with_context(|| format!("Reading records file: {records}"))?;
    let document: Value =
        serde_json::from_str(&raw).with_context(|| format!("Parsing records JSON in {records}"))?;

    let reference_date = match field_str(&document, "reference_date") {
        Some(s) => parse_flexible_date(s)
            .with_context(|| format!("Invalid reference_date in {records}"))?,
        None => Local::now().date_naive(),
    };

    let sales_records = records_array(&document, "sales");
    let receivable_records = records_array(&document, "receivables");
    let cash_flow_records = records_array(&document, "cash_flow");

    let sales = sales_summary(sales_records, SALES_AMOUNT_FIELD);
    let receivables = aging_summary(
        receivable_records,
        RECEIVABLE_DUE_FIELD,
        RECEIVABLE_AMOUNT_FIELD,
        reference_date,
        &settings.aging,
    );
    let cash_flow = cash_flow_totals(cash_flow_records, CASH_FLOW_AMOUNT_FIELD);

    let display = ReportDisplay {
        total_sales: format_currency(sales.total_value, settings.locale, &settings.currency)?,
        average_ticket: format_currency(sales.average_ticket, settings.locale, &settings.currency)?,
        net_cash_flow: format_currency(cash_flow.net_flow, settings.locale, &settings.currency)?,
        total_receivables: format_currency(
            receivables.total_receivables,
            settings.locale,
            &settings.currency,
        )?,
    };

    let output = ReportOutput {
        metadata: ReportMetadata {
            generated_at: Local::now().to_rfc3339(),
            reference_date: reference_date.format("%Y-%m-%d").to_string(),
            locale: settings.locale.to_string(),
            currency: settings.currency.clone(),
        },
        monthly_sales: sorted_by_month(sales_records, SALES_DATE_FIELD, SALES_AMOUNT_FIELD),
        monthly_cash_flow: sorted_by_month(
            cash_flow_records,
            CASH_FLOW_DATE_FIELD,
            CASH_FLOW_AMOUNT_FIELD,
        ),
        cash_flow,
        sales,
        receivables,
        display,
    }
    .finalize();

    let json = serde_json::to_string_pretty(&output)?;
    match out {
        Some(path) => {
            let out_path = PathBuf::from(&path);
            if let Some(parent) = out_path.parent() {
                if !parent.exists() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(&out_path, &json).with_context(|| format!("Writing report to {path}"))?;
            println!("✓ Report written to {path}");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn arg_value(flag: &str) -> Option<String> {
    env::args()
        .position(|a| a == flag)
        .and_then(|i| env::args().nth(i + 1))
}
