//! # Sales Reports
//!
//! Daily sales rows filtered by an inclusive date range and rolled up into
//! the figures shown above the report table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::SalesReport;
use crate::validation::ValidationResult;

/// Inclusive `[start, end]` range of days. Built through [`DateRange::new`]
/// only, so `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DateRange {
    #[ts(as = "String")]
    start: NaiveDate,
    #[ts(as = "String")]
    end: NaiveDate,
}

impl DateRange {
    /// Rejects ranges that end before they start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> ValidationResult<Self> {
        if start > end {
            return Err(ValidationError::InvalidFormat {
                field: "date range".to_string(),
                reason: format!("start {} is after end {}", start, end),
            });
        }
        Ok(DateRange { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Rows whose date falls inside `range`, in their original order.
pub fn filter_reports(reports: &[SalesReport], range: DateRange) -> Vec<SalesReport> {
    reports
        .iter()
        .filter(|r| range.contains(r.date))
        .cloned()
        .collect()
}

/// Totals over a set of daily rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportSummary {
    pub total_sales_cents: i64,
    pub total_orders: i64,
    /// Zero when there were no orders.
    pub average_order_value_cents: i64,
}

impl ReportSummary {
    pub fn from_reports(reports: &[SalesReport]) -> Self {
        let total_sales: Money = reports.iter().map(SalesReport::total_sales).sum();
        let total_orders = reports.iter().map(|r| r.total_orders).fold(0, i64::saturating_add);

        ReportSummary {
            total_sales_cents: total_sales.cents(),
            total_orders,
            average_order_value_cents: total_sales.divide_rounded(total_orders).cents(),
        }
    }
}

/// One row of the report table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportRow {
    #[serde(flatten)]
    pub report: SalesReport,
    pub average_order_value_cents: i64,
}

/// Filtered rows plus their summary, as rendered on the reports page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesReportView {
    pub range: DateRange,
    pub rows: Vec<ReportRow>,
    pub summary: ReportSummary,
}

impl SalesReportView {
    pub fn build(reports: &[SalesReport], range: DateRange) -> Self {
        let filtered = filter_reports(reports, range);
        let summary = ReportSummary::from_reports(&filtered);
        let rows = filtered
            .into_iter()
            .map(|report| ReportRow {
                average_order_value_cents: report.average_order_value().cents(),
                report,
            })
            .collect();

        SalesReportView {
            range,
            rows,
            summary,
        }
    }
}
