//! # Report Commands
//!
//! Sales over a date range, admin only.

use chrono::NaiveDate;
use medipos_core::report::{DateRange, SalesReportView};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SalesState};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    #[serde(flatten)]
    pub view: SalesReportView,
    pub display: ReportDisplay,
}

/// Summary figures formatted in the store currency.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDisplay {
    pub total_sales: String,
    pub average_order_value: String,
}

/// Daily rows between `start` and `end` (both inclusive) and their totals.
///
/// ## Errors
/// - `VALIDATION_ERROR` if `start` is after `end`
pub fn sales_report(
    sales: &SalesState,
    config: &ConfigState,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ReportResponse, ApiError> {
    debug!(%start, %end, "sales_report command");

    let range = DateRange::new(start, end)?;
    let view = SalesReportView::build(&sales.reports, range);
    let display = ReportDisplay {
        total_sales: config.format_currency(view.summary.total_sales_cents),
        average_order_value: config.format_currency(view.summary.average_order_value_cents),
    };

    Ok(ReportResponse { view, display })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::seed;

    fn sales() -> SalesState {
        SalesState {
            reports: seed::sales_reports(),
            ..SalesState::default()
        }
    }

    fn may(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, day).unwrap()
    }

    #[test]
    fn test_full_week() {
        let report = sales_report(&sales(), &ConfigState::default(), may(1), may(7)).unwrap();

        assert_eq!(report.view.rows.len(), 7);
        assert_eq!(report.view.summary.total_orders, 230);
        assert_eq!(report.display.total_sales, "$8953.00");
        assert_eq!(report.display.average_order_value, "$38.93");
    }

    #[test]
    fn test_range_outside_data_is_empty() {
        let report = sales_report(&sales(), &ConfigState::default(), may(10), may(20)).unwrap();
        assert!(report.view.rows.is_empty());
        assert_eq!(report.display.average_order_value, "$0.00");
    }

    #[test]
    fn test_reversed_range() {
        let err = sales_report(&sales(), &ConfigState::default(), may(7), may(1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_json_shape() {
        let report = sales_report(&sales(), &ConfigState::default(), may(5), may(5)).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["range"]["start"], "2023-05-05");
        assert_eq!(json["rows"][0]["totalOrders"], 42);
        assert_eq!(json["summary"]["totalSalesCents"], 168_075);
    }
}
