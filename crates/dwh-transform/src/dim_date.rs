//! Date dimension builder.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use dwh_ingest::RawTable;

use crate::datetime::{date_key, month_name, parse_date_flexible, quarter};

/// One row of the date dimension. The surrogate key is the date itself as
/// `YYYYMMDD`, so key and date determine each other without a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateDimRow {
    pub sk_date: i64,
    pub full_date: NaiveDate,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub quarter: u32,
}

/// Builds the date dimension from normalized orders: one row per distinct
/// calendar date appearing in order activity, ascending. Unparseable dates
/// are dropped; an empty or dateless input yields an empty dimension.
pub fn build_dim_date(orders: &RawTable) -> Vec<DateDimRow> {
    let Some(date_idx) = orders.column_index("orderdate") else {
        debug!("orders have no orderdate column, date dimension is empty");
        return Vec::new();
    };
    if orders.is_empty() {
        return Vec::new();
    }

    let mut dates = BTreeSet::new();
    for row in &orders.rows {
        let raw = row.get(date_idx).map_or("", String::as_str);
        if let Some(date) = parse_date_flexible(raw) {
            dates.insert(date);
        }
    }

    dates
        .into_iter()
        .map(|date| DateDimRow {
            sk_date: date_key(date),
            full_date: date,
            year: date.year(),
            month: date.month(),
            month_name: month_name(date),
            quarter: quarter(date),
        })
        .collect()
}
