//! Sales fact assembler.
//!
//! Grain: one row per order line item. Line items join to their order with an
//! inner join, so items whose order is missing are silently dropped (a
//! documented data-loss policy, not an error). Dimension foreign keys resolve
//! through business-key lookups and stay null on no match; the date key is
//! always present, falling back to the sentinel `19000101`.

use std::collections::BTreeMap;

use tracing::debug;

use dwh_ingest::RawTable;

use crate::data_utils::{normalize_business_key, parse_f64_or_zero, parse_i64_or_zero};
use crate::datetime::{SENTINEL_DATE_KEY, date_key, parse_date_flexible};
use crate::dim_client::ClientDimRow;
use crate::dim_employee::EmployeeDimRow;

/// One row of the sales fact.
#[derive(Debug, Clone, PartialEq)]
pub struct FactSalesRow {
    pub fact_id: i64,
    pub bk_order_id: String,
    pub sk_client: Option<i64>,
    pub sk_employee: Option<i64>,
    pub sk_date: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub discount: f64,
    pub total_amount: f64,
    pub delivery_status: String,
}

/// Assembles the sales fact from normalized order line items and orders plus
/// the resolved client and employee dimensions.
pub fn build_fact_sales(
    details: &RawTable,
    orders: &RawTable,
    dim_client: &[ClientDimRow],
    dim_employee: &[EmployeeDimRow],
) -> Vec<FactSalesRow> {
    if details.is_empty() || orders.is_empty() {
        return Vec::new();
    }

    // Orders indexed by business key for the inner join.
    let mut order_by_key: BTreeMap<String, usize> = BTreeMap::new();
    for (idx, _) in orders.rows.iter().enumerate() {
        let key = normalize_business_key(orders.value(idx, "orderid"));
        order_by_key.entry(key).or_insert(idx);
    }

    let client_by_key: BTreeMap<&str, i64> = dim_client
        .iter()
        .map(|c| (c.bk_customer_id.as_str(), c.sk_client))
        .collect();
    let employee_by_key: BTreeMap<&str, i64> = dim_employee
        .iter()
        .map(|e| (e.bk_employee_id.as_str(), e.sk_employee))
        .collect();

    // When both sides carry a unit price the line-item side wins.
    let price_from_details = details.column_index("unitprice").is_some();
    let has_ship_date = orders.column_index("shippeddate").is_some();

    let mut fact = Vec::new();
    let mut dropped = 0usize;
    for (idx, _) in details.rows.iter().enumerate() {
        let order_key = normalize_business_key(details.value(idx, "orderid"));
        let Some(&order_idx) = order_by_key.get(&order_key) else {
            dropped += 1;
            continue;
        };

        let quantity = parse_i64_or_zero(details.value(idx, "quantity"));
        let discount = parse_f64_or_zero(details.value(idx, "discount"));
        let unit_price = if price_from_details {
            parse_f64_or_zero(details.value(idx, "unitprice"))
        } else {
            parse_f64_or_zero(orders.value(order_idx, "unitprice"))
        };
        let total_amount = unit_price * quantity as f64 * (1.0 - discount);

        let delivery_status = if has_ship_date {
            if orders.value(order_idx, "shippeddate").trim().is_empty() {
                "Not Delivered".to_string()
            } else {
                "Delivered".to_string()
            }
        } else {
            "Unknown".to_string()
        };

        let sk_client = client_by_key
            .get(normalize_business_key(orders.value(order_idx, "customerid")).as_str())
            .copied();
        let sk_employee = employee_by_key
            .get(normalize_business_key(orders.value(order_idx, "employeeid")).as_str())
            .copied();
        let sk_date = parse_date_flexible(orders.value(order_idx, "orderdate"))
            .map_or(SENTINEL_DATE_KEY, date_key);

        fact.push(FactSalesRow {
            fact_id: fact.len() as i64 + 1,
            bk_order_id: order_key,
            sk_client,
            sk_employee,
            sk_date,
            quantity,
            unit_price,
            discount,
            total_amount,
            delivery_status,
        });
    }

    if dropped > 0 {
        debug!(dropped, "line items dropped by inner join to orders");
    }
    fact
}
