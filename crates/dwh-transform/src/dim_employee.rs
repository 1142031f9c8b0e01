//! Employee dimension builder with territory/region enrichment.
//!
//! Employees relate to territories many-to-many through a junction table, and
//! territories roll up to regions. The enrichment flattens both levels into
//! two comma-joined columns. Note the asymmetry, kept for compatibility with
//! the historical outputs: territories preserve encounter order, regions are
//! the sorted deduplicated set.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use dwh_ingest::RawTable;

use crate::data_utils::{clean_or_unknown, normalize_business_key};

/// One row of the employee dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDimRow {
    pub sk_employee: i64,
    pub bk_employee_id: String,
    pub employee_name: String,
    pub title: String,
    pub city: String,
    pub country: String,
    pub territories: String,
    pub sales_region: String,
}

/// Builds the employee dimension from normalized employees plus the
/// employee-territory junction, territories, and region tables.
pub fn build_dim_employee(
    employees: &RawTable,
    emp_terr: &RawTable,
    territories: &RawTable,
    region: &RawTable,
) -> Vec<EmployeeDimRow> {
    if employees.is_empty() {
        return Vec::new();
    }

    let has_name_parts = employees.has_columns(&["firstname", "lastname"]);
    let mut dim: Vec<EmployeeDimRow> = employees
        .rows
        .iter()
        .enumerate()
        .map(|(idx, _)| {
            let employee_name = if has_name_parts {
                format!(
                    "{} {}",
                    employees.value(idx, "firstname").trim(),
                    employees.value(idx, "lastname").trim()
                )
                .trim()
                .to_string()
            } else {
                "Unknown".to_string()
            };
            EmployeeDimRow {
                sk_employee: idx as i64 + 1,
                bk_employee_id: normalize_business_key(employees.value(idx, "employeeid")),
                employee_name,
                title: clean_or_unknown(employees.value(idx, "title")),
                city: clean_or_unknown(employees.value(idx, "city")),
                country: clean_or_unknown(employees.value(idx, "country")),
                territories: String::new(),
                sales_region: String::new(),
            }
        })
        .collect();

    if emp_terr.is_empty() || territories.is_empty() {
        debug!("junction or territory table empty, short-circuiting enrichment");
        for row in &mut dim {
            row.territories = "Unknown".to_string();
            row.sales_region = "Unknown".to_string();
        }
        return dim;
    }

    let (terr_agg, region_agg) = aggregate_territories(emp_terr, territories, region);
    for row in &mut dim {
        row.territories = terr_agg
            .get(&row.bk_employee_id)
            .cloned()
            .unwrap_or_else(|| "No Territory".to_string());
        row.sales_region = region_agg
            .get(&row.bk_employee_id)
            .cloned()
            .unwrap_or_else(|| "No Region".to_string());
    }
    dim
}

/// Left-joins junction→territory (→region when both sides carry a region
/// key), then aggregates per employee. Returns (territories, sales_region)
/// maps keyed by normalized employee business key.
fn aggregate_territories(
    emp_terr: &RawTable,
    territories: &RawTable,
    region: &RawTable,
) -> (BTreeMap<String, String>, BTreeMap<String, String>) {
    let mut terr_desc: BTreeMap<String, String> = BTreeMap::new();
    let mut terr_region: BTreeMap<String, String> = BTreeMap::new();
    for (idx, _) in territories.rows.iter().enumerate() {
        let key = normalize_business_key(territories.value(idx, "territoryid"));
        terr_desc.insert(
            key.clone(),
            territories.value(idx, "territorydescription").trim().to_string(),
        );
        terr_region.insert(key, territories.value(idx, "regionid").trim().to_string());
    }

    let region_joinable = !region.is_empty()
        && region.column_index("regionid").is_some()
        && territories.column_index("regionid").is_some();
    let mut region_desc: BTreeMap<String, String> = BTreeMap::new();
    if region_joinable {
        for (idx, _) in region.rows.iter().enumerate() {
            region_desc.insert(
                normalize_business_key(region.value(idx, "regionid")),
                region.value(idx, "regiondescription").trim().to_string(),
            );
        }
    }

    let mut terr_lists: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut region_sets: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (idx, _) in emp_terr.rows.iter().enumerate() {
        let employee = normalize_business_key(emp_terr.value(idx, "employeeid"));
        let territory = normalize_business_key(emp_terr.value(idx, "territoryid"));

        let description = terr_desc.get(&territory).cloned().unwrap_or_default();
        let list = terr_lists.entry(employee.clone()).or_default();
        if !description.is_empty() && !list.contains(&description) {
            list.push(description);
        }

        let region_value = if region_joinable {
            terr_region
                .get(&territory)
                .and_then(|rid| region_desc.get(&normalize_business_key(rid)))
                .cloned()
                .unwrap_or_default()
        } else {
            "Unknown".to_string()
        };
        let set = region_sets.entry(employee).or_default();
        if !region_value.is_empty() {
            set.insert(region_value);
        }
    }

    let terr_agg = terr_lists
        .into_iter()
        .map(|(employee, list)| (employee, list.join(", ")))
        .collect();
    let region_agg = region_sets
        .into_iter()
        .map(|(employee, set)| {
            let joined = set.into_iter().collect::<Vec<_>>().join(", ");
            (employee, joined)
        })
        .collect();
    (terr_agg, region_agg)
}
