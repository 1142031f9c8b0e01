//! Client dimension builder.

use dwh_ingest::RawTable;

use crate::data_utils::{clean_or_unknown, normalize_business_key};

/// One row of the client dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDimRow {
    pub sk_client: i64,
    pub bk_customer_id: String,
    pub company_name: String,
    pub city: String,
    pub country: String,
    pub region: String,
}

/// Builds the client dimension from normalized customers.
///
/// The business key is uppercased and trimmed; all fact-side joins use the
/// same normalization. Geographic columns missing from the source default to
/// "Unknown", as do blank values. Surrogate keys are sequential from 1 in
/// input row order (not content-stable across reruns unless upstream row
/// order is stable).
pub fn build_dim_client(customers: &RawTable) -> Vec<ClientDimRow> {
    customers
        .rows
        .iter()
        .enumerate()
        .map(|(idx, _)| ClientDimRow {
            sk_client: idx as i64 + 1,
            bk_customer_id: normalize_business_key(customers.value(idx, "customerid")),
            company_name: customers.value(idx, "companyname").trim().to_string(),
            city: clean_or_unknown(customers.value(idx, "city")),
            country: clean_or_unknown(customers.value(idx, "country")),
            region: clean_or_unknown(customers.value(idx, "region")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_defaults_and_assigns_sequential_keys() {
        let customers = RawTable {
            headers: vec![
                "customerid".into(),
                "companyname".into(),
                "city".into(),
                "country".into(),
            ],
            rows: vec![
                vec![" alfki ".into(), "Alfreds Futterkiste".into(), "Berlin".into(), "Germany".into()],
                vec!["ANATR".into(), "Ana Trujillo".into(), "  ".into(), "Mexico".into()],
            ],
        };

        let dim = build_dim_client(&customers);
        assert_eq!(dim.len(), 2);
        assert_eq!(dim[0].sk_client, 1);
        assert_eq!(dim[0].bk_customer_id, "ALFKI");
        assert_eq!(dim[0].region, "Unknown", "absent region column defaults");
        assert_eq!(dim[1].sk_client, 2);
        assert_eq!(dim[1].city, "Unknown", "blank city defaults");
    }

    #[test]
    fn empty_input_yields_empty_dimension() {
        assert!(build_dim_client(&RawTable::empty()).is_empty());
    }
}
