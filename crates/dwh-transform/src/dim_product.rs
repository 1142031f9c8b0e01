//! Product dimension builder.

use dwh_ingest::RawTable;

use crate::data_utils::{clean_or_unknown, normalize_business_key};

/// One row of the product dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDimRow {
    pub sk_product: i64,
    pub bk_product_id: String,
    pub product_name: String,
    pub category_id: String,
}

/// Builds the product dimension from normalized products. Same shape as the
/// client builder: canonical renames, sequential surrogate keys from 1.
pub fn build_dim_product(products: &RawTable) -> Vec<ProductDimRow> {
    products
        .rows
        .iter()
        .enumerate()
        .map(|(idx, _)| ProductDimRow {
            sk_product: idx as i64 + 1,
            bk_product_id: normalize_business_key(products.value(idx, "productid")),
            product_name: products.value(idx, "productname").trim().to_string(),
            category_id: clean_or_unknown(products.value(idx, "categoryid")),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rows_with_sequential_keys() {
        let products = RawTable {
            headers: vec!["productid".into(), "productname".into(), "categoryid".into()],
            rows: vec![
                vec!["1".into(), "Chai".into(), "1".into()],
                vec!["2".into(), "Chang".into(), "".into()],
            ],
        };

        let dim = build_dim_product(&products);
        assert_eq!(dim.len(), 2);
        assert_eq!(dim[0].sk_product, 1);
        assert_eq!(dim[0].product_name, "Chai");
        assert_eq!(dim[1].category_id, "Unknown");
    }
}
