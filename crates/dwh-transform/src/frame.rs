//! Conversion of built warehouse rows into polars `DataFrame`s.
//!
//! Frames are the handoff type to the output and schema stages: the loader
//! serializes them to CSV and the DDL generator inspects their dtypes.

use polars::prelude::{Column, DataFrame, DateChunked, IntoColumn};

use dwh_model::warehouse::{
    DIM_CLIENT, DIM_DATE, DIM_EMPLOYEE, DIM_PRODUCT, FACT_SALES, WarehouseTable,
};

use crate::dim_client::ClientDimRow;
use crate::dim_date::DateDimRow;
use crate::dim_employee::EmployeeDimRow;
use crate::dim_product::ProductDimRow;
use crate::error::Result;
use crate::fact_sales::FactSalesRow;

/// The full set of built warehouse tables.
#[derive(Debug, Clone)]
pub struct WarehouseFrames {
    pub dim_date: DataFrame,
    pub dim_client: DataFrame,
    pub dim_employee: DataFrame,
    pub dim_product: DataFrame,
    pub fact_sales: DataFrame,
}

impl WarehouseFrames {
    pub fn build(
        dim_date: &[DateDimRow],
        dim_client: &[ClientDimRow],
        dim_employee: &[EmployeeDimRow],
        dim_product: &[ProductDimRow],
        fact_sales: &[FactSalesRow],
    ) -> Result<Self> {
        Ok(Self {
            dim_date: dim_date_frame(dim_date)?,
            dim_client: dim_client_frame(dim_client)?,
            dim_employee: dim_employee_frame(dim_employee)?,
            dim_product: dim_product_frame(dim_product)?,
            fact_sales: fact_sales_frame(fact_sales)?,
        })
    }

    /// Tables paired with their registry entries, dimensions first.
    pub fn tables(&self) -> [(&'static WarehouseTable, &DataFrame); 5] {
        [
            (&DIM_DATE, &self.dim_date),
            (&DIM_CLIENT, &self.dim_client),
            (&DIM_EMPLOYEE, &self.dim_employee),
            (&DIM_PRODUCT, &self.dim_product),
            (&FACT_SALES, &self.fact_sales),
        ]
    }
}

pub fn dim_date_frame(rows: &[DateDimRow]) -> Result<DataFrame> {
    let full_date =
        DateChunked::from_naive_date("full_date".into(), rows.iter().map(|r| r.full_date))
            .into_column();
    let df = DataFrame::new(vec![
        Column::new("sk_date".into(), rows.iter().map(|r| r.sk_date).collect::<Vec<_>>()),
        full_date,
        Column::new("year".into(), rows.iter().map(|r| r.year).collect::<Vec<_>>()),
        Column::new("month".into(), rows.iter().map(|r| i64::from(r.month)).collect::<Vec<_>>()),
        Column::new(
            "month_name".into(),
            rows.iter().map(|r| r.month_name.clone()).collect::<Vec<_>>(),
        ),
        Column::new("quarter".into(), rows.iter().map(|r| i64::from(r.quarter)).collect::<Vec<_>>()),
    ])?;
    Ok(df)
}

pub fn dim_client_frame(rows: &[ClientDimRow]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Column::new("sk_client".into(), rows.iter().map(|r| r.sk_client).collect::<Vec<_>>()),
        Column::new(
            "bk_customer_id".into(),
            rows.iter().map(|r| r.bk_customer_id.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "company_name".into(),
            rows.iter().map(|r| r.company_name.clone()).collect::<Vec<_>>(),
        ),
        Column::new("city".into(), rows.iter().map(|r| r.city.clone()).collect::<Vec<_>>()),
        Column::new("country".into(), rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>()),
        Column::new("region".into(), rows.iter().map(|r| r.region.clone()).collect::<Vec<_>>()),
    ])?;
    Ok(df)
}

pub fn dim_employee_frame(rows: &[EmployeeDimRow]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Column::new(
            "sk_employee".into(),
            rows.iter().map(|r| r.sk_employee).collect::<Vec<_>>(),
        ),
        Column::new(
            "bk_employee_id".into(),
            rows.iter().map(|r| r.bk_employee_id.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "employee_name".into(),
            rows.iter().map(|r| r.employee_name.clone()).collect::<Vec<_>>(),
        ),
        Column::new("title".into(), rows.iter().map(|r| r.title.clone()).collect::<Vec<_>>()),
        Column::new("city".into(), rows.iter().map(|r| r.city.clone()).collect::<Vec<_>>()),
        Column::new("country".into(), rows.iter().map(|r| r.country.clone()).collect::<Vec<_>>()),
        Column::new(
            "territories".into(),
            rows.iter().map(|r| r.territories.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "sales_region".into(),
            rows.iter().map(|r| r.sales_region.clone()).collect::<Vec<_>>(),
        ),
    ])?;
    Ok(df)
}

pub fn dim_product_frame(rows: &[ProductDimRow]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Column::new(
            "sk_product".into(),
            rows.iter().map(|r| r.sk_product).collect::<Vec<_>>(),
        ),
        Column::new(
            "bk_product_id".into(),
            rows.iter().map(|r| r.bk_product_id.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "product_name".into(),
            rows.iter().map(|r| r.product_name.clone()).collect::<Vec<_>>(),
        ),
        Column::new(
            "category_id".into(),
            rows.iter().map(|r| r.category_id.clone()).collect::<Vec<_>>(),
        ),
    ])?;
    Ok(df)
}

pub fn fact_sales_frame(rows: &[FactSalesRow]) -> Result<DataFrame> {
    let df = DataFrame::new(vec![
        Column::new("fact_id".into(), rows.iter().map(|r| r.fact_id).collect::<Vec<_>>()),
        Column::new(
            "bk_order_id".into(),
            rows.iter().map(|r| r.bk_order_id.clone()).collect::<Vec<_>>(),
        ),
        Column::new("sk_client".into(), rows.iter().map(|r| r.sk_client).collect::<Vec<_>>()),
        Column::new(
            "sk_employee".into(),
            rows.iter().map(|r| r.sk_employee).collect::<Vec<_>>(),
        ),
        Column::new("sk_date".into(), rows.iter().map(|r| r.sk_date).collect::<Vec<_>>()),
        Column::new("quantity".into(), rows.iter().map(|r| r.quantity).collect::<Vec<_>>()),
        Column::new(
            "unit_price".into(),
            rows.iter().map(|r| r.unit_price).collect::<Vec<_>>(),
        ),
        Column::new("discount".into(), rows.iter().map(|r| r.discount).collect::<Vec<_>>()),
        Column::new(
            "total_amount".into(),
            rows.iter().map(|r| r.total_amount).collect::<Vec<_>>(),
        ),
        Column::new(
            "delivery_status".into(),
            rows.iter().map(|r| r.delivery_status.clone()).collect::<Vec<_>>(),
        ),
    ])?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use polars::prelude::DataType;

    #[test]
    fn dim_date_frame_dtypes() {
        let rows = vec![DateDimRow {
            sk_date: 19_960_704,
            full_date: NaiveDate::from_ymd_opt(1996, 7, 4).unwrap(),
            year: 1996,
            month: 7,
            month_name: "July".to_string(),
            quarter: 3,
        }];
        let df = dim_date_frame(&rows).unwrap();
        assert_eq!(df.height(), 1);
        assert_eq!(df.column("sk_date").unwrap().dtype(), &DataType::Int64);
        assert_eq!(df.column("full_date").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("month_name").unwrap().dtype(), &DataType::String);
    }

    #[test]
    fn fact_frame_keeps_null_foreign_keys() {
        let rows = vec![FactSalesRow {
            fact_id: 1,
            bk_order_id: "10248".to_string(),
            sk_client: None,
            sk_employee: Some(2),
            sk_date: 19_960_704,
            quantity: 3,
            unit_price: 10.0,
            discount: 0.1,
            total_amount: 27.0,
            delivery_status: "Delivered".to_string(),
        }];
        let df = fact_sales_frame(&rows).unwrap();
        assert_eq!(df.column("sk_client").unwrap().null_count(), 1);
        assert_eq!(df.column("sk_employee").unwrap().null_count(), 0);
    }

    #[test]
    fn empty_rows_still_carry_headers() {
        let df = dim_client_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 6);
    }
}
