//! Logical source entity registry.
//!
//! Each source system exports one file per logical entity, named
//! `<source>_<entity>.csv` (e.g. `sql_orders.csv`, `access_orders.csv`).
//! The registry records, per entity, the normalized business-key columns used
//! for deduplication and an explicit alias table for source columns that
//! arrive under a different name (such as a bare `id` column). Aliases are
//! expressed in normalized form and consulted once during header
//! normalization, never as ad hoc renames downstream.

/// Definition of one logical source entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct EntityDef {
    /// Logical entity name; raw files match the `*_{name}.csv` suffix.
    pub name: &'static str,
    /// Normalized business-key column(s) used for deduplication.
    pub business_keys: &'static [&'static str],
    /// Normalized source column → canonical normalized column.
    pub aliases: &'static [(&'static str, &'static str)],
}

pub const ORDERS: EntityDef = EntityDef {
    name: "orders",
    business_keys: &["orderid"],
    aliases: &[("id", "orderid")],
};

pub const ORDER_DETAILS: EntityDef = EntityDef {
    name: "order_details",
    business_keys: &["orderid", "productid"],
    aliases: &[],
};

pub const CUSTOMERS: EntityDef = EntityDef {
    name: "customers",
    business_keys: &["customerid"],
    aliases: &[("id", "customerid")],
};

pub const EMPLOYEES: EntityDef = EntityDef {
    name: "employees",
    business_keys: &["employeeid"],
    aliases: &[("id", "employeeid")],
};

pub const EMPLOYEE_TERRITORIES: EntityDef = EntityDef {
    name: "employeeterritories",
    business_keys: &["employeeid", "territoryid"],
    aliases: &[],
};

pub const TERRITORIES: EntityDef = EntityDef {
    name: "territories",
    business_keys: &["territoryid"],
    aliases: &[("id", "territoryid")],
};

pub const REGION: EntityDef = EntityDef {
    name: "region",
    business_keys: &["regionid"],
    aliases: &[("id", "regionid")],
};

pub const PRODUCTS: EntityDef = EntityDef {
    name: "products",
    business_keys: &["productid"],
    aliases: &[("id", "productid")],
};

/// Every entity the pipeline ingests, in load order.
pub const ENTITIES: &[EntityDef] = &[
    ORDERS,
    ORDER_DETAILS,
    CUSTOMERS,
    EMPLOYEES,
    EMPLOYEE_TERRITORIES,
    TERRITORIES,
    REGION,
    PRODUCTS,
];

/// Looks up an entity definition by logical name.
pub fn entity(name: &str) -> Option<&'static EntityDef> {
    ENTITIES.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(entity("orders"), Some(&ORDERS));
        assert_eq!(entity("shippers"), None);
    }

    #[test]
    fn business_keys_are_normalized_form() {
        for def in ENTITIES {
            for key in def.business_keys {
                assert_eq!(key.to_lowercase(), *key);
                assert!(!key.contains('_') && !key.contains(' '));
            }
        }
    }
}
