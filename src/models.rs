use bigdecimal::BigDecimal;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::category, primary_key(category_id))]
pub struct Category {
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::category)]
pub struct NewCategory {
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::product, primary_key(product_id))]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub category_id: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::product)]
pub struct NewProduct {
    pub product_id: i32,
    pub name: String,
    pub price: BigDecimal,
    pub category_id: i32,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::inventory, primary_key(inventory_id))]
pub struct Inventory {
    pub inventory_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::inventory)]
pub struct NewInventory {
    pub inventory_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}

/// Raw shape of one availability-report row, straight off the aggregate
/// query. `available_quantity` is the signed SQL sum; it only becomes
/// trusted once converted into a [`crate::summary::ProductSummary`].
#[derive(Debug, Clone, Queryable)]
pub struct ProductQuantityRow {
    pub name: String,
    pub price: BigDecimal,
    pub category_id: i32,
    pub available_quantity: i64,
}
