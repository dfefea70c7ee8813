use anyhow::Result;
use diesel::dsl::sum;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Nullable};
use diesel_async::{pooled_connection::bb8::Pool, AsyncPgConnection, RunQueryDsl};
use tracing::info;

use crate::models::ProductQuantityRow;
use crate::schema::{inventory, product};
use crate::summary::{summarize_rows, ProductSummary};

type DbPool = Pool<AsyncPgConnection>;

diesel::define_sql_function! {
    fn coalesce(summed: Nullable<BigInt>, fallback: BigInt) -> BigInt;
}

/// Loads one row per product: name, price, category id, and the summed
/// inventory quantity. Products without inventory rows survive the left
/// join and report a coalesced sum of 0.
pub async fn product_quantities(
    conn: &mut AsyncPgConnection,
) -> QueryResult<Vec<ProductQuantityRow>> {
    product::table
        .left_join(inventory::table)
        .group_by((
            product::product_id,
            product::name,
            product::price,
            product::category_id,
        ))
        .select((
            product::name,
            product::price,
            product::category_id,
            coalesce(sum(inventory::quantity), 0i64),
        ))
        .order(product::product_id.asc())
        .load(conn)
        .await
}

pub struct ReportJob {
    pool: DbPool,
}

impl ReportJob {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Runs the availability report: query, then batch validation. Any
    /// connection, query, or validation failure aborts the whole run.
    pub async fn run(&self) -> Result<Vec<ProductSummary>> {
        let mut conn = self.pool.get().await?;

        let rows = product_quantities(&mut conn).await?;
        info!("Loaded {} product rows", rows.len());

        let summaries = summarize_rows(rows)?;
        info!("Report complete: {} products summarized", summaries.len());

        Ok(summaries)
    }
}
