use diesel::prelude::*;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::models::{NewCategory, NewInventory, NewProduct};
use crate::schema::{category, inventory, product};

// Catalog rows are owned by whatever system maintains the catalog; the
// report job never calls into this module.

pub async fn insert_category(conn: &mut AsyncPgConnection, row: &NewCategory) -> QueryResult<()> {
    diesel::insert_into(category::table)
        .values(row)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn insert_product(conn: &mut AsyncPgConnection, row: &NewProduct) -> QueryResult<()> {
    diesel::insert_into(product::table)
        .values(row)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn insert_inventory(conn: &mut AsyncPgConnection, row: &NewInventory) -> QueryResult<()> {
    diesel::insert_into(inventory::table)
        .values(row)
        .execute(conn)
        .await?;
    Ok(())
}

/// Deletes a product and its inventory rows in one transaction. The cascade
/// is issued here explicitly; the schema itself does not cascade, and the
/// product's category is left untouched. Unknown ids are a no-op.
pub async fn delete_product(conn: &mut AsyncPgConnection, product_id: i32) -> QueryResult<()> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        Box::pin(async move {
            diesel::delete(inventory::table.filter(inventory::product_id.eq(product_id)))
                .execute(conn)
                .await?;

            diesel::delete(product::table.filter(product::product_id.eq(product_id)))
                .execute(conn)
                .await?;

            Ok(())
        })
    })
    .await
}
