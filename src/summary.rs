use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::ProductQuantityRow;

/// Validated availability record for one product. `available_quantity` is
/// unsigned: a row only becomes a summary once the quantity invariant holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    pub name: String,
    pub price: BigDecimal,
    pub category_id: i32,
    pub available_quantity: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SummaryError {
    #[error("product {name:?} reports negative available quantity {quantity}")]
    NegativeQuantity { name: String, quantity: i64 },
}

impl TryFrom<ProductQuantityRow> for ProductSummary {
    type Error = SummaryError;

    fn try_from(row: ProductQuantityRow) -> Result<Self, Self::Error> {
        let available_quantity =
            u64::try_from(row.available_quantity).map_err(|_| SummaryError::NegativeQuantity {
                name: row.name.clone(),
                quantity: row.available_quantity,
            })?;

        Ok(Self {
            name: row.name,
            price: row.price,
            category_id: row.category_id,
            available_quantity,
        })
    }
}

/// Converts a whole result batch, failing fast: the first invalid row fails
/// the batch and no partial summary list is produced.
pub fn summarize_rows(rows: Vec<ProductQuantityRow>) -> Result<Vec<ProductSummary>, SummaryError> {
    rows.into_iter().map(ProductSummary::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(name: &str, price: &str, category_id: i32, quantity: i64) -> ProductQuantityRow {
        ProductQuantityRow {
            name: name.to_string(),
            price: BigDecimal::from_str(price).unwrap(),
            category_id,
            available_quantity: quantity,
        }
    }

    #[test]
    fn valid_row_converts_with_exact_price() {
        let summary = ProductSummary::try_from(row("Widget", "9.99", 1, 10)).unwrap();

        assert_eq!(summary.name, "Widget");
        assert_eq!(summary.price, BigDecimal::from_str("9.99").unwrap());
        assert_eq!(summary.category_id, 1);
        assert_eq!(summary.available_quantity, 10);
    }

    #[test]
    fn zero_quantity_is_valid() {
        let summary = ProductSummary::try_from(row("Gadget", "19.50", 1, 0)).unwrap();
        assert_eq!(summary.available_quantity, 0);
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let err = ProductSummary::try_from(row("Widget", "9.99", 1, -3)).unwrap_err();
        assert_eq!(
            err,
            SummaryError::NegativeQuantity {
                name: "Widget".to_string(),
                quantity: -3,
            }
        );
    }

    #[test]
    fn batch_fails_as_a_whole_on_one_bad_row() {
        let rows = vec![
            row("Widget", "9.99", 1, 4),
            row("Gadget", "19.50", 1, -1),
            row("Gizmo", "3.25", 2, 7),
        ];

        let err = summarize_rows(rows).unwrap_err();
        assert_eq!(
            err,
            SummaryError::NegativeQuantity {
                name: "Gadget".to_string(),
                quantity: -1,
            }
        );
    }

    #[test]
    fn batch_preserves_row_order() {
        let rows = vec![
            row("Widget", "9.99", 1, 10),
            row("Gadget", "19.50", 1, 0),
            row("Gizmo", "3.25", 2, 7),
        ];

        let summaries = summarize_rows(rows).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Widget", "Gadget", "Gizmo"]);
    }
}
