use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Quantities on hand for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Stock {
    /// Id of the product this row tracks; also the key of the row
    pub product_id: i32,
    pub available_quantity: i32,
    /// Reorder level; informational only
    pub threshold_quantity: i32,
}

/// Body of `POST /add`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateStock {
    pub product_id: i32,
    #[serde(default)]
    pub available_quantity: i32,
    #[serde(default)]
    pub threshold_quantity: i32,
}

/// Body of `PUT /update/{productId}`. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateStock {
    pub available_quantity: Option<i32>,
    pub threshold_quantity: Option<i32>,
}

impl Stock {
    pub(crate) fn apply_update(&mut self, update: UpdateStock) {
        if let Some(available) = update.available_quantity {
            self.available_quantity = available;
        }
        if let Some(threshold) = update.threshold_quantity {
            self.threshold_quantity = threshold;
        }
    }
}

impl From<CreateStock> for Stock {
    fn from(input: CreateStock) -> Self {
        Self {
            product_id: input.product_id,
            available_quantity: input.available_quantity,
            threshold_quantity: input.threshold_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_touches_only_present_fields() {
        let mut stock = Stock {
            product_id: 1,
            available_quantity: 10,
            threshold_quantity: 3,
        };

        stock.apply_update(UpdateStock {
            available_quantity: Some(7),
            threshold_quantity: None,
        });
        assert_eq!(stock.available_quantity, 7);
        assert_eq!(stock.threshold_quantity, 3);

        stock.apply_update(UpdateStock::default());
        assert_eq!(stock.available_quantity, 7);
    }

    #[test]
    fn test_update_body_may_omit_fields() {
        let update: UpdateStock = serde_json::from_str(r#"{"threshold_quantity": 5}"#).unwrap();
        assert_eq!(update.available_quantity, None);
        assert_eq!(update.threshold_quantity, Some(5));
    }
}
