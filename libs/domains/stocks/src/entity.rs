use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;

use crate::models::{CreateStock, Stock};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stock")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i32,
    pub available_quantity: i32,
    pub threshold_quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Stock {
    fn from(model: Model) -> Self {
        Self {
            product_id: model.product_id,
            available_quantity: model.available_quantity,
            threshold_quantity: model.threshold_quantity,
        }
    }
}

impl From<CreateStock> for ActiveModel {
    fn from(input: CreateStock) -> Self {
        ActiveModel {
            product_id: Set(input.product_id),
            available_quantity: Set(input.available_quantity),
            threshold_quantity: Set(input.threshold_quantity),
        }
    }
}
