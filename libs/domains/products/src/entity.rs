use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateProduct, Product, UpdateProduct};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub cost_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub selling_price: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub cgst: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub sgst: Decimal,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub igst: Decimal,
    pub supplier_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            cost_price: model.cost_price,
            selling_price: model.selling_price,
            cgst: model.cgst,
            sgst: model.sgst,
            igst: model.igst,
            supplier_id: model.supplier_id,
        }
    }
}

impl From<CreateProduct> for ActiveModel {
    fn from(input: CreateProduct) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            cost_price: Set(input.cost_price),
            selling_price: Set(input.selling_price),
            cgst: Set(input.cgst),
            sgst: Set(input.sgst),
            igst: Set(input.igst),
            supplier_id: Set(input.supplier_id),
        }
    }
}

impl ActiveModel {
    /// Every column of row `id` replaced by `input`.
    pub fn replace(id: i32, input: UpdateProduct) -> Self {
        ActiveModel {
            id: Set(id),
            name: Set(input.name),
            cost_price: Set(input.cost_price),
            selling_price: Set(input.selling_price),
            cgst: Set(input.cgst),
            sgst: Set(input.sgst),
            igst: Set(input.igst),
            supplier_id: Set(input.supplier_id),
        }
    }
}
