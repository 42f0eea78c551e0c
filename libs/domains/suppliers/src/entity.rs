use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{CreateSupplier, Supplier, UpdateSupplier};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "suppliers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub supplier_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Supplier {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            supplier_name: model.supplier_name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            address: model.address,
        }
    }
}

impl From<CreateSupplier> for ActiveModel {
    fn from(input: CreateSupplier) -> Self {
        ActiveModel {
            id: NotSet,
            supplier_name: Set(input.supplier_name),
            contact_person: Set(input.contact_person),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
        }
    }
}

impl ActiveModel {
    /// Every column of row `id` replaced by `input`.
    pub fn replace(id: i32, input: UpdateSupplier) -> Self {
        ActiveModel {
            id: Set(id),
            supplier_name: Set(input.supplier_name),
            contact_person: Set(input.contact_person),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
        }
    }
}
