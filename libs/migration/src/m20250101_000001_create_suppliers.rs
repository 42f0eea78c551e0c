use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Suppliers::Table)
                    .if_not_exists()
                    .col(pk_auto(Suppliers::Id))
                    .col(string_len_uniq(Suppliers::SupplierName, 255))
                    .col(string_len_null(Suppliers::ContactPerson, 255))
                    .col(string_len_null(Suppliers::Email, 255))
                    .col(string_len_null(Suppliers::Phone, 50))
                    .col(text_null(Suppliers::Address))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Suppliers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
    SupplierName,
    ContactPerson,
    Email,
    Phone,
    Address,
}
