use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string_len_uniq(Products::Name, 255))
                    .col(decimal_len(Products::CostPrice, 10, 2))
                    .col(decimal_len(Products::SellingPrice, 10, 2))
                    .col(decimal_len(Products::Cgst, 5, 2).default(0))
                    .col(decimal_len(Products::Sgst, 5, 2).default(0))
                    .col(decimal_len(Products::Igst, 5, 2).default(0))
                    .col(integer(Products::SupplierId))
                    // Suppliers with products cannot be deleted
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_supplier_id")
                            .from(Products::Table, Products::SupplierId)
                            .to(Suppliers::Table, Suppliers::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_selling_price")
                    .table(Products::Table)
                    .col(Products::SellingPrice)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_supplier_id")
                    .table(Products::Table)
                    .col(Products::SupplierId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    CostPrice,
    SellingPrice,
    Cgst,
    Sgst,
    Igst,
    SupplierId,
}

#[derive(DeriveIden)]
enum Suppliers {
    Table,
    Id,
}
