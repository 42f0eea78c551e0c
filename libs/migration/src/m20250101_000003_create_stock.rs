use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Keyed by product id without a foreign key; stock may outlive its product.
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(integer(Stock::ProductId).primary_key())
                    .col(integer(Stock::AvailableQuantity).default(0))
                    .col(integer(Stock::ThresholdQuantity).default(0))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Stock {
    Table,
    ProductId,
    AvailableQuantity,
    ThresholdQuantity,
}
