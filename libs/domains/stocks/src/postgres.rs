use async_trait::async_trait;
use database::BaseRepository;
use database::postgres::{ConstraintViolation, constraint_violation};
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, IntoActiveModel};

use crate::{
    entity,
    error::{StockError, StockResult},
    models::{CreateStock, Stock, UpdateStock},
    repository::StockRepository,
};

pub struct PgStockRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgStockRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl StockRepository for PgStockRepository {
    async fn create(&self, input: CreateStock) -> StockResult<Stock> {
        let product_id = input.product_id;
        let active_model: entity::ActiveModel = input.into();

        let model = self.base.insert(active_model).await.map_err(|e| {
            match constraint_violation(&e) {
                Some(ConstraintViolation::Unique) => StockError::AlreadyExists(product_id),
                _ => e.into(),
            }
        })?;

        tracing::info!(product_id, "Created stock");
        Ok(model.into())
    }

    async fn get_by_id(&self, product_id: i32) -> StockResult<Option<Stock>> {
        let model = self.base.find_by_id(product_id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> StockResult<Vec<Stock>> {
        let models = self
            .base
            .find_all_ordered(entity::Column::ProductId)
            .await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, product_id: i32, input: UpdateStock) -> StockResult<Stock> {
        let existing = self
            .base
            .find_by_id(product_id)
            .await?
            .ok_or(StockError::NotFound(product_id))?;

        let mut active_model = existing.clone().into_active_model();
        if let Some(available) = input.available_quantity {
            active_model.available_quantity = Set(available);
        }
        if let Some(threshold) = input.threshold_quantity {
            active_model.threshold_quantity = Set(threshold);
        }

        if !active_model.is_changed() {
            return Ok(existing.into());
        }

        let model = self.base.update(active_model).await.map_err(|e| match e {
            sea_orm::DbErr::RecordNotUpdated => StockError::NotFound(product_id),
            other => other.into(),
        })?;

        tracing::info!(product_id, "Updated stock");
        Ok(model.into())
    }

    async fn delete(&self, product_id: i32) -> StockResult<bool> {
        let rows_affected = self.base.delete_by_id(product_id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id, "Deleted stock");
        }
        Ok(rows_affected > 0)
    }
}
