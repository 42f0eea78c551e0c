use std::sync::Arc;
use tracing::instrument;

use crate::error::{StockError, StockResult};
use crate::models::{CreateStock, Stock, UpdateStock};
use crate::repository::StockRepository;

/// Service layer for Stock business logic
pub struct StockService<R: StockRepository> {
    repository: Arc<R>,
}

impl<R: StockRepository> StockService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create the stock row of a product; `AlreadyExists` if it has one
    #[instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn create_stock(&self, input: CreateStock) -> StockResult<Stock> {
        if self.repository.get_by_id(input.product_id).await?.is_some() {
            return Err(StockError::AlreadyExists(input.product_id));
        }

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_stock(&self, product_id: i32) -> StockResult<Stock> {
        self.repository
            .get_by_id(product_id)
            .await?
            .ok_or(StockError::NotFound(product_id))
    }

    #[instrument(skip(self))]
    pub async fn list_stocks(&self) -> StockResult<Vec<Stock>> {
        self.repository.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update_stock(&self, product_id: i32, input: UpdateStock) -> StockResult<Stock> {
        if self.repository.get_by_id(product_id).await?.is_none() {
            return Err(StockError::NotFound(product_id));
        }

        self.repository.update(product_id, input).await
    }

    /// Returns whether the row existed
    #[instrument(skip(self))]
    pub async fn delete_stock(&self, product_id: i32) -> StockResult<bool> {
        self.repository.delete(product_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockStockRepository;
    use mockall::predicate::eq;

    fn stock(product_id: i32) -> Stock {
        Stock {
            product_id,
            available_quantity: 10,
            threshold_quantity: 2,
        }
    }

    #[tokio::test]
    async fn test_create_existing_row_is_rejected() {
        let mut mock_repo = MockStockRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(eq(7))
            .returning(|id| Ok(Some(stock(id))));
        mock_repo.expect_create().never();

        let service = StockService::new(mock_repo);
        let result = service
            .create_stock(CreateStock {
                product_id: 7,
                available_quantity: 1,
                threshold_quantity: 0,
            })
            .await;

        assert!(matches!(result, Err(StockError::AlreadyExists(7))));
    }

    #[tokio::test]
    async fn test_get_missing_row_is_not_found() {
        let mut mock_repo = MockStockRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));

        let service = StockService::new(mock_repo);
        assert!(matches!(
            service.get_stock(3).await,
            Err(StockError::NotFound(3))
        ));
    }

    #[tokio::test]
    async fn test_update_passes_partial_input_through() {
        let mut mock_repo = MockStockRepository::new();
        mock_repo
            .expect_get_by_id()
            .returning(|id| Ok(Some(stock(id))));
        mock_repo
            .expect_update()
            .withf(|id, input| {
                *id == 1
                    && input.available_quantity == Some(4)
                    && input.threshold_quantity.is_none()
            })
            .returning(|id, input| {
                let mut current = stock(id);
                current.apply_update(input);
                Ok(current)
            });

        let service = StockService::new(mock_repo);
        let updated = service
            .update_stock(
                1,
                UpdateStock {
                    available_quantity: Some(4),
                    threshold_quantity: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.available_quantity, 4);
        assert_eq!(updated.threshold_quantity, 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_skips_the_write() {
        let mut mock_repo = MockStockRepository::new();
        mock_repo.expect_get_by_id().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let service = StockService::new(mock_repo);
        let result = service.update_stock(9, UpdateStock::default()).await;

        assert!(matches!(result, Err(StockError::NotFound(9))));
    }
}
