use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{StockError, StockResult};
use crate::models::{CreateStock, Stock, UpdateStock};

/// Repository trait for Stock persistence, keyed by product id
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StockRepository: Send + Sync {
    /// Insert a row; `AlreadyExists` if the product id already has one
    async fn create(&self, input: CreateStock) -> StockResult<Stock>;

    async fn get_by_id(&self, product_id: i32) -> StockResult<Option<Stock>>;

    /// All rows ordered by product id
    async fn list(&self) -> StockResult<Vec<Stock>>;

    /// Overwrite the quantities present in `input`
    async fn update(&self, product_id: i32, input: UpdateStock) -> StockResult<Stock>;

    /// Returns whether a row was removed
    async fn delete(&self, product_id: i32) -> StockResult<bool>;
}

/// In-memory implementation of StockRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryStockRepository {
    stocks: Arc<RwLock<BTreeMap<i32, Stock>>>,
}

impl InMemoryStockRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StockRepository for InMemoryStockRepository {
    async fn create(&self, input: CreateStock) -> StockResult<Stock> {
        let mut stocks = self.stocks.write().await;

        if stocks.contains_key(&input.product_id) {
            return Err(StockError::AlreadyExists(input.product_id));
        }

        let stock = Stock::from(input);
        stocks.insert(stock.product_id, stock.clone());

        tracing::info!(product_id = stock.product_id, "Created stock");
        Ok(stock)
    }

    async fn get_by_id(&self, product_id: i32) -> StockResult<Option<Stock>> {
        Ok(self.stocks.read().await.get(&product_id).cloned())
    }

    async fn list(&self) -> StockResult<Vec<Stock>> {
        Ok(self.stocks.read().await.values().cloned().collect())
    }

    async fn update(&self, product_id: i32, input: UpdateStock) -> StockResult<Stock> {
        let mut stocks = self.stocks.write().await;

        let stock = stocks
            .get_mut(&product_id)
            .ok_or(StockError::NotFound(product_id))?;
        stock.apply_update(input);

        tracing::info!(product_id, "Updated stock");
        Ok(stock.clone())
    }

    async fn delete(&self, product_id: i32) -> StockResult<bool> {
        let removed = self.stocks.write().await.remove(&product_id).is_some();
        if removed {
            tracing::info!(product_id, "Deleted stock");
        }
        Ok(removed)
    }
}
