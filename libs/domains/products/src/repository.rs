use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSearch, UpdateProduct};

/// Repository trait for Product persistence
///
/// Name uniqueness is the implementation's job; the service only checks
/// ahead of time to fail fast.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a product, assigning its id
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// All products ordered by id
    async fn list(&self) -> ProductResult<Vec<Product>>;

    /// Replace every field of product `id`
    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> ProductResult<bool>;

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool>;

    /// Whether a product other than `id` holds `name`
    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> ProductResult<bool>;

    /// Products matching every present filter, ordered by id
    async fn search(&self, search: ProductSearch) -> ProductResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    products: BTreeMap<i32, Product>,
}

impl Store {
    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.products
            .values()
            .any(|p| p.name == name && Some(p.id) != except)
    }
}

/// In-memory implementation of ProductRepository (for development/testing)
///
/// Supplier references are not checked.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        if store.name_taken(&input.name, None) {
            return Err(ProductError::DuplicateName(input.name));
        }

        store.next_id += 1;
        let product = Product::new(store.next_id, input);
        store.products.insert(product.id, product.clone());

        tracing::info!(product_id = product.id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        if store.name_taken(&input.name, Some(id)) {
            return Err(ProductError::DuplicateName(input.name));
        }

        let product = store
            .products
            .get_mut(&id)
            .ok_or(ProductError::NotFound(id))?;
        product.replace(input);

        tracing::info!(product_id = id, "Updated product");
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let mut store = self.store.write().await;

        let removed = store.products.remove(&id).is_some();
        if removed {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(removed)
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        Ok(self.store.read().await.name_taken(name, None))
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> ProductResult<bool> {
        Ok(self.store.read().await.name_taken(name, Some(id)))
    }

    async fn search(&self, search: ProductSearch) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .values()
            .filter(|p| search.matches(p))
            .cloned()
            .collect())
    }
}
