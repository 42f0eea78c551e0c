//! Product Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, ProductSearch, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validates input and rejects duplicate names before the repository is
/// asked to write.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(&input.name).await? {
            return Err(ProductError::DuplicateName(input.name));
        }

        self.repository.create(input).await
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Replace product `id` wholesale, keeping its id.
    ///
    /// The name only conflicts when a *different* product holds it.
    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn update_product(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(ProductError::NotFound(id));
        }

        if self
            .repository
            .exists_by_name_excluding(&input.name, id)
            .await?
        {
            return Err(ProductError::DuplicateName(input.name));
        }

        self.repository.update(id, input).await
    }

    /// Returns whether the product existed
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i32) -> ProductResult<bool> {
        self.repository.delete(id).await
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, search: ProductSearch) -> ProductResult<Vec<Product>> {
        self.repository.search(search).await
    }
}
