use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier, UpdateSupplier};
use crate::repository::SupplierRepository;

/// Service layer for Supplier business logic
pub struct SupplierService<R: SupplierRepository> {
    repository: Arc<R>,
}

impl<R: SupplierRepository> SupplierService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a supplier; `DuplicateName` if the name is taken
    #[instrument(skip(self, input), fields(supplier_name = %input.supplier_name))]
    pub async fn create_supplier(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        input
            .validate()
            .map_err(|e| SupplierError::Validation(e.to_string()))?;

        if self.repository.exists_by_name(&input.supplier_name).await? {
            return Err(SupplierError::DuplicateName(input.supplier_name));
        }

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_supplier(&self, id: i32) -> SupplierResult<Supplier> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(SupplierError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_suppliers(&self) -> SupplierResult<Vec<Supplier>> {
        self.repository.list().await
    }

    /// Full replace of supplier `id`. Keeping its own name is not a conflict.
    #[instrument(skip(self, input), fields(supplier_name = %input.supplier_name))]
    pub async fn update_supplier(&self, id: i32, input: UpdateSupplier) -> SupplierResult<Supplier> {
        input
            .validate()
            .map_err(|e| SupplierError::Validation(e.to_string()))?;

        if self.repository.get_by_id(id).await?.is_none() {
            return Err(SupplierError::NotFound(id));
        }

        if self
            .repository
            .exists_by_name_excluding(&input.supplier_name, id)
            .await?
        {
            return Err(SupplierError::DuplicateName(input.supplier_name));
        }

        self.repository.update(id, input).await
    }

    /// Returns whether the supplier existed
    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: i32) -> SupplierResult<bool> {
        self.repository.delete(id).await
    }
}
