use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier, UpdateSupplier};

/// Repository trait for Supplier persistence
///
/// Implementations enforce name uniqueness themselves; the service-level
/// checks are only an early exit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// Insert a supplier, assigning its id
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier>;

    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>>;

    /// All suppliers ordered by id
    async fn list(&self) -> SupplierResult<Vec<Supplier>>;

    /// Replace every field of supplier `id`
    async fn update(&self, id: i32, input: UpdateSupplier) -> SupplierResult<Supplier>;

    /// Returns whether a row was removed
    async fn delete(&self, id: i32) -> SupplierResult<bool>;

    async fn exists_by_name(&self, name: &str) -> SupplierResult<bool>;

    /// Whether a supplier other than `id` holds `name`
    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> SupplierResult<bool>;
}

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    suppliers: BTreeMap<i32, Supplier>,
}

impl Store {
    fn name_taken(&self, name: &str, except: Option<i32>) -> bool {
        self.suppliers
            .values()
            .any(|s| s.supplier_name == name && Some(s.id) != except)
    }
}

/// In-memory implementation of SupplierRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySupplierRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let mut store = self.store.write().await;

        if store.name_taken(&input.supplier_name, None) {
            return Err(SupplierError::DuplicateName(input.supplier_name));
        }

        store.next_id += 1;
        let supplier = Supplier::new(store.next_id, input);
        store.suppliers.insert(supplier.id, supplier.clone());

        tracing::info!(supplier_id = supplier.id, "Created supplier");
        Ok(supplier)
    }

    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>> {
        let store = self.store.read().await;
        Ok(store.suppliers.get(&id).cloned())
    }

    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        let store = self.store.read().await;
        Ok(store.suppliers.values().cloned().collect())
    }

    async fn update(&self, id: i32, input: UpdateSupplier) -> SupplierResult<Supplier> {
        let mut store = self.store.write().await;

        if store.name_taken(&input.supplier_name, Some(id)) {
            return Err(SupplierError::DuplicateName(input.supplier_name));
        }

        let supplier = store
            .suppliers
            .get_mut(&id)
            .ok_or(SupplierError::NotFound(id))?;
        supplier.replace(input);

        tracing::info!(supplier_id = id, "Updated supplier");
        Ok(supplier.clone())
    }

    async fn delete(&self, id: i32) -> SupplierResult<bool> {
        let mut store = self.store.write().await;

        let removed = store.suppliers.remove(&id).is_some();
        if removed {
            tracing::info!(supplier_id = id, "Deleted supplier");
        }
        Ok(removed)
    }

    async fn exists_by_name(&self, name: &str) -> SupplierResult<bool> {
        Ok(self.store.read().await.name_taken(name, None))
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> SupplierResult<bool> {
        Ok(self.store.read().await.name_taken(name, Some(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> CreateSupplier {
        CreateSupplier {
            supplier_name: "Acme".to_string(),
            contact_person: Some("Wile E.".to_string()),
            email: None,
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let repo = InMemorySupplierRepository::new();

        let first = repo.create(acme()).await.unwrap();
        let second = repo
            .create(CreateSupplier {
                supplier_name: "Globex".to_string(),
                ..acme()
            })
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected_under_lock() {
        let repo = InMemorySupplierRepository::new();
        repo.create(acme()).await.unwrap();

        let result = repo.create(acme()).await;
        assert!(matches!(result, Err(SupplierError::DuplicateName(name)) if name == "Acme"));
    }

    #[tokio::test]
    async fn test_update_keeps_own_name_and_clears_omitted_fields() {
        let repo = InMemorySupplierRepository::new();
        let created = repo.create(acme()).await.unwrap();

        let updated = repo
            .update(
                created.id,
                UpdateSupplier {
                    supplier_name: "Acme".to_string(),
                    contact_person: None,
                    email: Some("sales@acme.test".to_string()),
                    phone: None,
                    address: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.contact_person, None);
        assert_eq!(updated.email.as_deref(), Some("sales@acme.test"));
    }

    #[tokio::test]
    async fn test_update_missing_supplier() {
        let repo = InMemorySupplierRepository::new();
        let result = repo
            .update(
                7,
                UpdateSupplier {
                    supplier_name: "Nobody".to_string(),
                    contact_person: None,
                    email: None,
                    phone: None,
                    address: None,
                },
            )
            .await;

        assert!(matches!(result, Err(SupplierError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_delete_reports_prior_existence() {
        let repo = InMemorySupplierRepository::new();
        let created = repo.create(acme()).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
    }
}
