use async_trait::async_trait;
use database::BaseRepository;
use database::postgres::{ConstraintViolation, constraint_violation};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    entity,
    error::{SupplierError, SupplierResult},
    models::{CreateSupplier, Supplier, UpdateSupplier},
    repository::SupplierRepository,
};

pub struct PgSupplierRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgSupplierRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn find_by_name(&self, name: &str, except: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::Entity::find().filter(entity::Column::SupplierName.eq(name));
        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.one(self.base.db()).await?.is_some())
    }
}

/// The unique constraint is authoritative for duplicate names.
fn write_error(err: DbErr, name: String) -> SupplierError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::Unique) => SupplierError::DuplicateName(name),
        _ => err.into(),
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn create(&self, input: CreateSupplier) -> SupplierResult<Supplier> {
        let name = input.supplier_name.clone();
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| write_error(e, name))?;

        tracing::info!(supplier_id = model.id, "Created supplier");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> SupplierResult<Option<Supplier>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> SupplierResult<Vec<Supplier>> {
        let models = self.base.find_all_ordered(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateSupplier) -> SupplierResult<Supplier> {
        let name = input.supplier_name.clone();

        let model = self
            .base
            .update(entity::ActiveModel::replace(id, input))
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => SupplierError::NotFound(id),
                other => write_error(other, name),
            })?;

        tracing::info!(supplier_id = id, "Updated supplier");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> SupplierResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await.map_err(|e| {
            match constraint_violation(&e) {
                Some(ConstraintViolation::ForeignKey) => SupplierError::InUse(id),
                _ => e.into(),
            }
        })?;

        if rows_affected > 0 {
            tracing::info!(supplier_id = id, "Deleted supplier");
        }
        Ok(rows_affected > 0)
    }

    async fn exists_by_name(&self, name: &str) -> SupplierResult<bool> {
        Ok(self.find_by_name(name, None).await?)
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> SupplierResult<bool> {
        Ok(self.find_by_name(name, Some(id)).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn acme_row(id: i32) -> entity::Model {
        entity::Model {
            id,
            supplier_name: "Acme".to_string(),
            contact_person: None,
            email: Some("sales@acme.test".to_string()),
            phone: None,
            address: None,
        }
    }

    #[tokio::test]
    async fn test_list_maps_rows_to_suppliers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![acme_row(1), acme_row(2)]])
            .into_connection();
        let repo = PgSupplierRepository::new(db);

        let suppliers = repo.list().await.unwrap();
        assert_eq!(suppliers.len(), 2);
        assert_eq!(suppliers[0].supplier_name, "Acme");
        assert_eq!(suppliers[1].id, 2);
    }

    #[tokio::test]
    async fn test_delete_without_rows_reports_false() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = PgSupplierRepository::new(db);

        assert!(!repo.delete(9).await.unwrap());
    }

    #[tokio::test]
    async fn test_query_failure_becomes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = PgSupplierRepository::new(db);

        let result = repo.get_by_id(1).await;
        assert!(matches!(result, Err(SupplierError::Database(msg)) if msg.contains("connection reset")));
    }
}
