use async_trait::async_trait;
use database::BaseRepository;
use database::postgres::{ConstraintViolation, constraint_violation};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{CreateProduct, Product, ProductSearch, UpdateProduct},
    repository::ProductRepository,
};

pub struct PgProductRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn find_by_name(&self, name: &str, except: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::Entity::find().filter(entity::Column::Name.eq(name));
        if let Some(id) = except {
            query = query.filter(entity::Column::Id.ne(id));
        }
        Ok(query.one(self.base.db()).await?.is_some())
    }
}

/// Map constraint rejections of an insert/update to domain errors.
fn write_error(err: DbErr, name: String, supplier_id: i32) -> ProductError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::Unique) => ProductError::DuplicateName(name),
        Some(ConstraintViolation::ForeignKey) => ProductError::UnknownSupplier(supplier_id),
        None => err.into(),
    }
}

/// `%keyword%` for `ILIKE`, with the keyword's own wildcards escaped.
/// Case is left to the database.
fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let (name, supplier_id) = (input.name.clone(), input.supplier_id);
        let active_model: entity::ActiveModel = input.into();

        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(|e| write_error(e, name, supplier_id))?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn list(&self) -> ProductResult<Vec<Product>> {
        let models = self.base.find_all_ordered(entity::Column::Id).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: i32, input: UpdateProduct) -> ProductResult<Product> {
        let (name, supplier_id) = (input.name.clone(), input.supplier_id);

        let model = self
            .base
            .update(entity::ActiveModel::replace(id, input))
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => ProductError::NotFound(id),
                other => write_error(other, name, supplier_id),
            })?;

        tracing::info!(product_id = id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: i32) -> ProductResult<bool> {
        let rows_affected = self.base.delete_by_id(id).await?;

        if rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(rows_affected > 0)
    }

    async fn exists_by_name(&self, name: &str) -> ProductResult<bool> {
        Ok(self.find_by_name(name, None).await?)
    }

    async fn exists_by_name_excluding(&self, name: &str, id: i32) -> ProductResult<bool> {
        Ok(self.find_by_name(name, Some(id)).await?)
    }

    async fn search(&self, search: ProductSearch) -> ProductResult<Vec<Product>> {
        let mut query = entity::Entity::find();

        if let Some(keyword) = search.keyword.as_deref() {
            query = query.filter(Expr::cust_with_values(
                "name ILIKE ?",
                [contains_pattern(keyword)],
            ));
        }

        if let Some(min_price) = search.min_price {
            query = query.filter(entity::Column::SellingPrice.gte(min_price));
        }

        if let Some(max_price) = search.max_price {
            query = query.filter(entity::Column::SellingPrice.lte(max_price));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(self.base.db())
            .await?;

        tracing::debug!(matches = models.len(), "Searched products");
        Ok(models.into_iter().map(Into::into).collect())
    }
}
