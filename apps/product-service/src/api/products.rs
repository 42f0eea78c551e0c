use axum::Router;
use domain_products::{PgProductRepository, ProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    handlers::router(ProductService::new(repository))
}
