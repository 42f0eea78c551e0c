use axum::Router;
use domain_suppliers::{PgSupplierRepository, SupplierService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgSupplierRepository::new(state.db.clone());
    handlers::router(SupplierService::new(repository))
}
