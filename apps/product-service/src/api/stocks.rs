use axum::Router;
use domain_stocks::{PgStockRepository, StockService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = PgStockRepository::new(state.db.clone());
    handlers::router(StockService::new(repository))
}
