use axum::Router;

pub mod health;
pub mod products;
pub mod stocks;
pub mod suppliers;

/// API routes without the `/api` prefix; `create_router` adds it.
///
/// Every sub-router has its state applied, so the result is stateless.
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(domain_products::URL, products::router(state))
        .nest(domain_stocks::URL, stocks::router(state))
        .nest(domain_suppliers::URL, suppliers::router(state))
}

/// `/ready` with a real database ping, merged next to the stateless app router.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
