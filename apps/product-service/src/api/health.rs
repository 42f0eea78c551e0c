//! Readiness probe backed by a database ping.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    match run_health_checks(checks).await {
        Ok(ok) => ok.into_response(),
        Err(unavailable) => unavailable.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{Environment, app_info, server::ServerConfig};
    use database::common::RetryConfig;
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use serde_json::Value;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_ready_reports_connected_database() {
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::new("postgresql://localhost/inventory"),
                retry: RetryConfig::default(),
                server: ServerConfig::default(),
                environment: Environment::Development,
                run_migrations: false,
            },
            db: MockDatabase::new(DatabaseBackend::Postgres).into_connection(),
        };

        let response = crate::api::ready_router(state)
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }
}
