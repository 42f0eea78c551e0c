use axum::http::{HeaderValue, Method, header};
use core_config::Environment;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{info, warn};

/// Builds the CORS layer from `CORS_ALLOWED_ORIGIN` (comma-separated origins).
///
/// In production the variable is required. In development an unset variable
/// falls back to a permissive layer.
pub fn cors_layer_from_env(environment: &Environment) -> io::Result<CorsLayer> {
    match std::env::var("CORS_ALLOWED_ORIGIN") {
        Ok(origins) => cors_layer(&origins),
        Err(_) if environment.is_development() => {
            warn!("CORS_ALLOWED_ORIGIN not set, allowing any origin (development only)");
            Ok(CorsLayer::permissive())
        }
        Err(_) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN environment variable is required in production. Example: CORS_ALLOWED_ORIGIN=https://inventory.example.com",
        )),
    }
}

/// CORS layer for an explicit comma-separated origin list.
pub fn cors_layer(origins: &str) -> io::Result<CorsLayer> {
    let allowed_origins = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!(origins = %origins, "CORS configured");

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_accepts_origin_list() {
        assert!(cors_layer("http://localhost:3000, https://inventory.example.com").is_ok());
    }

    #[test]
    fn test_cors_layer_rejects_empty_list() {
        assert!(cors_layer(" , ").is_err());
    }

    #[test]
    fn test_production_requires_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(cors_layer_from_env(&Environment::Production).is_err());
            assert!(cors_layer_from_env(&Environment::Development).is_ok());
        });
    }
}
