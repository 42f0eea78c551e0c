//! Query-string extractor with validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Query parameters that deserialized and passed `Validate::validate`.
///
/// A value that does not parse (e.g. `minPrice=abc`) renders as
/// `400 INVALID_QUERY`; rule violations as `400 VALIDATION_ERROR`.
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        params
            .validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedQuery(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Page {
        #[validate(range(min = 1))]
        limit: Option<u32>,
    }

    async fn list(ValidatedQuery(page): ValidatedQuery<Page>) -> String {
        page.limit.unwrap_or_default().to_string()
    }

    async fn get_uri(uri: &str) -> Response {
        Router::new()
            .route("/", get(list))
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn error_of(response: Response) -> ErrorResponse {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_valid_query_passes() {
        assert_eq!(get_uri("/?limit=5").await.status(), StatusCode::OK);
        assert_eq!(get_uri("/").await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unparsable_value_is_json_invalid_query() {
        let response = get_uri("/?limit=many").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = error_of(response).await;
        assert_eq!(body.error, "INVALID_QUERY");
        assert!(body.message.contains("limit"));
    }

    #[tokio::test]
    async fn test_rule_violation_is_validation_error() {
        let response = get_uri("/?limit=0").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(error_of(response).await.error, "VALIDATION_ERROR");
    }
}
