//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::{
    extract::{FromRequest, Json, Request},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON body that has passed `Validate::validate`.
///
/// Body parse failures render as `JSON_EXTRACTION`, rule violations as
/// `400 VALIDATION_ERROR` with per-field details.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateSupplier {
///     #[validate(length(min = 1, max = 255))]
///     supplier_name: String,
/// }
///
/// async fn create(ValidatedJson(input): ValidatedJson<CreateSupplier>) -> String {
///     input.supplier_name
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::from(e).into_response())?;

        data.validate()
            .map_err(|e| AppError::from(e).into_response())?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorResponse;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Named {
        #[validate(length(min = 1, max = 8))]
        name: String,
    }

    async fn create(ValidatedJson(input): ValidatedJson<Named>) -> String {
        input.name
    }

    async fn post_json(body: &str) -> axum::response::Response {
        Router::new()
            .route("/", post(create))
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        assert_eq!(post_json(r#"{"name":"bolt"}"#).await.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_body_reports_field_details() {
        let response = post_json(r#"{"name":""}"#).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "VALIDATION_ERROR");
        assert!(body.details.unwrap().get("name").is_some());
    }

    #[tokio::test]
    async fn test_malformed_json_is_rejected() {
        let response = post_json("{not json").await;
        assert!(response.status().is_client_error());
    }
}
