//! Handler tests for the Suppliers domain
//!
//! Drive the suppliers router with an in-memory repository:
//! - request deserialization and validation
//! - status codes for every route
//! - error bodies

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::{ErrorResponse, MessageResponse};
use domain_suppliers::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    handlers::router(SupplierService::new(InMemorySupplierRepository::new()))
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_add_returns_201_then_409_for_same_name() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/add",
            json!({"supplier_name": "Acme", "email": "sales@acme.test"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let supplier: Supplier = json_body(response.into_body()).await;
    assert_eq!(supplier.id, 1);
    assert_eq!(supplier.email.as_deref(), Some("sales@acme.test"));

    let response = app
        .oneshot(json_request("POST", "/add", json!({"supplier_name": "Acme"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "CONFLICT");
    assert_eq!(error.message, "Supplier 'Acme' already exists");
}

#[tokio::test]
async fn test_add_rejects_empty_name() {
    let response = app()
        .oneshot(json_request("POST", "/add", json!({"supplier_name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.error, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_by_id_found_missing_and_malformed() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/add", json!({"supplier_name": "Acme"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/get-by-id/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/get-by-id/99"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let error: ErrorResponse = json_body(response.into_body()).await;
    assert_eq!(error.message, "Supplier with ID 99 not found");

    let response = app
        .oneshot(empty_request("GET", "/get-by-id/abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_self_rename_ok_other_name_conflict() {
    let app = app();
    for name in ["Acme", "Globex"] {
        app.clone()
            .oneshot(json_request("POST", "/add", json!({"supplier_name": name})))
            .await
            .unwrap();
    }

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            "/update/1",
            json!({"supplier_name": "Acme", "phone": "555-0100"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let supplier: Supplier = json_body(response.into_body()).await;
    assert_eq!(supplier.phone.as_deref(), Some("555-0100"));

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/update/1", json!({"supplier_name": "Globex"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/get-by-id/1"))
        .await
        .unwrap();
    let unchanged: Supplier = json_body(response.into_body()).await;
    assert_eq!(unchanged.supplier_name, "Acme");

    let response = app
        .oneshot(json_request("PUT", "/update/5", json!({"supplier_name": "Initech"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_twice_is_200_then_404() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/add", json!({"supplier_name": "Acme"})))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/delete/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(body.message, "Supplier with ID 1 deleted successfully");

    let response = app
        .oneshot(empty_request("DELETE", "/delete/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_all_is_200_even_when_empty() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/get-all"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let suppliers: Vec<Supplier> = json_body(response.into_body()).await;
    assert!(suppliers.is_empty());

    app.clone()
        .oneshot(json_request("POST", "/add", json!({"supplier_name": "Acme"})))
        .await
        .unwrap();

    let response = app.oneshot(empty_request("GET", "/get-all")).await.unwrap();
    let suppliers: Vec<Supplier> = json_body(response.into_body()).await;
    assert_eq!(suppliers.len(), 1);
}
