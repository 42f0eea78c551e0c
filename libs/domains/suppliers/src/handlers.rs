use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use axum_helpers::{
    IdPath, MessageResponse, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, ConflictResponse,
        InternalServerErrorResponse, NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{SupplierError, SupplierResult};
use crate::models::{CreateSupplier, Supplier, UpdateSupplier};
use crate::repository::SupplierRepository;
use crate::service::SupplierService;

/// Mount point below `/api`
pub const URL: &str = "/product-service/suppliers";
pub const TAG: &str = "Suppliers";

#[derive(OpenApi)]
#[openapi(
    paths(create_supplier, get_supplier, update_supplier, delete_supplier, list_suppliers),
    components(
        schemas(Supplier, CreateSupplier, UpdateSupplier, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Supplier management endpoints")
    )
)]
pub struct ApiDoc;

pub fn router<R: SupplierRepository + 'static>(service: SupplierService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/add", post(create_supplier))
        .route("/get-by-id/{id}", get(get_supplier))
        .route("/update/{id}", put(update_supplier))
        .route("/delete/{id}", delete(delete_supplier))
        .route("/get-all", get(list_suppliers))
        .with_state(shared_service)
}

/// Create a supplier
#[utoipa::path(
    post,
    path = "/add",
    tag = TAG,
    request_body = CreateSupplier,
    responses(
        (status = 201, description = "Supplier created", body = Supplier),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateSupplier>,
) -> SupplierResult<impl IntoResponse> {
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

#[utoipa::path(
    get,
    path = "/get-by-id/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier found", body = Supplier),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
) -> SupplierResult<Json<Supplier>> {
    Ok(Json(service.get_supplier(id).await?))
}

/// Replace every field of a supplier
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    request_body = UpdateSupplier,
    responses(
        (status = 200, description = "Supplier updated", body = Supplier),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateSupplier>,
) -> SupplierResult<Json<Supplier>> {
    Ok(Json(service.update_supplier(id, input).await?))
}

/// Delete a supplier that no product references
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Supplier deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_supplier<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
    IdPath(id): IdPath,
) -> SupplierResult<Json<MessageResponse>> {
    if !service.delete_supplier(id).await? {
        return Err(SupplierError::NotFound(id));
    }

    Ok(Json(MessageResponse::new(format!(
        "Supplier with ID {} deleted successfully",
        id
    ))))
}

/// All suppliers, `[]` when there are none
#[utoipa::path(
    get,
    path = "/get-all",
    tag = TAG,
    responses(
        (status = 200, description = "List of suppliers", body = Vec<Supplier>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_suppliers<R: SupplierRepository>(
    State(service): State<Arc<SupplierService<R>>>,
) -> SupplierResult<Json<Vec<Supplier>>> {
    Ok(Json(service.list_suppliers().await?))
}
