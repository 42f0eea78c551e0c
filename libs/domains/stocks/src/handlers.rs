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

use crate::error::{StockError, StockResult};
use crate::models::{CreateStock, Stock, UpdateStock};
use crate::repository::StockRepository;
use crate::service::StockService;

/// Mount point below `/api`
pub const URL: &str = "/product-service/stocks";
pub const TAG: &str = "Stocks";

#[derive(OpenApi)]
#[openapi(
    paths(list_stocks, get_stock, create_stock, update_stock, delete_stock),
    components(
        schemas(Stock, CreateStock, UpdateStock, MessageResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            ConflictResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = TAG, description = "Stock level endpoints, keyed by product id")
    )
)]
pub struct ApiDoc;

pub fn router<R: StockRepository + 'static>(service: StockService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/get-all", get(list_stocks))
        .route("/get-by-id/{id}", get(get_stock))
        .route("/add", post(create_stock))
        .route("/update/{id}", put(update_stock))
        .route("/delete/{id}", delete(delete_stock))
        .with_state(shared_service)
}

/// All stock rows ordered by product id
#[utoipa::path(
    get,
    path = "/get-all",
    tag = TAG,
    responses(
        (status = 200, description = "List of stock rows", body = Vec<Stock>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_stocks<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
) -> StockResult<Json<Vec<Stock>>> {
    Ok(Json(service.list_stocks().await?))
}

#[utoipa::path(
    get,
    path = "/get-by-id/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Stock found", body = Stock),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stock<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    IdPath(product_id): IdPath,
) -> StockResult<Json<Stock>> {
    Ok(Json(service.get_stock(product_id).await?))
}

/// Create the stock row of a product
#[utoipa::path(
    post,
    path = "/add",
    tag = TAG,
    request_body = CreateStock,
    responses(
        (status = 201, description = "Stock created", body = Stock),
        (status = 400, response = BadRequestValidationResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_stock<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateStock>,
) -> StockResult<impl IntoResponse> {
    let stock = service.create_stock(input).await?;
    Ok((StatusCode::CREATED, Json(stock)))
}

/// Overwrite only the quantities present in the body
#[utoipa::path(
    put,
    path = "/update/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    request_body = UpdateStock,
    responses(
        (status = 200, description = "Stock updated", body = Stock),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_stock<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    IdPath(product_id): IdPath,
    ValidatedJson(input): ValidatedJson<UpdateStock>,
) -> StockResult<Json<Stock>> {
    Ok(Json(service.update_stock(product_id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Stock deleted", body = MessageResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_stock<R: StockRepository>(
    State(service): State<Arc<StockService<R>>>,
    IdPath(product_id): IdPath,
) -> StockResult<Json<MessageResponse>> {
    if !service.delete_stock(product_id).await? {
        return Err(StockError::NotFound(product_id));
    }

    Ok(Json(MessageResponse::new(format!(
        "Stock with ID {} deleted successfully",
        product_id
    ))))
}
