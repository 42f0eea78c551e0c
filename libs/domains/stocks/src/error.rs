use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StockError {
    #[error("Stock for product ID {0} not found")]
    NotFound(i32),

    #[error("Stock for product ID {0} already exists")]
    AlreadyExists(i32),

    #[error("Database error: {0}")]
    Database(String),
}

pub type StockResult<T> = Result<T, StockError>;

impl From<StockError> for AppError {
    fn from(err: StockError) -> Self {
        match err {
            StockError::NotFound(_) => AppError::NotFound(err.to_string()),
            StockError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            StockError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for StockError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for StockError {
    fn from(err: DbErr) -> Self {
        StockError::Database(err.to_string())
    }
}
