use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SupplierError {
    #[error("Supplier with ID {0} not found")]
    NotFound(i32),

    #[error("Supplier '{0}' already exists")]
    DuplicateName(String),

    #[error("Supplier {0} is still referenced by products")]
    InUse(i32),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type SupplierResult<T> = Result<T, SupplierError>;

impl From<SupplierError> for AppError {
    fn from(err: SupplierError) -> Self {
        match err {
            SupplierError::NotFound(_) => AppError::NotFound(err.to_string()),
            SupplierError::DuplicateName(_) | SupplierError::InUse(_) => {
                AppError::Conflict(err.to_string())
            }
            SupplierError::Validation(msg) => AppError::BadRequest(msg),
            SupplierError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for SupplierError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<DbErr> for SupplierError {
    fn from(err: DbErr) -> Self {
        SupplierError::Database(err.to_string())
    }
}
