use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup by id found nothing. Carries the entity name for the body text.
    #[error("{0} Not Found")]
    NotFound(&'static str),
    /// Bulk column update affected zero rows.
    #[error("Not Updated")]
    NotUpdated,
    #[error("Invalid Request: {0}")]
    InvalidRequest(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::NotUpdated | AppError::InvalidRequest(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Db(err) => {
                tracing::error!(error = %err, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };
        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
