//! # Error Handling Middleware
//!
//! Maps `BookingError` values to HTTP status codes and a JSON body of the
//! form `{ "error": "<message>" }`, so every handler reports failures the
//! same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use barberbook_core::errors::BookingError;
use serde_json::json;
use tracing::error;

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```ignore
/// async fn handler(id: Uuid) -> Result<Json<Barbershop>, AppError> {
///     let barbershop = repository
///         .get_barbershop(id)
///         .await?
///         .ok_or_else(|| BookingError::NotFound(format!("Barbershop with ID {} not found", id)))?;
///     Ok(Json(barbershop))
/// }
/// ```
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full but reported generically
        let message = if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
            "Something went wrong, please try again later".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on `Result<T, BookingError>` inside handlers
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as database errors
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Database(err))
    }
}

/// Maps a BookingError to an HTTP response
pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
