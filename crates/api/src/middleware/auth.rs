//! # Caller Identity
//!
//! Sessions are provisioned outside this service. By the time a request
//! reaches the API, the session layer in front of it has resolved the caller
//! and forwards the user's id in the `x-user-id` header. The extractors here
//! turn that header into a typed user id.

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::{request::Parts, HeaderName}};
use barberbook_core::errors::BookingError;
use uuid::Uuid;

use crate::middleware::error_handling::AppError;

/// Header carrying the authenticated user's id
pub const USER_ID_HEADER: HeaderName = HeaderName::from_static("x-user-id");

/// The identified caller; rejects the request with 401 when absent
///
/// # Example
///
/// ```ignore
/// async fn handler(CurrentUser(user_id): CurrentUser) -> String {
///     user_id.to_string()
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

/// The caller's id when one was supplied, for endpoints open to visitors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaybeUser(pub Option<Uuid>);

fn user_id_from_parts(parts: &Parts) -> Result<Option<Uuid>, AppError> {
    let Some(value) = parts.headers.get(&USER_ID_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|raw| Uuid::parse_str(raw.trim()).ok())
        .map(Some)
        .ok_or_else(|| {
            AppError(BookingError::Authentication(format!(
                "Malformed {} header",
                USER_ID_HEADER
            )))
        })
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_parts(parts)?
            .map(CurrentUser)
            .ok_or_else(|| AppError(BookingError::Authentication("Sign in to continue".to_string())))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        user_id_from_parts(parts).map(MaybeUser)
    }
}
