use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/services/:id/bookings",
            get(handlers::booking::get_service_bookings),
        )
        .route(
            "/api/services/:id/slots",
            get(handlers::booking::get_available_slots),
        )
        .route(
            "/api/bookings",
            get(handlers::booking::get_user_bookings).post(handlers::booking::create_booking),
        )
}
