use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/barbershops", get(handlers::barbershop::search_barbershops))
        .route("/api/barbershops/:id", get(handlers::barbershop::get_barbershop))
}
