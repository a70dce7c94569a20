use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/home", get(handlers::home::home))
        .route("/api/search-options", get(handlers::home::search_options))
}
