use axum::{
    extract::{Path, Query, State},
    Json,
};
use barberbook_core::{
    errors::BookingError,
    models::barbershop::{
        Barbershop, BarbershopService, GetBarbershopResponse, SearchBarbershopsResponse,
        ServiceResponse,
    },
};
use barberbook_db::models::{DbBarbershop, DbBarbershopService};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

/// Query parameters for the barbershop search endpoint
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    /// Part of the barbershop name, matched case-insensitively
    pub search: Option<String>,

    /// Part of a service name the barbershop must offer
    pub service: Option<String>,
}

impl SearchQuery {
    /// Blank parameters behave as if they were not supplied
    pub fn normalized(self) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            search: clean(self.search),
            service: clean(self.service),
        }
    }
}

/// Assembles the detail response of a barbershop and its services
pub fn barbershop_response(
    barbershop: DbBarbershop,
    services: Vec<DbBarbershopService>,
) -> GetBarbershopResponse {
    GetBarbershopResponse {
        id: barbershop.id,
        name: barbershop.name,
        address: barbershop.address,
        description: barbershop.description,
        image_url: barbershop.image_url,
        phones: barbershop.phones,
        services: services
            .into_iter()
            .map(|service| ServiceResponse::from(BarbershopService::from(service)))
            .collect(),
    }
}

/// `GET /api/barbershops?search=&service=`
#[axum::debug_handler]
pub async fn search_barbershops(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<SearchBarbershopsResponse>, AppError> {
    let query = query.normalized();

    let barbershops = barberbook_db::repositories::barbershop::search_barbershops(
        &state.db_pool,
        query.search.as_deref(),
        query.service.as_deref(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(SearchBarbershopsResponse {
        search: query.search,
        service: query.service,
        barbershops: barbershops.into_iter().map(Barbershop::from).collect(),
    }))
}

/// `GET /api/barbershops/:id`
#[axum::debug_handler]
pub async fn get_barbershop(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBarbershopResponse>, AppError> {
    let barbershop = barberbook_db::repositories::barbershop::get_barbershop_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Barbershop with ID {} not found", id)))?;

    let services = barberbook_db::repositories::service::get_services_by_barbershop_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?;

    Ok(Json(barbershop_response(barbershop, services)))
}
