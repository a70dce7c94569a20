use axum::{extract::State, Json};
use barberbook_core::{
    errors::BookingError,
    models::{
        barbershop::Barbershop,
        home::{HomeResponse, QuickSearchOption, QUICK_SEARCH_OPTIONS},
        user::{greeting, User},
    },
};
use chrono::Utc;
use std::sync::Arc;

use crate::{
    handlers::booking::booking_detail,
    middleware::{auth::MaybeUser, error_handling::AppError},
    ApiState,
};

/// `GET /api/home`
///
/// Visitors get the catalogue and a generic greeting; identified users also
/// get their upcoming bookings. An id that matches no user is treated as a
/// visitor.
#[axum::debug_handler]
pub async fn home(
    State(state): State<Arc<ApiState>>,
    MaybeUser(user_id): MaybeUser,
) -> Result<Json<HomeResponse>, AppError> {
    let user = match user_id {
        Some(id) => barberbook_db::repositories::user::get_user_by_id(&state.db_pool, id)
            .await
            .map_err(BookingError::Database)?
            .map(User::from),
        None => None,
    };

    let (barbershops, popular_barbershops) = tokio::try_join!(
        barberbook_db::repositories::barbershop::list_barbershops(&state.db_pool),
        barberbook_db::repositories::barbershop::list_popular_barbershops(&state.db_pool),
    )
    .map_err(BookingError::Database)?;

    let bookings = match &user {
        Some(user) => barberbook_db::repositories::booking::get_upcoming_bookings_for_user(
            &state.db_pool,
            user.id,
            Utc::now(),
        )
        .await
        .map_err(BookingError::Database)?
        .into_iter()
        .map(|booking| booking_detail(booking, state.utc_offset))
        .collect(),
        None => Vec::new(),
    };

    Ok(Json(HomeResponse {
        greeting: greeting(user.as_ref()),
        barbershops: barbershops.into_iter().map(Barbershop::from).collect(),
        popular_barbershops: popular_barbershops.into_iter().map(Barbershop::from).collect(),
        bookings,
        quick_search_options: &QUICK_SEARCH_OPTIONS,
    }))
}

/// `GET /api/search-options`
pub async fn search_options() -> Json<&'static [QuickSearchOption]> {
    let options: &'static [QuickSearchOption] = &QUICK_SEARCH_OPTIONS;
    Json(options)
}
