//! # Booking Handlers
//!
//! Slot availability, per-day booking lookup and booking creation.
//!
//! Bookings are stored as UTC instants while slots are shop-local times of
//! day. Every handler converts stored bookings with the configured offset
//! before comparing them against the slot catalogue.
//!
//! Booking creation re-checks availability right before writing, and the
//! insert itself is keyed on `(service_id, date)`, so two requests racing for
//! the same slot cannot both succeed: the loser gets `409 Conflict`.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use barberbook_core::{
    booking::{ensure_offerable, ConfirmedSlot},
    errors::BookingError,
    models::{
        barbershop::format_brl,
        booking::{
            BookingDetail, BookingResponse, CreateBookingRequest, CreateBookingResponse,
            ServiceBookingsResponse, UserBookingsResponse,
        },
    },
    slots::{local_day_bounds, to_local, to_utc, DaySlots},
};
use barberbook_db::models::{DbBarbershopService, DbBooking, DbBookingDetail};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::{
    middleware::{auth::CurrentUser, error_handling::AppError},
    ApiState,
};

/// Query parameters selecting a calendar day
///
/// When `date` is omitted the current shop-local day is used.
#[derive(Debug, Default, Deserialize)]
pub struct DayQuery {
    pub date: Option<NaiveDate>,
}

/// Local wall-clock times of the given bookings
pub fn booked_local_times(bookings: &[DbBooking], offset: FixedOffset) -> Vec<NaiveDateTime> {
    bookings
        .iter()
        .map(|booking| to_local(booking.date, offset))
        .collect()
}

/// Runs the availability filter for one day over stored bookings
pub fn day_slots(
    day: NaiveDate,
    bookings: &[DbBooking],
    offset: FixedOffset,
    now: NaiveDateTime,
) -> DaySlots {
    DaySlots::for_day(day, &booked_local_times(bookings, offset), now)
}

pub fn booking_response(booking: DbBooking, offset: FixedOffset) -> BookingResponse {
    BookingResponse {
        id: booking.id,
        service_id: booking.service_id,
        date: booking.date,
        local_date: to_local(booking.date, offset),
    }
}

pub fn booking_detail(booking: DbBookingDetail, offset: FixedOffset) -> BookingDetail {
    BookingDetail {
        id: booking.id,
        date: booking.date,
        local_date: to_local(booking.date, offset),
        service_id: booking.service_id,
        service_name: booking.service_name,
        price: format_brl(booking.price_cents),
        barbershop_id: booking.barbershop_id,
        barbershop_name: booking.barbershop_name,
        barbershop_image_url: booking.barbershop_image_url,
    }
}

async fn require_service(state: &ApiState, id: Uuid) -> Result<DbBarbershopService, AppError> {
    let service = barberbook_db::repositories::service::get_service_by_id(&state.db_pool, id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::NotFound(format!("Service with ID {} not found", id)))?;

    Ok(service)
}

async fn bookings_between(
    state: &ApiState,
    service_id: Uuid,
    (start, end): (DateTime<Utc>, DateTime<Utc>),
) -> Result<Vec<DbBooking>, AppError> {
    let bookings = barberbook_db::repositories::booking::fetch_bookings(&state.db_pool, service_id, start, end)
        .await
        .map_err(BookingError::Database)?;

    Ok(bookings)
}

/// `GET /api/services/:id/bookings?date=YYYY-MM-DD`
#[axum::debug_handler]
pub async fn get_service_bookings(
    State(state): State<Arc<ApiState>>,
    Path(service_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<ServiceBookingsResponse>, AppError> {
    let day = query.date.unwrap_or_else(|| state.local_now().date());
    let bounds = local_day_bounds(day, state.utc_offset)?;
    require_service(&state, service_id).await?;

    let bookings = bookings_between(&state, service_id, bounds).await?;

    Ok(Json(ServiceBookingsResponse {
        service_id,
        date: day,
        bookings: bookings
            .into_iter()
            .map(|booking| booking_response(booking, state.utc_offset))
            .collect(),
    }))
}

/// `GET /api/services/:id/slots?date=YYYY-MM-DD`
///
/// Returns the slots of each period that can still be offered on the day:
/// past slots of the current day and already-booked slots are left out.
#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<ApiState>>,
    Path(service_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DaySlots>, AppError> {
    let now = state.local_now();
    let day = query.date.unwrap_or_else(|| now.date());
    let bounds = local_day_bounds(day, state.utc_offset)?;
    require_service(&state, service_id).await?;

    let bookings = bookings_between(&state, service_id, bounds).await?;

    Ok(Json(day_slots(day, &bookings, state.utc_offset, now)))
}

/// `POST /api/bookings`
///
/// # Errors
///
/// * `BookingError::Authentication` - no caller identity, or an unknown user
/// * `BookingError::Validation` - day or time missing, time not offered, or
///   the day is outside the representable range
/// * `BookingError::NotFound` - the service does not exist
/// * `BookingError::Conflict` - the slot has passed or is already taken
/// * `BookingError::Database` - persistence failure
#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<CreateBookingResponse>), AppError> {
    // Nothing is written until both day and time are chosen
    let Some(ConfirmedSlot { day, time }) = payload.selection().confirm() else {
        return Err(AppError(BookingError::Validation(
            "Select a day and a time before confirming".to_string(),
        )));
    };
    let local_date = time.on(day);
    let bounds = local_day_bounds(day, state.utc_offset)?;
    let date = to_utc(local_date, state.utc_offset)?;

    barberbook_db::repositories::user::get_user_by_id(&state.db_pool, user_id)
        .await
        .map_err(BookingError::Database)?
        .ok_or_else(|| BookingError::Authentication(format!("Unknown user {}", user_id)))?;

    require_service(&state, payload.service_id).await?;

    let bookings = bookings_between(&state, payload.service_id, bounds).await?;
    ensure_offerable(
        time,
        day,
        &booked_local_times(&bookings, state.utc_offset),
        state.local_now(),
    )?;

    let booking = barberbook_db::repositories::booking::create_booking(
        &state.db_pool,
        payload.service_id,
        user_id,
        date,
    )
    .await
    .map_err(BookingError::Database)?
    .ok_or_else(|| BookingError::Conflict(format!("{} on {} is already booked", time, day)))?;

    info!(
        "Booking created: id={}, service_id={}, date={}",
        booking.id, booking.service_id, booking.date
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            id: booking.id,
            service_id: booking.service_id,
            date: booking.date,
            local_date,
        }),
    ))
}

/// `GET /api/bookings`: the caller's bookings that have not happened yet
#[axum::debug_handler]
pub async fn get_user_bookings(
    State(state): State<Arc<ApiState>>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<UserBookingsResponse>, AppError> {
    let bookings = barberbook_db::repositories::booking::get_upcoming_bookings_for_user(
        &state.db_pool,
        user_id,
        Utc::now(),
    )
    .await
    .map_err(BookingError::Database)?;

    Ok(Json(UserBookingsResponse {
        bookings: bookings
            .into_iter()
            .map(|booking| booking_detail(booking, state.utc_offset))
            .collect(),
    }))
}
