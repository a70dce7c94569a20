use crate::models::{DbBooking, DbBookingDetail};
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Bookings of one service with `start <= date < end`
pub async fn fetch_bookings(
    pool: &Pool<Postgres>,
    service_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<Vec<DbBooking>> {
    let bookings = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, service_id, user_id, date, created_at
        FROM bookings
        WHERE service_id = $1 AND date >= $2 AND date < $3
        ORDER BY date ASC
        "#,
    )
    .bind(service_id)
    .bind(start)
    .bind(end)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

/// Inserts a booking, returning `None` when the service already has one at `date`
pub async fn create_booking(
    pool: &Pool<Postgres>,
    service_id: Uuid,
    user_id: Uuid,
    date: DateTime<Utc>,
) -> Result<Option<DbBooking>> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, service_id={}, user_id={}, date={}",
        id, service_id, user_id, date
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, service_id, user_id, date, created_at)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (service_id, date) DO NOTHING
        RETURNING id, service_id, user_id, date, created_at
        "#,
    )
    .bind(id)
    .bind(service_id)
    .bind(user_id)
    .bind(date)
    .bind(now)
    .fetch_optional(pool)
    .await?;

    if booking.is_none() {
        tracing::debug!("Booking slot already taken: service_id={}, date={}", service_id, date);
    }

    Ok(booking)
}

/// A user's bookings from `from` onwards, soonest first
pub async fn get_upcoming_bookings_for_user(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    from: DateTime<Utc>,
) -> Result<Vec<DbBookingDetail>> {
    let bookings = sqlx::query_as::<_, DbBookingDetail>(
        r#"
        SELECT bk.id, bk.date, s.id AS service_id, s.name AS service_name, s.price_cents,
               b.id AS barbershop_id, b.name AS barbershop_name,
               b.image_url AS barbershop_image_url
        FROM bookings bk
        JOIN barbershop_services s ON s.id = bk.service_id
        JOIN barbershops b ON b.id = s.barbershop_id
        WHERE bk.user_id = $1 AND bk.date >= $2
        ORDER BY bk.date ASC
        "#,
    )
    .bind(user_id)
    .bind(from)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}
