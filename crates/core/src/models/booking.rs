use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{booking::BookingSelection, slots::TimeSlot};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub service_id: Uuid,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl CreateBookingRequest {
    pub fn selection(&self) -> BookingSelection {
        BookingSelection::new(self.date, self.time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub id: Uuid,
    pub service_id: Uuid,
    pub date: DateTime<Utc>,
    /// Shop-local wall-clock time of the reservation
    pub local_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub service_id: Uuid,
    pub date: DateTime<Utc>,
    pub local_date: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceBookingsResponse {
    pub service_id: Uuid,
    pub date: NaiveDate,
    pub bookings: Vec<BookingResponse>,
}

/// A user's booking together with the service and barbershop it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetail {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub local_date: NaiveDateTime,
    pub service_id: Uuid,
    pub service_name: String,
    pub price: String,
    pub barbershop_id: Uuid,
    pub barbershop_name: String,
    pub barbershop_image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserBookingsResponse {
    pub bookings: Vec<BookingDetail>,
}
