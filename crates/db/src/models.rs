use barberbook_core::models::{
    barbershop::{Barbershop, BarbershopService},
    booking::Booking,
    user::User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarbershop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub description: String,
    pub image_url: String,
    pub phones: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBarbershopService {
    pub id: Uuid,
    pub barbershop_id: Uuid,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price_cents: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A booking joined with its service and barbershop
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingDetail {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub service_id: Uuid,
    pub service_name: String,
    pub price_cents: i64,
    pub barbershop_id: Uuid,
    pub barbershop_name: String,
    pub barbershop_image_url: String,
}

impl From<DbUser> for User {
    fn from(user: DbUser) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            image_url: user.image_url,
        }
    }
}

impl From<DbBarbershop> for Barbershop {
    fn from(barbershop: DbBarbershop) -> Self {
        Self {
            id: barbershop.id,
            name: barbershop.name,
            address: barbershop.address,
            description: barbershop.description,
            image_url: barbershop.image_url,
            phones: barbershop.phones,
        }
    }
}

impl From<DbBarbershopService> for BarbershopService {
    fn from(service: DbBarbershopService) -> Self {
        Self {
            id: service.id,
            barbershop_id: service.barbershop_id,
            name: service.name,
            description: service.description,
            image_url: service.image_url,
            price_cents: service.price_cents,
        }
    }
}

impl From<DbBooking> for Booking {
    fn from(booking: DbBooking) -> Self {
        Self {
            id: booking.id,
            service_id: booking.service_id,
            user_id: booking.user_id,
            date: booking.date,
            created_at: booking.created_at,
        }
    }
}
