use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBarbershop, DbBarbershopService, DbBooking, DbBookingDetail, DbUser};

// Mock repositories for testing
mock! {
    pub BarbershopRepo {
        pub async fn list_barbershops(&self) -> eyre::Result<Vec<DbBarbershop>>;

        pub async fn list_popular_barbershops(&self) -> eyre::Result<Vec<DbBarbershop>>;

        pub async fn search_barbershops(
            &self,
            name_contains: Option<&'static str>,
            service_name: Option<&'static str>,
        ) -> eyre::Result<Vec<DbBarbershop>>;

        pub async fn get_barbershop_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBarbershop>>;
    }
}

mock! {
    pub ServiceRepo {
        pub async fn get_services_by_barbershop_id(
            &self,
            barbershop_id: Uuid,
        ) -> eyre::Result<Vec<DbBarbershopService>>;

        pub async fn get_service_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBarbershopService>>;
    }
}

mock! {
    pub BookingRepo {
        pub async fn fetch_bookings(
            &self,
            service_id: Uuid,
            start: DateTime<Utc>,
            end: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBooking>>;

        pub async fn create_booking(
            &self,
            service_id: Uuid,
            user_id: Uuid,
            date: DateTime<Utc>,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_upcoming_bookings_for_user(
            &self,
            user_id: Uuid,
            from: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBookingDetail>>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}
