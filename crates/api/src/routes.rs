pub mod barbershop;
pub mod booking;
pub mod health;
pub mod home;
