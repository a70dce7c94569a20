pub mod barbershop;
pub mod booking;
pub mod home;
pub mod user;
