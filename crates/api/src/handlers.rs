pub mod barbershop;
pub mod booking;
pub mod home;
