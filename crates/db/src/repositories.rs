pub mod barbershop;
pub mod booking;
pub mod service;
pub mod user;
