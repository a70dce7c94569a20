//! # BarberBook Core
//!
//! Domain types shared by the database and API crates: the fixed slot
//! catalogue, the slot availability filter, booking selection and the
//! request/response models exchanged over HTTP.

pub mod booking;
pub mod errors;
pub mod models;
pub mod slots;
