use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{BookingError, BookingResult},
    slots::TimeSlot,
};

/// The day and time a user has picked so far
///
/// Either half may still be missing while the user is choosing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSelection {
    pub day: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl BookingSelection {
    pub fn new(day: Option<NaiveDate>, time: Option<TimeSlot>) -> Self {
        Self { day, time }
    }

    /// The slot to reserve, or `None` until both day and time are chosen
    pub fn confirm(&self) -> Option<ConfirmedSlot> {
        match (self.day, self.time) {
            (Some(day), Some(time)) => Some(ConfirmedSlot { day, time }),
            _ => None,
        }
    }
}

/// A complete day-and-time choice, ready to be reserved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmedSlot {
    pub day: NaiveDate,
    pub time: TimeSlot,
}

impl ConfirmedSlot {
    pub fn local_date(&self) -> NaiveDateTime {
        self.time.on(self.day)
    }
}

/// Re-checks at creation time that `slot` on `day` can still be reserved
///
/// `booked_on_day` holds the local times already booked for the same service
/// on `day`.
///
/// # Errors
///
/// * `BookingError::Validation` - the slot is not part of the catalogue
/// * `BookingError::Conflict` - the slot has already passed or is taken
pub fn ensure_offerable(
    slot: TimeSlot,
    day: NaiveDate,
    booked_on_day: &[NaiveDateTime],
    now: NaiveDateTime,
) -> BookingResult<()> {
    if !slot.is_catalogued() {
        return Err(BookingError::Validation(format!(
            "{} is not an offered time slot",
            slot
        )));
    }

    if slot.on(day) < now {
        return Err(BookingError::Conflict(format!(
            "{} on {} has already passed",
            slot, day
        )));
    }

    if booked_on_day.iter().any(|booked| slot.matches(booked)) {
        return Err(BookingError::Conflict(format!(
            "{} on {} is already booked",
            slot, day
        )));
    }

    Ok(())
}
