//! # Slot Catalogue and Availability
//!
//! Every service offers the same fixed set of time-of-day slots, split into
//! three periods of the day. This module holds that catalogue and the filter
//! that decides which of those slots can still be offered for a given day.
//!
//! All times here are shop-local wall-clock values. Conversion from the UTC
//! instants stored in the database happens through [`to_local`] and
//! [`local_day_bounds`] before the filter is applied.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// A wall-clock time of day at which a service can be booked
///
/// Serialized as an `"HH:MM"` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u32,
    minute: u32,
}

pub const MORNING_SLOTS: [TimeSlot; 3] = [
    TimeSlot::at(9, 0),
    TimeSlot::at(10, 0),
    TimeSlot::at(11, 0),
];

pub const AFTERNOON_SLOTS: [TimeSlot; 6] = [
    TimeSlot::at(13, 0),
    TimeSlot::at(14, 0),
    TimeSlot::at(15, 0),
    TimeSlot::at(16, 0),
    TimeSlot::at(17, 0),
    TimeSlot::at(18, 0),
];

pub const EVENING_SLOTS: [TimeSlot; 2] = [TimeSlot::at(19, 0), TimeSlot::at(20, 0)];

impl TimeSlot {
    // Catalogue entries only; callers go through `new` or `from_str`.
    const fn at(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    /// Builds a slot, rejecting out-of-range hours or minutes
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Combines the slot with a calendar day into a local date-time
    pub fn on(&self, day: NaiveDate) -> NaiveDateTime {
        day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(self.hour * 60 + self.minute))
    }

    /// Whether a local date-time falls on this slot's hour and minute
    pub fn matches(&self, time: &NaiveDateTime) -> bool {
        time.hour() == self.hour && time.minute() == self.minute
    }

    /// Whether the slot belongs to one of the three fixed period lists
    pub fn is_catalogued(&self) -> bool {
        DayPeriod::ALL
            .iter()
            .any(|period| period.candidates().contains(self))
    }

    /// The period of the day whose candidate list holds this slot
    pub fn period(&self) -> Option<DayPeriod> {
        DayPeriod::ALL
            .into_iter()
            .find(|period| period.candidates().contains(self))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::Validation(format!("Invalid time '{}', expected HH:MM", s));

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.len() != 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour = hour.parse::<u32>().map_err(|_| invalid())?;
        let minute = minute.parse::<u32>().map_err(|_| invalid())?;

        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Morning, afternoon or evening, each with its own candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub const ALL: [DayPeriod; 3] = [DayPeriod::Morning, DayPeriod::Afternoon, DayPeriod::Evening];

    pub fn candidates(&self) -> &'static [TimeSlot] {
        match self {
            DayPeriod::Morning => &MORNING_SLOTS,
            DayPeriod::Afternoon => &AFTERNOON_SLOTS,
            DayPeriod::Evening => &EVENING_SLOTS,
        }
    }
}

/// Filters a candidate list down to the slots that can still be offered
///
/// A candidate is dropped when:
///
/// - `day` is the same calendar day as `now` and the slot's instant is
///   strictly before `now`, or
/// - some entry of `booked_on_day` has the same hour and minute.
///
/// `booked_on_day` must already be narrowed to the same service and day; only
/// the time of day of each entry is compared. The result keeps the candidates'
/// order and never contains a slot that was not a candidate.
pub fn available_slots(
    candidates: &[TimeSlot],
    day: NaiveDate,
    booked_on_day: &[NaiveDateTime],
    now: NaiveDateTime,
) -> Vec<TimeSlot> {
    let is_today = day == now.date();

    candidates
        .iter()
        .filter(|slot| !(is_today && slot.on(day) < now))
        .filter(|slot| !booked_on_day.iter().any(|booked| slot.matches(booked)))
        .copied()
        .collect()
}

/// The offerable slots of one day, grouped by period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub morning: Vec<TimeSlot>,
    pub afternoon: Vec<TimeSlot>,
    pub evening: Vec<TimeSlot>,
}

impl DaySlots {
    pub fn for_day(day: NaiveDate, booked_on_day: &[NaiveDateTime], now: NaiveDateTime) -> Self {
        let filter = |period: DayPeriod| available_slots(period.candidates(), day, booked_on_day, now);

        Self {
            date: day,
            morning: filter(DayPeriod::Morning),
            afternoon: filter(DayPeriod::Afternoon),
            evening: filter(DayPeriod::Evening),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty() && self.evening.is_empty()
    }
}

/// Converts a stored UTC instant to shop-local wall-clock time
pub fn to_local(instant: DateTime<Utc>, offset: FixedOffset) -> NaiveDateTime {
    instant.with_timezone(&offset).naive_local()
}

/// Converts a shop-local wall-clock time to the UTC instant it denotes
///
/// # Errors
///
/// * `BookingError::Validation` - the instant falls outside chrono's range
pub fn to_utc(local: NaiveDateTime, offset: FixedOffset) -> BookingResult<DateTime<Utc>> {
    local
        .checked_sub_signed(Duration::seconds(i64::from(offset.local_minus_utc())))
        .map(|utc| utc.and_utc())
        .ok_or_else(out_of_range)
}

/// UTC range `[start, end)` covering one shop-local calendar day
///
/// # Errors
///
/// * `BookingError::Validation` - either bound falls outside chrono's range,
///   which only happens at the extremes of `NaiveDate`
pub fn local_day_bounds(
    day: NaiveDate,
    offset: FixedOffset,
) -> BookingResult<(DateTime<Utc>, DateTime<Utc>)> {
    let start = to_utc(day.and_time(NaiveTime::MIN), offset)?;
    let end = start
        .checked_add_signed(Duration::days(1))
        .ok_or_else(out_of_range)?;

    Ok((start, end))
}

fn out_of_range() -> BookingError {
    BookingError::Validation("date out of range".to_string())
}
