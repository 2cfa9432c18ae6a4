//! The in-progress reservation and the closed sets its fields draw from.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::BookingError;

/// Party sizes a guest can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartySize {
    One,
    Two,
    Three,
    Four,
    FivePlus,
}

impl PartySize {
    pub const ALL: [PartySize; 5] = [
        PartySize::One,
        PartySize::Two,
        PartySize::Three,
        PartySize::Four,
        PartySize::FivePlus,
    ];

    /// Label shown on the chip and in the summary.
    pub fn label(self) -> &'static str {
        match self {
            PartySize::One => "1",
            PartySize::Two => "2",
            PartySize::Three => "3",
            PartySize::Four => "4",
            PartySize::FivePlus => "5+",
        }
    }
}

impl fmt::Display for PartySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PartySize {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PartySize::ALL
            .into_iter()
            .find(|size| size.label() == s)
            .ok_or_else(|| BookingError::UnknownPartySize(s.to_string()))
    }
}

/// Bookable evening slots, in display order.
pub const TIME_SLOTS: [&str; 8] = [
    "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
];

/// One of the fixed half-hour seatings.
///
/// Slots do not depend on the date or the party size; nothing tracks
/// availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeSlot(usize);

impl TimeSlot {
    /// All slots, earliest first.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOTS.len()).map(TimeSlot)
    }

    pub fn label(self) -> &'static str {
        TIME_SLOTS[self.0]
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TIME_SLOTS
            .iter()
            .position(|slot| *slot == s)
            .map(TimeSlot)
            .ok_or_else(|| BookingError::UnknownTimeSlot(s.to_string()))
    }
}

/// Fields collected by the booking form. Unset fields are `None` or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingDraft {
    pub party_size: Option<PartySize>,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
    pub customer_name: String,
    pub customer_phone: String,
}

impl BookingDraft {
    /// True once party size, date and time have all been chosen.
    pub fn is_step1_valid(&self) -> bool {
        self.party_size.is_some() && self.date.is_some() && self.time.is_some()
    }

    /// True once both contact fields are non-empty.
    pub fn has_contact_details(&self) -> bool {
        !self.customer_name.is_empty() && !self.customer_phone.is_empty()
    }

    /// Builds the finalized record if every field is present.
    pub fn to_reservation(&self) -> Option<Reservation> {
        if !self.has_contact_details() {
            return None;
        }
        Some(Reservation {
            party_size: self.party_size?,
            date: self.date?,
            time: self.time?,
            customer_name: self.customer_name.clone(),
            customer_phone: self.customer_phone.clone(),
        })
    }
}

/// A confirmed booking. Lives only in memory; handed to whoever hosts the
/// widget and then dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub party_size: PartySize,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub customer_name: String,
    pub customer_phone: String,
}
