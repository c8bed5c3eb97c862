// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::date::SIX_MONTHS;
use crate::{Clock, Contact, Date, Department, EMAIL_DOMAIN, Event, EventKey, Location, TimeSlot};

/// The shortest event that can be booked, in minutes.
pub const MIN_DURATION: u32 = 30;

/// The longest event that can be booked, in minutes.
pub const MAX_DURATION: u32 = 120;

/// The identity of an event as read from a command, before validation.
///
/// Unknown time slot or location codes are kept as `None` so that the
/// rejection reported follows the validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventKeyDraft {
    /// The event date, possibly invalid.
    pub date: Date,

    /// The start time slot, if the code was recognized.
    pub start: Option<TimeSlot>,

    /// The room, if the code was recognized.
    pub location: Option<Location>,
}

/// An event as read from a command, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    /// The identifying fields.
    pub key: EventKeyDraft,

    /// The department, if the code was recognized.
    pub department: Option<Department>,

    /// The contact email, unchecked.
    pub email: String,

    /// The duration in minutes, unchecked.
    pub duration: i32,
}

/// Why a command was refused. The message is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    /// The date does not exist.
    #[error("{0}: Invalid calendar date!")]
    InvalidDate(Date),

    /// The date is today or earlier.
    #[error("{0}: Event date must be a future date!")]
    PastDate(Date),

    /// The date is past the booking horizon.
    #[error("{date}: Event date must be within {months} months!")]
    BeyondHorizon {
        /// The requested date
        date: Date,
        /// The horizon in months
        months: u32,
    },

    /// The time slot code is unknown.
    #[error("Invalid time slot!")]
    InvalidTimeSlot,

    /// The location code is unknown.
    #[error("Invalid location!")]
    InvalidLocation,

    /// The department is unknown or the email is not a university address.
    #[error("Invalid contact information!")]
    InvalidContact,

    /// The duration is out of bounds.
    #[error("Event duration must be at least {min} minutes and at most {max} minutes")]
    InvalidDuration {
        /// Shortest allowed duration
        min: u32,
        /// Longest allowed duration
        max: u32,
    },

    /// An equal event is already on the calendar.
    #[error("The event is already on the calendar.")]
    Duplicate,

    /// No equal event is on the calendar.
    #[error("Cannot remove; event is not in the calendar!")]
    NotFound,
}

/// Booking rules applied to every event.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Shortest allowed duration, in minutes.
    pub min_duration: u32,

    /// Longest allowed duration, in minutes.
    pub max_duration: u32,

    /// Suffix every contact email must end with.
    pub email_suffix: String,

    /// How many months ahead events may be booked.
    pub horizon_months: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_duration: MIN_DURATION,
            max_duration: MAX_DURATION,
            email_suffix: EMAIL_DOMAIN.to_string(),
            horizon_months: SIX_MONTHS,
        }
    }
}

impl Rules {
    /// Checks the identity of an event, in order: calendar date, future
    /// date, horizon, time slot, location.
    pub fn check_key(
        &self,
        clock: &impl Clock,
        draft: &EventKeyDraft,
    ) -> Result<EventKey, Rejection> {
        let date = draft.date;
        if !date.is_valid() {
            return Err(Rejection::InvalidDate(date));
        }
        if !date.is_future(clock) {
            return Err(Rejection::PastDate(date));
        }
        if !date.is_within_months(clock, self.horizon_months) {
            return Err(Rejection::BeyondHorizon {
                date,
                months: self.horizon_months,
            });
        }

        let start = draft.start.ok_or(Rejection::InvalidTimeSlot)?;
        let location = draft.location.ok_or(Rejection::InvalidLocation)?;
        Ok(EventKey::new(date, start, location))
    }

    /// Checks a whole event: its identity first, then contact and duration.
    pub fn check_event(&self, clock: &impl Clock, draft: EventDraft) -> Result<Event, Rejection> {
        let key = self.check_key(clock, &draft.key)?;

        let contact = draft
            .department
            .map(|department| Contact::new(department, draft.email))
            .filter(|contact| contact.is_valid_with(&self.email_suffix))
            .ok_or(Rejection::InvalidContact)?;

        let duration = u32::try_from(draft.duration)
            .ok()
            .filter(|d| (self.min_duration..=self.max_duration).contains(d))
            .ok_or(Rejection::InvalidDuration {
                min: self.min_duration,
                max: self.max_duration,
            })?;

        Ok(Event::new(key, contact, duration))
    }
}
