// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cmp::Ordering, fmt::Display};

use crate::{Contact, Date, Department, Location, Meridiem, TimeSlot};

const MINUTES_IN_HOUR: u32 = 60;
const NOON: u32 = 12;

/// The fields that identify an event on the calendar.
///
/// Two events with the same key are the same event, whatever their contact
/// or duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKey {
    /// The event date.
    pub date: Date,

    /// The start time.
    pub start: TimeSlot,

    /// The room.
    pub location: Location,
}

impl EventKey {
    /// Creates a new key.
    pub fn new(date: Date, start: TimeSlot, location: Location) -> Self {
        Self {
            date,
            start,
            location,
        }
    }
}

/// An event scheduled on the calendar.
///
/// Equality only looks at the [`EventKey`]. Ordering by schedule is a
/// separate, coarser relation, see [`Event::cmp_schedule`].
#[derive(Debug, Clone)]
pub struct Event {
    key: EventKey,
    contact: Contact,
    duration: u32,
}

impl Event {
    /// Creates a new event; `duration` is in minutes.
    pub fn new(key: EventKey, contact: Contact, duration: u32) -> Self {
        Self {
            key,
            contact,
            duration,
        }
    }

    /// The identifying fields of the event.
    pub fn key(&self) -> &EventKey {
        &self.key
    }

    /// The event date.
    pub fn date(&self) -> Date {
        self.key.date
    }

    /// The start time slot.
    pub fn start(&self) -> TimeSlot {
        self.key.start
    }

    /// The room the event takes place in.
    pub fn location(&self) -> Location {
        self.key.location
    }

    /// The responsible contact.
    pub fn contact(&self) -> &Contact {
        &self.contact
    }

    /// The responsible department.
    pub fn department(&self) -> Department {
        self.contact.department()
    }

    /// The duration in minutes.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Compares by date, then by start time slot.
    ///
    /// Events at the same date and slot in different rooms compare equal
    /// here while being different events.
    pub fn cmp_schedule(&self, other: &Self) -> Ordering {
        self.key
            .date
            .cmp(&other.key.date)
            .then_with(|| self.key.start.cmp(&other.key.start))
    }

    /// When the event finishes.
    pub fn end(&self) -> EndTime {
        EndTime::after(self.key.start, self.duration)
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Event {}

impl PartialEq<EventKey> for Event {
    fn eq(&self, other: &EventKey) -> bool {
        self.key == *other
    }
}

/// Formats as
/// `[Event Date: m/d/yyyy] [Start: h:MMam] [End: h:MMpm] @CODE (Building, Campus) [Contact: Department, email]`.
impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Event Date: {}] [Start: {}] [End: {}] @{} [Contact: {}]",
            self.key.date,
            self.key.start,
            self.end(),
            self.key.location,
            self.contact
        )
    }
}

/// The end time of an event as shown on the calendar.
///
/// The hour is never folded back onto a 12-hour dial: an event running past
/// noon from the morning slot can end at `13:00pm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndTime {
    /// Hour, counted up from the start hour.
    pub hour: u32,

    /// Minute past the hour, below 60.
    pub minute: u32,

    /// Half of the day.
    pub meridiem: Meridiem,
}

impl EndTime {
    /// Adds `duration` minutes to the start of `slot`.
    pub fn after(slot: TimeSlot, duration: u32) -> Self {
        let mut hour = slot.hour();
        let mut minute = slot.minute() + duration;
        let mut meridiem = slot.meridiem();
        while minute >= MINUTES_IN_HOUR {
            hour += 1;
            minute -= MINUTES_IN_HOUR;
            if hour >= NOON {
                meridiem = Meridiem::Pm;
            }
        }

        Self {
            hour,
            minute,
            meridiem,
        }
    }
}

impl Display for EndTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}{}", self.hour, self.minute, self.meridiem)
    }
}
