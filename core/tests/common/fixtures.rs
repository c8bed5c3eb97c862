// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use eventorg_core::{
    Contact, Date, Department, Event, EventDraft, EventKey, EventKeyDraft, FixedClock, Location,
    TimeSlot,
};

/// The date every integration test treats as today.
pub const TODAY: Date = Date::new(2023, 10, 20);

/// A clock frozen on [`TODAY`].
#[must_use]
pub fn clock() -> FixedClock {
    FixedClock(TODAY)
}

/// Creates an event key in December 2023, which is within the horizon of [`TODAY`].
#[must_use]
pub fn test_key(day: i32, start: TimeSlot, location: Location) -> EventKey {
    EventKey::new(Date::new(2023, 12, day), start, location)
}

/// Creates an event with a one hour duration.
#[must_use]
pub fn test_event(key: EventKey, department: Department) -> Event {
    let email = format!("{}@rutgers.edu", department.as_ref().to_lowercase());
    Event::new(key, Contact::new(department, email), 60)
}

/// Creates a draft that passes every rule against [`TODAY`].
#[must_use]
pub fn test_draft(key: EventKey, department: Department, duration: i32) -> EventDraft {
    EventDraft {
        key: EventKeyDraft {
            date: key.date,
            start: Some(key.start),
            location: Some(key.location),
        },
        department: Some(department),
        email: "organizer@rutgers.edu".to_string(),
        duration,
    }
}
