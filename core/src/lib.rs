// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the event organizer: dates, rooms, departments, events, the
//! calendar holding them and the rules an event must satisfy.

mod calendar;
mod clock;
mod config;
mod contact;
mod date;
mod department;
mod error;
mod event;
mod location;
mod rules;
mod timeslot;

pub use crate::calendar::{Calendar, Listing};
pub use crate::clock::{Clock, FixedClock, SystemClock};
pub use crate::config::{APP_NAME, Config, MalformedPolicy};
pub use crate::contact::{Contact, EMAIL_DOMAIN};
pub use crate::date::{Date, SIX_MONTHS};
pub use crate::department::Department;
pub use crate::error::ParseError;
pub use crate::event::{EndTime, Event, EventKey};
pub use crate::location::{Campus, Location};
pub use crate::rules::{
    EventDraft, EventKeyDraft, MAX_DURATION, MIN_DURATION, Rejection, Rules,
};
pub use crate::timeslot::{Meridiem, TimeSlot};
