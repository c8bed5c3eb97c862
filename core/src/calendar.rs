// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::{Event, EventKey};

const INITIAL_CAPACITY: usize = 4;
const CAPACITY_INCREASE: usize = 4;

const EMPTY_MESSAGE: &str = "Event calendar is empty!";
const FOOTER: &str = "* end of event calendar *";

/// The orders the calendar can be listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// The order events are currently stored in.
    Stored,

    /// By date, then start time.
    ByDate,

    /// By campus, then building.
    ByCampus,

    /// By department.
    ByDepartment,
}

impl Listing {
    /// The header line printed before the events.
    pub fn header(&self) -> &'static str {
        match self {
            Listing::Stored => "* Event calendar *",
            Listing::ByDate => "* Event calendar by event date and start time *",
            Listing::ByCampus => "* Event calendar by campus and building *",
            Listing::ByDepartment => "* Event calendar by department *",
        }
    }
}

/// An unordered collection of events.
///
/// Events are kept in insertion order until the calendar is listed in a
/// sorted order; sorting rearranges the stored events, so a later
/// [`Listing::Stored`] print shows the last order applied.
#[derive(Debug, Clone)]
pub struct Calendar {
    events: Vec<Event>,
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}

impl Calendar {
    /// Creates an empty calendar.
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// The number of events on the calendar.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the calendar holds no event.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// The number of events the calendar can hold before growing.
    pub fn capacity(&self) -> usize {
        self.events.capacity()
    }

    /// Iterates over the events in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    /// Appends an event. Duplicates are not checked here.
    pub fn add(&mut self, event: Event) -> bool {
        if self.events.len() == self.events.capacity() {
            self.events.reserve_exact(CAPACITY_INCREASE);
        }
        tracing::debug!(key = ?event.key(), "adding event");
        self.events.push(event);
        true
    }

    /// Removes the event with the given identity, keeping the order of the
    /// remaining events. Returns whether an event was removed.
    pub fn remove(&mut self, key: &EventKey) -> bool {
        match self.find(key) {
            Some(index) => {
                tracing::debug!(?key, index, "removing event");
                self.events.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an event with the given identity is on the calendar.
    pub fn contains(&self, key: &EventKey) -> bool {
        self.find(key).is_some()
    }

    fn find(&self, key: &EventKey) -> Option<usize> {
        self.events.iter().position(|a| a == key)
    }

    /// Prints the events in stored order.
    pub fn print(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.list(Listing::Stored, w)
    }

    /// Sorts by date and start time, then prints.
    pub fn print_by_date(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.list(Listing::ByDate, w)
    }

    /// Sorts by campus and building, then prints.
    pub fn print_by_campus(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.list(Listing::ByCampus, w)
    }

    /// Sorts by department, then prints.
    pub fn print_by_department(&mut self, w: &mut impl Write) -> io::Result<()> {
        self.list(Listing::ByDepartment, w)
    }

    /// Sorts the stored events for `listing` and prints them.
    pub fn list(&mut self, listing: Listing, w: &mut impl Write) -> io::Result<()> {
        if self.events.is_empty() {
            return writeln!(w, "{EMPTY_MESSAGE}");
        }

        self.sort(listing);
        writeln!(w, "{}", listing.header())?;
        for event in &self.events {
            writeln!(w, "{event}")?;
        }
        writeln!(w, "{FOOTER}")
    }

    /// Rearranges the stored events. The sort is stable.
    pub fn sort(&mut self, listing: Listing) {
        match listing {
            Listing::Stored => {}
            Listing::ByDate => self.events.sort_by(Event::cmp_schedule),
            Listing::ByCampus => self.events.sort_by_key(Event::location),
            Listing::ByDepartment => self.events.sort_by_key(Event::department),
        }
    }
}
