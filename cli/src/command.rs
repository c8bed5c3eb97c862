// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::SplitWhitespace;

use eventorg_core::{
    Date, Department, EventDraft, EventKeyDraft, Listing, Location, ParseError, TimeSlot,
};

/// A single line of input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add an event.
    Add(EventDraft),

    /// Remove the event with the given identity.
    Remove(EventKeyDraft),

    /// Print the calendar in the given order.
    List(Listing),

    /// Stop the organizer.
    Quit,

    /// An unknown verb.
    Invalid(String),
}

impl Command {
    pub const ADD: &str = "A";
    pub const REMOVE: &str = "R";
    pub const PRINT: &str = "P";
    pub const PRINT_BY_DATE: &str = "PE";
    pub const PRINT_BY_CAMPUS: &str = "PC";
    pub const PRINT_BY_DEPARTMENT: &str = "PD";
    pub const QUIT: &str = "Q";

    /// Parses a line of whitespace separated tokens.
    ///
    /// Returns `Ok(None)` for a blank line. Verbs are case-sensitive, while
    /// time slot, location and department codes are not. Tokens past the
    /// last expected field are ignored.
    pub fn parse(line: &str) -> Result<Option<Self>, ParseError> {
        let mut tokens = Tokens(line.split_whitespace());
        let Some(verb) = tokens.0.next() else {
            return Ok(None);
        };

        let command = match verb {
            Self::ADD => Command::Add(parse_draft(&mut tokens)?),
            Self::REMOVE => Command::Remove(parse_key(&mut tokens)?),
            Self::PRINT => Command::List(Listing::Stored),
            Self::PRINT_BY_DATE => Command::List(Listing::ByDate),
            Self::PRINT_BY_CAMPUS => Command::List(Listing::ByCampus),
            Self::PRINT_BY_DEPARTMENT => Command::List(Listing::ByDepartment),
            Self::QUIT => Command::Quit,
            _ => Command::Invalid(verb.to_string()),
        };
        Ok(Some(command))
    }
}

struct Tokens<'a>(SplitWhitespace<'a>);

impl<'a> Tokens<'a> {
    fn field(&mut self, field: &'static str) -> Result<&'a str, ParseError> {
        self.0.next().ok_or(ParseError::MissingField { field })
    }
}

fn parse_key(tokens: &mut Tokens<'_>) -> Result<EventKeyDraft, ParseError> {
    let date: Date = tokens.field("date")?.parse()?;
    let start = TimeSlot::lookup(tokens.field("time slot")?);
    let location = Location::lookup(tokens.field("location")?);
    Ok(EventKeyDraft {
        date,
        start,
        location,
    })
}

fn parse_draft(tokens: &mut Tokens<'_>) -> Result<EventDraft, ParseError> {
    let key = parse_key(tokens)?;
    let department = Department::lookup(tokens.field("department")?);
    let email = tokens.field("email")?.to_string();
    let duration = tokens.field("duration")?;
    let duration = duration
        .parse::<i32>()
        .map_err(|e| ParseError::invalid_number("duration", duration, e))?;

    Ok(EventDraft {
        key,
        department,
        email,
        duration,
    })
}
