// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, Write};

use eventorg_core::{
    Calendar, Clock, Config, EventDraft, EventKeyDraft, Listing, MalformedPolicy, Rejection,
    Rules,
};

use crate::command::Command;

const BANNER: &str = "Event Organizer running!";
const TERMINATED: &str = "Event Organizer terminated.";
const ADDED: &str = "Event added to the calendar.";
const REMOVED: &str = "Event has been removed from the calendar!";
const MALFORMED: &str = "Malformed command.";

/// Whether the organizer keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,

    /// Stop reading.
    Quit,
}

/// Interprets commands against an in-memory calendar.
#[derive(Debug)]
pub struct Organizer<C: Clock> {
    calendar: Calendar,
    rules: Rules,
    on_malformed: MalformedPolicy,
    clock: C,
}

impl<C: Clock> Organizer<C> {
    /// Creates an organizer with an empty calendar.
    pub fn new(config: Config, clock: C) -> Self {
        Self {
            calendar: Calendar::new(),
            rules: config.rules,
            on_malformed: config.on_malformed,
            clock,
        }
    }

    /// The calendar in its current order.
    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    /// Prints the banner and processes lines until `Q` or the end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<(), Box<dyn Error>> {
        writeln!(out, "{BANNER}")?;
        writeln!(out)?;

        for line in input.lines() {
            let line = line?;
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
        }

        out.flush()?;
        Ok(())
    }

    /// Parses and executes one line.
    ///
    /// A line that fails to parse is an error, unless the organizer is
    /// configured to report it and carry on.
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Flow, Box<dyn Error>> {
        match Command::parse(line) {
            Ok(Some(command)) => Ok(self.execute(command, out)?),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => match self.on_malformed {
                MalformedPolicy::Abort => Err(format!("`{}`: {e}", line.trim()).into()),
                MalformedPolicy::Report => {
                    tracing::warn!(line, error = %e, "malformed command");
                    writeln!(out, "{MALFORMED}")?;
                    Ok(Flow::Continue)
                }
            },
        }
    }

    /// Executes a parsed command, writing its outcome to `out`.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<Flow> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Add(draft) => self.add(draft, out)?,
            Command::Remove(draft) => self.remove(&draft, out)?,
            Command::List(listing) => self.list(listing, out)?,
            Command::Quit => {
                writeln!(out, "{TERMINATED}")?;
                return Ok(Flow::Quit);
            }
            Command::Invalid(verb) => writeln!(out, "{verb} is an invalid command!")?,
        }
        Ok(Flow::Continue)
    }

    fn add(&mut self, draft: EventDraft, out: &mut impl Write) -> io::Result<()> {
        let result = self
            .rules
            .check_event(&self.clock, draft)
            .and_then(|event| match self.calendar.contains(event.key()) {
                true => Err(Rejection::Duplicate),
                false => Ok(self.calendar.add(event)),
            });

        match result {
            Ok(_) => writeln!(out, "{ADDED}"),
            Err(rejection) => reject(rejection, out),
        }
    }

    fn remove(&mut self, draft: &EventKeyDraft, out: &mut impl Write) -> io::Result<()> {
        let result = self
            .rules
            .check_key(&self.clock, draft)
            .and_then(|key| match self.calendar.remove(&key) {
                true => Ok(()),
                false => Err(Rejection::NotFound),
            });

        match result {
            Ok(()) => writeln!(out, "{REMOVED}"),
            Err(rejection) => reject(rejection, out),
        }
    }

    fn list(&mut self, listing: Listing, out: &mut impl Write) -> io::Result<()> {
        self.calendar.list(listing, out)
    }
}

fn reject(rejection: Rejection, out: &mut impl Write) -> io::Result<()> {
    tracing::debug!(?rejection, "command rejected");
    writeln!(out, "{rejection}")
}
