// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end of the event organizer.

mod cli;
mod command;
mod config;
mod organizer;

pub use crate::cli::{Cli, run};
pub use crate::command::Command;
pub use crate::config::parse_config;
pub use crate::organizer::{Flow, Organizer};
