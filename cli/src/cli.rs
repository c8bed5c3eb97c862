// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf, process::ExitCode};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use eventorg_core::{APP_NAME, SystemClock};
use tracing_subscriber::EnvFilter;

use crate::config::parse_config;
use crate::organizer::Organizer;

const EVENTORG_LOG_ENV: &str = "EVENTORG_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the event organizer on the standard streams.
pub fn run() -> ExitCode {
    init_tracing();
    let result = Cli::parse().and_then(Cli::run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(EVENTORG_LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    // Logs go to stderr, stdout carries the organizer replies only.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Organize department events on the university calendar.")
            .long_about(
                "\
Organize department events on the university calendar.

Commands are read from standard input, one per line:
  A <m/d/yyyy> <timeslot> <location> <department> <email> <minutes>
  R <m/d/yyyy> <timeslot> <location>
  P | PE | PC | PD   print as stored, by date, by campus, by department
  Q                  quit",
            )
            .version(crate_version!())
            .styles(STYLES)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $EVENTORG_CONFIG when set, otherwise \
built-in rules are used.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Ok(Self::from(&matches))
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Ok(Self::from(&matches))
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Self {
        let config = matches.get_one("config").cloned();
        Cli { config }
    }

    /// Run the organizer until `Q` or the end of standard input
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let config = parse_config(self.config)?;
        let mut organizer = Organizer::new(config, SystemClock);

        let stdin = io::stdin();
        let mut stdout = io::stdout().lock();
        organizer.run(stdin.lock(), &mut stdout)
    }
}
