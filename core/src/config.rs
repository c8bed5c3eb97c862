// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use crate::Rules;

/// The name of the application.
pub const APP_NAME: &str = "eventorg";

/// What to do with a command whose fields cannot be parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Stop the organizer with an error.
    #[default]
    Abort,

    /// Report the command as malformed and keep reading.
    Report,
}

/// Configuration for the organizer.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Booking rules.
    #[serde(default)]
    pub rules: Rules,

    /// Handling of malformed commands.
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        let rules = &mut self.rules;
        if rules.min_duration > rules.max_duration {
            return Err(format!(
                "min_duration ({}) must not exceed max_duration ({})",
                rules.min_duration, rules.max_duration
            )
            .into());
        }

        let suffix = rules.email_suffix.trim();
        if suffix.is_empty() {
            return Err("email_suffix must not be empty".into());
        }
        if suffix.len() != rules.email_suffix.len() {
            tracing::warn!(suffix, "trimming whitespace around email_suffix");
            rules.email_suffix = suffix.to_string();
        }

        Ok(())
    }
}
