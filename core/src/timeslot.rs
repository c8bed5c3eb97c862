// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Half of the day a clock time falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Meridiem {
    /// Before noon.
    Am,

    /// Noon and after.
    Pm,
}

impl AsRef<str> for Meridiem {
    fn as_ref(&self) -> &str {
        match self {
            Meridiem::Am => "am",
            Meridiem::Pm => "pm",
        }
    }
}

impl Display for Meridiem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The predefined start times an event can be booked at.
///
/// Variants are ordered by declaration, which is also chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimeSlot {
    /// 10:30am
    Morning,

    /// 2:00pm
    Afternoon,

    /// 6:30pm
    Evening,
}

const SLOT_MORNING: &str = "MORNING";
const SLOT_AFTERNOON: &str = "AFTERNOON";
const SLOT_EVENING: &str = "EVENING";

impl TimeSlot {
    /// All time slots in declaration order.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::Morning, TimeSlot::Afternoon, TimeSlot::Evening];

    /// Looks up a time slot by name, ignoring case.
    pub fn lookup(name: &str) -> Option<Self> {
        name.to_ascii_uppercase().parse().ok()
    }

    /// The hour on a 12-hour clock.
    pub fn hour(&self) -> u32 {
        match self {
            TimeSlot::Morning => 10,
            TimeSlot::Afternoon => 2,
            TimeSlot::Evening => 6,
        }
    }

    /// The minute past the hour.
    pub fn minute(&self) -> u32 {
        match self {
            TimeSlot::Morning | TimeSlot::Evening => 30,
            TimeSlot::Afternoon => 0,
        }
    }

    /// Whether the slot starts before or after noon.
    pub fn meridiem(&self) -> Meridiem {
        match self {
            TimeSlot::Morning => Meridiem::Am,
            TimeSlot::Afternoon | TimeSlot::Evening => Meridiem::Pm,
        }
    }
}

impl AsRef<str> for TimeSlot {
    fn as_ref(&self) -> &str {
        match self {
            TimeSlot::Morning => SLOT_MORNING,
            TimeSlot::Afternoon => SLOT_AFTERNOON,
            TimeSlot::Evening => SLOT_EVENING,
        }
    }
}

/// Formats the start time, e.g. `10:30am`.
impl Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}{}", self.hour(), self.minute(), self.meridiem())
    }
}

impl FromStr for TimeSlot {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            SLOT_MORNING => Ok(TimeSlot::Morning),
            SLOT_AFTERNOON => Ok(TimeSlot::Afternoon),
            SLOT_EVENING => Ok(TimeSlot::Evening),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case() {
        for name in ["morning", "Morning", "MORNING", "mOrNiNg"] {
            assert_eq!(TimeSlot::lookup(name), Some(TimeSlot::Morning));
        }
        assert_eq!(TimeSlot::lookup("evening"), Some(TimeSlot::Evening));
        assert_eq!(TimeSlot::lookup("noon"), None);
        assert_eq!(TimeSlot::lookup(""), None);
    }

    #[test]
    fn test_lookup_folds_ascii_only() {
        // Dotless i uppercases to `I` outside ASCII.
        assert_eq!(TimeSlot::lookup("mornıng"), None);
        assert_eq!(TimeSlot::lookup("ＭＯＲＮＩＮＧ"), None);
    }

    #[test]
    fn test_from_str_is_exact() {
        assert_eq!("AFTERNOON".parse::<TimeSlot>(), Ok(TimeSlot::Afternoon));
        assert!("afternoon".parse::<TimeSlot>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeSlot::Morning.to_string(), "10:30am");
        assert_eq!(TimeSlot::Afternoon.to_string(), "2:00pm");
        assert_eq!(TimeSlot::Evening.to_string(), "6:30pm");
    }

    #[test]
    fn test_declaration_order() {
        let mut slots = vec![TimeSlot::Evening, TimeSlot::Morning, TimeSlot::Afternoon];
        slots.sort();
        assert_eq!(slots, TimeSlot::ALL);
    }
}
