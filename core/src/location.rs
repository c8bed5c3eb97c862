// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// A university campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Campus {
    /// Busch campus.
    Busch,

    /// College Avenue campus.
    CollegeAvenue,

    /// Livingston campus.
    Livingston,
}

impl AsRef<str> for Campus {
    fn as_ref(&self) -> &str {
        match self {
            Campus::Busch => "Busch",
            Campus::CollegeAvenue => "College Avenue",
            Campus::Livingston => "Livingston",
        }
    }
}

impl Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// The rooms events can be held in.
///
/// Declaration order groups rooms by campus, then by building, and is the
/// order used when listing the calendar by campus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// Allison Road Classroom, Busch
    Arc103,

    /// Hill Center, Busch
    Hll114,

    /// Academic Building, College Avenue
    Ab2225,

    /// Murray Hall, College Avenue
    Mu302,

    /// Beck Hall, Livingston
    BeAud,

    /// Tillett Hall, Livingston
    Til232,
}

const LOC_ARC103: &str = "ARC103";
const LOC_HLL114: &str = "HLL114";
const LOC_AB2225: &str = "AB2225";
const LOC_MU302: &str = "MU302";
const LOC_BE_AUD: &str = "BE_AUD";
const LOC_TIL232: &str = "TIL232";

impl Location {
    /// All locations in declaration order.
    pub const ALL: [Location; 6] = [
        Location::Arc103,
        Location::Hll114,
        Location::Ab2225,
        Location::Mu302,
        Location::BeAud,
        Location::Til232,
    ];

    /// Looks up a location by room code, ignoring case.
    pub fn lookup(code: &str) -> Option<Self> {
        code.to_ascii_uppercase().parse().ok()
    }

    /// The building the room is in.
    pub fn building(&self) -> &'static str {
        match self {
            Location::Arc103 => "Allison Road Classroom",
            Location::Hll114 => "Hill Center",
            Location::Ab2225 => "Academic Building",
            Location::Mu302 => "Murray Hall",
            Location::BeAud => "Beck Hall",
            Location::Til232 => "Tillett Hall",
        }
    }

    /// The campus the building is on.
    pub fn campus(&self) -> Campus {
        match self {
            Location::Arc103 | Location::Hll114 => Campus::Busch,
            Location::Ab2225 | Location::Mu302 => Campus::CollegeAvenue,
            Location::BeAud | Location::Til232 => Campus::Livingston,
        }
    }
}

impl AsRef<str> for Location {
    fn as_ref(&self) -> &str {
        match self {
            Location::Arc103 => LOC_ARC103,
            Location::Hll114 => LOC_HLL114,
            Location::Ab2225 => LOC_AB2225,
            Location::Mu302 => LOC_MU302,
            Location::BeAud => LOC_BE_AUD,
            Location::Til232 => LOC_TIL232,
        }
    }
}

/// Formats as `CODE (Building, Campus)`.
impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.as_ref(),
            self.building(),
            self.campus()
        )
    }
}

impl FromStr for Location {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            LOC_ARC103 => Ok(Location::Arc103),
            LOC_HLL114 => Ok(Location::Hll114),
            LOC_AB2225 => Ok(Location::Ab2225),
            LOC_MU302 => Ok(Location::Mu302),
            LOC_BE_AUD => Ok(Location::BeAud),
            LOC_TIL232 => Ok(Location::Til232),
            _ => Err(()),
        }
    }
}
