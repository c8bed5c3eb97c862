// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// The departments that can host an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Department {
    /// Business Analytics and Information Technology
    Bait,

    /// Computer Science
    Cs,

    /// Electrical Engineering
    Ee,

    /// Information Technology and Informatics
    Iti,

    /// Mathematics
    Math,
}

const DEPT_BAIT: &str = "BAIT";
const DEPT_CS: &str = "CS";
const DEPT_EE: &str = "EE";
const DEPT_ITI: &str = "ITI";
const DEPT_MATH: &str = "MATH";

impl Department {
    /// All departments in declaration order.
    pub const ALL: [Department; 5] = [
        Department::Bait,
        Department::Cs,
        Department::Ee,
        Department::Iti,
        Department::Math,
    ];

    /// Looks up a department by code, ignoring case.
    pub fn lookup(code: &str) -> Option<Self> {
        code.to_ascii_uppercase().parse().ok()
    }

    /// The full name of the department.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Bait => "Business Analytics and Information Technology",
            Department::Cs => "Computer Science",
            Department::Ee => "Electrical Engineering",
            Department::Iti => "Information Technology and Informatics",
            Department::Math => "Mathematics",
        }
    }
}

impl AsRef<str> for Department {
    fn as_ref(&self) -> &str {
        match self {
            Department::Bait => DEPT_BAIT,
            Department::Cs => DEPT_CS,
            Department::Ee => DEPT_EE,
            Department::Iti => DEPT_ITI,
            Department::Math => DEPT_MATH,
        }
    }
}

/// Formats as the full department name.
impl Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Department {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            DEPT_BAIT => Ok(Department::Bait),
            DEPT_CS => Ok(Department::Cs),
            DEPT_EE => Ok(Department::Ee),
            DEPT_ITI => Ok(Department::Iti),
            DEPT_MATH => Ok(Department::Math),
            _ => Err(()),
        }
    }
}
