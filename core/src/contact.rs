// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Display;

use crate::Department;

/// The email domain every contact address must belong to.
pub const EMAIL_DOMAIN: &str = "@rutgers.edu";

/// The department responsible for an event, and who to reach there.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contact {
    department: Department,
    email: String,
}

impl Contact {
    /// Creates a contact without validating the email.
    pub fn new(department: Department, email: impl Into<String>) -> Self {
        Self {
            department,
            email: email.into(),
        }
    }

    /// The responsible department.
    pub fn department(&self) -> Department {
        self.department
    }

    /// The contact email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether the email is a university address and the department is known.
    pub fn is_valid(&self) -> bool {
        self.is_valid_with(EMAIL_DOMAIN)
    }

    /// Same as [`Contact::is_valid`], with a custom email suffix.
    pub fn is_valid_with(&self, email_suffix: &str) -> bool {
        self.email.ends_with(email_suffix) && Department::ALL.contains(&self.department)
    }
}

/// Formats as `Full Department Name, email`.
impl Display for Contact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.department, self.email)
    }
}
