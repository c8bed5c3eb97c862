// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Debug;

use jiff::Zoned;

use crate::Date;

/// Source of the current calendar date.
pub trait Clock: Debug {
    /// Today's date in the local civil calendar.
    fn today(&self) -> Date;
}

/// Reads today's date from the system clock in the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let today = Zoned::now().date();
        Date::new(
            i32::from(today.year()),
            i32::from(today.month()),
            i32::from(today.day()),
        )
    }
}

/// A clock frozen on a given date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> Date {
        (**self).today()
    }
}
