// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Wall-clock source and timestamp formats.

use chrono::{Local, NaiveDateTime};

/// Source of the local wall-clock time.
pub trait Clock {
    /// Returns the current local time.
    fn now(&self) -> NaiveDateTime;
}

/// [`Clock`] reading the system time in the local timezone.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

impl<F: Fn() -> NaiveDateTime> Clock for F {
    fn now(&self) -> NaiveDateTime {
        self()
    }
}

/// Formats the given time as `HH:MM:SS.mmm`, for human-readable step lines.
#[must_use]
pub fn short(at: &NaiveDateTime) -> String {
    at.format("%H:%M:%S%.3f").to_string()
}

/// Formats the given time as `YYYY-MM-DDTHH:MM:SS.mmm`, for the `timestamp`
/// attribute.
#[must_use]
pub fn full(at: &NaiveDateTime) -> String {
    at.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}
