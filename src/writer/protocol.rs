// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [TeamCity service messages][1] rendering.
//!
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html

use chrono::NaiveDateTime;

use crate::{timestamp, Escaped};

/// Escaped newline, separating lines inside a single attribute value.
pub const NEWLINE: &str = "|n";

/// Single service message line.
///
/// Every attribute value is [`Escaped`] already, so rendering never escapes
/// anything itself.
#[derive(Clone, Copy, Debug)]
pub enum Line<'a> {
    /// `testSuiteStarted` of a feature.
    SuiteStarted {
        /// Feature name.
        name: &'a Escaped,
    },

    /// `testSuiteFinished` of a feature.
    SuiteFinished {
        /// Feature name.
        name: &'a Escaped,
    },

    /// `testStarted` of a scenario, capturing its standard output.
    TestStarted {
        /// Scenario name.
        name: &'a Escaped,
    },

    /// `testFinished` of a scenario.
    TestFinished {
        /// Scenario name.
        name: &'a Escaped,
    },

    /// `testFailed` of a scenario.
    TestFailed {
        /// Scenario name.
        name: &'a Escaped,

        /// Short failure message.
        message: &'a Escaped,

        /// Failure details, like a trace.
        details: &'a Escaped,
    },

    /// Free-form `message`, carrying no name nor timestamp.
    Message {
        /// Message text.
        text: &'a Escaped,
    },
}

impl Line<'_> {
    /// Returns the service message name of this [`Line`].
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SuiteStarted { .. } => "testSuiteStarted",
            Self::SuiteFinished { .. } => "testSuiteFinished",
            Self::TestStarted { .. } => "testStarted",
            Self::TestFinished { .. } => "testFinished",
            Self::TestFailed { .. } => "testFailed",
            Self::Message { .. } => "message",
        }
    }

    /// Renders this [`Line`] stamped with the given time, without a trailing
    /// newline.
    #[must_use]
    pub fn render(&self, at: &NaiveDateTime) -> String {
        let kind = self.kind();
        match self {
            Self::Message { text } => {
                format!("##teamcity[{kind} text='{NEWLINE}{text}{NEWLINE}']")
            }
            Self::SuiteStarted { name }
            | Self::SuiteFinished { name }
            | Self::TestFinished { name } => format!(
                "##teamcity[{kind} timestamp='{}' name='{name}']",
                timestamp::full(at),
            ),
            Self::TestStarted { name } => format!(
                "##teamcity[{kind} timestamp='{}' name='{name}' \
                 captureStandardOutput='true']",
                timestamp::full(at),
            ),
            Self::TestFailed { name, message, details } => format!(
                "##teamcity[{kind} timestamp='{}' name='{name}' \
                 message='{message}' details='{details}']",
                timestamp::full(at),
            ),
        }
    }
}
