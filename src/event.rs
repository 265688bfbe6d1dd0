// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Key occurrences in a lifecycle of a test run, as reported by the host
//! engine.
//!
//! The host never reports where a [`Feature`] or a [`Scenario`] begins or
//! ends. It only names the one it's currently working on, possibly many times
//! in a row.
//!
//! [`Feature`]: Event::FeatureName
//! [`Scenario`]: Event::ScenarioName

use std::{error::Error as StdError, fmt, iter, ops::Range};

use derive_more::Display;
use itertools::Itertools as _;

/// Top-level event of a test run.
#[derive(Clone, Debug)]
pub enum Event {
    /// Host is working on a feature with the given (possibly multi-line) name.
    FeatureName(String),

    /// Host is working on a scenario, or on an expanded row of a scenario
    /// outline.
    ScenarioName {
        /// Keyword, like `Scenario` or `Scenario Outline`.
        keyword: String,

        /// Name of the scenario, or the rendered row of an outline table.
        name: String,

        /// Place of the scenario in its feature file.
        location: String,

        /// Indentation the host would render the name with.
        indent: usize,
    },

    /// Step has been executed.
    StepExecuted {
        /// Keyword, like `Given` or `And`.
        keyword: String,

        /// Step text matched against its definition.
        step: StepMatch,

        /// Outcome of the execution.
        status: Status,

        /// Indentation the host would render the step with.
        indent: usize,

        /// Whether the step belongs to a background.
        background: bool,
    },

    /// Exception has been raised while executing a test.
    Exception {
        /// Raised exception.
        exception: Exception,

        /// Status the exception resulted in.
        status: Status,

        /// Step the exception was raised in, if the host knows it.
        ///
        /// When [`None`], the most recently executed step is assumed.
        step: Option<FailedStep>,
    },

    /// Outline table is about to be run.
    BeforeOutlineTable(OutlineTable),

    /// Row of an outline table has been executed.
    AfterTableRow(TableRow),
}

/// Outcome of a step execution.
#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum Status {
    /// Step has succeeded.
    #[display("passed")]
    Passed,

    /// Step has failed.
    #[display("failed")]
    Failed,

    /// Step has been skipped due to a previous failure.
    #[display("skipped")]
    Skipped,

    /// Step definition is pending implementation.
    #[display("pending")]
    Pending,

    /// No step definition matches the step.
    #[display("undefined")]
    Undefined,
}

impl Status {
    /// Indicates whether this [`Status`] is a [`Status::Passed`] one.
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Place of a step definition in the source code.
#[derive(Clone, Debug, Display, Eq, PartialEq)]
#[display("{path}:{line}")]
pub struct Location {
    /// Path to the source file.
    pub path: String,

    /// Line in the source file.
    pub line: u32,
}

/// Step text matched against a step definition.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StepMatch {
    /// Step text as written in the feature file.
    pub value: String,

    /// Byte ranges of the arguments captured in the [`StepMatch::value`].
    pub captures: Vec<Range<usize>>,

    /// Step definition the text matched, if any.
    pub location: Option<Location>,
}

impl StepMatch {
    /// Creates a new [`StepMatch`] of the given `value` without captured
    /// arguments and definition.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Self::default() }
    }

    /// Adds the given captured argument range.
    #[must_use]
    pub fn with_capture(mut self, capture: Range<usize>) -> Self {
        self.captures.push(capture);
        self
    }

    /// Sets the definition [`Location`].
    #[must_use]
    pub fn at(mut self, path: impl Into<String>, line: u32) -> Self {
        self.location = Some(Location { path: path.into(), line });
        self
    }

    /// Renders the step text, passing each captured argument through `arg`.
    ///
    /// Captures that are out of bounds, overlap a previous one or split a
    /// UTF-8 character are left untouched.
    #[must_use]
    pub fn format_args(&self, arg: impl Fn(&str) -> String) -> String {
        let mut out = String::with_capacity(self.value.len());
        let mut pos = 0;
        for range in self.captures.iter().sorted_by_key(|r| r.start) {
            let Some(captured) = self.value.get(range.clone()) else {
                continue;
            };
            if range.start < pos {
                continue;
            }
            out.push_str(&self.value[pos..range.start]);
            out.push_str(&arg(captured));
            pos = range.end;
        }
        out.push_str(&self.value[pos..]);
        out
    }
}

/// Step an [`Event::Exception`] has been raised in.
#[derive(Clone, Debug)]
pub struct FailedStep {
    /// Keyword, like `Given` or `And`.
    pub keyword: String,

    /// Step text matched against its definition.
    pub step: StepMatch,
}

/// Exception raised during a test execution.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Exception {
    /// Human-readable message.
    pub message: String,

    /// Kind (type) of the exception.
    pub kind: String,

    /// Lines of the trace leading to the exception.
    pub backtrace: Vec<String>,
}

impl Exception {
    /// Creates a new [`Exception`] without any trace.
    #[must_use]
    pub fn new(message: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: kind.into(),
            backtrace: vec![],
        }
    }

    /// Creates a new [`Exception`] out of the given `err`, using its type as
    /// the kind and its chain of [`source`]s as the trace.
    ///
    /// [`source`]: StdError::source
    #[must_use]
    pub fn from_error<E: StdError + ?Sized>(err: &E) -> Self {
        let backtrace = iter::successors(err.source(), |&e| e.source())
            .map(|e| format!("caused by: {e}"))
            .collect();
        Self {
            message: err.to_string(),
            kind: std::any::type_name::<E>().to_owned(),
            backtrace,
        }
    }
}

impl fmt::Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)?;
        for line in &self.backtrace {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Examples table of a scenario outline.
#[derive(Clone, Debug, Default)]
pub struct OutlineTable {
    /// Header cells of the table.
    pub header: Vec<String>,
}

/// Executed row of an outline table.
#[derive(Clone, Debug, Default)]
pub struct TableRow {
    /// Rendered row, like `| admin | secret |`.
    pub name: String,

    /// Line of the row in its feature file.
    pub line: usize,

    /// Exception the row has failed with, if any.
    pub exception: Option<Exception>,
}
