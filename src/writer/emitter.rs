// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Writing of service message [`Line`]s into an output.

use std::io;

use chrono::NaiveDateTime;

use crate::{
    escape,
    writer::{failures::FailureRecord, protocol::Line},
    Clock, SystemClock, WriterResult,
};

/// Writer of service message [`Line`]s into an [`io::Write`] implementor.
///
/// Every line is flushed right away, so a crashed run still leaves a usable
/// partial report behind.
#[derive(Debug)]
pub struct Emitter<Out: io::Write, C = SystemClock> {
    /// [`io::Write`] implementor to output into.
    output: Out,

    /// [`Clock`] to stamp [`Line`]s with.
    clock: C,
}

impl<Out: io::Write, C: Clock> Emitter<Out, C> {
    /// Creates a new [`Emitter`] stamping [`Line`]s with the given [`Clock`].
    #[must_use]
    pub const fn with_clock(output: Out, clock: C) -> Self {
        Self { output, clock }
    }

    /// Returns the current time of this [`Emitter`]'s [`Clock`].
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Returns the output of this [`Emitter`].
    #[must_use]
    pub const fn output(&self) -> &Out {
        &self.output
    }

    /// Unwraps the output of this [`Emitter`].
    #[must_use]
    pub fn into_output(self) -> Out {
        self.output
    }

    /// Writes the given [`Line`] stamped with the current time.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn emit(&mut self, line: Line<'_>) -> WriterResult<()> {
        let rendered = line.render(&self.now());
        self.write_rendered(&rendered)
    }

    /// Writes an already rendered line, doing nothing if it's empty.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn write_rendered(&mut self, rendered: &str) -> WriterResult<()> {
        if rendered.is_empty() {
            return Ok(());
        }
        writeln!(self.output, "{rendered}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Writes a `testSuiteStarted` line of the given feature.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn suite_started(&mut self, name: &str) -> WriterResult<()> {
        self.emit(Line::SuiteStarted { name: &escape(name) })
    }

    /// Writes a `testSuiteFinished` line of the given feature.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn suite_finished(&mut self, name: &str) -> WriterResult<()> {
        self.emit(Line::SuiteFinished { name: &escape(name) })
    }

    /// Writes a `testStarted` line of the given scenario.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn test_started(&mut self, name: &str) -> WriterResult<()> {
        self.emit(Line::TestStarted { name: &escape(name) })
    }

    /// Writes a `testFinished` line of the given scenario.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn test_finished(&mut self, name: &str) -> WriterResult<()> {
        self.emit(Line::TestFinished { name: &escape(name) })
    }

    /// Writes a `testFailed` line of the given [`FailureRecord`].
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn test_failed(&mut self, failure: &FailureRecord) -> WriterResult<()> {
        self.emit(Line::TestFailed {
            name: &failure.name,
            message: &failure.message,
            details: &failure.details,
        })
    }
}
