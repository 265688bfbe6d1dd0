// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Adapter registering a [`Writer`] with a host engine invoking named
//! callbacks.

use crate::{
    event::{Exception, OutlineTable, Status, StepMatch, TableRow},
    Event, Writer,
};

/// Named callbacks surface of a host engine, forwarding each call to the
/// wrapped [`Writer`] as an [`Event`].
#[derive(Debug)]
pub struct Callbacks<W: Writer> {
    /// [`Writer`] to forward [`Event`]s to.
    writer: W,

    /// CLI options of the [`Writer`].
    cli: W::Cli,
}

impl<W: Writer> Callbacks<W> {
    /// Wraps the given [`Writer`] configured with the given `cli` options.
    #[must_use]
    pub const fn new(writer: W, cli: W::Cli) -> Self {
        Self { writer, cli }
    }

    /// Returns the wrapped [`Writer`].
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwraps the wrapped [`Writer`].
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Host is working on the feature with the given `name`.
    pub fn feature_name(&mut self, name: impl Into<String>) {
        self.forward(Event::FeatureName(name.into()));
    }

    /// Host is working on the scenario with the given `name`, or on an
    /// expanded row of an outline table.
    pub fn scenario_name(
        &mut self,
        keyword: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        indent: usize,
    ) {
        self.forward(Event::ScenarioName {
            keyword: keyword.into(),
            name: name.into(),
            location: location.into(),
            indent,
        });
    }

    /// Host has executed a step.
    pub fn step_name(
        &mut self,
        keyword: impl Into<String>,
        step: StepMatch,
        status: Status,
        indent: usize,
        background: bool,
    ) {
        self.forward(Event::StepExecuted {
            keyword: keyword.into(),
            step,
            status,
            indent,
            background,
        });
    }

    /// Host has caught an exception resulting in the given `status`.
    pub fn exception(&mut self, exception: Exception, status: Status) {
        self.forward(Event::Exception { exception, status, step: None });
    }

    /// Host is about to run the given outline table.
    pub fn before_outline_table(&mut self, table: OutlineTable) {
        self.forward(Event::BeforeOutlineTable(table));
    }

    /// Host has executed the given row of an outline table.
    pub fn after_table_row(&mut self, row: TableRow) {
        self.forward(Event::AfterTableRow(row));
    }

    fn forward(&mut self, event: Event) {
        self.writer.handle_event(event, &self.cli);
    }
}
