// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for outputting [`Event`]s as [TeamCity service messages][1].
//!
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html

pub mod boundary;
pub mod buffer;
pub mod emitter;
pub mod exit;
pub mod failures;
pub mod protocol;
pub mod teamcity;

use crate::Event;

#[doc(inline)]
pub use self::{
    boundary::{BoundaryTracker, Transition},
    buffer::{OutputBuffer, Severity},
    emitter::Emitter,
    exit::ExitHook,
    failures::{FailureRecord, FailureRegistry, ScenarioKey},
    protocol::Line,
    teamcity::TeamCity,
};

/// Writer of [`Event`]s to some output.
///
/// The host engine delivers [`Event`]s strictly one after another, so a
/// [`Writer`] is never re-entered.
pub trait Writer {
    /// CLI options of this [`Writer`].
    type Cli: clap::Args;

    /// Handles the given [`Event`].
    fn handle_event(&mut self, event: Event, cli: &Self::Cli);
}

impl<T: Writer + ?Sized> Writer for &mut T {
    type Cli = T::Cli;

    fn handle_event(&mut self, event: Event, cli: &Self::Cli) {
        (**self).handle_event(event, cli);
    }
}
