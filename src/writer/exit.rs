// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Closing of whatever is left open when the run terminates.
//!
//! The host never tells that the run is complete, so the last scenario and
//! feature can't be finished by observing a change of names. Instead, the
//! text closing them is kept up to date after each event, and written out
//! once the [`ExitHook`] holding it is dropped.

use std::{fmt, io};

/// Holder of the trailing text closing the still open scenario and feature.
///
/// The text is written into the output at most once: either by an explicit
/// [`ExitHook::fire()`] call, or when the [`ExitHook`] is dropped. Taking the
/// text out with [`ExitHook::take()`] disarms the hook.
pub struct ExitHook<Out: io::Write = io::Stdout> {
    /// Output to write the trailing text into.
    output: Out,

    /// Trailing text to write, if any.
    trailing: Option<String>,
}

impl<Out: io::Write> fmt::Debug for ExitHook<Out> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExitHook")
            .field("trailing", &self.trailing)
            .finish_non_exhaustive()
    }
}

impl Default for ExitHook {
    fn default() -> Self {
        Self::new(io::stdout())
    }
}

impl<Out: io::Write> ExitHook<Out> {
    /// Creates a new disarmed [`ExitHook`] writing into the given `output`.
    #[must_use]
    pub const fn new(output: Out) -> Self {
        Self { output, trailing: None }
    }

    /// Replaces the trailing text, arming the hook if the text isn't empty.
    pub fn set(&mut self, trailing: String) {
        self.trailing = Some(trailing).filter(|t| !t.is_empty());
    }

    /// Returns the current trailing text, if any.
    #[must_use]
    pub fn trailing(&self) -> Option<&str> {
        self.trailing.as_deref()
    }

    /// Takes the trailing text out, disarming the hook.
    pub fn take(&mut self) -> Option<String> {
        self.trailing.take()
    }

    /// Writes the trailing text into the output and flushes it, disarming the
    /// hook.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn fire(&mut self) -> io::Result<()> {
        if let Some(trailing) = self.trailing.take() {
            writeln!(self.output, "{trailing}")?;
        }
        self.output.flush()
    }
}

impl<Out: io::Write> Drop for ExitHook<Out> {
    fn drop(&mut self) {
        if self.trailing.is_some() {
            // Nothing to propagate the error to while terminating.
            _ = self.fire();
        }
    }
}
