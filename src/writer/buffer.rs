// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Step output buffered for the currently open scenario.

use chrono::NaiveDateTime;
use derive_more::Display;
use itertools::Itertools as _;

use crate::{escape, writer::protocol, Escaped};

/// Severity of a buffered message.
///
/// Service messages have no place for it, so it only affects how the message
/// is logged locally.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum Severity {
    /// Regular output.
    #[default]
    #[display("NORMAL")]
    Normal,

    /// Output of anything that hasn't passed.
    #[display("WARNING")]
    Warning,
}

/// Ordered [`Escaped`] messages of the currently open scenario, emitted
/// together as a single `message` line.
#[derive(Clone, Debug, Default)]
pub struct OutputBuffer {
    messages: Vec<Escaped>,
}

impl OutputBuffer {
    /// Creates a new empty [`OutputBuffer`].
    #[must_use]
    pub const fn new() -> Self {
        Self { messages: Vec::new() }
    }

    /// Escapes and appends the given raw `message`.
    pub fn append(&mut self, message: impl AsRef<str>, severity: Severity) {
        let message = message.as_ref();
        match severity {
            Severity::Normal => tracing::debug!(%severity, "{message}"),
            Severity::Warning => tracing::warn!(%severity, "{message}"),
        }
        self.messages.push(escape(message));
    }

    /// Indicates whether nothing is buffered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of buffered messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Renders all the buffered messages as a single `message` line, emptying
    /// the buffer if `purge` is set.
    ///
    /// Returns an empty [`String`] if nothing is buffered.
    #[must_use]
    pub fn drain(&mut self, purge: bool, at: &NaiveDateTime) -> String {
        if self.messages.is_empty() {
            return String::new();
        }
        let text = Escaped::assume_escaped(
            self.messages.iter().join(protocol::NEWLINE),
        );
        if purge {
            self.messages.clear();
        }
        protocol::Line::Message { text: &text }.render(at)
    }
}
