// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Errors of writing [TeamCity service messages][1].
//!
//! Formatting and escaping are total, so the only thing that may fail is the
//! output sink itself.
//!
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html

use std::io;

use derive_more::{Display, Error, From};

/// Writer-specific errors.
#[derive(Debug, Display, Error, From)]
pub enum WriterError {
    /// I/O error during output operations.
    #[display("I/O error: {_0}")]
    Io(io::Error),
}

/// Result type alias for writer operations.
pub type WriterResult<T> = Result<T, WriterError>;

impl WriterError {
    /// Returns true if this is an I/O error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
