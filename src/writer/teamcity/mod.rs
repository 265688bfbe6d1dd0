// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [TeamCity service messages][1] [`Writer`] implementation.
//!
//! - [`cli`]: CLI configuration and argument parsing
//! - [`writer`]: routing of [`Event`]s into service messages
//!
//! [`Event`]: crate::Event
//! [`Writer`]: crate::Writer
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html

pub mod cli;
pub mod writer;

pub use self::{cli::Cli, writer::TeamCity};
