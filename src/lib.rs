// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [TeamCity service messages][1] reporter for [Cucumber]-style test runs.
//!
//! The host test engine only tells which feature, scenario or step it is
//! currently processing, and never signals where any of them begins or ends.
//! [`TeamCity`] [`Writer`] infers those boundaries by watching the names
//! change, batches step output per scenario, reports at most one failure per
//! scenario, and leaves an [`ExitHook`] behind to close whatever is still open
//! once the process terminates.
//!
//! ```rust
//! use cucumber_teamcity::{
//!     event::{Status, StepMatch},
//!     writer::teamcity,
//!     Callbacks, TeamCity,
//! };
//!
//! let mut host = Callbacks::new(TeamCity::new(Vec::new()), teamcity::Cli::default());
//! host.feature_name("Login");
//! host.scenario_name("Scenario", "should succeed", "login.feature:3", 2);
//! host.step_name("Given", StepMatch::new("user exists"), Status::Passed, 4, false);
//!
//! let mut writer = host.into_inner();
//! let trailing = writer.finalize().unwrap_or_default();
//! assert!(trailing.contains("##teamcity[testSuiteFinished"));
//!
//! let output = String::from_utf8(writer.into_output()).unwrap();
//! assert!(output.contains("##teamcity[testSuiteStarted"));
//! ```
//!
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html
//! [Cucumber]: https://cucumber.io

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_results
)]

pub mod adapter;
pub mod error;
pub mod escape;
pub mod event;
pub mod timestamp;
pub mod writer;

#[doc(inline)]
pub use self::{
    adapter::Callbacks,
    error::{WriterError, WriterResult},
    escape::{escape, unescape, Escaped},
    event::Event,
    timestamp::{Clock, SystemClock},
    writer::{exit::ExitHook, teamcity::TeamCity, Writer},
};
