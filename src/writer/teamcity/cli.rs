// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! CLI configuration for TeamCity writer.

/// CLI options of a [`TeamCity`] [`Writer`].
///
/// [`TeamCity`]: super::TeamCity
/// [`Writer`]: crate::Writer
#[derive(Clone, Copy, Debug, Default, clap::Args)]
#[group(skip)]
pub struct Cli {
    /// Report expanded rows of scenario outline tables as a part of their
    /// scenario, rather than as separate tests.
    #[arg(id = "teamcity-expand", long = "teamcity-expand", global = true)]
    pub expand: bool,
}

impl Cli {
    /// Creates a new [`Cli`] with the specified outline expansion mode.
    #[must_use]
    pub const fn with_expand(expand: bool) -> Self {
        Self { expand }
    }
}
