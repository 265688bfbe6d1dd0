// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Escaping of attribute values for [TeamCity service messages][1].
//!
//! [1]: https://www.jetbrains.com/help/teamcity/service-messages.html#Escaped+Values

use derive_more::{AsRef, Deref, Display};

/// Text already escaped for use as a service message attribute value.
///
/// Can only be obtained via [`escape()`], so the same text can't be escaped
/// twice by accident.
#[derive(AsRef, Clone, Debug, Default, Deref, Display, Eq, Hash, PartialEq)]
#[as_ref(forward)]
pub struct Escaped(String);

impl Escaped {
    /// Wraps the given `text` assuming it's escaped already.
    pub(crate) const fn assume_escaped(text: String) -> Self {
        Self(text)
    }

    /// Unwraps the escaped text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Escapes the given raw `text` to be used as an attribute value.
///
/// Surrounding whitespace is trimmed. The escape character itself is
/// replaced first, so the sequences inserted afterwards stay intact.
#[must_use]
pub fn escape(text: impl AsRef<str>) -> Escaped {
    let text = text.as_ref().trim();
    Escaped(
        text.replace('|', "||")
            .replace('\n', "|n")
            .replace('\r', "|r")
            .replace('\'', "|'")
            .replace(']', "|]"),
    )
}

/// Reverts [`escape()`], except the trimming.
///
/// Unknown escape sequences and a dangling `|` are kept as is.
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '|' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('|') => out.push('|'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\'') => out.push('\''),
            Some(']') => out.push(']'),
            Some(other) => {
                out.push('|');
                out.push(other);
            }
            None => out.push('|'),
        }
    }
    out
}
