// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Registry of already reported scenario failures.
//!
//! A `testFailed` service message may appear at most once per test, and a
//! test here is a whole scenario rather than a single step. So only the first
//! failure of a scenario is recorded, and any following ones are absorbed.

use linked_hash_map::LinkedHashMap;

use crate::{escape, Escaped};

/// Identity of a scenario a failure is recorded for.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ScenarioKey {
    /// Name of the feature the scenario belongs to.
    pub feature: String,

    /// Display-quoted name of the scenario.
    pub scenario: String,
}

/// Failure recorded for a scenario.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailureRecord {
    /// Escaped name of the failed scenario.
    pub name: Escaped,

    /// Escaped failure message.
    pub message: Escaped,

    /// Escaped failure details.
    pub details: Escaped,
}

/// Set-once mapping from a [`ScenarioKey`] to its [`FailureRecord`].
///
/// We use [`LinkedHashMap`] to keep the records in the order they were
/// reported.
#[derive(Clone, Debug, Default)]
pub struct FailureRegistry {
    failures: LinkedHashMap<ScenarioKey, FailureRecord>,
}

impl FailureRegistry {
    /// Creates a new empty [`FailureRegistry`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the failure of the scenario identified by the given `key`,
    /// unless one is recorded already.
    ///
    /// Returns the newly created [`FailureRecord`], or [`None`] if the
    /// scenario has been reported as failed before.
    pub fn record_failure(
        &mut self,
        key: ScenarioKey,
        message: impl AsRef<str>,
        details: impl AsRef<str>,
    ) -> Option<&FailureRecord> {
        if self.failures.contains_key(&key) {
            tracing::debug!(
                scenario = %key.scenario,
                "absorbing repeated failure of already failed scenario"
            );
            return None;
        }
        let record = FailureRecord {
            name: escape(&key.scenario),
            message: escape(message),
            details: escape(details),
        };
        _ = self.failures.insert(key.clone(), record);
        self.failures.get(&key)
    }

    /// Indicates whether a failure is recorded for the given `key`.
    #[must_use]
    pub fn is_failed(&self, key: &ScenarioKey) -> bool {
        self.failures.contains_key(key)
    }

    /// Returns the number of failed scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Indicates whether no failure is recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Iterates over the recorded failures in the order they were reported.
    pub fn iter(&self) -> impl Iterator<Item = (&ScenarioKey, &FailureRecord)> {
        self.failures.iter()
    }
}
