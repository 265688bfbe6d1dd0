// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Inference of feature and scenario boundaries from a stream of names.
//!
//! The host repeats the name of the feature or scenario it works on, without
//! ever saying where one ends. A boundary is therefore assumed whenever the
//! observed name differs from the previously observed one.

use std::mem;

/// Boundary inferred by a [`BoundaryTracker`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Transition {
    /// Feature with the given name has started.
    FeatureStarted(String),

    /// Feature with the given name has finished.
    FeatureFinished(String),

    /// Scenario with the given display-quoted name has started.
    ScenarioStarted(String),

    /// Scenario with the given display-quoted name has finished.
    ScenarioFinished(String),
}

/// Holder of the currently open feature and scenario identities.
#[derive(Clone, Debug, Default)]
pub struct BoundaryTracker {
    /// First line of the currently open feature name.
    feature: Option<String>,

    /// Display-quoted first line of the currently open scenario name.
    scenario: Option<String>,

    /// Whether expanded rows of outline tables belong to their scenario
    /// rather than being scenarios on their own.
    expand: bool,
}

impl BoundaryTracker {
    /// Creates a new [`BoundaryTracker`] with nothing open yet.
    #[must_use]
    pub const fn new(expand: bool) -> Self {
        Self { feature: None, scenario: None, expand }
    }

    /// Sets whether expanded outline table rows are treated as a part of their
    /// scenario.
    pub fn set_expand(&mut self, expand: bool) {
        self.expand = expand;
    }

    /// Returns the first line of the currently open feature name, if any.
    #[must_use]
    pub fn feature(&self) -> Option<&str> {
        self.feature.as_deref()
    }

    /// Returns the display-quoted name of the currently open scenario, if any.
    #[must_use]
    pub fn scenario(&self) -> Option<&str> {
        self.scenario.as_deref()
    }

    /// Observes the given feature `name`, returning the inferred
    /// [`Transition`]s in the order they should be reported.
    ///
    /// A scenario still open in the previous feature is finished before that
    /// feature.
    pub fn observe_feature(&mut self, name: &str) -> Vec<Transition> {
        let name = first_line(name);
        if self.feature.as_deref() == Some(name) {
            return vec![];
        }

        let mut transitions = Vec::with_capacity(3);
        if let Some(old) = self.feature.take() {
            if let Some(scenario) = self.scenario.take() {
                transitions.push(Transition::ScenarioFinished(scenario));
            }
            transitions.push(Transition::FeatureFinished(old));
        }
        self.feature = Some(name.to_owned());
        transitions.push(Transition::FeatureStarted(name.to_owned()));
        tracing::trace!(?transitions, "feature boundary");
        transitions
    }

    /// Observes the given scenario `name`, returning the inferred
    /// [`Transition`]s in the order they should be reported.
    ///
    /// Expanded outline table rows are ignored if configured so.
    pub fn observe_scenario(&mut self, name: &str) -> Vec<Transition> {
        if self.expand && is_row_expansion(name) {
            return vec![];
        }
        let name = format!("\"{}\"", first_line(name));
        if self.scenario.as_ref() == Some(&name) {
            return vec![];
        }

        let mut transitions = Vec::with_capacity(2);
        if let Some(old) = mem::replace(&mut self.scenario, Some(name.clone())) {
            transitions.push(Transition::ScenarioFinished(old));
        }
        transitions.push(Transition::ScenarioStarted(name));
        tracing::trace!(?transitions, "scenario boundary");
        transitions
    }

    /// Finishes the still open scenario and feature, returning the
    /// [`Transition`]s in the order they should be reported.
    pub fn close(&mut self) -> Vec<Transition> {
        self.scenario
            .take()
            .map(Transition::ScenarioFinished)
            .into_iter()
            .chain(self.feature.take().map(Transition::FeatureFinished))
            .collect()
    }
}

/// Indicates whether the given scenario `name` is an expanded row of an
/// outline table, rendered like `| a | b |`.
#[must_use]
pub fn is_row_expansion(name: &str) -> bool {
    name.trim_start().starts_with('|')
}

/// Returns the first line of the given `name`.
fn first_line(name: &str) -> &str {
    name.lines().next().unwrap_or_default()
}
