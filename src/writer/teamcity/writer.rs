// Copyright (c) 2018-2025  Brendan Molloy <brendan@bbqsrc.net>,
//                          Ilya Solovyiov <ilya.solovyiov@gmail.com>,
//                          Kai Ren <tyranron@gmail.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Main TeamCity writer implementation.

use std::io;

use itertools::Itertools as _;

use crate::{
    escape,
    event::{Event, Exception, FailedStep, OutlineTable, Status, StepMatch, TableRow},
    timestamp,
    writer::{
        boundary::{BoundaryTracker, Transition},
        buffer::{OutputBuffer, Severity},
        emitter::Emitter,
        exit::ExitHook,
        failures::{FailureRegistry, ScenarioKey},
        protocol::Line,
        Writer,
    },
    Clock, SystemClock, WriterResult,
};

use super::cli::Cli;

/// [TeamCity service messages][1] [`Writer`].
///
/// As the host engine only names the feature or scenario it's working on,
/// a boundary is inferred each time the name changes. Step output is
/// buffered and emitted as a single `message` right before its scenario
/// finishes, and only the first failure of each scenario is reported.
///
/// The last scenario and feature are never followed by another name, so
/// they're closed by an [`ExitHook`] when this [`Writer`] is dropped, unless
/// [`TeamCity::finish()`] or [`TeamCity::finalize()`] is called before.
///
/// [1]: https://www.jetbrains.com/help/teamcity/service-messages.html
#[derive(Debug)]
pub struct TeamCity<Out: io::Write, C = SystemClock, Exit: io::Write = io::Stdout>
{
    /// Writer of service messages into the primary output.
    emitter: Emitter<Out, C>,

    /// Currently open feature and scenario.
    boundaries: BoundaryTracker,

    /// Output of the currently open scenario.
    buffer: OutputBuffer,

    /// Already failed scenarios.
    failures: FailureRegistry,

    /// Formatted line of the most recently executed step of the currently
    /// open scenario.
    ///
    /// Failures reported without a step are attributed to it.
    current_step: Option<String>,

    /// Holder of the text closing the still open scenario and feature.
    exit: ExitHook<Exit>,
}

impl<Out: io::Write> TeamCity<Out> {
    /// Creates a new [`TeamCity`] [`Writer`] outputting into the given
    /// `output`, and closing the still open scenario and feature into
    /// [`io::Stdout`] when dropped.
    #[must_use]
    pub fn new(output: Out) -> Self {
        Self::custom(output, SystemClock, io::stdout())
    }
}

impl TeamCity<io::Stdout> {
    /// Creates a new [`TeamCity`] [`Writer`] outputting into [`io::Stdout`].
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<Out, C, Exit> TeamCity<Out, C, Exit>
where
    Out: io::Write,
    C: Clock,
    Exit: io::Write,
{
    /// Creates a new [`TeamCity`] [`Writer`] outputting into the given
    /// `output`, stamping it with the given [`Clock`], and closing the still
    /// open scenario and feature into the `exit` output when dropped.
    #[must_use]
    pub fn custom(output: Out, clock: C, exit: Exit) -> Self {
        Self {
            emitter: Emitter::with_clock(output, clock),
            boundaries: BoundaryTracker::default(),
            buffer: OutputBuffer::new(),
            failures: FailureRegistry::new(),
            current_step: None,
            exit: ExitHook::new(exit),
        }
    }

    /// Sets whether expanded rows of scenario outline tables are reported as
    /// a part of their scenario, rather than as separate tests.
    #[must_use]
    pub fn expand(mut self, expand: bool) -> Self {
        self.boundaries.set_expand(expand);
        self
    }

    /// Applies the given [`Cli`] options to this [`TeamCity`] [`Writer`].
    pub fn apply_cli(&mut self, cli: Cli) {
        if cli.expand {
            self.boundaries.set_expand(true);
        }
    }

    /// Returns the already failed scenarios.
    #[must_use]
    pub const fn failures(&self) -> &FailureRegistry {
        &self.failures
    }

    /// Returns the text that closes the still open scenario and feature, if
    /// anything is open.
    #[must_use]
    pub fn trailing(&self) -> Option<&str> {
        self.exit.trailing()
    }

    /// Returns the primary output.
    #[must_use]
    pub const fn output(&self) -> &Out {
        self.emitter.output()
    }

    /// Unwraps the primary output.
    ///
    /// Anything still open is closed into the exit output, unless
    /// [`TeamCity::finish()`] or [`TeamCity::finalize()`] has been called.
    #[must_use]
    pub fn into_output(self) -> Out {
        self.emitter.into_output()
    }

    /// Takes out the text closing the still open scenario and feature, so
    /// it won't be written on drop.
    ///
    /// Meant for an embedding process willing to output the text itself
    /// while terminating.
    pub fn finalize(&mut self) -> Option<String> {
        self.exit.take()
    }

    /// Closes the still open scenario and feature into the primary output.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn finish(&mut self) -> WriterResult<()> {
        let transitions = self.boundaries.close();
        self.apply(transitions)?;
        self.refresh_trailing();
        Ok(())
    }

    /// Handles the given [`Event`], propagating output errors.
    ///
    /// # Errors
    ///
    /// If the output fails to be written or flushed.
    pub fn try_handle_event(&mut self, event: Event) -> WriterResult<()> {
        match event {
            Event::FeatureName(name) => {
                let transitions = self.boundaries.observe_feature(&name);
                self.apply(transitions)?;
            }
            Event::ScenarioName { keyword, name, location, indent } => {
                tracing::trace!(%keyword, %location, indent, "scenario name");
                let transitions = self.boundaries.observe_scenario(&name);
                self.apply(transitions)?;
            }
            Event::StepExecuted { keyword, step, status, indent, background } => {
                tracing::trace!(%keyword, %status, indent, background, "step");
                self.step_executed(&keyword, &step, status);
            }
            Event::Exception { exception, status, step } => {
                if status == Status::Failed {
                    self.exception_raised(&exception, step.as_ref())?;
                }
            }
            Event::BeforeOutlineTable(table) => self.outline_table(&table),
            Event::AfterTableRow(row) => self.table_row(&row)?,
        }
        self.refresh_trailing();
        Ok(())
    }

    /// Emits the given [`Transition`]s, flushing the buffered output before
    /// each finished scenario or feature.
    fn apply(&mut self, transitions: Vec<Transition>) -> WriterResult<()> {
        for transition in transitions {
            match transition {
                Transition::FeatureStarted(name) => {
                    self.emitter.suite_started(&name)?;
                }
                Transition::FeatureFinished(name) => {
                    self.flush_buffer()?;
                    self.emitter.suite_finished(&name)?;
                }
                Transition::ScenarioStarted(name) => {
                    self.emitter.test_started(&name)?;
                }
                Transition::ScenarioFinished(name) => {
                    self.flush_buffer()?;
                    self.emitter.test_finished(&name)?;
                    self.current_step = None;
                }
            }
        }
        Ok(())
    }

    /// Writes out and empties the buffered output, if any.
    fn flush_buffer(&mut self) -> WriterResult<()> {
        let output = self.buffer.drain(true, &self.emitter.now());
        self.emitter.write_rendered(&output)
    }

    /// Buffers the line of the executed step, remembering it as the current
    /// one.
    fn step_executed(&mut self, keyword: &str, step: &StepMatch, status: Status) {
        let line = self.format_step(keyword, step, status);
        let severity = if status.is_passed() {
            Severity::Normal
        } else {
            Severity::Warning
        };
        self.buffer.append(&line, severity);
        self.current_step = Some(line);
    }

    /// Reports the failure of the current scenario caused by the given
    /// [`Exception`].
    fn exception_raised(
        &mut self,
        exception: &Exception,
        step: Option<&FailedStep>,
    ) -> WriterResult<()> {
        let label = step
            .map(|s| self.format_step(&s.keyword, &s.step, Status::Failed))
            .or_else(|| self.current_step.clone())
            .unwrap_or_default();
        self.fail(&label, &exception.to_string())
    }

    /// Buffers the announcement of the given [`OutlineTable`].
    fn outline_table(&mut self, table: &OutlineTable) {
        let header = if table.header.is_empty() {
            String::new()
        } else {
            format!("| {} |", table.header.iter().join(" | "))
        };
        let line = format!(
            "{} running outline: {header}",
            timestamp::short(&self.emitter.now()),
        );
        self.buffer.append(line, Severity::Normal);
    }

    /// Buffers the executed [`TableRow`], or reports its failure.
    fn table_row(&mut self, row: &TableRow) -> WriterResult<()> {
        if let Some(exception) = &row.exception {
            let line = self.format_table_row(row, Status::Failed);
            self.fail(&line, &exception.to_string())
        } else {
            let line = self.format_table_row(row, Status::Passed);
            self.buffer.append(line, Severity::Normal);
            Ok(())
        }
    }

    /// Reports the current scenario as failed, unless it has been reported
    /// already.
    fn fail(&mut self, message: &str, details: &str) -> WriterResult<()> {
        let key = ScenarioKey {
            feature: self.boundaries.feature().unwrap_or_default().to_owned(),
            scenario: self.boundaries.scenario().unwrap_or_default().to_owned(),
        };
        if let Some(failure) = self.failures.record_failure(key, message, details)
        {
            self.emitter.test_failed(failure)?;
        }
        Ok(())
    }

    /// Recomputes the text closing the still open scenario and feature.
    fn refresh_trailing(&mut self) {
        let now = self.emitter.now();
        let output = self.buffer.drain(false, &now);
        let scenario = self.boundaries.scenario().map(escape);
        let feature = self.boundaries.feature().map(escape);

        let trailing = [
            Some(output).filter(|o| !o.is_empty()),
            scenario
                .as_ref()
                .map(|name| Line::TestFinished { name }.render(&now)),
            feature
                .as_ref()
                .map(|name| Line::SuiteFinished { name }.render(&now)),
        ]
        .into_iter()
        .flatten()
        .join("\n");
        self.exit.set(trailing);
    }

    /// Formats a human-readable line of the executed step.
    fn format_step(&self, keyword: &str, step: &StepMatch, status: Status) -> String {
        format!(
            "{} {:>10} {keyword} {:<90} @ {}",
            timestamp::short(&self.emitter.now()),
            status.to_string(),
            step.format_args(str::to_owned),
            step.location.as_ref().map(ToString::to_string).unwrap_or_default(),
        )
    }

    /// Formats a human-readable line of the executed [`TableRow`].
    fn format_table_row(&self, row: &TableRow, status: Status) -> String {
        format!(
            "{} {:>10} {:<90} @ {}",
            timestamp::short(&self.emitter.now()),
            status.to_string(),
            row.name,
            row.line,
        )
    }
}

impl<Out, C, Exit> Writer for TeamCity<Out, C, Exit>
where
    Out: io::Write,
    C: Clock,
    Exit: io::Write,
{
    type Cli = Cli;

    fn handle_event(&mut self, event: Event, cli: &Self::Cli) {
        self.apply_cli(*cli);
        self.try_handle_event(event)
            .unwrap_or_else(|e| panic!("Failed to write: {e}"));
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    type Tested = TeamCity<Vec<u8>, fn() -> NaiveDateTime, Vec<u8>>;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .and_then(|d| d.and_hms_milli_opt(10, 11, 12, 130))
            .unwrap()
    }

    const TS: &str = "2024-05-06T10:11:12.130";

    fn writer() -> Tested {
        TeamCity::custom(Vec::new(), at as fn() -> NaiveDateTime, Vec::new())
    }

    fn written(writer: &Tested) -> String {
        String::from_utf8(writer.output().clone()).unwrap()
    }

    fn feature(name: &str) -> Event {
        Event::FeatureName(name.into())
    }

    fn scenario(name: &str) -> Event {
        Event::ScenarioName {
            keyword: "Scenario".into(),
            name: name.into(),
            location: "login.feature:3".into(),
            indent: 2,
        }
    }

    fn step(keyword: &str, text: &str, status: Status) -> Event {
        Event::StepExecuted {
            keyword: keyword.into(),
            step: StepMatch::new(text).at("tests/steps.rs", 7),
            status,
            indent: 4,
            background: false,
        }
    }

    fn exception(step: Option<FailedStep>) -> Event {
        Event::Exception {
            exception: Exception::new("boom", "Panic"),
            status: Status::Failed,
            step,
        }
    }

    fn step_line(keyword: &str, text: &str, status: &str) -> String {
        format!(
            "10:11:12.130 {status:>10} {keyword} {text:<90} @ tests/steps.rs:7",
        )
    }

    fn feed(writer: &mut Tested, events: impl IntoIterator<Item = Event>) {
        for ev in events {
            writer.try_handle_event(ev).unwrap();
        }
    }

    #[test]
    fn infers_feature_boundaries() {
        let mut writer = writer();

        feed(&mut writer, [feature("A"), feature("A"), feature("B")]);

        assert_eq!(
            written(&writer),
            format!(
                "##teamcity[testSuiteStarted timestamp='{TS}' name='A']\n\
                 ##teamcity[testSuiteFinished timestamp='{TS}' name='A']\n\
                 ##teamcity[testSuiteStarted timestamp='{TS}' name='B']\n",
            ),
        );
    }

    #[test]
    fn reports_login_feature() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("Login"),
                scenario("should succeed"),
                step("Given", "user exists", Status::Passed),
                step("When", "user logs in", Status::Passed),
                scenario("should fail"),
                step("Given", "user exists", Status::Passed),
                exception(None),
            ],
        );

        let given = escape(step_line("Given", "user exists", "passed"));
        let when = escape(step_line("When", "user logs in", "passed"));
        assert_eq!(
            written(&writer),
            format!(
                "##teamcity[testSuiteStarted timestamp='{TS}' name='Login']\n\
                 ##teamcity[testStarted timestamp='{TS}' \
                 name='\"should succeed\"' captureStandardOutput='true']\n\
                 ##teamcity[message text='|n{given}|n{when}|n']\n\
                 ##teamcity[testFinished timestamp='{TS}' \
                 name='\"should succeed\"']\n\
                 ##teamcity[testStarted timestamp='{TS}' \
                 name='\"should fail\"' captureStandardOutput='true']\n\
                 ##teamcity[testFailed timestamp='{TS}' \
                 name='\"should fail\"' message='{given}' \
                 details='boom (Panic)']\n",
            ),
        );
        assert_eq!(
            writer.finalize(),
            Some(format!(
                "##teamcity[message text='|n{given}|n']\n\
                 ##teamcity[testFinished timestamp='{TS}' \
                 name='\"should fail\"']\n\
                 ##teamcity[testSuiteFinished timestamp='{TS}' name='Login']",
            )),
        );
        assert_eq!(writer.finalize(), None);
    }

    #[test]
    fn reports_single_failure_per_scenario() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                step("Given", "a", Status::Failed),
                exception(None),
                step("Then", "b", Status::Skipped),
                exception(None),
            ],
        );

        let output = written(&writer);
        assert_eq!(output.matches("##teamcity[testFailed").count(), 1);
        assert_eq!(writer.failures().len(), 1);
    }

    #[test]
    fn reports_failures_of_different_scenarios() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("one"),
                exception(None),
                scenario("two"),
                exception(None),
            ],
        );

        assert_eq!(written(&writer).matches("##teamcity[testFailed").count(), 2);
    }

    #[test]
    fn ignores_non_failed_exceptions() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                Event::Exception {
                    exception: Exception::new("pending", "Pending"),
                    status: Status::Pending,
                    step: None,
                },
            ],
        );

        assert!(!written(&writer).contains("testFailed"));
        assert!(writer.failures().is_empty());
    }

    #[test]
    fn labels_failure_without_step_as_empty() {
        let mut writer = writer();

        feed(&mut writer, [feature("F"), scenario("s"), exception(None)]);

        assert!(written(&writer).contains(
            "name='\"s\"' message='' details='boom (Panic)'",
        ));
    }

    #[test]
    fn prefers_explicit_failed_step() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                step("Given", "earlier", Status::Passed),
                exception(Some(FailedStep {
                    keyword: "When".into(),
                    step: StepMatch::new("explicit").at("tests/steps.rs", 7),
                })),
            ],
        );

        let label = escape(step_line("When", "explicit", "failed"));
        assert!(written(&writer).contains(&format!("message='{label}'")));
    }

    #[test]
    fn does_not_carry_step_into_next_scenario() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("one"),
                step("Given", "a", Status::Passed),
                scenario("two"),
                exception(None),
            ],
        );

        assert!(written(&writer).contains("name='\"two\"' message=''"));
    }

    #[test]
    fn buffers_warnings_for_non_passed_steps() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                step("Given", "missing", Status::Undefined),
            ],
        );

        let line = escape(step_line("Given", "missing", "undefined"));
        assert!(writer
            .trailing()
            .unwrap()
            .starts_with(&format!("##teamcity[message text='|n{line}|n']")));
    }

    #[test]
    fn reports_table_rows() {
        let mut writer = writer().expand(true);

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("outline"),
                Event::BeforeOutlineTable(OutlineTable {
                    header: vec!["user".into(), "password".into()],
                }),
                scenario("| admin | secret |"),
                Event::AfterTableRow(TableRow {
                    name: "| admin | secret |".into(),
                    line: 9,
                    exception: None,
                }),
                scenario("| guest | nope |"),
                Event::AfterTableRow(TableRow {
                    name: "| guest | nope |".into(),
                    line: 10,
                    exception: Some(Exception::new("denied", "Panic")),
                }),
                feature("G"),
            ],
        );

        let outline = escape("10:11:12.130 running outline: | user | password |");
        let passed = escape(format!(
            "10:11:12.130 {:>10} {:<90} @ 9",
            "passed", "| admin | secret |",
        ));
        let failed = escape(format!(
            "10:11:12.130 {:>10} {:<90} @ 10",
            "failed", "| guest | nope |",
        ));
        let output = written(&writer);
        assert_eq!(output.matches("##teamcity[testStarted").count(), 1);
        assert!(output.contains(&format!(
            "##teamcity[testFailed timestamp='{TS}' name='\"outline\"' \
             message='{failed}' details='denied (Panic)']\n\
             ##teamcity[message text='|n{outline}|n{passed}|n']\n\
             ##teamcity[testFinished timestamp='{TS}' name='\"outline\"']\n\
             ##teamcity[testSuiteFinished timestamp='{TS}' name='F']\n\
             ##teamcity[testSuiteStarted timestamp='{TS}' name='G']\n",
        )));
    }

    #[test]
    fn reports_row_expansions_as_tests_without_expanding() {
        let mut writer = writer();

        feed(
            &mut writer,
            [feature("F"), scenario("outline"), scenario("| a | b |")],
        );

        assert!(written(&writer).contains(
            "##teamcity[testStarted timestamp='2024-05-06T10:11:12.130' \
             name='\"|| a || b ||\"' captureStandardOutput='true']",
        ));
    }

    #[test]
    fn keeps_output_within_its_feature() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("A"),
                step("Given", "background of A", Status::Passed),
                feature("B"),
                scenario("b1"),
                scenario("b2"),
            ],
        );

        let line = escape(step_line("Given", "background of A", "passed"));
        assert_eq!(
            written(&writer),
            format!(
                "##teamcity[testSuiteStarted timestamp='{TS}' name='A']\n\
                 ##teamcity[message text='|n{line}|n']\n\
                 ##teamcity[testSuiteFinished timestamp='{TS}' name='A']\n\
                 ##teamcity[testSuiteStarted timestamp='{TS}' name='B']\n\
                 ##teamcity[testStarted timestamp='{TS}' \
                 name='\"b1\"' captureStandardOutput='true']\n\
                 ##teamcity[testFinished timestamp='{TS}' name='\"b1\"']\n\
                 ##teamcity[testStarted timestamp='{TS}' \
                 name='\"b2\"' captureStandardOutput='true']\n",
            ),
        );
    }

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<u8>>>);

    impl io::Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Shared {
        fn contents(&self) -> String {
            String::from_utf8(self.0.borrow().clone()).unwrap()
        }
    }

    fn closing_text() -> String {
        let line = escape(step_line("Given", "a", "passed"));
        format!(
            "##teamcity[message text='|n{line}|n']\n\
             ##teamcity[testFinished timestamp='{TS}' name='\"s\"']\n\
             ##teamcity[testSuiteFinished timestamp='{TS}' name='F']\n",
        )
    }

    type WithExit = TeamCity<Vec<u8>, fn() -> NaiveDateTime, Shared>;

    fn run_until_exit(exit: Shared) -> WithExit {
        let mut writer =
            TeamCity::custom(Vec::new(), at as fn() -> NaiveDateTime, exit);
        let events =
            [feature("F"), scenario("s"), step("Given", "a", Status::Passed)];
        for ev in events {
            writer.try_handle_event(ev).unwrap();
        }
        writer
    }

    #[test]
    fn closes_into_exit_output_once_dropped() {
        let exit = Shared::default();
        let writer = run_until_exit(exit.clone());
        assert_eq!(exit.contents(), "");

        drop(writer);

        assert_eq!(exit.contents(), closing_text());
    }

    #[test]
    fn closes_into_exit_output_once_unwrapped() {
        let exit = Shared::default();
        let writer = run_until_exit(exit.clone());

        let output = String::from_utf8(writer.into_output()).unwrap();

        assert!(!output.contains("testFinished"));
        assert_eq!(exit.contents(), closing_text());
    }

    #[test]
    fn applies_cli_expansion() {
        let mut writer = writer();

        for ev in [feature("F"), scenario("outline"), scenario("| a |")] {
            writer.handle_event(ev, &Cli::with_expand(true));
        }

        assert_eq!(written(&writer).matches("##teamcity[testStarted").count(), 1);
    }

    #[test]
    fn keeps_trailing_text_current() {
        let mut writer = writer();

        feed(&mut writer, [feature("F"), scenario("one")]);
        assert!(writer.trailing().unwrap().contains("name='\"one\"'"));

        feed(&mut writer, [scenario("two")]);
        let trailing = writer.trailing().unwrap();
        assert!(trailing.contains("name='\"two\"'"));
        assert!(!trailing.contains("name='\"one\"'"));
    }

    #[test]
    fn finishes_into_primary_output() {
        let mut writer = writer();
        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                step("Given", "a", Status::Passed),
            ],
        );

        writer.finish().unwrap();

        let output = written(&writer);
        assert!(output.ends_with(&format!(
            "##teamcity[testFinished timestamp='{TS}' name='\"s\"']\n\
             ##teamcity[testSuiteFinished timestamp='{TS}' name='F']\n",
        )));
        assert_eq!(output.matches("##teamcity[message").count(), 1);
        assert_eq!(writer.trailing(), None);
    }

    #[test]
    fn formats_step_arguments_and_missing_location() {
        let mut writer = writer();

        feed(
            &mut writer,
            [
                feature("F"),
                scenario("s"),
                Event::StepExecuted {
                    keyword: "Given".into(),
                    step: StepMatch {
                        value: "I have 3 apples".into(),
                        captures: vec![7..8],
                        location: None,
                    },
                    status: Status::Passed,
                    indent: 4,
                    background: true,
                },
            ],
        );

        let line = escape(format!(
            "10:11:12.130 {:>10} Given {:<90} @",
            "passed", "I have 3 apples",
        ));
        assert!(writer.trailing().unwrap().contains(line.as_str()));
    }

    #[test]
    #[should_panic(expected = "Failed to write: I/O error: closed")]
    fn panics_on_broken_output() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let mut writer = TeamCity::custom(Broken, at, Vec::new());

        writer.handle_event(feature("F"), &Cli::default());
    }
}
