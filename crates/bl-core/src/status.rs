//! Test-result status and the status-carrying node.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::config::BoologOptions;
use crate::constants::{
    EMOJI_FAILING_TEST, EMOJI_INCONCLUSIVE_TEST, EMOJI_PASSING_TEST,
};
use crate::error::Result;
use crate::html::highlight_with;
use crate::node::Boolog;
use crate::theme::SectionStyle;

/// Outcome of a test as far as it has been reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
    #[default]
    Unset,
    Passing,
    Failing,
    Inconclusive,
}

impl TestStatus {
    /// Fold a newly reported condition into this status.
    ///
    /// Passing only replaces Unset. Failing replaces anything but
    /// Inconclusive. Inconclusive replaces everything. Unset changes nothing.
    pub fn merge(self, condition: TestStatus) -> TestStatus {
        match (self, condition) {
            (current, TestStatus::Unset) => current,
            (_, TestStatus::Inconclusive) => TestStatus::Inconclusive,
            (TestStatus::Inconclusive, _) => TestStatus::Inconclusive,
            (_, TestStatus::Failing) => TestStatus::Failing,
            (TestStatus::Unset, TestStatus::Passing) => TestStatus::Passing,
            (current, TestStatus::Passing) => current,
        }
    }

    /// Subsection style used when a test node is embedded.
    pub fn style(&self) -> SectionStyle {
        match self {
            TestStatus::Passing => SectionStyle::PassingTestResult,
            TestStatus::Failing => SectionStyle::FailingTestResult,
            TestStatus::Unset | TestStatus::Inconclusive => SectionStyle::InconclusiveTestResult,
        }
    }

    /// Emoji used when a test node is embedded.
    pub fn emoji(&self) -> &'static str {
        match self {
            TestStatus::Passing => EMOJI_PASSING_TEST,
            TestStatus::Failing => EMOJI_FAILING_TEST,
            TestStatus::Unset | TestStatus::Inconclusive => EMOJI_INCONCLUSIVE_TEST,
        }
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Unset => write!(f, "unset"),
            TestStatus::Passing => write!(f, "passing"),
            TestStatus::Failing => write!(f, "failing"),
            TestStatus::Inconclusive => write!(f, "inconclusive"),
        }
    }
}

/// A Boolog that tracks the status of the test it logs.
#[derive(Debug)]
pub struct TestBoolog {
    boolog: Boolog,
    status: TestStatus,
}

impl TestBoolog {
    pub fn new(options: BoologOptions) -> Self {
        Self {
            boolog: Boolog::new(options),
            status: TestStatus::Unset,
        }
    }

    pub fn status(&self) -> TestStatus {
        self.status
    }

    pub fn report_condition(&mut self, condition: TestStatus) -> TestStatus {
        self.status = self.status.merge(condition);
        self.status
    }

    /// Log a checked condition and report Passing or Failing.
    pub fn check(&mut self, condition: bool, description: &str) -> Result<bool> {
        if condition {
            self.boolog.info_with(description, EMOJI_PASSING_TEST)?;
            self.report_condition(TestStatus::Passing);
        } else {
            self.log_highlighted(description, EMOJI_FAILING_TEST, SectionStyle::ImpliedBad)?;
            self.report_condition(TestStatus::Failing);
        }
        Ok(condition)
    }

    /// Log a precondition; a false one makes the test Inconclusive.
    pub fn assume(&mut self, condition: bool, description: &str) -> Result<bool> {
        if condition {
            self.boolog.info_with(description, EMOJI_PASSING_TEST)?;
        } else {
            self.log_highlighted(description, EMOJI_INCONCLUSIVE_TEST, SectionStyle::ImpliedCaution)?;
            self.report_condition(TestStatus::Inconclusive);
        }
        Ok(condition)
    }

    fn log_highlighted(&mut self, description: &str, emoji: &str, style: SectionStyle) -> Result<()> {
        let timestamp = Local::now();
        self.boolog
            .write_to_html(&highlight_with(description, style.css_class()), emoji, Some(timestamp))?;
        self.boolog.echo_plain_text(description, emoji, Some(timestamp))
    }

    pub fn into_inner(self) -> Boolog {
        self.boolog
    }
}

impl Deref for TestBoolog {
    type Target = Boolog;

    fn deref(&self) -> &Boolog {
        &self.boolog
    }
}

impl DerefMut for TestBoolog {
    fn deref_mut(&mut self) -> &mut Boolog {
        &mut self.boolog
    }
}

impl Boolog {
    /// Embed a test node styled by its status.
    pub fn show_test_boolog(&mut self, test: &mut TestBoolog) -> Result<String> {
        let status = test.status();
        self.show_boolog_with(&mut test.boolog, status.emoji(), status.style())
    }
}
