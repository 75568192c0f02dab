//! Aggregation of several oracle verdicts into one test outcome.
use crate::{error::OracleError, outcome::Verdict};
use std::fmt;

///
/// CheckSet
///
/// Collects named sub-checks of one test method (`pass1`, `pass2`, ...)
/// and turns them into a single pass/fail that names every failed one.
///

#[derive(Debug)]
#[must_use = "a CheckSet does nothing until `finish` is called"]
pub struct CheckSet {
    test: String,
    checks: usize,
    failures: Vec<FailedCheck>,
}

impl CheckSet {
    pub fn new(test: impl Into<String>) -> Self {
        Self {
            test: test.into(),
            checks: 0,
            failures: Vec::new(),
        }
    }

    /// Record one verdict; returns whether it passed.
    pub fn check(&mut self, name: impl Into<String>, verdict: Verdict) -> bool {
        self.checks += 1;
        let passed = verdict.is_pass();
        if let Verdict::Fail(mismatch) = verdict {
            self.failures.push(FailedCheck {
                name: name.into(),
                reason: FailureReason::Mismatch(mismatch.to_string()),
            });
        }

        passed
    }

    /// Record an oracle call that may have refused its input. A refusal is
    /// an unconditional failure, reported apart from mismatches.
    pub fn check_result(
        &mut self,
        name: impl Into<String>,
        result: Result<Verdict, OracleError>,
    ) -> bool {
        match result {
            Ok(verdict) => self.check(name, verdict),
            Err(err) => {
                self.checks += 1;
                self.failures.push(FailedCheck {
                    name: name.into(),
                    reason: FailureReason::Error(err.display_with_class()),
                });
                false
            }
        }
    }

    #[must_use]
    pub const fn checks(&self) -> usize {
        self.checks
    }

    #[must_use]
    pub fn failures(&self) -> &[FailedCheck] {
        &self.failures
    }

    #[must_use]
    pub fn is_passing(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn finish(self) -> Result<(), CheckFailure> {
        if self.failures.is_empty() {
            return Ok(());
        }

        Err(CheckFailure {
            test: self.test,
            checks: self.checks,
            failures: self.failures,
        })
    }
}

///
/// FailedCheck
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FailedCheck {
    pub name: String,
    pub reason: FailureReason,
}

impl fmt::Display for FailedCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            FailureReason::Mismatch(diagnostic) => write!(f, "{}: {diagnostic}", self.name),
            FailureReason::Error(message) => write!(f, "{}: error: {message}", self.name),
        }
    }
}

///
/// FailureReason
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FailureReason {
    Mismatch(String),
    Error(String),
}

///
/// CheckFailure
///
/// Combined failure of one test method.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CheckFailure {
    pub test: String,
    pub checks: usize,
    pub failures: Vec<FailedCheck>,
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failed ({} of {} checks)",
            self.test,
            self.failures.len(),
            self.checks
        )?;
        for failure in &self.failures {
            write!(f, "\n  - {failure}")?;
        }

        Ok(())
    }
}

impl std::error::Error for CheckFailure {}

///
/// TESTS
///
