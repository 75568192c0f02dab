mod mismatch;

pub use mismatch::{Mismatch, MismatchKind};

use std::fmt;

///
/// Verdict
///
/// Outcome of one oracle comparison. An ordinary mismatch is a failing
/// verdict, never an error, so callers can aggregate several checks.
///

#[derive(Clone, Debug, Eq, PartialEq)]
#[must_use]
pub enum Verdict {
    Pass(PassKind),
    Fail(Mismatch),
}

impl Verdict {
    pub const fn matched() -> Self {
        Self::Pass(PassKind::Matched)
    }

    pub const fn expected_failure_met() -> Self {
        Self::Pass(PassKind::ExpectedFailureMet)
    }

    pub const fn fail(mismatch: Mismatch) -> Self {
        Self::Fail(mismatch)
    }

    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail(_))
    }

    #[must_use]
    pub const fn pass_kind(&self) -> Option<PassKind> {
        match self {
            Self::Pass(kind) => Some(*kind),
            Self::Fail(_) => None,
        }
    }

    #[must_use]
    pub const fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            Self::Pass(_) => None,
            Self::Fail(mismatch) => Some(mismatch),
        }
    }

    /// Free-form diagnostic for failure messages; empty on pass.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        self.mismatch().map(ToString::to_string).unwrap_or_default()
    }
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_pass()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass(kind) => write!(f, "pass ({kind})"),
            Self::Fail(mismatch) => write!(f, "fail: {mismatch}"),
        }
    }
}

///
/// PassKind
///
/// Ordinary success (including expected-empty success) is distinct from
/// observing an expected failure signal.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum PassKind {
    Matched,
    ExpectedFailureMet,
}

impl PassKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Matched => "matched",
            Self::ExpectedFailureMet => "expected failure met",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
