use crate::{config::ConfigError, result::ExecutionSignal};
use std::fmt;
use thiserror::Error as ThisError;

///
/// OracleError
///
/// Raised for inputs the oracle refuses to judge. Every variant points at a
/// defect in the test (or its configuration) or at an execution signal the
/// test did not expect; none of them is a query-result mismatch.
///

#[derive(Debug, ThisError)]
pub enum OracleError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error(
        "malformed expectation: key '{key}' appears at positions {first} and {second} of a distinct ordered expectation"
    )]
    DuplicateExpectedKey {
        key: String,
        first: usize,
        second: usize,
    },

    #[error("malformed expectation: row {index} has width {width}, declared width is {declared}")]
    RaggedExpectation {
        index: usize,
        width: usize,
        declared: usize,
    },

    #[error("unexpected execution signal: {0}")]
    UnexpectedSignal(ExecutionSignal),
}

impl OracleError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Config(_) => ErrorClass::Config,
            Self::DuplicateExpectedKey { .. } | Self::RaggedExpectation { .. } => {
                ErrorClass::MalformedInput
            }
            Self::UnexpectedSignal(_) => ErrorClass::Execution,
        }
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

impl From<ExecutionSignal> for OracleError {
    fn from(signal: ExecutionSignal) -> Self {
        Self::UnexpectedSignal(signal)
    }
}

///
/// ErrorClass
/// Error taxonomy for reporting.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    Config,
    Execution,
    MalformedInput,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Config => "config",
            Self::Execution => "execution",
            Self::MalformedInput => "malformed_input",
        };
        write!(f, "{label}")
    }
}
