use crate::result::{ResultShape, SignalKind};
use thiserror::Error as ThisError;

///
/// Mismatch
///
/// Why a comparison failed. Rendered into the human-readable diagnostic;
/// the rendering is not part of the pass/fail contract.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Mismatch {
    #[error("cardinality mismatch: actual size {actual}, expected size {expected}")]
    Cardinality { actual: usize, expected: usize },

    #[error(
        "element mismatch: missing [{}], unexpected [{}]{}",
        .missing.join(", "),
        .unexpected.join(", "),
        omitted_suffix(.omitted)
    )]
    Element {
        missing: Vec<String>,
        unexpected: Vec<String>,
        omitted: usize,
    },

    #[error("position {index}: actual {actual}, expected {expected}")]
    Position {
        index: usize,
        actual: String,
        expected: String,
    },

    #[error("cell {index}: actual {actual}, expected {expected}")]
    Cell {
        index: usize,
        actual: String,
        expected: String,
    },

    #[error("duplicate element {element} at position {index} (first seen at {first})")]
    Duplicate {
        index: usize,
        first: usize,
        element: String,
    },

    #[error("width mismatch: actual width {actual}, expected width {expected}")]
    Width { actual: usize, expected: usize },

    #[error("shape mismatch: actual {actual}, expected {expected}")]
    Shape {
        actual: ResultShape,
        expected: &'static str,
    },

    #[error("expected failure not observed: expected {expected} signal, execution returned {found}")]
    ExpectedFailureNotObserved { expected: SignalKind, found: String },
}

impl Mismatch {
    #[must_use]
    pub const fn kind(&self) -> MismatchKind {
        match self {
            Self::Cardinality { .. } => MismatchKind::Cardinality,
            Self::Element { .. } => MismatchKind::Element,
            Self::Position { .. } => MismatchKind::Position,
            Self::Cell { .. } => MismatchKind::Cell,
            Self::Duplicate { .. } => MismatchKind::Duplicate,
            Self::Width { .. } => MismatchKind::Width,
            Self::Shape { .. } => MismatchKind::Shape,
            Self::ExpectedFailureNotObserved { .. } => MismatchKind::ExpectedFailureNotObserved,
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn omitted_suffix(omitted: &usize) -> String {
    if *omitted == 0 {
        String::new()
    } else {
        format!(" (+{omitted} more)")
    }
}

///
/// MismatchKind
///
/// Failure category. `ExpectedFailureNotObserved` marks an API-contract
/// violation by the engine rather than a query-semantics one.
///

#[remain::sorted]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum MismatchKind {
    Cardinality,
    Cell,
    Duplicate,
    Element,
    ExpectedFailureNotObserved,
    Position,
    Shape,
    Width,
}

impl MismatchKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cardinality => "cardinality",
            Self::Cell => "cell",
            Self::Duplicate => "duplicate",
            Self::Element => "element",
            Self::ExpectedFailureNotObserved => "expected_failure_not_observed",
            Self::Position => "position",
            Self::Shape => "shape",
            Self::Width => "width",
        }
    }

    /// Whether the failure is an API-contract violation rather than a
    /// query-semantics mismatch.
    #[must_use]
    pub const fn is_contract_violation(self) -> bool {
        matches!(self, Self::ExpectedFailureNotObserved)
    }
}
