//! What the query-execution collaborator hands back: a result value, or an
//! out-of-band signal in its place.
use crate::{key::EntityKey, traits::HasKey, tuple::Tuple, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// Execution
///
/// A query execution outcome as seen by the oracle.
///

pub type Execution<T = ActualResult> = Result<T, ExecutionSignal>;

///
/// ActualResult
///
/// Ordered result produced by one query execution.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ActualResult {
    Empty,
    Scalar(Value),
    Entity(EntityKey),
    Entities(Vec<EntityKey>),
    Scalars(Vec<Value>),
    Tuples(Vec<Tuple>),
}

impl ActualResult {
    /// Collect entity keys through the `HasKey` capability.
    pub fn entities<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: HasKey,
    {
        Self::Entities(rows.into_iter().map(|row| row.entity_key()).collect())
    }

    pub fn scalars<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Scalars(rows.into_iter().map(Into::into).collect())
    }

    pub fn tuples<I>(rows: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tuple>,
    {
        Self::Tuples(rows.into_iter().map(Into::into).collect())
    }

    /// Number of rows; a lone `Scalar(Null)` counts as one row.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Scalar(_) | Self::Entity(_) => 1,
            Self::Entities(rows) => rows.len(),
            Self::Scalars(rows) => rows.len(),
            Self::Tuples(rows) => rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub const fn shape(&self) -> ResultShape {
        match self {
            Self::Empty => ResultShape::Empty,
            Self::Scalar(_) => ResultShape::Scalar,
            Self::Entity(_) => ResultShape::Entity,
            Self::Entities(_) => ResultShape::Entities,
            Self::Scalars(_) => ResultShape::Scalars,
            Self::Tuples(_) => ResultShape::Tuples,
        }
    }
}

///
/// ResultShape
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResultShape {
    Empty,
    Scalar,
    Entity,
    Entities,
    Scalars,
    Tuples,
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Empty => "empty",
            Self::Scalar => "single scalar",
            Self::Entity => "single entity",
            Self::Entities => "entity sequence",
            Self::Scalars => "scalar sequence",
            Self::Tuples => "tuple sequence",
        };
        write!(f, "{label}")
    }
}

///
/// ExecutionSignal
///
/// Failure raised by the execution layer instead of returning a value.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ExecutionSignal {
    #[error("no result")]
    NoResult,

    #[error("non-unique result ({rows} rows)")]
    NonUniqueResult { rows: usize },

    #[error("execution failed: {0}")]
    Other(String),
}

impl ExecutionSignal {
    /// The expectable kind of this signal; `Other` is never expectable.
    #[must_use]
    pub const fn kind(&self) -> Option<SignalKind> {
        match self {
            Self::NoResult => Some(SignalKind::NoResult),
            Self::NonUniqueResult { .. } => Some(SignalKind::NonUniqueResult),
            Self::Other(_) => None,
        }
    }
}

///
/// SignalKind
///
/// Signals a test may declare as its expected outcome.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SignalKind {
    NoResult,
    NonUniqueResult,
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NoResult => "no-result",
            Self::NonUniqueResult => "non-unique-result",
        };
        write!(f, "{label}")
    }
}

/// Single-result semantics: exactly one row, otherwise the matching signal.
pub fn single<T>(rows: impl IntoIterator<Item = T>) -> Execution<T> {
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return Err(ExecutionSignal::NoResult);
    };

    let extra = rows.count();
    if extra > 0 {
        return Err(ExecutionSignal::NonUniqueResult { rows: extra + 1 });
    }

    Ok(first)
}

///
/// TESTS
///
