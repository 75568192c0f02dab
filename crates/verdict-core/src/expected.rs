use crate::{mode::ComparisonMode, result::SignalKind, tuple::Tuple, value::Value};
use std::collections::BTreeSet;

///
/// Expected
///
/// What a test declares its query must produce.
///

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expected {
    /// No rows at all.
    Empty,

    /// Exactly these entities, in any order, duplicates collapsed.
    Keys(BTreeSet<String>),

    /// These entities in this order.
    OrderedKeys {
        keys: Vec<String>,
        allow_duplicates: bool,
    },

    /// A single-column result.
    Values {
        values: Vec<Value>,
        mode: ComparisonMode,
    },

    /// A multi-column result.
    Tuples {
        rows: Vec<Tuple>,
        mode: ComparisonMode,
    },

    /// The execution must fail with this signal.
    Signal(SignalKind),
}

impl Expected {
    pub fn keys<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn ordered_keys<I>(keys: I, allow_duplicates: bool) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::OrderedKeys {
            keys: keys.into_iter().map(Into::into).collect(),
            allow_duplicates,
        }
    }

    pub fn values<I>(values: I, mode: ComparisonMode) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Values {
            values: values.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    pub fn tuples<I>(rows: I, mode: ComparisonMode) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tuple>,
    {
        Self::Tuples {
            rows: rows.into_iter().map(Into::into).collect(),
            mode,
        }
    }

    #[must_use]
    pub const fn signal(kind: SignalKind) -> Self {
        Self::Signal(kind)
    }

    /// Shape label used in shape-mismatch diagnostics.
    #[must_use]
    pub const fn shape_label(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Keys(_) => "entity key set",
            Self::OrderedKeys { .. } => "ordered entity keys",
            Self::Values { .. } => "scalar sequence",
            Self::Tuples { .. } => "tuple sequence",
            Self::Signal(_) => "execution signal",
        }
    }
}
