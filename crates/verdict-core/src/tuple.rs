use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// Tuple
///
/// Fixed-width ordered row of cells produced by a multi-select or
/// constructor-expression projection.
///

#[derive(Clone, Debug, Default, Deref, Eq, Hash, IntoIterator, PartialEq)]
pub struct Tuple(Vec<Value>);

impl Tuple {
    #[must_use]
    pub const fn new(cells: Vec<Value>) -> Self {
        Self(cells)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn cells(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn into_cells(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for Tuple {
    fn from(cells: Vec<Value>) -> Self {
        Self(cells)
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, cell) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{cell}")?;
        }
        f.write_str(")")
    }
}
