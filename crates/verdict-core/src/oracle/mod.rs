//! The result oracle: judges an actual query result against a declared
//! expectation.
//!
//! Every public entry point returns a [`Verdict`] for ordinary mismatches and
//! reports it through the obs sink. `Err` is reserved for inputs that point
//! at a defect in the test itself, or for execution signals the test did not
//! declare.
mod judge;
mod sequence;

#[cfg(test)]
mod tests;

use crate::{
    config::{ConfigError, OracleConfig},
    error::OracleError,
    key::EntityKey,
    mode::ComparisonMode,
    obs::sink::{self, CheckOp, VerdictEvent},
    outcome::{Mismatch, Verdict},
    result::{ActualResult, Execution, SignalKind},
    traits::HasKey,
    tuple::Tuple,
    value::{Value, canonical_cmp, numeric_within},
};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
};

///
/// Oracle
///
/// Stateless judge. Copy it freely; it holds configuration only.
///

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oracle {
    config: OracleConfig,
}

impl Oracle {
    pub fn new(config: OracleConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &OracleConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    /// Order-insensitive set comparison of entity keys.
    ///
    /// Passes iff the distinct keys of `actual` equal `expected_keys`
    /// exactly; repeated entities in `actual` collapse.
    pub fn compare_entities_by_key<E: HasKey>(
        &self,
        actual: &[E],
        expected_keys: &BTreeSet<String>,
    ) -> Verdict {
        self.compare_entities_by_key_with(actual, HasKey::entity_key, expected_keys)
    }

    /// [`Self::compare_entities_by_key`] with a caller-supplied key extractor.
    pub fn compare_entities_by_key_with<E>(
        &self,
        actual: &[E],
        key_of: impl Fn(&E) -> EntityKey,
        expected_keys: &BTreeSet<String>,
    ) -> Verdict {
        let actual: Vec<EntityKey> = actual.iter().map(key_of).collect();
        let verdict = self.compare_key_set(&actual, expected_keys);

        sink::observe(CheckOp::EntitiesByKey, verdict)
    }

    /// Order-sensitive comparison of entity keys.
    ///
    /// Lengths are compared before any element. With `allow_duplicates`
    /// false, the expectation must be duplicate-free and a repeated key in
    /// `actual` fails; with it true, duplicates must line up positionally.
    pub fn compare_entities_by_key_ordered<E, K>(
        &self,
        actual: &[E],
        expected_keys: &[K],
        allow_duplicates: bool,
    ) -> Result<Verdict, OracleError>
    where
        E: HasKey,
        K: AsRef<str>,
    {
        let actual: Vec<EntityKey> = actual.iter().map(HasKey::entity_key).collect();
        let expected: Vec<EntityKey> = expected_keys
            .iter()
            .map(|key| EntityKey::new(key.as_ref()))
            .collect();

        let verdict = self.compare_key_sequence(&actual, &expected, allow_duplicates);
        if verdict.is_err() {
            sink::record(VerdictEvent::Rejected {
                op: CheckOp::EntitiesByKeyOrdered,
            });
        }

        verdict.map(|verdict| sink::observe(CheckOp::EntitiesByKeyOrdered, verdict))
    }

    /// Compare already-extracted keys under any mode.
    pub fn compare_keys(
        &self,
        actual: &[EntityKey],
        expected: &[EntityKey],
        mode: ComparisonMode,
    ) -> Verdict {
        let verdict = self.compare_sequence(actual, expected, mode);

        sink::observe(CheckOp::Keys, verdict)
    }

    // ------------------------------------------------------------------
    // Scalars and tuples
    // ------------------------------------------------------------------

    /// Order-sensitive element-wise comparison of a single-column result.
    ///
    /// `Null` matches `Null`; numeric representations are normalized.
    /// Sort both sides with [`crate::value::sort_canonical`] first when the
    /// query had no ORDER BY, or use [`Self::compare_values`].
    pub fn compare_scalar_sequence(&self, actual: &[Value], expected: &[Value]) -> Verdict {
        let verdict = self.compare_sequence(actual, expected, ComparisonMode::Exact);

        sink::observe(CheckOp::ScalarSequence, verdict)
    }

    /// Compare a scalar sequence under any mode.
    pub fn compare_values(
        &self,
        actual: &[Value],
        expected: &[Value],
        mode: ComparisonMode,
    ) -> Verdict {
        let verdict = self.compare_sequence(actual, expected, mode);

        sink::observe(CheckOp::Values, verdict)
    }

    /// Compare one fixed-width row cell by cell; a width mismatch fails
    /// before any cell.
    pub fn compare_tuple(&self, actual: &Tuple, expected: &[Value]) -> Verdict {
        let verdict = self.compare_row(actual, expected);

        sink::observe(CheckOp::Tuple, verdict)
    }

    /// Compare a multi-select result row set under `mode`.
    ///
    /// Expected rows must share one declared width (a ragged expectation is
    /// a test defect). An actual row of a different width fails.
    pub fn compare_tuples(
        &self,
        actual: &[Tuple],
        expected: &[Tuple],
        mode: ComparisonMode,
    ) -> Result<Verdict, OracleError> {
        let verdict = self.compare_row_set(actual, expected, mode);
        if verdict.is_err() {
            sink::record(VerdictEvent::Rejected {
                op: CheckOp::Tuples,
            });
        }

        verdict.map(|verdict| sink::observe(CheckOp::Tuples, verdict))
    }

    // ------------------------------------------------------------------
    // Empty and signals
    // ------------------------------------------------------------------

    /// Satisfied only by a result of size zero.
    pub fn expect_empty(&self, actual: &ActualResult) -> Verdict {
        sink::observe(CheckOp::Empty, Self::empty_verdict(actual))
    }

    /// Expect the execution to fail with `expected`.
    ///
    /// A returned value fails as `ExpectedFailureNotObserved`. Any other
    /// signal is not interpreted and comes back as `Err`.
    pub fn expect_signal<T>(
        &self,
        execution: Execution<T>,
        expected: SignalKind,
    ) -> Result<Verdict, OracleError> {
        let verdict = Self::signal_verdict(execution.map(|_| "a value".to_string()), expected);
        if verdict.is_err() {
            sink::record(VerdictEvent::Rejected {
                op: CheckOp::Signal,
            });
        }

        verdict.map(|verdict| sink::observe(CheckOp::Signal, verdict))
    }

    // ------------------------------------------------------------------
    // Shared comparison primitives
    // ------------------------------------------------------------------

    /// Oracle equality for two cells under the active configuration.
    pub(crate) fn values_match(&self, left: &Value, right: &Value) -> bool {
        if left.is_numeric() && right.is_numeric() {
            if !self.config.numeric_coercion && left.tag() != right.tag() {
                return false;
            }
            if self.is_tolerant() && (left.is_float() || right.is_float()) {
                return numeric_within(left, right, self.config.float_tolerance);
            }
        }

        canonical_cmp(left, right) == Ordering::Equal
    }

    /// Total order for aligning cells, consistent with `values_match` when
    /// no float tolerance is active.
    ///
    /// Numeric representations only break ties when coercion is off, since
    /// only then do they decide equality.
    pub(crate) fn order_values(&self, left: &Value, right: &Value) -> Ordering {
        let cmp = canonical_cmp(left, right);
        if cmp == Ordering::Equal
            && !self.config.numeric_coercion
            && left.is_numeric()
            && right.is_numeric()
        {
            return left.tag().cmp(&right.tag());
        }

        cmp
    }

    pub(crate) fn is_tolerant(&self) -> bool {
        self.config.float_tolerance > 0.0
    }

    pub(crate) fn compare_key_set(
        &self,
        actual: &[EntityKey],
        expected_keys: &BTreeSet<String>,
    ) -> Verdict {
        let expected: Vec<EntityKey> = expected_keys.iter().map(EntityKey::from).collect();

        self.compare_sequence(actual, &expected, ComparisonMode::Set)
    }

    pub(crate) fn compare_key_sequence(
        &self,
        actual: &[EntityKey],
        expected: &[EntityKey],
        allow_duplicates: bool,
    ) -> Result<Verdict, OracleError> {
        if !allow_duplicates && let Some((first, second)) = first_duplicate(expected) {
            return Err(OracleError::DuplicateExpectedKey {
                key: expected[second].to_string(),
                first,
                second,
            });
        }

        if actual.len() != expected.len() {
            return Ok(Verdict::fail(Mismatch::Cardinality {
                actual: actual.len(),
                expected: expected.len(),
            }));
        }

        if !allow_duplicates && let Some((first, index)) = first_duplicate(actual) {
            return Ok(Verdict::fail(Mismatch::Duplicate {
                index,
                first,
                element: format!("\"{}\"", actual[index]),
            }));
        }

        Ok(self.compare_sequence(actual, expected, ComparisonMode::Exact))
    }

    pub(crate) fn compare_row(&self, actual: &Tuple, expected: &[Value]) -> Verdict {
        if actual.width() != expected.len() {
            return Verdict::fail(Mismatch::Width {
                actual: actual.width(),
                expected: expected.len(),
            });
        }

        let first_diff = actual
            .iter()
            .zip(expected.iter())
            .position(|(a, e)| !self.values_match(a, e));

        match first_diff {
            None => Verdict::matched(),
            Some(index) => Verdict::fail(Mismatch::Cell {
                index,
                actual: actual[index].to_string(),
                expected: expected[index].to_string(),
            }),
        }
    }

    pub(crate) fn compare_row_set(
        &self,
        actual: &[Tuple],
        expected: &[Tuple],
        mode: ComparisonMode,
    ) -> Result<Verdict, OracleError> {
        let Some(declared) = expected.first().map(Tuple::width) else {
            return Ok(self.compare_sequence(actual, expected, mode));
        };

        if let Some((index, row)) = expected
            .iter()
            .enumerate()
            .find(|(_, row)| row.width() != declared)
        {
            return Err(OracleError::RaggedExpectation {
                index,
                width: row.width(),
                declared,
            });
        }

        if let Some(row) = actual.iter().find(|row| row.width() != declared) {
            return Ok(Verdict::fail(Mismatch::Width {
                actual: row.width(),
                expected: declared,
            }));
        }

        Ok(self.compare_sequence(actual, expected, mode))
    }

    pub(crate) fn empty_verdict(actual: &ActualResult) -> Verdict {
        if actual.is_empty() {
            Verdict::matched()
        } else {
            Verdict::fail(Mismatch::Cardinality {
                actual: actual.len(),
                expected: 0,
            })
        }
    }

    // `execution` carries a rendering of the returned value, if any.
    pub(crate) fn signal_verdict(
        execution: Execution<String>,
        expected: SignalKind,
    ) -> Result<Verdict, OracleError> {
        match execution {
            Ok(found) => Ok(Verdict::fail(Mismatch::ExpectedFailureNotObserved {
                expected,
                found,
            })),
            Err(signal) if signal.kind() == Some(expected) => Ok(Verdict::expected_failure_met()),
            Err(signal) => Err(OracleError::UnexpectedSignal(signal)),
        }
    }
}

// Positions of the first repeated key: (first occurrence, repeat).
fn first_duplicate(keys: &[EntityKey]) -> Option<(usize, usize)> {
    let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
    for (index, key) in keys.iter().enumerate() {
        if let Some(first) = seen.insert(key.as_str(), index) {
            return Some((first, index));
        }
    }

    None
}
