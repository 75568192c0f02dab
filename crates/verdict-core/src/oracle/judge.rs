use crate::{
    error::OracleError,
    expected::Expected,
    key::EntityKey,
    obs::sink::{self, CheckOp, VerdictEvent},
    oracle::Oracle,
    outcome::{Mismatch, Verdict},
    result::{ActualResult, Execution},
    value::Value,
};

impl Oracle {
    /// Judge one execution against a declared expectation.
    ///
    /// An empty actual result is accepted as an empty sequence of whatever
    /// shape the expectation wants. Any signal the expectation did not name
    /// comes back as `Err` without being interpreted.
    pub fn judge(
        &self,
        execution: Execution<ActualResult>,
        expected: &Expected,
    ) -> Result<Verdict, OracleError> {
        let verdict = self.judge_inner(execution, expected);
        if verdict.is_err() {
            sink::record(VerdictEvent::Rejected {
                op: CheckOp::Judge,
            });
        }

        verdict.map(|verdict| sink::observe(CheckOp::Judge, verdict))
    }

    fn judge_inner(
        &self,
        execution: Execution<ActualResult>,
        expected: &Expected,
    ) -> Result<Verdict, OracleError> {
        let actual = match (execution, expected) {
            (Ok(actual), _) => actual,
            (Err(signal), Expected::Signal(kind)) => return Self::signal_verdict(Err(signal), *kind),
            (Err(signal), _) => return Err(signal.into()),
        };

        let verdict = match expected {
            Expected::Empty => Self::empty_verdict(&actual),

            Expected::Keys(keys) => match entity_keys(actual) {
                Ok(actual) => self.compare_key_set(&actual, keys),
                Err(shape) => shape_mismatch(&shape, expected),
            },

            Expected::OrderedKeys {
                keys,
                allow_duplicates,
            } => match entity_keys(actual) {
                Ok(actual) => {
                    let keys: Vec<EntityKey> = keys.iter().map(EntityKey::from).collect();
                    self.compare_key_sequence(&actual, &keys, *allow_duplicates)?
                }
                Err(shape) => shape_mismatch(&shape, expected),
            },

            Expected::Values { values, mode } => match scalar_values(actual) {
                Ok(actual) => self.compare_sequence(&actual, values, *mode),
                Err(shape) => shape_mismatch(&shape, expected),
            },

            Expected::Tuples { rows, mode } => match actual {
                ActualResult::Empty => self.compare_row_set(&[], rows, *mode)?,
                ActualResult::Tuples(actual) => self.compare_row_set(&actual, rows, *mode)?,
                other => shape_mismatch(&other, expected),
            },

            Expected::Signal(kind) => Self::signal_verdict(Ok(describe(&actual)), *kind)?,
        };

        Ok(verdict)
    }
}

fn shape_mismatch(actual: &ActualResult, expected: &Expected) -> Verdict {
    Verdict::fail(Mismatch::Shape {
        actual: actual.shape(),
        expected: expected.shape_label(),
    })
}

fn describe(actual: &ActualResult) -> String {
    format!("{} of {} row(s)", actual.shape(), actual.len())
}

// Entity-shaped results as keys; scalar keys count as entity references.
fn entity_keys(actual: ActualResult) -> Result<Vec<EntityKey>, ActualResult> {
    match actual {
        ActualResult::Empty => Ok(Vec::new()),
        ActualResult::Entity(key) | ActualResult::Scalar(Value::Key(key)) => Ok(vec![key]),
        ActualResult::Entities(keys) => Ok(keys),
        other => Err(other),
    }
}

// Single-column results as values; entity references become key cells.
fn scalar_values(actual: ActualResult) -> Result<Vec<Value>, ActualResult> {
    match actual {
        ActualResult::Empty => Ok(Vec::new()),
        ActualResult::Scalar(value) => Ok(vec![value]),
        ActualResult::Scalars(values) => Ok(values),
        ActualResult::Entity(key) => Ok(vec![Value::Key(key)]),
        ActualResult::Entities(keys) => Ok(keys.into_iter().map(Value::Key).collect()),
        other @ ActualResult::Tuples(_) => Err(other),
    }
}
