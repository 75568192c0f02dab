use crate::value::Value;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use std::cmp::Ordering;

/// Total canonical comparator used by every oracle comparison.
///
/// Ordering rules:
/// 1. Canonical family rank
/// 2. Family-specific comparison for same-ranked values
///
/// Numeric values compare by magnitude regardless of representation, and
/// `Key` compares against `Text` by its rendered key. Two values are equal
/// for the oracle exactly when this returns `Ordering::Equal`.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    let rank = left.canonical_rank().cmp(&right.canonical_rank());
    if rank != Ordering::Equal {
        return rank;
    }

    canonical_cmp_same_rank(left, right)
}

/// Canonical order with the variant tag as tie-breaker, so values that are
/// equal across representations still sort deterministically.
fn sort_cmp(left: &Value, right: &Value) -> Ordering {
    canonical_cmp(left, right).then_with(|| left.tag().cmp(&right.tag()))
}

/// Sort values into canonical order in place.
///
/// Use on both sides before an order-sensitive comparison of a query that
/// had no ORDER BY clause.
pub fn sort_canonical(values: &mut [Value]) {
    values.sort_by(sort_cmp);
}

/// Absolute-tolerance numeric equality.
///
/// Both sides must be numeric; anything else is unequal.
pub(crate) fn numeric_within(left: &Value, right: &Value, tolerance: f64) -> bool {
    let (Some(left), Some(right)) = (as_f64(left), as_f64(right)) else {
        return false;
    };

    if left.is_nan() || right.is_nan() {
        return left.is_nan() && right.is_nan();
    }
    if left.is_infinite() || right.is_infinite() {
        return left == right;
    }

    (left - right).abs() <= tolerance
}

fn canonical_cmp_same_rank(left: &Value, right: &Value) -> Ordering {
    #[allow(clippy::match_same_arms)]
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Date(a), Value::Date(b)) => a.cmp(b),
        (Value::Time(a), Value::Time(b)) => a.cmp(b),
        (Value::Timestamp(a), Value::Timestamp(b)) => a.cmp(b),
        (Value::Null, Value::Null) => Ordering::Equal,
        _ if left.is_numeric() && right.is_numeric() => cmp_numeric(left, right),
        _ => match (left.as_text(), right.as_text()) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        },
    }
}

///
/// Numeric
///
/// Exact view over the numeric family: every integer variant widens to
/// `BigInt`; floats stay floats.
///

enum Numeric {
    Int(BigInt),
    Float(f64),
}

fn numeric(value: &Value) -> Option<Numeric> {
    match value {
        Value::Int(v) => Some(Numeric::Int(BigInt::from(*v))),
        Value::Uint(v) => Some(Numeric::Int(BigInt::from(*v))),
        Value::IntBig(v) => Some(Numeric::Int(v.clone())),
        Value::Float(v) => Some(Numeric::Float(v.get())),
        _ => None,
    }
}

fn as_f64(value: &Value) -> Option<f64> {
    match numeric(value)? {
        Numeric::Int(v) => v.to_f64(),
        Numeric::Float(v) => Some(v),
    }
}

fn cmp_numeric(left: &Value, right: &Value) -> Ordering {
    match (numeric(left), numeric(right)) {
        (Some(Numeric::Int(a)), Some(Numeric::Int(b))) => a.cmp(&b),
        (Some(Numeric::Float(a)), Some(Numeric::Float(b))) => a.total_cmp(&b),
        (Some(Numeric::Int(a)), Some(Numeric::Float(b))) => cmp_int_float(&a, b),
        (Some(Numeric::Float(a)), Some(Numeric::Int(b))) => cmp_int_float(&b, a).reverse(),
        _ => Ordering::Equal,
    }
}

// Exact integer/float comparison: an integral float equals the same integer.
// NaN sorts above +inf, matching `f64::total_cmp` for the canonical NaN.
fn cmp_int_float(int: &BigInt, float: f64) -> Ordering {
    if float.is_nan() || float == f64::INFINITY {
        return Ordering::Less;
    }
    if float == f64::NEG_INFINITY {
        return Ordering::Greater;
    }

    let floor = float.floor();
    let Some(floor_int) = BigInt::from_f64(floor) else {
        return int.to_f64().map_or(Ordering::Equal, |v| v.total_cmp(&float));
    };

    match int.cmp(&floor_int) {
        Ordering::Equal if float > floor => Ordering::Less,
        other => other,
    }
}
