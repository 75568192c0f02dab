use crate::{
    config::OracleConfig,
    error::OracleError,
    expected::Expected,
    key::EntityKey,
    mode::ComparisonMode,
    obs::metrics,
    oracle::Oracle,
    outcome::{Mismatch, MismatchKind, PassKind, Verdict},
    result::{ActualResult, ExecutionSignal, ResultShape, SignalKind, single},
    traits::HasKey,
    tuple::Tuple,
    value::{Value, sort_canonical},
};
use proptest::prelude::*;
use std::collections::BTreeSet;

// ---- helpers -----------------------------------------------------------

#[derive(Clone, Debug)]
struct Customer {
    id: String,
}

impl HasKey for Customer {
    fn entity_key(&self) -> EntityKey {
        EntityKey::new(self.id.as_str())
    }
}

fn customers(ids: &[&str]) -> Vec<Customer> {
    ids.iter()
        .map(|id| Customer { id: (*id).to_string() })
        .collect()
}

fn salaries() -> Vec<Value> {
    values![
        400.0, 500.0, 750.0, 1000.0, 1250.0, 1500.0, 2000.0, 2500.0, 3000.0, 3750.0, 4500.0,
        5000.0, 6000.0, 7500.0, 9000.0, 12000.0, 15000.0, 23000.0
    ]
}

fn mismatch_kind(verdict: &Verdict) -> Option<MismatchKind> {
    verdict.mismatch().map(Mismatch::kind)
}

// ---- compare_entities_by_key --------------------------------------------

#[test]
fn matching_key_set_passes() {
    let oracle = Oracle::default();

    let verdict = oracle.compare_entities_by_key(&customers(&["4", "9"]), &keys!["4", "9"]);

    assert_eq!(verdict, Verdict::matched());
}

#[test]
fn extra_entity_is_a_cardinality_mismatch() {
    let oracle = Oracle::default();

    let verdict =
        oracle.compare_entities_by_key(&customers(&["4", "9", "12"]), &keys!["4", "9"]);

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Cardinality {
            actual: 3,
            expected: 2,
        })
    );
}

#[test]
fn duplicated_entity_collapses_in_set_mode() {
    let oracle = Oracle::default();

    let verdict = oracle.compare_entities_by_key(&customers(&["4", "9", "9"]), &keys!["4", "9"]);

    assert!(verdict.is_pass());
}

#[test]
fn wrong_key_lists_missing_and_unexpected() {
    let oracle = Oracle::default();

    let verdict = oracle.compare_entities_by_key(&customers(&["4", "10"]), &keys!["4", "9"]);

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Element {
            missing: vec!["\"9\"".to_string()],
            unexpected: vec!["\"10\"".to_string()],
            omitted: 0,
        })
    );
}

#[test]
fn empty_expectation_against_single_entity_fails() {
    let oracle = Oracle::default();

    assert!(oracle.compare_entities_by_key::<Customer>(&[], &keys![]).is_pass());
    assert_eq!(
        mismatch_kind(&oracle.compare_entities_by_key(&customers(&["1"]), &keys![])),
        Some(MismatchKind::Cardinality)
    );
}

#[test]
fn key_extractor_variant_reads_foreign_shapes() {
    let oracle = Oracle::default();
    let rows = vec![(4_u32, "Jonathan"), (9, "Katy")];

    let verdict = oracle.compare_entities_by_key_with(
        &rows,
        |(id, _)| EntityKey::from(u64::from(*id)),
        &keys!["4", "9"],
    );

    assert!(verdict.is_pass());
}

#[test]
fn element_diagnostic_respects_limit() {
    let oracle = Oracle::new(OracleConfig::default().with_diagnostic_limit(2))
        .expect("valid config");

    let verdict =
        oracle.compare_entities_by_key(&customers(&["a", "b", "c", "d"]), &keys!["w", "x", "y", "z"]);

    let Some(Mismatch::Element {
        missing,
        unexpected,
        omitted,
    }) = verdict.mismatch()
    else {
        panic!("expected element mismatch, got {verdict}");
    };
    assert_eq!(missing.len(), 2);
    assert_eq!(unexpected.len(), 2);
    assert_eq!(*omitted, 4);
    assert!(verdict.diagnostic().ends_with("(+4 more)"));
}

// ---- compare_entities_by_key_ordered ------------------------------------

#[test]
fn ordered_keys_match_positionally() {
    let oracle = Oracle::default();

    let verdict = oracle
        .compare_entities_by_key_ordered(&customers(&["1", "2", "3"]), &["1", "2", "3"], false)
        .expect("well-formed expectation");

    assert!(verdict.is_pass());
}

#[test]
fn ordered_keys_reject_reversal() {
    let oracle = Oracle::default();

    let verdict = oracle
        .compare_entities_by_key_ordered(&customers(&["3", "2", "1"]), &["1", "2", "3"], false)
        .expect("well-formed expectation");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Position {
            index: 0,
            actual: "\"3\"".to_string(),
            expected: "\"1\"".to_string(),
        })
    );
}

#[test]
fn ordered_keys_fast_reject_on_length() {
    let oracle = Oracle::default();

    let verdict = oracle
        .compare_entities_by_key_ordered(&customers(&["1", "2"]), &["9", "8", "7"], true)
        .expect("well-formed expectation");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Cardinality {
            actual: 2,
            expected: 3,
        })
    );
}

#[test]
fn distinct_not_specified_keeps_duplicates() {
    let oracle = Oracle::default();
    let actual = customers(&["1", "1", "4"]);

    let verdict = oracle
        .compare_entities_by_key_ordered(&actual, &["1", "1", "4"], true)
        .expect("well-formed expectation");
    assert!(verdict.is_pass());

    let verdict = oracle
        .compare_entities_by_key_ordered(&actual, &["1", "4", "1"], true)
        .expect("well-formed expectation");
    assert_eq!(mismatch_kind(&verdict), Some(MismatchKind::Position));
}

#[test]
fn duplicate_actual_fails_when_duplicates_disallowed() {
    let oracle = Oracle::default();

    let verdict = oracle
        .compare_entities_by_key_ordered(&customers(&["1", "4", "1"]), &["1", "4", "9"], false)
        .expect("well-formed expectation");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Duplicate {
            index: 2,
            first: 0,
            element: "\"1\"".to_string(),
        })
    );
}

#[test]
fn duplicate_expected_key_is_a_malformed_expectation() {
    let oracle = Oracle::default();

    let err = oracle
        .compare_entities_by_key_ordered(&customers(&["1", "1"]), &["1", "1"], false)
        .expect_err("duplicated expectation");

    assert!(matches!(
        err,
        OracleError::DuplicateExpectedKey {
            first: 0,
            second: 1,
            ..
        }
    ));
}

#[test]
fn extracted_keys_compare_under_bag_mode() {
    let oracle = Oracle::default();
    let actual = [EntityKey::from("1"), EntityKey::from("4"), EntityKey::from("1")];

    assert!(
        oracle
            .compare_keys(
                &actual,
                &[EntityKey::from("4"), EntityKey::from("1"), EntityKey::from("1")],
                ComparisonMode::Bag,
            )
            .is_pass()
    );
    assert_eq!(
        mismatch_kind(&oracle.compare_keys(
            &actual,
            &[EntityKey::from("1"), EntityKey::from("4")],
            ComparisonMode::Bag,
        )),
        Some(MismatchKind::Cardinality)
    );
}

// ---- compare_scalar_sequence --------------------------------------------

#[test]
fn sorted_salaries_match_in_order() {
    let oracle = Oracle::default();

    assert!(oracle.compare_scalar_sequence(&salaries(), &salaries()).is_pass());
}

#[test]
fn swapped_adjacent_salaries_fail() {
    let oracle = Oracle::default();
    let mut actual = salaries();
    actual.swap(4, 5);

    let verdict = oracle.compare_scalar_sequence(&actual, &salaries());

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Position {
            index: 4,
            actual: "1500.0".to_string(),
            expected: "1250.0".to_string(),
        })
    );
}

#[test]
fn unordered_query_sorts_both_sides_first() {
    let oracle = Oracle::default();
    let mut actual = salaries();
    actual.reverse();
    let mut expected = salaries();

    sort_canonical(&mut actual);
    sort_canonical(&mut expected);

    assert!(oracle.compare_scalar_sequence(&actual, &expected).is_pass());
}

#[test]
fn boxed_numeric_types_are_normalized() {
    let oracle = Oracle::default();

    let verdict = oracle.compare_scalar_sequence(
        &[Value::Int(3), Value::Uint(5), Value::from(7.0)],
        &[Value::Uint(3), Value::Int(5), Value::Int(7)],
    );

    assert!(verdict.is_pass());
}

#[test]
fn numeric_coercion_can_be_disabled() {
    let oracle = Oracle::new(OracleConfig::default().with_numeric_coercion(false))
        .expect("valid config");

    assert!(
        oracle
            .compare_scalar_sequence(&[Value::Int(3)], &[Value::Uint(3)])
            .is_fail()
    );
    assert!(
        oracle
            .compare_scalar_sequence(&[Value::Int(3)], &[Value::Int(3)])
            .is_pass()
    );
}

#[test]
fn float_tolerance_absorbs_rounding() {
    let strict = Oracle::default();
    let tolerant =
        Oracle::new(OracleConfig::default().with_float_tolerance(1e-9)).expect("valid config");
    let actual = values![0.1 + 0.2];
    let expected = values![0.3];

    assert!(strict.compare_scalar_sequence(&actual, &expected).is_fail());
    assert!(tolerant.compare_scalar_sequence(&actual, &expected).is_pass());
}

#[test]
fn nulls_match_nulls_only() {
    let oracle = Oracle::default();

    assert!(
        oracle
            .compare_scalar_sequence(&[Value::Null, Value::Int(1)], &[Value::Null, Value::Int(1)])
            .is_pass()
    );
    assert_eq!(
        mismatch_kind(&oracle.compare_scalar_sequence(&[Value::Null], &[Value::Int(0)])),
        Some(MismatchKind::Position)
    );
    assert_eq!(
        mismatch_kind(&oracle.compare_scalar_sequence(&[Value::from("")], &[Value::Null])),
        Some(MismatchKind::Position)
    );
}

// ---- compare_values -----------------------------------------------------

#[test]
fn bag_mode_counts_duplicates() {
    let oracle = Oracle::default();
    let actual = values!["CA", "MA", "CA"];

    assert!(
        oracle
            .compare_values(&actual, &values!["MA", "CA", "CA"], ComparisonMode::Bag)
            .is_pass()
    );
    assert_eq!(
        mismatch_kind(&oracle.compare_values(&actual, &values!["MA", "CA"], ComparisonMode::Bag)),
        Some(MismatchKind::Cardinality)
    );
    assert!(
        oracle
            .compare_values(&actual, &values!["MA", "CA"], ComparisonMode::Set)
            .is_pass()
    );
}

#[test]
fn ordered_distinct_mode_collapses_to_first_occurrence() {
    let oracle = Oracle::default();
    let actual = values![1, 1, 2, 1, 3];

    assert!(
        oracle
            .compare_values(&actual, &values![1, 2, 3], ComparisonMode::OrderedDistinct)
            .is_pass()
    );
    assert!(
        oracle
            .compare_values(&actual, &values![2, 1, 3], ComparisonMode::OrderedDistinct)
            .is_fail()
    );
}

// ---- compare_tuple / compare_tuples -------------------------------------

#[test]
fn tuple_matches_cell_by_cell() {
    let oracle = Oracle::default();
    let actual = Tuple::new(vec![Value::key("15"), Value::key("14")]);

    assert!(oracle.compare_tuple(&actual, &values!["15", "14"]).is_pass());
    assert_eq!(
        oracle.compare_tuple(&actual, &values!["15", "13"]),
        Verdict::fail(Mismatch::Cell {
            index: 1,
            actual: "#14".to_string(),
            expected: "'13'".to_string(),
        })
    );
}

#[test]
fn tuple_width_mismatch_fails_before_cells() {
    let oracle = Oracle::default();

    assert_eq!(
        oracle.compare_tuple(&tuple!["15"], &values!["15", "14"]),
        Verdict::fail(Mismatch::Width {
            actual: 1,
            expected: 2,
        })
    );
    assert!(oracle.compare_tuple(&tuple![], &[]).is_pass());
}

#[test]
fn outer_join_rows_carry_nulls() {
    let oracle = Oracle::default();
    let actual = vec![tuple!["1", Value::Null], tuple!["2", "5"]];

    assert!(
        oracle
            .compare_tuples(
                &actual,
                &[tuple!["1", ()], tuple!["2", "5"]],
                ComparisonMode::Exact,
            )
            .expect("uniform expectation")
            .is_pass()
    );
}

#[test]
fn tuple_order_matters_only_in_ordered_modes() {
    let oracle = Oracle::default();
    let expected = vec![tuple!["15", "14"], tuple!["16", "14"]];
    let swapped = vec![tuple!["16", "14"], tuple!["15", "14"]];

    let exact = oracle
        .compare_tuples(&swapped, &expected, ComparisonMode::Exact)
        .expect("uniform expectation");
    let set = oracle
        .compare_tuples(&swapped, &expected, ComparisonMode::Set)
        .expect("uniform expectation");

    assert!(
        oracle
            .compare_tuples(&expected, &expected, ComparisonMode::Exact)
            .expect("uniform expectation")
            .is_pass()
    );
    assert_eq!(mismatch_kind(&exact), Some(MismatchKind::Position));
    assert!(set.is_pass());
}

#[test]
fn unordered_rows_align_across_numeric_representations() {
    let oracle = Oracle::default();
    let actual = vec![tuple![Value::Int(1), "b"], tuple![Value::Uint(1), "a"]];
    let expected = vec![tuple![Value::Uint(1), "b"], tuple![Value::Int(1), "a"]];

    for mode in [ComparisonMode::Bag, ComparisonMode::Set] {
        let verdict = oracle
            .compare_tuples(&actual, &expected, mode)
            .expect("uniform expectation");
        assert!(verdict.is_pass(), "{mode:?}: {verdict}");
    }

    let keyed = vec![tuple![Value::key("1"), "b"], tuple!["1", "a"]];
    let texts = vec![tuple!["1", "b"], tuple![Value::key("1"), "a"]];
    assert!(
        oracle
            .compare_tuples(&keyed, &texts, ComparisonMode::Bag)
            .expect("uniform expectation")
            .is_pass()
    );
}

#[test]
fn strict_representations_still_align_unordered_rows() {
    let strict =
        Oracle::new(OracleConfig::default().with_numeric_coercion(false)).expect("valid config");
    let actual = vec![tuple![Value::Int(1), "b"], tuple![Value::Uint(1), "a"]];
    let reordered = vec![tuple![Value::Uint(1), "a"], tuple![Value::Int(1), "b"]];
    let crossed = vec![tuple![Value::Uint(1), "b"], tuple![Value::Int(1), "a"]];

    let same = strict
        .compare_tuples(&actual, &reordered, ComparisonMode::Bag)
        .expect("uniform expectation");
    let different = strict
        .compare_tuples(&actual, &crossed, ComparisonMode::Bag)
        .expect("uniform expectation");

    assert!(same.is_pass(), "{same}");
    assert_eq!(mismatch_kind(&different), Some(MismatchKind::Element));
}

#[test]
fn tolerant_rows_pair_regardless_of_sort_position() {
    let tolerant =
        Oracle::new(OracleConfig::default().with_float_tolerance(0.1)).expect("valid config");
    let actual = vec![tuple![1.0, "b"], tuple![1.05, "a"]];
    let expected = vec![tuple![1.04, "b"], tuple![1.0, "a"]];

    let verdict = tolerant
        .compare_tuples(&actual, &expected, ComparisonMode::Bag)
        .expect("uniform expectation");

    assert!(verdict.is_pass(), "{verdict}");
}

#[test]
fn tolerant_pairing_reroutes_earlier_partners() {
    let tolerant =
        Oracle::new(OracleConfig::default().with_float_tolerance(0.1)).expect("valid config");
    // The first actual row fits both expected rows; the second fits only the
    // first one.
    let actual = vec![tuple![1.0, 2.0], tuple![1.05, 2.15]];
    let expected = vec![tuple![1.02, 2.08], tuple![1.08, 1.95]];
    let unmatched = vec![tuple![1.02, 2.08], tuple![1.5, 1.95]];

    let paired = tolerant
        .compare_tuples(&actual, &expected, ComparisonMode::Set)
        .expect("uniform expectation");
    let short = tolerant
        .compare_tuples(&actual, &unmatched, ComparisonMode::Bag)
        .expect("uniform expectation");

    assert!(paired.is_pass(), "{paired}");
    assert_eq!(
        short,
        Verdict::fail(Mismatch::Element {
            missing: vec!["(1.5, 1.95)".to_string()],
            unexpected: vec!["(1.05, 2.15)".to_string()],
            omitted: 0,
        })
    );
}

#[test]
fn ragged_expectation_is_rejected() {
    let oracle = Oracle::default();

    let err = oracle
        .compare_tuples(
            &[tuple![1, 2]],
            &[tuple![1, 2], tuple![3]],
            ComparisonMode::Bag,
        )
        .expect_err("ragged expectation");

    assert!(matches!(
        err,
        OracleError::RaggedExpectation {
            index: 1,
            width: 1,
            declared: 2,
        }
    ));
}

#[test]
fn wide_actual_row_is_a_width_mismatch() {
    let oracle = Oracle::default();

    let verdict = oracle
        .compare_tuples(&[tuple![1, 2, 3]], &[tuple![1, 2]], ComparisonMode::Bag)
        .expect("uniform expectation");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Width {
            actual: 3,
            expected: 2,
        })
    );
}

// ---- empty and signals --------------------------------------------------

#[test]
fn empty_expectation_rejects_single_null() {
    let oracle = Oracle::default();

    assert!(oracle.expect_empty(&ActualResult::Empty).is_pass());
    assert!(oracle.expect_empty(&ActualResult::Scalars(Vec::new())).is_pass());
    assert_eq!(
        oracle.expect_empty(&ActualResult::Scalar(Value::Null)),
        Verdict::fail(Mismatch::Cardinality {
            actual: 1,
            expected: 0,
        })
    );
}

#[test]
fn expected_no_result_signal_is_met() {
    let oracle = Oracle::default();

    let verdict = oracle
        .expect_signal(single(Vec::<Customer>::new()), SignalKind::NoResult)
        .expect("signal is the expected one");

    assert_eq!(verdict.pass_kind(), Some(PassKind::ExpectedFailureMet));
}

#[test]
fn returned_value_means_expected_failure_not_observed() {
    let oracle = Oracle::default();

    let verdict = oracle
        .expect_signal(single(customers(&["4"])), SignalKind::NoResult)
        .expect("values are judged");

    assert_eq!(
        mismatch_kind(&verdict),
        Some(MismatchKind::ExpectedFailureNotObserved)
    );
    assert!(MismatchKind::ExpectedFailureNotObserved.is_contract_violation());
}

#[test]
fn unexpected_signal_propagates() {
    let oracle = Oracle::default();

    let err = oracle
        .expect_signal(single(customers(&["4", "9"])), SignalKind::NoResult)
        .expect_err("non-unique was not expected");

    assert!(matches!(
        err,
        OracleError::UnexpectedSignal(ExecutionSignal::NonUniqueResult { rows: 2 })
    ));
}

// ---- judge --------------------------------------------------------------

#[test]
fn judge_dispatches_on_expectation() {
    let oracle = Oracle::default();

    let keys = oracle
        .judge(Ok(ActualResult::entities(["9", "4"])), &Expected::keys(["4", "9"]))
        .expect("judged");
    let ordered = oracle
        .judge(
            Ok(ActualResult::entities(["9", "4"])),
            &Expected::ordered_keys(["4", "9"], false),
        )
        .expect("judged");
    let scalars = oracle
        .judge(
            Ok(ActualResult::scalars([3, 1, 2])),
            &Expected::values([1, 2, 3], ComparisonMode::Bag),
        )
        .expect("judged");

    assert!(keys.is_pass());
    assert_eq!(mismatch_kind(&ordered), Some(MismatchKind::Position));
    assert!(scalars.is_pass());
}

#[test]
fn judge_accepts_empty_as_any_empty_sequence() {
    let oracle = Oracle::default();

    for expected in [
        Expected::Empty,
        Expected::keys(Vec::<String>::new()),
        Expected::values(Vec::<Value>::new(), ComparisonMode::Exact),
        Expected::tuples(Vec::<Tuple>::new(), ComparisonMode::Set),
    ] {
        let verdict = oracle.judge(Ok(ActualResult::Empty), &expected).expect("judged");
        assert!(verdict.is_pass(), "{expected:?}: {verdict}");
    }
}

#[test]
fn judge_single_null_against_empty_fails() {
    let oracle = Oracle::default();

    let verdict = oracle
        .judge(Ok(ActualResult::Scalar(Value::Null)), &Expected::Empty)
        .expect("judged");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Cardinality {
            actual: 1,
            expected: 0,
        })
    );
}

#[test]
fn judge_reports_shape_mismatch() {
    let oracle = Oracle::default();

    let verdict = oracle
        .judge(
            Ok(ActualResult::Tuples(vec![tuple!["1", "2"]])),
            &Expected::keys(["1"]),
        )
        .expect("judged");

    assert_eq!(
        verdict,
        Verdict::fail(Mismatch::Shape {
            actual: ResultShape::Tuples,
            expected: "entity key set",
        })
    );
}

#[test]
fn judge_signal_expectations() {
    let oracle = Oracle::default();
    let expected = Expected::signal(SignalKind::NonUniqueResult);

    let met = oracle
        .judge(Err(ExecutionSignal::NonUniqueResult { rows: 2 }), &expected)
        .expect("judged");
    let missed = oracle
        .judge(Ok(ActualResult::Entity(EntityKey::from("4"))), &expected)
        .expect("judged");
    let unexpected = oracle.judge(Err(ExecutionSignal::NoResult), &Expected::keys(["4"]));

    assert_eq!(met, Verdict::expected_failure_met());
    assert_eq!(
        missed,
        Verdict::fail(Mismatch::ExpectedFailureNotObserved {
            expected: SignalKind::NonUniqueResult,
            found: "single entity of 1 row(s)".to_string(),
        })
    );
    assert!(matches!(
        unexpected,
        Err(OracleError::UnexpectedSignal(ExecutionSignal::NoResult))
    ));
}

#[test]
fn verdicts_are_counted_per_thread() {
    metrics::reset();
    let oracle = Oracle::default();

    let _ = oracle.compare_entities_by_key(&customers(&["4"]), &keys!["4"]);
    let _ = oracle.compare_entities_by_key(&customers(&["4"]), &keys!["9"]);
    let _ = oracle.expect_signal(single(Vec::<Customer>::new()), SignalKind::NoResult);
    let _ = oracle.expect_signal(single(customers(&["1", "2"])), SignalKind::NoResult);

    let report = metrics::report();
    assert_eq!(report.ops.checks, 4);
    assert_eq!(report.ops.passes, 2);
    assert_eq!(report.ops.expected_failures_met, 1);
    assert_eq!(report.ops.failures, 1);
    assert_eq!(report.ops.rejections, 1);
    assert_eq!(report.failures_by_kind.get("element"), Some(&1));
    assert_eq!(report.checks.get("entities_by_key").map(|c| c.checks), Some(2));
}

// ---- properties ---------------------------------------------------------

fn arb_key_set() -> impl Strategy<Value = BTreeSet<String>> {
    prop::collection::btree_set("[0-9]{1,3}", 0..12)
}

proptest! {
    #[test]
    fn key_set_matches_itself_in_any_order(
        expected in arb_key_set(),
        seed in any::<u64>(),
    ) {
        let oracle = Oracle::default();
        let mut actual: Vec<&str> = expected.iter().map(String::as_str).collect();
        let len = actual.len();
        if len > 1 {
            // deterministic pseudo-shuffle
            let offset = usize::try_from(seed % len as u64).unwrap_or(0);
            actual.rotate_left(offset);
        }

        prop_assert!(oracle.compare_entities_by_key(&actual, &expected).is_pass());
    }

    #[test]
    fn proper_subset_and_superset_fail(
        expected in arb_key_set().prop_filter("non-empty", |s| !s.is_empty()),
    ) {
        let oracle = Oracle::default();
        let keys: Vec<&str> = expected.iter().map(String::as_str).collect();

        let subset = &keys[1..];
        let mut superset = keys.clone();
        superset.push("extra");

        prop_assert!(oracle.compare_entities_by_key(subset, &expected).is_fail());
        prop_assert!(oracle.compare_entities_by_key(&superset, &expected).is_fail());
    }

    #[test]
    fn duplicating_a_present_key_keeps_set_match(
        expected in arb_key_set().prop_filter("non-empty", |s| !s.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let oracle = Oracle::default();
        let mut actual: Vec<&str> = expected.iter().map(String::as_str).collect();
        let dup = actual[pick.index(actual.len())];
        actual.push(dup);

        prop_assert!(oracle.compare_entities_by_key(&actual, &expected).is_pass());
    }

    #[test]
    fn reversed_order_fails_unless_palindrome(
        keys in prop::collection::vec("[0-9]{1,2}", 0..8),
    ) {
        let oracle = Oracle::default();
        let mut reversed = keys.clone();
        reversed.reverse();

        let verdict = oracle.compare_entities_by_key_ordered(&reversed, &keys, true);
        let verdict = verdict.expect("duplicates allowed");

        prop_assert_eq!(verdict.is_pass(), reversed == keys);
    }

    #[test]
    fn reversed_distinct_keys_fail_unless_trivial(
        keys in arb_key_set()
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
    ) {
        let oracle = Oracle::default();
        let mut reversed = keys.clone();
        reversed.reverse();

        let verdict = oracle.compare_entities_by_key_ordered(&reversed, &keys, false);
        let verdict = verdict.expect("distinct expectation");

        prop_assert_eq!(verdict.is_pass(), keys.len() < 2);
    }

    #[test]
    fn differing_tuple_widths_always_fail(
        actual_width in 0usize..6,
        expected_width in 0usize..6,
    ) {
        prop_assume!(actual_width != expected_width);
        let oracle = Oracle::default();
        let actual: Tuple = (0..actual_width).map(|_| Value::Null).collect();
        let expected: Vec<Value> = (0..expected_width).map(|_| Value::Null).collect();

        prop_assert_eq!(
            oracle.compare_tuple(&actual, &expected),
            Verdict::fail(Mismatch::Width { actual: actual_width, expected: expected_width })
        );
    }

    #[test]
    fn null_never_matches_a_non_null(v in any::<i64>(), s in "[a-z]{0,4}") {
        let oracle = Oracle::default();

        prop_assert!(oracle.compare_scalar_sequence(&[Value::Null], &[Value::Int(v)]).is_fail());
        prop_assert!(oracle.compare_scalar_sequence(&[Value::Text(s)], &[Value::Null]).is_fail());
        prop_assert!(oracle.compare_scalar_sequence(&[Value::Null], &[Value::Null]).is_pass());
    }
}
