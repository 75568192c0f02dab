use serde::Serialize;
use std::{cell::RefCell, collections::BTreeMap};

///
/// EventState
/// Ephemeral, thread-local verdict counters.
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventState {
    pub ops: EventOps,
    pub checks: BTreeMap<String, CheckCounters>,
    pub failures_by_kind: BTreeMap<String, u64>,
}

///
/// EventOps
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct EventOps {
    pub checks: u64,
    pub passes: u64,
    pub expected_failures_met: u64,
    pub failures: u64,

    // Inputs the oracle refused to judge (malformed expectations, unexpected signals)
    pub rejections: u64,
}

///
/// CheckCounters
///

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct CheckCounters {
    pub checks: u64,
    pub passes: u64,
    pub failures: u64,
    pub rejections: u64,
}

thread_local! {
    static EVENT_STATE: RefCell<EventState> = RefCell::new(EventState::default());
}

/// Borrow metrics immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&m.borrow()))
}

/// Borrow metrics mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut EventState) -> R) -> R {
    EVENT_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Snapshot the current thread's counters.
#[must_use]
pub fn report() -> EventState {
    with_state(Clone::clone)
}

/// Reset all counters (useful in tests).
pub fn reset() {
    with_state_mut(|m| *m = EventState::default());
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_to_json() {
        reset();
        with_state_mut(|m| {
            m.ops.checks = 2;
            m.ops.failures = 1;
            m.failures_by_kind.insert("cardinality".to_string(), 1);
        });

        let json = serde_json::to_value(report()).expect("serializable report");

        assert_eq!(json["ops"]["checks"], 2);
        assert_eq!(json["failures_by_kind"]["cardinality"], 1);
        assert_eq!(json["ops"]["rejections"], 0);
    }
}
