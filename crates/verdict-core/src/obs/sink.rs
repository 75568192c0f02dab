//! Verdict sink boundary.
//!
//! The oracle MUST NOT touch obs::metrics directly.
//! All instrumentation flows through VerdictEvent and VerdictSink.
use crate::{
    obs::metrics,
    outcome::{MismatchKind, PassKind, Verdict},
};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn VerdictSink>> = const { RefCell::new(None) };
}

///
/// CheckOp
///
/// Oracle entry point that produced a verdict.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CheckOp {
    EntitiesByKey,
    EntitiesByKeyOrdered,
    Keys,
    ScalarSequence,
    Tuple,
    Tuples,
    Values,
    Empty,
    Signal,
    Judge,
}

impl CheckOp {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::EntitiesByKey => "entities_by_key",
            Self::EntitiesByKeyOrdered => "entities_by_key_ordered",
            Self::Keys => "keys",
            Self::ScalarSequence => "scalar_sequence",
            Self::Tuple => "tuple",
            Self::Tuples => "tuples",
            Self::Values => "values",
            Self::Empty => "empty",
            Self::Signal => "signal",
            Self::Judge => "judge",
        }
    }
}

///
/// VerdictEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VerdictEvent {
    Passed { op: CheckOp, kind: PassKind },
    Failed { op: CheckOp, kind: MismatchKind },
    Rejected { op: CheckOp },
}

impl VerdictEvent {
    pub(crate) const fn from_verdict(op: CheckOp, verdict: &Verdict) -> Self {
        match verdict {
            Verdict::Pass(kind) => Self::Passed { op, kind: *kind },
            Verdict::Fail(mismatch) => Self::Failed {
                op,
                kind: mismatch.kind(),
            },
        }
    }

    #[must_use]
    pub const fn op(&self) -> CheckOp {
        match self {
            Self::Passed { op, .. } | Self::Failed { op, .. } | Self::Rejected { op } => *op,
        }
    }
}

///
/// VerdictSink
///

pub trait VerdictSink {
    fn record(&self, event: VerdictEvent);
}

/// ThreadMetricsSink
/// Default sink that writes into thread-local metrics state.
/// Acts as the concrete sink when no scoped override is installed.

pub(crate) struct ThreadMetricsSink;

impl VerdictSink for ThreadMetricsSink {
    fn record(&self, event: VerdictEvent) {
        metrics::with_state_mut(|m| {
            m.ops.checks = m.ops.checks.saturating_add(1);
            let entry = m.checks.entry(event.op().label().to_string()).or_default();
            entry.checks = entry.checks.saturating_add(1);

            match event {
                VerdictEvent::Passed { kind, .. } => {
                    m.ops.passes = m.ops.passes.saturating_add(1);
                    entry.passes = entry.passes.saturating_add(1);
                    if kind == PassKind::ExpectedFailureMet {
                        m.ops.expected_failures_met = m.ops.expected_failures_met.saturating_add(1);
                    }
                }
                VerdictEvent::Failed { kind, .. } => {
                    m.ops.failures = m.ops.failures.saturating_add(1);
                    entry.failures = entry.failures.saturating_add(1);
                    let count = m.failures_by_kind.entry(kind.label().to_string()).or_default();
                    *count = count.saturating_add(1);
                }
                VerdictEvent::Rejected { .. } => {
                    m.ops.rejections = m.ops.rejections.saturating_add(1);
                    entry.rejections = entry.rejections.saturating_add(1);
                }
            }
        });
    }
}

pub(crate) const THREAD_METRICS_SINK: ThreadMetricsSink = ThreadMetricsSink;

pub(crate) fn record(event: VerdictEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn VerdictSink` in `with_verdict_sink`.
        // - `with_verdict_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - Only a shared reference is materialized, matching the shared borrow
        //   used to install the override.
        unsafe { (&*ptr).record(event) };
    } else {
        THREAD_METRICS_SINK.record(event);
    }
}

/// Record a verdict and hand it back.
pub(crate) fn observe(op: CheckOp, verdict: Verdict) -> Verdict {
    record(VerdictEvent::from_verdict(op, &verdict));
    verdict
}

/// Run a closure with a temporary verdict sink override.
pub fn with_verdict_sink<T>(sink: &dyn VerdictSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn VerdictSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn VerdictSink, *const dyn VerdictSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Mismatch;
    use std::cell::RefCell;

    #[derive(Default)]
    struct CaptureSink {
        events: RefCell<Vec<VerdictEvent>>,
    }

    impl VerdictSink for CaptureSink {
        fn record(&self, event: VerdictEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn override_captures_events_and_restores_default() {
        metrics::reset();
        let sink = CaptureSink::default();

        with_verdict_sink(&sink, || {
            let _ = observe(CheckOp::Tuple, Verdict::matched());
        });
        let _ = observe(
            CheckOp::Tuple,
            Verdict::fail(Mismatch::Width {
                actual: 1,
                expected: 2,
            }),
        );

        assert_eq!(
            sink.events.borrow().as_slice(),
            &[VerdictEvent::Passed {
                op: CheckOp::Tuple,
                kind: PassKind::Matched,
            }]
        );

        let report = metrics::report();
        assert_eq!(report.ops.checks, 1);
        assert_eq!(report.ops.failures, 1);
        assert_eq!(report.failures_by_kind.get("width"), Some(&1));
    }

    #[test]
    fn nested_overrides_restore_the_outer_sink() {
        let outer = CaptureSink::default();
        let inner = CaptureSink::default();

        with_verdict_sink(&outer, || {
            with_verdict_sink(&inner, || record(VerdictEvent::Rejected { op: CheckOp::Judge }));
            record(VerdictEvent::Rejected { op: CheckOp::Tuples });
        });

        assert_eq!(inner.events.borrow().len(), 1);
        assert_eq!(
            outer.events.borrow().as_slice(),
            &[VerdictEvent::Rejected { op: CheckOp::Tuples }]
        );
    }
}
