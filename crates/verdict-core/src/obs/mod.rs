//! Observability boundary for oracle verdicts.
//!
//! Oracle logic reports outcomes only through `sink::record`; counters live
//! in thread-local `metrics` state so concurrent tests never share it.
pub mod metrics;
pub mod sink;

pub use sink::{CheckOp, VerdictEvent, VerdictSink, with_verdict_sink};
