//! Spans and events around the detection stages.
//!
//! With the `tracing` feature the macros forward to `tracing`; without it they
//! expand to no-ops so call sites need no `cfg` attributes.

/// Info-level span named after a pipeline stage (`fast12_scan`,
/// `fast12_score`, `fast12_detect`, `fast12_suppress`).
///
/// Fields use `tracing` syntax, e.g. `trace_span!("fast12_scan", threshold = t)`.
/// Call `.entered()` on the result and keep the guard for the stage's scope.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Info-level event carrying stage counts, e.g.
/// `trace_event!("fast12_candidates", count = n)`.
///
/// Without `tracing` the field values are still evaluated once, then dropped.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        let _ = ($($value,)+);
    };
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Guard returned by `trace_span!` when tracing is compiled out
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Same shape as `tracing::Span::entered`
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
