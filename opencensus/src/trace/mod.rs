//! Trace identity and context handed to samplers.
//!
//! A sampler is consulted when a span is about to be started. It receives the
//! parent [`SpanContext`] (if any), the ids of the new span, its name and the
//! [`Link`]s it was created with. Most samplers only look at part of this.
mod span_context;

pub use crate::trace_context::{SpanId, TraceFlags, TraceId};
pub use span_context::{Link, SpanContext};
