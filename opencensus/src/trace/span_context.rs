use crate::{SpanId, TraceFlags, TraceId};

/// Immutable portion of a span which can be propagated to child spans and
/// across process boundaries.
///
/// Spans that do not have the `sampled` flag set in their [`TraceFlags`] are
/// not exported.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SpanContext {
    trace_id: TraceId,
    span_id: SpanId,
    trace_flags: TraceFlags,
    is_remote: bool,
}

impl SpanContext {
    /// An invalid span context
    pub const NONE: SpanContext = SpanContext {
        trace_id: TraceId::INVALID,
        span_id: SpanId::INVALID,
        trace_flags: TraceFlags::NOT_SAMPLED,
        is_remote: false,
    };

    /// Create an invalid empty span context
    pub fn empty_context() -> Self {
        SpanContext::NONE
    }

    /// Construct a new `SpanContext`
    pub fn new(
        trace_id: TraceId,
        span_id: SpanId,
        trace_flags: TraceFlags,
        is_remote: bool,
    ) -> Self {
        SpanContext {
            trace_id,
            span_id,
            trace_flags,
            is_remote,
        }
    }

    /// The [`TraceId`] for this span context.
    pub fn trace_id(&self) -> TraceId {
        self.trace_id
    }

    /// The [`SpanId`] for this span context.
    pub fn span_id(&self) -> SpanId {
        self.span_id
    }

    /// Returns details about the trace.
    pub fn trace_flags(&self) -> TraceFlags {
        self.trace_flags
    }

    /// Returns `true` if the span context has a valid (non-zero) `trace_id` and a
    /// valid (non-zero) `span_id`.
    pub fn is_valid(&self) -> bool {
        self.trace_id.is_valid() && self.span_id.is_valid()
    }

    /// Returns `true` if the span context was propagated from a remote parent.
    pub fn is_remote(&self) -> bool {
        self.is_remote
    }

    /// Returns `true` if the `sampled` trace flag is set.
    pub fn is_sampled(&self) -> bool {
        self.trace_flags.is_sampled()
    }
}

/// A pointer from a span to a span in the same or a different trace.
///
/// Samplers receive the links a span is started with, e.g. the spans of a
/// batch that a consumer span processes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link {
    span_context: SpanContext,
}

impl Link {
    /// Create a new link to the given span context.
    pub fn new(span_context: SpanContext) -> Self {
        Link { span_context }
    }

    /// The context of the linked span.
    pub fn span_context(&self) -> &SpanContext {
        &self.span_context
    }
}

impl From<SpanContext> for Link {
    fn from(span_context: SpanContext) -> Self {
        Link::new(span_context)
    }
}
