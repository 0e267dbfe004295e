//! Shared trace identity types for [OpenCensus] samplers.
//!
//! This crate holds the value types a sampler receives when it is asked for a
//! decision: the [`TraceId`] and [`SpanId`] of the span being started, the
//! parent [`SpanContext`], and any [`Link`]s. Generating identifiers,
//! propagating context and exporting spans are the job of other components;
//! this crate only describes the data they hand over.
//!
//! The sampling algorithms themselves live in the `opencensus_sdk` crate.
//!
//! [OpenCensus]: https://opencensus.io
//! [`TraceId`]: trace::TraceId
//! [`SpanId`]: trace::SpanId
//! [`SpanContext`]: trace::SpanContext
//! [`Link`]: trace::Link
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(
    docsrs,
    feature(doc_cfg, doc_auto_cfg),
    deny(rustdoc::broken_intra_doc_links)
)]

pub mod global;

mod trace_context;

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub mod trace;

pub use trace_context::{SpanId, TraceFlags, TraceId};

#[doc(hidden)]
pub mod _private {
    #[cfg(feature = "internal-logs")]
    pub use tracing::{debug, warn}; // Re-export for the internal logging macros
}
