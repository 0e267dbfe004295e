//! # OpenCensus SDK
//!
//! Sampling support for OpenCensus tracing. The SDK decides which traces are
//! recorded through [`trace::ShouldSample`] implementations, configured on the
//! tracer through [`trace::Config`].
//!
//! The provided [`trace::ProbabilitySampler`] keeps a fixed fraction of traces.
//! Its decision is a pure function of the trace id, so every span of a trace,
//! in every process the trace touches, reaches the same verdict without
//! coordination.
//!
//! ```
//! # #[cfg(feature = "trace")]
//! # {
//! use opencensus::trace::{SpanId, TraceId};
//! use opencensus_sdk::trace::{ProbabilitySampler, ShouldSample};
//!
//! let sampler = ProbabilitySampler::new(0.5);
//! let trace_id = TraceId::from_bytes([0, 0, 0, 0, 0, 0, 0, 0x40, 0, 0, 0, 0, 0, 0, 0, 0]);
//!
//! assert!(sampler.should_sample(None, false, trace_id, SpanId::from(1), "GET /", &[]));
//! # }
//! ```
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    nonstandard_style,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]
#![cfg_attr(docsrs, feature(doc_cfg), deny(rustdoc::broken_intra_doc_links))]

#[cfg(feature = "trace")]
#[cfg_attr(docsrs, doc(cfg(feature = "trace")))]
pub mod trace;
