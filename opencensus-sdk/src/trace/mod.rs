//! # OpenCensus Trace SDK
//!
//! The sampling part of the tracing SDK consists of:
//!
//! * The [`ShouldSample`] trait which every sampler implements, so a tracer can
//!   hold any of them as a `Box<dyn ShouldSample>`.
//! * The [`ProbabilitySampler`] which keeps a fixed fraction of traces, chosen
//!   by trace id.
//! * The [`Config`] struct which carries the sampler a tracer should use.
mod config;
mod error;
mod sampler;

pub use config::{config, Config, DEFAULT_SAMPLING_PROBABILITY};
pub use error::{SamplerError, SamplerResult};
pub use sampler::{CloneShouldSample, ProbabilitySampler, ShouldSample};
