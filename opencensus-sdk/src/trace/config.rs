//! SDK Configuration
//!
//! Configuration represents the tracer wide settings. Currently this is the
//! sampler, which can be overridden in code or through the environment.
use crate::trace::{ProbabilitySampler, SamplerResult, ShouldSample};
use opencensus::oc_warn;
use std::env;

/// Probability used when no sampler is configured: one trace in 10 000.
pub const DEFAULT_SAMPLING_PROBABILITY: f64 = 1e-4;

/// Environment variable holding the sampling probability, e.g. `0.25`.
const OC_TRACES_SAMPLER_ARG: &str = "OC_TRACES_SAMPLER_ARG";

/// Default tracer configuration, see [`Config::default`].
pub fn config() -> Config {
    Config::default()
}

/// Tracer configuration
#[derive(Debug)]
#[non_exhaustive]
pub struct Config {
    /// The sampler that the sdk should use
    pub sampler: Box<dyn ShouldSample>,
}

impl Config {
    /// Specify the sampler to be used.
    pub fn with_sampler<T: ShouldSample + 'static>(mut self, sampler: T) -> Self {
        self.sampler = Box::new(sampler);
        self
    }
}

impl Default for Config {
    /// Create default sdk configuration.
    ///
    /// Samples with [`DEFAULT_SAMPLING_PROBABILITY`] unless `OC_TRACES_SAMPLER_ARG`
    /// holds a valid probability.
    fn default() -> Self {
        let sampler = match sampler_from_env() {
            Some(Ok(sampler)) => sampler,
            Some(Err(err)) => {
                oc_warn!(
                    name: "Config.InvalidSamplerProbability",
                    message = "OC_TRACES_SAMPLER_ARG must be a finite float between 0.0 and 1.0 representing the desired sampling probability. Falling back to the default probability.",
                    error = format!("{}", err),
                    default_probability = DEFAULT_SAMPLING_PROBABILITY
                );
                ProbabilitySampler::new(DEFAULT_SAMPLING_PROBABILITY)
            }
            None => ProbabilitySampler::new(DEFAULT_SAMPLING_PROBABILITY),
        };

        Config {
            sampler: Box::new(sampler),
        }
    }
}

fn sampler_from_env() -> Option<SamplerResult<ProbabilitySampler>> {
    env::var(OC_TRACES_SAMPLER_ARG)
        .ok()
        .map(|arg| arg.parse::<ProbabilitySampler>())
}
