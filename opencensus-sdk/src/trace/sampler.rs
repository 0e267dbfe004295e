use crate::trace::SamplerError;
use opencensus::{
    oc_debug, oc_warn,
    trace::{Link, SpanContext, SpanId, TraceId},
};
use std::str::FromStr;

// The decision reads the first 8 bytes of the trace id.
const _: () = assert!(TraceId::SIZE >= 8, "TraceId must be at least 8 bytes long");

const TWO_POW_32: f64 = 4_294_967_296.0;

/// The [`ShouldSample`] interface allows implementations to provide samplers
/// which decide, just before a span is started, whether it is recorded and
/// exported.
///
/// # Sampling
///
/// Sampling controls the overhead introduced by tracing by only collecting a
/// subset of traces. A decision is normally taken once, for the root span of a
/// trace, and then carried to child spans (in process and across process
/// boundaries) through the `sampled` flag of the [`SpanContext`]. Samplers
/// whose decision is a pure function of the [`TraceId`] reach the same
/// verdict for every span of a trace even when they are consulted again.
///
/// Implementations must be cheap: `should_sample` runs on the hot path of
/// every span start and may be called concurrently from many threads.
pub trait ShouldSample: CloneShouldSample + Send + Sync + std::fmt::Debug {
    /// Returns `true` if the span about to be started should be recorded and
    /// exported.
    ///
    /// Implementations may use any of the information provided. A sampler
    /// that ignores some of the arguments still receives them so that all
    /// samplers can be used interchangeably by the tracer.
    #[allow(clippy::too_many_arguments)]
    fn should_sample(
        &self,
        parent_context: Option<&SpanContext>,
        has_remote_parent: bool,
        trace_id: TraceId,
        span_id: SpanId,
        name: &str,
        parent_links: &[Link],
    ) -> bool;
}

/// This trait should not be used directly instead users should use [`ShouldSample`].
pub trait CloneShouldSample {
    /// Clone the sampler into a new box.
    fn box_clone(&self) -> Box<dyn ShouldSample>;
}

impl<T> CloneShouldSample for T
where
    T: ShouldSample + Clone + 'static,
{
    fn box_clone(&self) -> Box<dyn ShouldSample> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ShouldSample> {
    fn clone(&self) -> Self {
        self.box_clone()
    }
}

/// Samples a fixed fraction of traces, chosen by trace id.
///
/// The probability is turned into a 64-bit threshold once, at construction.
/// A trace is sampled when the first 8 bytes of its id, read as a
/// little-endian `u64`, are less than or equal to that threshold. No other
/// input takes part in the decision, so all spans of a trace, in any process,
/// agree on it.
///
/// This assumes the id generator fills those 8 bytes uniformly at random. No
/// hashing is applied before the comparison.
///
/// Probabilities `<= 0.0` never sample and probabilities `>= 1.0` always
/// sample. `NaN` is treated as `0.0`.
///
/// # Examples
///
/// ```
/// use opencensus::trace::TraceId;
/// use opencensus_sdk::trace::ProbabilitySampler;
///
/// let sampler = ProbabilitySampler::new(0.25);
/// assert_eq!(sampler.threshold(), 0x3fff_ffff_ffff_ffff);
///
/// // The leading 8 bytes encode 0x4000_0000_0000_0000 (one quarter of 2^64).
/// let trace_id = TraceId::from_bytes([0, 0, 0, 0, 0, 0, 0, 0x40, 0, 0, 0, 0, 0, 0, 0, 0]);
/// assert!(!sampler.sample(trace_id));
/// assert!(ProbabilitySampler::new(0.5).sample(trace_id));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ProbabilitySampler {
    probability: f64,
    threshold: u64,
}

impl ProbabilitySampler {
    /// Create a sampler keeping roughly `probability` of all traces.
    pub fn new(probability: f64) -> Self {
        let probability = if probability.is_nan() {
            oc_warn!(
                name: "ProbabilitySampler.NonFiniteProbability",
                message = "Sampling probability is NaN. No traces will be sampled."
            );
            0.0
        } else {
            probability
        };
        let threshold = threshold_from_probability(probability);
        oc_debug!(
            name: "ProbabilitySampler.Created",
            probability = probability,
            threshold = threshold
        );

        ProbabilitySampler {
            probability,
            threshold,
        }
    }

    /// The probability this sampler was created with.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// The cutoff compared against the trace id.
    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    /// Returns the decision for the trace with the given id.
    pub fn sample(&self, trace_id: TraceId) -> bool {
        // A zero threshold would still admit an id whose leading bytes are all zero.
        self.threshold != 0 && entropy_from_trace_id(trace_id) <= self.threshold
    }
}

impl ShouldSample for ProbabilitySampler {
    fn should_sample(
        &self,
        _parent_context: Option<&SpanContext>,
        _has_remote_parent: bool,
        trace_id: TraceId,
        _span_id: SpanId,
        _name: &str,
        _parent_links: &[Link],
    ) -> bool {
        self.sample(trace_id)
    }
}

impl FromStr for ProbabilitySampler {
    type Err = SamplerError;

    /// Parses a probability, e.g. from an environment variable.
    ///
    /// Finite values outside `[0, 1]` are clamped as in [`ProbabilitySampler::new`].
    /// `NaN` and infinities are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let probability = s
            .trim()
            .parse::<f64>()
            .map_err(|_| SamplerError::InvalidProbability(s.to_string()))?;
        if !probability.is_finite() {
            return Err(SamplerError::NonFiniteProbability(s.to_string()));
        }

        Ok(ProbabilitySampler::new(probability))
    }
}

/// Converts a probability in `[0, 1]` to a threshold in `[0, u64::MAX]`.
///
/// `u64::MAX` is not representable as an `f64` and rounds up to `2^64`, so
/// `probability * u64::MAX as f64` can reach `2^64` and only stays in range
/// through the saturating float to int cast. The high and low 32 bits are
/// computed separately instead, from the product against `u32::MAX`, which
/// a double holds exactly.
pub(crate) fn threshold_from_probability(probability: f64) -> u64 {
    if probability.is_nan() || probability <= 0.0 {
        return 0;
    }
    if probability >= 1.0 {
        return u64::MAX;
    }

    let product = u32::MAX as f64 * probability;
    let hi_bits = product.trunc();
    let lo_bits = product.fract() * TWO_POW_32 + product;
    let threshold = ((hi_bits as u64) << 32) + lo_bits as u64;

    // Tiny probabilities underflow to zero, which would never sample.
    threshold.max(1)
}

fn entropy_from_trace_id(trace_id: TraceId) -> u64 {
    let [b0, b1, b2, b3, b4, b5, b6, b7, ..] = trace_id.to_bytes();
    u64::from_le_bytes([b0, b1, b2, b3, b4, b5, b6, b7])
}
