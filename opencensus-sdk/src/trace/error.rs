use thiserror::Error;

/// A specialized `Result` type for sampler configuration.
pub type SamplerResult<T> = Result<T, SamplerError>;

/// Errors raised while configuring a sampler.
///
/// Sampling decisions themselves never fail; these only surface when a
/// sampler is built from untrusted input such as an environment variable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SamplerError {
    /// The value could not be parsed as a floating point number.
    #[error("sampling probability {0:?} is not a valid number")]
    InvalidProbability(String),

    /// The value parsed to NaN or an infinity.
    #[error("sampling probability {0:?} is not finite")]
    NonFiniteProbability(String),
}
