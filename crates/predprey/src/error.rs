use thiserror::Error;

/// Errors returned by the predator-prey solver.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input was rejected before any integration took place.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// A sample held a `NaN` or infinite population.
    ///
    /// Only reported by [`Trajectory::ensure_finite`](crate::Trajectory::ensure_finite);
    /// solving itself propagates non-finite values.
    #[error("non-finite population at step {step}")]
    NonFiniteResult { step: usize },
}
