use crate::{DerivativeOf, StepIntegrable};

/// An autonomous system of first-order ODEs.
///
/// A vector field maps a state to its instantaneous rate of change. It must be
/// a pure function of the state: integrators call it several times per step
/// (once for forward Euler, four times for RK4) and rely on identical inputs
/// producing identical derivatives.
///
/// Evaluation is infallible. Fields defined by plain arithmetic propagate
/// non-finite values instead of failing.
pub trait VectorField {
    type State: StepIntegrable<f64>;

    /// Evaluates the derivative of the state.
    fn derivative(&self, state: &Self::State) -> DerivativeOf<Self::State, f64>;
}
