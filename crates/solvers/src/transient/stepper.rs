use predprey_core::VectorField;

/// A fixed-step explicit integration rule.
///
/// A stepper advances one state of a [`VectorField`] by a single step of size
/// `dt`, using only derivative evaluations of the field. It holds no memory of
/// previous steps, so the same stepper can be shared across independent
/// solves and threads.
///
/// `dt` is not validated: zero leaves the state unchanged and a negative value
/// integrates backward in time.
pub trait Stepper<F: VectorField> {
    /// Returns the state one step of size `dt` after `state`.
    fn step(&self, field: &F, state: &F::State, dt: f64) -> F::State;
}
