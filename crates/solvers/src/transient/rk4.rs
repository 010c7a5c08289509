use std::ops::{Add, Mul};

use predprey_core::{DerivativeOf, StepIntegrable, VectorField};

use super::Stepper;

/// The classic fixed-step fourth-order Runge–Kutta method.
///
/// Evaluates the field four times per step:
///
/// ```text
/// k1 = f(s)
/// k2 = f(s + dt/2 * k1)
/// k3 = f(s + dt/2 * k2)
/// k4 = f(s + dt * k3)
/// s_{n+1} = s + dt/6 * (k1 + 2 k2 + 2 k3 + k4)
/// ```
///
/// Requires the derivative type to form a vector space over `f64` so the
/// stage slopes can be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RungeKutta4;

impl<F> Stepper<F> for RungeKutta4
where
    F: VectorField,
    DerivativeOf<F::State, f64>: Add<Output = DerivativeOf<F::State, f64>>
        + Mul<f64, Output = DerivativeOf<F::State, f64>>,
{
    fn step(&self, field: &F, state: &F::State, dt: f64) -> F::State {
        let half = dt / 2.0;

        let k1 = field.derivative(state);
        let k2 = field.derivative(&state.step(&k1, half));
        let k3 = field.derivative(&state.step(&k2, half));
        let k4 = field.derivative(&state.step(&k3, dt));

        let slope = k1 + k2 * 2.0 + k3 * 2.0 + k4;
        state.step(&slope, dt / 6.0)
    }
}
