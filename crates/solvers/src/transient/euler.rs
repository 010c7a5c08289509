use predprey_core::{StepIntegrable, VectorField};

use super::Stepper;

/// The forward (explicit) Euler method.
///
/// First-order accurate. Applies the update rule:
///
/// ```text
/// state_{n+1} = state_n + dt * derivative(state_n)
/// ```
///
/// Coarse steps on oscillatory systems such as Lotka–Volterra spiral outward
/// and can drive populations negative. That is a property of the method and
/// is left visible in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ForwardEuler;

impl<F: VectorField> Stepper<F> for ForwardEuler {
    fn step(&self, field: &F, state: &F::State, dt: f64) -> F::State {
        let derivative = field.derivative(state);
        state.step(&derivative, dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use predprey_core::lotka_volterra::{Coefficients, Populations};

    #[test]
    fn advances_lotka_volterra_by_one_step() {
        let coefficients = Coefficients::new(0.66, 1.33, 1.0, 1.0);
        let next = ForwardEuler.step(&coefficients, &Populations::new(0.9, 0.9), 0.1);

        assert_relative_eq!(next.prey, 0.851_67, epsilon = 1e-12);
        assert_relative_eq!(next.predator, 0.891, epsilon = 1e-12);
    }

    #[test]
    fn zero_step_is_identity() {
        let coefficients = Coefficients::new(0.66, 1.33, 1.0, 1.0);
        let state = Populations::new(0.9, 0.9);

        assert_eq!(ForwardEuler.step(&coefficients, &state, 0.0), state);
    }

    #[test]
    fn negative_step_reverses_the_update() {
        // Pure prey growth: dx/dt = x.
        let coefficients = Coefficients::new(1.0, 0.0, 0.0, 0.0);
        let state = Populations::new(2.0, 5.0);

        let back = ForwardEuler.step(&coefficients, &state, -0.5);

        assert_relative_eq!(back.prey, 1.0);
        assert_relative_eq!(back.predator, 5.0);
    }

    #[test]
    fn large_step_may_overshoot_below_zero() {
        // Pure predator decay: dy/dt = -3y; one step of 1.0 gives y - 3y.
        let coefficients = Coefficients::new(0.0, 0.0, 3.0, 0.0);
        let next = ForwardEuler.step(&coefficients, &Populations::new(1.0, 1.0), 1.0);

        assert_relative_eq!(next.predator, -2.0);
    }
}
