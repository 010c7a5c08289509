//! Fixed-step solvers for transient ODE problems.
//!
//! A [`Stepper`] advances a [`VectorField`] state by one step, and [`solve`]
//! repeats it on a uniform time grid, collecting every sample:
//!
//! ```text
//! t_i     = i * dt
//! state_0 = initial
//! state_i = stepper.step(field, state_{i-1}, dt)
//! ```
//!
//! # Steppers
//!
//! - [`ForwardEuler`] — first order, one field evaluation per step
//! - [`RungeKutta4`] — fourth order, four field evaluations per step
//!
//! # Example
//!
//! ```
//! use predprey_core::lotka_volterra::{Coefficients, Populations};
//! use predprey_solvers::transient::{self, ForwardEuler};
//!
//! let field = Coefficients::new(0.66, 1.33, 1.0, 1.0);
//! let initial = Populations::new(0.9, 0.9);
//!
//! let solution = transient::solve_unobserved(&ForwardEuler, &field, initial, 0.1, 200);
//!
//! assert_eq!(solution.history.len(), 201);
//! ```
//!
//! [`VectorField`]: predprey_core::VectorField

mod action;
mod euler;
mod event;
mod rk4;
mod sample;
mod solution;
mod stepper;

pub use action::Action;
pub use euler::ForwardEuler;
pub use event::Event;
pub use rk4::RungeKutta4;
pub use sample::Sample;
pub use solution::{Solution, Status};
pub use stepper::Stepper;

use predprey_core::{Observer, VectorField};

/// Upper bound on the samples reserved before a solve starts.
const MAX_RESERVED_SAMPLES: usize = 1 << 16;

/// Integrates a vector field on a fixed time grid.
///
/// # Algorithm
///
/// 1. Record the initial state at `t = 0`.
/// 2. For each step `i` in `1..=steps`:
///    - Advance the previous state with the stepper.
///    - Stamp the new state with `t = i * dt`.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full history.
///
/// A complete solve holds exactly `steps + 1` samples. Time and memory are
/// both linear in `steps`; callers bound `steps` upstream. Storage grows as
/// samples are produced, so a huge `steps` cut short by the observer only
/// holds the samples actually computed.
///
/// With `dt == 0` no rate is applied: every sample repeats the initial state
/// at `t = 0`, even where the rates would overflow.
///
/// # Observer
///
/// The observer receives an [`Event`] for the initial sample and after each
/// integration step, and may return [`Action::StopEarly`] to end the solve
/// between steps. The stopping sample is kept in the history.
pub fn solve<T, F, Obs>(
    stepper: &T,
    field: &F,
    initial: F::State,
    dt: f64,
    steps: usize,
    mut observer: Obs,
) -> Solution<F::State>
where
    T: Stepper<F>,
    F: VectorField,
    F::State: Clone,
    Obs: Observer<Event<F::State>, Action>,
{
    let mut history = Vec::with_capacity(steps.saturating_add(1).min(MAX_RESERVED_SAMPLES));

    let event = Event {
        step: 0,
        sample: Sample::initial(initial),
    };
    let action = observer.observe(&event);
    history.push(event.sample);

    if let Some(Action::StopEarly) = action {
        return Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        };
    }

    for step in 1..=steps {
        let previous = &history[step - 1].state;
        let next = if dt == 0.0 {
            previous.clone()
        } else {
            stepper.step(field, previous, dt)
        };

        let event = Event {
            step,
            sample: Sample::at_index(step, dt, next),
        };
        let action = observer.observe(&event);
        history.push(event.sample);

        if let Some(Action::StopEarly) = action {
            return Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            };
        }
    }

    Solution {
        status: Status::Complete,
        history,
        steps,
    }
}

/// Integrates a vector field on a fixed time grid without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<T, F>(
    stepper: &T,
    field: &F,
    initial: F::State,
    dt: f64,
    steps: usize,
) -> Solution<F::State>
where
    T: Stepper<F>,
    F: VectorField,
    F::State: Clone,
{
    solve(stepper, field, initial, dt, steps, ())
}
