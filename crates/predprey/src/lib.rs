//! Lotka–Volterra predator–prey trajectories.
//!
//! Integrates
//!
//! ```text
//! dx/dt = alpha * x - beta * x * y
//! dy/dt = delta * x * y - gamma * y
//! ```
//!
//! on the fixed grid `t_i = i * dt` and returns every sample, starting with the
//! initial condition at `t = 0`. Solving is pure and deterministic: identical
//! inputs give bit-identical trajectories, and independent solves may run
//! concurrently.
//!
//! Numerical artifacts are kept, not corrected. Coarse steps can drive
//! populations negative or overflow them to infinity; use
//! [`Trajectory::ensure_finite`] or an observer from `predprey-observers` to
//! detect that.
//!
//! # Example
//!
//! ```
//! let trajectory = predprey::solve(0.66, 1.33, 1.0, 1.0, 0.9, 0.9, 0.1, 2)?;
//!
//! assert_eq!(trajectory.len(), 3);
//! assert_eq!(trajectory[0].prey, 0.9);
//!
//! let series = trajectory.into_series();
//! assert_eq!(series.t.len(), series.predator.len());
//! # Ok::<(), predprey::Error>(())
//! ```

mod error;
mod method;
mod parameters;
mod trajectory;

pub use error::Error;
pub use method::Method;
pub use parameters::Parameters;
pub use trajectory::{Sample, Series, Trajectory};

pub use predprey_core::lotka_volterra::{Coefficients, Populations};
pub use predprey_solvers::transient::{Action, Event, Status};

/// Computes a forward Euler trajectory of `steps` steps of size `dt`.
///
/// Returns `steps + 1` samples. Use [`Parameters`] to select
/// [`Method::RungeKutta4`] or to attach an observer.
///
/// # Errors
///
/// Returns [`Error::InvalidParameter`] if `steps` is negative. No samples are
/// produced in that case.
#[allow(clippy::too_many_arguments)]
pub fn solve(
    alpha: f64,
    beta: f64,
    gamma: f64,
    delta: f64,
    x0: f64,
    y0: f64,
    dt: f64,
    steps: i64,
) -> Result<Trajectory, Error> {
    Parameters {
        alpha,
        beta,
        gamma,
        delta,
        x0,
        y0,
        dt,
        steps,
        method: Method::ForwardEuler,
    }
    .solve()
}
