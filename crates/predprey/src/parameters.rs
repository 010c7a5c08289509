use predprey_core::{
    Observer,
    lotka_volterra::{Coefficients, Populations},
};
use predprey_solvers::transient::{self, Action, Event, ForwardEuler, RungeKutta4};

use crate::{Error, Method, Trajectory};

/// Everything needed to compute one trajectory.
///
/// The coefficients and initial populations are not validated: zero and
/// negative values are mathematically meaningful. `dt` may be zero (every
/// sample sits at `t = 0`) or negative (time runs backward). Only `steps` is
/// checked, when solving.
///
/// [`Parameters::default`] holds the classic demonstration run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    /// Prey growth rate.
    pub alpha: f64,

    /// Predation rate.
    pub beta: f64,

    /// Predator death rate.
    pub gamma: f64,

    /// Predator growth per unit of predation.
    pub delta: f64,

    /// Initial prey population.
    pub x0: f64,

    /// Initial predator population.
    pub y0: f64,

    /// Time step.
    pub dt: f64,

    /// Number of steps after the initial sample. Must be non-negative.
    pub steps: i64,

    #[cfg_attr(feature = "serde", serde(default))]
    pub method: Method,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            alpha: 0.66,
            beta: 1.33,
            gamma: 1.0,
            delta: 1.0,
            x0: 0.9,
            y0: 0.9,
            dt: 0.1,
            steps: 200,
            method: Method::ForwardEuler,
        }
    }
}

impl Parameters {
    #[must_use]
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        let Coefficients {
            alpha,
            beta,
            gamma,
            delta,
        } = coefficients;
        self.alpha = alpha;
        self.beta = beta;
        self.gamma = gamma;
        self.delta = delta;
        self
    }

    #[must_use]
    pub fn with_initial(mut self, initial: Populations) -> Self {
        self.x0 = initial.prey;
        self.y0 = initial.predator;
        self
    }

    #[must_use]
    pub fn with_dt(mut self, dt: f64) -> Self {
        self.dt = dt;
        self
    }

    #[must_use]
    pub fn with_steps(mut self, steps: i64) -> Self {
        self.steps = steps;
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        Coefficients::new(self.alpha, self.beta, self.gamma, self.delta)
    }

    #[must_use]
    pub fn initial(&self) -> Populations {
        Populations::new(self.x0, self.y0)
    }

    /// Computes the full trajectory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `steps` is negative or too large
    /// to index. Nothing is computed in that case.
    pub fn solve(&self) -> Result<Trajectory, Error> {
        self.solve_observed(())
    }

    /// Computes the trajectory, reporting each sample to `observer`.
    ///
    /// The observer may end the solve early with [`Action::StopEarly`]; the
    /// returned trajectory then holds the samples produced so far and reports
    /// [`Status::StoppedByObserver`](crate::Status::StoppedByObserver).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `steps` is negative or too large
    /// to index. The observer is not called in that case.
    pub fn solve_observed<Obs>(&self, observer: Obs) -> Result<Trajectory, Error>
    where
        Obs: Observer<Event<Populations>, Action>,
    {
        let steps = step_count(self.steps)?;
        let field = self.coefficients();
        let initial = self.initial();

        let solution = match self.method {
            Method::ForwardEuler => {
                transient::solve(&ForwardEuler, &field, initial, self.dt, steps, observer)
            }
            Method::RungeKutta4 => {
                transient::solve(&RungeKutta4, &field, initial, self.dt, steps, observer)
            }
        };

        Ok(Trajectory::from(solution))
    }
}

fn step_count(steps: i64) -> Result<usize, Error> {
    if steps < 0 {
        return Err(Error::InvalidParameter {
            name: "steps",
            reason: "must be non-negative",
        });
    }

    usize::try_from(steps).map_err(|_| Error::InvalidParameter {
        name: "steps",
        reason: "exceeds the addressable sample count",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_the_classic_run() {
        let params = Parameters::default();

        assert_eq!(params.coefficients(), Coefficients::new(0.66, 1.33, 1.0, 1.0));
        assert_eq!(params.initial(), Populations::new(0.9, 0.9));
        assert_eq!(params.dt, 0.1);
        assert_eq!(params.steps, 200);
        assert_eq!(params.method, Method::ForwardEuler);
    }

    #[test]
    fn builders_replace_fields() {
        let params = Parameters::default()
            .with_coefficients(Coefficients::new(1.0, 2.0, 3.0, 4.0))
            .with_initial(Populations::new(5.0, 6.0))
            .with_dt(0.25)
            .with_steps(8)
            .with_method(Method::RungeKutta4);

        assert_eq!(
            params,
            Parameters {
                alpha: 1.0,
                beta: 2.0,
                gamma: 3.0,
                delta: 4.0,
                x0: 5.0,
                y0: 6.0,
                dt: 0.25,
                steps: 8,
                method: Method::RungeKutta4,
            }
        );
    }

    #[test]
    fn negative_steps_are_rejected_before_observing() {
        let mut calls = 0;
        let result = Parameters::default()
            .with_steps(-3)
            .solve_observed(|_: &Event<Populations>| {
                calls += 1;
                None
            });

        assert_eq!(
            result,
            Err(Error::InvalidParameter {
                name: "steps",
                reason: "must be non-negative",
            })
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn zero_steps_is_valid() {
        assert_eq!(step_count(0), Ok(0));
    }

    #[test]
    fn method_changes_values_not_shape() {
        let euler = Parameters::default().with_steps(10).solve().unwrap();
        let rk4 = Parameters::default()
            .with_steps(10)
            .with_method(Method::RungeKutta4)
            .solve()
            .unwrap();

        assert_eq!(euler.len(), rk4.len());
        assert!(euler.times().eq(rk4.times()));
        assert_ne!(euler.last(), rk4.last());
    }
}
