use predprey_core::Observer;

use crate::traits::{CanStopEarly, HasPopulations};

/// Stops a solve at the first sample whose populations are not finite.
///
/// Unstable coefficient and step-size combinations overflow to infinity and
/// then to `NaN`. The solvers propagate those values on purpose; attach this
/// observer to cut the run short instead. The offending sample is kept as the
/// last sample of the solution, and its step is available from
/// [`first_non_finite`](Self::first_non_finite).
///
/// The step-0 event of a new solve clears any earlier result, so one guard can
/// be reused across solves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopOnNonFinite {
    first: Option<usize>,
}

impl StopOnNonFinite {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the step of the first non-finite sample, if one was observed.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<usize> {
        self.first
    }
}

impl<E: HasPopulations, A: CanStopEarly> Observer<E, A> for StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.step() == 0 {
            self.first = None;
        }

        if event.populations().is_finite() {
            return None;
        }

        if self.first.is_none() {
            self.first = Some(event.step());
        }
        Some(A::stop_early())
    }
}

/// Allows `&mut StopOnNonFinite` to be passed to solvers that take an observer
/// by value, so the result can be inspected after the solve completes.
impl<E: HasPopulations, A: CanStopEarly> Observer<E, A> for &mut StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use predprey_core::lotka_volterra::{Coefficients, Populations};
    use predprey_solvers::transient::{self, ForwardEuler, RungeKutta4, Status};

    #[test]
    fn stops_at_first_overflow() {
        // Explosive prey growth with a huge step overflows within a few hundred steps.
        let coefficients = Coefficients::new(50.0, 0.0, 0.0, 0.0);
        let mut guard = StopOnNonFinite::new();

        let solution = transient::solve(
            &ForwardEuler,
            &coefficients,
            Populations::new(1.0, 1.0),
            10.0,
            10_000,
            &mut guard,
        );

        let step = guard.first_non_finite().expect("run should overflow");
        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.steps, step);
        assert_eq!(solution.history.len(), step + 1);
        assert!(!solution.history[step].state.is_finite());
        assert!(solution.history[step - 1].state.is_finite());
    }

    #[test]
    fn stable_run_completes_untouched() {
        let coefficients = Coefficients::new(0.66, 1.33, 1.0, 1.0);
        let mut guard = StopOnNonFinite::new();

        let solution = transient::solve(
            &RungeKutta4,
            &coefficients,
            Populations::new(0.9, 0.9),
            0.1,
            200,
            &mut guard,
        );

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.history.len(), 201);
        assert_eq!(guard.first_non_finite(), None);
    }

    #[test]
    fn non_finite_initial_state_stops_immediately() {
        let coefficients = Coefficients::new(0.66, 1.33, 1.0, 1.0);
        let mut guard = StopOnNonFinite::new();

        let solution = transient::solve(
            &ForwardEuler,
            &coefficients,
            Populations::new(f64::NAN, 1.0),
            0.1,
            10,
            &mut guard,
        );

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.history.len(), 1);
        assert_eq!(guard.first_non_finite(), Some(0));
    }

    #[test]
    fn reuse_reports_only_the_latest_solve() {
        let mut guard = StopOnNonFinite::new();

        transient::solve(
            &ForwardEuler,
            &Coefficients::new(50.0, 0.0, 0.0, 0.0),
            Populations::new(1.0, 1.0),
            10.0,
            10_000,
            &mut guard,
        );
        assert!(guard.first_non_finite().is_some());

        let solution = transient::solve(
            &ForwardEuler,
            &Coefficients::new(0.66, 1.33, 1.0, 1.0),
            Populations::new(0.9, 0.9),
            0.1,
            200,
            &mut guard,
        );

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(guard.first_non_finite(), None);
    }
}
