/// A trait for states that can be stepped using their derivative.
///
/// Implementing this trait lets the fixed-step integrators work with the type
/// by stepping it via `derivative * delta`, where the derivative is taken with
/// respect to `Delta`. For population dynamics `Delta` is a plain `f64` time
/// step, which may be zero or negative.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Biomass(f64);
    struct GrowthRate(f64);

    impl StepIntegrable<f64> for Biomass {
        type Derivative = GrowthRate;

        fn step(&self, derivative: &GrowthRate, delta: f64) -> Self {
            Biomass(self.0 + derivative.0 * delta)
        }
    }

    #[derive(Debug, PartialEq)]
    struct Census(Vec<f64>);
    struct CensusRates(Vec<f64>);

    impl StepIntegrable<f64> for Census {
        type Derivative = CensusRates;

        fn step(&self, derivative: &CensusRates, delta: f64) -> Self {
            let next = self
                .0
                .iter()
                .zip(derivative.0.iter())
                .map(|(s, d)| s + d * delta)
                .collect();
            Census(next)
        }
    }

    #[test]
    fn step_scalar_state() {
        let next = Biomass(10.0).step(&GrowthRate(-4.0), 0.5);
        assert_eq!(next, Biomass(8.0));
    }

    #[test]
    fn step_vector_state() {
        let census = Census(vec![1.0, 2.0, 3.0]);
        let rates = CensusRates(vec![0.5, -0.5, 0.0]);

        let next = census.step(&rates, 2.0);

        assert_eq!(next, Census(vec![2.0, 1.0, 3.0]));
    }

    #[test]
    fn zero_delta_leaves_state_unchanged() {
        let next = Biomass(3.0).step(&GrowthRate(100.0), 0.0);
        assert_eq!(next, Biomass(3.0));
    }
}
