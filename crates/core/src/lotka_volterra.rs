//! The Lotka–Volterra predator–prey system.
//!
//! ```text
//! dx/dt = alpha * x - beta * x * y
//! dy/dt = delta * x * y - gamma * y
//! ```
//!
//! where `x` is the prey population and `y` the predator population.
//! Coefficients are conventionally positive, but zero and negative values are
//! accepted; they change the qualitative behavior without making the
//! arithmetic invalid.

use std::ops::{Add, Mul};

use crate::{StepIntegrable, VectorField};

/// The four rate coefficients of the model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Prey growth rate.
    pub alpha: f64,

    /// Predation rate.
    pub beta: f64,

    /// Predator death rate.
    pub gamma: f64,

    /// Predator growth per unit of predation.
    pub delta: f64,
}

impl Coefficients {
    #[must_use]
    pub const fn new(alpha: f64, beta: f64, gamma: f64, delta: f64) -> Self {
        Self {
            alpha,
            beta,
            gamma,
            delta,
        }
    }

    /// Evaluates the instantaneous rates of change at `state`.
    ///
    /// Pure arithmetic: zero, negative, and non-finite populations are
    /// accepted and propagate into the result.
    #[must_use]
    pub fn rates(&self, state: &Populations) -> Rates {
        let Populations { prey, predator } = *state;

        Rates {
            prey: self.alpha * prey - self.beta * prey * predator,
            predator: self.delta * prey * predator - self.gamma * predator,
        }
    }

    /// Returns the coexistence fixed point `(gamma / delta, alpha / beta)`.
    ///
    /// Returns `None` when `beta` or `delta` is zero, in which case the
    /// coexistence point does not exist.
    #[must_use]
    pub fn equilibrium(&self) -> Option<Populations> {
        if self.beta == 0.0 || self.delta == 0.0 {
            return None;
        }

        Some(Populations {
            prey: self.gamma / self.delta,
            predator: self.alpha / self.beta,
        })
    }

    /// Evaluates the first integral of the system at `state`.
    ///
    /// ```text
    /// V(x, y) = delta * x - gamma * ln(x) + beta * y - alpha * ln(y)
    /// ```
    ///
    /// `V` is constant along exact solutions, so its drift over a trajectory
    /// measures integration error. Only defined for strictly positive
    /// populations; returns `NaN` otherwise.
    #[must_use]
    pub fn invariant(&self, state: &Populations) -> f64 {
        let Populations { prey, predator } = *state;
        if !(prey > 0.0 && predator > 0.0) {
            return f64::NAN;
        }

        self.delta * prey - self.gamma * prey.ln() + self.beta * predator
            - self.alpha * predator.ln()
    }
}

impl VectorField for Coefficients {
    type State = Populations;

    fn derivative(&self, state: &Populations) -> Rates {
        self.rates(state)
    }
}

/// Prey and predator population levels at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Populations {
    pub prey: f64,
    pub predator: f64,
}

impl Populations {
    #[must_use]
    pub const fn new(prey: f64, predator: f64) -> Self {
        Self { prey, predator }
    }

    /// Returns `true` if both populations are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.prey.is_finite() && self.predator.is_finite()
    }
}

impl StepIntegrable<f64> for Populations {
    type Derivative = Rates;

    fn step(&self, derivative: &Rates, delta: f64) -> Self {
        Self {
            prey: self.prey + delta * derivative.prey,
            predator: self.predator + delta * derivative.predator,
        }
    }
}

/// Time derivative of [`Populations`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub prey: f64,
    pub predator: f64,
}

impl Add for Rates {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            prey: self.prey + rhs.prey,
            predator: self.predator + rhs.predator,
        }
    }
}

impl Mul<f64> for Rates {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self {
            prey: self.prey * rhs,
            predator: self.predator * rhs,
        }
    }
}
