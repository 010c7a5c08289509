//! Capability traits for observers.
//!
//! These traits abstract over solver-specific event and action types, so
//! observers can be written once and reused.
//!
//! # Event traits
//!
//! - [`HasPopulations`] — events that carry a sampled predator-prey state
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use predprey_core::Observer;
//! use predprey_observers::traits::{CanStopEarly, HasPopulations};
//!
//! /// Stops once the prey population collapses below a threshold.
//! struct PreyCollapse {
//!     threshold: f64,
//! }
//!
//! impl<E: HasPopulations, A: CanStopEarly> Observer<E, A> for PreyCollapse {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.populations().prey < self.threshold).then(A::stop_early)
//!     }
//! }
//! ```

use predprey_core::lotka_volterra::Populations;
use predprey_solvers::transient;

/// An event that carries a sampled predator-prey state.
pub trait HasPopulations {
    /// Returns the step index of the sample.
    fn step(&self) -> usize;

    /// Returns the sample time.
    fn time(&self) -> f64;

    /// Returns the sampled populations.
    fn populations(&self) -> Populations;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasPopulations for transient::Event ---

impl HasPopulations for transient::Event<Populations> {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.sample.t
    }

    fn populations(&self) -> Populations {
        self.sample.state
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
