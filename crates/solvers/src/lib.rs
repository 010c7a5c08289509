//! Fixed-step integrators for autonomous ODE systems.
//!
//! # Modules
//!
//! - [`transient`] — steps a [`VectorField`] forward in time and collects the
//!   sampled trajectory
//!
//! [`VectorField`]: predprey_core::VectorField

pub mod transient;
