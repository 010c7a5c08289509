//! Core traits and types for predator-prey simulation.
//!
//! This crate defines the shared abstractions that solvers and observers
//! build on:
//!
//! - [`StepIntegrable`] — a state that can be advanced by `derivative * delta`
//! - [`VectorField`] — maps a state to its instantaneous rate of change
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`lotka_volterra`] — the predator-prey vector field and its state types

mod field;
mod observer;
mod step;

pub mod lotka_volterra;

pub use field::VectorField;
pub use observer::Observer;
pub use step::{DerivativeOf, StepIntegrable};
