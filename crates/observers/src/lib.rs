//! Reusable observers for predator-prey simulation.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work with the fixed-step solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for observers ([`HasPopulations`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`StopOnNonFinite`] — stops at the first sample with a non-finite population
//! - [`CancelFlag`] — stops when a shared flag is raised, possibly from another thread
//!
//! [`Observer`]: predprey_core::Observer
//! [`HasPopulations`]: traits::HasPopulations
//! [`CanStopEarly`]: traits::CanStopEarly

mod cancel;
mod non_finite;

pub mod traits;

pub use cancel::CancelFlag;
pub use non_finite::StopOnNonFinite;
