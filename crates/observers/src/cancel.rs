use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use predprey_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solve once a shared flag is raised.
///
/// Solves are synchronous and run to completion. For long runs the flag gives
/// another thread a way to end one between steps: clone the handle, move the
/// observer into the solve, and call [`cancel`](Self::cancel) on the clone.
/// The solve returns the samples computed so far.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag {
    flag: Arc<AtomicBool>,
}

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag for every handle sharing it.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once any handle has raised the flag.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for CancelFlag {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.is_cancelled().then(A::stop_early)
    }
}
