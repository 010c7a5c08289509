/// Receives solver events and decides how the integration should proceed.
///
/// Observers let callers monitor or steer a solver without changing its API,
/// enabling tracing, early stopping, or cooperative cancellation.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// solver-specific action and `None` lets the solver continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Action {
        Halt,
    }

    fn drive<O: Observer<usize, Action>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let halt_at_three = |event: &usize| (*event == 3).then_some(Action::Halt);
        assert_eq!(drive(halt_at_three, 10), Some(3));
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        let recorder = |event: &usize| {
            seen.push(*event);
            None
        };

        assert_eq!(drive(recorder, 4), None);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
