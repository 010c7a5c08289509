use super::Sample;

/// Event emitted by the transient solver for each sample.
///
/// Step 0 is the initial state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<S> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// The sample produced at this step.
    pub sample: Sample<S>,
}
