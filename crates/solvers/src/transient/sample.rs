/// A state paired with the time at which it was sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<S> {
    pub t: f64,
    pub state: S,
}

impl<S> Sample<S> {
    /// Creates the sample at `t = 0`.
    pub fn initial(state: S) -> Self {
        Self { t: 0.0, state }
    }

    /// Creates the sample for grid index `index` with step size `dt`.
    ///
    /// The time is computed as `index * dt` rather than by accumulating `dt`,
    /// so sample times carry no round-off drift.
    #[allow(clippy::cast_precision_loss)]
    pub fn at_index(index: usize, dt: f64, state: S) -> Self {
        Self {
            t: index as f64 * dt,
            state,
        }
    }
}
