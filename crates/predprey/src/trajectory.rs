use std::{ops::Index, slice};

use predprey_core::lotka_volterra::Populations;
use predprey_solvers::transient::{self, Solution, Status};

use crate::Error;

/// One point of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub t: f64,
    pub prey: f64,
    pub predator: f64,
}

impl Sample {
    /// Returns the sampled populations.
    #[must_use]
    pub fn populations(&self) -> Populations {
        Populations::new(self.prey, self.predator)
    }

    /// Returns `true` if both populations are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.populations().is_finite()
    }
}

impl From<transient::Sample<Populations>> for Sample {
    fn from(sample: transient::Sample<Populations>) -> Self {
        Self {
            t: sample.t,
            prey: sample.state.prey,
            predator: sample.state.predator,
        }
    }
}

/// An ordered sequence of samples on the grid `t_i = i * dt`.
///
/// A completed solve of `steps` steps holds `steps + 1` samples, the first
/// being the initial condition at `t = 0`. A solve stopped by an observer
/// holds the samples produced up to and including the stopping step.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    samples: Vec<Sample>,
    status: Status,
}

impl Trajectory {
    /// Returns how the solve that produced this trajectory terminated.
    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always `false` for solver output, which includes the initial sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    #[must_use]
    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    /// Sample times, index-aligned with [`prey`](Self::prey) and
    /// [`predator`](Self::predator).
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.t)
    }

    pub fn prey(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.prey)
    }

    pub fn predator(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.predator)
    }

    /// Checks that every sample holds finite populations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonFiniteResult`] naming the first offending step.
    pub fn ensure_finite(&self) -> Result<(), Error> {
        match self.samples.iter().position(|s| !s.is_finite()) {
            Some(step) => Err(Error::NonFiniteResult { step }),
            None => Ok(()),
        }
    }

    /// Splits the trajectory into three parallel series.
    #[must_use]
    pub fn into_series(self) -> Series {
        Series::from(&self)
    }
}

impl From<Solution<Populations>> for Trajectory {
    fn from(solution: Solution<Populations>) -> Self {
        Self {
            samples: solution.history.into_iter().map(Sample::from).collect(),
            status: solution.status,
        }
    }
}

impl Index<usize> for Trajectory {
    type Output = Sample;

    fn index(&self, index: usize) -> &Sample {
        &self.samples[index]
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Sample;
    type IntoIter = slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// A trajectory as three index-aligned series of equal length.
///
/// Serializes as an object with the keys `t`, `prey`, and `predator`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub t: Vec<f64>,
    pub prey: Vec<f64>,
    pub predator: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn len(&self) -> usize {
        self.t.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}

impl From<&Trajectory> for Series {
    fn from(trajectory: &Trajectory) -> Self {
        Self {
            t: trajectory.times().collect(),
            prey: trajectory.prey().collect(),
            predator: trajectory.predator().collect(),
        }
    }
}
