//! Uniform time grid generation.
//!
//! Every integrator and the analytical reference sample the same grid, so
//! their outputs are directly comparable index by index. The grid is
//! half-open: samples satisfy `t < t_max`, giving `n = ceil(t_max / dt)`
//! samples at `t_i = i * dt`.

use crate::error::{SimError, SimResult};

/// Ordered sequence of sample times with fixed spacing.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
    dt: f64,
}

impl TimeGrid {
    /// Build the grid for a total duration and step size.
    ///
    /// A step size at or above `t_max` degenerates to the single sample
    /// `t = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidStep`] if `dt` or `t_max` is non-positive
    /// or non-finite. Validation happens before any allocation.
    pub fn new(t_max: f64, dt: f64) -> SimResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimError::invalid_step("dt", dt));
        }
        if !t_max.is_finite() || t_max <= 0.0 {
            return Err(SimError::invalid_step("t_max", t_max));
        }

        let n = (t_max / dt).ceil().max(1.0) as usize;
        let times = (0..n).map(|i| i as f64 * dt).collect();

        Ok(Self { times, dt })
    }

    /// Sample times `0, dt, 2*dt, ...`.
    #[must_use]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Consume the grid, yielding the sample times.
    #[must_use]
    pub fn into_times(self) -> Vec<f64> {
        self.times
    }

    /// Fixed spacing between consecutive samples.
    #[must_use]
    pub const fn dt(&self) -> f64 {
        self.dt
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// A successfully constructed grid always holds the `t = 0` sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
