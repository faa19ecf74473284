//! Step-size stability sweep.
//!
//! Runs the Verlet scheme against the closed form across a ladder of step
//! sizes and reports the raw mean-squared position error per step size.
//! On a log-log plot the error curve shows a sharp knee at the critical
//! step size (near `dt = 1` for the unit oscillator); locating that knee
//! is the sweep's purpose, so values are reported as-is with no smoothing,
//! clipping, or outlier rejection. A step size deep in the unstable regime
//! yields an astronomically large error — that is data, not a failure.

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::forces::SpringModel;
use crate::integrate::integrate_verlet;
use crate::oscillator::analytical_oscillator;

/// Oscillator probed by the sweep: `m = k = 1`, so `omega = 1` and the
/// critical step size sits at order one.
pub const UNIT_OSCILLATOR: SpringModel = SpringModel { mass: 1.0, k: 1.0 };

/// Sweep initial conditions: released from the origin with unit velocity.
const SWEEP_X0: f64 = 0.0;
const SWEEP_V0: f64 = 1.0;

/// Mean of squared per-sample differences between two series.
///
/// Compares up to the shorter length; two empty series have zero error.
#[must_use]
pub fn mean_squared_error(a: &[f64], b: &[f64]) -> f64 {
    let n = a.len().min(b.len());
    if n == 0 {
        return 0.0;
    }
    let sum: f64 = a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum();
    sum / n as f64
}

/// Logarithmically spaced values from `10^min_exp` to `10^max_exp`,
/// endpoints included.
#[must_use]
pub fn log_spaced(min_exp: f64, max_exp: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![10_f64.powf(min_exp)],
        _ => {
            let step = (max_exp - min_exp) / (count - 1) as f64;
            (0..count)
                .map(|i| 10_f64.powf(min_exp + step * i as f64))
                .collect()
        }
    }
}

/// Parallel step-size and error sequences from one sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Step sizes probed, in input order.
    pub dt_values: Vec<f64>,
    /// Mean squared position error per step size.
    pub mse_values: Vec<f64>,
}

impl SweepReport {
    /// Number of sweep points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dt_values.len()
    }

    /// Whether the sweep holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dt_values.is_empty()
    }
}

/// Measure Verlet position error against the closed form for each step
/// size.
///
/// Every `(t_max, dt)` pair induces its own grid, and each run owns its
/// state, so the sweep points are mutually independent.
///
/// # Errors
///
/// Returns [`crate::SimError::InvalidStep`] if `t_max` or any step size is
/// non-positive or non-finite.
pub fn stability_sweep(t_max: f64, dt_values: &[f64]) -> SimResult<SweepReport> {
    let mut mse_values = Vec::with_capacity(dt_values.len());

    for &dt in dt_values {
        let verlet = integrate_verlet(&UNIT_OSCILLATOR, SWEEP_X0, SWEEP_V0, t_max, dt)?;
        let reference = analytical_oscillator(
            SWEEP_X0,
            SWEEP_V0,
            UNIT_OSCILLATOR.mass,
            UNIT_OSCILLATOR.k,
            t_max,
            dt,
        )?;
        mse_values.push(mean_squared_error(&verlet.position, &reference.position));
    }

    Ok(SweepReport {
        dt_values: dt_values.to_vec(),
        mse_values,
    })
}
