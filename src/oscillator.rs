//! Closed-form simple-harmonic-motion reference and scheme comparison.
//!
//! The analytical solution exists only for the 1-D spring system; the
//! two-body problem has no general closed form for arbitrary initial
//! conditions, so the orbital runs are judged by the energy diagnostic
//! instead.
//!
//! # Governing equations
//!
//! ```text
//! omega = sqrt(k / m)
//! A     = sqrt(x0^2 + (v0 / omega)^2)
//! phi   = atan2(-v0 / (omega A), x0 / A)
//! x(t)  = A cos(omega t + phi)
//! v(t)  = -A omega sin(omega t + phi)
//! a(t)  = -A omega^2 cos(omega t + phi)
//! E     = k A^2 / 2                        (constant)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SimResult;
use crate::forces::SpringModel;
use crate::grid::TimeGrid;
use crate::integrate::{integrate_explicit, integrate_verlet, Trajectory};
use crate::stability::mean_squared_error;

/// Amplitude/phase form of the closed-form solution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waveform {
    /// Natural angular frequency (rad/s).
    pub omega: f64,
    /// Oscillation amplitude.
    pub amplitude: f64,
    /// Phase offset (rad).
    pub phase: f64,
}

impl Waveform {
    /// Derive amplitude and phase from initial conditions.
    ///
    /// A rest state at the origin (`x0 = v0 = 0`) has no well-defined
    /// phase; it is pinned to zero rather than propagating a division by
    /// zero, and the trajectory degenerates to all-zero samples.
    #[must_use]
    pub fn from_initial(x0: f64, v0: f64, model: &SpringModel) -> Self {
        let omega = model.natural_frequency();
        let amplitude = (x0 * x0 + (v0 / omega).powi(2)).sqrt();
        let phase = if amplitude < f64::EPSILON {
            0.0
        } else {
            (-v0 / (omega * amplitude)).atan2(x0 / amplitude)
        };

        Self {
            omega,
            amplitude,
            phase,
        }
    }

    /// Position at time `t`.
    #[must_use]
    pub fn position(&self, t: f64) -> f64 {
        self.amplitude * (self.omega * t + self.phase).cos()
    }

    /// Velocity at time `t`.
    #[must_use]
    pub fn velocity(&self, t: f64) -> f64 {
        -self.amplitude * self.omega * (self.omega * t + self.phase).sin()
    }

    /// Acceleration at time `t`.
    #[must_use]
    pub fn acceleration(&self, t: f64) -> f64 {
        -self.amplitude * self.omega * self.omega * (self.omega * t + self.phase).cos()
    }

    /// Constant total energy `k A^2 / 2`.
    #[must_use]
    pub fn energy(&self, k: f64) -> f64 {
        0.5 * k * self.amplitude * self.amplitude
    }
}

/// Sample the closed-form oscillator solution on the grid induced by
/// `(t_max, dt)`.
///
/// This is the ground truth both numerical schemes are judged against.
///
/// # Errors
///
/// Returns [`crate::SimError::InvalidStep`] if `dt` or `t_max` is
/// non-positive or non-finite.
pub fn analytical_oscillator(
    x0: f64,
    v0: f64,
    mass: f64,
    k: f64,
    t_max: f64,
    dt: f64,
) -> SimResult<Trajectory<f64>> {
    let grid = TimeGrid::new(t_max, dt)?;
    let model = SpringModel::new(mass, k);
    let wave = Waveform::from_initial(x0, v0, &model);

    let n = grid.len();
    let mut position = Vec::with_capacity(n);
    let mut velocity = Vec::with_capacity(n);
    let mut acceleration = Vec::with_capacity(n);

    for &t in grid.times() {
        position.push(wave.position(t));
        velocity.push(wave.velocity(t));
        acceleration.push(wave.acceleration(t));
    }

    Ok(Trajectory {
        energy: vec![wave.energy(k); n],
        times: grid.into_times(),
        position,
        velocity,
        acceleration,
    })
}

/// Per-scheme deviation from the analytical reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchemeReport {
    /// Largest absolute position deviation across the run.
    pub max_abs_error: f64,
    /// Mean squared position error.
    pub mse: f64,
    /// Relative energy drift at the final sample.
    pub final_energy_drift: f64,
}

/// Explicit and Verlet runs measured against the closed form on one grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeComparison {
    /// Explicit-scheme trajectory.
    pub explicit: Trajectory<f64>,
    /// Verlet-scheme trajectory.
    pub verlet: Trajectory<f64>,
    /// Closed-form reference trajectory.
    pub analytical: Trajectory<f64>,
    /// Explicit-scheme deviation summary.
    pub explicit_report: SchemeReport,
    /// Verlet-scheme deviation summary.
    pub verlet_report: SchemeReport,
}

/// Run both schemes and the closed form over one grid and summarize each
/// scheme's deviation.
///
/// # Errors
///
/// Returns [`crate::SimError::InvalidStep`] if `dt` or `t_max` is
/// non-positive or non-finite.
pub fn compare_schemes(
    x0: f64,
    v0: f64,
    mass: f64,
    k: f64,
    t_max: f64,
    dt: f64,
) -> SimResult<SchemeComparison> {
    let model = SpringModel::new(mass, k);
    let explicit = integrate_explicit(&model, x0, v0, t_max, dt)?;
    let verlet = integrate_verlet(&model, x0, v0, t_max, dt)?;
    let analytical = analytical_oscillator(x0, v0, mass, k, t_max, dt)?;

    let explicit_report = deviation(&explicit, &analytical);
    let verlet_report = deviation(&verlet, &analytical);

    Ok(SchemeComparison {
        explicit,
        verlet,
        analytical,
        explicit_report,
        verlet_report,
    })
}

fn deviation(numeric: &Trajectory<f64>, reference: &Trajectory<f64>) -> SchemeReport {
    let max_abs_error = numeric
        .position
        .iter()
        .zip(&reference.position)
        .map(|(a, b)| (a - b).abs())
        .fold(0.0, f64::max);

    let e0 = numeric.energy.first().copied().unwrap_or(0.0);
    let e_last = numeric.energy.last().copied().unwrap_or(0.0);
    let final_energy_drift = if e0.abs() < f64::EPSILON {
        0.0
    } else {
        (e_last - e0).abs() / e0.abs()
    };

    SchemeReport {
        max_abs_error,
        mse: mean_squared_error(&numeric.position, &reference.position),
        final_energy_drift,
    }
}
