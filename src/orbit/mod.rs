//! Two-body gravitational system.
//!
//! A secondary body moving in the field of a fixed central mass. There is
//! no closed form to compare against here, so runs are judged by the
//! per-sample energy diagnostic instead of an analytical reference.
//!
//! Physical constants are module-level defaults for the preset scenarios;
//! every public operation also accepts the constants explicitly, so the
//! integrators stay pure and testable with arbitrary parameters.

pub mod scenarios;

pub use scenarios::{circular_orbit_speed, escape_speed, ScenarioKind, TwoBodyScenario};

use crate::error::SimResult;
use crate::integrate::{integrate, SchemeKind, Trajectory};
use crate::vector::Vec3;

/// Gravitational constant (m^3 kg^-1 s^-2).
pub const G: f64 = 6.674_30e-11;

/// Mars mass (kg).
pub const MARS_MASS: f64 = 6.42e23;

/// Mars mean radius (m).
pub const MARS_RADIUS: f64 = 3.386e6;

/// Integrate a two-body scenario with the chosen scheme.
///
/// # Errors
///
/// Returns [`crate::SimError::InvalidStep`] if `dt` or `t_max` is
/// non-positive or non-finite.
pub fn integrate_two_body(
    scenario: &TwoBodyScenario,
    scheme: SchemeKind,
    t_max: f64,
    dt: f64,
) -> SimResult<Trajectory<Vec3>> {
    let model = scenario.model();
    let (r0, v0) = scenario.initial_state();
    integrate(scheme, &model, r0, v0, t_max, dt)
}
