//! Force and energy models.
//!
//! Pure state-to-acceleration maps plus the matching total-energy
//! diagnostics. Physical parameters are plain immutable values passed in
//! explicitly; nothing reads process-wide state, so every model is
//! testable in isolation.

use serde::{Deserialize, Serialize};

use crate::vector::{StateVector, Vec3};

/// Hookean restoring acceleration `a = -k x / m`. Defined for all real `x`.
#[must_use]
pub fn spring_acceleration(x: f64, mass: f64, k: f64) -> f64 {
    -k * x / mass
}

/// Newtonian gravitational acceleration `a = -(G M / |r|^3) r` toward the
/// origin.
///
/// Returns the zero vector at (numerically) zero separation instead of
/// dividing by zero, so exploratory trajectories that pass through the
/// origin keep running.
#[must_use]
pub fn gravity_acceleration(r: Vec3, g: f64, central_mass: f64) -> Vec3 {
    let r_mag = r.magnitude();
    if r_mag < f64::EPSILON {
        return Vec3::zero();
    }
    r * (-g * central_mass / (r_mag * r_mag * r_mag))
}

/// Instantaneous acceleration and total energy of a conservative system.
pub trait ForceModel<V: StateVector> {
    /// Acceleration at a given position.
    fn acceleration(&self, position: V) -> V;

    /// Total mechanical energy (kinetic + potential) for one sample.
    fn energy(&self, position: V, velocity: V) -> f64;
}

/// Spring-mass parameters, fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringModel {
    /// Oscillating mass (kg).
    pub mass: f64,
    /// Spring constant (N/m).
    pub k: f64,
}

impl SpringModel {
    /// Create a spring model.
    #[must_use]
    pub const fn new(mass: f64, k: f64) -> Self {
        Self { mass, k }
    }

    /// Natural angular frequency `omega = sqrt(k / m)` (rad/s).
    #[must_use]
    pub fn natural_frequency(&self) -> f64 {
        (self.k / self.mass).sqrt()
    }
}

impl Default for SpringModel {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl ForceModel<f64> for SpringModel {
    fn acceleration(&self, position: f64) -> f64 {
        spring_acceleration(position, self.mass, self.k)
    }

    fn energy(&self, position: f64, velocity: f64) -> f64 {
        0.5 * self.k * position * position + 0.5 * self.mass * velocity * velocity
    }
}

/// Point-mass gravitational field centered at the origin, acting on a
/// single secondary body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMassGravity {
    /// Gravitational constant (m^3 kg^-1 s^-2).
    pub grav_constant: f64,
    /// Central body mass (kg).
    pub central_mass: f64,
    /// Orbiting body mass (kg). Cancels out of the acceleration; carried
    /// for the energy diagnostic.
    pub mass: f64,
}

impl PointMassGravity {
    /// Create a point-mass field.
    #[must_use]
    pub const fn new(grav_constant: f64, central_mass: f64, mass: f64) -> Self {
        Self {
            grav_constant,
            central_mass,
            mass,
        }
    }

    /// Gravitational parameter `mu = G M` (m^3/s^2).
    #[must_use]
    pub fn mu(&self) -> f64 {
        self.grav_constant * self.central_mass
    }
}

impl ForceModel<Vec3> for PointMassGravity {
    fn acceleration(&self, position: Vec3) -> Vec3 {
        gravity_acceleration(position, self.grav_constant, self.central_mass)
    }

    fn energy(&self, position: Vec3, velocity: Vec3) -> f64 {
        let kinetic = 0.5 * self.mass * velocity.magnitude_squared();
        let r_mag = position.magnitude();
        if r_mag < f64::EPSILON {
            // Potential is left out at the singularity, matching the
            // zero-force guard.
            return kinetic;
        }
        kinetic - self.mu() * self.mass / r_mag
    }
}
