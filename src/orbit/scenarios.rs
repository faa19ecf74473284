//! Pre-built two-body scenarios.
//!
//! Initial speeds are derived from the vis-viva circular-orbit and escape
//! relations; a scenario combines the derived speed with a direction rule
//! (tangential for closed orbits, radially outward for escape) to build
//! the initial state handed to one integrator invocation. The elliptical
//! fraction and hyperbolic multiple are scenario parameters, not part of
//! the integration core.

use serde::{Deserialize, Serialize};

use super::{G, MARS_MASS, MARS_RADIUS};
use crate::forces::PointMassGravity;
use crate::vector::Vec3;

/// Speed of a circular orbit at distance `|r|`: `v = sqrt(G M / |r|)`.
#[must_use]
pub fn circular_orbit_speed(r: Vec3, g: f64, central_mass: f64) -> f64 {
    (g * central_mass / r.magnitude()).sqrt()
}

/// Escape speed at distance `|r|`: `v = sqrt(2 G M / |r|)`.
#[must_use]
pub fn escape_speed(r: Vec3, g: f64, central_mass: f64) -> f64 {
    (2.0 * g * central_mass / r.magnitude()).sqrt()
}

/// Qualitative trajectory family, selecting the speed and direction rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Free radial fall from rest.
    Descent,
    /// Circular orbit at the vis-viva speed, tangential.
    Circular,
    /// Bound ellipse: a fraction of circular speed, tangential.
    Elliptical {
        /// Fraction of the circular-orbit speed (e.g. 0.4).
        fraction: f64,
    },
    /// Unbound trajectory: a multiple of escape speed, radially outward.
    Hyperbolic {
        /// Multiple of the escape speed (e.g. 1.2).
        multiple: f64,
    },
}

/// A two-body initial-value problem: central field parameters plus the
/// starting state of the secondary body. Created once per scenario and
/// consumed by exactly one integrator invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoBodyScenario {
    /// Gravitational constant (m^3 kg^-1 s^-2).
    pub grav_constant: f64,
    /// Central body mass (kg).
    pub central_mass: f64,
    /// Orbiting body mass (kg).
    pub mass: f64,
    /// Initial position (m).
    pub r0: Vec3,
    /// Trajectory family.
    pub kind: ScenarioKind,
}

impl TwoBodyScenario {
    /// Create a scenario from explicit parameters.
    #[must_use]
    pub const fn new(
        grav_constant: f64,
        central_mass: f64,
        mass: f64,
        r0: Vec3,
        kind: ScenarioKind,
    ) -> Self {
        Self {
            grav_constant,
            central_mass,
            mass,
            r0,
            kind,
        }
    }

    /// Circular equatorial Mars orbit at 1.2 planetary radii.
    #[must_use]
    pub fn mars_circular() -> Self {
        Self::new(
            G,
            MARS_MASS,
            1.0,
            Vec3::new(1.2 * MARS_RADIUS, 0.0, 0.0),
            ScenarioKind::Circular,
        )
    }

    /// Radial descent from rest at 10 km altitude.
    #[must_use]
    pub fn mars_descent() -> Self {
        Self::new(
            G,
            MARS_MASS,
            1.0,
            Vec3::new(0.0, -(MARS_RADIUS + 10_000.0), 0.0),
            ScenarioKind::Descent,
        )
    }

    /// Bound polar ellipse launched at 0.4x circular speed.
    #[must_use]
    pub fn mars_elliptical() -> Self {
        Self::new(
            G,
            MARS_MASS,
            1.0,
            Vec3::new(0.0, 0.0, 1.2 * MARS_RADIUS),
            ScenarioKind::Elliptical { fraction: 0.4 },
        )
    }

    /// Unbound escape launched radially at 1.2x escape speed.
    #[must_use]
    pub fn mars_hyperbolic() -> Self {
        Self::new(
            G,
            MARS_MASS,
            1.0,
            Vec3::new(1.2 * MARS_RADIUS, 0.0, 0.0),
            ScenarioKind::Hyperbolic { multiple: 1.2 },
        )
    }

    /// Point-mass field for this scenario.
    #[must_use]
    pub const fn model(&self) -> PointMassGravity {
        PointMassGravity::new(self.grav_constant, self.central_mass, self.mass)
    }

    /// Derived launch speed for the scenario kind.
    #[must_use]
    pub fn speed(&self) -> f64 {
        match self.kind {
            ScenarioKind::Descent => 0.0,
            ScenarioKind::Circular => {
                circular_orbit_speed(self.r0, self.grav_constant, self.central_mass)
            }
            ScenarioKind::Elliptical { fraction } => {
                fraction * circular_orbit_speed(self.r0, self.grav_constant, self.central_mass)
            }
            ScenarioKind::Hyperbolic { multiple } => {
                multiple * escape_speed(self.r0, self.grav_constant, self.central_mass)
            }
        }
    }

    /// Launch direction: tangential for closed orbits, radially outward
    /// for escape, zero for a descent from rest.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        match self.kind {
            ScenarioKind::Descent => Vec3::zero(),
            ScenarioKind::Circular | ScenarioKind::Elliptical { .. } => tangential_unit(self.r0),
            ScenarioKind::Hyperbolic { .. } => self.r0.normalize(),
        }
    }

    /// Initial velocity vector.
    #[must_use]
    pub fn initial_velocity(&self) -> Vec3 {
        self.direction() * self.speed()
    }

    /// Initial `(position, velocity)` pair consumed by an integrator.
    #[must_use]
    pub fn initial_state(&self) -> (Vec3, Vec3) {
        (self.r0, self.initial_velocity())
    }
}

impl Default for TwoBodyScenario {
    fn default() -> Self {
        Self::mars_circular()
    }
}

/// Unit vector perpendicular to `r`, lying in the equatorial plane where
/// possible.
fn tangential_unit(r: Vec3) -> Vec3 {
    let t = Vec3::new(0.0, 0.0, 1.0).cross(&r);
    if t.magnitude() < f64::EPSILON {
        // r is parallel to the z axis; take the cross with x instead.
        Vec3::new(1.0, 0.0, 0.0).cross(&r).normalize()
    } else {
        t.normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_circular_speed_reference_value() {
        // Mars-mass primary at 4000 km.
        let v = circular_orbit_speed(Vec3::new(0.0, 4e6, 0.0), 6.6743e-11, 6.42e23);
        let relative_error = (v - 3273.6).abs() / 3273.6;
        assert!(relative_error < 5e-3, "v = {v}");
    }

    #[test]
    fn test_escape_is_sqrt2_times_circular() {
        let r = Vec3::new(0.0, 4e6, 0.0);
        let circular = circular_orbit_speed(r, 6.6743e-11, 6.42e23);
        let escape = escape_speed(r, 6.6743e-11, 6.42e23);
        assert!((escape - std::f64::consts::SQRT_2 * circular).abs() / escape < 1e-12);
    }

    #[test]
    fn test_descent_starts_at_rest() {
        let scenario = TwoBodyScenario::mars_descent();
        assert!(scenario.speed().abs() < EPSILON);
        assert_eq!(scenario.initial_velocity(), Vec3::zero());
    }

    #[test]
    fn test_circular_velocity_is_tangential() {
        let scenario = TwoBodyScenario::mars_circular();
        let (r0, v0) = scenario.initial_state();
        // Perpendicular to the radius and of circular magnitude.
        assert!(v0.dot(&r0).abs() / (v0.magnitude() * r0.magnitude()) < 1e-12);
        let expected = circular_orbit_speed(r0, scenario.grav_constant, scenario.central_mass);
        assert!((v0.magnitude() - expected).abs() < EPSILON);
    }

    #[test]
    fn test_elliptical_speed_fraction() {
        let scenario = TwoBodyScenario::mars_elliptical();
        let circular =
            circular_orbit_speed(scenario.r0, scenario.grav_constant, scenario.central_mass);
        assert!((scenario.speed() - 0.4 * circular).abs() < EPSILON);
        // Polar start position still gets a well-defined tangential direction.
        let direction = scenario.direction();
        assert!((direction.magnitude() - 1.0).abs() < EPSILON);
        assert!(direction.dot(&scenario.r0).abs() < EPSILON);
    }

    #[test]
    fn test_hyperbolic_velocity_is_radial_outward() {
        let scenario = TwoBodyScenario::mars_hyperbolic();
        let (r0, v0) = scenario.initial_state();
        let outward = v0.dot(&r0) / (v0.magnitude() * r0.magnitude());
        assert!((outward - 1.0).abs() < 1e-12);
        let escape = escape_speed(r0, scenario.grav_constant, scenario.central_mass);
        assert!((v0.magnitude() - 1.2 * escape).abs() < 1e-9);
    }

    #[test]
    fn test_tangential_unit_general_position() {
        let t = tangential_unit(Vec3::new(3.0, 4.0, 0.0));
        assert!((t.magnitude() - 1.0).abs() < EPSILON);
        assert!(t.dot(&Vec3::new(3.0, 4.0, 0.0)).abs() < EPSILON);
    }

    #[test]
    fn test_tangential_unit_polar_fallback() {
        let t = tangential_unit(Vec3::new(0.0, 0.0, 5.0));
        assert!((t.magnitude() - 1.0).abs() < EPSILON);
        assert!(t.dot(&Vec3::new(0.0, 0.0, 5.0)).abs() < EPSILON);
    }

    #[test]
    fn test_default_scenario() {
        let scenario = TwoBodyScenario::default();
        assert_eq!(scenario.kind, ScenarioKind::Circular);
    }

    #[test]
    fn test_scenario_serde_roundtrip() {
        let scenario = TwoBodyScenario::mars_hyperbolic();
        let json = serde_json::to_string(&scenario).unwrap();
        let restored: TwoBodyScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, restored);
    }

    #[test]
    fn test_scenario_model() {
        let scenario = TwoBodyScenario::mars_circular();
        let model = scenario.model();
        assert!((model.mu() - G * MARS_MASS).abs() / model.mu() < 1e-15);
    }
}
