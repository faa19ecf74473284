//! Phase-space coordinate types.
//!
//! The integration schemes are written once, generically, over
//! [`StateVector`]; the 1-D spring system instantiates them with `f64` and
//! the two-body system with [`Vec3`]. The trait demands exactly the
//! arithmetic the recurrences use: addition, subtraction, scaling by a
//! scalar, and a norm for distance-dependent force laws.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// Coordinate type advanced by the integration schemes.
pub trait StateVector:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Neg<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Squared Euclidean norm.
    fn norm_squared(self) -> f64;

    /// Euclidean norm.
    fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }
}

impl StateVector for f64 {
    fn zero() -> Self {
        0.0
    }

    fn norm_squared(self) -> f64 {
        self * self
    }

    fn norm(self) -> f64 {
        self.abs()
    }
}

/// 3-component vector used by the two-body system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Zero vector.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Magnitude squared.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude (length).
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Normalize to unit vector. The zero vector normalizes to itself.
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag < f64::EPSILON {
            Self::zero()
        } else {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            }
        }
    }

    /// Scale by scalar.
    #[must_use]
    pub fn scale(&self, s: f64) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    /// Check if all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl StateVector for Vec3 {
    fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    fn norm_squared(self) -> f64 {
        self.magnitude_squared()
    }

    fn norm(self) -> f64 {
        self.magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_vec3_magnitude() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((v.magnitude() - 5.0).abs() < EPSILON);
        assert!((v.magnitude_squared() - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert!((a.dot(&b) - 32.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_cross() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 1.0, 0.0);
        let c = a.cross(&b);
        assert!(c.x.abs() < EPSILON);
        assert!(c.y.abs() < EPSILON);
        assert!((c.z - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert!((v.x - 0.6).abs() < EPSILON);
        assert!((v.y - 0.8).abs() < EPSILON);
        assert!((v.magnitude() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_normalize_zero() {
        let v = Vec3::zero().normalize();
        assert!(v.magnitude() < EPSILON);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        let sum = a + b;
        assert!((sum.x - 5.0).abs() < EPSILON);
        assert!((sum.y - 7.0).abs() < EPSILON);
        assert!((sum.z - 9.0).abs() < EPSILON);

        let diff = b - a;
        assert!((diff.x - 3.0).abs() < EPSILON);

        let scaled = a * 2.0;
        assert!((scaled.z - 6.0).abs() < EPSILON);

        let neg = -a;
        assert!((neg.x + 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec3_is_finite() {
        assert!(Vec3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Vec3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vec3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn test_scalar_state_vector() {
        let x: f64 = -3.0;
        assert!((StateVector::norm(x) - 3.0).abs() < EPSILON);
        assert!((StateVector::norm_squared(x) - 9.0).abs() < EPSILON);
        assert!(<f64 as StateVector>::zero().abs() < EPSILON);
    }

    #[test]
    fn test_vec3_state_vector() {
        let v = Vec3::new(0.0, 3.0, 4.0);
        assert!((StateVector::norm(v) - 5.0).abs() < EPSILON);
        assert_eq!(<Vec3 as StateVector>::zero(), Vec3::zero());
    }

    #[test]
    fn test_vec3_serde_roundtrip() {
        let v = Vec3::new(1.5, -2.5, 3.25);
        let json = serde_json::to_string(&v).unwrap();
        let restored: Vec3 = serde_json::from_str(&json).unwrap();
        assert_eq!(v, restored);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Norm is non-negative.
        #[test]
        fn prop_norm_nonneg(
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
            z in -1e6f64..1e6,
        ) {
            let v = Vec3::new(x, y, z);
            prop_assert!(v.magnitude() >= 0.0);
        }

        /// Negation preserves the norm.
        #[test]
        fn prop_neg_preserves_norm(
            x in -1e6f64..1e6,
            y in -1e6f64..1e6,
            z in -1e6f64..1e6,
        ) {
            let v = Vec3::new(x, y, z);
            prop_assert!((v.magnitude() - (-v).magnitude()).abs() < 1e-9);
        }

        /// A normalized non-zero vector has unit length.
        #[test]
        fn prop_normalize_unit_length(
            x in 1e-3f64..1e6,
            y in -1e6f64..1e6,
            z in -1e6f64..1e6,
        ) {
            let v = Vec3::new(x, y, z).normalize();
            prop_assert!((v.magnitude() - 1.0).abs() < 1e-9);
        }

        /// The cross product is orthogonal to both inputs.
        #[test]
        fn prop_cross_orthogonal(
            x in -1e3f64..1e3,
            y in -1e3f64..1e3,
            z in -1e3f64..1e3,
        ) {
            let a = Vec3::new(x, y, z);
            let b = Vec3::new(y, z, x);
            let c = a.cross(&b);
            let scale = a.magnitude() * b.magnitude();
            if scale > 1.0 {
                prop_assert!(c.dot(&a).abs() / scale < 1e-6);
                prop_assert!(c.dot(&b).abs() / scale < 1e-6);
            }
        }

        /// Scalar norm agrees with abs.
        #[test]
        fn prop_scalar_norm_is_abs(x in -1e9f64..1e9) {
            prop_assert!((StateVector::norm(x) - x.abs()).abs() < f64::EPSILON);
        }
    }
}
