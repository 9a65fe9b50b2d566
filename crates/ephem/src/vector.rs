//! Minimal 3D vector in astronomical units.

use std::ops::{Add, Neg, Sub};

/// A 3D position vector in astronomical units.
///
/// The frame is whatever the producing [`Ephemeris`](crate::Ephemeris)
/// documents; within this workspace that is the true ecliptic frame of
/// date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec3 {
    /// Component toward the equinox of date.
    pub x: f64,
    /// In-plane component 90° ahead of x.
    pub y: f64,
    /// Component toward the north ecliptic pole.
    pub z: f64,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Creates a vector from its components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn norm_of_unit_axes() {
        assert_abs_diff_eq!(Vec3::new(1.0, 0.0, 0.0).norm(), 1.0);
        assert_abs_diff_eq!(Vec3::new(0.0, -1.0, 0.0).norm(), 1.0);
        assert_abs_diff_eq!(Vec3::new(3.0, 4.0, 0.0).norm(), 5.0);
        assert_abs_diff_eq!(Vec3::ZERO.norm(), 0.0);
    }

    #[test]
    fn vector_algebra() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -2.0, 1.0);
        assert_eq!(a + b, Vec3::new(1.5, 0.0, 4.0));
        assert_eq!(a - b, Vec3::new(0.5, 4.0, 2.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
    }
}
