//! Scene geometry primitives: vectors and bounding volumes
//!
//! Everything here is a plain value type with units in meters. Operations
//! return new values instead of mutating in place, so instances can be
//! shared across threads without coordination.

use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

use crate::cloud::{PointXyz, PointXyzi};

/// A 3D vector (or point) in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// The zero vector
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Standard 3D cross product
    ///
    /// Parallel inputs yield the zero vector, which is a valid geometric
    /// outcome rather than an error.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Squared Euclidean length, `x² + y² + z²`. Always non-negative.
    pub fn norm_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length. Zero only for the zero vector.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl From<PointXyz> for Vec3 {
    fn from(pt: PointXyz) -> Self {
        Vec3::new(pt.x as f64, pt.y as f64, pt.z as f64)
    }
}

impl From<PointXyzi> for Vec3 {
    fn from(pt: PointXyzi) -> Self {
        Vec3::new(pt.x as f64, pt.y as f64, pt.z as f64)
    }
}

/// An axis-aligned bounding box described by its two extreme corners
///
/// This is the descriptor a detection stage hands back for a cluster of
/// lidar returns. Corner ordering (`min <= max` per axis) is the producer's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Box3 {
    pub min: Vec3,
    pub max: Vec3,
}

impl Box3 {
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Geometric center of the box
    pub fn center(&self) -> Vec3 {
        Vec3::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Edge lengths along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// An oriented bounding box: an axis-aligned extent rotated about its center
///
/// Produced by detection stages that fit a principal-axis box instead of an
/// axis-aligned one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrientedBox3 {
    /// Geometric center in world coordinates
    pub center: Vec3,

    /// Edge lengths along the box's local axes (length, width, height)
    pub size: Vec3,

    /// Rotation from the box's local frame to the world frame
    pub orientation: UnitQuaternion<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn cross_is_anti_commutative() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-4.0, 0.5, 2.0);

        assert_eq!(a.cross(&b), -b.cross(&a));
    }

    #[test]
    fn cross_of_parallel_vectors_is_zero() {
        let a = Vec3::new(2.0, -1.0, 5.0);

        assert_eq!(a.cross(&a), Vec3::ZERO);
        // Scaled copies are parallel too
        let b = Vec3::new(4.0, -2.0, 10.0);
        let c = a.cross(&b);
        assert_relative_eq!(c.norm(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(x.cross(&y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn norm_is_sqrt_of_norm_squared() {
        let v = Vec3::new(3.0, 4.0, 12.0);

        assert_relative_eq!(v.norm_squared(), 169.0);
        assert_relative_eq!(v.norm(), 13.0);
    }

    #[test]
    fn norm_is_zero_only_for_zero_vector() {
        assert_eq!(Vec3::ZERO.norm(), 0.0);
        assert!(Vec3::new(0.0, 0.0, 1e-9).norm() > 0.0);
    }

    #[test]
    fn add_and_subtract_are_inverse() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(-7.0, 3.5, 9.0);
        let restored = a + (b - a);

        assert_relative_eq!(restored.x, b.x);
        assert_relative_eq!(restored.y, b.y);
        assert_relative_eq!(restored.z, b.z);
    }

    #[test]
    fn box3_center_and_size() {
        let bbox = Box3::new(Vec3::new(-1.0, -2.0, 0.0), Vec3::new(3.0, 2.0, 4.0));

        assert_eq!(bbox.center(), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(bbox.size(), Vec3::new(4.0, 4.0, 4.0));
    }
}
