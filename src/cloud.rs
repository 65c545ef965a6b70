//! Point-cloud value types: ordered sequences of sensor samples
//!
//! A cloud is nothing more than the ordered list of returns a (real or
//! simulated) lidar produced for one scan. Samples come in two flavors:
//! plain 3D positions and positions tagged with a return intensity.

use serde::{Deserialize, Serialize};

/// A plain 3D sample in meters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointXyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl PointXyz {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A 3D sample tagged with a return intensity
///
/// Intensity is the sensor's reflectance reading, nominally in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointXyzi {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub intensity: f32,
}

impl PointXyzi {
    pub const fn new(x: f32, y: f32, z: f32, intensity: f32) -> Self {
        Self { x, y, z, intensity }
    }
}

/// An ordered sequence of point samples from one sensor scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PointCloud<P> {
    points: Vec<P>,
}

impl<P> PointCloud<P> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn push(&mut self, point: P) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }
}

impl<P> FromIterator<P> for PointCloud<P> {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a, P> IntoIterator for &'a PointCloud<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<P> IntoIterator for PointCloud<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vec3;

    #[test]
    fn cloud_preserves_insertion_order() {
        let mut cloud = PointCloud::new();
        cloud.push(PointXyz::new(1.0, 0.0, 0.0));
        cloud.push(PointXyz::new(2.0, 0.0, 0.0));
        cloud.push(PointXyz::new(3.0, 0.0, 0.0));

        let xs: Vec<f32> = cloud.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(cloud.len(), 3);
    }

    #[test]
    fn vector_from_cloud_sample() {
        let sample = PointXyzi::new(1.5, -2.0, 0.5, 0.8);
        let v = Vec3::from(sample);

        assert_eq!(v, Vec3::new(1.5, -2.0, 0.5));
    }
}
