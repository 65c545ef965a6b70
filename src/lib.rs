//! lidar_scene - Synthetic driving-scene geometry for perception debugging
//!
//! This library provides the geometric substrate for rendering a synthetic
//! highway scene (road, vehicles, sensor point clouds) independent of any
//! drawing surface:
//! 1. **Vector algebra**: a minimal 3D vector type with the operations the
//!    rest of the scene needs (sum, difference, cross product, norm)
//! 2. **Vehicle envelope**: a two-box silhouette (body + cabin) with a pure
//!    point-containment predicate for simulated sensor rays
//! 3. **Visualization**: an optional adapter over Rerun that draws vehicles,
//!    point clouds, and detection boxes (enable the `visualization` feature)

pub mod cloud;
pub mod color;
pub mod geometry;
pub mod vehicle;

#[cfg(feature = "visualization")]
pub mod render;

// Re-export key types for convenience
pub use cloud::{PointCloud, PointXyz, PointXyzi};
pub use color::{CameraAngle, Color, PointColor};
pub use geometry::{Box3, OrientedBox3, Vec3};
pub use vehicle::Vehicle;
