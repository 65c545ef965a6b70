//! Vehicle collision model: a two-box silhouette with a containment test
//!
//! A vehicle is approximated by the union of two axis-aligned boxes sharing
//! the vehicle's vertical axis: a wide low body spanning the full footprint
//! over the lower two thirds of the height, and a narrower raised cabin over
//! the top third. The fractions (2/3, 1/3, 1/4, 5/6, 1/6 of the dimensions)
//! are fixed; downstream consumers depend on the precise shape.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geometry::{Box3, Vec3};

/// A rigid vehicle placed in the scene
///
/// `position` is the geometric center of the body box at its base;
/// `dimensions` is (length, width, height). Units in meters. Geometry,
/// name, and color are fixed for the lifetime of the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub position: Vec3,
    pub dimensions: Vec3,
    pub color: Color,
    pub name: String,
}

/// Closed-interval membership: is `point` within `half_range` of `center`?
///
/// Both ends are inclusive so that faces shared between the body and cabin
/// boxes have no gap.
fn in_between(point: f64, center: f64, half_range: f64) -> bool {
    center - half_range <= point && point <= center + half_range
}

impl Vehicle {
    pub fn new(position: Vec3, dimensions: Vec3, color: Color, name: impl Into<String>) -> Self {
        Self {
            position,
            dimensions,
            color,
            name: name.into(),
        }
    }

    /// The lower box: full footprint, bottom two thirds of the height
    pub fn body_box(&self) -> Box3 {
        let p = self.position;
        let d = self.dimensions;
        Box3::new(
            Vec3::new(p.x - d.x / 2.0, p.y - d.y / 2.0, p.z),
            Vec3::new(p.x + d.x / 2.0, p.y + d.y / 2.0, p.z + d.z * 2.0 / 3.0),
        )
    }

    /// The raised cabin: half the length footprint, top third of the height
    pub fn cabin_box(&self) -> Box3 {
        let p = self.position;
        let d = self.dimensions;
        Box3::new(
            Vec3::new(p.x - d.x / 4.0, p.y - d.y / 2.0, p.z + d.z * 2.0 / 3.0),
            Vec3::new(p.x + d.x / 4.0, p.y + d.y / 2.0, p.z + d.z),
        )
    }

    /// Test whether a point lies inside the vehicle's envelope
    ///
    /// True iff the point is inside the body box or the cabin box, with
    /// points exactly on a face counting as inside. Pure and total: NaN
    /// coordinates propagate through the comparisons (always false) rather
    /// than raising an error.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let p = self.position;
        let d = self.dimensions;

        let in_body = in_between(point.x, p.x, d.x / 2.0)
            && in_between(point.y, p.y, d.y / 2.0)
            && in_between(point.z, p.z + d.z / 3.0, d.z / 3.0);

        let in_cabin = in_between(point.x, p.x, d.x / 4.0)
            && in_between(point.y, p.y, d.y / 2.0)
            && in_between(point.z, p.z + d.z * 5.0 / 6.0, d.z / 6.0);

        in_body || in_cabin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vehicle() -> Vehicle {
        Vehicle::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(4.0, 2.0, 2.0),
            Color::BLUE,
            "egoCar",
        )
    }

    #[test]
    fn position_is_inside_body_box() {
        let car = test_vehicle();
        assert!(car.contains_point(car.position));
    }

    #[test]
    fn point_inside_body_box() {
        // Body z range is [0, 4/3]
        assert!(test_vehicle().contains_point(Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn point_inside_cabin_box() {
        // Cabin z range is [4/3, 2], x half-extent 1.0, y half-extent 1.0
        assert!(test_vehicle().contains_point(Vec3::new(0.0, 0.0, 1.9)));
    }

    #[test]
    fn point_outside_cabin_footprint_and_body_height() {
        // x = 1.5 exceeds the cabin half-extent and z = 1.9 is above the body
        assert!(!test_vehicle().contains_point(Vec3::new(1.5, 0.0, 1.9)));
    }

    #[test]
    fn boundary_points_are_inside() {
        let car = test_vehicle();
        // Shared face between body and cabin at z = 4/3
        assert!(car.contains_point(Vec3::new(0.5, 0.5, 2.0 * 2.0 / 3.0)));
        // Body box corner
        assert!(car.contains_point(Vec3::new(2.0, 1.0, 0.0)));
        // Cabin roof
        assert!(car.contains_point(Vec3::new(1.0, 1.0, 2.0)));
    }

    #[test]
    fn far_point_is_outside() {
        let car = test_vehicle();
        assert!(!car.contains_point(car.position + Vec3::new(100.0, 100.0, 100.0)));
    }

    #[test]
    fn predicate_is_idempotent() {
        let car = test_vehicle();
        let point = Vec3::new(0.3, -0.4, 0.9);
        assert_eq!(car.contains_point(point), car.contains_point(point));
    }

    #[test]
    fn derived_boxes_match_predicate_extents() {
        let car = test_vehicle();
        let body = car.body_box();
        let cabin = car.cabin_box();

        assert_eq!(body.min, Vec3::new(-2.0, -1.0, 0.0));
        assert_eq!(body.max, Vec3::new(2.0, 1.0, 2.0 * 2.0 / 3.0));
        assert_eq!(cabin.min, Vec3::new(-1.0, -1.0, 2.0 * 2.0 / 3.0));
        assert_eq!(cabin.max, Vec3::new(1.0, 1.0, 2.0));
        // Cabin sits directly on the body
        assert_eq!(body.max.z, cabin.min.z);
    }

    #[test]
    fn vehicle_loads_from_json_scene_config() {
        let json = r#"{
            "position": { "x": 15.0, "y": 0.0, "z": 0.0 },
            "dimensions": { "x": 4.0, "y": 2.0, "z": 2.0 },
            "color": { "r": 0.0, "g": 0.0, "b": 1.0 },
            "name": "car1"
        }"#;

        let car: Vehicle = serde_json::from_str(json).unwrap();
        assert_eq!(car.name, "car1");
        assert!(car.contains_point(Vec3::new(15.0, 0.0, 1.0)));
    }

    #[test]
    fn nan_coordinates_are_never_inside() {
        let car = test_vehicle();
        assert!(!car.contains_point(Vec3::new(f64::NAN, 0.0, 1.0)));
    }
}
