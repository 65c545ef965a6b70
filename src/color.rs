//! Presentation value types: colors and fixed viewpoints
//!
//! These carry no geometry of their own. They exist so the renderer can be
//! told how to paint a drawable without the geometric core knowing anything
//! about the drawing surface.

use serde::{Deserialize, Serialize};

/// An RGB color with `f32` channel intensities, nominally in `[0, 1]`
///
/// The core enforces no range invariant: callers historically passed
/// negative channels as an in-band "no color override" signal, see
/// [`PointColor::from_sentinel`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// How to paint the points of a cloud
///
/// Replaces the legacy convention of passing a color with negative channels
/// (e.g. `(-1, -1, -1)`) to mean "derive each point's color from its
/// intensity field" with an explicit tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointColor {
    /// Paint every point with the given fixed color
    Fixed(Color),

    /// Derive each point's color from its intensity field
    FromIntensity,
}

impl PointColor {
    /// Map a legacy sentinel color to the explicit tag
    ///
    /// Any color with a negative channel means "derive from intensity";
    /// everything else is a fixed color.
    pub fn from_sentinel(color: Color) -> Self {
        if color.r < 0.0 || color.g < 0.0 || color.b < 0.0 {
            PointColor::FromIntensity
        } else {
            PointColor::Fixed(color)
        }
    }
}

/// A fixed scene viewpoint, chosen by the presentation layer
///
/// Pure tag with no behavior; the renderer maps each variant to a camera
/// transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraAngle {
    /// Diagonal view of the XY plane
    Xy,
    /// Straight down onto the scene
    TopDown,
    /// From the side of the road
    Side,
    /// From behind the ego vehicle
    Fps,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_channel_means_intensity_derived() {
        assert_eq!(
            PointColor::from_sentinel(Color::new(-1.0, -1.0, -1.0)),
            PointColor::FromIntensity
        );
        // A single negative channel is enough
        assert_eq!(
            PointColor::from_sentinel(Color::new(0.5, -0.1, 0.5)),
            PointColor::FromIntensity
        );
    }

    #[test]
    fn in_range_color_stays_fixed() {
        let c = Color::new(0.2, 0.4, 0.6);
        assert_eq!(PointColor::from_sentinel(c), PointColor::Fixed(c));
        assert_eq!(
            PointColor::from_sentinel(Color::WHITE),
            PointColor::Fixed(Color::WHITE)
        );
    }
}
