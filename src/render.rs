//! Scene rendering over Rerun
//!
//! This module is a one-way adapter: it consumes geometry from the core
//! (vehicles, point clouds, detection boxes) and turns it into draw requests
//! on a Rerun recording stream. Nothing in the geometric core depends on it.
//!
//! Enable with the `visualization` feature flag.

use rerun::{RecordingStream, RecordingStreamBuilder};
use thiserror::Error;

use crate::cloud::{PointCloud, PointXyz, PointXyzi};
use crate::color::{CameraAngle, Color, PointColor};
use crate::geometry::{Box3, OrientedBox3, Vec3};
use crate::vehicle::Vehicle;

/// Errors surfaced by the rendering adapter
///
/// The geometric core itself cannot fail; only the recording stream can.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("recording stream error: {0}")]
    Stream(#[from] rerun::RecordingStreamError),
}

/// Convert a scene color plus opacity to an RGBA byte quadruple
fn to_rgba(color: Color, opacity: f32) -> [u8; 4] {
    let ch = |v: f32| (v.clamp(0.0, 1.0) * 255.0) as u8;
    [ch(color.r), ch(color.g), ch(color.b), ch(opacity)]
}

/// Rerun-based renderer for the synthetic highway scene
pub struct SceneRenderer {
    rec: RecordingStream,
}

impl SceneRenderer {
    /// Create a renderer that spawns the Rerun viewer
    pub fn new(app_id: &str) -> Result<Self, RenderError> {
        let rec = RecordingStreamBuilder::new(app_id).spawn()?;

        rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

        Ok(Self { rec })
    }

    /// Create a renderer that saves to a file (for web sharing)
    pub fn new_to_file(app_id: &str, path: &str) -> Result<Self, RenderError> {
        let rec = RecordingStreamBuilder::new(app_id).save(path)?;

        rec.log_static("world", &rerun::ViewCoordinates::RIGHT_HAND_Z_UP())?;

        Ok(Self { rec })
    }

    /// Set the current frame for timeline scrubbing
    pub fn set_frame(&self, frame: u64) {
        self.rec.set_time_sequence("frame", frame as i64);
    }

    /// Draw a vehicle as its two-box silhouette
    ///
    /// Issues two opaque box draws tagged `name` and `name + "Top"`,
    /// both painted with the vehicle's color.
    pub fn render_vehicle(&self, vehicle: &Vehicle) -> Result<(), RenderError> {
        let rgba = to_rgba(vehicle.color, 1.0);

        for (suffix, bbox) in [("", vehicle.body_box()), ("Top", vehicle.cabin_box())] {
            let center = bbox.center();
            let size = bbox.size();
            self.rec.log(
                format!("world/vehicles/{}{}", vehicle.name, suffix),
                &rerun::Boxes3D::from_centers_and_sizes(
                    [[center.x as f32, center.y as f32, center.z as f32]],
                    [[size.x as f32, size.y as f32, size.z as f32]],
                )
                .with_colors([rgba])
                .with_fill_mode(rerun::FillMode::Solid)
                .with_labels([format!("{}{}", vehicle.name, suffix)]),
            )?;
        }

        Ok(())
    }

    /// Upload a plain point cloud painted with a single fixed color
    ///
    /// Callers without a color preference pass [`Color::WHITE`], the
    /// historical default for plain 3D clouds.
    pub fn render_point_cloud(
        &self,
        name: &str,
        cloud: &PointCloud<PointXyz>,
        color: Color,
    ) -> Result<(), RenderError> {
        let positions: Vec<[f32; 3]> = cloud.iter().map(|p| [p.x, p.y, p.z]).collect();

        self.rec.log(
            format!("world/clouds/{}", name),
            &rerun::Points3D::new(positions)
                .with_colors([to_rgba(color, 1.0)])
                .with_radii([0.05]),
        )?;

        Ok(())
    }

    /// Upload an intensity-tagged point cloud
    ///
    /// With [`PointColor::FromIntensity`] (the historical default for
    /// intensity clouds, signalled by the `(-1,-1,-1)` sentinel) each point
    /// is painted a grayscale shade proportional to its intensity.
    pub fn render_intensity_cloud(
        &self,
        name: &str,
        cloud: &PointCloud<PointXyzi>,
        color: PointColor,
    ) -> Result<(), RenderError> {
        let positions: Vec<[f32; 3]> = cloud.iter().map(|p| [p.x, p.y, p.z]).collect();

        let colors: Vec<[u8; 4]> = match color {
            PointColor::Fixed(c) => vec![to_rgba(c, 1.0); cloud.len()],
            PointColor::FromIntensity => cloud
                .iter()
                .map(|p| to_rgba(Color::new(p.intensity, p.intensity, p.intensity), 1.0))
                .collect(),
        };

        self.rec.log(
            format!("world/clouds/{}", name),
            &rerun::Points3D::new(positions)
                .with_colors(colors)
                .with_radii([0.05]),
        )?;

        Ok(())
    }

    /// Draw an axis-aligned detection box
    ///
    /// `id` distinguishes boxes drawn under the same name; uniqueness is
    /// the caller's responsibility. `opacity` is in `[0, 1]`.
    pub fn render_box(
        &self,
        name: &str,
        id: u32,
        bbox: &Box3,
        color: Color,
        opacity: f32,
    ) -> Result<(), RenderError> {
        let center = bbox.center();
        let size = bbox.size();

        self.rec.log(
            format!("world/boxes/{}/{}", name, id),
            &rerun::Boxes3D::from_centers_and_sizes(
                [[center.x as f32, center.y as f32, center.z as f32]],
                [[size.x as f32, size.y as f32, size.z as f32]],
            )
            .with_colors([to_rgba(color, opacity)]),
        )?;

        Ok(())
    }

    /// Draw an oriented detection box
    pub fn render_oriented_box(
        &self,
        name: &str,
        id: u32,
        bbox: &OrientedBox3,
        color: Color,
        opacity: f32,
    ) -> Result<(), RenderError> {
        let q = bbox.orientation.as_ref();

        self.rec.log(
            format!("world/boxes/{}/{}", name, id),
            &rerun::Boxes3D::from_centers_and_sizes(
                [[
                    bbox.center.x as f32,
                    bbox.center.y as f32,
                    bbox.center.z as f32,
                ]],
                [[bbox.size.x as f32, bbox.size.y as f32, bbox.size.z as f32]],
            )
            .with_quaternions([[q.w as f32, q.i as f32, q.j as f32, q.k as f32]])
            .with_colors([to_rgba(color, opacity)]),
        )?;

        Ok(())
    }

    /// Draw the highway pavement and lane markers for scene context
    pub fn render_highway(&self) -> Result<(), RenderError> {
        const ROAD_LENGTH: f32 = 50.0;
        const ROAD_WIDTH: f32 = 12.0;

        // Pavement: a thin slab just below z = 0
        self.rec.log_static(
            "world/highway/pavement",
            &rerun::Boxes3D::from_centers_and_sizes(
                [[0.0, 0.0, -0.1]],
                [[ROAD_LENGTH, ROAD_WIDTH, 0.2]],
            )
            .with_colors([[50, 50, 50, 255]])
            .with_fill_mode(rerun::FillMode::Solid),
        )?;

        // Lane markers at a third of the road width from the center line
        for (idx, y) in [-ROAD_WIDTH / 6.0, ROAD_WIDTH / 6.0].into_iter().enumerate() {
            self.rec.log_static(
                format!("world/highway/line{}", idx + 1),
                &rerun::LineStrips3D::new([[
                    [-ROAD_LENGTH / 2.0, y, 0.01],
                    [ROAD_LENGTH / 2.0, y, 0.01],
                ]])
                .with_colors([[0, 255, 0, 255]])
                .with_radii([0.05]),
            )?;
        }

        Ok(())
    }

    /// Draw sensor rays from an origin to every return in a scan
    pub fn render_rays(
        &self,
        origin: Vec3,
        cloud: &PointCloud<PointXyz>,
    ) -> Result<(), RenderError> {
        let start = [origin.x as f32, origin.y as f32, origin.z as f32];
        let strips: Vec<[[f32; 3]; 2]> = cloud
            .iter()
            .map(|p| [start, [p.x, p.y, p.z]])
            .collect();

        self.rec.log(
            "world/rays",
            &rerun::LineStrips3D::new(strips)
                .with_colors([[255, 0, 0, 120]])
                .with_radii([0.01]),
        )?;

        Ok(())
    }

    /// Remove previously drawn sensor rays
    pub fn clear_rays(&self) -> Result<(), RenderError> {
        self.rec.log("world/rays", &rerun::Clear::recursive())?;
        Ok(())
    }

    /// Place the camera at one of the fixed viewpoints
    ///
    /// `distance` scales how far the camera sits from the scene origin.
    pub fn apply_camera(&self, angle: CameraAngle, distance: f64) -> Result<(), RenderError> {
        let eye = match angle {
            CameraAngle::Xy => [-distance, -distance, distance],
            CameraAngle::TopDown => [0.0, 0.0, distance],
            CameraAngle::Side => [0.0, -distance, 0.0],
            CameraAngle::Fps => [-10.0, 0.0, 0.0],
        };

        self.rec.log_static(
            "world/camera",
            &rerun::Transform3D::from_translation([eye[0] as f32, eye[1] as f32, eye[2] as f32]),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_maps_to_alpha() {
        assert_eq!(to_rgba(Color::WHITE, 1.0), [255, 255, 255, 255]);
        assert_eq!(to_rgba(Color::new(0.0, 1.0, 0.0), 0.0), [0, 255, 0, 0]);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(to_rgba(Color::new(-1.0, 2.0, 0.5), 1.5), [0, 255, 127, 255]);
    }

    #[test]
    #[ignore] // Requires Rerun viewer
    fn renderer_creation() {
        let renderer = SceneRenderer::new("lidar_scene_test");
        assert!(renderer.is_ok());
    }
}
