//! Depth-buffered point-splat rasterizer.
//!
//! Every populated voxel is transformed to world space, projected into the
//! camera frame, perspective-divided, and drawn as a small filled square
//! whose edge shrinks with depth. A per-pixel depth buffer resolves
//! visibility: strictly smaller camera-space depth wins.

use glam::Vec3;
use rayon::prelude::*;
use scene_types::{CanvasSettings, ObjectPose};
use tracing::{debug, info};

use crate::camera::Camera;
use crate::error::RenderError;
use crate::image::Image;
use crate::transform::Transform;
use crate::voxel::VoxelGrid;

/// Camera-space depth at or below this is culled before projection.
pub const NEAR_PLANE: f32 = 1.0;

/// Numerator of the depth-proportional splat size, see [`splat_size`].
const SPLAT_FOCAL: f32 = 450.0;

/// Largest splat edge in pixels.
const SPLAT_MAX: i32 = 20;

/// Splat edge length for a voxel at camera-space depth `depth`: close
/// voxels get large splats so neighbours overlap and sub-pixel holes close,
/// distant voxels shrink toward single-pixel writes. Always within
/// [1, `SPLAT_MAX`].
fn splat_size(depth: f32) -> i32 {
    ((SPLAT_FOCAL / depth) as i32 + 1).clamp(1, SPLAT_MAX)
}

/// Per-pixel nearest-depth record, discarded at the end of each frame.
struct DepthBuffer {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl DepthBuffer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![f32::INFINITY; width * height],
        }
    }

    /// Record `depth` and return true if it is strictly closer than the
    /// stored value.
    #[inline]
    fn test_and_set(&mut self, x: usize, y: usize, depth: f32) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = y * self.width + x;
        if depth < self.data[idx] {
            self.data[idx] = depth;
            true
        } else {
            false
        }
    }
}

/// Renders a voxel grid to an image for one (transform, camera) pair.
pub struct Renderer {
    width: usize,
    height: usize,
    focal: f32,
    half_w: f32,
    half_h: f32,
    third_w: f32,
    third_h: f32,
}

impl Renderer {
    /// Validate output dimensions and field of view. The focal length is
    /// `1 / tan(fov / 2)`, finite because the field of view is confined to
    /// (0, 180) degrees.
    pub fn new(width: usize, height: usize, fov_degrees: f32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidImageDimensions { width, height });
        }
        if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
            return Err(RenderError::InvalidFieldOfView { fov_degrees });
        }
        let focal = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
        Ok(Self {
            width,
            height,
            focal,
            half_w: (width / 2) as f32,
            half_h: (height / 2) as f32,
            third_w: (width / 3) as f32,
            third_h: (height / 3) as f32,
        })
    }

    /// Renderer from canvas settings authored by the configuration layer.
    pub fn from_settings(settings: &CanvasSettings) -> Result<Self, RenderError> {
        Self::new(settings.width, settings.height, settings.fov_degrees)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Render one frame. Pure given its inputs; the depth buffer lives and
    /// dies inside this call.
    pub fn render(
        &self,
        grid: &VoxelGrid,
        camera: &Camera,
        transform: &Transform,
        centroid: Vec3,
    ) -> Image {
        let mut image = Image::new(self.width, self.height);
        let mut depth = DepthBuffer::new(self.width, self.height);
        let mut drawn = 0usize;

        for (row, col, slice, color) in grid.populated() {
            let local = Vec3::new(col as f32, row as f32, slice as f32);
            let world = transform.transform_point(local, centroid);
            let cam = camera.world_to_camera(world);

            // Behind or at the near plane: never projected.
            if cam.z <= NEAR_PLANE {
                continue;
            }

            let px = self.focal * cam.x / cam.z;
            let py = self.focal * cam.y / cam.z;

            // Screen rows grow downward while camera up grows upward.
            let sx = (self.half_w + px * self.third_w) as i32;
            let sy = (self.half_h - py * self.third_h) as i32;

            let size = splat_size(cam.z);
            let half = size / 2;
            let mut wrote = false;
            for y in (sy - half)..(sy - half + size) {
                if y < 0 || y >= self.height as i32 {
                    continue;
                }
                for x in (sx - half)..(sx - half + size) {
                    if x < 0 || x >= self.width as i32 {
                        continue;
                    }
                    // Flat splat depth: one cz for the whole square.
                    if depth.test_and_set(x as usize, y as usize, cam.z) {
                        image.put(x as usize, y as usize, color);
                        wrote = true;
                    }
                }
            }
            if wrote {
                drawn += 1;
            }
        }

        debug!(drawn, "frame rasterized");
        image
    }

    /// Render one frame per object pose, in parallel. Frames are
    /// independent and each owns its image and depth buffer, so the output
    /// does not depend on thread count or scheduling.
    pub fn render_sequence(
        &self,
        grid: &VoxelGrid,
        camera: &Camera,
        poses: &[ObjectPose],
        centroid: Vec3,
    ) -> Vec<Image> {
        info!(frames = poses.len(), "rendering sequence");
        poses
            .par_iter()
            .map(|pose| {
                let transform = Transform::from(pose);
                self.render(grid, camera, &transform, centroid)
            })
            .collect()
    }
}
