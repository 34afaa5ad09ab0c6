//! Voxel rocket software renderer
//!
//! Procedurally builds a voxel model of a multi-part rocket (external tank,
//! two side boosters, winged orbiter) and renders it to a 2D image through
//! a hand-written perspective pipeline: object transform, camera view
//! transform, perspective projection, and a depth-buffered point-splat
//! rasterizer.
//!
//! The grid is built once and shared by reference across render calls; each
//! frame owns its own image and depth buffer.

pub mod camera;
pub mod color;
pub mod error;
pub mod image;
pub mod rasterizer;
pub mod rocket;
pub mod transform;
pub mod voxel;

pub use camera::{Basis, BasisDerivation, Camera, WORLD_UP, look_at_basis};
pub use color::{Rgb, palette};
pub use error::RenderError;
pub use image::Image;
pub use rasterizer::{NEAR_PLANE, Renderer};
pub use rocket::RocketModel;
pub use transform::Transform;
pub use voxel::{INTENSITY_THRESHOLD, VoxelGrid};
