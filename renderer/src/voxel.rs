//! Dense voxel color grid.

use glam::Vec3;

use crate::color::Rgb;
use crate::error::RenderError;

/// Minimum combined channel intensity for a voxel to count as populated.
/// Shared by centroid extraction and the rasterizer's sparse iteration so
/// both stages agree on which cells exist.
pub const INTENSITY_THRESHOLD: u32 = 10;

/// A dense 3D grid of RGB voxels indexed by (row, column, depth slice).
///
/// Rows grow upward in model space (+Y), columns along +X, slices along +Z.
/// Storage is flat row-major: `(row * cols + col) * slices + slice`. The
/// grid is built once and read-only afterwards; it can be shared by
/// reference across concurrent render calls.
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    rows: usize,
    cols: usize,
    slices: usize,
    data: Vec<Rgb>,
}

impl VoxelGrid {
    /// Create an all-empty grid. Zero dimensions are rejected.
    pub fn new(cols: usize, rows: usize, slices: usize) -> Result<Self, RenderError> {
        if cols == 0 || rows == 0 || slices == 0 {
            return Err(RenderError::InvalidGridDimensions { cols, rows, slices });
        }
        Ok(Self::with_dims(cols, rows, slices))
    }

    /// Infallible constructor for callers that already validated dimensions.
    pub(crate) fn with_dims(cols: usize, rows: usize, slices: usize) -> Self {
        Self {
            rows,
            cols,
            slices,
            data: vec![Rgb::BLACK; rows * cols * slices],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    #[inline]
    fn index(&self, row: usize, col: usize, slice: usize) -> usize {
        (row * self.cols + col) * self.slices + slice
    }

    /// Voxel at (row, col, slice). Out-of-range reads return black.
    pub fn get(&self, row: usize, col: usize, slice: usize) -> Rgb {
        if row >= self.rows || col >= self.cols || slice >= self.slices {
            return Rgb::BLACK;
        }
        self.data[self.index(row, col, slice)]
    }

    /// Bounds-checked write: out-of-range coordinates are silently ignored,
    /// which lets sweep loops overshoot shape edges without branching.
    pub fn set(&mut self, row: i32, col: i32, slice: i32, color: Rgb) {
        if row < 0 || col < 0 || slice < 0 {
            return;
        }
        let (row, col, slice) = (row as usize, col as usize, slice as usize);
        if row >= self.rows || col >= self.cols || slice >= self.slices {
            return;
        }
        let idx = self.index(row, col, slice);
        self.data[idx] = color;
    }

    /// Iterate populated voxels as (row, col, slice, color).
    pub fn populated(&self) -> impl Iterator<Item = (usize, usize, usize, Rgb)> + '_ {
        let cols = self.cols;
        let slices = self.slices;
        self.data.iter().enumerate().filter_map(move |(i, &color)| {
            if color.intensity() <= INTENSITY_THRESHOLD {
                return None;
            }
            let slice = i % slices;
            let rest = i / slices;
            Some((rest / cols, rest % cols, slice, color))
        })
    }

    /// Number of populated voxels.
    pub fn populated_count(&self) -> usize {
        self.data
            .iter()
            .filter(|c| c.intensity() > INTENSITY_THRESHOLD)
            .count()
    }

    /// Bounding-box midpoint of all populated voxels as (x, y, z) =
    /// (column, row, slice). An empty grid yields the grid's geometric
    /// center instead of an error.
    pub fn centroid(&self) -> Vec3 {
        let mut min = [usize::MAX; 3];
        let mut max = [0usize; 3];
        let mut any = false;
        for (row, col, slice, _) in self.populated() {
            any = true;
            let p = [col, row, slice];
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        if !any {
            return Vec3::new(
                (self.cols / 2) as f32,
                (self.rows / 2) as f32,
                (self.slices / 2) as f32,
            );
        }
        Vec3::new(
            ((min[0] + max[0]) / 2) as f32,
            ((min[1] + max[1]) / 2) as f32,
            ((min[2] + max[2]) / 2) as f32,
        )
    }
}
