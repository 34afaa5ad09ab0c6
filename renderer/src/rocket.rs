//! Procedural voxel rocket model
//!
//! Builds the multi-part launch stack (external tank, two side boosters,
//! winged orbiter) from parametric sweeps: each part varies a cross-section
//! radius along the vertical axis and writes shaded voxels cell by cell.
//! Sweeps intentionally overshoot at shape edges and rely on the grid's
//! silent bounds check.

use glam::Vec3;
use tracing::info;

use crate::color::{Rgb, palette};
use crate::error::RenderError;
use crate::voxel::VoxelGrid;

/// Fixed directional light for per-voxel shading (normalized at use).
const LIGHT_DIR: Vec3 = Vec3::new(0.6, 0.4, 0.7);

/// Ambient bias added to the diffuse term before clamping.
const AMBIENT: f32 = 0.3;

/// Shade between a color pair by the diffuse factor of `normal` against the
/// fixed light direction.
fn shaded(normal: Vec3, lit: Rgb, shade: Rgb) -> Rgb {
    let factor = (normal.dot(LIGHT_DIR.normalize()) + AMBIENT).clamp(0.0, 1.0);
    Rgb::lerp(shade, lit, factor)
}

/// Builder for the rocket voxel model.
///
/// The output is purely a function of the grid dimensions and the
/// hard-coded shape parameters, so [`RocketModel::build`] is idempotent:
/// two builds produce byte-identical grids.
#[derive(Debug, Clone)]
pub struct RocketModel {
    cols: usize,
    rows: usize,
    slices: usize,
}

impl Default for RocketModel {
    /// The canonical 320 x 450 x 320 launch stack.
    fn default() -> Self {
        Self {
            cols: 320,
            rows: 450,
            slices: 320,
        }
    }
}

impl RocketModel {
    /// Model with explicit grid dimensions. Zero dimensions are rejected.
    pub fn new(cols: usize, rows: usize, slices: usize) -> Result<Self, RenderError> {
        if cols == 0 || rows == 0 || slices == 0 {
            return Err(RenderError::InvalidGridDimensions { cols, rows, slices });
        }
        Ok(Self { cols, rows, slices })
    }

    /// Grid center, the anchor every part is positioned against.
    fn center(&self) -> (i32, i32, i32) {
        (
            (self.cols / 2) as i32,
            (self.rows / 2) as i32,
            (self.slices / 2) as i32,
        )
    }

    /// Build the rocket into a fresh grid.
    pub fn build(&self) -> VoxelGrid {
        let mut grid = VoxelGrid::with_dims(self.cols, self.rows, self.slices);
        self.external_tank(&mut grid);
        self.boosters(&mut grid);
        self.orbiter_body(&mut grid);
        self.cockpit_window(&mut grid);
        self.wings(&mut grid);
        self.main_engines(&mut grid);
        info!(populated = grid.populated_count(), "rocket model built");
        grid
    }

    /// Fill one horizontal cross-section disc with radially shaded voxels.
    /// `ny` tilts the normal upward on tapering sections.
    fn shaded_disc(
        grid: &mut VoxelGrid,
        y: i32,
        cx: i32,
        cz: i32,
        radius: f32,
        ny: f32,
        lit: Rgb,
        shade: Rgb,
    ) {
        if radius <= 0.0 {
            return;
        }
        for x in ((cx as f32 - radius - 1.0) as i32)..((cx as f32 + radius + 2.0) as i32) {
            for z in ((cz as f32 - radius - 1.0) as i32)..((cz as f32 + radius + 2.0) as i32) {
                let dx = (x - cx) as f32;
                let dz = (z - cz) as f32;
                if (dx * dx + dz * dz).sqrt() <= radius {
                    let normal = Vec3::new(dx / radius, ny, dz / radius);
                    grid.set(y, x, z, shaded(normal, lit, shade));
                }
            }
        }
    }

    /// External tank: wide cylinder behind the orbiter with an ogive nose.
    fn external_tank(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let r_tank = 40.0;
        let cz_tank = cz + 30;
        let y_base = cy - 185;
        let y_taper = cy + 145;
        for y in y_base..(y_taper + 55) {
            let radius = if y < y_taper {
                r_tank
            } else {
                r_tank * (1.0 - ((y - y_taper) as f32 / 55.0).powf(0.9))
            };
            let ny = if y < y_taper { 0.0 } else { 0.25 };
            Self::shaded_disc(
                grid,
                y,
                cx,
                cz_tank,
                radius,
                ny,
                palette::TANK_LIT,
                palette::TANK_SHADE,
            );
        }
    }

    /// Twin boosters flanking the tank: slim cylinders with dark-capped
    /// cones on top and flared nozzle skirts below the body.
    fn boosters(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let r_booster = 15.0;
        let cz_tank = cz + 30;
        let y_base = cy - 200;
        let y_taper = cy + 105;
        for side in [-1i32, 1] {
            let bx = cx + side * 58;
            for y in y_base..(y_taper + 40) {
                let radius = if y < y_taper {
                    r_booster
                } else {
                    r_booster * (1.0 - ((y - y_taper) as f32 / 40.0).powf(0.9))
                };
                let (lit, shade) = if y > y_taper + 26 {
                    (palette::NOZZLE_LIT, palette::NOZZLE_SHADE)
                } else {
                    (palette::HULL_LIT, palette::HULL_SHADE)
                };
                let ny = if y < y_taper { 0.0 } else { 0.25 };
                Self::shaded_disc(grid, y, bx, cz_tank, radius, ny, lit, shade);
            }
            // Nozzle skirt flares toward the base.
            for y in (y_base - 16)..y_base {
                let t = (y_base - y) as f32 / 16.0;
                let radius = 10.0 + 7.0 * t;
                Self::shaded_disc(
                    grid,
                    y,
                    bx,
                    cz_tank,
                    radius,
                    -0.2,
                    palette::NOZZLE_LIT,
                    palette::NOZZLE_SHADE,
                );
            }
        }
    }

    /// Orbiter fuselage: cylinder with a tapered nose, black thermal-tile
    /// belly band and nose cap, white hull elsewhere.
    fn orbiter_body(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let h_orb = 180;
        let r_orb = 25.0;
        let y_orb = cy - 30;
        let cz_orb = cz - 35;
        let taper_start = y_orb + h_orb - 30;
        for y in y_orb..(y_orb + h_orb + 25) {
            let radius = if y < taper_start {
                r_orb
            } else {
                r_orb * (1.0 - ((y - taper_start) as f32 / 55.0).powf(0.9))
            };
            if radius <= 0.0 {
                continue;
            }
            for x in ((cx as f32 - radius - 1.0) as i32)..((cx as f32 + radius + 2.0) as i32) {
                for z in
                    ((cz_orb as f32 - radius - 1.0) as i32)..((cz_orb as f32 + radius + 2.0) as i32)
                {
                    let dx = (x - cx) as f32;
                    let dz = (z - cz_orb) as f32;
                    if (dx * dx + dz * dz).sqrt() > radius {
                        continue;
                    }
                    let ny = if y > taper_start { 0.2 } else { 0.0 };
                    let normal = Vec3::new(dx / radius, ny, dz / radius);
                    // The belly band faces the smaller-z side.
                    let belly = z < cz_orb && dx.abs() < r_orb * 0.8;
                    let (mut lit, mut shade) = if belly {
                        (palette::THERMAL_LIT, palette::THERMAL_SHADE)
                    } else {
                        (palette::HULL_LIT, palette::HULL_SHADE)
                    };
                    // Nose cap and leading face are tiled too.
                    if y > y_orb + h_orb - 10 || z < cz_orb - r_orb as i32 + 5 {
                        lit = palette::THERMAL_LIT;
                        shade = palette::THERMAL_SHADE;
                    }
                    grid.set(y, x, z, shaded(normal, lit, shade));
                }
            }
        }
    }

    /// Flat cockpit window panel on the orbiter nose, unshaded, with a
    /// glint highlight toward one corner.
    fn cockpit_window(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let y_orb = cy - 30;
        let cz_orb = cz - 35;
        let y_cockpit = y_orb + 150;
        for y in y_cockpit..(y_cockpit + 12) {
            for x in (cx - 14)..(cx + 14) {
                if (x - cx).abs() < 6 && y > y_cockpit + 3 {
                    let color = if x > cx + 2 && y > y_cockpit + 8 {
                        palette::WINDOW_GLINT
                    } else {
                        palette::THERMAL_LIT
                    };
                    grid.set(y, x, cz_orb - 22, color);
                }
            }
        }
    }

    /// Delta wings: span grows toward the base, the leading edge sweeps
    /// forward, and a dark band marks its first few slices. One dark row is
    /// written under every surface voxel for the underside.
    fn wings(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let y_orb = cy - 30;
        let cz_orb = cz - 35;
        let y_start = y_orb + 5;
        let y_end = y_orb + 120;
        for y in y_start..y_end {
            let rel = (y_end - y) as f32 / (y_end - y_start) as f32;
            let span = 25.0 + 80.0 * rel;
            let z_lead = cz_orb as f32 - 25.0 + 30.0 * rel;
            for x in ((cx as f32 - span) as i32)..((cx as f32 + span) as i32) {
                // The fuselage occupies the root.
                if (x - cx).abs() < 20 {
                    continue;
                }
                for z in (z_lead as i32)..(cz_orb + 23) {
                    let leading = (z as f32) < z_lead + 6.0;
                    let (lit, shade) = if leading {
                        (palette::THERMAL_LIT, palette::THERMAL_SHADE)
                    } else {
                        (palette::HULL_LIT, palette::HULL_SHADE)
                    };
                    grid.set(y, x, z, shaded(Vec3::new(0.0, 0.1, 0.9), lit, shade));
                    grid.set(y - 1, x, z, palette::THERMAL_SHADE);
                }
            }
        }
    }

    /// Three main engine bells under the orbiter tail, flaring toward the
    /// base.
    fn main_engines(&self, grid: &mut VoxelGrid) {
        let (cx, cy, cz) = self.center();
        let y_orb = cy - 30;
        let cz_orb = cz - 35;
        for (ex, ez) in [(cx - 10, cz_orb + 8), (cx + 10, cz_orb + 8), (cx, cz_orb - 4)] {
            for y in (y_orb - 18)..y_orb {
                let t = (y_orb - y) as f32 / 18.0;
                let radius = 4.0 + 4.0 * t;
                Self::shaded_disc(
                    grid,
                    y,
                    ex,
                    ez,
                    radius,
                    -0.3,
                    palette::NOZZLE_LIT,
                    palette::NOZZLE_SHADE,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_factor_selects_between_pair() {
        // Normal pointing straight at the light: factor clamps to 1.
        let lit = shaded(
            LIGHT_DIR.normalize(),
            palette::HULL_LIT,
            palette::HULL_SHADE,
        );
        assert_eq!(lit, palette::HULL_LIT);
        // Normal opposing the light: factor clamps to 0.
        let shade = shaded(
            -LIGHT_DIR.normalize(),
            palette::HULL_LIT,
            palette::HULL_SHADE,
        );
        assert_eq!(shade, palette::HULL_SHADE);
    }

    #[test]
    fn flat_normal_gets_ambient_only() {
        let c = shaded(Vec3::ZERO, Rgb::new(100, 100, 100), Rgb::new(0, 0, 0));
        // factor = 0.3 ambient
        assert_eq!(c, Rgb::new(30, 30, 30));
    }
}
