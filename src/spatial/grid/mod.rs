//! FluidGrid - Structure of Arrays storage for the staggered grid
//!
//! Row-major, `index = row * num_x + col`, origin at the top-left corner.
//! - `u[idx]`: horizontal velocity at the midpoint of the cell's left edge (+ = right)
//! - `v[idx]`: vertical velocity at the midpoint of the cell's bottom edge (+ = down)
//! - `types[idx]`: occupancy code, `CELL_SOLID` / `CELL_FLUID`
//! - `density[idx]`: passive dye at the cell center, not clamped
//! - `divergence[idx]`: last net outflow computed by the projector
//!
//! The outer ring (row 0, row num_y-1, col 0, col num_x-1) is always solid,
//! which is what keeps every neighbor read of an interior cell in range.

use crate::core::error::SimResult;
use crate::domain::cells::{CellCode, CELL_FLUID, CELL_SOLID};
use crate::domain::config::SimConfig;
use crate::obstacle::Obstacle;

mod indexing;
mod accessors;
mod fields;
mod obstacle;

/// SoA grid - every per-cell property in its own contiguous array
pub struct FluidGrid {
    num_x: usize,
    num_y: usize,
    size: usize,
    cell_size: f32,
    dt: f32,

    pub u: Vec<f32>,
    pub v: Vec<f32>,
    pub types: Vec<CellCode>,
    pub density: Vec<f32>,
    pub divergence: Vec<f32>,

    // Advection writes here, then swaps, so a sweep never reads its own output
    pub(crate) u_scratch: Vec<f32>,
    pub(crate) v_scratch: Vec<f32>,
    pub(crate) density_scratch: Vec<f32>,

    obstacle: Obstacle,
}

impl FluidGrid {
    /// Allocate and seed a grid: solid border, fluid interior, inlet jet on
    /// column 1, a dye band on the left wall, then the initial obstacle.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;

        let num_x = config.num_x as usize;
        let num_y = config.num_y as usize;
        let size = num_x * num_y;

        let mut grid = Self {
            num_x,
            num_y,
            size,
            cell_size: config.cell_size,
            dt: config.dt,
            u: vec![0.0; size],
            v: vec![0.0; size],
            types: vec![CELL_FLUID; size],
            density: vec![0.0; size],
            divergence: vec![0.0; size],
            u_scratch: vec![0.0; size],
            v_scratch: vec![0.0; size],
            density_scratch: vec![0.0; size],
            obstacle: Obstacle::snapped(
                config.obstacle_x_fraction * config.num_x as f32,
                config.obstacle_y_fraction * config.num_y as f32,
                config.obstacle_radius_fraction * config.num_x as f32,
            ),
        };

        let mid = 0.5 * num_y as f32;
        let half_width = config.pipe_half_width_fraction * num_y as f32;

        for row in 0..num_y {
            let in_pipe = (row as f32) > mid - half_width && (row as f32) < mid + half_width;
            for col in 0..num_x {
                let idx = grid.index(row, col);
                if grid.is_border(row, col) {
                    grid.types[idx] = CELL_SOLID;
                }
                if col == 1 {
                    grid.u[idx] = config.inlet_speed;
                }
                if col == 0 && in_pipe {
                    grid.density[idx] = 1.0;
                }
            }
        }

        // Placement is pre-snapped, so the first stamp imparts no velocity
        let Obstacle { x, y, r } = grid.obstacle;
        grid.set_obstacle(x, y, r);

        log::info!(
            "fluid grid {}x{} (h={}, dt={:.4}), obstacle at ({}, {}) r={}",
            num_x,
            num_y,
            grid.cell_size,
            grid.dt,
            x,
            y,
            r
        );

        Ok(grid)
    }

    /// Convenience constructor with the remaining settings defaulted
    pub fn with_dimensions(num_x: u32, num_y: u32, cell_size: f32, dt: f32) -> SimResult<Self> {
        Self::new(&SimConfig::new(num_x, num_y, cell_size, dt))
    }

    #[inline]
    pub fn cell_size(&self) -> f32 { self.cell_size }

    #[inline]
    pub fn dt(&self) -> f32 { self.dt }

    #[inline]
    pub fn obstacle(&self) -> &Obstacle { &self.obstacle }
}

#[cfg(test)]
mod tests;
