//! Read-only summaries of a grid, recomputed from the current velocities
//! rather than the projector's cached `divergence` array.

use crate::domain::cells::CELL_SOLID;
use crate::grid::FluidGrid;

#[inline]
fn cell_divergence(grid: &FluidGrid, idx: usize) -> f32 {
    grid.u[idx + 1] - grid.u[idx] + grid.v[idx] - grid.v[idx - grid.num_x()]
}

fn interior_fluid(grid: &FluidGrid) -> impl Iterator<Item = usize> + '_ {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    (1..num_y - 1)
        .flat_map(move |row| (1..num_x - 1).map(move |col| row * num_x + col))
        .filter(move |&idx| !grid.is_solid_idx(idx))
}

/// Signed net outflow summed over interior fluid cells
pub fn divergence_sum(grid: &FluidGrid) -> f64 {
    interior_fluid(grid).map(|idx| cell_divergence(grid, idx) as f64).sum()
}

pub fn max_abs_divergence(grid: &FluidGrid) -> f32 {
    interior_fluid(grid)
        .map(|idx| cell_divergence(grid, idx).abs())
        .fold(0.0, f32::max)
}

/// Dye over the whole grid, border included
pub fn total_density(grid: &FluidGrid) -> f64 {
    grid.density.iter().map(|&d| d as f64).sum()
}

pub fn fluid_cell_count(grid: &FluidGrid) -> usize {
    grid.types.iter().filter(|&&t| t != CELL_SOLID).count()
}

pub fn solid_cell_count(grid: &FluidGrid) -> usize {
    grid.size() - fluid_cell_count(grid)
}

/// Fastest cell-center speed among interior fluid cells
pub fn max_speed(grid: &FluidGrid) -> f32 {
    interior_fluid(grid)
        .map(|idx| {
            let (row, col) = grid.coords(idx);
            let (u, v) = grid.center_velocity(row, col);
            (u * u + v * v).sqrt()
        })
        .fold(0.0, f32::max)
}
