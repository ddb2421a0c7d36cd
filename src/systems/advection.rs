//! Semi-Lagrangian advection
//!
//! Every interior fluid sample is traced back along the velocity field for
//! one step and replaced with the old field's value at the departure point.
//! Results are written to the grid's scratch buffers and only swapped in once
//! the whole sweep is done, so every read in a sweep sees the old field.

use crate::domain::cells::fluid_weight;
use crate::domain::fields::Field;
use crate::grid::FluidGrid;
use crate::systems::interpolate::sample_field;

/// Advect `u` and `v` through themselves
pub fn advect_velocity(grid: &mut FluidGrid, dt: f32) {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    let h = grid.cell_size();
    let half = 0.5 * h;

    // Unvisited samples keep their old values
    let mut next_u = std::mem::take(&mut grid.u_scratch);
    let mut next_v = std::mem::take(&mut grid.v_scratch);
    next_u.copy_from_slice(&grid.u);
    next_v.copy_from_slice(&grid.v);

    for row in 1..num_y - 1 {
        for col in 1..num_x - 1 {
            let here = row * num_x + col;
            if fluid_weight(*fast!(grid.types, [here])) == 0.0 {
                continue;
            }

            // u sample: left edge midpoint
            let x = col as f32 * h;
            let y = row as f32 * h + half;
            let u = *fast!(grid.u, [here]);
            let v = averaged_v(grid, here, num_x);
            let value = sample_field(grid, x - dt * u, y - dt * v, Field::Horizontal);
            fast!(next_u, [here] = value);

            // v sample: bottom edge midpoint
            let x = col as f32 * h + half;
            let y = (row + 1) as f32 * h;
            let u = averaged_u(grid, here, num_x);
            let v = *fast!(grid.v, [here]);
            let value = sample_field(grid, x - dt * u, y - dt * v, Field::Vertical);
            fast!(next_v, [here] = value);
        }
    }

    grid.u_scratch = std::mem::replace(&mut grid.u, next_u);
    grid.v_scratch = std::mem::replace(&mut grid.v, next_v);
}

/// Advect the dye through the (already advected) velocity field
pub fn advect_density(grid: &mut FluidGrid, dt: f32) {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    let h = grid.cell_size();

    let mut next = std::mem::take(&mut grid.density_scratch);
    next.copy_from_slice(&grid.density);

    for row in 1..num_y - 1 {
        for col in 1..num_x - 1 {
            let here = row * num_x + col;
            if fluid_weight(*fast!(grid.types, [here])) == 0.0 {
                continue;
            }

            let u = (*fast!(grid.u, [here]) + *fast!(grid.u, [here + 1])) * 0.5;
            let v = (*fast!(grid.v, [here]) + *fast!(grid.v, [here - num_x])) * 0.5;
            let x = (col as f32 + 0.5) * h - dt * u;
            let y = (row as f32 + 0.5) * h - dt * v;
            fast!(next, [here] = sample_field(grid, x, y, Field::Density));
        }
    }

    grid.density_scratch = std::mem::replace(&mut grid.density, next);
}

/// `v` at a `u` sample: occupancy-weighted mean of the four `v` faces
/// around the left edge of `here`
#[inline]
fn averaged_v(grid: &FluidGrid, here: usize, num_x: usize) -> f32 {
    let left = here - 1;
    weighted_mean(grid, [here, left, left - num_x, here - num_x], &grid.v)
}

/// `u` at a `v` sample: occupancy-weighted mean of the four `u` faces
/// around the bottom edge of `here`
#[inline]
fn averaged_u(grid: &FluidGrid, here: usize, num_x: usize) -> f32 {
    let below = here + num_x;
    weighted_mean(grid, [here, below, here + 1, below + 1], &grid.u)
}

#[inline]
fn weighted_mean(grid: &FluidGrid, cells: [usize; 4], field: &[f32]) -> f32 {
    let mut sum = 0.0;
    let mut weight = 0.0;
    for idx in cells {
        let w = fluid_weight(*fast!(grid.types, [idx]));
        sum += w * *fast!(field, [idx]);
        weight += w;
    }
    if weight > 0.0 { sum / weight } else { 0.0 }
}
