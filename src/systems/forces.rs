use crate::grid::FluidGrid;

/// Integrate gravity into `v` for one step.
///
/// An interior cell gains `gravity * dt` unless the cell below it is solid.
/// Only the below-neighbor is checked; `u` is never touched.
#[inline]
pub fn apply_gravity(grid: &mut FluidGrid, gravity: f32, dt: f32) {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    let dv = gravity * dt;

    for row in 1..num_y - 1 {
        for col in 1..num_x - 1 {
            let idx = row * num_x + col;
            if !grid.is_solid_idx(idx + num_x) {
                grid.v[idx] += dv;
            }
        }
    }
}
