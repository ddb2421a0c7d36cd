//! Bilinear sampling of a staggered field at an arbitrary physical point.
//!
//! Each field's samples live on their own lattice (see `Field::stagger`).
//! The query point is clamped into `[h/2, n*h - 1]` on both axes, mapped
//! into the field's lattice, and blended from the four surrounding samples.
//! The anchor cell is clamped so the 2x2 stencil always stays on the grid,
//! which makes every finite or non-finite query safe to evaluate.

use crate::domain::fields::Field;
use crate::grid::FluidGrid;

/// Sample `field` at physical position `(x, y)`
pub fn sample_field(grid: &FluidGrid, x: f32, y: f32, field: Field) -> f32 {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    let h = grid.cell_size();
    let (ox, oy) = field.stagger();

    // min-then-max rather than clamp: tiny grids can have lo > hi
    let x = x.min(num_x as f32 * h - 1.0).max(0.5 * h);
    let y = y.min(num_y as f32 * h - 1.0).max(0.5 * h);

    let (col, tx) = lattice_coord(x / h - ox, num_x);
    let (row, ty) = lattice_coord(y / h - oy, num_y);

    let f = grid.field(field);
    let top = row * num_x + col;
    let bottom = top + num_x;

    let upper = (1.0 - tx) * f[top] + tx * f[top + 1];
    let lower = (1.0 - tx) * f[bottom] + tx * f[bottom + 1];
    (1.0 - ty) * upper + ty * lower
}

/// Split a lattice coordinate into an anchor index in `[0, n-2]` and a
/// weight in `[0, 1]`
#[inline]
fn lattice_coord(g: f32, n: usize) -> (usize, f32) {
    let max_anchor = (n - 2) as f32;
    let anchor = g.floor().min(max_anchor).max(0.0);
    let t = (g - anchor).min(1.0).max(0.0);
    (anchor as usize, t)
}
