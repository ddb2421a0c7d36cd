//! Pressure projection
//!
//! Gauss-Seidel relaxation of the velocity field toward zero divergence.
//! Each sweep visits interior fluid cells in row-major order and pushes the
//! cell's net outflow back through its fluid faces, split evenly between
//! them. Solid faces carry no correction. Updates are in place, so later
//! cells in a sweep see earlier corrections and the visit order is part of
//! the numerical result.

use crate::domain::cells::fluid_weight;
use crate::grid::FluidGrid;

pub const DEFAULT_ITERATIONS: u32 = 30;

/// Early exit once |signed divergence sum of a sweep| drops below this.
///
/// Weak global criterion: positive and negative cells can cancel.
pub const CONVERGENCE_EPSILON: f64 = 1e-7;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectionReport {
    /// Sweeps actually run (1..=iterations)
    pub sweeps: u32,
    /// Signed divergence sum accumulated during the last sweep
    pub divergence_sum: f64,
}

impl ProjectionReport {
    #[inline]
    pub fn converged(&self) -> bool {
        self.divergence_sum.abs() < CONVERGENCE_EPSILON
    }
}

/// Run up to `iterations` sweeps. Never fails: hitting the sweep budget is
/// the normal outcome.
pub fn project(grid: &mut FluidGrid, iterations: u32) -> ProjectionReport {
    let num_x = grid.num_x();
    let num_y = grid.num_y();
    let mut report = ProjectionReport::default();

    for sweep in 0..iterations {
        let total = relax_sweep(grid, num_x, num_y);
        report = ProjectionReport {
            sweeps: sweep + 1,
            divergence_sum: total,
        };
        if report.converged() {
            break;
        }
    }

    log::trace!(
        "projection: {} sweeps, divergence sum {:.3e}",
        report.sweeps,
        report.divergence_sum
    );
    report
}

/// One in-place sweep; returns the signed sum of the divergences it saw
fn relax_sweep(grid: &mut FluidGrid, num_x: usize, num_y: usize) -> f64 {
    let FluidGrid {
        u, v, types, divergence, ..
    } = grid;
    let mut total = 0.0f64;

    for row in 1..num_y - 1 {
        for col in 1..num_x - 1 {
            let here = row * num_x + col;
            if fluid_weight(*fast!(types, [here])) == 0.0 {
                continue;
            }
            let left = here - 1;
            let right = here + 1;
            let above = here - num_x;
            let below = here + num_x;

            // u[here] is the left face, u[right] the right face;
            // v[here] is the bottom face, v[above] the top face
            let div = *fast!(u, [right]) as f64 - *fast!(u, [here]) as f64 + *fast!(v, [here]) as f64
                - *fast!(v, [above]) as f64;
            total += div;
            fast!(divergence, [here] = div as f32);

            let s_left = fluid_weight(*fast!(types, [left])) as f64;
            let s_right = fluid_weight(*fast!(types, [right])) as f64;
            let s_above = fluid_weight(*fast!(types, [above])) as f64;
            let s_below = fluid_weight(*fast!(types, [below])) as f64;
            let s = s_left + s_right + s_above + s_below;
            if s == 0.0 {
                // Walled in on all sides: nowhere to send the outflow
                continue;
            }

            // f64 stencil, rounded to f32 on store
            let correction = div / s;
            fast!(u, [here] = (*fast!(u, [here]) as f64 + correction * s_left) as f32);
            fast!(v, [here] = (*fast!(v, [here]) as f64 - correction * s_below) as f32);
            fast!(u, [right] = (*fast!(u, [right]) as f64 - correction * s_right) as f32);
            fast!(v, [above] = (*fast!(v, [above]) as f64 + correction * s_above) as f32);
        }
    }

    total
}
