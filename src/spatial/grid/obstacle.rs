use super::*;

impl FluidGrid {
    /// Move the obstacle to `(x, y)` with radius `r` and stamp it.
    ///
    /// The center is floored and the radius ceiled. The displacement from the
    /// previous placement divided by `dt` becomes the velocity of every
    /// covered cell, which is how a dragged obstacle pushes fluid. Covered
    /// cells turn solid and lose their dye. Cells on the border ring and
    /// cells off the grid are skipped, so any placement is accepted.
    pub fn set_obstacle(&mut self, x: f32, y: f32, r: f32) {
        if !(x.is_finite() && y.is_finite() && r.is_finite()) {
            log::warn!("ignoring non-finite obstacle placement ({}, {}) r={}", x, y, r);
            return;
        }

        let next = Obstacle::snapped(x, y, r);
        let vx = (next.x - self.obstacle.x) / self.dt;
        let vy = (next.y - self.obstacle.y) / self.dt;

        if vx != 0.0 || vy != 0.0 {
            log::debug!(
                "obstacle moved to ({}, {}) r={}, velocity ({:.3}, {:.3})",
                next.x,
                next.y,
                next.r,
                vx,
                vy
            );
        }

        self.obstacle = next;
        self.for_each_disc_cell(next, |grid, idx| {
            grid.types[idx] = CELL_SOLID;
            grid.u[idx] = vx;
            grid.v[idx] = vy;
            grid.density[idx] = 0.0;
        });
    }

    /// Return the cells under the current disc to fluid.
    ///
    /// Velocity and dye are not restored; whatever the obstacle wrote stays.
    pub fn clear_obstacle(&mut self) {
        let current = self.obstacle;
        self.for_each_disc_cell(current, |grid, idx| {
            grid.types[idx] = CELL_FLUID;
        });
    }

    /// Visit interior cells whose center lies in the closed disc
    fn for_each_disc_cell<F>(&mut self, disc: Obstacle, mut visit: F)
    where
        F: FnMut(&mut FluidGrid, usize),
    {
        if !(disc.r > 0.0) {
            return;
        }

        // Clamp the disc's bounding box to the interior before touching anything
        let last_row = self.num_y as f64 - 2.0;
        let last_col = self.num_x as f64 - 2.0;
        let (cx, cy, r) = (disc.x as f64, disc.y as f64, disc.r as f64);
        let row_lo = (cy - r).max(1.0);
        let row_hi = (cy + r).min(last_row);
        let col_lo = (cx - r).max(1.0);
        let col_hi = (cx + r).min(last_col);
        if row_lo > row_hi || col_lo > col_hi {
            return;
        }

        let r2 = r * r;
        for row in row_lo as usize..=row_hi as usize {
            let dy = row as f64 - cy;
            for col in col_lo as usize..=col_hi as usize {
                let dx = col as f64 - cx;
                if dx * dx + dy * dy <= r2 {
                    let idx = self.index(row, col);
                    visit(self, idx);
                }
            }
        }
    }
}
