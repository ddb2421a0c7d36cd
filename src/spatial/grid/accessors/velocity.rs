use super::super::*;

impl FluidGrid {
    // === Staggered velocity access by (row, col) ===
    #[inline]
    pub fn get_u(&self, row: usize, col: usize) -> f32 {
        self.u[self.index(row, col)]
    }

    #[inline]
    pub fn get_v(&self, row: usize, col: usize) -> f32 {
        self.v[self.index(row, col)]
    }

    #[inline]
    pub fn set_u(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.u[idx] = value;
    }

    #[inline]
    pub fn set_v(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.v[idx] = value;
    }

    /// Velocity at the cell center: mean of the two `u` faces and the two `v` faces
    #[inline]
    pub fn center_velocity(&self, row: usize, col: usize) -> (f32, f32) {
        let idx = self.index(row, col);
        let right = if col + 1 < self.num_x { self.u[idx + 1] } else { self.u[idx] };
        let top = if row > 0 { self.v[idx - self.num_x] } else { self.v[idx] };
        ((self.u[idx] + right) * 0.5, (self.v[idx] + top) * 0.5)
    }
}
