use super::*;

impl FluidGrid {
    // === Dimensions ===
    #[inline]
    pub fn num_x(&self) -> usize { self.num_x }

    #[inline]
    pub fn num_y(&self) -> usize { self.num_y }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Index conversion ===
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.num_y && col < self.num_x,
            "index: out of bounds (row {}, col {}) for {}x{} grid",
            row,
            col,
            self.num_x,
            self.num_y
        );
        row * self.num_x + col
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        (idx / self.num_x, idx % self.num_x)
    }

    // === Border ===
    #[inline]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.num_y - 1 || col == self.num_x - 1
    }
}
