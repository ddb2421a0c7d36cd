use super::super::*;
use crate::domain::cells::CellType;

impl FluidGrid {
    // === Occupancy ===
    #[inline]
    pub fn cell_type(&self, row: usize, col: usize) -> CellType {
        CellType::from_code(self.types[self.index(row, col)])
    }

    #[inline]
    pub fn is_fluid(&self, row: usize, col: usize) -> bool {
        self.types[self.index(row, col)] != CELL_SOLID
    }

    #[inline]
    pub fn is_solid_idx(&self, idx: usize) -> bool {
        self.types[idx] == CELL_SOLID
    }

    #[inline]
    pub fn set_cell_type(&mut self, row: usize, col: usize, cell: CellType) {
        let idx = self.index(row, col);
        self.types[idx] = cell.code();
    }

    // === Dye ===
    #[inline]
    pub fn get_density(&self, row: usize, col: usize) -> f32 {
        self.density[self.index(row, col)]
    }

    #[inline]
    pub fn set_density(&mut self, row: usize, col: usize, value: f32) {
        let idx = self.index(row, col);
        self.density[idx] = value;
    }

    #[inline]
    pub fn get_divergence(&self, row: usize, col: usize) -> f32 {
        self.divergence[self.index(row, col)]
    }
}
