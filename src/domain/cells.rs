//! Cell occupancy
//!
//! Occupancy is stored as a byte per cell so JS can read it straight out of
//! linear memory. The byte doubles as the 0/1 weight the stencils multiply
//! by: a solid neighbor contributes nothing.

/// Byte code type stored in `FluidGrid::types`
pub type CellCode = u8;

pub const CELL_SOLID: CellCode = 0;
pub const CELL_FLUID: CellCode = 1;

/// Typed view of a cell's occupancy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellType {
    /// Impermeable wall or obstacle; its velocity is imposed, not solved
    Solid,
    /// Takes part in projection and advection
    Fluid,
}

impl CellType {
    #[inline]
    pub fn code(self) -> CellCode {
        match self {
            CellType::Solid => CELL_SOLID,
            CellType::Fluid => CELL_FLUID,
        }
    }

    /// Any non-zero code reads as fluid
    #[inline]
    pub fn from_code(code: CellCode) -> Self {
        if code == CELL_SOLID {
            CellType::Solid
        } else {
            CellType::Fluid
        }
    }

    #[inline]
    pub fn is_fluid(self) -> bool {
        self == CellType::Fluid
    }

    #[inline]
    pub fn is_solid(self) -> bool {
        self == CellType::Solid
    }
}

/// Stencil weight of an occupancy code (1.0 fluid, 0.0 solid)
#[inline(always)]
pub fn fluid_weight(code: CellCode) -> f32 {
    if code == CELL_SOLID { 0.0 } else { 1.0 }
}
