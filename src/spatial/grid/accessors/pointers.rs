use super::super::*;

impl FluidGrid {
    // === Raw pointers for zero-copy JS reads (valid until the next step) ===
    pub fn u_ptr(&self) -> *const f32 {
        self.u.as_ptr()
    }

    pub fn v_ptr(&self) -> *const f32 {
        self.v.as_ptr()
    }

    pub fn types_ptr(&self) -> *const CellCode {
        self.types.as_ptr()
    }

    pub fn density_ptr(&self) -> *const f32 {
        self.density.as_ptr()
    }

    pub fn divergence_ptr(&self) -> *const f32 {
        self.divergence.as_ptr()
    }
}
