use super::*;
use crate::domain::fields::Field;

impl FluidGrid {
    /// Read-only view of one field
    #[inline]
    pub fn field(&self, field: Field) -> &[f32] {
        match field {
            Field::Horizontal => &self.u,
            Field::Vertical => &self.v,
            Field::Density => &self.density,
        }
    }

    #[inline]
    pub fn field_mut(&mut self, field: Field) -> &mut [f32] {
        match field {
            Field::Horizontal => &mut self.u,
            Field::Vertical => &mut self.v,
            Field::Density => &mut self.density,
        }
    }
}
