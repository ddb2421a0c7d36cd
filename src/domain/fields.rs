//! Grid field selector
//!
//! Stages that work on "some field" (boundary copy, bilinear sampling) take a
//! `Field` and dispatch with a match. The set is closed: there is no way to
//! name a field that does not exist, except through the raw `u8` ids JS
//! passes in, which `TryFrom` rejects.

use crate::core::error::SimError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// `u`, sampled at the midpoint of each cell's left edge
    Horizontal,
    /// `v`, sampled at the midpoint of each cell's bottom edge
    Vertical,
    /// Passive dye, sampled at cell centers
    Density,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Horizontal, Field::Vertical, Field::Density];

    /// Stable id used across the JS boundary
    #[inline]
    pub fn id(self) -> u8 {
        match self {
            Field::Horizontal => 0,
            Field::Vertical => 1,
            Field::Density => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Horizontal => "horizontal",
            Field::Vertical => "vertical",
            Field::Density => "density",
        }
    }

    /// Offset, in cells, of sample `(row 0, col 0)` from the grid origin.
    ///
    /// Sample `(row, col)` sits at `((col + ox) * h, (row + oy) * h)`.
    /// Origin is the top-left corner, y grows downward.
    #[inline]
    pub fn stagger(self) -> (f32, f32) {
        match self {
            Field::Horizontal => (0.0, 0.5),
            Field::Vertical => (0.5, 1.0),
            Field::Density => (0.5, 0.5),
        }
    }
}

impl TryFrom<u8> for Field {
    type Error = SimError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Field::Horizontal),
            1 => Ok(Field::Vertical),
            2 => Ok(Field::Density),
            other => Err(SimError::UnknownField(other)),
        }
    }
}
