//! Color extraction for canvas `ImageData`
//!
//! One ABGR `u32` per cell (little-endian RGBA bytes), row-major, ready to be
//! copied straight into a `Uint8ClampedArray` view. Priority per cell:
//! solid in occupancy view, then dye in density view, then white.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::cells::CELL_SOLID;
use crate::grid::FluidGrid;

/// Opaque red
pub const COLOR_OBSTACLE: u32 = 0xFF00_00FF;
/// Opaque white
pub const COLOR_EMPTY: u32 = 0xFFFF_FFFF;

/// Which grid features the renderer shows
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderView {
    pub show_occupancy: bool,
    pub show_density: bool,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            show_occupancy: true,
            show_density: true,
        }
    }
}

/// Dye 0 is white, dye 1 and above is black
#[inline]
pub fn density_gray(density: f32) -> u32 {
    let c = ((1.0 - density) * 255.0).clamp(0.0, 255.0) as u32;
    0xFF00_0000 | (c << 16) | (c << 8) | c
}

#[inline]
fn cell_color(cell: u8, density: f32, view: RenderView) -> u32 {
    if view.show_occupancy && cell == CELL_SOLID {
        COLOR_OBSTACLE
    } else if view.show_density {
        density_gray(density)
    } else {
        COLOR_EMPTY
    }
}

pub(super) fn fill_colors(grid: &FluidGrid, view: RenderView, colors: &mut Vec<u32>) {
    let width = grid.num_x();
    colors.resize(grid.size(), 0);

    let fill_row = |(row, out): (usize, &mut [u32])| {
        let start = row * width;
        let types = &grid.types[start..start + width];
        let density = &grid.density[start..start + width];
        for ((px, &cell), &d) in out.iter_mut().zip(types).zip(density) {
            *px = cell_color(cell, d, view);
        }
    };

    #[cfg(feature = "parallel")]
    {
        colors.par_chunks_mut(width).enumerate().for_each(fill_row);
    }

    #[cfg(not(feature = "parallel"))]
    {
        colors.chunks_mut(width).enumerate().for_each(fill_row);
    }
}
