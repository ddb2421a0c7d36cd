//! Draggable disc obstacle
//!
//! Center and radius are in grid cells, not pixels. The grid keeps the last
//! committed placement so it can derive the obstacle's velocity from how far
//! it moved and un-stamp the old disc.

/// Circular solid region carved into the grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    /// Center column (cells)
    pub x: f32,
    /// Center row (cells)
    pub y: f32,
    /// Radius (cells)
    pub r: f32,
}

impl Obstacle {
    pub fn new(x: f32, y: f32, r: f32) -> Self {
        Self { x, y, r }
    }

    /// Snap to the placement `set_obstacle` commits: floored center, ceiled radius
    pub fn snapped(x: f32, y: f32, r: f32) -> Self {
        Self {
            x: x.floor(),
            y: y.floor(),
            r: r.ceil(),
        }
    }

    /// Euclidean disc test, boundary inclusive. Used by pointer input to
    /// decide whether a press grabs the obstacle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy <= self.r * self.r
    }
}
