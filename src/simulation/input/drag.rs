//! Pointer dragging of the obstacle
//!
//! Converts canvas pixels to grid cells with a fixed scale taken from the
//! canvas width. A press grabs the obstacle only when it lands inside the
//! disc; moves while grabbed un-stamp the old disc and stamp the new one at
//! the same radius, which is what gives the displaced fluid its velocity.

use super::SimulationCore;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragController {
    cells_per_pixel: f32,
    grabbed: bool,
}

impl DragController {
    /// `canvas_width_px` is the CSS width the pointer coordinates are measured in
    pub fn new(canvas_width_px: f32, num_x: u32) -> Self {
        Self {
            cells_per_pixel: scale_for(canvas_width_px, num_x),
            grabbed: false,
        }
    }

    /// New canvas width; an active drag stays active
    pub fn rescale(&mut self, canvas_width_px: f32, num_x: u32) {
        self.cells_per_pixel = scale_for(canvas_width_px, num_x);
    }

    pub fn cells_per_pixel(&self) -> f32 { self.cells_per_pixel }

    pub fn is_grabbed(&self) -> bool { self.grabbed }

    #[inline]
    pub fn to_cells(&self, px: f32, py: f32) -> (f32, f32) {
        (px * self.cells_per_pixel, py * self.cells_per_pixel)
    }

    /// Returns whether the press grabbed the obstacle
    pub fn pointer_down(&mut self, sim: &SimulationCore, px: f32, py: f32) -> bool {
        let (x, y) = self.to_cells(px, py);
        self.grabbed = sim.obstacle().contains(x, y);
        self.grabbed
    }

    /// Returns whether the obstacle moved
    pub fn pointer_move(&mut self, sim: &mut SimulationCore, px: f32, py: f32) -> bool {
        if !self.grabbed {
            return false;
        }
        let (x, y) = self.to_cells(px, py);
        let r = sim.obstacle().r;
        sim.clear_obstacle();
        sim.set_obstacle(x, y, r);
        true
    }

    pub fn pointer_up(&mut self) {
        self.grabbed = false;
    }
}

fn scale_for(canvas_width_px: f32, num_x: u32) -> f32 {
    if canvas_width_px > 0.0 && canvas_width_px.is_finite() {
        1.0 / (canvas_width_px / num_x as f32)
    } else {
        log::warn!("canvas width {} is unusable, treating pointer input as cell units", canvas_width_px);
        1.0
    }
}
