//! Simulation configuration
//!
//! Defaults reproduce the web demo: a 160x160 grid of 0.4-unit cells at
//! 30 steps per second, an inlet jet on the left wall and a disc obstacle a
//! third of the way across.

use serde::{Deserialize, Serialize};

use crate::core::error::{SimError, SimResult};

/// Smallest grid side: a border ring plus one interior cell
pub const MIN_GRID_CELLS: u32 = 3;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub num_x: u32,
    pub num_y: u32,
    /// Physical cell size `h`
    pub cell_size: f32,
    /// Fixed timestep in seconds
    pub dt: f32,
    /// Added to `v` per second; positive is downward
    pub gravity: f32,
    /// `u` seeded on the column just inside the left wall
    pub inlet_speed: f32,
    /// Density band half-width as a fraction of `num_y`
    pub pipe_half_width_fraction: f32,
    /// Projection sweeps per step
    pub solver_iterations: u32,
    pub obstacle_x_fraction: f32,
    pub obstacle_y_fraction: f32,
    /// Radius as a fraction of `num_x`
    pub obstacle_radius_fraction: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_x: 160,
            num_y: 160,
            cell_size: 0.4,
            dt: 1.0 / 30.0,
            gravity: 9.8,
            inlet_speed: 50.0,
            pipe_half_width_fraction: 0.1,
            solver_iterations: 30,
            obstacle_x_fraction: 0.3,
            obstacle_y_fraction: 0.5,
            obstacle_radius_fraction: 0.04,
        }
    }
}

impl SimConfig {
    /// Config with the given grid and timestep, everything else defaulted
    pub fn new(num_x: u32, num_y: u32, cell_size: f32, dt: f32) -> Self {
        Self {
            num_x,
            num_y,
            cell_size,
            dt,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing keys take their defaults.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> SimResult<()> {
        if self.num_x < MIN_GRID_CELLS || self.num_y < MIN_GRID_CELLS {
            return Err(SimError::InvalidDimensions {
                num_x: self.num_x,
                num_y: self.num_y,
            });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(SimError::InvalidCellSize(self.cell_size));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::InvalidTimestep(self.dt));
        }
        if self.solver_iterations == 0 {
            return Err(SimError::InvalidIterations);
        }
        Ok(())
    }
}
