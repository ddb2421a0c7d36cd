//! SimulationCore - owns one fluid grid and advances it
//!
//! The core is plain Rust and natively testable. It only orchestrates: every
//! numerical stage lives in `systems/`, grid storage in `spatial/`.
//! `FluidSim` (facade.rs) wraps it for JS together with the playback flag
//! and the drag controller; the core has no notion of either.
//!
//! Step order (never reordered):
//! 1. gravity into `v`
//! 2. re-stamp the obstacle at its current placement
//! 3. pressure projection
//! 4. boundary extrapolation of `u`
//! 5. velocity advection
//! 6. density advection

use crate::core::error::SimResult;
use crate::domain::config::SimConfig;
use crate::domain::fields::Field;
use crate::grid::FluidGrid;
use crate::obstacle::Obstacle;
use crate::systems::{self, ProjectionReport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "input/drag.rs"]
mod drag;
#[path = "control/playback.rs"]
mod playback;
mod facade;

pub use drag::DragController;
pub use facade::FluidSim;
pub use perf_stats::PerfStats;
pub use playback::Playback;
pub use render_extract::{RenderView, COLOR_OBSTACLE, COLOR_EMPTY};

use perf_timer::PerfTimer;

/// The simulation context
pub struct SimulationCore {
    config: SimConfig,
    grid: FluidGrid,

    // State
    frame: u64,
    last_projection: ProjectionReport,

    // Render
    view: RenderView,
    colors: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Build a simulation from a validated config
    pub fn new(config: SimConfig) -> SimResult<Self> {
        init::create_simulation_core(config)
    }

    pub fn with_dimensions(num_x: u32, num_y: u32, cell_size: f32, dt: f32) -> SimResult<Self> {
        Self::new(SimConfig::new(num_x, num_y, cell_size, dt))
    }

    pub fn from_config_json(json: &str) -> SimResult<Self> {
        Self::new(SimConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn grid(&self) -> &FluidGrid { &self.grid }

    /// Direct grid access for tools and tests; the step must not be running
    pub fn grid_mut(&mut self) -> &mut FluidGrid { &mut self.grid }

    pub fn num_x(&self) -> u32 { self.grid.num_x() as u32 }

    pub fn num_y(&self) -> u32 { self.grid.num_y() as u32 }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn obstacle(&self) -> Obstacle { *self.grid.obstacle() }

    /// Sweeps and residual of the most recent projection
    pub fn last_projection(&self) -> ProjectionReport { self.last_projection }

    /// Advance one timestep of `config().dt`; the step length is fixed at construction
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Obstacle commands ===

    pub fn set_obstacle(&mut self, x: f32, y: f32, r: f32) {
        commands::set_obstacle(self, x, y, r);
    }

    pub fn clear_obstacle(&mut self) {
        commands::clear_obstacle(self);
    }

    /// Rebuild the grid from the stored config and restart the frame count
    pub fn reset(&mut self) -> SimResult<()> {
        commands::reset(self)
    }

    // === Settings ===

    pub fn set_gravity(&mut self, gravity: f32) {
        settings::set_gravity(self, gravity);
    }

    pub fn gravity(&self) -> f32 { self.config.gravity }

    pub fn set_solver_iterations(&mut self, iterations: u32) {
        settings::set_solver_iterations(self, iterations);
    }

    pub fn solver_iterations(&self) -> u32 { self.config.solver_iterations }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn view(&self) -> RenderView { self.view }

    pub fn set_view(&mut self, view: RenderView) {
        self.view = view;
    }

    // === Probing ===

    /// Bilinear sample of `field` at physical position `(x, y)`
    pub fn sample(&self, field: Field, x: f32, y: f32) -> f32 {
        systems::sample_field(&self.grid, x, y, field)
    }

    pub fn divergence_sum(&self) -> f64 {
        systems::diagnostics::divergence_sum(&self.grid)
    }

    pub fn max_abs_divergence(&self) -> f32 {
        systems::diagnostics::max_abs_divergence(&self.grid)
    }

    pub fn total_density(&self) -> f64 {
        systems::diagnostics::total_density(&self.grid)
    }

    pub fn fluid_cell_count(&self) -> usize {
        systems::diagnostics::fluid_cell_count(&self.grid)
    }

    // === Render ===

    /// Refill the color buffer from the current grid and view
    pub fn render_colors(&mut self) -> &[u32] {
        render_extract::fill_colors(&self.grid, self.view, &mut self.colors);
        &self.colors
    }

    /// Get pointer to the color buffer (valid until the next render_colors)
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }

    /// Get pointer to the `u` array (for JS reads between steps)
    pub fn u_ptr(&self) -> *const f32 { self.grid.u_ptr() }

    pub fn v_ptr(&self) -> *const f32 { self.grid.v_ptr() }

    pub fn types_ptr(&self) -> *const u8 { self.grid.types_ptr() }

    pub fn density_ptr(&self) -> *const f32 { self.grid.density_ptr() }

    pub fn divergence_ptr(&self) -> *const f32 { self.grid.divergence_ptr() }

    /// Element count shared by every per-cell array
    pub fn cells_len(&self) -> usize { self.grid.size() }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
