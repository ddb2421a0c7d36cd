use wasm_bindgen::prelude::*;

use crate::core::error::SimError;
use crate::domain::cells::CELL_SOLID;
use crate::domain::config::SimConfig;
use crate::domain::fields::Field;

use super::perf_stats::PerfStats;
use super::render_extract::RenderView;
use super::{DragController, Playback, SimulationCore};

fn js_error(err: SimError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Browser-facing simulation: the core plus playback and pointer state
#[wasm_bindgen]
pub struct FluidSim {
    core: SimulationCore,
    playback: Playback,
    drag: DragController,
}

#[wasm_bindgen]
impl FluidSim {
    /// Create a simulation; every setting not named here takes its default
    #[wasm_bindgen(constructor)]
    pub fn new(
        num_x: u32,
        num_y: u32,
        cell_size: f32,
        dt: f32,
        canvas_width_px: f32,
    ) -> Result<FluidSim, JsValue> {
        let core = SimulationCore::with_dimensions(num_x, num_y, cell_size, dt).map_err(js_error)?;
        Ok(Self::wrap(core, canvas_width_px))
    }

    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: String, canvas_width_px: f32) -> Result<FluidSim, JsValue> {
        let core = SimulationCore::from_config_json(&json).map_err(js_error)?;
        Ok(Self::wrap(core, canvas_width_px))
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn num_x(&self) -> u32 { self.core.num_x() }

    #[wasm_bindgen(getter)]
    pub fn num_y(&self) -> u32 { self.core.num_y() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn cell_size(&self) -> f32 { self.core.config().cell_size }

    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f32 { self.core.config().dt }

    // === Playback ===

    #[wasm_bindgen(getter)]
    pub fn playing(&self) -> bool { self.playback.is_running() }

    pub fn play(&mut self) {
        self.playback = Playback::Running;
    }

    pub fn pause(&mut self) {
        self.playback = Playback::Paused;
    }

    /// Flip running/paused; returns true when now running
    pub fn toggle_play(&mut self) -> bool {
        self.playback = self.playback.toggled();
        self.playback.is_running()
    }

    /// Call once per requestAnimationFrame; steps only while running
    pub fn animation_frame(&mut self) -> bool {
        if self.playback.steps_on_frame() {
            self.core.step();
            true
        } else {
            false
        }
    }

    /// Manual single step; ignored while running
    pub fn step(&mut self) -> bool {
        if self.playback.steps_on_request() {
            self.core.step();
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) -> Result<(), JsValue> {
        self.drag.pointer_up();
        self.core.reset().map_err(js_error)
    }

    // === Obstacle ===

    pub fn set_obstacle(&mut self, x: f32, y: f32, r: f32) {
        self.core.set_obstacle(x, y, r);
    }

    pub fn clear_obstacle(&mut self) {
        self.core.clear_obstacle();
    }

    #[wasm_bindgen(getter)]
    pub fn obstacle_x(&self) -> f32 { self.core.obstacle().x }

    #[wasm_bindgen(getter)]
    pub fn obstacle_y(&self) -> f32 { self.core.obstacle().y }

    #[wasm_bindgen(getter)]
    pub fn obstacle_r(&self) -> f32 { self.core.obstacle().r }

    // === Pointer input (canvas pixels) ===

    pub fn pointer_down(&mut self, px: f32, py: f32) -> bool {
        self.drag.pointer_down(&self.core, px, py)
    }

    pub fn pointer_move(&mut self, px: f32, py: f32) -> bool {
        self.drag.pointer_move(&mut self.core, px, py)
    }

    pub fn pointer_up(&mut self) {
        self.drag.pointer_up();
    }

    /// Recompute the pixel-to-cell scale after a canvas resize
    pub fn set_canvas_width(&mut self, canvas_width_px: f32) {
        self.drag.rescale(canvas_width_px, self.core.num_x());
    }

    // === Settings ===

    pub fn set_gravity(&mut self, gravity: f32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_solver_iterations(&mut self, iterations: u32) {
        self.core.set_solver_iterations(iterations);
    }

    pub fn set_show_density(&mut self, show: bool) {
        let view = self.core.view();
        self.core.set_view(RenderView { show_density: show, ..view });
    }

    pub fn set_show_occupancy(&mut self, show: bool) {
        let view = self.core.view();
        self.core.set_view(RenderView { show_occupancy: show, ..view });
    }

    /// "error", "warn", "info", "debug", "trace" or "off"
    pub fn set_log_level(&self, level: &str) {
        log::set_max_level(crate::core::logging::level_from_str(level));
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === Per-cell reads (out-of-range reads return 0 / solid) ===

    pub fn get_u(&self, row: u32, col: u32) -> f32 {
        self.cell_index(row, col).map_or(0.0, |idx| self.core.grid().u[idx])
    }

    pub fn get_v(&self, row: u32, col: u32) -> f32 {
        self.cell_index(row, col).map_or(0.0, |idx| self.core.grid().v[idx])
    }

    pub fn get_density(&self, row: u32, col: u32) -> f32 {
        self.cell_index(row, col).map_or(0.0, |idx| self.core.grid().density[idx])
    }

    pub fn cell_type(&self, row: u32, col: u32) -> u8 {
        self.cell_index(row, col).map_or(CELL_SOLID, |idx| self.core.grid().types[idx])
    }

    /// Bilinear probe of field `field_id` (see `field_*()`) at a physical position
    pub fn sample(&self, field_id: u8, x: f32, y: f32) -> Result<f32, JsValue> {
        let field = Field::try_from(field_id).map_err(js_error)?;
        Ok(self.core.sample(field, x, y))
    }

    // === Diagnostics ===

    pub fn divergence_sum(&self) -> f64 {
        self.core.divergence_sum()
    }

    pub fn max_abs_divergence(&self) -> f32 {
        self.core.max_abs_divergence()
    }

    pub fn total_density(&self) -> f64 {
        self.core.total_density()
    }

    pub fn fluid_cell_count(&self) -> usize {
        self.core.fluid_cell_count()
    }

    pub fn projection_sweeps(&self) -> u32 {
        self.core.last_projection().sweeps
    }

    // === Zero-copy buffers (valid until the next step / render) ===

    /// Refill the ABGR color buffer and return its pointer
    pub fn render_colors(&mut self) -> *const u32 {
        self.core.render_colors().as_ptr()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len() * std::mem::size_of::<u32>()
    }

    pub fn u_ptr(&self) -> *const f32 {
        self.core.u_ptr()
    }

    pub fn v_ptr(&self) -> *const f32 {
        self.core.v_ptr()
    }

    pub fn types_ptr(&self) -> *const u8 {
        self.core.types_ptr()
    }

    pub fn density_ptr(&self) -> *const f32 {
        self.core.density_ptr()
    }

    pub fn divergence_ptr(&self) -> *const f32 {
        self.core.divergence_ptr()
    }

    /// Element count of every per-cell array
    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }
}

// Native-side helpers (not exported)
impl FluidSim {
    fn wrap(core: SimulationCore, canvas_width_px: f32) -> Self {
        let drag = DragController::new(canvas_width_px, core.num_x());
        Self {
            core,
            playback: Playback::default(),
            drag,
        }
    }

    /// Build from a config without going through JS error values
    pub fn with_config(config: SimConfig, canvas_width_px: f32) -> Result<Self, SimError> {
        Ok(Self::wrap(SimulationCore::new(config)?, canvas_width_px))
    }

    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }

    pub fn playback(&self) -> Playback {
        self.playback
    }

    fn cell_index(&self, row: u32, col: u32) -> Option<usize> {
        let (row, col) = (row as usize, col as usize);
        let grid = self.core.grid();
        (row < grid.num_y() && col < grid.num_x()).then(|| grid.index(row, col))
    }
}
