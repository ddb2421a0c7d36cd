use wasm_bindgen::prelude::*;

/// Per-step timings and solver counters, filled only while perf metrics are on
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) forces_ms: f64,
    pub(super) obstacle_ms: f64,
    pub(super) projection_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) advect_velocity_ms: f64,
    pub(super) advect_density_ms: f64,
    pub(super) projection_sweeps: u32,
    pub(super) divergence_sum: f64,
    pub(super) fluid_cells: u32,
    pub(super) solid_cells: u32,
    pub(super) max_speed: f32,
    pub(super) grid_size: u32,
    pub(super) memory_bytes: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn forces_ms(&self) -> f64 { self.forces_ms }
    #[wasm_bindgen(getter)]
    pub fn obstacle_ms(&self) -> f64 { self.obstacle_ms }
    #[wasm_bindgen(getter)]
    pub fn projection_ms(&self) -> f64 { self.projection_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_velocity_ms(&self) -> f64 { self.advect_velocity_ms }
    #[wasm_bindgen(getter)]
    pub fn advect_density_ms(&self) -> f64 { self.advect_density_ms }
    /// Sweeps the projector ran before converging or running out of budget
    #[wasm_bindgen(getter)]
    pub fn projection_sweeps(&self) -> u32 { self.projection_sweeps }
    #[wasm_bindgen(getter)]
    pub fn divergence_sum(&self) -> f64 { self.divergence_sum }
    #[wasm_bindgen(getter)]
    pub fn fluid_cells(&self) -> u32 { self.fluid_cells }
    #[wasm_bindgen(getter)]
    pub fn solid_cells(&self) -> u32 { self.solid_cells }
    #[wasm_bindgen(getter)]
    pub fn max_speed(&self) -> f32 { self.max_speed }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn memory_bytes(&self) -> u32 { self.memory_bytes }
}
