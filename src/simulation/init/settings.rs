use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(sim: &mut SimulationCore, enabled: bool) {
    sim.perf_enabled = enabled;
    if !enabled {
        sim.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(sim: &SimulationCore) -> PerfStats {
    sim.perf_stats.clone()
}

pub(super) fn set_gravity(sim: &mut SimulationCore, gravity: f32) {
    if gravity.is_finite() {
        sim.config.gravity = gravity;
    } else {
        log::warn!("ignoring non-finite gravity {}", gravity);
    }
}

/// Zero sweeps would skip projection entirely; clamp to one
pub(super) fn set_solver_iterations(sim: &mut SimulationCore, iterations: u32) {
    sim.config.solver_iterations = iterations.max(1);
}
