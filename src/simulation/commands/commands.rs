use crate::core::error::SimResult;
use crate::grid::FluidGrid;

use super::SimulationCore;

pub(super) fn set_obstacle(sim: &mut SimulationCore, x: f32, y: f32, r: f32) {
    sim.grid.set_obstacle(x, y, r);
}

pub(super) fn clear_obstacle(sim: &mut SimulationCore) {
    sim.grid.clear_obstacle();
}

/// Fresh grid from the stored config. View and perf settings survive.
pub(super) fn reset(sim: &mut SimulationCore) -> SimResult<()> {
    sim.grid = FluidGrid::new(&sim.config)?;
    sim.colors.clear();
    sim.colors.resize(sim.grid.size(), 0);
    sim.frame = 0;
    sim.last_projection = Default::default();
    sim.perf_stats.reset();
    log::info!("simulation reset ({}x{})", sim.config.num_x, sim.config.num_y);
    Ok(())
}
