use crate::core::error::SimResult;
use crate::domain::config::SimConfig;
use crate::grid::FluidGrid;
use crate::systems::ProjectionReport;

use super::perf_stats::PerfStats;
use super::render_extract::RenderView;
use super::SimulationCore;

pub(super) fn create_simulation_core(config: SimConfig) -> SimResult<SimulationCore> {
    let grid = FluidGrid::new(&config)?;
    let size = grid.size();

    Ok(SimulationCore {
        config,
        grid,
        frame: 0,
        last_projection: ProjectionReport::default(),

        view: RenderView::default(),
        // Filled on the first render_colors call
        colors: vec![0u32; size],

        perf_enabled: false,
        perf_stats: PerfStats::default(),
    })
}
