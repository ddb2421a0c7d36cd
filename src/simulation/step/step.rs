use crate::domain::fields::Field;
use crate::systems::{
    advect_density, advect_velocity, apply_gravity, diagnostics, extrapolate_boundary, project,
};

use super::{PerfTimer, SimulationCore};

/// Bytes per cell: seven f32 arrays (u, v, density, divergence, three scratch) + types
const BYTES_PER_CELL: u32 = 7 * 4 + 1;

pub(super) fn step(sim: &mut SimulationCore) {
    let perf_on = sim.perf_enabled;
    if perf_on {
        sim.perf_stats.reset();
        sim.perf_stats.grid_size = sim.grid.size() as u32;
        sim.perf_stats.memory_bytes = (sim.grid.size() as u32).saturating_mul(BYTES_PER_CELL);
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };
    let mut lap = PerfTimer::start();

    let dt = sim.config.dt;

    // 1. Free fall, except into a wall or the obstacle
    apply_gravity(&mut sim.grid, sim.config.gravity, dt);
    if perf_on {
        sim.perf_stats.forces_ms = lap.lap_ms();
    }

    // 2. Re-assert the obstacle even if it did not move; a stationary
    //    re-stamp imposes zero velocity on its cells
    let obstacle = *sim.grid.obstacle();
    sim.grid.set_obstacle(obstacle.x, obstacle.y, obstacle.r);
    if perf_on {
        sim.perf_stats.obstacle_ms = lap.lap_ms();
    }

    // 3. Incompressibility
    sim.last_projection = project(&mut sim.grid, sim.config.solver_iterations);
    if perf_on {
        sim.perf_stats.projection_ms = lap.lap_ms();
        sim.perf_stats.projection_sweeps = sim.last_projection.sweeps;
        sim.perf_stats.divergence_sum = sim.last_projection.divergence_sum;
    }

    // 4. Only `u` gets border values before advection
    extrapolate_boundary(&mut sim.grid, Field::Horizontal);
    if perf_on {
        sim.perf_stats.boundary_ms = lap.lap_ms();
    }

    // 5-6. Advection reads the old field and commits after each sweep
    advect_velocity(&mut sim.grid, dt);
    if perf_on {
        sim.perf_stats.advect_velocity_ms = lap.lap_ms();
    }

    advect_density(&mut sim.grid, dt);
    if perf_on {
        sim.perf_stats.advect_density_ms = lap.lap_ms();
    }

    if perf_on {
        // Post-step snapshot
        sim.perf_stats.fluid_cells = diagnostics::fluid_cell_count(&sim.grid) as u32;
        sim.perf_stats.solid_cells = diagnostics::solid_cell_count(&sim.grid) as u32;
        sim.perf_stats.max_speed = diagnostics::max_speed(&sim.grid);
        if let Some(start) = step_start {
            sim.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    log::trace!(
        "step {}: {} projection sweeps, divergence sum {:.3e}",
        sim.frame,
        sim.last_projection.sweeps,
        sim.last_projection.divergence_sum
    );

    sim.frame += 1;
}
