use super::*;
use crate::domain::cells::{CellType, CELL_SOLID};
use crate::systems::projection::DEFAULT_ITERATIONS;

const DT: f32 = 1.0 / 30.0;

fn small_sim() -> SimulationCore {
    SimulationCore::with_dimensions(20, 20, 1.0, DT).expect("valid sim")
}

fn border_is_solid(sim: &SimulationCore) -> bool {
    let grid = sim.grid();
    (0..grid.num_y()).all(|row| {
        (0..grid.num_x()).all(|col| !grid.is_border(row, col) || grid.cell_type(row, col) == CellType::Solid)
    })
}

#[test]
fn one_step_keeps_border_and_starts_from_inlet() {
    let mut sim = small_sim();
    for row in 0..20 {
        assert!(sim.grid().get_u(row, 1) != 0.0, "inlet row {row}");
    }

    sim.step();

    assert!(border_is_solid(&sim));
    assert_eq!(sim.frame(), 1);
    assert!(sim.last_projection().sweeps >= 1);
    assert!(sim.last_projection().sweeps <= DEFAULT_ITERATIONS);
}

#[test]
fn gravity_stage_matches_below_neighbor_rule() {
    let mut sim = small_sim();
    let grid = sim.grid();
    let num_x = grid.num_x();
    let before = grid.v.clone();
    let lands_on_fluid: Vec<bool> = (0..grid.size())
        .map(|idx| idx + num_x < grid.size() && grid.types[idx + num_x] != CELL_SOLID)
        .collect();
    let gravity = sim.gravity();

    crate::systems::apply_gravity(sim.grid_mut(), gravity, DT);

    let grid = sim.grid();
    for row in 1..19 {
        for col in 1..19 {
            let idx = grid.index(row, col);
            // Only the cell below is consulted, so obstacle cells can pick up gravity too
            if lands_on_fluid[idx] {
                assert!((grid.v[idx] - before[idx] - 9.8 * DT).abs() < 1e-6, "({row}, {col})");
            } else {
                assert_eq!(grid.v[idx], before[idx]);
            }
        }
    }
}

#[test]
fn border_stays_solid_over_many_steps_with_a_moving_obstacle() {
    let mut sim = small_sim();
    for i in 0..25 {
        let x = 2.0 + (i % 16) as f32;
        sim.clear_obstacle();
        sim.set_obstacle(x, 1.0 + (i % 3) as f32, 3.0);
        sim.step();
        assert!(border_is_solid(&sim), "step {i}");
    }
}

#[test]
fn centered_obstacle_of_radius_two() {
    let mut sim = small_sim();
    let types_before = sim.grid().types.clone();

    sim.set_obstacle(10.0, 10.0, 2.0);

    let grid = sim.grid();
    for row in 1..19 {
        for col in 1..19 {
            let dx = col as f32 - 10.0;
            let dy = row as f32 - 10.0;
            let idx = grid.index(row, col);
            if (dx * dx + dy * dy).sqrt() <= 2.0 {
                assert_eq!(grid.types[idx], CELL_SOLID, "({row}, {col})");
            } else {
                assert_eq!(grid.types[idx], types_before[idx], "({row}, {col})");
            }
        }
    }
}

#[test]
fn restamp_in_step_stops_a_parked_obstacle() {
    let mut sim = small_sim();
    sim.clear_obstacle();
    sim.set_obstacle(12.0, 10.0, 2.0);
    // Moved 6 cells in one frame: the disc carries that velocity until the step
    assert!(sim.grid().get_u(10, 12) > 100.0);

    sim.step();

    let grid = sim.grid();
    for row in 1..19 {
        for col in 1..19 {
            if !grid.is_fluid(row, col) {
                assert_eq!(grid.get_u(row, col), 0.0, "({row}, {col})");
                assert_eq!(grid.get_v(row, col), 0.0, "({row}, {col})");
            }
        }
    }
}

#[test]
fn step_length_comes_from_the_config() {
    let mut short = small_sim();
    let mut long = SimulationCore::with_dimensions(20, 20, 1.0, 2.0 * DT).expect("valid sim");
    assert_eq!(long.config().dt, 2.0 * DT);

    short.step();
    long.step();

    assert_ne!(short.grid().v, long.grid().v);
}

#[test]
fn identical_runs_are_bit_identical() {
    let run = || {
        let mut sim = small_sim();
        for i in 0..8 {
            if i == 3 {
                sim.clear_obstacle();
                sim.set_obstacle(9.0, 8.0, 2.0);
            }
            sim.step();
        }
        let grid = sim.grid();
        (grid.u.clone(), grid.v.clone(), grid.density.clone(), grid.types.clone())
    };
    assert_eq!(run(), run());
}

#[test]
fn reset_restores_the_initial_state() {
    let fresh = small_sim();
    let mut sim = small_sim();
    sim.set_obstacle(14.0, 5.0, 3.0);
    for _ in 0..4 {
        sim.step();
    }

    sim.reset().expect("reset");

    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.obstacle(), fresh.obstacle());
    assert_eq!(sim.grid().u, fresh.grid().u);
    assert_eq!(sim.grid().types, fresh.grid().types);
    assert_eq!(sim.grid().density, fresh.grid().density);
}

#[test]
fn perf_stats_are_zero_unless_enabled() {
    let mut sim = small_sim();
    sim.step();
    let stats = sim.get_perf_stats();
    assert_eq!(stats.projection_sweeps(), 0);
    assert_eq!(stats.grid_size(), 0);

    sim.enable_perf_metrics(true);
    sim.step();
    let stats = sim.get_perf_stats();
    assert!(stats.projection_sweeps() >= 1);
    assert_eq!(stats.grid_size(), 400);
    assert_eq!(stats.fluid_cells() + stats.solid_cells(), 400);
    assert_eq!(
        stats.solid_cells() as usize,
        crate::systems::diagnostics::solid_cell_count(sim.grid())
    );
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.divergence_sum(), sim.last_projection().divergence_sum);

    sim.enable_perf_metrics(false);
    assert_eq!(sim.get_perf_stats().grid_size(), 0);
}

#[test]
fn solver_settings_apply_to_the_next_step() {
    let mut sim = small_sim();
    sim.set_solver_iterations(0);
    assert_eq!(sim.solver_iterations(), 1);
    sim.set_solver_iterations(4);
    sim.step();
    assert!(sim.last_projection().sweeps <= 4);

    sim.set_gravity(f32::NAN);
    assert_eq!(sim.gravity(), 9.8);
    sim.set_gravity(0.0);
    assert_eq!(sim.gravity(), 0.0);
}

#[test]
fn render_colors_follow_the_view() {
    let mut sim = small_sim();
    let colors = sim.render_colors().to_vec();
    assert_eq!(colors.len(), 400);
    assert_eq!(colors[0], COLOR_OBSTACLE);
    assert_eq!(colors[sim.grid().index(2, 15)], COLOR_EMPTY);

    sim.set_view(RenderView { show_occupancy: false, show_density: false });
    assert!(sim.render_colors().iter().all(|&c| c == COLOR_EMPTY));
    assert_eq!(sim.colors_len(), sim.cells_len());
}

#[test]
fn sample_probes_the_requested_field() {
    let sim = small_sim();
    // u lattice point (row 4, col 1) sits at (1, 4.5)
    assert_eq!(sim.sample(Field::Horizontal, 1.0, 4.5), 50.0);
    assert_eq!(sim.sample(Field::Vertical, 7.5, 7.0), 0.0);
}

#[test]
fn config_json_round_trips_through_the_core() {
    let sim = SimulationCore::from_config_json(r#"{"num_x": 24, "num_y": 18, "cell_size": 1.0}"#)
        .expect("valid config");
    assert_eq!((sim.num_x(), sim.num_y()), (24, 18));
    assert_eq!(sim.config().solver_iterations, 30);
    assert!(SimulationCore::from_config_json(r#"{"num_x": 1}"#).is_err());
}
