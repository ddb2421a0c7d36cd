use super::*;
use crate::core::error::SimError;
use crate::domain::cells::CellType;
use crate::domain::fields::Field;

const DT: f32 = 1.0 / 30.0;

/// 20x20 grid with no initial obstacle and no inlet noise beyond the defaults
fn open_grid() -> FluidGrid {
    let config = SimConfig {
        obstacle_radius_fraction: 0.0,
        ..SimConfig::new(20, 20, 1.0, DT)
    };
    FluidGrid::new(&config).expect("valid config")
}

fn solid_interior_cells(grid: &FluidGrid) -> Vec<(usize, usize)> {
    let mut cells = Vec::new();
    for row in 1..grid.num_y() - 1 {
        for col in 1..grid.num_x() - 1 {
            if grid.cell_type(row, col) == CellType::Solid {
                cells.push((row, col));
            }
        }
    }
    cells
}

#[test]
fn new_grid_has_solid_border_and_fluid_interior() {
    let grid = open_grid();
    for row in 0..20 {
        for col in 0..20 {
            let expected = if grid.is_border(row, col) { CellType::Solid } else { CellType::Fluid };
            assert_eq!(grid.cell_type(row, col), expected, "cell ({row}, {col})");
        }
    }
}

#[test]
fn inlet_column_is_seeded_on_every_row() {
    let grid = open_grid();
    for row in 0..20 {
        for col in 0..20 {
            let expected = if col == 1 { 50.0 } else { 0.0 };
            assert_eq!(grid.get_u(row, col), expected);
            assert_eq!(grid.get_v(row, col), 0.0);
        }
    }
}

#[test]
fn dye_band_sits_on_left_wall_around_midline() {
    let grid = open_grid();
    // mid = 10, half width = 2 -> rows strictly inside (8, 12)
    for row in 0..20 {
        let expected = if (9..=11).contains(&row) { 1.0 } else { 0.0 };
        assert_eq!(grid.get_density(row, 0), expected, "row {row}");
        for col in 1..20 {
            assert_eq!(grid.get_density(row, col), 0.0);
        }
    }
}

#[test]
fn default_obstacle_is_stamped_without_velocity() {
    let grid = FluidGrid::with_dimensions(20, 20, 1.0, DT).expect("valid grid");
    assert_eq!(*grid.obstacle(), Obstacle::new(6.0, 10.0, 1.0));
    assert_eq!(
        solid_interior_cells(&grid),
        vec![(9, 6), (10, 5), (10, 6), (10, 7), (11, 6)]
    );
    for (row, col) in solid_interior_cells(&grid) {
        assert_eq!(grid.get_u(row, col), 0.0);
        assert_eq!(grid.get_v(row, col), 0.0);
    }
}

#[test]
fn set_obstacle_carves_closed_disc() {
    let mut grid = open_grid();
    grid.set_obstacle(10.0, 10.0, 2.0);

    for row in 1..19 {
        for col in 1..19 {
            let dx = col as f32 - 10.0;
            let dy = row as f32 - 10.0;
            let inside = dx * dx + dy * dy <= 4.0;
            assert_eq!(grid.is_fluid(row, col), !inside, "cell ({row}, {col})");
        }
    }
    assert_eq!(solid_interior_cells(&grid).len(), 13);
}

#[test]
fn set_obstacle_imparts_displacement_over_dt() {
    let mut grid = open_grid();
    // Starts snapped at (6, 10); fractional input floors to (10, 10)
    grid.set_obstacle(10.7, 10.2, 1.5);
    assert_eq!(*grid.obstacle(), Obstacle::new(10.0, 10.0, 2.0));

    let expected_u = 4.0 / DT;
    for (row, col) in solid_interior_cells(&grid) {
        assert!((grid.get_u(row, col) - expected_u).abs() < 1e-3);
        assert_eq!(grid.get_v(row, col), 0.0);
        assert_eq!(grid.get_density(row, col), 0.0);
    }

    // Re-stamping in place imposes zero velocity
    grid.set_obstacle(10.0, 10.0, 2.0);
    for (row, col) in solid_interior_cells(&grid) {
        assert_eq!(grid.get_u(row, col), 0.0);
    }
}

#[test]
fn clear_obstacle_restores_fluid_occupancy() {
    let mut grid = open_grid();
    grid.set_density(10, 10, 0.75);
    grid.set_obstacle(10.0, 10.0, 3.0);
    assert!(!solid_interior_cells(&grid).is_empty());

    grid.clear_obstacle();
    assert!(solid_interior_cells(&grid).is_empty());
    // Dye displaced by the obstacle is gone for good
    assert_eq!(grid.get_density(10, 10), 0.0);
}

#[test]
fn obstacle_touching_wall_never_converts_border() {
    let mut grid = open_grid();
    grid.set_obstacle(1.0, 1.0, 3.0);

    for i in 0..20 {
        assert_eq!(grid.cell_type(0, i), CellType::Solid);
        assert_eq!(grid.cell_type(i, 0), CellType::Solid);
    }
    assert!(!grid.is_fluid(1, 1));
    assert!(!grid.is_fluid(4, 1));
    assert!(grid.is_fluid(4, 2));

    grid.clear_obstacle();
    assert_eq!(grid.cell_type(0, 0), CellType::Solid);
    assert_eq!(grid.cell_type(1, 0), CellType::Solid);
    assert!(grid.is_fluid(1, 1));
}

#[test]
fn off_grid_obstacle_is_accepted_and_carves_nothing() {
    let mut grid = open_grid();
    grid.set_obstacle(-50.0, -50.0, 3.0);
    assert!(solid_interior_cells(&grid).is_empty());
    assert_eq!(*grid.obstacle(), Obstacle::new(-50.0, -50.0, 3.0));

    grid.set_obstacle(500.0, 12.0, 4.0);
    assert!(solid_interior_cells(&grid).is_empty());
    grid.clear_obstacle();
}

#[test]
fn non_finite_obstacle_placement_is_ignored() {
    let mut grid = open_grid();
    grid.set_obstacle(10.0, 10.0, 2.0);
    let before = *grid.obstacle();

    grid.set_obstacle(f32::NAN, 3.0, 2.0);
    grid.set_obstacle(3.0, f32::INFINITY, 2.0);
    assert_eq!(*grid.obstacle(), before);
}

#[test]
fn index_and_coords_agree() {
    let grid = open_grid();
    for idx in [0, 1, 19, 20, 21, 399] {
        let (row, col) = grid.coords(idx);
        assert_eq!(grid.index(row, col), idx);
    }
    assert_eq!(grid.index(3, 7), 67);
}

#[test]
fn field_dispatch_targets_matching_array() {
    let mut grid = open_grid();
    let idx = grid.index(5, 5);
    grid.field_mut(Field::Density)[idx] = 2.5;
    grid.field_mut(Field::Vertical)[idx] = -1.0;

    assert_eq!(grid.density[idx], 2.5);
    assert_eq!(grid.v[idx], -1.0);
    assert_eq!(grid.field(Field::Horizontal)[grid.index(5, 1)], 50.0);
}

#[test]
fn center_velocity_averages_faces() {
    let mut grid = open_grid();
    grid.set_u(4, 4, 1.0);
    grid.set_u(4, 5, 3.0);
    grid.set_v(4, 4, -2.0);
    grid.set_v(3, 4, 4.0);
    assert_eq!(grid.center_velocity(4, 4), (2.0, 1.0));
}

#[test]
fn invalid_dimensions_fail_fast() {
    assert!(matches!(
        FluidGrid::with_dimensions(0, 20, 1.0, DT),
        Err(SimError::InvalidDimensions { .. })
    ));
    assert!(matches!(
        FluidGrid::with_dimensions(20, 20, 0.0, DT),
        Err(SimError::InvalidCellSize(_))
    ));
    assert!(matches!(
        FluidGrid::with_dimensions(20, 20, 1.0, 0.0),
        Err(SimError::InvalidTimestep(_))
    ));
}
