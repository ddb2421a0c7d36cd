use crate::domain::fields::Field;
use crate::grid::FluidGrid;

/// Copy the nearest interior samples of `field` onto the border ring.
///
/// Corners take the diagonal interior neighbor, then the top and bottom
/// rows copy straight down/up, then the left and right columns copy
/// across. Interior samples are never written.
pub fn extrapolate_boundary(grid: &mut FluidGrid, field: Field) {
    let cols = grid.num_x();
    let rows = grid.num_y();
    let f = grid.field_mut(field);

    let last_row = (rows - 1) * cols;
    let above_last = (rows - 2) * cols;

    // Corners
    f[0] = f[cols + 1];
    f[last_row] = f[above_last + 1];
    f[cols - 1] = f[cols + cols - 2];
    f[last_row + cols - 1] = f[above_last + cols - 2];

    // Top and bottom rows
    for j in 1..cols - 1 {
        f[j] = f[cols + j];
        f[last_row + j] = f[above_last + j];
    }

    // Left and right columns
    for i in 1..rows - 1 {
        let row = i * cols;
        f[row] = f[row + 1];
        f[row + cols - 1] = f[row + cols - 2];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::SimConfig;

    fn numbered_grid(field: Field) -> FluidGrid {
        let config = SimConfig {
            obstacle_radius_fraction: 0.0,
            ..SimConfig::new(5, 4, 1.0, 0.1)
        };
        let mut grid = FluidGrid::new(&config).expect("valid grid");
        for (idx, value) in grid.field_mut(field).iter_mut().enumerate() {
            *value = idx as f32;
        }
        grid
    }

    #[test]
    fn border_copies_nearest_interior_sample() {
        let mut grid = numbered_grid(Field::Horizontal);
        extrapolate_boundary(&mut grid, Field::Horizontal);

        // 5 wide, 4 tall; interior is rows 1..=2, cols 1..=3
        #[rustfmt::skip]
        let expected = [
             6.0,  6.0,  7.0,  8.0,  8.0,
             6.0,  6.0,  7.0,  8.0,  8.0,
            11.0, 11.0, 12.0, 13.0, 13.0,
            11.0, 11.0, 12.0, 13.0, 13.0,
        ];
        assert_eq!(grid.u, expected);
    }

    #[test]
    fn only_the_selected_field_changes() {
        let mut grid = numbered_grid(Field::Density);
        let u_before = grid.u.clone();
        let v_before = grid.v.clone();
        extrapolate_boundary(&mut grid, Field::Density);

        assert_eq!(grid.u, u_before);
        assert_eq!(grid.v, v_before);
        assert_eq!(grid.get_density(0, 0), 6.0);
        assert_eq!(grid.get_density(3, 4), 13.0);
    }

    #[test]
    fn interior_samples_are_untouched() {
        let mut grid = numbered_grid(Field::Vertical);
        extrapolate_boundary(&mut grid, Field::Vertical);
        for row in 1..3 {
            for col in 1..4 {
                assert_eq!(grid.get_v(row, col), grid.index(row, col) as f32);
            }
        }
    }

    #[test]
    fn extrapolation_is_idempotent() {
        let mut grid = numbered_grid(Field::Horizontal);
        extrapolate_boundary(&mut grid, Field::Horizontal);
        let once = grid.u.clone();
        extrapolate_boundary(&mut grid, Field::Horizontal);
        assert_eq!(grid.u, once);
    }
}
