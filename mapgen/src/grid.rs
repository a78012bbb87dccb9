use crate::map::{Map, MapPoint};

/// Overlays the walkable sampling lattice: every cell on a grid line
/// (`x % grid_size == 0` or `y % grid_size == 0`) that is not part of a
/// room becomes `Grid`. Rooms stay solid and are only entered through
/// their doors.
pub fn build_grid(map: &mut Map, grid_size: i32) {
    assert!(grid_size >= 1, "grid size has to be at least 1");

    for y in 0..map.height {
        for x in 0..map.width {
            if (y % grid_size == 0 || x % grid_size == 0) && map.at(x, y) != MapPoint::Room {
                map.set(x, y, MapPoint::Grid);
            }
        }
    }
}
