use rltk::Point;
use util::vec_ops;

/// Cell tags for the pathfinding-oriented map. `Grid`, `Door` and
/// `Road` are walkable; `Room` interiors are solid and only entered
/// through their doors.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum MapPoint {
    Empty,
    Room,
    Grid,
    Door,
    Road,
}

/// Dense row-major map, one cell per integer coordinate.
#[derive(Clone, Debug)]
pub struct Map {
    pub points: Vec<MapPoint>,
    pub width: i32,
    pub height: i32,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Map {
        assert!(width >= 1 && height >= 1, "map dimensions have to be at least 1");

        Map {
            points: vec![MapPoint::Empty; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn xy_flat(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    pub fn at(&self, x: i32, y: i32) -> MapPoint {
        self.points[self.xy_flat(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, point: MapPoint) {
        let idx = self.xy_flat(x, y);
        self.points[idx] = point;
    }

    /// A cell the router may step on. Room interiors are excluded on
    /// purpose, routes thread the corridor lattice and enter rooms
    /// only through door cells.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }

        matches!(
            self.at(x, y),
            MapPoint::Grid | MapPoint::Door | MapPoint::Road
        )
    }

    /// Every point reachable from `start` by 4-connected steps over
    /// non-`Empty` cells, `start` included. Used to verify that doors
    /// and routes stitch the whole dungeon together.
    pub fn find_reachable_points(&self, start: Point) -> Vec<Point> {
        if !self.in_bounds(start.x, start.y) || self.at(start.x, start.y) == MapPoint::Empty {
            return Vec::new();
        }

        let mut visited = vec![false; self.points.len()];
        let mut reachable = Vec::new();
        let mut stack = vec![start];
        visited[self.xy_flat(start.x, start.y)] = true;

        while let Some(point) = stack.pop() {
            reachable.push(point);

            for (x, y) in vec_ops::orthogonal_neighbors(
                (point.x, point.y),
                (0, 0),
                (self.width - 1, self.height - 1),
            ) {
                let idx = self.xy_flat(x, y);
                if !visited[idx] && self.points[idx] != MapPoint::Empty {
                    visited[idx] = true;
                    stack.push(Point::new(x, y));
                }
            }
        }

        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_map_is_all_empty() {
        let map = Map::new(10, 10);
        assert_eq!(map.points.len(), 100);
        assert!(map.points.iter().all(|p| *p == MapPoint::Empty));
    }

    #[test]
    #[should_panic]
    fn zero_sized_map_is_rejected() {
        Map::new(0, 10);
    }

    #[test]
    fn walkability_follows_cell_tags() {
        let mut map = Map::new(3, 3);
        map.set(0, 0, MapPoint::Grid);
        map.set(1, 0, MapPoint::Door);
        map.set(2, 0, MapPoint::Road);
        map.set(0, 1, MapPoint::Room);

        assert!(map.is_walkable(0, 0));
        assert!(map.is_walkable(1, 0));
        assert!(map.is_walkable(2, 0));
        assert!(!map.is_walkable(0, 1));
        assert!(!map.is_walkable(1, 1));
        assert!(!map.is_walkable(-1, 0));
        assert!(!map.is_walkable(0, 3));
    }

    #[test]
    fn reachability_stops_at_empty_cells() {
        let mut map = Map::new(5, 1);
        map.set(0, 0, MapPoint::Room);
        map.set(1, 0, MapPoint::Grid);
        // (2, 0) stays empty
        map.set(3, 0, MapPoint::Grid);

        let reachable = map.find_reachable_points(Point::new(0, 0));
        assert_eq!(reachable.len(), 2);
        assert!(reachable.contains(&Point::new(0, 0)));
        assert!(reachable.contains(&Point::new(1, 0)));
        assert!(!reachable.contains(&Point::new(3, 0)));
    }

    #[test]
    fn reachability_from_an_empty_cell_is_empty() {
        let map = Map::new(3, 3);
        assert!(map.find_reachable_points(Point::new(1, 1)).is_empty());
    }
}
