use rltk::{Point, RandomNumberGenerator};
use util::vec_ops;

use crate::map::{Map, MapPoint};

/// Cell states for the cellular-automaton map flavor. `LockedRoom` is
/// immune to transitions and protects pre-placed structure.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum CellularMapPoint {
    Room,
    Wall,
    LockedRoom,
}

/// Dense row-major cellular grid.
#[derive(Clone, Debug)]
pub struct CellularMap {
    pub cells: Vec<CellularMapPoint>,
    pub width: i32,
    pub height: i32,
}

impl CellularMap {
    pub fn new(width: i32, height: i32) -> CellularMap {
        assert!(width >= 1 && height >= 1, "map dimensions have to be at least 1");

        CellularMap {
            cells: vec![CellularMapPoint::Wall; (width * height) as usize],
            width,
            height,
        }
    }

    pub fn xy_flat(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn at(&self, x: i32, y: i32) -> CellularMapPoint {
        self.cells[self.xy_flat(x, y)]
    }

    pub fn set(&mut self, x: i32, y: i32, cell: CellularMapPoint) {
        let idx = self.xy_flat(x, y);
        self.cells[idx] = cell;
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }
}

/// Initial noise grid: each cell independently becomes `Room` with
/// probability `room_ratio`, otherwise `Wall`.
pub fn generate_cellular_dungeon(
    height: i32,
    width: i32,
    room_ratio: f32,
    rng: &mut RandomNumberGenerator,
) -> CellularMap {
    let mut map = CellularMap::new(width, height);

    for cell in map.cells.iter_mut() {
        *cell = if rng.rand::<f32>() < room_ratio {
            CellularMapPoint::Room
        } else {
            CellularMapPoint::Wall
        };
    }

    map
}

/// One synchronous generation step. Locked cells are copied unchanged
/// and count as rooms for their neighbors. A cell whose Moore
/// neighborhood meets the room threshold becomes `Room`, else the wall
/// threshold makes it `Wall`, else it keeps its previous state - the
/// thresholds need not be complementary.
pub fn iterate_cellular_dungeon(
    map: &CellularMap,
    turn_to_room_threshold: usize,
    turn_to_wall_threshold: usize,
) -> CellularMap {
    let mut next = map.clone();

    for y in 0..map.height {
        for x in 0..map.width {
            if map.at(x, y) == CellularMapPoint::LockedRoom {
                continue;
            }

            let mut rooms = 0;
            let mut walls = 0;
            for (nx, ny) in
                vec_ops::neighbors((x, y), (0, 0), (map.width - 1, map.height - 1))
            {
                match map.at(nx, ny) {
                    CellularMapPoint::Room | CellularMapPoint::LockedRoom => rooms += 1,
                    CellularMapPoint::Wall => walls += 1,
                }
            }

            if rooms >= turn_to_room_threshold {
                next.set(x, y, CellularMapPoint::Room);
            } else if walls >= turn_to_wall_threshold {
                next.set(x, y, CellularMapPoint::Wall);
            }
        }
    }

    next
}

/// Keeps only the component reachable from `start` over non-`Wall`
/// cells, as `Room`; everything else, isolated pockets included,
/// becomes `Wall`. Depth-first with an explicit stack.
pub fn cleanup(map: &CellularMap, start: Point) -> CellularMap {
    let mut cleaned = CellularMap::new(map.width, map.height);

    if !map.in_bounds(start.x, start.y) || map.at(start.x, start.y) == CellularMapPoint::Wall {
        return cleaned;
    }

    let mut visited = vec![false; map.cells.len()];
    let mut stack = vec![(start.x, start.y)];
    visited[map.xy_flat(start.x, start.y)] = true;

    while let Some((x, y)) = stack.pop() {
        cleaned.set(x, y, CellularMapPoint::Room);

        for (nx, ny) in
            vec_ops::orthogonal_neighbors((x, y), (0, 0), (map.width - 1, map.height - 1))
        {
            let idx = map.xy_flat(nx, ny);
            if !visited[idx] && map.cells[idx] != CellularMapPoint::Wall {
                visited[idx] = true;
                stack.push((nx, ny));
            }
        }
    }

    cleaned
}

/// Seeds a cellular map from a finished BSP+routes dungeon map: rooms,
/// doors and roads come across locked so smoothing cannot erode them,
/// every other cell is noise at `room_ratio`.
pub fn seed_from_dungeon(
    map: &Map,
    room_ratio: f32,
    rng: &mut RandomNumberGenerator,
) -> CellularMap {
    let mut cellular = CellularMap::new(map.width, map.height);

    for y in 0..map.height {
        for x in 0..map.width {
            let cell = match map.at(x, y) {
                MapPoint::Room | MapPoint::Door | MapPoint::Road => CellularMapPoint::LockedRoom,
                MapPoint::Empty | MapPoint::Grid => {
                    if rng.rand::<f32>() < room_ratio {
                        CellularMapPoint::Room
                    } else {
                        CellularMapPoint::Wall
                    }
                }
            };
            cellular.set(x, y, cell);
        }
    }

    cellular
}

/// Locks every route cell and its Moore neighborhood, widening the
/// carved corridors into bands the automaton must preserve.
pub fn lock_routes(map: &mut CellularMap, routes: &[Vec<Point>]) {
    for route in routes {
        for point in route {
            map.set(point.x, point.y, CellularMapPoint::LockedRoom);
            for (x, y) in vec_ops::neighbors(
                (point.x, point.y),
                (0, 0),
                (map.width - 1, map.height - 1),
            ) {
                map.set(x, y, CellularMapPoint::LockedRoom);
            }
        }
    }
}
