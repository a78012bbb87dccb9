pub mod frontier;

use rltk::Point;
use util::vec_ops;

use crate::doors::RoomDoors;
use crate::map::{Map, MapPoint};

use frontier::PriorityFrontier;

fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Walks the parent chain back from the finish and reverses it. The
/// returned path runs from `start` up to the cell *before* `finish`;
/// the finish cell itself is the callee's door and keeps its tag.
fn reconstruct(finish_idx: usize, parents: &[usize], width: i32) -> Vec<Point> {
    let mut path = Vec::new();
    let mut current = finish_idx;

    loop {
        let parent = parents[current];
        path.push(Point::new(
            parent as i32 % width,
            parent as i32 / width,
        ));
        current = parent;

        if parents[current] == current {
            break;
        }
    }

    path.reverse();
    path
}

/// Grid-restricted A* between two points over 4-connected neighbors
/// whose cells are `Grid`, `Door` or `Road`. Uniform step cost with a
/// Manhattan heuristic, so returned routes are cost-optimal. On
/// success every cell of the returned route is retagged `Road`; an
/// unreachable finish yields an empty route, which is a normal outcome
/// and not an error.
pub fn a_star(start: Point, finish: Point, map: &mut Map) -> Vec<Point> {
    if !map.in_bounds(start.x, start.y) || !map.in_bounds(finish.x, finish.y) {
        return Vec::new();
    }

    let mut visited = vec![false; map.points.len()];
    let mut distances = vec![i32::MAX; map.points.len()];
    let mut parents = vec![usize::MAX; map.points.len()];
    let mut frontier = PriorityFrontier::new();

    let start_idx = map.xy_flat(start.x, start.y);
    frontier.push(start.x, start.y, 0);
    distances[start_idx] = 0;
    parents[start_idx] = start_idx;

    while let Some(current) = frontier.pop() {
        let idx = map.xy_flat(current.x, current.y);

        if current.x == finish.x && current.y == finish.y {
            let route = reconstruct(idx, &parents, map.width);
            for point in &route {
                map.set(point.x, point.y, MapPoint::Road);
            }
            return route;
        }

        if visited[idx] {
            continue;
        }
        visited[idx] = true;

        for (x, y) in vec_ops::orthogonal_neighbors(
            (current.x, current.y),
            (0, 0),
            (map.width - 1, map.height - 1),
        ) {
            if !map.is_walkable(x, y) {
                continue;
            }

            let neighbor_idx = map.xy_flat(x, y);
            let new_distance = distances[idx] + 1;

            if new_distance < distances[neighbor_idx] {
                distances[neighbor_idx] = new_distance;
                parents[neighbor_idx] = idx;
                let heuristic = manhattan(Point::new(x, y), finish);
                frontier.push(x, y, new_distance + heuristic);
            }
        }
    }

    Vec::new()
}

/// Connects consecutive door pairs, one room's out door to the next
/// room's in door, into a single linear chain of routes. Empty routes
/// mark unreachable pairs and are kept in place.
pub fn get_routes(map: &mut Map, doors: &[RoomDoors]) -> Vec<Vec<Point>> {
    let mut routes = Vec::new();

    for i in 0..doors.len().saturating_sub(1) {
        routes.push(a_star(
            doors[i].out_door.position,
            doors[i + 1].in_door.position,
            map,
        ));
    }

    routes
}
