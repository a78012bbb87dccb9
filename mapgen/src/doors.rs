use rltk::{Point, RandomNumberGenerator, Rect};

use crate::map::{Map, MapPoint};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Left,
    Right,
    Top,
    Bottom,
}

/// A single grid-aligned cell on a room's boundary.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Door {
    pub position: Point,
    pub direction: Direction,
}

/// The in/out door pair of one room, in the same order as the rooms
/// list. Routes run from one room's out door to the next room's in
/// door.
#[derive(Clone, Copy, Debug)]
pub struct RoomDoors {
    pub in_door: Door,
    pub out_door: Door,
}

/// First and last grid lines strictly inside the room's span on each
/// axis. The range may be inverted for rooms spanning a single grid
/// cell on an axis.
#[derive(Clone, Copy, Debug)]
pub struct DoorLimits {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

pub fn calculate_door_limits(room: &Rect, grid_size: i32) -> DoorLimits {
    DoorLimits {
        min_x: (room.x1 / grid_size + 1) * grid_size,
        max_x: (room.x1 + room.width() - 1) / grid_size * grid_size,
        min_y: (room.y1 / grid_size + 1) * grid_size,
        max_y: (room.y1 + room.height() - 1) / grid_size * grid_size,
    }
}

/// A uniform random value in `[min, max]` snapped down to a multiple
/// of the grid size. Both limits are expected to be grid-aligned.
pub fn random_bound_to_grid(
    min: i32,
    max: i32,
    grid_size: i32,
    rng: &mut RandomNumberGenerator,
) -> i32 {
    rng.range(min, max + 1) / grid_size * grid_size
}

/// Directions with at least `grid_size` clearance between the room's
/// wall and the map boundary. A door on a wall without clearance would
/// open onto a dead end at the map edge.
pub fn valid_door_directions(room: &Rect, map: &Map, grid_size: i32) -> Vec<Direction> {
    let mut directions = Vec::new();

    if room.x1 > grid_size {
        directions.push(Direction::Left);
    }
    if room.x1 + room.width() + grid_size < map.width {
        directions.push(Direction::Right);
    }
    if room.y1 > grid_size {
        directions.push(Direction::Top);
    }
    if room.y1 + room.height() + grid_size < map.height {
        directions.push(Direction::Bottom);
    }

    directions
}

/// Door coordinate along the wall's free axis. An inverted limit range
/// means the room has no grid line strictly inside its span; the last
/// snapped line is then the room's own aligned edge and becomes the
/// single candidate. `None` only when the span holds no aligned
/// coordinate at all (possible with randomized room sizing).
fn free_axis_coordinate(
    min: i32,
    max: i32,
    low_edge: i32,
    grid_size: i32,
    rng: &mut RandomNumberGenerator,
) -> Option<i32> {
    if min > max {
        return (max >= low_edge).then_some(max);
    }

    Some(random_bound_to_grid(min, max, grid_size, rng))
}

fn door_for_direction(
    room: &Rect,
    direction: Direction,
    limits: &DoorLimits,
    grid_size: i32,
    rng: &mut RandomNumberGenerator,
) -> Option<Door> {
    let position = match direction {
        Direction::Left | Direction::Right => {
            let y = free_axis_coordinate(limits.min_y, limits.max_y, room.y1, grid_size, rng)?;
            let x = if direction == Direction::Left {
                room.x1
            } else {
                room.x1 + room.width() - 1
            };
            Point::new(x, y)
        }
        Direction::Top | Direction::Bottom => {
            let x = free_axis_coordinate(limits.min_x, limits.max_x, room.x1, grid_size, rng)?;
            let y = if direction == Direction::Top {
                room.y1
            } else {
                room.y1 + room.height() - 1
            };
            Point::new(x, y)
        }
    };

    Some(Door { position, direction })
}

/// Picks two distinct valid wall directions per room and places a
/// grid-aligned door on each, marking the cells `Door`. Rooms with
/// fewer than two usable directions are skipped, so the returned list
/// parallels `rooms` order but may be shorter.
pub fn place_doors(
    map: &mut Map,
    rooms: &[Rect],
    grid_size: i32,
    rng: &mut RandomNumberGenerator,
) -> Vec<RoomDoors> {
    let mut doors = Vec::new();

    for room in rooms {
        let mut directions = valid_door_directions(room, map, grid_size);
        if directions.len() < 2 {
            continue;
        }

        let limits = calculate_door_limits(room, grid_size);
        let in_direction = directions.remove(rng.range(0, directions.len() as i32) as usize);
        let out_direction = directions.remove(rng.range(0, directions.len() as i32) as usize);

        let in_door = door_for_direction(room, in_direction, &limits, grid_size, rng);
        let out_door = door_for_direction(room, out_direction, &limits, grid_size, rng);

        // No aligned coordinate on a needed wall: the room stays
        // doorless rather than getting a door off its boundary.
        let (Some(in_door), Some(out_door)) = (in_door, out_door) else {
            continue;
        };

        map.set(in_door.position.x, in_door.position.y, MapPoint::Door);
        map.set(out_door.position.x, out_door.position.y, MapPoint::Door);
        doors.push(RoomDoors { in_door, out_door });
    }

    doors
}
