use rltk::{RandomNumberGenerator, Rect};

use crate::bsp::tree::BspTree;
use crate::map::{Map, MapPoint};

/// How a room fills its leaf once the leaf qualifies for one.
#[derive(Clone, Copy, Debug)]
pub enum RoomSizing {
    /// The whole leaf inset by half the grid size on every side.
    Inset,
    /// Randomly sized and positioned, half to all of the padded
    /// interior, keeping the same minimum inset.
    Randomized,
}

fn is_too_disproportionate(width: i32, height: i32) -> bool {
    height > 3 * width || width > 3 * height
}

/// Carves a room into every qualifying leaf, marks the covered cells
/// `Room`, attaches each room to its leaf, and returns the rooms in
/// leaf traversal order (left subtree before right). Leaves that are
/// too small or too disproportionate are skipped silently.
pub fn place_rooms(
    tree: &mut BspTree,
    map: &mut Map,
    grid_size: i32,
    sizing: RoomSizing,
    rng: &mut RandomNumberGenerator,
) -> Vec<Rect> {
    let mut rooms = Vec::new();

    for id in tree.leaves() {
        let area = tree.node(id).area;
        let (width, height) = (area.width(), area.height());

        if is_too_disproportionate(width, height) {
            continue;
        }

        // Below 2x the grid size a room cannot keep its margins.
        if width < grid_size * 2 || height < grid_size * 2 {
            continue;
        }

        let padded_width = width - grid_size;
        let padded_height = height - grid_size;
        let room = match sizing {
            RoomSizing::Inset => Rect::with_size(
                area.x1 + grid_size / 2,
                area.y1 + grid_size / 2,
                padded_width,
                padded_height,
            ),
            RoomSizing::Randomized => {
                // A padded dimension of 1 halves down to 0, so clamp.
                let room_width = (padded_width / 2 + rng.range(0, padded_width / 2 + 1)).max(1);
                let room_height =
                    (padded_height / 2 + rng.range(0, padded_height / 2 + 1)).max(1);
                let room_x =
                    area.x1 + grid_size / 2 + rng.range(0, padded_width - room_width + 1);
                let room_y =
                    area.y1 + grid_size / 2 + rng.range(0, padded_height - room_height + 1);
                Rect::with_size(room_x, room_y, room_width, room_height)
            }
        };

        for y in room.y1..room.y2 {
            for x in room.x1..room.x2 {
                map.set(x, y, MapPoint::Room);
            }
        }

        tree.set_room(id, room);
        rooms.push(room);
    }

    rooms
}
