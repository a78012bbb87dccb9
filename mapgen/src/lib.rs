//! Procedural 2D dungeon generation: binary space partitioning, room
//! and door placement, a grid-restricted A* router, and an optional
//! cellular-automaton smoothing pass.

pub mod bsp;
pub mod cellular;
pub mod doors;
pub mod dungeon;
pub mod grid;
pub mod map;
pub mod pathfinding;
pub mod rooms;

pub use bsp::tree::{BspNode, BspTree, NodeId};
pub use bsp::{partition, SplitPolicy};
pub use cellular::{
    cleanup, generate_cellular_dungeon, iterate_cellular_dungeon, lock_routes, seed_from_dungeon,
    CellularMap, CellularMapPoint,
};
pub use doors::{place_doors, Direction, Door, RoomDoors};
pub use dungeon::{generate_dungeon, generate_dungeon_with_rng, Dungeon, GenerationError};
pub use grid::build_grid;
pub use map::{Map, MapPoint};
pub use pathfinding::{a_star, get_routes};
pub use rooms::{place_rooms, RoomSizing};
