use std::error::Error;
use std::fmt;

use rltk::{console, Point, RandomNumberGenerator, Rect};

use crate::bsp::tree::BspTree;
use crate::bsp::{partition, SplitPolicy};
use crate::doors::{place_doors, RoomDoors};
use crate::grid::build_grid;
use crate::map::Map;
use crate::pathfinding::get_routes;
use crate::rooms::{place_rooms, RoomSizing};

/// Everything one generation run produces. Immutable once returned;
/// the caller owns it for rendering.
#[derive(Debug)]
pub struct Dungeon {
    pub map: Map,
    pub tree: BspTree,
    pub rooms: Vec<Rect>,
    pub doors: Vec<RoomDoors>,
    pub routes: Vec<Vec<Point>>,
    pub pathfinding_start: Point,
}

/// Rejected parameters, reported before any stage runs. Partial or
/// degenerate geometry later in the pipeline is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    MapTooSmall { width: i32, height: i32 },
    GridTooCoarse { grid_size: i32, width: i32, height: i32 },
    GridTooFine { grid_size: i32 },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            GenerationError::MapTooSmall { width, height } => write!(
                f,
                "map of {}x{} is too small, both dimensions have to be at least 100",
                width, height
            ),
            GenerationError::GridTooCoarse { grid_size, width, height } => write!(
                f,
                "grid size {} exceeds a quarter of the {}x{} map",
                grid_size, width, height
            ),
            GenerationError::GridTooFine { grid_size } => {
                write!(f, "grid size {} has to be at least 1", grid_size)
            }
        }
    }
}

impl Error for GenerationError {}

fn validate(width: i32, height: i32, grid_size: i32) -> Result<(), GenerationError> {
    if grid_size < 1 {
        return Err(GenerationError::GridTooFine { grid_size });
    }

    if width < 100 || height < 100 {
        return Err(GenerationError::MapTooSmall { width, height });
    }

    if grid_size * 4 > width || grid_size * 4 > height {
        return Err(GenerationError::GridTooCoarse { grid_size, width, height });
    }

    Ok(())
}

/// Runs the whole pipeline with a caller-supplied random source, which
/// makes generation reproducible from a seed.
pub fn generate_dungeon_with_rng(
    width: i32,
    height: i32,
    grid_size: i32,
    rng: &mut RandomNumberGenerator,
) -> Result<Dungeon, GenerationError> {
    validate(width, height, grid_size)?;

    let mut tree = partition(width, height, SplitPolicy::Grid { grid_size }, rng);
    let mut map = Map::new(width, height);

    let rooms = place_rooms(&mut tree, &mut map, grid_size, RoomSizing::Inset, rng);
    build_grid(&mut map, grid_size);
    let doors = place_doors(&mut map, &rooms, grid_size, rng);
    let routes = get_routes(&mut map, &doors);

    let pathfinding_start = rooms
        .first()
        .map(|room| Point::new(room.x1, room.y1))
        .unwrap_or_else(Point::zero);

    console::log(format!(
        "generated {}x{} dungeon: {} rooms, {} routes",
        width,
        height,
        rooms.len(),
        routes.len()
    ));

    Ok(Dungeon {
        map,
        tree,
        rooms,
        doors,
        routes,
        pathfinding_start,
    })
}

/// Partition, rooms, grid, doors, routes - one call, fresh entropy.
pub fn generate_dungeon(
    width: i32,
    height: i32,
    grid_size: i32,
) -> Result<Dungeon, GenerationError> {
    let mut rng = RandomNumberGenerator::new();
    generate_dungeon_with_rng(width, height, grid_size, &mut rng)
}
