//! End-to-end pipeline tests: partition -> rooms -> grid -> doors ->
//! routes, plus the cellular smoothing pass on top of a finished
//! dungeon. Everything runs on seeded generators so failures are
//! reproducible.

use rltk::{Point, RandomNumberGenerator};

use mapgen::{
    generate_dungeon_with_rng, iterate_cellular_dungeon, lock_routes, partition,
    seed_from_dungeon, CellularMapPoint, Dungeon, MapPoint, SplitPolicy,
};

/// The far corner of the last placed room, the spot the route chain
/// has to reach from the pathfinding start.
fn last_room_far_corner(dungeon: &Dungeon) -> Point {
    let last = dungeon.rooms.last().expect("dungeon without rooms");
    Point::new(last.x2 - 1, last.y2 - 1)
}

fn assert_fully_connected(dungeon: &Dungeon) {
    let reachable = dungeon.map.find_reachable_points(dungeon.pathfinding_start);
    let far_corner = last_room_far_corner(dungeon);
    assert!(
        reachable.contains(&far_corner),
        "far corner {:?} of the last room is not reachable from {:?}",
        far_corner,
        dungeon.pathfinding_start
    );
}

#[test]
fn every_grid_size_yields_a_connected_dungeon() {
    for grid_size in (5..=50).step_by(5) {
        let mut rng = RandomNumberGenerator::seeded(100 + grid_size as u64);
        let dungeon = generate_dungeon_with_rng(200, 200, grid_size, &mut rng).unwrap();
        assert!(!dungeon.rooms.is_empty());
        assert_fully_connected(&dungeon);
    }
}

#[test]
fn every_map_size_yields_a_connected_dungeon() {
    for size in (100..=2000).step_by(100) {
        let mut rng = RandomNumberGenerator::seeded(size as u64);
        let dungeon = generate_dungeon_with_rng(size, size, 20, &mut rng).unwrap();
        assert!(!dungeon.rooms.is_empty());
        assert_fully_connected(&dungeon);
    }
}

#[test]
fn rectangular_maps_work_the_same_as_square_ones() {
    for (width, height) in [(300, 100), (100, 300), (500, 200)] {
        let mut rng = RandomNumberGenerator::seeded((width * height) as u64);
        let dungeon = generate_dungeon_with_rng(width, height, 10, &mut rng).unwrap();
        assert!(!dungeon.rooms.is_empty());
        assert_fully_connected(&dungeon);
    }
}

#[test]
fn routes_are_walkable_and_marked_on_the_map() {
    let mut rng = RandomNumberGenerator::seeded(77);
    let dungeon = generate_dungeon_with_rng(400, 400, 20, &mut rng).unwrap();

    assert!(dungeon.routes.iter().any(|route| !route.is_empty()));
    for route in &dungeon.routes {
        for pair in route.windows(2) {
            let step = (pair[0].x - pair[1].x).abs() + (pair[0].y - pair[1].y).abs();
            assert_eq!(step, 1, "routes have to be 4-connected");
        }
        for point in route {
            assert_eq!(dungeon.map.at(point.x, point.y), MapPoint::Road);
        }
    }
}

#[test]
fn smoothing_a_dungeon_preserves_its_structure() {
    let mut rng = RandomNumberGenerator::seeded(55);
    let dungeon = generate_dungeon_with_rng(300, 300, 15, &mut rng).unwrap();

    let mut cellular = seed_from_dungeon(&dungeon.map, 0.45, &mut rng);
    lock_routes(&mut cellular, &dungeon.routes);

    for _ in 0..3 {
        cellular = iterate_cellular_dungeon(&cellular, 5, 4);
    }

    for y in 0..dungeon.map.height {
        for x in 0..dungeon.map.width {
            if matches!(
                dungeon.map.at(x, y),
                MapPoint::Room | MapPoint::Door | MapPoint::Road
            ) {
                assert_eq!(cellular.at(x, y), CellularMapPoint::LockedRoom);
            }
        }
    }
}

#[test]
fn large_generation_completes() {
    let mut rng = RandomNumberGenerator::seeded(4242);
    let dungeon = generate_dungeon_with_rng(2000, 2000, 20, &mut rng).unwrap();
    assert!(dungeon.rooms.len() > 10);
    assert_fully_connected(&dungeon);
}

/// Structure-only stress bound for the partitioner; run with
/// `cargo test -- --ignored`.
#[test]
#[ignore]
fn partitioner_handles_extreme_areas() {
    let (width, height) = (100_000, 100_000);
    let mut rng = RandomNumberGenerator::seeded(9);
    let tree = partition(width, height, SplitPolicy::Grid { grid_size: 20 }, &mut rng);

    let total: i64 = tree
        .leaf_areas()
        .iter()
        .map(|a| a.width() as i64 * a.height() as i64)
        .sum();
    assert_eq!(total, width as i64 * height as i64);
}
