/// Moore neighborhood of a cell, clamped to the inclusive bounding box
/// `(tl_x, tl_y) ..= (br_x, br_y)`. Up to 8 neighbors, 5 on an edge,
/// 3 in a corner.
pub fn neighbors(
    (x, y): (i32, i32),
    (tl_x, tl_y): (i32, i32),
    (br_x, br_y): (i32, i32),
) -> Vec<(i32, i32)> {
    let mut v = Vec::new();

    if x > tl_x {
        v.push((x - 1, y));

        if y > tl_y {
            v.push((x - 1, y - 1));
        }

        if y < br_y {
            v.push((x - 1, y + 1));
        }
    }

    if x < br_x {
        v.push((x + 1, y));

        if y > tl_y {
            v.push((x + 1, y - 1));
        }

        if y < br_y {
            v.push((x + 1, y + 1));
        }
    }

    if y > tl_y {
        v.push((x, y - 1));
    }

    if y < br_y {
        v.push((x, y + 1));
    }

    v
}

/// Von Neumann (4-connected) neighborhood of a cell, clamped to the
/// inclusive bounding box `(tl_x, tl_y) ..= (br_x, br_y)`.
pub fn orthogonal_neighbors(
    (x, y): (i32, i32),
    (tl_x, tl_y): (i32, i32),
    (br_x, br_y): (i32, i32),
) -> Vec<(i32, i32)> {
    let mut v = Vec::new();

    if x > tl_x {
        v.push((x - 1, y));
    }

    if x < br_x {
        v.push((x + 1, y));
    }

    if y > tl_y {
        v.push((x, y - 1));
    }

    if y < br_y {
        v.push((x, y + 1));
    }

    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_neighbors_away_from_bounds() {
        let nbrs = neighbors((1, 1), (0, 0), (2, 2));
        assert_eq!(nbrs.len(), 8);
    }

    #[test]
    fn five_neighbors_on_each_edge() {
        assert_eq!(neighbors((1, 0), (0, 0), (2, 2)).len(), 5);
        assert_eq!(neighbors((1, 2), (0, 0), (2, 2)).len(), 5);
        assert_eq!(neighbors((0, 1), (0, 0), (2, 2)).len(), 5);
        assert_eq!(neighbors((2, 1), (0, 0), (2, 2)).len(), 5);
    }

    #[test]
    fn three_neighbors_in_a_corner() {
        assert_eq!(neighbors((0, 0), (0, 0), (2, 2)).len(), 3);
        assert_eq!(neighbors((2, 2), (0, 0), (2, 2)).len(), 3);
    }

    #[test]
    fn orthogonal_neighbors_clamp_to_bounds() {
        assert_eq!(orthogonal_neighbors((1, 1), (0, 0), (2, 2)).len(), 4);
        assert_eq!(orthogonal_neighbors((0, 1), (0, 0), (2, 2)).len(), 3);
        assert_eq!(orthogonal_neighbors((0, 0), (0, 0), (2, 2)).len(), 2);
    }

    #[test]
    fn neighbors_never_include_the_cell_itself() {
        for nbrs in [
            neighbors((1, 1), (0, 0), (2, 2)),
            orthogonal_neighbors((1, 1), (0, 0), (2, 2)),
        ] {
            assert!(!nbrs.contains(&(1, 1)));
        }
    }
}
