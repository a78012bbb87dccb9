pub mod tree;

use rltk::RandomNumberGenerator;

use tree::{BspNode, BspTree};

/// The two historical stop/split strategies, kept as explicitly named
/// policies because their minimum-size guarantees differ.
#[derive(Clone, Copy, Debug)]
pub enum SplitPolicy {
    /// Stop splitting once neither dimension exceeds `6 * grid_size`.
    Grid { grid_size: i32 },
    /// Stop splitting once `width * height < min_area * multiplier`.
    Area { min_area: i32, multiplier: f32 },
}

impl SplitPolicy {
    fn should_split(&self, width: i32, height: i32) -> bool {
        match *self {
            SplitPolicy::Grid { grid_size } => {
                width > grid_size * 6 || height > grid_size * 6
            }
            SplitPolicy::Area { min_area, multiplier } => {
                width as f64 * height as f64 >= min_area as f64 * multiplier as f64
            }
        }
    }

    /// Half-open range the split offset is drawn from, along the axis
    /// of length `length` while the other axis has length `cross`.
    fn split_range(&self, length: i32, cross: i32, vertical: bool) -> (i32, i32) {
        match *self {
            SplitPolicy::Grid { grid_size } => {
                // The vertical bound is one short of the horizontal
                // one; both guarantee children at least one cell wide.
                if vertical {
                    (grid_size * 2, length - 1)
                } else {
                    (grid_size * 2, length)
                }
            }
            SplitPolicy::Area { min_area, .. } => {
                let minimum = (min_area + cross - 1) / cross;
                (minimum.max(1), length)
            }
        }
    }
}

/// Builds a BSP tree over a `width` x `height` rectangle by splitting
/// leaves until `policy` stops them. Splits run off an explicit work
/// stack, so arbitrarily deep trees are fine.
pub fn partition(
    width: i32,
    height: i32,
    policy: SplitPolicy,
    rng: &mut RandomNumberGenerator,
) -> BspTree {
    let mut tree = BspTree::new(width, height);
    let mut stack = vec![tree.root()];

    while let Some(id) = stack.pop() {
        let area = tree.node(id).area;
        let (x, y, w, h) = (area.x1, area.y1, area.width(), area.height());

        if !policy.should_split(w, h) {
            continue;
        }

        // Split along the longer axis to keep regions roughly square.
        let vertical = w >= h;
        let (min_split, max_split) = if vertical {
            policy.split_range(w, h, true)
        } else {
            policy.split_range(h, w, false)
        };

        // A degenerate range means the node cannot be split without
        // violating minimum sizes; it stays a leaf.
        if min_split >= max_split {
            continue;
        }

        let split = rng.range(min_split, max_split);
        let (left, right) = if vertical {
            (
                BspNode::new(x, y, split, h),
                BspNode::new(x + split, y, w - split, h),
            )
        } else {
            (
                BspNode::new(x, y, w, split),
                BspNode::new(x, y + split, w, h - split),
            )
        };

        let (left_id, right_id) = tree.add_children(id, left, right);
        stack.push(right_id);
        stack.push(left_id);
    }

    tree
}
