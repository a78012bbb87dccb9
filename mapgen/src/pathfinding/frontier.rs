/// One queued cell with its path cost estimate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrontierNode {
    pub x: i32,
    pub y: i32,
    pub priority: i32,
}

/// Array-backed binary min-heap keyed by `priority`. Ties break in an
/// unspecified order. `push` and `pop` are both `O(log n)`.
pub struct PriorityFrontier {
    values: Vec<FrontierNode>,
}

impl PriorityFrontier {
    pub fn new() -> PriorityFrontier {
        PriorityFrontier { values: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn push(&mut self, x: i32, y: i32, priority: i32) {
        self.values.push(FrontierNode { x, y, priority });
        self.move_up();
    }

    /// Removes and returns the node with the smallest priority.
    pub fn pop(&mut self) -> Option<FrontierNode> {
        if self.values.is_empty() {
            return None;
        }

        let last = self.values.len() - 1;
        self.values.swap(0, last);
        let smallest = self.values.pop();
        self.move_down();

        smallest
    }

    /// Bubbles the last value up until the heap invariant holds.
    fn move_up(&mut self) {
        let mut index = self.values.len() - 1;

        while index > 0 {
            let parent = (index - 1) / 2;
            if self.values[parent].priority > self.values[index].priority {
                self.values.swap(parent, index);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Sinks the first value down until the heap invariant holds.
    fn move_down(&mut self) {
        let mut current = 0;

        loop {
            let left = 2 * current + 1;
            let right = 2 * current + 2;
            let mut smallest = current;

            if left < self.values.len()
                && self.values[left].priority < self.values[smallest].priority
            {
                smallest = left;
            }

            if right < self.values.len()
                && self.values[right].priority < self.values[smallest].priority
            {
                smallest = right;
            }

            if smallest == current {
                break;
            }

            self.values.swap(current, smallest);
            current = smallest;
        }
    }
}

impl Default for PriorityFrontier {
    fn default() -> Self {
        PriorityFrontier::new()
    }
}
