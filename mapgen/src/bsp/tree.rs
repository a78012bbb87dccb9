use rltk::Rect;

pub type NodeId = usize;

/// One node of the space-partition tree. Nodes never change area after
/// creation; a node either is a leaf or has exactly two children whose
/// areas tile it.
#[derive(Clone, Debug)]
pub struct BspNode {
    pub area: Rect,
    room: Option<Rect>,
    children: Option<(NodeId, NodeId)>,
}

impl BspNode {
    /// Panics on negative coordinates or dimensions below 1, a
    /// precondition violation rather than a recoverable error.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> BspNode {
        assert!(x >= 0 && y >= 0, "x and y have to be at least 0");
        assert!(width >= 1 && height >= 1, "width and height have to be at least 1");

        BspNode {
            area: Rect::with_size(x, y, width, height),
            room: None,
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        self.children
    }

    pub fn room(&self) -> Option<Rect> {
        self.room
    }
}

/// Arena-backed binary space partition tree. Child links are node
/// indices instead of boxed nodes so construction and traversal run on
/// an explicit work stack, deep trees never touch the call stack.
#[derive(Clone, Debug)]
pub struct BspTree {
    nodes: Vec<BspNode>,
}

impl BspTree {
    pub fn new(width: i32, height: i32) -> BspTree {
        BspTree {
            nodes: vec![BspNode::new(0, 0, width, height)],
        }
    }

    pub fn root(&self) -> NodeId {
        0
    }

    pub fn node(&self, id: NodeId) -> &BspNode {
        &self.nodes[id]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Attaches two children to a leaf. The left child is stored first
    /// and stays first for every traversal. Panics if the node already
    /// has children.
    pub fn add_children(&mut self, parent: NodeId, left: BspNode, right: BspNode) -> (NodeId, NodeId) {
        assert!(self.nodes[parent].is_leaf(), "too many children");

        let left_id = self.nodes.len();
        self.nodes.push(left);
        let right_id = self.nodes.len();
        self.nodes.push(right);
        self.nodes[parent].children = Some((left_id, right_id));

        (left_id, right_id)
    }

    pub fn set_room(&mut self, id: NodeId, room: Rect) {
        self.nodes[id].room = Some(room);
    }

    /// All leaf ids in left-subtree-before-right-subtree order. Room
    /// and door placement depend on this ordering being stable.
    pub fn leaves(&self) -> Vec<NodeId> {
        let mut leaves = Vec::new();
        let mut stack = vec![self.root()];

        while let Some(id) = stack.pop() {
            match self.nodes[id].children {
                None => leaves.push(id),
                Some((left, right)) => {
                    // Right below left so the left subtree pops first.
                    stack.push(right);
                    stack.push(left);
                }
            }
        }

        leaves
    }

    pub fn leaf_areas(&self) -> Vec<Rect> {
        self.leaves().iter().map(|id| self.nodes[*id].area).collect()
    }
}
