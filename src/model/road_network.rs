use crate::errors::RoutePlannerError;
use crate::geometry::Point;
use super::RouteGraph;

use kdtree::KdTree;
use kdtree::distance::squared_euclidean as kt_squared_euclidean;


/// In-memory road network
/// Nodes live in an arena with adjacency lists for the road segments,
/// positions are indexed on a kd-tree for closest node lookups
pub struct RoadNetwork {
    nodes: Vec<Point>,
    adjacency: Vec<Vec<usize>>,
    tree: KdTree<f64, usize, [f64; 2]>, // stores position -> index in nodes
    metric_scale: f64,
}

impl RoadNetwork {

    /// Create an empty network
    /// metric_scale converts normalized path distance to real world units
    pub fn new(metric_scale: f64) -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
            tree: KdTree::new(2),
            metric_scale,
        }
    }

    /// Add a node at a normalized position and return its id
    pub fn add_node(&mut self, position: Point) -> Result<usize, RoutePlannerError> {
        let id = self.nodes.len();
        self.tree.add([position.x, position.y], id)?;
        self.nodes.push(position);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Connect two nodes with a two-way road segment
    /// Both ids must have been returned by add_node
    pub fn add_edge(&mut self, a: usize, b: usize) {
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
    }

    /// Number of nodes in the network
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl RouteGraph for RoadNetwork {
    type NodeId = usize;

    fn closest_node(&self, x: f64, y: f64) -> Result<usize, RoutePlannerError> {
        // tree ranks candidates on squared euclidean distance - nearest
        // ordering is the same as with the true distance
        let found = self.tree.nearest(&[x, y], 1, &kt_squared_euclidean)?;

        match found.first() {
            Some(&(ref _distance, &id)) => Ok(id),
            None => Err(RoutePlannerError::ClosestNodeNotFound),
        }
    }

    fn neighbors(&self, node: usize) -> Vec<usize> {
        self.adjacency.get(node).cloned().unwrap_or_default()
    }

    fn position(&self, node: usize) -> Point {
        self.nodes[node].clone()
    }

    fn metric_scale(&self) -> f64 {
        self.metric_scale
    }
}
