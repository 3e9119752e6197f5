
pub mod search;
mod final_path;
mod frontier;

use crate::collections::FxIndexMap;
use crate::errors::RoutePlannerError;
use crate::model::RouteGraph;
use search::a_star;

use tracing::debug;


/// Type alias for the search state accumulated during one session
/// N: node identifier owned by the graph
/// The tuple contains (parent_index, g) where:
/// - parent_index is the index of the parent entry in the map, usize::MAX
///   marks the start node
/// - g is the cost from the start node along the discovered path
/// Presence in the map marks a node as discovered
pub type SearchTree<N> = FxIndexMap<N, (usize, f64)>;


/// Ordered node sequence from start to goal along with the total traversed
/// distance in real world units
#[derive(Clone, Debug, PartialEq)]
pub struct Route<N> {
    pub nodes: Vec<N>,
    pub distance: f64,
}


/// One routing session between two coordinate pairs
/// Input coordinates arrive as percentages in [0, 100] of the map bounding
/// box and are normalized before node resolution
pub struct RoutePlanner<'a, G: RouteGraph> {
    graph: &'a G,
    start: G::NodeId,
    goal: G::NodeId,
}

impl<'a, G: RouteGraph> RoutePlanner<'a, G> {

    /// Validate the input coordinates and resolve both endpoints to their
    /// closest graph nodes
    pub fn new(graph: &'a G, start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> Result<Self, RoutePlannerError> {

        for coordinate in [start_x, start_y, end_x, end_y] {
            if !(0.0..=100.0).contains(&coordinate) {
                return Err(RoutePlannerError::InvalidCoordinates);
            }
        }

        // convert percentage inputs to normalized map coordinates
        let start = graph.closest_node(start_x * 0.01, start_y * 0.01)?;
        let goal = graph.closest_node(end_x * 0.01, end_y * 0.01)?;
        debug!(?start, ?goal, "resolved route endpoints");

        Ok(Self { graph, start, goal })
    }

    /// Run the A* search between the resolved endpoints
    /// Scratch state lives inside the call, so a session can be re-run and
    /// the graph can serve other sessions at the same time
    pub fn plan(&self) -> Result<Route<G::NodeId>, RoutePlannerError> {
        a_star(self.graph, self.start, self.goal)
    }

    /// Node resolved for the start coordinates
    pub fn start(&self) -> G::NodeId {
        self.start
    }

    /// Node resolved for the goal coordinates
    pub fn goal(&self) -> G::NodeId {
        self.goal
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::RoadNetwork;

    /// Unit square network, perimeter edges only
    fn square_network() -> RoadNetwork {
        let mut network = RoadNetwork::new(1.0);
        let a = network.add_node(Point { x: 0.0, y: 0.0 }).unwrap();
        let b = network.add_node(Point { x: 1.0, y: 0.0 }).unwrap();
        let c = network.add_node(Point { x: 0.0, y: 1.0 }).unwrap();
        let d = network.add_node(Point { x: 1.0, y: 1.0 }).unwrap();
        network.add_edge(a, b);
        network.add_edge(a, c);
        network.add_edge(b, d);
        network.add_edge(c, d);
        network
    }

    #[test]
    fn test_rejects_out_of_range_coordinates() {
        let network = square_network();

        for (sx, sy, ex, ey) in [
            (-1.0, 0.0, 100.0, 100.0),
            (0.0, 100.5, 100.0, 100.0),
            (0.0, 0.0, 101.0, 100.0),
            (0.0, 0.0, 100.0, -0.1),
            (f64::NAN, 0.0, 100.0, 100.0),
        ] {
            let result = RoutePlanner::new(&network, sx, sy, ex, ey);
            assert!(matches!(result, Err(RoutePlannerError::InvalidCoordinates)));
        }
    }

    #[test]
    fn test_resolution_fails_on_empty_network() {
        let network = RoadNetwork::new(1.0);

        let result = RoutePlanner::new(&network, 0.0, 0.0, 100.0, 100.0);

        assert!(matches!(result, Err(RoutePlannerError::ClosestNodeNotFound)));
    }

    #[test]
    fn test_plans_route_from_percent_coordinates() {
        let network = square_network();

        // opposite corners of the bounding box
        let planner = RoutePlanner::new(&network, 0.0, 0.0, 100.0, 100.0).unwrap();
        assert_eq!(planner.start(), 0);
        assert_eq!(planner.goal(), 3);

        let route = planner.plan().unwrap();
        assert_eq!(route.nodes.first(), Some(&0));
        assert_eq!(route.nodes.last(), Some(&3));
        assert_eq!(route.nodes.len(), 3);
    }

    #[test]
    fn test_sessions_are_independent() {
        let network = square_network();

        // two sessions over the same graph, then the first one re-run
        let first = RoutePlanner::new(&network, 0.0, 0.0, 100.0, 100.0).unwrap();
        let second = RoutePlanner::new(&network, 0.0, 0.0, 100.0, 100.0).unwrap();

        let route_a = first.plan().unwrap();
        let route_b = second.plan().unwrap();
        let route_c = first.plan().unwrap();

        assert_eq!(route_a, route_b);
        assert_eq!(route_a, route_c);
    }
}
