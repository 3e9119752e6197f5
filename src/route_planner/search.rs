use crate::errors::RoutePlannerError;
use crate::model::RouteGraph;
use super::final_path::final_path;
use super::frontier::{Frontier, FrontierEntry};
use super::{Route, SearchTree};

use tracing::debug;


/// Find the cost minimal route between two graph nodes using A* search
/// https://en.wikipedia.org/wiki/A*_search_algorithm
/// The straight line distance to the goal serves as the heuristic - it is
/// admissible and consistent because edge costs are Euclidean distances in
/// the same normalized units
pub fn a_star<G: RouteGraph>(graph: &G, start: G::NodeId, goal: G::NodeId) -> Result<Route<G::NodeId>, RoutePlannerError> {

    // Build the search tree - terminates when the goal is extracted
    let (tree, goal_index) = build_search_tree(graph, start, goal);

    // Return the reconstructed route
    match goal_index {
        Some(goal_index) => final_path(graph, &tree, goal_index),
        None => Err(RoutePlannerError::SearchExhausted),
    }
}


/// Traverse the graph from the start node, alternating neighbor expansion
/// and frontier extraction until the goal comes off the frontier
/// Returns the search tree along with the tree index of the goal node, or
/// None when the frontier runs dry before the goal is reached
fn build_search_tree<G: RouteGraph>(graph: &G, start: G::NodeId, goal: G::NodeId) -> (SearchTree<G::NodeId>, Option<usize>) {

    // Open list - discovered nodes that still need to be expanded,
    // ordered by f = g + h
    let mut frontier: Frontier<G::NodeId> = Frontier::new();

    // Discovered nodes with their parent index and g cost
    // Membership in the tree is what keeps a node from entering the
    // frontier a second time
    let mut tree: SearchTree<G::NodeId> = SearchTree::default();

    // The start node is discovered before the loop begins
    let mut current = start;
    let mut current_index = tree.insert_full(start, (usize::MAX, 0.0)).0;
    let mut current_g = 0.0;

    while current != goal {

        // Expand the current node: discover all of its unvisited neighbors
        for neighbor in graph.neighbors(current) {

            // the graph is not required to pre-filter, so discovered
            // neighbors are skipped here
            if tree.contains_key(&neighbor) {
                continue;
            }

            let g_cost = current_g + graph.distance(current, neighbor);
            let h_cost = graph.distance(neighbor, goal);

            // First discovery binds the parent and g cost for good - no
            // relaxation happens if a cheaper path surfaces later
            let index = tree.insert_full(neighbor, (current_index, g_cost)).0;
            frontier.insert(FrontierEntry {
                node: neighbor,
                index,
                g_cost,
                f_cost: g_cost + h_cost,
            });
        }

        // Extract the most promising candidate as the next current node
        match frontier.extract_min() {
            Some(entry) => {
                current = entry.node;
                current_index = entry.index;
                current_g = entry.g_cost;
            }
            None => {
                debug!(discovered = tree.len(), "frontier exhausted before reaching the goal");
                return (tree, None);
            }
        }
    }

    debug!(discovered = tree.len(), "goal reached");
    (tree, Some(current_index))
}
