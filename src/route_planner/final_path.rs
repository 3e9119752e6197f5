use crate::errors::RoutePlannerError;
use crate::model::RouteGraph;
use super::{Route, SearchTree};


/// Construct the final route by walking the parent chain from the goal node
/// back to the start node
/// Raw distance is accumulated edge by edge and multiplied by the graph's
/// metric scale to obtain the real world distance
/// tree: search state produced by the driver
/// goal_index: index of the goal node in the tree
pub(crate) fn final_path<G: RouteGraph>(graph: &G, tree: &SearchTree<G::NodeId>, goal_index: usize) -> Result<Route<G::NodeId>, RoutePlannerError>
{

    let mut nodes = Vec::new();
    let mut distance = 0.0;
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        if let Some((node, &(parent_index, _))) = tree.get_index(current_index) {
            // the start node has no parent and contributes no distance
            if let Some((parent, _)) = tree.get_index(parent_index) {
                distance += graph.distance(*node, *parent);
            }
            nodes.push(*node);
            current_index = parent_index;
        } else {
            return Err(RoutePlannerError::SearchExhausted);
        }
    }

    // The walk runs goal to start, so reverse to put the start node first
    nodes.reverse();

    if nodes.is_empty() {
        return Err(RoutePlannerError::SearchExhausted);
    }

    Ok(Route {
        nodes,
        distance: distance * graph.metric_scale(),
    })
}
