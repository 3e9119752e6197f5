
#[derive(Debug)]
pub enum RoutePlannerError {
    InvalidCoordinates, // Input coordinate outside the [0, 100] percentage range
    ClosestNodeNotFound, // Coordinate resolution found no node in the graph
    SearchExhausted, // Frontier emptied before the goal was reached - goal unreachable
    KdTreeError(String),
}


impl From<kdtree::ErrorKind> for RoutePlannerError {
    fn from(error: kdtree::ErrorKind) -> Self {
        RoutePlannerError::KdTreeError(error.to_string())
    }
}
