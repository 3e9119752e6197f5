//! Route planning modules in Rust
//!
//! A* shortest path search over a road network graph: input coordinates are
//! resolved to their closest nodes, the search walks the graph through the
//! [`model::RouteGraph`] boundary and returns the cost minimal route along
//! with its real world distance.
//!
//! ```
//! use waypath::{RoadNetwork, RoutePlanner};
//! use waypath::geometry::Point;
//!
//! let mut map = RoadNetwork::new(1000.0);
//! let a = map.add_node(Point { x: 0.0, y: 0.0 }).unwrap();
//! let b = map.add_node(Point { x: 1.0, y: 0.0 }).unwrap();
//! map.add_edge(a, b);
//!
//! // Coordinates are percentages of the map bounding box
//! let planner = RoutePlanner::new(&map, 0.0, 0.0, 100.0, 0.0).unwrap();
//! let route = planner.plan().unwrap();
//!
//! assert_eq!(route.nodes, vec![a, b]);
//! assert!((route.distance - 1000.0).abs() < 1e-6);
//! ```

pub mod errors;
pub mod geometry;
pub mod model;
pub mod route_planner;
mod collections;

pub use model::{RoadNetwork, RouteGraph};
pub use route_planner::{Route, RoutePlanner};
